//! Compression statistics.
//!
//! Observable behavior for a single compression call: sizes, bit counts,
//! and code-length spread. Collected by the encoder and reported by the
//! CLI; nothing here feeds back into encoding.
//!
//! # Thread Safety
//!
//! `CompressionStats` is a plain value returned per call. Concurrent
//! compressions each get their own instance; there is nothing to share.

/// Statistics for one compression call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionStats {
    /// Bytes in the input buffer
    pub input_bytes: u64,

    /// Bytes in the packed output buffer
    pub output_bytes: u64,

    /// Meaningful bits in the output (excludes final-byte padding)
    pub payload_bits: u64,

    /// Number of distinct symbols in the input
    pub distinct_symbols: usize,

    /// Shortest assigned code, in bits
    pub min_code_bits: usize,

    /// Longest assigned code, in bits
    pub max_code_bits: usize,
}

impl CompressionStats {
    /// Compressed size as a fraction of the input size.
    ///
    /// Returns 0.0 for empty input. Can exceed 1.0: incompressible input
    /// grows, since every symbol still needs at least one bit.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Fraction of the input size saved (negative when output grew).
    pub fn space_saving(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            1.0 - self.compression_ratio()
        }
    }

    /// Zero bits appended to complete the final byte (0-7).
    pub fn padding_bits(&self) -> u64 {
        self.output_bytes * 8 - self.payload_bits
    }

    /// Mean code length over the input, in bits per symbol.
    pub fn mean_code_bits(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.payload_bits as f64 / self.input_bytes as f64
        }
    }

    /// Render a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "=== Compression Summary ===\n\
             Input:  {} bytes\n\
             Output: {} bytes ({} payload bits, {} padding bits)\n\
             Ratio: {:.1}% (saving {:.1}%)\n\
             Symbols: {} distinct, codes {}-{} bits, {:.2} bits/symbol mean\n",
            self.input_bytes,
            self.output_bytes,
            self.payload_bits,
            self.padding_bits(),
            self.compression_ratio() * 100.0,
            self.space_saving() * 100.0,
            self.distinct_symbols,
            self.min_code_bits,
            self.max_code_bits,
            self.mean_code_bits(),
        )
    }

    /// Print the summary to stdout.
    pub fn print_summary(&self) {
        print!("{}", self.summary());
    }

    /// Export as a simple key=value text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "input_bytes={}\n\
             output_bytes={}\n\
             payload_bits={}\n\
             padding_bits={}\n\
             distinct_symbols={}\n\
             compression_ratio={:.4}\n",
            self.input_bytes,
            self.output_bytes,
            self.payload_bits,
            self.padding_bits(),
            self.distinct_symbols,
            self.compression_ratio(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompressionStats {
        CompressionStats {
            input_bytes: 1000,
            output_bytes: 750,
            payload_bits: 5995,
            distinct_symbols: 12,
            min_code_bits: 2,
            max_code_bits: 7,
        }
    }

    #[test]
    fn test_compression_ratio() {
        assert_eq!(sample().compression_ratio(), 0.75);
    }

    #[test]
    fn test_space_saving() {
        assert_eq!(sample().space_saving(), 0.25);
    }

    #[test]
    fn test_padding_bits() {
        assert_eq!(sample().padding_bits(), 5);
    }

    #[test]
    fn test_empty_input_ratios() {
        let stats = CompressionStats {
            input_bytes: 0,
            output_bytes: 0,
            payload_bits: 0,
            distinct_symbols: 0,
            min_code_bits: 0,
            max_code_bits: 0,
        };
        assert_eq!(stats.compression_ratio(), 0.0);
        assert_eq!(stats.space_saving(), 0.0);
        assert_eq!(stats.mean_code_bits(), 0.0);
    }

    #[test]
    fn test_export_text() {
        let text = sample().export_text();
        assert!(text.contains("input_bytes=1000"));
        assert!(text.contains("output_bytes=750"));
        assert!(text.contains("padding_bits=5"));
        assert!(text.contains("compression_ratio=0.7500"));
    }
}
