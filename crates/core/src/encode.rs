//! Huffman compression entry point.
//!
//! Wires the pipeline together: count frequencies, build the tree, derive
//! the code table, then re-walk the input and pack each symbol's code into
//! the output buffer. Data flows strictly forward; every call allocates its
//! own table, heap, tree, and code table and discards them on return, so
//! calls are independent and safe to run concurrently.
//!
//! The output is raw packed bits: no header, no stored code table, no
//! padding marker. It cannot be decoded without out-of-band knowledge of
//! the code assignment.

use crate::bitio::BitWriter;
use crate::code::CodeTable;
use crate::error::{EncodeError, Result};
use crate::freq::FrequencyTable;
use crate::stats::CompressionStats;
use crate::tree::Tree;

/// Compress a byte buffer into packed Huffman-coded bits.
///
/// # Errors
/// `EncodeError::EmptyInput` if `input` is empty.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    compress_with_stats(input).map(|(packed, _)| packed)
}

/// Compress a byte buffer, also returning per-call statistics.
///
/// # Errors
/// `EncodeError::EmptyInput` if `input` is empty.
pub fn compress_with_stats(input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
    let freqs = FrequencyTable::from_bytes(input);
    let tree = Tree::build(&freqs)?;
    let table = CodeTable::from_tree(&tree)?;

    // The output size is known exactly before packing a single bit.
    let mut total_bits: u64 = 0;
    let mut min_code_bits = usize::MAX;
    let mut max_code_bits = 0;
    for (symbol, code) in table.iter() {
        total_bits += freqs.count(symbol) * code.len() as u64;
        min_code_bits = min_code_bits.min(code.len());
        max_code_bits = max_code_bits.max(code.len());
    }

    let mut writer = BitWriter::with_capacity(((total_bits + 7) / 8) as usize);
    for &byte in input {
        let code = table
            .get(byte)
            .ok_or(EncodeError::MissingCode { symbol: byte })?;
        writer.push_code(code);
    }

    let payload_bits = writer.bit_len() as u64;
    let packed = writer.finish();

    let stats = CompressionStats {
        input_bytes: input.len() as u64,
        output_bytes: packed.len() as u64,
        payload_bits,
        distinct_symbols: freqs.distinct(),
        min_code_bits,
        max_code_bits,
    };

    Ok((packed, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_input_is_rejected() {
        let result = compress(b"");
        assert!(matches!(
            result,
            Err(Error::Encode(EncodeError::EmptyInput))
        ));
    }

    #[test]
    fn test_single_symbol_input() {
        // A -> 0 by convention, so AAAA packs to 0000 plus four pad zeros.
        let (packed, stats) = compress_with_stats(b"AAAA").unwrap();
        assert_eq!(packed, vec![0x00]);
        assert_eq!(stats.payload_bits, 4);
        assert_eq!(stats.padding_bits(), 4);
        assert_eq!(stats.distinct_symbols, 1);
        assert_eq!(stats.min_code_bits, 1);
        assert_eq!(stats.max_code_bits, 1);
    }

    #[test]
    fn test_two_symbol_input() {
        // A=0, B=1 -> stream 0101, padded to 01010000.
        let packed = compress(b"ABAB").unwrap();
        assert_eq!(packed, vec![0b0101_0000]);
    }

    #[test]
    fn test_three_symbol_input() {
        // A:5 B:2 C:1 -> A=1, B=01, C=00.
        // AAAAABBC -> 11111 01 01 00, 11 bits -> 11111010 100 + 5 pad zeros.
        let (packed, stats) = compress_with_stats(b"AAAAABBC").unwrap();
        assert_eq!(packed, vec![0b1111_1010, 0b1000_0000]);
        assert_eq!(stats.payload_bits, 11);
        assert_eq!(stats.padding_bits(), 5);
    }

    #[test]
    fn test_output_length_matches_weighted_code_lengths() {
        let input = b"abracadabra, abracadabra!";
        let freqs = FrequencyTable::from_bytes(input);
        let tree = Tree::build(&freqs).unwrap();
        let table = CodeTable::from_tree(&tree).unwrap();

        let total_bits: u64 = table
            .iter()
            .map(|(s, c)| freqs.count(s) * c.len() as u64)
            .sum();

        let (packed, stats) = compress_with_stats(input).unwrap();
        assert_eq!(stats.payload_bits, total_bits);
        assert_eq!(packed.len() as u64, (total_bits + 7) / 8);
    }

    #[test]
    fn test_full_alphabet_packs_to_one_byte_each() {
        // 256 symbols, one occurrence each: every code is 8 bits.
        let input: Vec<u8> = (0..=255).collect();
        let (packed, stats) = compress_with_stats(&input).unwrap();
        assert_eq!(packed.len(), 256);
        assert_eq!(stats.padding_bits(), 0);
        assert_eq!(stats.min_code_bits, 8);
        assert_eq!(stats.max_code_bits, 8);
    }

    #[test]
    fn test_deterministic_output() {
        let input = b"deterministic output for identical input";
        assert_eq!(compress(input).unwrap(), compress(input).unwrap());
    }

    #[test]
    fn test_skewed_input_compresses() {
        let mut input = vec![b'x'; 10_000];
        input.extend_from_slice(b"rare");
        let (packed, stats) = compress_with_stats(&input).unwrap();
        assert!(packed.len() < input.len() / 4);
        assert!(stats.compression_ratio() < 0.25);
    }
}
