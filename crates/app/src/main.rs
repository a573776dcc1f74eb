//! huffpress: command-line front end for the static Huffman encoder.
//!
//! For each input file: read the full contents, compress, and write the
//! packed bytes unchanged to a sibling path named `<stem><suffix>.huff`.
//! With no input files, a deterministic sample is generated and compressed
//! instead. Core failures are reported per file without classification;
//! the process exits non-zero if any file failed.

mod config;
mod sample;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use huffpress_core::{compress_with_stats, CompressionStats, Result};

use crate::config::Config;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!("run with --help for usage");
            process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let inputs = match resolve_inputs(&config) {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let mut failures = 0;
    for path in &inputs {
        match compress_file(path, &config.suffix) {
            Ok(stats) => {
                if config.print_stats {
                    stats.print_summary();
                }
            }
            Err(err) => {
                eprintln!("{}: compression failed: {}", path.display(), err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}

/// The configured input files, or a freshly written sample when none given.
fn resolve_inputs(config: &Config) -> Result<Vec<PathBuf>> {
    if !config.inputs.is_empty() {
        return Ok(config.inputs.clone());
    }

    let path = PathBuf::from("sample.bin");
    println!(
        "no input files; generating {} byte sample (seed {}) at {}",
        config.sample_bytes,
        config.seed,
        path.display()
    );
    fs::write(&path, sample::generate(config.seed, config.sample_bytes))?;
    Ok(vec![path])
}

/// Compress one file to its sibling output path.
fn compress_file(path: &Path, suffix: &str) -> Result<CompressionStats> {
    let input = fs::read(path)?;
    let (packed, stats) = compress_with_stats(&input)?;

    let out = output_path(path, suffix);
    fs::write(&out, &packed)?;

    println!(
        "{} ({} bytes) -> {} ({} bytes)",
        path.display(),
        input.len(),
        out.display(),
        packed.len()
    );
    Ok(stats)
}

/// Sibling path `<stem><suffix>.huff` next to the input file.
fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());

    let mut out = input.to_path_buf();
    out.set_file_name(format!("{}{}.huff", stem, suffix));
    out
}
