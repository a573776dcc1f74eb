//! Configuration for the huffpress command-line tool.
//!
//! Handles parsing command-line arguments and filling in defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: with no input files it
//! generates a deterministic sample file and compresses that, so a bare
//! `huffpress` run always demonstrates the encoder.

use std::path::PathBuf;

/// Complete configuration for a compression run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input files to compress (empty = generate a sample)
    pub inputs: Vec<PathBuf>,

    /// Suffix appended to the input file stem for the output path
    pub suffix: String,

    /// Size of the generated sample when no inputs are given
    pub sample_bytes: usize,

    /// Seed for sample generation
    pub seed: u64,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the per-file statistics summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// Bare arguments are input file paths. If --seed is not provided, a
    /// time-based seed is used for sample generation (printed so runs can
    /// be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut inputs = Vec::new();
        let mut suffix: Option<String> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut print_config = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--suffix" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--suffix requires a value".to_string());
                    }
                    suffix = Some(args[i].clone());
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes =
                        Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                arg if arg.starts_with("--") => {
                    return Err(format!("unknown argument: {}", arg));
                }
                path => {
                    inputs.push(PathBuf::from(path));
                }
            }
            i += 1;
        }

        // Time-based seed unless pinned explicitly
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            inputs,
            suffix: suffix.unwrap_or_else(|| "_compressed".to_string()),
            sample_bytes: sample_bytes.unwrap_or(64 * 1024),
            seed,
            print_config,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        if self.inputs.is_empty() {
            println!("Inputs: (generate sample, {} bytes)", self.sample_bytes);
            println!("Seed: {}", self.seed);
        } else {
            println!("Inputs: {} file(s)", self.inputs.len());
            for path in &self.inputs {
                println!("  {}", path.display());
            }
        }
        println!("Output suffix: {}", self.suffix);
        println!();
    }
}

fn print_help() {
    println!("huffpress: static Huffman file compressor");
    println!();
    println!("Compresses each input file into a sibling <stem><suffix>.huff file");
    println!("holding raw packed bits (no header, not self-describing).");
    println!();
    println!("USAGE:");
    println!("    huffpress [OPTIONS] [FILES...]");
    println!();
    println!("OPTIONS:");
    println!("    --suffix <S>         Output name suffix (default: _compressed)");
    println!("    --sample-bytes <N>   Generated sample size when no files given (default: 65536)");
    println!("    --seed <N>           Seed for sample generation (default: time-based)");
    println!("    --print-config       Print resolved configuration");
    println!("    --no-stats           Don't print compression statistics");
    println!("    --help, -h           Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpress notes.txt logs.txt      # compress two files");
    println!("    huffpress                         # generate and compress a sample");
    println!("    huffpress --seed 42 --print-config");
    println!();
}
