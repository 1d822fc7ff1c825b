//! Command-line interface for phage-matcher.
//!
//! ## Usage
//!
//! ```text
//! # Exact matches of at least 25 bases (default)
//! phage-matcher phages.fna hosts.fna.gz matches.csv
//!
//! # Shorter seeds, with progress details on stderr
//! phage-matcher -k 16 -v phages.fna hosts.fna matches.csv
//! ```
//!
//! The output is a CSV-style table: a `<phage>,<host>` row naming the inputs,
//! then one `<phage header>:<start>-<end>,<host header>:<start>-<end>` row per
//! match, with 1-based inclusive coordinates.

use std::path::PathBuf;

use clap::Parser;

use crate::core::types::DEFAULT_KMER_LENGTH;

pub mod matches;

#[derive(Parser)]
#[command(name = "phage-matcher")]
#[command(version)]
#[command(about = "Find exact, strand-aware k-mer matches between phage and host genomes")]
#[command(
    long_about = "phage-matcher reports every maximal exact match between a set of phage genomes and a set of host genomes.\n\nMatches are seeded by shared k-mers and extended along the host in either orientation, so hits against the reverse complement of a host are found too. Inputs may be plain or gzip-compressed FASTA."
)]
pub struct Cli {
    /// Phage FASTA file (gzipped or not)
    #[arg(required = true)]
    pub phage: PathBuf,

    /// Host FASTA file (gzipped or not)
    #[arg(required = true)]
    pub host: PathBuf,

    /// Output table with all exact matches
    #[arg(required = true)]
    pub output: PathBuf,

    /// Minimum match length (k-mer length, 1-32)
    #[arg(short = 'k', long = "kmer-length", default_value_t = DEFAULT_KMER_LENGTH)]
    pub kmer_length: usize,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}
