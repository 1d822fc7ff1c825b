//! # phage-matcher
//!
//! Finds exact, strand-aware nucleotide matches between a set of query
//! genomes (phages) and a set of reference genomes (hosts), the raw evidence
//! used to predict which host a phage infects.
//!
//! Matching is seeded by k-mers packed 2 bits per base. The forward k-mers of
//! all phages form a filter; host positions whose forward or reverse-complement
//! k-mer passes the filter are indexed with their strand. Each phage is then
//! scanned once, chaining consecutive hits that stay adjacent on one host
//! strand into maximal exact matches.
//!
//! ## Example
//!
//! ```rust,no_run
//! use phage_matcher::parsing::fasta::load_fasta;
//! use phage_matcher::{MatchingConfig, MatchingEngine, RangeReporter};
//! use std::path::Path;
//!
//! let phages = load_fasta(Path::new("phages.fna")).unwrap();
//! let hosts = load_fasta(Path::new("hosts.fna.gz")).unwrap();
//!
//! let config = MatchingConfig::with_kmer_length(25).unwrap();
//! let engine = MatchingEngine::new(&phages, &hosts, &config);
//!
//! let mut reporter = RangeReporter::new(std::io::stdout(), config.kmer_length);
//! reporter.write_header("phages.fna", "hosts.fna.gz").unwrap();
//! let summary = engine.run(&mut reporter).unwrap();
//! eprintln!("{} matches", summary.matches);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence storage and shared types
//! - [`kmer`]: K-mer encoding and filters
//! - [`index`]: Phage k-mer set and host occurrence index
//! - [`matching`]: Chain tracking, range reporting and the matching engine
//! - [`parsing`]: FASTA loading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod kmer;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::sequence::{SequenceSet, SequenceView};
pub use crate::core::types::*;
pub use crate::matching::chain::Match;
pub use crate::matching::engine::{MatchSummary, MatchingConfig, MatchingEngine};
pub use crate::matching::report::{MatchRanges, RangeReporter};
