//! Exact-match chaining and reporting.
//!
//! - [`MatchingEngine`]: builds the phage set and host index, then scans phages
//! - [`ChainTracker`]: per-phage state machine that extends and finalizes chains
//! - [`RangeReporter`]: writes finalized chains as 1-based coordinate ranges
//!
//! ## Chaining
//!
//! Phage k-mers are visited in increasing position order (forward orientation
//! only; strand is resolved on the host side). For each host occurrence of the
//! current k-mer:
//!
//! 1. If an active chain on the same host sequence and strand ended at the
//!    adjacent host position (one up for forward, one down for reverse) at the
//!    previous phage position, the occurrence extends it.
//! 2. Otherwise the occurrence starts a new chain.
//!
//! Chains not extended at a position are finalized; the rest are finalized at
//! the end of the phage. Every chain of at least one k-mer is reported.
//!
//! ## Example
//!
//! ```rust
//! use phage_matcher::core::sequence::SequenceSet;
//! use phage_matcher::{MatchingConfig, MatchingEngine, RangeReporter};
//!
//! let mut phages = SequenceSet::new();
//! phages.push("phage", b"ACGGTCATTGCA");
//! let mut hosts = SequenceSet::new();
//! hosts.push("host", b"TTACGGTCATTGCATT");
//!
//! let config = MatchingConfig::with_kmer_length(6).unwrap();
//! let engine = MatchingEngine::new(&phages, &hosts, &config);
//!
//! let mut reporter = RangeReporter::new(Vec::new(), config.kmer_length);
//! engine.run(&mut reporter).unwrap();
//! let table = String::from_utf8(reporter.finish().unwrap()).unwrap();
//! assert_eq!(table, "phage:1-12,host:3-14\n");
//! ```
//!
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`ChainTracker`]: chain::ChainTracker
//! [`RangeReporter`]: report::RangeReporter

pub mod chain;
pub mod engine;
pub mod report;
