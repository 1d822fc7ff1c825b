//! Phage k-mer set and host occurrence index.
//!
//! The phage set is built first from the forward k-mers of every phage. The
//! host index then records, for each host position and strand, the k-mers that
//! are also in the phage set. Both are built once and read-only afterwards.
//!
//! ```rust
//! use phage_matcher::core::sequence::SequenceSet;
//! use phage_matcher::core::types::KmerLength;
//! use phage_matcher::index::{host::KmerIndex, phage_set::PhageKmerSet};
//!
//! let mut phages = SequenceSet::new();
//! phages.push("phage", b"ACGGTCATTGCA");
//! let mut hosts = SequenceSet::new();
//! hosts.push("host", b"TTACGGTCATTGCATT");
//!
//! let k = KmerLength::new(6).unwrap();
//! let phage_kmers = PhageKmerSet::build(&phages, k);
//! let index = KmerIndex::build(&hosts, &phage_kmers);
//! assert_eq!(index.occurrence_count(), 7);
//! ```

pub mod host;
pub mod phage_set;
