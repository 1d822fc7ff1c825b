//! K-mer encoding and filtering.
//!
//! [`codec::encode`] turns a nucleotide buffer into a lazy stream of
//! `(kmer, position)` pairs under a [`KmerMode`](crate::core::types::KmerMode);
//! a [`filter::KmerFilter`] decides which values are emitted.
//!
//! ```rust
//! use phage_matcher::core::types::{KmerLength, KmerMode};
//! use phage_matcher::kmer::codec::encode;
//! use phage_matcher::kmer::filter::AcceptAll;
//!
//! let k = KmerLength::new(4).unwrap();
//! let positions: Vec<usize> = encode(b"ACGTNACGTA", k, KmerMode::Canonical, AcceptAll)
//!     .map(|(_, pos)| pos)
//!     .collect();
//! assert_eq!(positions, vec![0, 5, 6]);
//! ```

pub mod codec;
pub mod filter;
