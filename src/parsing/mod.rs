//! Sequence loading.
//!
//! - **FASTA** (plain, gzip, multi-member gzip): [`fasta::load_fasta`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use phage_matcher::parsing::fasta::load_fasta;
//! use std::path::Path;
//!
//! let phages = load_fasta(Path::new("phages.fna.gz")).unwrap();
//! for phage in phages.iter() {
//!     println!("{}: {} bp", phage.header, phage.len());
//! }
//! ```

pub mod fasta;
