//! Core data types for phage/host matching.
//!
//! - [`SequenceSet`] / [`SequenceView`]: loaded sequences, one shared base buffer
//! - [`KmerLength`]: validated k-mer length (`1..=32`)
//! - [`KmerMode`], [`Strand`]: orientation of encoded k-mers and host hits
//! - [`Occurrence`]: a strand-tagged host position stored in the index
//!
//! [`SequenceSet`]: sequence::SequenceSet
//! [`SequenceView`]: sequence::SequenceView
//! [`KmerLength`]: types::KmerLength
//! [`KmerMode`]: types::KmerMode
//! [`Strand`]: types::Strand
//! [`Occurrence`]: types::Occurrence

pub mod sequence;
pub mod types;
