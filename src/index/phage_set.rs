use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::sequence::SequenceSet;
use crate::core::types::{KmerLength, KmerMode};
use crate::kmer::codec::encode;
use crate::kmer::filter::{AcceptAll, SetFilter};

/// Every forward k-mer that occurs in at least one phage sequence.
///
/// Used to restrict the host index to signatures that can start a match.
#[derive(Debug, Clone)]
pub struct PhageKmerSet {
    kmers: FxHashSet<u64>,
    kmer_length: KmerLength,
}

impl PhageKmerSet {
    /// Collect the forward k-mers of all `phages`
    pub fn build(phages: &SequenceSet, kmer_length: KmerLength) -> Self {
        let mut kmers = FxHashSet::default();

        for phage in phages.iter() {
            let before = kmers.len();
            kmers.extend(
                encode(phage.bases, kmer_length, KmerMode::Forward, AcceptAll).map(|(kmer, _)| kmer),
            );
            debug!(
                header = phage.header,
                length = phage.len(),
                new_kmers = kmers.len() - before,
                "Collected phage k-mers"
            );
        }

        Self { kmers, kmer_length }
    }

    /// Filter accepting exactly the k-mers in this set
    pub fn filter(&self) -> SetFilter<'_> {
        SetFilter::new(&self.kmers)
    }

    pub fn contains(&self, kmer: u64) -> bool {
        self.kmers.contains(&kmer)
    }

    pub fn kmer_length(&self) -> KmerLength {
        self.kmer_length
    }

    /// Number of distinct k-mers
    pub fn len(&self) -> usize {
        self.kmers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }
}
