use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::sequence::{SequenceSet, SequenceView};
use crate::core::types::{KmerLength, Occurrence, Strand};
use crate::index::phage_set::PhageKmerSet;
use crate::kmer::codec::encode;

/// Host occurrences of every phage k-mer, keyed by encoded k-mer.
///
/// Each host position is indexed once per strand whose encoding (forward, or
/// reverse complement) is in the phage set. Occurrence lists keep insertion
/// order: host sequences in input order, forward strand before reverse.
#[derive(Debug, Clone)]
pub struct KmerIndex {
    entries: FxHashMap<u64, Vec<Occurrence>>,
    kmer_length: KmerLength,
    occurrences: usize,
}

impl KmerIndex {
    /// Index `hosts`, keeping only k-mers present in `phage_kmers`
    pub fn build(hosts: &SequenceSet, phage_kmers: &PhageKmerSet) -> Self {
        let mut index = Self {
            entries: FxHashMap::default(),
            kmer_length: phage_kmers.kmer_length(),
            occurrences: 0,
        };

        for host in hosts.iter() {
            index.add_sequence(host, phage_kmers);
        }

        debug!(
            keys = index.len(),
            occurrences = index.occurrences,
            "Built host k-mer index"
        );
        index
    }

    fn add_sequence(&mut self, host: SequenceView<'_>, phage_kmers: &PhageKmerSet) {
        let filter = phage_kmers.filter();
        let before = self.occurrences;

        for strand in [Strand::Forward, Strand::Reverse] {
            for (kmer, position) in encode(host.bases, self.kmer_length, strand.mode(), filter) {
                self.entries
                    .entry(kmer)
                    .or_default()
                    .push(Occurrence::new(host.id, position, strand));
                self.occurrences += 1;
            }
        }

        debug!(
            header = host.header,
            length = host.len(),
            occurrences = self.occurrences - before,
            "Indexed host sequence"
        );
    }

    /// Occurrences of `kmer`, empty if it never occurs in a host
    pub fn get(&self, kmer: u64) -> &[Occurrence] {
        self.entries.get(&kmer).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains_key(&self, kmer: u64) -> bool {
        self.entries.contains_key(&kmer)
    }

    pub fn kmer_length(&self) -> KmerLength {
        self.kmer_length
    }

    /// Number of distinct k-mers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences over all keys
    pub fn occurrence_count(&self) -> usize {
        self.occurrences
    }

    /// Iterate over `(kmer, occurrences)` in arbitrary key order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &[Occurrence])> + '_ {
        self.entries.iter().map(|(&kmer, occ)| (kmer, occ.as_slice()))
    }
}
