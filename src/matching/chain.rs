//! Greedy chaining of consecutive exact k-mer hits.
//!
//! A phage sequence is scanned in forward orientation, one k-mer position at
//! a time. Each host occurrence of the current k-mer either extends an active
//! chain that ended one host position "behind" it on the same sequence and
//! strand, or starts a new chain. Chains not extended at a position can never
//! be extended again and are finalized immediately, so finalized matches come
//! out in lockstep with the scan.

use rustc_hash::FxHashMap;

use crate::core::types::{KmerMode, Occurrence, Strand};
use crate::index::host::KmerIndex;
use crate::kmer::codec::encode;
use crate::kmer::filter::AcceptAll;

/// A chain of consecutive k-mer hits between one phage and one host strand.
///
/// Invariant: `host_start` and `host_last` share sequence and strand, and
/// `host_last` is `phage_last - phage_start` positions away from `host_start`
/// (upwards on the forward strand, downwards on the reverse strand).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// 0-based phage position of the first k-mer
    pub phage_start: usize,
    /// 0-based phage position of the last k-mer
    pub phage_last: usize,
    pub host_start: Occurrence,
    pub host_last: Occurrence,
}

impl Match {
    fn new(position: usize, occurrence: Occurrence) -> Self {
        Self {
            phage_start: position,
            phage_last: position,
            host_start: occurrence,
            host_last: occurrence,
        }
    }

    pub fn host_sequence_id(&self) -> usize {
        self.host_last.sequence_id
    }

    pub fn strand(&self) -> Strand {
        self.host_last.strand
    }

    /// Number of chained k-mers
    pub fn kmer_count(&self) -> usize {
        self.phage_last - self.phage_start + 1
    }
}

/// Tracks the extendable chains of the phage sequence being scanned.
///
/// Active chains stay in creation order; a side table keyed by each chain's
/// last host occurrence resolves an occurrence to the chain it extends.
pub struct ChainTracker<'a> {
    index: &'a KmerIndex,
    active: Vec<Match>,
    by_host_last: FxHashMap<Occurrence, usize>,
}

impl<'a> ChainTracker<'a> {
    pub fn new(index: &'a KmerIndex) -> Self {
        Self {
            index,
            active: Vec::new(),
            by_host_last: FxHashMap::default(),
        }
    }

    /// Scan one phage sequence and return its matches in finalization order
    pub fn scan(&mut self, phage: &[u8]) -> Vec<Match> {
        let mut matches = Vec::new();
        self.scan_with(phage, |m| matches.push(m));
        matches
    }

    /// Scan one phage sequence, passing every match to `emit` as soon as it
    /// is finalized.
    pub fn scan_with<E: FnMut(Match)>(&mut self, phage: &[u8], mut emit: E) {
        self.reset();

        let kmers = encode(phage, self.index.kmer_length(), KmerMode::Forward, AcceptAll);
        for (kmer, position) in kmers {
            self.advance(kmer, position, &mut emit);
        }

        for m in self.active.drain(..) {
            emit(m);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.active.clear();
        self.by_host_last.clear();
    }

    fn advance<E: FnMut(Match)>(&mut self, kmer: u64, position: usize, emit: &mut E) {
        let index = self.index;
        for occurrence in index.get(kmer) {
            if !self.try_extend(position, occurrence) {
                self.active.push(Match::new(position, *occurrence));
            }
        }

        // Anything not touched at this position is complete
        self.active.retain(|m| {
            if m.phage_last == position {
                true
            } else {
                emit(*m);
                false
            }
        });

        self.by_host_last.clear();
        for (slot, m) in self.active.iter().enumerate() {
            self.by_host_last.insert(m.host_last, slot);
        }
    }

    fn try_extend(&mut self, position: usize, occurrence: &Occurrence) -> bool {
        let Some(&slot) = occurrence
            .predecessor()
            .and_then(|previous| self.by_host_last.get(&previous))
        else {
            return false;
        };

        // Skipped phage positions break the chain
        let m = &mut self.active[slot];
        if m.phage_last + 1 != position {
            return false;
        }
        m.phage_last = position;
        m.host_last = *occurrence;
        true
    }
}
