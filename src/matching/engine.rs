use std::io::{self, Write};

use tracing::{debug, info};

use crate::core::sequence::SequenceSet;
use crate::core::types::{ConfigError, KmerLength};
use crate::index::host::KmerIndex;
use crate::index::phage_set::PhageKmerSet;
use crate::matching::chain::{ChainTracker, Match};
use crate::matching::report::RangeReporter;

/// Configuration for the matching engine
#[derive(Debug, Clone, Default)]
pub struct MatchingConfig {
    /// Exact-match seed length; also the shortest reportable match
    pub kmer_length: KmerLength,
}

impl MatchingConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKmerLength` if `k` is outside `1..=32`.
    pub fn with_kmer_length(k: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            kmer_length: KmerLength::new(k)?,
        })
    }
}

/// Counts describing one matching run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub phage_sequences: usize,
    pub host_sequences: usize,
    /// Distinct forward k-mers over all phages
    pub phage_kmers: usize,
    /// Distinct k-mers in the host index
    pub index_keys: usize,
    /// Strand-tagged host occurrences in the index
    pub index_occurrences: usize,
    /// Match rows written
    pub matches: usize,
}

/// Finds exact, strand-aware matches of phage sequences in host sequences.
///
/// Construction builds the phage k-mer set and the filtered host index; both
/// are read-only afterwards, so any number of phages can be scanned against
/// the same engine.
pub struct MatchingEngine<'a> {
    phages: &'a SequenceSet,
    hosts: &'a SequenceSet,
    phage_kmers: PhageKmerSet,
    index: KmerIndex,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(phages: &'a SequenceSet, hosts: &'a SequenceSet, config: &MatchingConfig) -> Self {
        let phage_kmers = PhageKmerSet::build(phages, config.kmer_length);
        info!(
            sequences = phages.len(),
            kmers = phage_kmers.len(),
            "Collected phage k-mers"
        );

        let index = KmerIndex::build(hosts, &phage_kmers);
        info!(
            sequences = hosts.len(),
            keys = index.len(),
            occurrences = index.occurrence_count(),
            "Indexed host k-mers"
        );

        Self {
            phages,
            hosts,
            phage_kmers,
            index,
        }
    }

    pub fn index(&self) -> &KmerIndex {
        &self.index
    }

    pub fn phage_kmers(&self) -> &PhageKmerSet {
        &self.phage_kmers
    }

    /// All matches of one phage sequence, in finalization order
    pub fn find_matches(&self, phage: &[u8]) -> Vec<Match> {
        ChainTracker::new(&self.index).scan(phage)
    }

    /// Scan every phage and write one row per match to `reporter`.
    ///
    /// Rows follow phage input order; within a phage they follow the order in
    /// which chains were finalized.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the reporter's writer.
    pub fn run<W: Write>(&self, reporter: &mut RangeReporter<W>) -> io::Result<MatchSummary> {
        let mut tracker = ChainTracker::new(&self.index);
        let mut matches = 0;

        for phage in self.phages.iter() {
            let found = tracker.scan(phage.bases);
            debug!(header = phage.header, matches = found.len(), "Scanned phage");

            for m in &found {
                reporter.report(phage.header, self.hosts.header(m.host_sequence_id()), m)?;
            }
            matches += found.len();
        }

        Ok(MatchSummary {
            phage_sequences: self.phages.len(),
            host_sequences: self.hosts.len(),
            phage_kmers: self.phage_kmers.len(),
            index_keys: self.index.len(),
            index_occurrences: self.index.occurrence_count(),
            matches,
        })
    }
}
