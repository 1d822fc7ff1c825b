//! Conversion of finalized matches into 1-based output ranges.
//!
//! The match table starts with a `<phage path>,<host path>` row followed by
//! one row per match:
//!
//! ```text
//! <phage header>:<start>-<end>,<host header>:<start>-<end>
//! ```

use std::io::{self, Write};

use crate::core::types::{KmerLength, Strand};
use crate::matching::chain::Match;

/// 1-based, inclusive coordinates of a match on the phage and the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRanges {
    pub phage: (usize, usize),
    pub host: (usize, usize),
}

impl MatchRanges {
    /// Ranges covered by `m` for k-mers of length `k`.
    ///
    /// On the reverse strand host positions decrease as the phage advances,
    /// so the host range is written descending: it starts at the far end of
    /// the first k-mer and ends at the last k-mer. A descending host range
    /// therefore marks a reverse-complement match.
    pub fn from_match(m: &Match, k: KmerLength) -> Self {
        let k = k.get();
        let phage = (m.phage_start + 1, m.phage_last + k);
        let host = match m.host_last.strand {
            Strand::Forward => (m.host_start.position + 1, m.host_last.position + k),
            Strand::Reverse => (m.host_start.position + k, m.host_last.position + 1),
        };
        Self { phage, host }
    }
}

/// Writes the match table
pub struct RangeReporter<W: Write> {
    writer: W,
    kmer_length: KmerLength,
    written: usize,
}

impl<W: Write> RangeReporter<W> {
    pub fn new(writer: W, kmer_length: KmerLength) -> Self {
        Self {
            writer,
            kmer_length,
            written: 0,
        }
    }

    /// Write the `<phage path>,<host path>` header row
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_header(&mut self, phage_path: &str, host_path: &str) -> io::Result<()> {
        writeln!(self.writer, "{phage_path},{host_path}")
    }

    /// Write one match row
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn report(&mut self, phage_header: &str, host_header: &str, m: &Match) -> io::Result<()> {
        let ranges = MatchRanges::from_match(m, self.kmer_length);
        writeln!(
            self.writer,
            "{phage_header}:{}-{},{host_header}:{}-{}",
            ranges.phage.0, ranges.phage.1, ranges.host.0, ranges.host.1
        )?;
        self.written += 1;
        Ok(())
    }

    /// Number of match rows written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer
    ///
    /// # Errors
    ///
    /// Returns any error raised while flushing.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Occurrence;

    fn k(len: usize) -> KmerLength {
        KmerLength::new(len).unwrap()
    }

    #[test]
    fn test_forward_ranges() {
        let m = Match {
            phage_start: 0,
            phage_last: 6,
            host_start: Occurrence::new(0, 2, Strand::Forward),
            host_last: Occurrence::new(0, 8, Strand::Forward),
        };
        let ranges = MatchRanges::from_match(&m, k(6));
        assert_eq!(ranges.phage, (1, 12));
        assert_eq!(ranges.host, (3, 14));
    }

    #[test]
    fn test_reverse_ranges_are_swapped() {
        let m = Match {
            phage_start: 0,
            phage_last: 6,
            host_start: Occurrence::new(0, 9, Strand::Reverse),
            host_last: Occurrence::new(0, 3, Strand::Reverse),
        };
        let ranges = MatchRanges::from_match(&m, k(6));
        assert_eq!(ranges.phage, (1, 12));
        assert_eq!(ranges.host, (15, 4));
    }

    #[test]
    fn test_single_kmer_match() {
        let occ = Occurrence::new(3, 40, Strand::Reverse);
        let m = Match {
            phage_start: 5,
            phage_last: 5,
            host_start: occ,
            host_last: occ,
        };
        let ranges = MatchRanges::from_match(&m, k(25));
        assert_eq!(ranges.phage, (6, 30));
        assert_eq!(ranges.host, (65, 41));
    }

    #[test]
    fn test_reporter_reverse_row_is_descending() {
        let m = Match {
            phage_start: 0,
            phage_last: 6,
            host_start: Occurrence::new(0, 9, Strand::Reverse),
            host_last: Occurrence::new(0, 3, Strand::Reverse),
        };

        let mut reporter = RangeReporter::new(Vec::new(), k(6));
        reporter.report("phage", "host", &m).unwrap();
        let out = String::from_utf8(reporter.finish().unwrap()).unwrap();
        assert_eq!(out, "phage:1-12,host:15-4\n");
    }

    #[test]
    fn test_reporter_output() {
        let m = Match {
            phage_start: 2,
            phage_last: 4,
            host_start: Occurrence::new(1, 10, Strand::Forward),
            host_last: Occurrence::new(1, 12, Strand::Forward),
        };

        let mut reporter = RangeReporter::new(Vec::new(), k(4));
        reporter.write_header("phages.fa", "hosts.fa.gz").unwrap();
        reporter.report("NC_001416.1 phage lambda", "chr", &m).unwrap();
        assert_eq!(reporter.written(), 1);

        let out = String::from_utf8(reporter.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "phages.fa,hosts.fa.gz\nNC_001416.1 phage lambda:3-8,chr:11-16\n"
        );
    }
}
