use thiserror::Error;

/// Largest k-mer length that still packs into a `u64` (2 bits per base).
pub const MAX_KMER_LENGTH: usize = 32;

/// Default exact-match seed length
pub const DEFAULT_KMER_LENGTH: usize = 25;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid k-mer length: {0} (must be between 1 and {MAX_KMER_LENGTH})")]
    InvalidKmerLength(usize),
}

/// A validated k-mer length in `1..=32`.
///
/// Every encoder, index and tracker API takes a `KmerLength`, so an invalid
/// length is rejected before any sequence is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KmerLength(usize);

impl KmerLength {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKmerLength` if `k` is outside `1..=32`.
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        if (1..=MAX_KMER_LENGTH).contains(&k) {
            Ok(Self(k))
        } else {
            Err(ConfigError::InvalidKmerLength(k))
        }
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for KmerLength {
    fn default() -> Self {
        Self(DEFAULT_KMER_LENGTH)
    }
}

impl std::fmt::Display for KmerLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which encoding of a window the codec returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KmerMode {
    /// The window as read
    Forward,
    /// The reverse complement of the window
    Reverse,
    /// Numeric minimum of the forward and reverse-complement encodings
    Canonical,
}

/// Orientation of a host occurrence relative to the phage query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Codec mode that produces occurrences on this strand
    #[must_use]
    pub fn mode(self) -> KmerMode {
        match self {
            Self::Forward => KmerMode::Forward,
            Self::Reverse => KmerMode::Reverse,
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// One host position whose k-mer (in the tagged orientation) is in the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    /// Index of the host sequence in its `SequenceSet`
    pub sequence_id: usize,
    /// 0-based start of the k-mer on the host
    pub position: usize,
    pub strand: Strand,
}

impl Occurrence {
    pub fn new(sequence_id: usize, position: usize, strand: Strand) -> Self {
        Self {
            sequence_id,
            position,
            strand,
        }
    }

    /// The occurrence a chain must end on for `self` to extend it: same
    /// sequence and strand, one host position back along the strand.
    ///
    /// Forward chains walk up the host, reverse chains walk down. Returns
    /// `None` for a forward occurrence at position 0.
    #[must_use]
    pub fn predecessor(&self) -> Option<Occurrence> {
        let position = match self.strand {
            Strand::Forward => self.position.checked_sub(1)?,
            Strand::Reverse => self.position.checked_add(1)?,
        };
        Some(Self { position, ..*self })
    }
}
