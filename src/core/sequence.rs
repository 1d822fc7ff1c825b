use std::ops::Range;

/// A borrowed view of one loaded sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceView<'a> {
    /// Index of the sequence within its set
    pub id: usize,
    /// Full definition line without the leading `>`
    pub header: &'a str,
    pub bases: &'a [u8],
}

impl SequenceView<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

/// An immutable collection of sequences backed by a single base buffer.
///
/// Records are appended while loading and never modified afterwards; all
/// consumers borrow [`SequenceView`]s into the shared buffer.
#[derive(Debug, Clone, Default)]
pub struct SequenceSet {
    headers: Vec<String>,
    spans: Vec<Range<usize>>,
    bases: Vec<u8>,
}

impl SequenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Line terminators in `bases` are dropped.
    pub fn push(&mut self, header: impl Into<String>, bases: &[u8]) {
        let start = self.bases.len();
        self.bases
            .extend(bases.iter().copied().filter(|&b| b != b'\n' && b != b'\r'));
        self.spans.push(start..self.bases.len());
        self.headers.push(header.into());
    }

    pub fn get(&self, id: usize) -> Option<SequenceView<'_>> {
        let span = self.spans.get(id)?;
        Some(SequenceView {
            id,
            header: &self.headers[id],
            bases: &self.bases[span.clone()],
        })
    }

    /// Header of the sequence at `id`, or `""` if out of range
    pub fn header(&self, id: usize) -> &str {
        self.headers.get(id).map_or("", String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = SequenceView<'_>> + '_ {
        self.spans
            .iter()
            .zip(&self.headers)
            .enumerate()
            .map(|(id, (span, header))| SequenceView {
                id,
                header,
                bases: &self.bases[span.clone()],
            })
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of bases across all records
    pub fn total_bases(&self) -> usize {
        self.bases.len()
    }
}
