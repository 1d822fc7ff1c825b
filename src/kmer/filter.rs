use rustc_hash::FxHashSet;

/// Decides which encoded k-mers the codec emits
pub trait KmerFilter {
    fn accept(&self, kmer: u64) -> bool;
}

impl<T: KmerFilter + ?Sized> KmerFilter for &T {
    #[inline]
    fn accept(&self, kmer: u64) -> bool {
        (**self).accept(kmer)
    }
}

/// Emits every valid window
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl KmerFilter for AcceptAll {
    #[inline]
    fn accept(&self, _kmer: u64) -> bool {
        true
    }
}

/// Emits only k-mers contained in a precomputed set
#[derive(Debug, Clone, Copy)]
pub struct SetFilter<'a> {
    kmers: &'a FxHashSet<u64>,
}

impl<'a> SetFilter<'a> {
    pub fn new(kmers: &'a FxHashSet<u64>) -> Self {
        Self { kmers }
    }
}

impl KmerFilter for SetFilter<'_> {
    #[inline]
    fn accept(&self, kmer: u64) -> bool {
        self.kmers.contains(&kmer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.accept(0));
        assert!(AcceptAll.accept(u64::MAX));
    }

    #[test]
    fn test_set_filter() {
        let kmers: FxHashSet<u64> = [3, 7].into_iter().collect();
        let filter = SetFilter::new(&kmers);
        assert!(filter.accept(3));
        assert!(filter.accept(7));
        assert!(!filter.accept(4));

        let by_ref = &filter;
        assert!(by_ref.accept(7));
    }
}
