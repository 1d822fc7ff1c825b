//! Rolling 2-bit k-mer encoder.
//!
//! Bases map A=0, C=1, G=2, T=3 (case-insensitive). The forward value grows at
//! the low end, the reverse-complement value at the high end, both updated in
//! place as the window slides. Any other byte is packed as `A` but suppresses
//! every window that contains it.
//!
//! Emitted values are normalized so that short k-mers still spread over the
//! most significant byte of a 40-bit-or-wider key: for `k < 20` the value is
//! shifted left by the missing prefix bits and the shifted-out low bits are
//! copied back in. The mapping is injective for a fixed `k`.

use crate::core::types::{KmerLength, KmerMode};
use crate::kmer::filter::KmerFilter;

/// Marker for bytes that are not one of `ACGTacgt`
const INVALID: u8 = 0xFF;

/// Number of low-order bases that never need to reach the prefix byte
const SUFFIX_LEN: i32 = 16;

/// Minimum number of varying bits required above the suffix
const PREFIX_BITS: i32 = 8;

/// ASCII to 2-bit code, [`INVALID`] for everything else.
pub static BASE_CODES: [u8; 256] = {
    let mut table = [INVALID; 256];
    table[b'A' as usize] = 0;
    table[b'a' as usize] = 0;
    table[b'C' as usize] = 1;
    table[b'c' as usize] = 1;
    table[b'G' as usize] = 2;
    table[b'g' as usize] = 2;
    table[b'T' as usize] = 3;
    table[b't' as usize] = 3;
    table
};

/// 2-bit code of `base`, or `None` for an ambiguous base
#[inline]
#[must_use]
pub fn base_code(base: u8) -> Option<u8> {
    match BASE_CODES[base as usize] {
        INVALID => None,
        code => Some(code),
    }
}

/// Shift and mask applied to every emitted k-mer of length `k`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Normalization {
    shift: u32,
    tail_mask: u64,
}

impl Normalization {
    fn for_length(k: KmerLength) -> Self {
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let prefix_bits = (k.get() as i32 - SUFFIX_LEN) * 2;
        if prefix_bits < PREFIX_BITS {
            #[allow(clippy::cast_sign_loss)]
            let shift = (PREFIX_BITS - prefix_bits) as u32;
            Self {
                shift,
                tail_mask: (1u64 << shift) - 1,
            }
        } else {
            Self {
                shift: 0,
                tail_mask: 0,
            }
        }
    }

    #[inline]
    fn apply(self, kmer: u64) -> u64 {
        (kmer << self.shift) | (kmer & self.tail_mask)
    }
}

/// Normalize a raw packed k-mer of length `k` the way the encoder does
#[must_use]
pub fn normalize(kmer: u64, k: KmerLength) -> u64 {
    Normalization::for_length(k).apply(kmer)
}

/// Encode every window of `bases` as a k-mer.
///
/// Yields `(kmer, position)` pairs in increasing position order for windows
/// whose value passes `filter`. A sequence shorter than `k` yields nothing.
/// Calling again with the same arguments restarts the stream.
pub fn encode<F: KmerFilter>(
    bases: &[u8],
    k: KmerLength,
    mode: KmerMode,
    filter: F,
) -> KmerIter<'_, F> {
    KmerIter::new(bases, k, mode, filter)
}

/// Lazy k-mer stream over one sequence; see [`encode`].
#[derive(Debug, Clone)]
pub struct KmerIter<'a, F> {
    bases: &'a [u8],
    k: usize,
    mode: KmerMode,
    filter: F,
    mask: u64,
    reverse_shift: u32,
    normalization: Normalization,
    next_index: usize,
    forward: u64,
    reverse: u64,
    suppressed: usize,
}

impl<'a, F: KmerFilter> KmerIter<'a, F> {
    pub fn new(bases: &'a [u8], k: KmerLength, mode: KmerMode, filter: F) -> Self {
        let k_len = k.get();
        let mask = if k_len == 32 {
            u64::MAX
        } else {
            (1u64 << (2 * k_len)) - 1
        };
        #[allow(clippy::cast_possible_truncation)]
        let reverse_shift = ((k_len - 1) * 2) as u32;

        Self {
            bases,
            k: k_len,
            mode,
            filter,
            mask,
            reverse_shift,
            normalization: Normalization::for_length(k),
            next_index: 0,
            forward: 0,
            reverse: 0,
            suppressed: 0,
        }
    }

    #[inline]
    fn select(&self) -> u64 {
        match self.mode {
            KmerMode::Forward => self.forward,
            KmerMode::Reverse => self.reverse,
            KmerMode::Canonical => self.forward.min(self.reverse),
        }
    }
}

impl<F: KmerFilter> Iterator for KmerIter<'_, F> {
    type Item = (u64, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_index < self.bases.len() {
            let i = self.next_index;
            self.next_index += 1;

            // Still filling the first window
            let priming = i + 1 < self.k;

            let code = base_code(self.bases[i]).unwrap_or_else(|| {
                self.suppressed = if priming { i + 1 } else { self.k };
                0
            });

            self.forward = ((self.forward << 2) | u64::from(code)) & self.mask;
            self.reverse = (self.reverse >> 2) | (u64::from(3 - code) << self.reverse_shift);

            if priming {
                continue;
            }
            if self.suppressed > 0 {
                self.suppressed -= 1;
                continue;
            }

            let kmer = self.normalization.apply(self.select());
            if self.filter.accept(kmer) {
                return Some((kmer, i + 1 - self.k));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_ends = self.bases.len().saturating_sub(self.next_index.max(self.k - 1));
        (0, Some(remaining_ends))
    }
}

/// Reverse complement of a nucleotide string. Non-ACGT bytes become `N`.
#[must_use]
pub fn reverse_complement(bases: &[u8]) -> Vec<u8> {
    bases
        .iter()
        .rev()
        .map(|&b| match b {
            b'A' => b'T',
            b'a' => b't',
            b'C' => b'G',
            b'c' => b'g',
            b'G' => b'C',
            b'g' => b'c',
            b'T' => b'A',
            b't' => b'a',
            _ => b'N',
        })
        .collect()
}
