use crate::codec::Code;
#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u64) -> u32 {
    n.popcnt() as u32
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u64) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u64, v: u32) -> u64 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u64, v: u32) -> u64 {
    n & ((1 << v) - 1)
}

/// The set of letter codes on the outgoing edges of a lexicon node.
///
/// Because the children of a node are stored contiguously and sorted by code,
/// the rank of a code in the set is also the offset of its child node.
/// Codes 0..64 live in the low word, codes 64..128 in the high word.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet([u64; 2]);

impl LabelSet {
    /// Number of distinct codes a set can hold, codes are `0..CAPACITY`.
    pub const CAPACITY: usize = 128;

    pub fn new() -> LabelSet {
        LabelSet([0; 2])
    }

    fn split(code: Code) -> (usize, u32) {
        ((code / 64) as usize, (code % 64) as u32)
    }

    pub fn contains(&self, code: Code) -> bool {
        if code as usize >= Self::CAPACITY {
            return false;
        }
        let (word, bit) = Self::split(code);
        self.0[word] & (1 << bit) != 0
    }

    /// Add `code`, returns true if it was already present.
    pub fn insert(&mut self, code: Code) -> bool {
        assert!(
            (code as usize) < Self::CAPACITY,
            "letter code {} does not fit a LabelSet",
            code
        );
        let present = self.contains(code);
        let (word, bit) = Self::split(code);
        self.0[word] |= 1 << bit;
        present
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|&w| count_ones(w) as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == [0; 2]
    }

    /// Iterate over the codes in ascending order.
    pub fn iter(&self) -> Codes {
        Codes(self.0)
    }

    /// Return the rank of `code` in the set if present.
    pub fn index_of(&self, code: Code) -> Option<usize> {
        if !self.contains(code) {
            return None;
        }
        let (word, bit) = Self::split(code);
        let below: u32 = self.0[..word].iter().map(|&w| count_ones(w)).sum();
        Some((below + count_ones(zero_highbits(self.0[word], bit))) as usize)
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the codes of a [`LabelSet`].
pub struct Codes([u64; 2]);

impl Iterator for Codes {
    type Item = Code;
    fn next(&mut self) -> Option<Code> {
        for (word, bits) in self.0.iter_mut().enumerate() {
            if *bits != 0 {
                let bit = bits.trailing_zeros();
                *bits &= *bits - 1;
                return Some((word as u32 * 64 + bit) as Code);
            }
        }
        None
    }
}

impl FromIterator<Code> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        let mut set = LabelSet::new();
        for code in iter {
            set.insert(code);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelset() {
        let mut codes = LabelSet::new();
        for &n in &[2, 25, 2, 1] {
            codes.insert(n);
        }
        for &n in &[1, 2, 25] {
            assert!(codes.contains(n));
        }
        assert!(!codes.contains(5));
        assert_eq!(codes.len(), 3);
        assert_eq!(codes.iter().collect::<Vec<_>>(), vec![1, 2, 25]);
    }

    #[test]
    fn test_index() {
        let codes: LabelSet = vec![0u8, 1, 4, 5, 7, 8, 10, 12, 14, 31].into_iter().collect();
        assert_eq!(codes.index_of(0), Some(0));
        assert_eq!(codes.index_of(31), Some(9));
        assert_eq!(codes.index_of(2), None);
        assert_eq!(codes.len(), 10);
        assert_eq!(format!("{:?}", codes), "{0, 1, 4, 5, 7, 8, 10, 12, 14, 31}");
    }

    #[test]
    fn test_high_codes() {
        let codes: LabelSet = vec![3u8, 63, 64, 100, 127].into_iter().collect();
        assert_eq!(codes.len(), 5);
        assert_eq!(codes.index_of(63), Some(1));
        assert_eq!(codes.index_of(64), Some(2));
        assert_eq!(codes.index_of(127), Some(4));
        assert_eq!(codes.index_of(65), None);
        assert!(!codes.contains(200));
        assert_eq!(codes.iter().collect::<Vec<_>>(), vec![3, 63, 64, 100, 127]);
    }

    #[test]
    fn test_zero_highbits() {
        assert_eq!(zero_highbits(0b1111_0010_u64, 5), 0b0001_0010_u64);
    }

    #[test]
    #[should_panic(expected = "does not fit a LabelSet")]
    fn test_insert_overflow() {
        LabelSet::new().insert(128);
    }
}
