//! Fixed-capacity bit set over node indices.
//!
//! Used as the mark set of the sequential traversal and as the reachable-set view of a
//! [`VisitationResult`](crate::traversal::VisitationResult). Storage is one bit per node,
//! 64 nodes per word.

use std::collections::TryReserveError;

/// A fixed-capacity set of indices in `[0, capacity)`.
///
/// # Examples
///
/// ```rust
/// use parbfs::BitSet;
///
/// let mut set = BitSet::new(100);
/// assert!(set.insert(3));
/// assert!(!set.insert(3));
/// set.insert(64);
///
/// assert_eq!(set.count(), 2);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 64]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl BitSet {
    /// Creates an empty set able to hold indices `0..capacity`.
    ///
    /// # Panics
    ///
    /// Panics if the word storage cannot be allocated. Use [`BitSet::try_new`] for
    /// capacities taken from untrusted input.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        BitSet {
            words: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Creates an empty set, reporting allocation failure instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns the [`TryReserveError`] of the word storage.
    pub fn try_new(capacity: usize) -> Result<Self, TryReserveError> {
        let len = capacity.div_ceil(64);
        let mut words = Vec::new();
        words.try_reserve_exact(len)?;
        words.resize(len, 0);
        Ok(BitSet { words, capacity })
    }

    /// Returns the capacity this set was created with.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if no index is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Sets `index` and returns `true` if it was not set before.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.capacity, "index out of bounds");
        let word = &mut self.words[index / 64];
        let mask = 1u64 << (index % 64);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    /// Returns `true` if `index` is set. Indices beyond the capacity are never set.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity && self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Returns the number of set indices.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns `true` if every index of `self` is also set in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|index| other.contains(index))
    }

    /// Returns an iterator over the set indices in ascending order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the set indices of a [`BitSet`].
pub struct BitSetIter<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.current &= self.current - 1;
        Some(self.word_index * 64 + bit)
    }
}
