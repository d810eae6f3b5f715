// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detent sets: the ordered, de-duplicated detents one sheet may rest at.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::detent::{self, Detent};

/// An ordered, de-duplicated collection of [`Detent`]s.
///
/// Insertion order is preserved; duplicates are dropped on insert with the
/// first occurrence winning. A set may be empty, but a
/// [`SheetController`](crate::SheetController) never holds an empty set: it
/// substitutes [`DetentSet::medium_only`].
///
/// ```
/// use understory_sheet::{Detent, DetentSet};
///
/// let set = DetentSet::from_iter([Detent::LARGE, Detent::SMALL, Detent::LARGE]);
/// assert_eq!(set.as_slice(), &[Detent::LARGE, Detent::SMALL]);
/// assert_eq!(set.smallest(), Some(Detent::SMALL));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetentSet {
    detents: SmallVec<[Detent; 4]>,
}

impl DetentSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `[medium, large]`.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_iter([Detent::MEDIUM, Detent::LARGE])
    }

    /// `[small, medium, large]`.
    #[must_use]
    pub fn full_range() -> Self {
        Self::from_iter([Detent::SMALL, Detent::MEDIUM, Detent::LARGE])
    }

    /// `[medium]`.
    #[must_use]
    pub fn medium_only() -> Self {
        Self::from_iter([Detent::MEDIUM])
    }

    /// `[large]`.
    #[must_use]
    pub fn large_only() -> Self {
        Self::from_iter([Detent::LARGE])
    }

    /// Appends a detent, returning `false` if it was already present.
    pub fn insert(&mut self, detent: Detent) -> bool {
        if self.contains(detent) {
            return false;
        }
        self.detents.push(detent);
        true
    }

    /// Removes a detent, returning `true` if it was present.
    pub fn remove(&mut self, detent: Detent) -> bool {
        match self.detents.iter().position(|d| *d == detent) {
            Some(index) => {
                self.detents.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the set contains `detent`.
    #[must_use]
    pub fn contains(&self, detent: Detent) -> bool {
        self.detents.contains(&detent)
    }

    /// Returns the number of detents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.detents.len()
    }

    /// Returns `true` if the set holds no detents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detents.is_empty()
    }

    /// Returns the detents in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Detent] {
        &self.detents
    }

    /// Returns the detents in ascending fraction order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Detent> {
        detent::sorted(&self.detents)
    }

    /// Returns the detent with the smallest fraction.
    #[must_use]
    pub fn smallest(&self) -> Option<Detent> {
        self.sorted().first().copied()
    }

    /// Returns the detent with the largest fraction.
    ///
    /// Among equal fractions the one inserted last wins, matching the tail of
    /// [`DetentSet::sorted`].
    #[must_use]
    pub fn largest(&self) -> Option<Detent> {
        self.sorted().last().copied()
    }

    /// See [`detent::closest`].
    #[must_use]
    pub fn closest(&self, target: f64) -> Detent {
        detent::closest(target, &self.detents)
    }

    /// See [`detent::next_larger`].
    #[must_use]
    pub fn next_larger(&self, from: Detent) -> Option<Detent> {
        detent::next_larger(from, &self.detents)
    }

    /// See [`detent::next_smaller`].
    #[must_use]
    pub fn next_smaller(&self, from: Detent) -> Option<Detent> {
        detent::next_smaller(from, &self.detents)
    }
}

impl FromIterator<Detent> for DetentSet {
    fn from_iter<I: IntoIterator<Item = Detent>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Detent> for DetentSet {
    fn extend<I: IntoIterator<Item = Detent>>(&mut self, iter: I) {
        for detent in iter {
            self.insert(detent);
        }
    }
}

impl From<&[Detent]> for DetentSet {
    fn from(detents: &[Detent]) -> Self {
        detents.iter().copied().collect()
    }
}

impl<const N: usize> From<[Detent; N]> for DetentSet {
    fn from(detents: [Detent; N]) -> Self {
        detents.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(
            DetentSet::standard().as_slice(),
            &[Detent::MEDIUM, Detent::LARGE]
        );
        assert_eq!(
            DetentSet::full_range().as_slice(),
            &[Detent::SMALL, Detent::MEDIUM, Detent::LARGE]
        );
        assert_eq!(DetentSet::medium_only().as_slice(), &[Detent::MEDIUM]);
        assert_eq!(DetentSet::large_only().as_slice(), &[Detent::LARGE]);
    }

    #[test]
    fn duplicates_are_dropped_first_wins() {
        let set = DetentSet::from([
            Detent::LARGE,
            Detent::custom(0.05),
            Detent::LARGE,
            Detent::custom(0.1),
        ]);
        assert_eq!(set.as_slice(), &[Detent::LARGE, Detent::custom(0.1)]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut set = DetentSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Detent::MEDIUM));
        assert!(!set.insert(Detent::MEDIUM));
        assert!(set.contains(Detent::MEDIUM));
        assert!(set.remove(Detent::MEDIUM));
        assert!(!set.remove(Detent::MEDIUM));
        assert!(set.is_empty());
    }

    #[test]
    fn ordering_queries() {
        let set = DetentSet::from([Detent::LARGE, Detent::SMALL, Detent::MEDIUM]);
        assert_eq!(
            set.sorted(),
            [Detent::SMALL, Detent::MEDIUM, Detent::LARGE].to_vec()
        );
        assert_eq!(set.smallest(), Some(Detent::SMALL));
        assert_eq!(set.largest(), Some(Detent::LARGE));
        assert_eq!(set.closest(0.65), Detent::MEDIUM);
        assert_eq!(set.next_larger(Detent::MEDIUM), Some(Detent::LARGE));
        assert_eq!(set.next_smaller(Detent::MEDIUM), Some(Detent::SMALL));
    }

    #[test]
    fn empty_set_queries() {
        let set = DetentSet::new();
        assert_eq!(set.smallest(), None);
        assert_eq!(set.largest(), None);
        assert_eq!(set.closest(0.2), Detent::MEDIUM);
        assert_eq!(set.next_larger(Detent::MEDIUM), None);
    }
}
