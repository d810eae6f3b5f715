// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detents: fractional resting heights for a draggable sheet.
//!
//! A [`Detent`] is a resting height expressed as a fraction of the container
//! height. The three built-in detents have fixed fractions; custom detents
//! carry a caller-supplied fraction that is clamped into
//! [`Detent::MIN_FRACTION`]`..=`[`Detent::MAX_FRACTION`] at construction.
//!
//! The free functions in this module operate over plain slices of detents and
//! never fail: an empty slice resolves to [`Detent::MEDIUM`], and a missing
//! neighbor is reported as `None`.
//!
//! ```
//! use understory_sheet::detent::{self, Detent};
//!
//! let detents = [Detent::LARGE, Detent::SMALL, Detent::MEDIUM];
//! assert_eq!(detent::closest(0.35, &detents), Detent::SMALL);
//! assert_eq!(
//!     detent::next_larger(Detent::SMALL, &detents),
//!     Some(Detent::MEDIUM)
//! );
//! assert_eq!(Detent::custom(1.5).fraction(), 1.0);
//! ```

use alloc::vec::Vec;

/// The kind tag of a [`Detent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetentKind {
    /// A quarter of the container.
    Small,
    /// Half of the container.
    Medium,
    /// Nearly the full container.
    Large,
    /// A caller-supplied fraction.
    Custom,
}

/// One resting height for a sheet, as a fraction of the container height.
///
/// Two detents are equal when both their kind and their fraction match, so a
/// custom detent at `0.5` is not equal to [`Detent::MEDIUM`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detent {
    kind: DetentKind,
    fraction: f64,
}

// The fraction is never NaN: `custom` normalizes it.
impl Eq for Detent {}

impl Detent {
    /// Smallest fraction a detent may have.
    pub const MIN_FRACTION: f64 = 0.1;
    /// Largest fraction a detent may have.
    pub const MAX_FRACTION: f64 = 1.0;

    /// The built-in small detent (`0.25`).
    pub const SMALL: Self = Self {
        kind: DetentKind::Small,
        fraction: 0.25,
    };
    /// The built-in medium detent (`0.5`).
    pub const MEDIUM: Self = Self {
        kind: DetentKind::Medium,
        fraction: 0.5,
    };
    /// The built-in large detent (`0.9`).
    pub const LARGE: Self = Self {
        kind: DetentKind::Large,
        fraction: 0.9,
    };

    /// Creates a custom detent.
    ///
    /// The fraction is clamped into `[0.1, 1.0]`. A NaN fraction resolves to
    /// [`Self::MIN_FRACTION`].
    #[must_use]
    pub fn custom(fraction: f64) -> Self {
        let fraction = if fraction.is_nan() {
            Self::MIN_FRACTION
        } else {
            fraction.clamp(Self::MIN_FRACTION, Self::MAX_FRACTION)
        };
        Self {
            kind: DetentKind::Custom,
            fraction,
        }
    }

    /// Returns the kind tag of this detent.
    #[must_use]
    pub fn kind(self) -> DetentKind {
        self.kind
    }

    /// Returns `true` for detents built with [`Detent::custom`].
    #[must_use]
    pub fn is_custom(self) -> bool {
        self.kind == DetentKind::Custom
    }

    /// Returns the fraction of the container height this detent occupies.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.fraction
    }

    /// Returns the resting height of this detent inside a container.
    ///
    /// No rounding is applied; callers snap to their pixel grid if needed.
    #[must_use]
    pub fn height(self, container_height: f64) -> f64 {
        self.fraction * container_height
    }
}

/// Returns the detents sorted by ascending fraction.
///
/// The sort is stable: detents with equal fractions keep their input order.
#[must_use]
pub fn sorted(detents: &[Detent]) -> Vec<Detent> {
    let mut out = detents.to_vec();
    out.sort_by(|a, b| a.fraction.total_cmp(&b.fraction));
    out
}

/// Returns the detent whose fraction is nearest to `target`.
///
/// Ties resolve to the smaller detent, as does a NaN target. An empty slice
/// resolves to [`Detent::MEDIUM`].
#[must_use]
pub fn closest(target: f64, detents: &[Detent]) -> Detent {
    let mut best: Option<(Detent, f64)> = None;
    for d in sorted(detents) {
        let distance = (d.fraction - target).abs();
        let nearer = match best {
            Some((_, best_distance)) => distance < best_distance,
            None => true,
        };
        if nearer {
            best = Some((d, distance));
        }
    }
    best.map_or(Detent::MEDIUM, |(d, _)| d)
}

/// Returns the smallest detent strictly larger than `from`.
///
/// Returns `None` when `from` is the largest detent or is not in `detents`.
#[must_use]
pub fn next_larger(from: Detent, detents: &[Detent]) -> Option<Detent> {
    if !detents.contains(&from) {
        return None;
    }
    sorted(detents)
        .into_iter()
        .find(|d| d.fraction > from.fraction)
}

/// Returns the largest detent strictly smaller than `from`.
///
/// Returns `None` when `from` is the smallest detent or is not in `detents`.
#[must_use]
pub fn next_smaller(from: Detent, detents: &[Detent]) -> Option<Detent> {
    if !detents.contains(&from) {
        return None;
    }
    sorted(detents)
        .into_iter()
        .rev()
        .find(|d| d.fraction < from.fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: [Detent; 3] = [Detent::SMALL, Detent::MEDIUM, Detent::LARGE];

    #[test]
    fn built_in_fractions_are_fixed() {
        assert_eq!(Detent::SMALL.fraction(), 0.25);
        assert_eq!(Detent::MEDIUM.fraction(), 0.5);
        assert_eq!(Detent::LARGE.fraction(), 0.9);
        assert_eq!(Detent::LARGE.kind(), DetentKind::Large);
        assert!(!Detent::LARGE.is_custom());
    }

    #[test]
    fn custom_fraction_is_clamped() {
        assert_eq!(Detent::custom(0.05).fraction(), 0.1);
        assert_eq!(Detent::custom(1.5).fraction(), 1.0);
        assert_eq!(Detent::custom(0.7).fraction(), 0.7);
        assert_eq!(Detent::custom(-3.0).fraction(), 0.1);
        assert_eq!(Detent::custom(f64::INFINITY).fraction(), 1.0);
        assert_eq!(Detent::custom(f64::NAN).fraction(), 0.1);
        assert!(Detent::custom(0.7).is_custom());
    }

    #[test]
    fn equality_uses_kind_and_clamped_fraction() {
        assert_eq!(Detent::custom(0.05), Detent::custom(0.1));
        assert_eq!(Detent::custom(2.0), Detent::custom(1.0));
        assert_ne!(Detent::custom(0.5), Detent::MEDIUM);
        assert_ne!(Detent::custom(0.3), Detent::custom(0.4));
    }

    #[test]
    fn height_scales_linearly() {
        assert_eq!(Detent::MEDIUM.height(1000.0), 500.0);
        assert_eq!(Detent::SMALL.height(1000.0), 250.0);
        assert_eq!(Detent::MEDIUM.height(0.0), 0.0);
        assert_eq!(Detent::custom(0.75).height(200.0), 150.0);
    }

    #[test]
    fn sorted_orders_by_fraction() {
        let detents = [Detent::LARGE, Detent::SMALL, Detent::MEDIUM];
        assert_eq!(sorted(&detents), FULL.to_vec());
    }

    #[test]
    fn sorted_is_stable_for_equal_fractions() {
        let a = Detent::custom(0.9);
        let detents = [Detent::LARGE, Detent::SMALL, a];
        assert_eq!(sorted(&detents), [Detent::SMALL, Detent::LARGE, a].to_vec());
        let detents = [a, Detent::LARGE];
        assert_eq!(sorted(&detents), [a, Detent::LARGE].to_vec());
    }

    #[test]
    fn closest_picks_nearest_fraction() {
        assert_eq!(closest(0.5, &FULL), Detent::MEDIUM);
        assert_eq!(closest(0.35, &FULL), Detent::SMALL);
        assert_eq!(closest(0.65, &FULL), Detent::MEDIUM);
        assert_eq!(closest(0.8, &FULL), Detent::LARGE);
        assert_eq!(closest(-4.0, &FULL), Detent::SMALL);
        assert_eq!(closest(7.0, &FULL), Detent::LARGE);
    }

    #[test]
    fn closest_ties_resolve_to_smaller() {
        // 0.375 is exactly 0.125 away from both small and medium.
        assert_eq!(closest(0.375, &FULL), Detent::SMALL);
        assert_eq!(
            closest(0.375, &[Detent::MEDIUM, Detent::SMALL]),
            Detent::SMALL
        );
    }

    #[test]
    fn closest_nan_target_resolves_to_smallest() {
        assert_eq!(closest(f64::NAN, &FULL), Detent::SMALL);
    }

    #[test]
    fn closest_on_empty_falls_back_to_medium() {
        assert_eq!(closest(0.0, &[]), Detent::MEDIUM);
        assert_eq!(closest(0.95, &[]), Detent::MEDIUM);
    }

    #[test]
    fn member_is_its_own_closest_match() {
        let detents = [
            Detent::SMALL,
            Detent::custom(0.33),
            Detent::MEDIUM,
            Detent::custom(0.75),
            Detent::LARGE,
            Detent::custom(1.0),
        ];
        for d in detents {
            assert_eq!(closest(d.fraction(), &detents), d);
        }
    }

    #[test]
    fn neighbors_in_full_range() {
        assert_eq!(next_larger(Detent::SMALL, &FULL), Some(Detent::MEDIUM));
        assert_eq!(next_larger(Detent::LARGE, &FULL), None);
        assert_eq!(next_smaller(Detent::SMALL, &FULL), None);
        assert_eq!(next_smaller(Detent::LARGE, &FULL), Some(Detent::MEDIUM));
    }

    #[test]
    fn neighbors_of_absent_detent_are_none() {
        let detents = [Detent::MEDIUM, Detent::LARGE];
        assert_eq!(next_larger(Detent::SMALL, &detents), None);
        assert_eq!(next_smaller(Detent::custom(0.95), &detents), None);
        assert_eq!(next_larger(Detent::MEDIUM, &[]), None);
    }

    #[test]
    fn neighbors_skip_equal_fractions() {
        let twin = Detent::custom(0.5);
        let detents = [Detent::SMALL, Detent::MEDIUM, twin, Detent::LARGE];
        assert_eq!(next_larger(Detent::MEDIUM, &detents), Some(Detent::LARGE));
        assert_eq!(next_smaller(twin, &detents), Some(Detent::SMALL));
    }
}
