// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunable dismissal policy for a [`SheetController`](crate::SheetController).
///
/// ```
/// use understory_sheet::SheetConfig;
///
/// let config = SheetConfig::default()
///     .with_dismiss_threshold(0.25)
///     .with_backdrop_tap_dismisses(false);
/// assert_eq!(config.dismiss_threshold(), 0.25);
/// assert!(config.drag_to_dismiss());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetConfig {
    dismiss_threshold: f64,
    drag_to_dismiss: bool,
    backdrop_tap_dismisses: bool,
}

impl SheetConfig {
    /// Dismiss once the sheet is dragged below half of its smallest detent.
    pub const DEFAULT_DISMISS_THRESHOLD: f64 = 0.5;

    /// Returns the dismiss threshold ratio.
    ///
    /// A drag that starts at the smallest detent dismisses the sheet when it
    /// ends below `smallest.fraction() * dismiss_threshold`.
    #[must_use]
    pub fn dismiss_threshold(&self) -> f64 {
        self.dismiss_threshold
    }

    /// Returns whether dragging down from the smallest detent may dismiss.
    #[must_use]
    pub fn drag_to_dismiss(&self) -> bool {
        self.drag_to_dismiss
    }

    /// Returns whether a backdrop tap dismisses the sheet.
    #[must_use]
    pub fn backdrop_tap_dismisses(&self) -> bool {
        self.backdrop_tap_dismisses
    }

    /// Sets the dismiss threshold ratio.
    ///
    /// The ratio is clamped into `[0, 1]`; NaN restores
    /// [`Self::DEFAULT_DISMISS_THRESHOLD`]. A ratio of `0` makes drag
    /// dismissal unreachable.
    #[must_use]
    pub fn with_dismiss_threshold(mut self, ratio: f64) -> Self {
        self.dismiss_threshold = if ratio.is_nan() {
            Self::DEFAULT_DISMISS_THRESHOLD
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self
    }

    /// Enables or disables drag-to-dismiss.
    #[must_use]
    pub fn with_drag_to_dismiss(mut self, enabled: bool) -> Self {
        self.drag_to_dismiss = enabled;
        self
    }

    /// Enables or disables backdrop-tap dismissal.
    #[must_use]
    pub fn with_backdrop_tap_dismisses(mut self, enabled: bool) -> Self {
        self.backdrop_tap_dismisses = enabled;
        self
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dismiss_threshold: Self::DEFAULT_DISMISS_THRESHOLD,
            drag_to_dismiss: true,
            backdrop_tap_dismisses: true,
        }
    }
}
