// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bottom-sheet presentation controller.
//!
//! [`SheetController`] owns the presentation state of one sheet: its
//! [`SheetPhase`], the detent it currently rests at, and the live drag
//! offset. The host reports container size, gestures, and animation
//! completion; the controller answers with the detent or height the host
//! should animate toward.
//!
//! ## Lifecycle
//!
//! ```text
//! Hidden --present--> Presenting --presentation_completed--> Presented
//! Presented --drag_began--> Dragging --drag_ended--> Presented | Dismissing
//! Dragging --drag_cancelled--> Presented (pre-drag detent)
//! Presenting | Presented | Dragging --dismiss / backdrop_tapped--> Dismissing
//! Dismissing --dismissal_completed--> Hidden
//! ```
//!
//! ## Drag resolution
//!
//! While dragging, the candidate fraction is
//! `current.fraction() - drag_offset / container_height`; positive offsets
//! move the sheet down. On drag end the sheet dismisses only if it started at
//! the smallest detent and the raw candidate ended below
//! `smallest.fraction() * dismiss_threshold`. Otherwise it snaps to the
//! closest detent, so a drag from a larger detent always lands on a detent
//! first.

use kurbo::{Point, Vec2};

use crate::config::SheetConfig;
use crate::detent::Detent;
use crate::set::DetentSet;
use crate::trace::{debug, trace};

/// Discrete lifecycle state of a sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SheetPhase {
    /// Not shown. Initial and terminal state.
    #[default]
    Hidden,
    /// Entry animation in progress.
    Presenting,
    /// Resting at the current detent.
    Presented,
    /// Following an interactive drag.
    Dragging,
    /// Exit animation in progress.
    Dismissing,
}

impl SheetPhase {
    /// Returns `true` for phases in which the sheet occupies screen space
    /// and can be dismissed.
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Presenting | Self::Presented | Self::Dragging)
    }
}

/// Why a sheet started dismissing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// A drag from the smallest detent ended below the dismiss threshold.
    DragGesture,
    /// The host reported a tap on the backdrop.
    BackdropTap,
    /// The host called [`SheetController::dismiss`].
    Programmatic,
}

/// Result of [`SheetController::drag_ended`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The sheet came to rest at `to`, having started the drag at `from`.
    ///
    /// `from == to` when the drag snapped back.
    Settled {
        /// Detent at drag begin.
        from: Detent,
        /// Detent the sheet now rests at.
        to: Detent,
    },
    /// The drag dismissed the sheet; it is now [`SheetPhase::Dismissing`].
    Dismissed,
}

/// Snapshot of the live presentation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationState {
    /// Detent the sheet rests at, `None` while hidden.
    pub current_detent: Option<Detent>,
    /// Signed drag offset in height units; zero unless dragging.
    pub drag_offset: f64,
    /// Lifecycle phase.
    pub phase: SheetPhase,
}

/// Interactive bottom-sheet state machine.
///
/// ```
/// use understory_sheet::{Detent, DetentSet, DragOutcome, SheetController, SheetPhase};
///
/// let mut sheet = SheetController::new(DetentSet::standard(), 1000.0);
/// sheet.present(Some(Detent::MEDIUM));
/// sheet.presentation_completed();
/// assert_eq!(sheet.target_height(), 500.0);
///
/// // Drag up by 300 units: the sheet tracks the finger...
/// sheet.drag_began();
/// sheet.drag_changed(-300.0);
/// assert_eq!(sheet.target_height(), 800.0);
///
/// // ...and snaps to the closest detent on release.
/// assert_eq!(
///     sheet.drag_ended(),
///     Some(DragOutcome::Settled { from: Detent::MEDIUM, to: Detent::LARGE })
/// );
/// assert_eq!(sheet.phase(), SheetPhase::Presented);
/// ```
#[derive(Clone, Debug)]
pub struct SheetController {
    detents: DetentSet,
    config: SheetConfig,
    container_height: f64,
    phase: SheetPhase,
    current: Option<Detent>,
    drag_offset: f64,
    drag_origin: Option<Point>,
    dismiss_reason: Option<DismissReason>,
    revision: u64,
}

impl SheetController {
    /// Creates a hidden sheet over the given detents and container height.
    ///
    /// An empty detent set is replaced by [`DetentSet::medium_only`].
    #[must_use]
    pub fn new(detents: impl Into<DetentSet>, container_height: f64) -> Self {
        Self {
            detents: non_empty(detents.into()),
            config: SheetConfig::default(),
            container_height: normalize_height(container_height),
            phase: SheetPhase::Hidden,
            current: None,
            drag_offset: 0.0,
            drag_origin: None,
            dismiss_reason: None,
            revision: 0,
        }
    }

    /// Replaces the configuration, builder style.
    #[must_use]
    pub fn with_config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> SheetConfig {
        self.config
    }

    /// Replaces the configuration.
    ///
    /// Takes effect for the next gesture or backdrop tap.
    pub fn set_config(&mut self, config: SheetConfig) {
        self.config = config;
    }

    /// Returns the configured detents.
    #[must_use]
    pub fn detents(&self) -> &DetentSet {
        &self.detents
    }

    /// Replaces the detent set.
    ///
    /// An empty set is replaced by [`DetentSet::medium_only`]. While the
    /// sheet is visible its current detent is re-resolved to the closest
    /// member of the new set, keeping the sheet near its previous height.
    ///
    /// During a drag the offset is rebased onto the new detent so the live
    /// candidate height does not move.
    pub fn set_detents(&mut self, detents: impl Into<DetentSet>) {
        self.detents = non_empty(detents.into());
        if !self.is_visible() {
            return;
        }
        let Some(old) = self.current else {
            return;
        };
        let new = self.detents.closest(old.fraction());
        if new == old {
            return;
        }
        debug!(from = ?old, to = ?new, "sheet detent re-resolved");
        let candidate = self.raw_candidate_fraction();
        self.current = Some(new);
        if let Some(candidate) = candidate
            && self.container_height > 0.0
        {
            let offset = (new.fraction() - candidate) * self.container_height;
            if let Some(origin) = &mut self.drag_origin {
                origin.y -= offset - self.drag_offset;
            }
            self.drag_offset = offset;
        }
        self.bump();
    }

    /// Returns the container height.
    #[must_use]
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Sets the container height.
    ///
    /// Negative and non-finite heights are treated as zero.
    pub fn set_container_height(&mut self, height: f64) {
        self.container_height = normalize_height(height);
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// Returns `true` while the sheet is presenting, presented, or dragging.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    /// Returns the detent the sheet rests at, `None` while hidden.
    ///
    /// While dismissing this is the detent the sheet left from.
    #[must_use]
    pub fn current_detent(&self) -> Option<Detent> {
        self.current
    }

    /// Returns the signed drag offset; zero unless dragging.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    /// Returns why the sheet is dismissing, if it is.
    #[must_use]
    pub fn dismiss_reason(&self) -> Option<DismissReason> {
        self.dismiss_reason
    }

    /// Returns a counter that increases whenever the phase or current detent
    /// changes.
    ///
    /// Drag updates do not bump the revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns a snapshot of the presentation state.
    #[must_use]
    pub fn presentation_state(&self) -> PresentationState {
        PresentationState {
            current_detent: self.current,
            drag_offset: self.drag_offset,
            phase: self.phase,
        }
    }

    /// Returns the unclamped candidate fraction while dragging.
    #[must_use]
    pub fn raw_candidate_fraction(&self) -> Option<f64> {
        if self.phase != SheetPhase::Dragging {
            return None;
        }
        let current = self.current?;
        if self.container_height <= 0.0 {
            return Some(current.fraction());
        }
        Some(current.fraction() - self.drag_offset / self.container_height)
    }

    /// Returns the candidate fraction clamped to `[0, 1]` while dragging.
    #[must_use]
    pub fn candidate_fraction(&self) -> Option<f64> {
        self.raw_candidate_fraction().map(|f| f.clamp(0.0, 1.0))
    }

    /// Returns the height of the current detent, `None` while hidden.
    #[must_use]
    pub fn current_height(&self) -> Option<f64> {
        self.current.map(|d| d.height(self.container_height))
    }

    /// Returns the height the host should lay the sheet out at.
    ///
    /// This is the live candidate height while dragging, the current detent's
    /// height while presenting or presented, and zero otherwise.
    #[must_use]
    pub fn target_height(&self) -> f64 {
        match self.phase {
            SheetPhase::Dragging => {
                self.candidate_fraction().unwrap_or(0.0) * self.container_height
            }
            SheetPhase::Presenting | SheetPhase::Presented => {
                self.current_height().unwrap_or(0.0)
            }
            SheetPhase::Hidden | SheetPhase::Dismissing => 0.0,
        }
    }

    /// Starts presenting the sheet.
    ///
    /// Only honored while hidden. With no initial detent the smallest member
    /// of the set is used; a detent outside the set is corrected to the
    /// closest member. Returns `true` if the sheet started presenting.
    pub fn present(&mut self, initial: Option<Detent>) -> bool {
        if self.phase != SheetPhase::Hidden {
            return false;
        }
        let detent = match initial {
            Some(d) => self.resolve(d),
            None => self.smallest(),
        };
        debug!(detent = ?detent, "sheet presenting");
        self.current = Some(detent);
        self.dismiss_reason = None;
        self.set_phase(SheetPhase::Presenting);
        true
    }

    /// Acknowledges that the entry animation finished.
    pub fn presentation_completed(&mut self) -> bool {
        if self.phase != SheetPhase::Presenting {
            return false;
        }
        debug!(detent = ?self.current, "sheet presented");
        self.set_phase(SheetPhase::Presented);
        true
    }

    /// Moves the sheet to `detent`, or the closest member of the set.
    ///
    /// Honored while presenting or presented. Returns the detent the sheet
    /// now rests at.
    pub fn select_detent(&mut self, detent: Detent) -> Option<Detent> {
        if !matches!(self.phase, SheetPhase::Presenting | SheetPhase::Presented) {
            return None;
        }
        let resolved = self.resolve(detent);
        self.move_to(resolved);
        Some(resolved)
    }

    /// Moves a presented sheet to the next larger detent.
    ///
    /// Returns `None` when already at the largest detent or not presented.
    pub fn expand(&mut self) -> Option<Detent> {
        if self.phase != SheetPhase::Presented {
            return None;
        }
        let next = self.detents.next_larger(self.current?)?;
        self.move_to(next);
        Some(next)
    }

    /// Moves a presented sheet to the next smaller detent.
    ///
    /// Returns `None` when already at the smallest detent or not presented.
    /// This never dismisses.
    pub fn collapse(&mut self) -> Option<Detent> {
        if self.phase != SheetPhase::Presented {
            return None;
        }
        let next = self.detents.next_smaller(self.current?)?;
        self.move_to(next);
        Some(next)
    }

    /// Begins an interactive drag with a zero offset.
    ///
    /// Only honored while presented.
    pub fn drag_began(&mut self) -> bool {
        if self.phase != SheetPhase::Presented {
            return false;
        }
        debug!(detent = ?self.current, "sheet drag began");
        self.drag_offset = 0.0;
        self.drag_origin = None;
        self.set_phase(SheetPhase::Dragging);
        true
    }

    /// Begins an interactive drag anchored at a pointer position.
    ///
    /// Subsequent [`drag_moved_to`](Self::drag_moved_to) calls measure the
    /// vertical distance from `origin`.
    pub fn drag_began_at(&mut self, origin: Point) -> bool {
        if !self.drag_began() {
            return false;
        }
        self.drag_origin = Some(origin);
        true
    }

    /// Replaces the drag offset with the total translation since drag begin.
    ///
    /// Positive offsets move the sheet down. Each call replaces the previous
    /// offset; it is not a delta. Non-finite offsets are ignored. Returns the
    /// clamped candidate fraction.
    pub fn drag_changed(&mut self, offset: f64) -> Option<f64> {
        if self.phase != SheetPhase::Dragging {
            return None;
        }
        if offset.is_finite() {
            self.drag_offset = offset;
        }
        let candidate = self.candidate_fraction();
        trace!(offset = self.drag_offset, candidate = ?candidate, "sheet drag changed");
        candidate
    }

    /// Updates the drag from a pointer position.
    ///
    /// The offset is the vertical distance from the drag origin. If the drag
    /// was begun without an origin, one is placed so that the first position
    /// maps to the current offset, so mixing with
    /// [`drag_changed`](Self::drag_changed) does not jump.
    pub fn drag_moved_to(&mut self, position: Point) -> Option<f64> {
        if self.phase != SheetPhase::Dragging {
            return None;
        }
        let seed = position - Vec2::new(0.0, self.drag_offset);
        let origin = *self.drag_origin.get_or_insert(seed);
        self.drag_changed((position - origin).y)
    }

    /// Ends the drag, settling on a detent or dismissing.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn drag_ended(&mut self) -> Option<DragOutcome> {
        let raw = self.raw_candidate_fraction()?;
        let from = self.current?;
        self.drag_offset = 0.0;
        self.drag_origin = None;

        if self.should_dismiss(from, raw) {
            debug!(from = ?from, candidate = raw, "sheet drag dismissed");
            self.begin_dismissal(DismissReason::DragGesture);
            return Some(DragOutcome::Dismissed);
        }

        let to = self.detents.closest(raw.clamp(0.0, 1.0));
        debug!(from = ?from, to = ?to, candidate = raw, "sheet drag settled");
        self.current = Some(to);
        if to != from {
            self.bump();
        }
        self.set_phase(SheetPhase::Presented);
        Some(DragOutcome::Settled { from, to })
    }

    /// Abandons the drag and snaps back to the pre-drag detent.
    ///
    /// Returns the detent the sheet rests at, or `None` if no drag was in
    /// progress.
    pub fn drag_cancelled(&mut self) -> Option<Detent> {
        if self.phase != SheetPhase::Dragging {
            return None;
        }
        debug!(detent = ?self.current, "sheet drag cancelled");
        self.drag_offset = 0.0;
        self.drag_origin = None;
        self.set_phase(SheetPhase::Presented);
        self.current
    }

    /// Reports a tap on the backdrop.
    ///
    /// Dismisses a visible sheet unless backdrop dismissal is disabled.
    pub fn backdrop_tapped(&mut self) -> bool {
        if !self.config.backdrop_tap_dismisses() || !self.is_visible() {
            return false;
        }
        self.begin_dismissal(DismissReason::BackdropTap);
        true
    }

    /// Dismisses a visible sheet regardless of the drag and backdrop policy.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.begin_dismissal(DismissReason::Programmatic);
        true
    }

    /// Acknowledges that the exit animation finished.
    ///
    /// The presentation state is discarded and the sheet becomes hidden.
    pub fn dismissal_completed(&mut self) -> bool {
        if self.phase != SheetPhase::Dismissing {
            return false;
        }
        debug!(reason = ?self.dismiss_reason, "sheet hidden");
        self.current = None;
        self.dismiss_reason = None;
        self.set_phase(SheetPhase::Hidden);
        true
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SheetDebugInfo {
        SheetDebugInfo {
            phase: self.phase,
            current_detent: self.current,
            detents: self.detents.clone(),
            container_height: self.container_height,
            drag_offset: self.drag_offset,
            candidate_fraction: self.candidate_fraction(),
            target_height: self.target_height(),
            dismiss_reason: self.dismiss_reason,
            config: self.config,
            revision: self.revision,
        }
    }

    fn should_dismiss(&self, from: Detent, raw: f64) -> bool {
        if !self.config.drag_to_dismiss() {
            return false;
        }
        // Only reachable from the smallest detent.
        if self.detents.next_smaller(from).is_some() {
            return false;
        }
        raw < self.smallest().fraction() * self.config.dismiss_threshold()
    }

    fn begin_dismissal(&mut self, reason: DismissReason) {
        debug!(reason = ?reason, "sheet dismissing");
        self.drag_offset = 0.0;
        self.drag_origin = None;
        self.dismiss_reason = Some(reason);
        self.set_phase(SheetPhase::Dismissing);
    }

    fn move_to(&mut self, detent: Detent) {
        if self.current == Some(detent) {
            return;
        }
        debug!(from = ?self.current, to = ?detent, "sheet detent selected");
        self.current = Some(detent);
        self.bump();
    }

    fn resolve(&self, detent: Detent) -> Detent {
        if self.detents.contains(detent) {
            detent
        } else {
            self.detents.closest(detent.fraction())
        }
    }

    fn smallest(&self) -> Detent {
        self.detents.smallest().unwrap_or(Detent::MEDIUM)
    }

    fn set_phase(&mut self, phase: SheetPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Debug snapshot of a [`SheetController`] state.
#[derive(Clone, Debug)]
pub struct SheetDebugInfo {
    /// Lifecycle phase.
    pub phase: SheetPhase,
    /// Detent the sheet rests at, if any.
    pub current_detent: Option<Detent>,
    /// Configured detents.
    pub detents: DetentSet,
    /// Container height.
    pub container_height: f64,
    /// Signed drag offset.
    pub drag_offset: f64,
    /// Clamped candidate fraction while dragging.
    pub candidate_fraction: Option<f64>,
    /// Height the host should lay the sheet out at.
    pub target_height: f64,
    /// Why the sheet is dismissing, if it is.
    pub dismiss_reason: Option<DismissReason>,
    /// Dismissal policy.
    pub config: SheetConfig,
    /// Change counter.
    pub revision: u64,
}

fn non_empty(detents: DetentSet) -> DetentSet {
    if detents.is_empty() {
        DetentSet::medium_only()
    } else {
        detents
    }
}

fn normalize_height(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}
