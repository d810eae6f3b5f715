// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet --heading-base-level=0

//! Understory Sheet: detents and a headless bottom-sheet controller.
//!
//! This crate models the _positioning_ side of a modal bottom sheet: the set of
//! heights the sheet may rest at, how an interactive drag maps onto those
//! heights, and when a drag turns into a dismissal. It does **not** render,
//! animate, or capture input. Host frameworks are expected to:
//!
//! - Report the container height and feed drag translations (or raw pointer
//!   positions) into a [`SheetController`].
//! - Lay the sheet out at [`SheetController::target_height`] and animate
//!   toward it whenever the phase or current detent changes.
//! - Acknowledge the end of entry and exit animations with
//!   [`SheetController::presentation_completed`] and
//!   [`SheetController::dismissal_completed`].
//! - Trigger haptics or other side effects when [`SheetController::revision`]
//!   changes.
//!
//! The core concepts are:
//!
//! - [`Detent`]: one resting height, as a fraction of the container. Built-in
//!   detents are fixed at `0.25`, `0.5`, and `0.9`; custom fractions are
//!   clamped into `[0.1, 1.0]`.
//! - [`detent`] free functions and [`DetentSet`]: sorting, closest-match, and
//!   neighbor lookup over detents, plus the `standard`, `full_range`,
//!   `medium_only`, and `large_only` presets.
//! - [`SheetController`]: the presentation state machine, moving through
//!   [`SheetPhase`]s in response to present/dismiss requests and drags.
//! - [`SheetConfig`]: the dismiss threshold and the independent drag and
//!   backdrop dismissal switches.
//!
//! Nothing in this crate fails. Out-of-range fractions are clamped, empty
//! detent sets resolve to [`Detent::MEDIUM`], and absent neighbors are `None`.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_sheet::{Detent, DetentSet, DragOutcome, SheetController, SheetPhase};
//!
//! let mut sheet = SheetController::new(DetentSet::full_range(), 1000.0);
//! sheet.present(Some(Detent::SMALL));
//! sheet.presentation_completed();
//!
//! // Drag the smallest detent down past half its height.
//! sheet.drag_began();
//! sheet.drag_changed(200.0);
//! assert_eq!(sheet.drag_ended(), Some(DragOutcome::Dismissed));
//! assert_eq!(sheet.phase(), SheetPhase::Dismissing);
//!
//! // The host finishes its exit animation.
//! sheet.dismissal_completed();
//! assert_eq!(sheet.phase(), SheetPhase::Hidden);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `tracing`: emit `tracing` events for phase transitions (`debug`) and
//!   drag updates (`trace`).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
pub mod detent;
mod set;
mod trace;

pub use config::SheetConfig;
pub use controller::{
    DismissReason, DragOutcome, PresentationState, SheetController, SheetDebugInfo, SheetPhase,
};
pub use detent::{Detent, DetentKind};
pub use set::DetentSet;
