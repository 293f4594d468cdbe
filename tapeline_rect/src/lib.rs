// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Rect: the clamped measurement rectangle.
//!
//! [`RulerRect`] owns the four integer edges of the measurement rectangle
//! and enforces the clamping policy on every mutation: the rectangle always
//! satisfies `bounds.left <= left <= right <= bounds.right` and
//! `bounds.top <= top <= bottom <= bounds.bottom`. There is no error path —
//! out-of-range values are clamped and non-numeric input retains the
//! previous value, silently.
//!
//! Every successful edge change is pushed synchronously into a
//! [`RectMirror`], the seam through which the on-screen readout stays
//! consistent within the same interaction step. `()` implements the trait as
//! a no-op for callers that have no readout.
//!
//! ## Minimal example
//!
//! ```
//! use tapeline_bounds::PageBounds;
//! use tapeline_rect::{RectSeed, RulerRect};
//!
//! let mut rect = RulerRect::new(PageBounds::new(1000, 800));
//! rect.reset(
//!     RectSeed { left: 10, top: 10, width: 100, height: 50 },
//!     &mut (),
//! );
//!
//! // Translation: `update_opposite` keeps the width fixed.
//! rect.set_left(40, true, &mut ());
//! assert_eq!((rect.left(), rect.right()), (40, 140));
//!
//! // Independent edge: the width changes instead.
//! rect.set_left(60, false, &mut ());
//! assert_eq!((rect.left(), rect.width()), (60, 80));
//!
//! // Non-numeric input retains the previous value.
//! rect.set_left("oops", false, &mut ());
//! assert_eq!(rect.left(), 60);
//! ```

#![no_std]

extern crate alloc;

mod input;
mod mirror;
mod rect;

pub use input::PxInput;
pub use mirror::RectMirror;
pub use rect::{RectSeed, RulerRect};
