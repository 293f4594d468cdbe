// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Bounds: page extents and pointer coordinate mapping.
//!
//! This crate provides the coordinate foundation for the measurement overlay:
//!
//! - [`PageBounds`]: the allowed coordinate range for the measurement
//!   rectangle, derived from the page's scrollable extents.
//! - [`Dimensions`]: owns the current [`PageBounds`], fans out resize
//!   notifications to registered subscribers, and tracks the offsets the
//!   overlay chrome introduces when it shifts the page.
//! - [`PointerMap`]: converts raw pointer event coordinates into
//!   page-relative and viewport-relative positions, applying the chrome
//!   offset correction.
//!
//! ## Design Philosophy
//!
//! None of these types talk to a platform. The host feeds in scroll extents
//! and raw event coordinates; everything here is plain arithmetic over those
//! inputs, so the whole crate is trivially testable and `no_std` + `alloc`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tapeline_bounds::{Dimensions, PointerMap};
//!
//! let mut dims = Dimensions::new(1000, 800);
//! assert_eq!(dims.bounds().right, 1000);
//!
//! // The overlay toolbar shifted the page down 30px; pointer positions
//! // reported by the platform must be corrected by that amount.
//! dims.set_offsets(0, 30);
//! let map = PointerMap::new(&dims);
//! let page = map.page_point(Point::new(100.0, 230.0));
//! assert_eq!(page.y, 200.0);
//! ```

#![no_std]

extern crate alloc;

mod dimensions;
mod pointer;

pub use dimensions::{Dimensions, UpdateCallback};
pub use pointer::{PointerMap, point_px};

/// Allowed coordinate range for the measurement rectangle, derived from the
/// page's scrollable extents.
///
/// `left` and `top` are always zero for a freshly derived bounds; `right` and
/// `bottom` track the page scroll width and height. The rectangle clamping
/// logic reads these on every mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBounds {
    /// Minimum left value the rectangle can take.
    pub left: i32,
    /// Minimum top value the rectangle can take.
    pub top: i32,
    /// Maximum right value the rectangle can take.
    pub right: i32,
    /// Maximum bottom value the rectangle can take.
    pub bottom: i32,
}

impl PageBounds {
    /// Creates bounds from page scroll extents, anchored at the origin.
    ///
    /// Negative extents are treated as zero.
    #[must_use]
    pub const fn new(scroll_width: i32, scroll_height: i32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: if scroll_width > 0 { scroll_width } else { 0 },
            bottom: if scroll_height > 0 { scroll_height } else { 0 },
        }
    }

    /// Horizontal extent of the bounds.
    #[must_use]
    pub const fn width(self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent of the bounds.
    #[must_use]
    pub const fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Clamps an x coordinate into `[left, right]`.
    #[must_use]
    pub fn clamp_x(self, x: i32) -> i32 {
        x.clamp(self.left, self.right)
    }

    /// Clamps a y coordinate into `[top, bottom]`.
    #[must_use]
    pub fn clamp_y(self, y: i32) -> i32 {
        y.clamp(self.top, self.bottom)
    }

    /// Returns `true` if the x coordinate lies within `[left, right]`.
    #[must_use]
    pub const fn contains_x(self, x: i32) -> bool {
        self.left <= x && x <= self.right
    }

    /// Returns `true` if the y coordinate lies within `[top, bottom]`.
    #[must_use]
    pub const fn contains_y(self, y: i32) -> bool {
        self.top <= y && y <= self.bottom
    }
}

impl Default for PageBounds {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
