// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement rectangle and its clamping policy.

use tapeline_bounds::PageBounds;

use crate::{PxInput, RectMirror};

/// A seed box for [`RulerRect::reset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RectSeed {
    /// Left edge of the seed box.
    pub left: i32,
    /// Top edge of the seed box.
    pub top: i32,
    /// Width of the seed box.
    pub width: i32,
    /// Height of the seed box.
    pub height: i32,
}

/// The four-edge measurement rectangle.
///
/// Edges are integer pixels; `width`/`height` are derived. After any
/// mutation the rectangle satisfies
/// `bounds.left <= left <= right <= bounds.right` and the vertical
/// equivalent. One instance exists per active measurement session.
#[derive(Clone, Debug)]
pub struct RulerRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    bounds: PageBounds,
}

/// Clamp that tolerates an inverted range by collapsing to its low end.
///
/// `i32::clamp` panics when `lo > hi`; a freshly shrunk `PageBounds` can
/// transiently produce that ordering before the rectangle is re-clamped.
fn clamp_range(value: i32, lo: i32, hi: i32) -> i32 {
    if lo > hi { lo } else { value.clamp(lo, hi) }
}

impl RulerRect {
    /// Creates an empty rectangle at the bounds origin.
    #[must_use]
    pub fn new(bounds: PageBounds) -> Self {
        Self {
            left: bounds.left,
            top: bounds.top,
            right: bounds.left,
            bottom: bounds.top,
            bounds,
        }
    }

    /// Current left edge.
    #[must_use]
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Current top edge.
    #[must_use]
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Current right edge.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.right
    }

    /// Current bottom edge.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Derived width (`right - left`, never negative).
    #[must_use]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Derived height (`bottom - top`, never negative).
    #[must_use]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// The bounds the rectangle is clamped against.
    #[must_use]
    pub fn bounds(&self) -> PageBounds {
        self.bounds
    }

    /// Replaces the bounds and re-clamps the rectangle into them.
    ///
    /// Called when the page resizes. All six readouts are refreshed.
    pub fn set_bounds(&mut self, bounds: PageBounds, mirror: &mut dyn RectMirror) {
        self.bounds = bounds;
        self.left = clamp_range(self.left, bounds.left, bounds.right);
        self.right = clamp_range(self.right, self.left, bounds.right);
        self.top = clamp_range(self.top, bounds.top, bounds.bottom);
        self.bottom = clamp_range(self.bottom, self.top, bounds.bottom);
        self.mirror_all(mirror);
        self.debug_check();
    }

    /// Resets the rectangle to a seed box, clamped into bounds, and
    /// refreshes all six readouts.
    pub fn reset(&mut self, seed: RectSeed, mirror: &mut dyn RectMirror) {
        let bounds = self.bounds;
        self.left = clamp_range(seed.left, bounds.left, bounds.right);
        self.top = clamp_range(seed.top, bounds.top, bounds.bottom);
        let width = clamp_range(seed.width, 0, bounds.right - self.left);
        let height = clamp_range(seed.height, 0, bounds.bottom - self.top);
        self.right = self.left + width;
        self.bottom = self.top + height;
        self.mirror_all(mirror);
        self.debug_check();
    }

    /// Sets the left edge.
    ///
    /// With `update_opposite` the rectangle translates: the width is kept
    /// and the right edge follows in lockstep, with the left edge clamped to
    /// `[bounds.left, bounds.right - width]`. Without it the edge moves
    /// independently, clamped to `[bounds.left, right]`, changing the width.
    pub fn set_left(
        &mut self,
        left: impl Into<PxInput>,
        update_opposite: bool,
        mirror: &mut dyn RectMirror,
    ) {
        let left = left.into().or(self.left);
        if update_opposite {
            let width = self.width();
            self.left = clamp_range(left, self.bounds.left, self.bounds.right - width);
            self.right = self.left + width;
            mirror.set_left(self.left);
            mirror.set_right(self.right);
        } else {
            self.left = clamp_range(left, self.bounds.left, self.right);
            mirror.set_left(self.left);
            mirror.set_width(self.width());
        }
        self.debug_check();
    }

    /// Sets the top edge; see [`RulerRect::set_left`] for the
    /// `update_opposite` semantics.
    pub fn set_top(
        &mut self,
        top: impl Into<PxInput>,
        update_opposite: bool,
        mirror: &mut dyn RectMirror,
    ) {
        let top = top.into().or(self.top);
        if update_opposite {
            let height = self.height();
            self.top = clamp_range(top, self.bounds.top, self.bounds.bottom - height);
            self.bottom = self.top + height;
            mirror.set_top(self.top);
            mirror.set_bottom(self.bottom);
        } else {
            self.top = clamp_range(top, self.bounds.top, self.bottom);
            mirror.set_top(self.top);
            mirror.set_height(self.height());
        }
        self.debug_check();
    }

    /// Sets the right edge.
    ///
    /// With `update_opposite` the rectangle translates: the right edge is
    /// clamped to `[bounds.left + width, bounds.right]` and the left edge
    /// follows. Without it the edge moves independently, clamped to
    /// `[left, bounds.right]`, changing the width.
    pub fn set_right(
        &mut self,
        right: impl Into<PxInput>,
        update_opposite: bool,
        mirror: &mut dyn RectMirror,
    ) {
        let right = right.into().or(self.right);
        if update_opposite {
            let width = self.width();
            self.right = clamp_range(right, self.bounds.left + width, self.bounds.right);
            self.left = self.right - width;
            mirror.set_right(self.right);
            mirror.set_left(self.left);
        } else {
            self.right = clamp_range(right, self.left, self.bounds.right);
            mirror.set_right(self.right);
            mirror.set_width(self.width());
        }
        self.debug_check();
    }

    /// Sets the bottom edge; see [`RulerRect::set_right`] for the
    /// `update_opposite` semantics.
    pub fn set_bottom(
        &mut self,
        bottom: impl Into<PxInput>,
        update_opposite: bool,
        mirror: &mut dyn RectMirror,
    ) {
        let bottom = bottom.into().or(self.bottom);
        if update_opposite {
            let height = self.height();
            self.bottom = clamp_range(bottom, self.bounds.top + height, self.bounds.bottom);
            self.top = self.bottom - height;
            mirror.set_bottom(self.bottom);
            mirror.set_top(self.top);
        } else {
            self.bottom = clamp_range(bottom, self.top, self.bounds.bottom);
            mirror.set_bottom(self.bottom);
            mirror.set_height(self.height());
        }
        self.debug_check();
    }

    /// Sets the width, recomputing the right edge from `left + width`,
    /// clamped so the rectangle stays within bounds.
    pub fn set_width(&mut self, width: impl Into<PxInput>, mirror: &mut dyn RectMirror) {
        let width = width.into().or(self.width());
        let width = clamp_range(width, 0, self.bounds.right - self.left);
        self.right = self.left + width;
        mirror.set_width(width);
        mirror.set_right(self.right);
        self.debug_check();
    }

    /// Sets the height, recomputing the bottom edge from `top + height`,
    /// clamped so the rectangle stays within bounds.
    pub fn set_height(&mut self, height: impl Into<PxInput>, mirror: &mut dyn RectMirror) {
        let height = height.into().or(self.height());
        let height = clamp_range(height, 0, self.bounds.bottom - self.top);
        self.bottom = self.top + height;
        mirror.set_height(height);
        mirror.set_bottom(self.bottom);
        self.debug_check();
    }

    fn mirror_all(&self, mirror: &mut dyn RectMirror) {
        mirror.set_left(self.left);
        mirror.set_top(self.top);
        mirror.set_right(self.right);
        mirror.set_bottom(self.bottom);
        mirror.set_width(self.width());
        mirror.set_height(self.height());
    }

    fn debug_check(&self) {
        debug_assert!(
            self.bounds.left <= self.left
                && self.left <= self.right
                && self.right <= self.bounds.right,
            "horizontal edges out of order or out of bounds"
        );
        debug_assert!(
            self.bounds.top <= self.top
                && self.top <= self.bottom
                && self.bottom <= self.bounds.bottom,
            "vertical edges out of order or out of bounds"
        );
    }
}
