// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display mirror seam for rectangle changes.

/// Receives rectangle edge and extent changes as they happen.
///
/// [`RulerRect`](crate::RulerRect) pushes every successful change into its
/// mirror synchronously, with no batching, so an on-screen readout stays
/// consistent within the same interaction step. Values arriving here are
/// already clamped; implementations are pure display stores.
pub trait RectMirror {
    /// The left edge changed.
    fn set_left(&mut self, left: i32);
    /// The top edge changed.
    fn set_top(&mut self, top: i32);
    /// The right edge changed.
    fn set_right(&mut self, right: i32);
    /// The bottom edge changed.
    fn set_bottom(&mut self, bottom: i32);
    /// The width changed.
    fn set_width(&mut self, width: i32);
    /// The height changed.
    fn set_height(&mut self, height: i32);
}

/// No-op mirror for callers without a readout.
impl RectMirror for () {
    fn set_left(&mut self, _left: i32) {}
    fn set_top(&mut self, _top: i32) {}
    fn set_right(&mut self, _right: i32) {}
    fn set_bottom(&mut self, _bottom: i32) {}
    fn set_width(&mut self, _width: i32) {}
    fn set_height(&mut self, _height: i32) {}
}
