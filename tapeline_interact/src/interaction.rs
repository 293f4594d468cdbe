// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state and pointer event transitions.

use kurbo::Point;
use tapeline_bounds::point_px;
use tapeline_rect::{RectMirror, RectSeed, RulerRect};

use crate::ResizeEdges;

/// Size of the box planted under the pointer by drag-to-create.
const CREATE_SIZE: i32 = 2;

/// Derived view of the interaction state for callers and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No interaction in progress.
    Idle,
    /// The rectangle is being dragged as a whole.
    Moving,
    /// One or two edges are being resized.
    Resizing(ResizeEdges),
}

/// Transient per-drag state: move flags, resize edge set, and the
/// pointer-to-edge grab gaps.
///
/// The gaps record the pointer's offset from the left/top edges at drag
/// start so the grab point stays fixed relative to the rectangle while
/// moving. They are captured on the first pointer-move after the down (not
/// on the down itself) and cleared on every pointer-up.
#[derive(Clone, Copy, Debug)]
pub struct Interaction {
    moving_left: bool,
    moving_top: bool,
    resizing: ResizeEdges,
    gap_left: Option<i32>,
    gap_top: Option<i32>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction {
    /// Creates an idle interaction.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            moving_left: false,
            moving_top: false,
            resizing: ResizeEdges::empty(),
            gap_left: None,
            gap_top: None,
        }
    }

    /// Current phase, derived from the move/resize flags.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.moving_left || self.moving_top {
            Phase::Moving
        } else if !self.resizing.is_empty() {
            Phase::Resizing(self.resizing)
        } else {
            Phase::Idle
        }
    }

    /// Returns `true` when no interaction is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase() == Phase::Idle
    }

    /// Edge set currently being resized (empty when not resizing).
    #[must_use]
    pub fn resizing(&self) -> ResizeEdges {
        self.resizing
    }

    /// Grab gap from the left edge, once captured.
    #[must_use]
    pub fn gap_left(&self) -> Option<i32> {
        self.gap_left
    }

    /// Grab gap from the top edge, once captured.
    #[must_use]
    pub fn gap_top(&self) -> Option<i32> {
        self.gap_top
    }

    /// Pointer-down on the rectangle body: start a move.
    ///
    /// The grab gaps are not captured here; the first pointer-move does it.
    pub fn ruler_down(&mut self) {
        self.moving_left = true;
        self.moving_top = true;
    }

    /// Pointer-down on an edge or corner handle: start resizing the
    /// handle's declared edges.
    pub fn handle_down(&mut self, edges: ResizeEdges) {
        self.resizing = edges;
    }

    /// Pointer-down on the empty page: drag-to-create.
    ///
    /// Resets the rectangle to a 2×2 box at the pointer and enters a
    /// bottom-right corner resize. The caller is responsible for gating this
    /// on tracking mode and scrollbar hits.
    pub fn page_down(&mut self, point: Point, rect: &mut RulerRect, mirror: &mut dyn RectMirror) {
        let (x, y) = point_px(point);
        *self = Self::new();
        rect.reset(
            RectSeed {
                left: x,
                top: y,
                width: CREATE_SIZE,
                height: CREATE_SIZE,
            },
            mirror,
        );
        self.resizing = ResizeEdges::RIGHT | ResizeEdges::BOTTOM;
    }

    /// Pointer-up anywhere: return to idle and clear the grab gaps.
    pub fn pointer_up(&mut self) {
        *self = Self::new();
    }

    /// Pointer-move: apply the move pass, then the resize passes.
    ///
    /// The resize passes run in a fixed left, right, top, bottom order so
    /// that an edge-crossover flip is picked up by the opposite pass within
    /// the same event.
    pub fn pointer_move(
        &mut self,
        point: Point,
        rect: &mut RulerRect,
        mirror: &mut dyn RectMirror,
    ) {
        let (x, y) = point_px(point);
        self.move_left(x, rect, mirror);
        self.move_top(y, rect, mirror);
        self.resize_left(x, rect, mirror);
        self.resize_right(x, rect, mirror);
        self.resize_top(y, rect, mirror);
        self.resize_bottom(y, rect, mirror);
    }

    fn move_left(&mut self, x: i32, rect: &mut RulerRect, mirror: &mut dyn RectMirror) {
        if !self.moving_left {
            return;
        }
        let gap = *self.gap_left.get_or_insert(x - rect.left());
        let bounds = rect.bounds();
        let mut x = x;
        if x - gap < bounds.left {
            x = bounds.left + gap;
        } else if x - gap + rect.width() > bounds.right {
            x = bounds.right - rect.width() + gap;
        }
        rect.set_left(x - gap, true, mirror);
    }

    fn move_top(&mut self, y: i32, rect: &mut RulerRect, mirror: &mut dyn RectMirror) {
        if !self.moving_top {
            return;
        }
        let gap = *self.gap_top.get_or_insert(y - rect.top());
        let bounds = rect.bounds();
        let mut y = y;
        if y - gap < bounds.top {
            y = bounds.top + gap;
        } else if y - gap + rect.height() > bounds.bottom {
            y = bounds.bottom - rect.height() + gap;
        }
        rect.set_top(y - gap, true, mirror);
    }

    fn resize_left(&mut self, x: i32, rect: &mut RulerRect, mirror: &mut dyn RectMirror) {
        if !self.resizing.contains(ResizeEdges::LEFT) {
            return;
        }
        if x <= rect.right() {
            rect.set_left(x.max(rect.bounds().left), false, mirror);
        } else {
            // Crossed the fixed right edge: hand control to the right edge,
            // pinning left at the old right position.
            self.resizing.remove(ResizeEdges::LEFT);
            self.resizing.insert(ResizeEdges::RIGHT);
            rect.set_left(rect.right(), false, mirror);
        }
    }

    fn resize_right(&mut self, x: i32, rect: &mut RulerRect, mirror: &mut dyn RectMirror) {
        if !self.resizing.contains(ResizeEdges::RIGHT) {
            return;
        }
        if x >= rect.left() {
            rect.set_right(x.min(rect.bounds().right), false, mirror);
        } else {
            self.resizing.remove(ResizeEdges::RIGHT);
            self.resizing.insert(ResizeEdges::LEFT);
            rect.set_right(rect.left(), false, mirror);
        }
    }

    fn resize_top(&mut self, y: i32, rect: &mut RulerRect, mirror: &mut dyn RectMirror) {
        if !self.resizing.contains(ResizeEdges::TOP) {
            return;
        }
        if y <= rect.bottom() {
            rect.set_top(y.max(rect.bounds().top), false, mirror);
        } else {
            self.resizing.remove(ResizeEdges::TOP);
            self.resizing.insert(ResizeEdges::BOTTOM);
            rect.set_top(rect.bottom(), false, mirror);
        }
    }

    fn resize_bottom(&mut self, y: i32, rect: &mut RulerRect, mirror: &mut dyn RectMirror) {
        if !self.resizing.contains(ResizeEdges::BOTTOM) {
            return;
        }
        if y >= rect.top() {
            rect.set_bottom(y.min(rect.bounds().bottom), false, mirror);
        } else {
            self.resizing.remove(ResizeEdges::BOTTOM);
            self.resizing.insert(ResizeEdges::TOP);
            rect.set_bottom(rect.top(), false, mirror);
        }
    }
}
