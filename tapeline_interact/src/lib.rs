// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Interact: the pointer-driven move/resize state machine.
//!
//! [`Interaction`] translates pointer down/move/up sequences into move or
//! resize operations on a [`tapeline_rect::RulerRect`]:
//!
//! - Pointer-down on the rectangle body starts a move; the pointer's grab
//!   offset from the left/top edges is captured lazily on the first move and
//!   kept for the whole drag so the grab point stays fixed.
//! - Pointer-down on an edge or corner handle starts a resize for the
//!   handle's declared [`ResizeEdges`].
//! - Pointer-down on the empty page resets the rectangle to a 2×2 box at the
//!   pointer and starts a bottom-right corner resize (drag-to-create).
//! - Dragging an edge past its fixed opposite flips control to the opposite
//!   edge (edge-crossover) instead of letting the rectangle invert.
//! - Pointer-up unconditionally returns to idle; this is the sole
//!   cancellation mechanism.
//!
//! Every coordinate is clamped against the rectangle's [`PageBounds`] before
//! it is applied; there is no error path.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tapeline_bounds::PageBounds;
//! use tapeline_interact::{Interaction, Phase, ResizeEdges};
//! use tapeline_rect::RulerRect;
//!
//! let mut rect = RulerRect::new(PageBounds::new(1000, 800));
//! let mut interaction = Interaction::new();
//!
//! // Drag-to-create from empty page at (100, 200).
//! interaction.page_down(Point::new(100.0, 200.0), &mut rect, &mut ());
//! assert_eq!((rect.left(), rect.top(), rect.right(), rect.bottom()), (100, 200, 102, 202));
//! assert_eq!(interaction.phase(), Phase::Resizing(ResizeEdges::RIGHT | ResizeEdges::BOTTOM));
//!
//! interaction.pointer_move(Point::new(300.0, 400.0), &mut rect, &mut ());
//! assert_eq!((rect.right(), rect.bottom()), (300, 400));
//!
//! interaction.pointer_up();
//! assert_eq!(interaction.phase(), Phase::Idle);
//! ```

#![no_std]

extern crate alloc;

mod interaction;

pub use interaction::{Interaction, Phase};

bitflags::bitflags! {
    /// The set of rectangle edges an interaction is resizing.
    ///
    /// A single bit is an edge drag; two adjacent bits are a corner drag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ResizeEdges: u8 {
        /// Resizing the left edge.
        const LEFT   = 0b0000_0001;
        /// Resizing the top edge.
        const TOP    = 0b0000_0010;
        /// Resizing the right edge.
        const RIGHT  = 0b0000_0100;
        /// Resizing the bottom edge.
        const BOTTOM = 0b0000_1000;
    }
}

impl ResizeEdges {
    /// Top-left corner handle.
    pub const TOP_LEFT: Self = Self::TOP.union(Self::LEFT);
    /// Top-right corner handle.
    pub const TOP_RIGHT: Self = Self::TOP.union(Self::RIGHT);
    /// Bottom-left corner handle.
    pub const BOTTOM_LEFT: Self = Self::BOTTOM.union(Self::LEFT);
    /// Bottom-right corner handle.
    pub const BOTTOM_RIGHT: Self = Self::BOTTOM.union(Self::RIGHT);
}
