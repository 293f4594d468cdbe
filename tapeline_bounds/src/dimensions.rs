// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page dimension tracking with resize fan-out.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::PageBounds;

/// Callback invoked when the page dimensions change.
///
/// Receives the new `right` and `bottom` extents.
pub type UpdateCallback = Box<dyn FnMut(i32, i32)>;

/// Tracks the page's scrollable bounds and the offsets the overlay chrome
/// introduces, and notifies subscribers when the page is resized.
///
/// Created on session activation, updated on every resize event, and
/// discarded on deactivation. Subscribers are invoked synchronously in
/// registration order from [`Dimensions::update`].
pub struct Dimensions {
    bounds: PageBounds,
    offset_left: i32,
    offset_top: i32,
    callbacks: Vec<UpdateCallback>,
}

impl Dimensions {
    /// Creates dimension tracking from the current page scroll extents.
    #[must_use]
    pub fn new(scroll_width: i32, scroll_height: i32) -> Self {
        Self {
            bounds: PageBounds::new(scroll_width, scroll_height),
            offset_left: 0,
            offset_top: 0,
            callbacks: Vec::new(),
        }
    }

    /// Returns the current page bounds.
    #[must_use]
    pub fn bounds(&self) -> PageBounds {
        self.bounds
    }

    /// Horizontal offset applied to the page by the overlay chrome.
    #[must_use]
    pub fn offset_left(&self) -> i32 {
        self.offset_left
    }

    /// Vertical offset applied to the page by the overlay chrome.
    #[must_use]
    pub fn offset_top(&self) -> i32 {
        self.offset_top
    }

    /// Records the offsets the overlay chrome currently applies to the page.
    ///
    /// The original page content is shifted by this amount so the chrome
    /// doesn't overlap it; pointer positions reported against the shifted
    /// page are corrected by the same amount in [`crate::PointerMap`].
    pub fn set_offsets(&mut self, left: i32, top: i32) {
        self.offset_left = left;
        self.offset_top = top;
    }

    /// Refreshes the bounds from new scroll extents and notifies all
    /// registered subscribers with the new `right`/`bottom` values.
    pub fn update(&mut self, scroll_width: i32, scroll_height: i32) {
        self.bounds.right = scroll_width.max(self.bounds.left);
        self.bounds.bottom = scroll_height.max(self.bounds.top);
        let (right, bottom) = (self.bounds.right, self.bounds.bottom);
        for callback in &mut self.callbacks {
            callback(right, bottom);
        }
    }

    /// Registers a subscriber for dimension updates.
    pub fn add_update_callback(&mut self, callback: impl FnMut(i32, i32) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Drops all registered subscribers.
    ///
    /// Called during session teardown so no callback can fire against a
    /// torn-down session.
    pub fn clear_update_callbacks(&mut self) {
        self.callbacks.clear();
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }
}

impl core::fmt::Debug for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dimensions")
            .field("bounds", &self.bounds)
            .field("offset_left", &self.offset_left)
            .field("offset_top", &self.offset_top)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
