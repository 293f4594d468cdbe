// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer coordinate mapping: raw event positions → page/viewport positions.

use kurbo::Point;

use crate::Dimensions;

/// Converts raw pointer event coordinates into page-relative and
/// viewport-relative positions.
///
/// When the overlay chrome is active it shifts the page content, so the
/// page coordinates the platform reports are offset from where content
/// actually sits. `PointerMap` undoes that shift. Viewport-relative mapping
/// additionally subtracts the chrome bar heights, which matters when
/// hit-testing the element under the pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerMap {
    /// Horizontal page shift applied by the overlay chrome.
    pub offset_left: i32,
    /// Vertical page shift applied by the overlay chrome.
    pub offset_top: i32,
    /// Height of the primary chrome bar.
    pub bar_height: i32,
    /// Height of the secondary (element mode) chrome bar.
    pub element_bar_height: i32,
    /// Whether the secondary bar is currently shown.
    pub element_mode: bool,
}

impl PointerMap {
    /// Builds a map from the current dimension offsets, with no chrome bars.
    #[must_use]
    pub fn new(dimensions: &Dimensions) -> Self {
        Self {
            offset_left: dimensions.offset_left(),
            offset_top: dimensions.offset_top(),
            bar_height: 0,
            element_bar_height: 0,
            element_mode: false,
        }
    }

    /// Maps a raw event position to page coordinates, correcting for the
    /// chrome-induced page shift.
    #[must_use]
    pub fn page_point(&self, raw: Point) -> Point {
        Point::new(
            raw.x - f64::from(self.offset_left),
            raw.y - f64::from(self.offset_top),
        )
    }

    /// Maps a raw event position to page coordinates without offset
    /// correction.
    #[must_use]
    pub fn page_point_raw(&self, raw: Point) -> Point {
        raw
    }

    /// Maps a raw client position to viewport coordinates, subtracting the
    /// chrome bar heights so the position can be used to hit-test the page
    /// content underneath.
    #[must_use]
    pub fn client_point(&self, raw: Point) -> Point {
        let mut y = raw.y - f64::from(self.bar_height);
        if self.element_mode {
            y -= f64::from(self.element_bar_height);
        }
        Point::new(raw.x, y)
    }

    /// Maps a raw client position to viewport coordinates without bar-height
    /// correction.
    #[must_use]
    pub fn client_point_raw(&self, raw: Point) -> Point {
        raw
    }
}

/// Floors a pointer coordinate to integer pixels.
#[must_use]
pub(crate) fn floor_px(value: f64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "pointer coordinates fit comfortably in i32"
    )]
    let px = value.floor() as i32;
    px
}

/// Floors a pointer position to integer pixel coordinates.
#[must_use]
pub fn point_px(point: Point) -> (i32, i32) {
    (floor_px(point.x), floor_px(point.y))
}
