// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Toolbar: the readout/control panel mirror.
//!
//! [`Toolbar`] mirrors the measurement rectangle's edges and extents into
//! display values and round-trips manual field edits back into the
//! rectangle. It implements [`RectMirror`] with pure stores — values arriving
//! through the mirror are already clamped upstream, so no validation happens
//! here.
//!
//! Field edits flow the other way through [`Toolbar::commit`]: position
//! fields apply with translation semantics (editing "left" slides the box
//! rather than resizing it) while size fields resize. Parsing and
//! retain-on-invalid are the rectangle's contract, not the toolbar's.
//!
//! The toolbar also tracks the element-mode toggle and the chrome heights
//! that feed pointer offset correction.
//!
//! ## Minimal example
//!
//! ```
//! use tapeline_bounds::PageBounds;
//! use tapeline_rect::{RectSeed, RulerRect};
//! use tapeline_toolbar::{Field, Labels, Toolbar};
//!
//! let mut rect = RulerRect::new(PageBounds::new(1000, 800));
//! let mut toolbar = Toolbar::new(Labels::default());
//! rect.reset(RectSeed { left: 10, top: 10, width: 100, height: 50 }, &mut toolbar);
//! assert_eq!(toolbar.readouts().width, 100);
//!
//! // Committing a width edit recomputes the right edge from left + width.
//! toolbar.commit(Field::Width, "150", &mut rect);
//! assert_eq!(rect.right(), 160);
//! assert_eq!(toolbar.readouts().width, 150);
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;

use tapeline_rect::{RectMirror, RulerRect};

/// Height of the primary toolbar bar, in pixels.
pub const BAR_HEIGHT: i32 = 30;

/// Height of the element-mode bar, in pixels.
pub const ELEMENT_BAR_HEIGHT: i32 = 30;

/// Localized labels for the toolbar controls.
///
/// Resolved once through the host's locale lookup and handed to
/// [`Toolbar::new`]; defaults are English.
#[derive(Clone, Debug)]
pub struct Labels {
    /// Width field label.
    pub width: String,
    /// Height field label.
    pub height: String,
    /// Left field label.
    pub left: String,
    /// Top field label.
    pub top: String,
    /// Right field label.
    pub right: String,
    /// Bottom field label.
    pub bottom: String,
    /// Color swatch label.
    pub color: String,
    /// Close button tooltip.
    pub close: String,
    /// Element-mode toggle label when element mode is off.
    pub enable_element_mode: String,
    /// Element-mode toggle label when element mode is on.
    pub disable_element_mode: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            width: String::from("Width"),
            height: String::from("Height"),
            left: String::from("Left"),
            top: String::from("Top"),
            right: String::from("Right"),
            bottom: String::from("Bottom"),
            color: String::from("Color"),
            close: String::from("Close"),
            enable_element_mode: String::from("Enable element mode"),
            disable_element_mode: String::from("Disable element mode"),
        }
    }
}

/// An editable toolbar field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The width field.
    Width,
    /// The height field.
    Height,
    /// The left field.
    Left,
    /// The top field.
    Top,
    /// The right field.
    Right,
    /// The bottom field.
    Bottom,
}

impl Field {
    /// Stable name for usage tracking.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Width => "Width",
            Self::Height => "Height",
            Self::Left => "Left",
            Self::Top => "Top",
            Self::Right => "Right",
            Self::Bottom => "Bottom",
        }
    }
}

/// Display values for the six numeric readouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Readouts {
    /// Displayed width.
    pub width: i32,
    /// Displayed height.
    pub height: i32,
    /// Displayed left edge.
    pub left: i32,
    /// Displayed top edge.
    pub top: i32,
    /// Displayed right edge.
    pub right: i32,
    /// Displayed bottom edge.
    pub bottom: i32,
}

/// The readout/control panel.
#[derive(Clone, Debug)]
pub struct Toolbar {
    readouts: Readouts,
    color: String,
    element_mode: bool,
    labels: Labels,
}

impl Toolbar {
    /// Creates a toolbar with zeroed readouts and element mode off.
    #[must_use]
    pub fn new(labels: Labels) -> Self {
        Self {
            readouts: Readouts::default(),
            color: String::new(),
            element_mode: false,
            labels,
        }
    }

    /// Current display values.
    #[must_use]
    pub fn readouts(&self) -> Readouts {
        self.readouts
    }

    /// The labels the toolbar was built with.
    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Displayed color swatch value.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Updates the color swatch display.
    pub fn set_color(&mut self, hex: &str) {
        self.color.clear();
        self.color.push_str(hex);
    }

    /// Whether the element-mode bar is shown.
    #[must_use]
    pub fn element_mode(&self) -> bool {
        self.element_mode
    }

    /// Total chrome height: the bar plus the element bar when shown.
    #[must_use]
    pub fn total_height(&self) -> i32 {
        if self.element_mode {
            BAR_HEIGHT + ELEMENT_BAR_HEIGHT
        } else {
            BAR_HEIGHT
        }
    }

    /// Shows the element-mode bar and returns the new total height.
    pub fn show_element_toolbar(&mut self) -> i32 {
        self.element_mode = true;
        self.total_height()
    }

    /// Hides the element-mode bar and returns the new total height.
    pub fn hide_element_toolbar(&mut self) -> i32 {
        self.element_mode = false;
        self.total_height()
    }

    /// Commits a manual field edit into the rectangle.
    ///
    /// Position fields apply with translation semantics; size fields
    /// resize. The rectangle clamps and, for unparseable text, retains its
    /// previous value; either way the readouts are refreshed through the
    /// mirror before this returns.
    pub fn commit(&mut self, field: Field, text: &str, rect: &mut RulerRect) {
        match field {
            Field::Width => rect.set_width(text, self),
            Field::Height => rect.set_height(text, self),
            Field::Left => rect.set_left(text, true, self),
            Field::Top => rect.set_top(text, true, self),
            Field::Right => rect.set_right(text, true, self),
            Field::Bottom => rect.set_bottom(text, true, self),
        }
    }
}

impl RectMirror for Toolbar {
    fn set_left(&mut self, left: i32) {
        self.readouts.left = left;
    }

    fn set_top(&mut self, top: i32) {
        self.readouts.top = top;
    }

    fn set_right(&mut self, right: i32) {
        self.readouts.right = right;
    }

    fn set_bottom(&mut self, bottom: i32) {
        self.readouts.bottom = bottom;
    }

    fn set_width(&mut self, width: i32) {
        self.readouts.width = width;
    }

    fn set_height(&mut self, height: i32) {
        self.readouts.height = height;
    }
}
