// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits the host implements.

use alloc::string::String;

use kurbo::Point;

/// Ruler color used when the store has no saved preference.
pub const DEFAULT_COLOR: &str = "#0080ff";

/// Persists the user's ruler color preference.
pub trait ColorStore {
    /// The saved color, or [`DEFAULT_COLOR`] when none was saved yet.
    fn color(&self) -> String;

    /// Saves a new color preference.
    fn set_color(&mut self, hex: &str);
}

/// A store with no persistence; always reports the default color.
impl ColorStore for () {
    fn color(&self) -> String {
        String::from(DEFAULT_COLOR)
    }

    fn set_color(&mut self, _hex: &str) {}
}

/// Receives usage events. Implementations must not block; delivery is
/// fire-and-forget.
pub trait EventSink {
    /// Records an event under a category, with an action and a label.
    fn track_event(&mut self, category: &str, action: &str, label: &str);

    /// Records that the overlay was shown on a page.
    fn track_pageview(&mut self, page: &str);
}

/// Discards all events.
impl EventSink for () {
    fn track_event(&mut self, _category: &str, _action: &str, _label: &str) {}

    fn track_pageview(&mut self, _page: &str) {}
}

/// Case transform applied to a resolved message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transform {
    /// Use the message as resolved.
    #[default]
    None,
    /// Lowercase the resolved message.
    Lowercase,
    /// Uppercase the resolved message.
    Uppercase,
}

impl Transform {
    /// Applies the transform to a resolved message.
    #[must_use]
    pub fn apply(self, message: &str) -> String {
        match self {
            Self::None => String::from(message),
            Self::Lowercase => message.to_lowercase(),
            Self::Uppercase => message.to_uppercase(),
        }
    }
}

/// Resolves localized interface messages.
pub trait Locale {
    /// Resolves `key` to a message and applies `transform`.
    fn message(&self, key: &str, transform: Transform) -> String;
}

/// No localization; echoes the key through the transform.
impl Locale for () {
    fn message(&self, key: &str, transform: Transform) -> String {
        transform.apply(key)
    }
}

/// Resolves the document element under a viewport point.
///
/// Implementations must hide the overlay visuals for the duration of the
/// query so the ruler and mask never shadow the page content being
/// inspected.
pub trait HitTest<N> {
    /// The topmost page element at `client`, if any.
    fn element_at(&mut self, client: Point) -> Option<N>;
}

#[cfg(test)]
mod tests {
    use super::{ColorStore, DEFAULT_COLOR, Transform};

    #[test]
    fn unit_store_reports_the_default_color() {
        assert_eq!(().color(), DEFAULT_COLOR);
    }

    #[test]
    fn transforms_apply_case() {
        assert_eq!(Transform::None.apply("Width"), "Width");
        assert_eq!(Transform::Lowercase.apply("Width"), "width");
        assert_eq!(Transform::Uppercase.apply("Width"), "WIDTH");
    }
}
