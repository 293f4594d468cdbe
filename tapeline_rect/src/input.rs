// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer-or-invalid pixel input.

/// A pixel value offered to a rectangle setter.
///
/// Setters accept `impl Into<PxInput>`, so call sites can pass an `i32`
/// directly or the raw text of a manual field edit. Invalid text resolves to
/// [`PxInput::Invalid`], which every setter treats as "retain the previous
/// value" — malformed input is a silent no-op, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PxInput {
    /// A parsed pixel value.
    Px(i32),
    /// Input that did not parse as an integer.
    Invalid,
}

impl PxInput {
    /// Resolves the input, substituting `previous` when invalid.
    #[must_use]
    pub fn or(self, previous: i32) -> i32 {
        match self {
            Self::Px(value) => value,
            Self::Invalid => previous,
        }
    }
}

impl From<i32> for PxInput {
    fn from(value: i32) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for PxInput {
    fn from(text: &str) -> Self {
        match text.trim().parse::<i32>() {
            Ok(value) => Self::Px(value),
            Err(_) => Self::Invalid,
        }
    }
}
