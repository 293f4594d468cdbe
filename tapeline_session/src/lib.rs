// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Session: orchestration of the measurement overlay.
//!
//! A [`Session`] owns the page [`Dimensions`], the measurement rectangle,
//! the toolbar mirror, the drag interaction state, and the element
//! inspector, and routes host events between them. The host integrates by
//! implementing the collaborator traits:
//!
//! - [`ColorStore`] persists the user's ruler color preference.
//! - [`EventSink`] receives usage events; `()` discards them.
//! - [`Locale`] resolves toolbar labels; `()` echoes the keys.
//! - [`HitTest`] resolves the element under a viewport point with the
//!   overlay visuals hidden.
//!
//! The session is single-threaded: each entry point runs to completion
//! before the next is delivered, exactly like the event loop it is driven
//! from. Teardown registered with [`Session::on_release`] runs in reverse
//! registration order on [`Session::disable`].
//!
//! [`Dimensions`]: tapeline_bounds::Dimensions

#![no_std]

extern crate alloc;

mod color;
mod release;
mod session;
mod traits;

pub use color::hex_to_rgba;
pub use release::ReleaseStack;
pub use session::{MaskExtents, PointerTarget, Session};
pub use traits::{ColorStore, DEFAULT_COLOR, EventSink, HitTest, Locale, Transform};
