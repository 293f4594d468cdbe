// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Inspect: element inspection for the measurement rectangle.
//!
//! The host's document is reached through the [`DomNode`] trait, a
//! cheap-to-clone node handle. On top of it this crate provides:
//!
//! - [`navigate`], a pure traversal step that resolves the parent, first
//!   legal child, or nearest legal sibling of a node, skipping non-element
//!   nodes and non-renderable tags.
//! - [`Descriptor`], the `tag#id.class` summary shown for an inspected
//!   element.
//! - [`Inspector`], which holds the currently inspected element plus the
//!   tracking-mode flag and seeds the measurement rectangle from element
//!   bounds.
//!
//! Nodes inside the tool's own injected chrome are never inspectable; they
//! are recognized by a reserved id prefix on the node or any ancestor.
//!
//! ## Minimal example
//!
//! Inspecting an element snaps the rectangle to its border box:
//!
//! ```ignore
//! let mut inspector = Inspector::new();
//! if inspector.set_element(Some(clicked), &mut rect, &mut toolbar) {
//!     // rect now covers the element; toolbar readouts are refreshed.
//! }
//! ```

#![no_std]

extern crate alloc;

mod descriptor;
mod inspector;
mod node;

pub use descriptor::Descriptor;
pub use inspector::{Inspected, Inspector};
pub use node::{Direction, DomNode, NodeBounds, navigate};
