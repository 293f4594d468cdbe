// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

use crate::DomNode;

/// The `tag#id.class` summary of an inspected element.
///
/// Renders through [`Display`](fmt::Display) as the tag name, followed by
/// `#id` when the element has an id, followed by `.class` for each class
/// in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    /// Lowercase tag name.
    pub kind: String,
    /// The element's id, if any.
    pub id: Option<String>,
    /// Classes in document order.
    pub classes: SmallVec<[String; 4]>,
}

impl Descriptor {
    /// Captures the descriptor of `node`.
    pub fn for_node<N: DomNode>(node: &N) -> Self {
        Self {
            kind: node.kind(),
            id: node.id(),
            classes: node.classes(),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)?;
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use smallvec::smallvec;

    use super::Descriptor;

    #[test]
    fn renders_tag_id_and_classes() {
        let descriptor = Descriptor {
            kind: String::from("div"),
            id: Some(String::from("content")),
            classes: smallvec![String::from("box"), String::from("wide")],
        };
        assert_eq!(descriptor.to_string(), "div#content.box.wide");
    }

    #[test]
    fn omits_missing_parts() {
        let descriptor = Descriptor {
            kind: String::from("span"),
            id: None,
            classes: smallvec![],
        };
        assert_eq!(descriptor.to_string(), "span");
    }
}
