// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document seam and pure traversal.

use alloc::string::String;

use smallvec::SmallVec;

/// Border-box geometry of a document node, in page pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeBounds {
    /// Left edge relative to the page origin.
    pub left: i32,
    /// Top edge relative to the page origin.
    pub top: i32,
    /// Border-box width.
    pub width: i32,
    /// Border-box height.
    pub height: i32,
}

/// A cheap-to-clone handle to a node in the host document.
///
/// The host supplies the implementation; traversal and inspection never
/// mutate the document through it. `kind` reports the lowercase tag name
/// for element nodes.
pub trait DomNode: Clone {
    /// The parent node, if any.
    fn parent(&self) -> Option<Self>;

    /// The first child node, if any.
    fn first_child(&self) -> Option<Self>;

    /// The next sibling node, if any.
    fn next_sibling(&self) -> Option<Self>;

    /// The previous sibling node, if any.
    fn prev_sibling(&self) -> Option<Self>;

    /// Whether this node is an element (as opposed to text, comments, and
    /// other non-element nodes).
    fn is_element(&self) -> bool;

    /// Whether this node is the document root element.
    fn is_document_root(&self) -> bool;

    /// Lowercase tag name. Only meaningful when [`is_element`] is true.
    ///
    /// [`is_element`]: DomNode::is_element
    fn kind(&self) -> String;

    /// The node's `id` attribute, if set and non-empty.
    fn id(&self) -> Option<String>;

    /// The node's class list, in document order.
    fn classes(&self) -> SmallVec<[String; 4]>;

    /// Border-box bounds in page coordinates.
    fn bounds(&self) -> NodeBounds;

    /// The document's `body` element, if one exists.
    fn document_body(&self) -> Option<Self>;
}

/// One traversal step from an inspected element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The parent element.
    Up,
    /// The first legal child element.
    Down,
    /// The nearest legal preceding sibling.
    Previous,
    /// The nearest legal following sibling.
    Next,
}

impl Direction {
    /// Stable name for usage tracking.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "Parent",
            Self::Down => "Child",
            Self::Previous => "Previous",
            Self::Next => "Next",
        }
    }
}

/// Tags that never render and are therefore not worth measuring.
pub(crate) fn is_blocked_kind(kind: &str) -> bool {
    kind.eq_ignore_ascii_case("script") || kind.eq_ignore_ascii_case("noscript")
}

fn is_skippable<N: DomNode>(node: &N) -> bool {
    if !node.is_element() {
        return true;
    }
    let kind = node.kind();
    is_blocked_kind(&kind) || kind.eq_ignore_ascii_case("head")
}

/// Resolves one traversal step from `node`, or `None` when no legal
/// target exists in that direction.
///
/// Non-element nodes and `script`/`noscript`/`head` tags are skipped when
/// walking siblings and children, with one exception: a `head` reached as
/// a child resolves to the document body instead (stepping down from the
/// root lands on the body, matching where content actually renders).
/// `Up` stops below the document root.
pub fn navigate<N: DomNode>(node: &N, direction: Direction) -> Option<N> {
    match direction {
        Direction::Up => node
            .parent()
            .filter(|parent| parent.is_element() && !parent.is_document_root()),
        Direction::Down => {
            let mut child = node.first_child();
            while let Some(candidate) = child {
                if candidate.is_element() {
                    let kind = candidate.kind();
                    if kind.eq_ignore_ascii_case("head") {
                        return candidate.document_body();
                    }
                    if !is_blocked_kind(&kind) {
                        return Some(candidate);
                    }
                }
                child = candidate.next_sibling();
            }
            None
        }
        Direction::Previous => {
            let mut sibling = node.prev_sibling();
            while let Some(candidate) = sibling {
                if !is_skippable(&candidate) {
                    return Some(candidate);
                }
                sibling = candidate.prev_sibling();
            }
            None
        }
        Direction::Next => {
            let mut sibling = node.next_sibling();
            while let Some(candidate) = sibling {
                if !is_skippable(&candidate) {
                    return Some(candidate);
                }
                sibling = candidate.next_sibling();
            }
            None
        }
    }
}
