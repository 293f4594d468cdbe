// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use tapeline_rect::{RectMirror, RectSeed, RulerRect};

use crate::descriptor::Descriptor;
use crate::node::{Direction, DomNode, NodeBounds, is_blocked_kind, navigate};

/// Reserved id prefix for nodes the tool injects into the page.
pub(crate) const CHROME_ID_PREFIX: &str = "page-ruler";

/// The currently inspected element, with its descriptor and the bounds
/// snapshot the rectangle was seeded from.
///
/// Replaced wholesale on every successful [`Inspector::set_element`];
/// never mutated in place.
#[derive(Clone, Debug)]
pub struct Inspected<N> {
    /// Handle to the inspected node.
    pub node: N,
    /// Descriptor captured at inspection time.
    pub descriptor: Descriptor,
    /// Border-box bounds captured at inspection time.
    pub bounds: NodeBounds,
}

/// Element-mode state: the inspected element and the tracking flag.
///
/// Tracking mode, while on, makes the session feed hovered elements to
/// [`set_element`](Inspector::set_element) instead of moving or resizing
/// the rectangle.
#[derive(Clone, Debug)]
pub struct Inspector<N: DomNode> {
    element: Option<Inspected<N>>,
    tracking: bool,
    chrome_prefix: String,
}

impl<N: DomNode> Inspector<N> {
    /// Creates an inspector with no element and tracking off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            element: None,
            tracking: false,
            chrome_prefix: String::from(CHROME_ID_PREFIX),
        }
    }

    /// Overrides the reserved chrome id prefix.
    #[must_use]
    pub fn with_chrome_prefix(mut self, prefix: &str) -> Self {
        self.chrome_prefix.clear();
        self.chrome_prefix.push_str(prefix);
        self
    }

    /// The currently inspected element, if any.
    #[must_use]
    pub fn element(&self) -> Option<&Inspected<N>> {
        self.element.as_ref()
    }

    /// Whether tracking mode is on.
    #[must_use]
    pub fn tracking(&self) -> bool {
        self.tracking
    }

    /// Turns tracking mode on or off.
    pub fn set_tracking(&mut self, tracking: bool) {
        self.tracking = tracking;
    }

    /// Drops the inspected element and turns tracking off.
    pub fn clear(&mut self) {
        self.element = None;
        self.tracking = false;
    }

    /// Whether `node` or any of its ancestors is part of the injected
    /// chrome.
    fn in_chrome(&self, node: &N) -> bool {
        let mut current = Some(node.clone());
        while let Some(candidate) = current {
            if candidate
                .id()
                .is_some_and(|id| id.starts_with(self.chrome_prefix.as_str()))
            {
                return true;
            }
            current = candidate.parent();
        }
        false
    }

    /// Applies the admission rules to a candidate: element nodes only,
    /// never the document root or injected chrome, with `head` resolving
    /// to the document body.
    fn admit(&self, node: N) -> Option<N> {
        if !node.is_element() || node.is_document_root() {
            return None;
        }
        let node = if node.kind().eq_ignore_ascii_case("head") {
            node.document_body()?
        } else {
            node
        };
        if is_blocked_kind(&node.kind()) || self.in_chrome(&node) {
            return None;
        }
        Some(node)
    }

    /// Inspects `node` and seeds the rectangle from its bounds.
    ///
    /// Returns `false` without touching any state when the candidate is
    /// absent or inadmissible (document root, non-element, non-renderable
    /// tag, injected chrome).
    pub fn set_element(
        &mut self,
        node: Option<N>,
        rect: &mut RulerRect,
        mirror: &mut dyn RectMirror,
    ) -> bool {
        let Some(node) = node.and_then(|node| self.admit(node)) else {
            return false;
        };
        let bounds = node.bounds();
        rect.reset(
            RectSeed {
                left: bounds.left,
                top: bounds.top,
                width: bounds.width,
                height: bounds.height,
            },
            mirror,
        );
        let descriptor = Descriptor::for_node(&node);
        self.element = Some(Inspected {
            node,
            descriptor,
            bounds,
        });
        true
    }

    /// The admissible element one traversal step away, or `None` when the
    /// corresponding affordance should be hidden.
    #[must_use]
    pub fn navigation_target(&self, direction: Direction) -> Option<N> {
        let current = self.element.as_ref()?;
        let target = navigate(&current.node, direction)?;
        self.admit(target)
    }

    /// Steps the inspection one traversal step, seeding the rectangle
    /// from the new element. Returns `false` when no target exists.
    pub fn navigate(
        &mut self,
        direction: Direction,
        rect: &mut RulerRect,
        mirror: &mut dyn RectMirror,
    ) -> bool {
        let target = self.navigation_target(direction);
        self.set_element(target, rect, mirror)
    }
}

impl<N: DomNode> Default for Inspector<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::{Rc, Weak};
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use smallvec::SmallVec;
    use tapeline_bounds::PageBounds;
    use tapeline_rect::RulerRect;

    use super::{Inspector, NodeBounds};
    use crate::node::{Direction, DomNode, navigate};

    struct NodeData {
        kind: &'static str,
        id: Option<&'static str>,
        classes: &'static [&'static str],
        bounds: NodeBounds,
        element: bool,
        root: bool,
        parent: RefCell<Weak<NodeData>>,
        children: RefCell<Vec<Rc<NodeData>>>,
    }

    #[derive(Clone)]
    struct MockNode(Rc<NodeData>);

    impl MockNode {
        fn new(kind: &'static str, id: Option<&'static str>, bounds: NodeBounds) -> Self {
            Self(Rc::new(NodeData {
                kind,
                id,
                classes: &[],
                bounds,
                element: true,
                root: false,
                parent: RefCell::new(Weak::new()),
                children: RefCell::new(Vec::new()),
            }))
        }

        fn text() -> Self {
            let mut node = Self::new("", None, NodeBounds::default());
            Rc::get_mut(&mut node.0).unwrap().element = false;
            node
        }

        fn with_classes(self, classes: &'static [&'static str]) -> Self {
            let mut node = self;
            Rc::get_mut(&mut node.0).unwrap().classes = classes;
            node
        }

        fn as_root(self) -> Self {
            let mut node = self;
            Rc::get_mut(&mut node.0).unwrap().root = true;
            node
        }

        fn append(&self, child: &MockNode) {
            *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
            self.0.children.borrow_mut().push(Rc::clone(&child.0));
        }

        fn root(&self) -> MockNode {
            let mut current = MockNode(Rc::clone(&self.0));
            while let Some(parent) = current.parent() {
                current = parent;
            }
            current
        }

        fn sibling(&self, offset: isize) -> Option<MockNode> {
            let parent = self.0.parent.borrow().upgrade()?;
            let children = parent.children.borrow();
            let index = children
                .iter()
                .position(|child| Rc::ptr_eq(child, &self.0))?;
            let index = index.checked_add_signed(offset)?;
            children.get(index).map(|child| MockNode(Rc::clone(child)))
        }
    }

    impl DomNode for MockNode {
        fn parent(&self) -> Option<Self> {
            self.0.parent.borrow().upgrade().map(MockNode)
        }

        fn first_child(&self) -> Option<Self> {
            self.0
                .children
                .borrow()
                .first()
                .map(|child| MockNode(Rc::clone(child)))
        }

        fn next_sibling(&self) -> Option<Self> {
            self.sibling(1)
        }

        fn prev_sibling(&self) -> Option<Self> {
            self.sibling(-1)
        }

        fn is_element(&self) -> bool {
            self.0.element
        }

        fn is_document_root(&self) -> bool {
            self.0.root
        }

        fn kind(&self) -> String {
            self.0.kind.to_string()
        }

        fn id(&self) -> Option<String> {
            self.0.id.map(String::from)
        }

        fn classes(&self) -> SmallVec<[String; 4]> {
            self.0.classes.iter().map(|c| String::from(*c)).collect()
        }

        fn bounds(&self) -> NodeBounds {
            self.0.bounds
        }

        fn document_body(&self) -> Option<Self> {
            let root = self.root();
            let children = root.0.children.borrow();
            children
                .iter()
                .find(|child| child.kind == "body")
                .map(|child| MockNode(Rc::clone(child)))
        }
    }

    struct Fixture {
        html: MockNode,
        body: MockNode,
        content: MockNode,
        paragraph: MockNode,
        script: MockNode,
        span: MockNode,
        chrome_button: MockNode,
    }

    // html(root) > { head, body > { div#content.box.wide > { p, <text>,
    // script, span }, div#page-ruler-toolbar > button } }
    fn fixture() -> Fixture {
        let html = MockNode::new("html", None, NodeBounds::default()).as_root();
        let head = MockNode::new("head", None, NodeBounds::default());
        let body = MockNode::new(
            "body",
            None,
            NodeBounds {
                left: 0,
                top: 0,
                width: 1000,
                height: 800,
            },
        );
        html.append(&head);
        html.append(&body);

        let content = MockNode::new(
            "div",
            Some("content"),
            NodeBounds {
                left: 20,
                top: 40,
                width: 300,
                height: 200,
            },
        )
        .with_classes(&["box", "wide"]);
        let chrome = MockNode::new("div", Some("page-ruler-toolbar"), NodeBounds::default());
        body.append(&content);
        body.append(&chrome);

        let paragraph = MockNode::new(
            "p",
            None,
            NodeBounds {
                left: 25,
                top: 45,
                width: 290,
                height: 40,
            },
        );
        let text = MockNode::text();
        let script = MockNode::new("script", None, NodeBounds::default());
        let span = MockNode::new(
            "span",
            None,
            NodeBounds {
                left: 25,
                top: 90,
                width: 100,
                height: 20,
            },
        );
        content.append(&paragraph);
        content.append(&text);
        content.append(&script);
        content.append(&span);

        let chrome_button = MockNode::new("button", None, NodeBounds::default());
        chrome.append(&chrome_button);

        Fixture {
            html,
            body,
            content,
            paragraph,
            script,
            span,
            chrome_button,
        }
    }

    fn rect() -> RulerRect {
        RulerRect::new(PageBounds::new(1000, 800))
    }

    #[test]
    fn traversal_skips_text_scripts_and_head() {
        let fx = fixture();
        let next = navigate(&fx.paragraph, Direction::Next).unwrap();
        assert_eq!(next.kind(), "span");
        let prev = navigate(&fx.span, Direction::Previous).unwrap();
        assert_eq!(prev.kind(), "p");
        let down = navigate(&fx.content, Direction::Down).unwrap();
        assert_eq!(down.kind(), "p");
    }

    #[test]
    fn down_from_root_resolves_the_body() {
        let fx = fixture();
        let down = navigate(&fx.html, Direction::Down).unwrap();
        assert_eq!(down.kind(), "body");
    }

    #[test]
    fn up_stops_below_the_document_root() {
        let fx = fixture();
        let up = navigate(&fx.content, Direction::Up).unwrap();
        assert_eq!(up.kind(), "body");
        assert!(navigate(&fx.body, Direction::Up).is_none());
    }

    #[test]
    fn set_element_seeds_the_rectangle() {
        let fx = fixture();
        let mut rect = rect();
        let mut inspector = Inspector::new();
        assert!(inspector.set_element(Some(fx.content.clone()), &mut rect, &mut ()));
        assert_eq!((rect.left(), rect.top()), (20, 40));
        assert_eq!((rect.width(), rect.height()), (300, 200));
        let inspected = inspector.element().unwrap();
        assert_eq!(inspected.descriptor.to_string(), "div#content.box.wide");
    }

    #[test]
    fn document_root_is_not_inspectable() {
        let fx = fixture();
        let mut rect = rect();
        let mut inspector = Inspector::new();
        assert!(!inspector.set_element(Some(fx.html), &mut rect, &mut ()));
        assert!(!inspector.set_element(None, &mut rect, &mut ()));
        assert!(inspector.element().is_none());
    }

    #[test]
    fn injected_chrome_is_not_inspectable() {
        let fx = fixture();
        let mut rect = rect();
        let mut inspector = Inspector::new();
        // Rejected through the ancestor chain, not just the node's own id.
        assert!(!inspector.set_element(Some(fx.chrome_button), &mut rect, &mut ()));
    }

    #[test]
    fn scripts_are_not_inspectable() {
        let fx = fixture();
        let mut rect = rect();
        let mut inspector = Inspector::new();
        assert!(!inspector.set_element(Some(fx.script), &mut rect, &mut ()));
    }

    #[test]
    fn navigation_targets_hide_missing_affordances() {
        let fx = fixture();
        let mut rect = rect();
        let mut inspector = Inspector::new();
        assert!(inspector.set_element(Some(fx.paragraph), &mut rect, &mut ()));
        assert!(inspector.navigation_target(Direction::Previous).is_none());
        assert!(inspector.navigation_target(Direction::Next).is_some());
        assert!(inspector.navigation_target(Direction::Up).is_some());
        assert!(inspector.navigation_target(Direction::Down).is_none());
    }

    #[test]
    fn navigate_moves_the_inspection() {
        let fx = fixture();
        let mut rect = rect();
        let mut inspector = Inspector::new();
        assert!(inspector.set_element(Some(fx.paragraph), &mut rect, &mut ()));
        assert!(inspector.navigate(Direction::Next, &mut rect, &mut ()));
        assert_eq!(inspector.element().unwrap().descriptor.kind, "span");
        assert_eq!((rect.left(), rect.top()), (25, 90));
        assert!(!inspector.navigate(Direction::Next, &mut rect, &mut ()));
        assert_eq!(inspector.element().unwrap().descriptor.kind, "span");
    }

    #[test]
    fn clear_drops_element_and_tracking() {
        let fx = fixture();
        let mut rect = rect();
        let mut inspector = Inspector::new();
        inspector.set_tracking(true);
        assert!(inspector.set_element(Some(fx.span), &mut rect, &mut ()));
        inspector.clear();
        assert!(inspector.element().is_none());
        assert!(!inspector.tracking());
    }
}
