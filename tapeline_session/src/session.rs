// Copyright 2025 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session object and its event entry points.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::cell::RefCell;

use kurbo::Point;
use tapeline_bounds::{Dimensions, PointerMap};
use tapeline_inspect::{Direction, DomNode, Inspector};
use tapeline_interact::{Interaction, ResizeEdges};
use tapeline_rect::RulerRect;
use tapeline_toolbar::{BAR_HEIGHT, ELEMENT_BAR_HEIGHT, Field, Labels, Toolbar};

use crate::color::hex_to_rgba;
use crate::release::ReleaseStack;
use crate::traits::{ColorStore, EventSink, HitTest, Locale, Transform};

/// Category under which all usage events are recorded.
const EVENT_CATEGORY: &str = "Action";

/// Virtual page recorded when the overlay is enabled.
const PAGEVIEW: &str = "/pageruler";

/// What the pointer went down on, as classified by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The rectangle's interior.
    RulerBody,
    /// An edge or corner handle, carrying the edges it resizes.
    Handle(ResizeEdges),
    /// The page content outside the rectangle.
    Page,
    /// The overlay's own toolbar or other injected chrome.
    Chrome,
    /// A document scrollbar.
    Scrollbar,
}

/// Extents of the click-catching mask that covers the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaskExtents {
    /// Mask width in page pixels.
    pub width: i32,
    /// Mask height in page pixels.
    pub height: i32,
}

/// One activation of the measurement overlay on a page.
///
/// Owns all overlay state and routes host events between the rectangle,
/// the toolbar, the drag interaction, and the element inspector. The host
/// drives it from its event loop and renders from the state it exposes.
///
/// Entry points are inert until [`enable`](Session::enable) and after
/// [`disable`](Session::disable); both are idempotent.
pub struct Session<N, C, E, H>
where
    N: DomNode,
    C: ColorStore,
    E: EventSink,
    H: HitTest<N>,
{
    dimensions: Dimensions,
    rect: RulerRect,
    toolbar: Toolbar,
    interaction: Interaction,
    inspector: Inspector<N>,
    mask: Rc<RefCell<MaskExtents>>,
    releases: ReleaseStack,
    colors: C,
    events: E,
    hit_test: H,
    enabled: bool,
}

impl<N, C, E, H> Session<N, C, E, H>
where
    N: DomNode,
    C: ColorStore,
    E: EventSink,
    H: HitTest<N>,
{
    /// Creates a disabled session for a page with the given scroll
    /// extents. Toolbar labels are resolved through `locale` once, here.
    #[must_use]
    pub fn new(
        scroll_width: i32,
        scroll_height: i32,
        locale: &dyn Locale,
        colors: C,
        events: E,
        hit_test: H,
    ) -> Self {
        let dimensions = Dimensions::new(scroll_width, scroll_height);
        let rect = RulerRect::new(dimensions.bounds());
        Self {
            dimensions,
            rect,
            toolbar: Toolbar::new(resolve_labels(locale)),
            interaction: Interaction::new(),
            inspector: Inspector::new(),
            mask: Rc::new(RefCell::new(MaskExtents::default())),
            releases: ReleaseStack::new(),
            colors,
            events,
            hit_test,
            enabled: false,
        }
    }

    /// Whether the overlay is currently enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The measurement rectangle.
    #[must_use]
    pub fn rect(&self) -> &RulerRect {
        &self.rect
    }

    /// The toolbar mirror.
    #[must_use]
    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    /// The page dimension tracker.
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// The drag interaction state.
    #[must_use]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// The element inspector.
    #[must_use]
    pub fn inspector(&self) -> &Inspector<N> {
        &self.inspector
    }

    /// Current extents of the click-catching mask.
    #[must_use]
    pub fn mask_extents(&self) -> MaskExtents {
        *self.mask.borrow()
    }

    /// The interior fill for the current ruler color, or `None` when the
    /// stored color is malformed.
    #[must_use]
    pub fn fill_color(&self, alpha: f64) -> Option<String> {
        hex_to_rgba(self.toolbar.color(), alpha)
    }

    /// The coordinate map for the current chrome state.
    #[must_use]
    pub fn pointer_map(&self) -> PointerMap {
        let mut map = PointerMap::new(&self.dimensions);
        map.bar_height = BAR_HEIGHT;
        map.element_bar_height = ELEMENT_BAR_HEIGHT;
        map.element_mode = self.toolbar.element_mode();
        map
    }

    /// Registers host teardown to run on [`disable`](Session::disable),
    /// in reverse registration order.
    pub fn on_release(&mut self, callback: impl FnOnce() + 'static) {
        self.releases.push(callback);
    }

    /// Activates the overlay: loads the color preference, sizes the mask
    /// to the page, records the page shift, and tracks a pageview.
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.enabled = true;

        let color = self.colors.color();
        self.toolbar.set_color(&color);
        self.dimensions.set_offsets(0, self.toolbar.total_height());

        let bounds = self.dimensions.bounds();
        *self.mask.borrow_mut() = MaskExtents {
            width: bounds.width(),
            height: bounds.height(),
        };
        let mask = Rc::clone(&self.mask);
        self.dimensions.add_update_callback(move |right, bottom| {
            *mask.borrow_mut() = MaskExtents {
                width: right,
                height: bottom,
            };
        });

        self.events.track_pageview(PAGEVIEW);
    }

    /// Deactivates the overlay: runs release callbacks in reverse order,
    /// drops dimension subscribers, and resets all per-session state.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.releases.release_all();
        self.dimensions.clear_update_callbacks();
        self.dimensions.set_offsets(0, 0);
        self.interaction = Interaction::new();
        self.inspector.clear();
        self.toolbar.hide_element_toolbar();
        self.enabled = false;
    }

    /// Pointer-down, with the host's classification of what was hit.
    /// `page` and `client` are the raw event positions.
    pub fn pointer_down(&mut self, target: PointerTarget, page: Point, client: Point) {
        if !self.enabled {
            return;
        }
        let map = self.pointer_map();
        match target {
            PointerTarget::Chrome | PointerTarget::Scrollbar => {}
            PointerTarget::RulerBody => {
                if !self.tracking() {
                    self.interaction.ruler_down();
                }
            }
            PointerTarget::Handle(edges) => {
                if !self.tracking() {
                    self.interaction.handle_down(edges);
                }
            }
            PointerTarget::Page => {
                if self.tracking() {
                    let element = self.hit_test.element_at(map.client_point(client));
                    if self
                        .inspector
                        .set_element(element, &mut self.rect, &mut self.toolbar)
                    {
                        let label = self
                            .inspector
                            .element()
                            .map(|inspected| inspected.descriptor.to_string())
                            .unwrap_or_default();
                        self.events
                            .track_event(EVENT_CATEGORY, "Element Mode Click", &label);
                    }
                } else {
                    self.interaction
                        .page_down(map.page_point(page), &mut self.rect, &mut self.toolbar);
                }
            }
        }
    }

    /// Pointer-move. While tracking, hovers inspect the element under the
    /// pointer instead of moving or resizing the rectangle.
    pub fn pointer_move(&mut self, page: Point, client: Point) {
        if !self.enabled {
            return;
        }
        let map = self.pointer_map();
        if self.tracking() {
            let element = self.hit_test.element_at(map.client_point(client));
            self.inspector
                .set_element(element, &mut self.rect, &mut self.toolbar);
        } else {
            self.interaction
                .pointer_move(map.page_point(page), &mut self.rect, &mut self.toolbar);
        }
    }

    /// Pointer-up anywhere: ends any drag in progress.
    pub fn pointer_up(&mut self) {
        if !self.enabled {
            return;
        }
        self.interaction.pointer_up();
    }

    /// Document click: while tracking, any click outside the scrollbars
    /// and the overlay chrome turns tracking off (single-shot pick).
    pub fn document_click(&mut self, target: PointerTarget) {
        if !self.enabled || !self.tracking() {
            return;
        }
        if matches!(target, PointerTarget::Scrollbar | PointerTarget::Chrome) {
            return;
        }
        self.inspector.set_tracking(false);
        self.events.track_event(EVENT_CATEGORY, "Tracking Mode", "Off");
    }

    /// Window resize: refreshes the page bounds (resizing the mask through
    /// the dimension subscription) and re-clamps the rectangle.
    pub fn window_resized(&mut self, scroll_width: i32, scroll_height: i32) {
        if !self.enabled {
            return;
        }
        self.dimensions.update(scroll_width, scroll_height);
        self.rect
            .set_bounds(self.dimensions.bounds(), &mut self.toolbar);
    }

    /// Commits a manual toolbar field edit into the rectangle.
    pub fn commit_field(&mut self, field: Field, text: &str) {
        if !self.enabled {
            return;
        }
        self.toolbar.commit(field, text, &mut self.rect);
        self.events
            .track_event(EVENT_CATEGORY, "Ruler Change", field.name());
    }

    /// Toggles element mode. Showing the element toolbar enables tracking;
    /// hiding it drops the inspected element. Either way the page shift is
    /// re-recorded from the new chrome height.
    pub fn toggle_element_mode(&mut self) {
        if !self.enabled {
            return;
        }
        if self.toolbar.element_mode() {
            self.toolbar.hide_element_toolbar();
            self.inspector.clear();
            self.events
                .track_event(EVENT_CATEGORY, "Element Toolbar", "Hide");
        } else {
            self.toolbar.show_element_toolbar();
            self.inspector.set_tracking(true);
            self.events
                .track_event(EVENT_CATEGORY, "Element Toolbar", "Show");
        }
        self.dimensions.set_offsets(0, self.toolbar.total_height());
    }

    /// Turns tracking mode on or off explicitly (the toolbar toggle).
    pub fn set_tracking(&mut self, tracking: bool) {
        if !self.enabled {
            return;
        }
        self.inspector.set_tracking(tracking);
        let label = if tracking { "On" } else { "Off" };
        self.events.track_event(EVENT_CATEGORY, "Tracking Mode", label);
    }

    /// The admissible element one step from the inspected one, for the
    /// host's navigation affordances. `None` hides the affordance.
    #[must_use]
    pub fn navigation_target(&self, direction: Direction) -> Option<N> {
        self.inspector.navigation_target(direction)
    }

    /// Steps the inspected element and re-seeds the rectangle.
    pub fn navigate(&mut self, direction: Direction) {
        if !self.enabled {
            return;
        }
        if self
            .inspector
            .navigate(direction, &mut self.rect, &mut self.toolbar)
        {
            self.events
                .track_event(EVENT_CATEGORY, "Element Click", direction.name());
        }
    }

    /// Updates the ruler color, persisting it when `save` is set.
    pub fn set_color(&mut self, hex: &str, save: bool) {
        if !self.enabled {
            return;
        }
        self.toolbar.set_color(hex);
        if save {
            self.colors.set_color(hex);
        }
    }

    fn tracking(&self) -> bool {
        self.toolbar.element_mode() && self.inspector.tracking()
    }
}

impl<N, C, E, H> core::fmt::Debug for Session<N, C, E, H>
where
    N: DomNode,
    C: ColorStore,
    E: EventSink,
    H: HitTest<N>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("enabled", &self.enabled)
            .field("dimensions", &self.dimensions)
            .field("rect", &self.rect)
            .field("toolbar", &self.toolbar)
            .field("interaction", &self.interaction)
            .field("mask", &*self.mask.borrow())
            .field("releases", &self.releases)
            .finish_non_exhaustive()
    }
}

/// Resolves the toolbar labels through the host locale. Field captions
/// render uppercase.
fn resolve_labels(locale: &dyn Locale) -> Labels {
    Labels {
        width: locale.message("width", Transform::Uppercase),
        height: locale.message("height", Transform::Uppercase),
        left: locale.message("left", Transform::Uppercase),
        top: locale.message("top", Transform::Uppercase),
        right: locale.message("right", Transform::Uppercase),
        bottom: locale.message("bottom", Transform::Uppercase),
        color: locale.message("color", Transform::None),
        close: locale.message("close", Transform::None),
        enable_element_mode: locale.message("enable_element_mode", Transform::None),
        disable_element_mode: locale.message("disable_element_mode", Transform::None),
    }
}
