//! Marquee widget for iced
//!
//! A primitive component that implements iced's `Widget` trait. It lays
//! its children out in a single horizontal strip using the layout
//! engine, shifted left by the driver's current offset, and clips to
//! its own bounds. Children fully outside the viewport are culled from
//! drawing.
//!
//! # Design
//!
//! This is a primitive: it uses generic Message, Theme and Renderer
//! types and does not depend on host-application types. The animation
//! state lives in the host (`Rc<RefCell<MarqueeState>>`) so it survives
//! across frames; the host drives it from its update loop via
//! [`MarqueeState::tick`], scheduled with [`tick_subscription`].
//!
//! Drag-to-scroll is intentionally not implemented; the strip only
//! moves under the animation driver.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::mouse::{self, Cursor};
use iced::{Element, Event, Length, Point, Rectangle, Size};
use std::cell::RefCell;
use std::rc::Rc;

use crate::driver::TICK_INTERVAL;
use crate::engine::MarqueeState;
use crate::layout::{ItemSize, compute_layout};

/// Fixed-rate tick source for the animation, gated on the running flag.
///
/// While the marquee is stopped this is `Subscription::none()`, so no
/// timer exists at all; dropping the subscription is what guarantees no
/// tick fires against a stopped or detached widget.
pub fn tick_subscription(running: bool) -> iced::Subscription<iced::time::Instant> {
    if running {
        iced::time::every(TICK_INTERVAL)
    } else {
        iced::Subscription::none()
    }
}

/// A horizontally scrolling strip of child elements.
pub struct Marquee<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer>
where
    Renderer: renderer::Renderer,
{
    /// Content items, in placement order
    children: Vec<Element<'a, Message, Theme, Renderer>>,
    /// Shared animation state (persists across frames)
    state: Rc<RefCell<MarqueeState>>,
    /// Width of the strip
    width: Length,
    /// Height of the strip
    height: Length,
}

impl<'a, Message, Theme, Renderer> Marquee<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    /// Create a marquee over the given state and children.
    pub fn new(
        state: Rc<RefCell<MarqueeState>>,
        children: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            children: children.into_iter().collect(),
            state,
            width: Length::Fill,
            height: Length::Shrink,
        }
    }

    /// Set the width of the strip
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the height of the strip
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Marquee<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        let max = limits.max();

        // Measure every child at its intrinsic width; the strip itself
        // is unbounded horizontally, that is the point of a marquee.
        let child_limits =
            layout::Limits::new(Size::ZERO, Size::new(f32::INFINITY, max.height));

        let mut nodes = Vec::with_capacity(self.children.len());
        let mut sizes = Vec::with_capacity(self.children.len());

        for (child, child_tree) in self.children.iter_mut().zip(&mut tree.children) {
            let node = child.as_widget_mut().layout(child_tree, renderer, &child_limits);
            sizes.push(ItemSize::new(node.size().width, node.size().height));
            nodes.push(node);
        }

        // Re-sync the engine; identical sizes are a no-op, a genuine
        // change recomputes layout and resets the scroll.
        let (offset, item_offsets, total_width) = {
            let mut state = self.state.borrow_mut();
            let content_width = compute_layout(&sizes, state.config().spacing).total_width;
            state.set_viewport_width(finite_viewport_width(max.width, content_width));
            state.set_content_items(&sizes);
            (
                state.offset_x(),
                state.layout().offsets.clone(),
                state.layout().total_width,
            )
        };

        let strip_height = sizes.iter().map(|s| s.height).fold(0.0_f32, f32::max);
        let size = limits.resolve(
            self.width,
            self.height,
            Size::new(total_width.min(max.width), strip_height),
        );
        // An unbounded fill resolves to an infinite width; size the
        // node to the content instead.
        let size = if size.width.is_finite() {
            size
        } else {
            Size::new(total_width, size.height)
        };

        let children = nodes
            .into_iter()
            .zip(item_offsets)
            .map(|(node, item_x)| {
                // Center each item vertically within the strip.
                let y = ((size.height - node.size().height) / 2.0).max(0.0);
                node.move_to(Point::new(item_x - offset, y))
            })
            .collect();

        layout::Node::with_children(size, children)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        // Clip to the strip and cull children that are fully off-screen
        renderer.with_layer(bounds, |renderer| {
            for ((child, child_tree), child_layout) in self
                .children
                .iter()
                .zip(&tree.children)
                .zip(layout.children())
            {
                if child_layout.bounds().intersects(&bounds) {
                    child.as_widget().draw(
                        child_tree,
                        renderer,
                        theme,
                        style,
                        child_layout,
                        cursor,
                        viewport,
                    );
                }
            }
        });
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        for ((child, child_tree), child_layout) in self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            child.as_widget_mut().update(
                child_tree,
                event,
                child_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .map(|((child, child_tree), child_layout)| {
                child.as_widget().mouse_interaction(
                    child_tree,
                    child_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
            .max()
            .unwrap_or_default()
    }
}

/// Viewport width fed to the engine. In a horizontally unbounded
/// container there is no finite viewport; fall back to the content
/// span so the initial offset and the end-of-travel bound stay finite
/// instead of wedging the driver at -inf.
fn finite_viewport_width(max_width: f32, content_width: f32) -> f32 {
    if max_width.is_finite() {
        max_width
    } else {
        content_width
    }
}

impl<'a, Message, Theme, Renderer> From<Marquee<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(marquee: Marquee<'a, Message, Theme, Renderer>) -> Self {
        Element::new(marquee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_viewport_passes_through() {
        assert_eq!(finite_viewport_width(300.0, 160.0), 300.0);
        assert_eq!(finite_viewport_width(0.0, 160.0), 0.0);
    }

    #[test]
    fn test_unbounded_viewport_falls_back_to_content() {
        assert_eq!(finite_viewport_width(f32::INFINITY, 160.0), 160.0);
        assert_eq!(finite_viewport_width(f32::INFINITY, 0.0), 0.0);
    }

    #[test]
    fn test_unbounded_container_does_not_wedge_driver() {
        // The layout pass of a marquee inside an unbounded container:
        // the fallback keeps every offset finite and the strip cycling.
        let mut state = MarqueeState::default();
        let sizes = [ItemSize::new(100.0, 24.0), ItemSize::new(50.0, 24.0)];

        let content_width = compute_layout(&sizes, state.config().spacing).total_width;
        state.set_viewport_width(finite_viewport_width(f32::INFINITY, content_width));
        state.set_content_items(&sizes);
        state.start();

        assert!(state.offset_x().is_finite());
        for _ in 0..1000 {
            let x = state.tick().unwrap();
            assert!(x.is_finite());
        }
    }
}
