//! Content layout for the marquee strip
//!
//! Places measured items end-to-end, left to right, with a fixed gap
//! between neighbors. The layout is a pure function of the item sizes
//! and the spacing; it carries no animation state.

/// Intrinsic size of one content item, as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSize {
    pub width: f32,
    pub height: f32,
}

impl ItemSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Result of a layout pass over the item sequence.
///
/// `offsets` is index-aligned with the input items; `total_width` is the
/// span from the left edge of the first item to the right edge of the
/// last, gaps included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarqueeLayout {
    /// X position of each item's left edge, first item at 0.
    pub offsets: Vec<f32>,
    /// Total content width; 0 exactly when there are no items.
    pub total_width: f32,
}

impl MarqueeLayout {
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Compute item positions and total content width.
///
/// Each item starts `spacing` after the previous item's right edge;
/// the first item starts at 0. Negative spacing is clamped to 0 (the
/// configuration layer rejects it before it gets here, the clamp keeps
/// this function total).
pub fn compute_layout(items: &[ItemSize], spacing: f32) -> MarqueeLayout {
    let spacing = spacing.max(0.0);

    let mut offsets = Vec::with_capacity(items.len());
    let mut x = 0.0_f32;

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            x += spacing;
        }
        offsets.push(x);
        x += item.width;
    }

    MarqueeLayout {
        offsets,
        total_width: x,
    }
}
