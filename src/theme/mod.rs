//! Theme System for spark-box.
//!
//! A theme node describes the box model around an actor's content: border
//! widths, padding and a background fill. Layout code never reasons about
//! these directly. It calls the adjustment hooks here before and after
//! measuring its content, and asks for the content box when allocating.
//!
//! # Example
//!
//! ```rust
//! use spark_box::theme::{Insets, ThemeNode};
//! use spark_box::types::{ActorBox, SizeRequest};
//!
//! let theme = ThemeNode::default().padding(Insets::uniform(2.0));
//!
//! let mut width = SizeRequest::new(10.0, 20.0);
//! theme.adjust_preferred_width(&mut width);
//! assert_eq!(width, SizeRequest::new(14.0, 24.0));
//!
//! let content = theme.content_box(&ActorBox::new(5.0, 5.0, 35.0, 25.0));
//! assert_eq!(content, ActorBox::new(2.0, 2.0, 28.0, 18.0));
//! ```

use crate::types::{ActorBox, Rgba, SizeRequest};

// =============================================================================
// Insets
// =============================================================================

/// Per-side extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create insets in CSS order (top, right, bottom, left).
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same extent on every side.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Left plus right.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl std::ops::Add for Insets {
    type Output = Insets;

    fn add(self, other: Insets) -> Insets {
        Insets::new(
            self.top + other.top,
            self.right + other.right,
            self.bottom + other.bottom,
            self.left + other.left,
        )
    }
}

// =============================================================================
// ThemeNode
// =============================================================================

/// Box-model styling of one actor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThemeNode {
    pub border: Insets,
    pub padding: Insets,
    pub background: Rgba,
}

impl ThemeNode {
    /// Builder: set the border widths.
    pub fn border(mut self, border: Insets) -> Self {
        self.border = border;
        self
    }

    /// Builder: set the padding.
    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Builder: set the background fill.
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Total space between the allocation edge and the content.
    pub fn insets(&self) -> Insets {
        self.border + self.padding
    }

    /// Turn a width offered to the whole actor into the width left for its
    /// content. Unconstrained (negative) widths pass through.
    pub fn adjust_for_width(&self, for_width: &mut f32) {
        if *for_width >= 0.0 {
            *for_width = (*for_width - self.insets().horizontal()).max(0.0);
        }
    }

    /// Height counterpart of [`adjust_for_width`](Self::adjust_for_width).
    pub fn adjust_for_height(&self, for_height: &mut f32) {
        if *for_height >= 0.0 {
            *for_height = (*for_height - self.insets().vertical()).max(0.0);
        }
    }

    /// Grow a content width request into a request for the whole actor.
    pub fn adjust_preferred_width(&self, request: &mut SizeRequest) {
        let inset = self.insets().horizontal();
        request.min += inset;
        request.natural += inset;
    }

    /// Height counterpart of [`adjust_preferred_width`](Self::adjust_preferred_width).
    pub fn adjust_preferred_height(&self, request: &mut SizeRequest) {
        let inset = self.insets().vertical();
        request.min += inset;
        request.natural += inset;
    }

    /// Content area of an actor allocated `allocation`, in the actor's own
    /// coordinate space. Never inverted: an allocation smaller than the
    /// insets yields an empty box at the content origin.
    pub fn content_box(&self, allocation: &ActorBox) -> ActorBox {
        let insets = self.insets();
        let x1 = insets.left;
        let y1 = insets.top;
        let x2 = (allocation.width() - insets.right).max(x1);
        let y2 = (allocation.height() - insets.bottom).max(y1);
        ActorBox::new(x1, y1, x2, y2)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn themed() -> ThemeNode {
        ThemeNode::default()
            .border(Insets::uniform(1.0))
            .padding(Insets::new(2.0, 3.0, 4.0, 5.0))
    }

    #[test]
    fn test_insets_sum_border_and_padding() {
        let insets = themed().insets();
        assert_eq!(insets, Insets::new(3.0, 4.0, 5.0, 6.0));
        assert_eq!(insets.horizontal(), 10.0);
        assert_eq!(insets.vertical(), 8.0);
    }

    #[test]
    fn test_adjust_for_width_subtracts_and_clamps() {
        let theme = themed();

        let mut width = 30.0;
        theme.adjust_for_width(&mut width);
        assert_eq!(width, 20.0);

        let mut narrow = 4.0;
        theme.adjust_for_width(&mut narrow);
        assert_eq!(narrow, 0.0);

        let mut unconstrained = -1.0;
        theme.adjust_for_width(&mut unconstrained);
        assert_eq!(unconstrained, -1.0);
    }

    #[test]
    fn test_adjust_for_height() {
        let mut height = 20.0;
        themed().adjust_for_height(&mut height);
        assert_eq!(height, 12.0);
    }

    #[test]
    fn test_adjust_preferred_sizes() {
        let theme = themed();

        let mut width = SizeRequest::new(1.0, 2.0);
        theme.adjust_preferred_width(&mut width);
        assert_eq!(width, SizeRequest::new(11.0, 12.0));

        let mut height = SizeRequest::new(1.0, 2.0);
        theme.adjust_preferred_height(&mut height);
        assert_eq!(height, SizeRequest::new(9.0, 10.0));
    }

    #[test]
    fn test_content_box_is_local() {
        let theme = themed();
        let content = theme.content_box(&ActorBox::new(100.0, 100.0, 150.0, 140.0));
        assert_eq!(content, ActorBox::new(6.0, 3.0, 46.0, 35.0));
    }

    #[test]
    fn test_content_box_never_inverts() {
        let theme = themed();
        let content = theme.content_box(&ActorBox::new(0.0, 0.0, 4.0, 2.0));
        assert_eq!(content, ActorBox::new(6.0, 3.0, 6.0, 3.0));
    }

    #[test]
    fn test_default_theme_is_transparent_and_flush() {
        let theme = ThemeNode::default();
        assert_eq!(theme.insets(), Insets::ZERO);
        assert!(theme.background.is_transparent());
        let b = ActorBox::new(3.0, 4.0, 13.0, 24.0);
        assert_eq!(theme.content_box(&b), ActorBox::new(0.0, 0.0, 10.0, 20.0));
    }
}
