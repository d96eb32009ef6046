//! Per-child placement properties of a box layout.

use crate::engine::ActorRef;
use crate::types::Align;

/// How a child is sized and placed inside the slot the box gives it.
///
/// Defaults: no expand, fill on both axes, centered.
///
/// # Example
///
/// ```rust
/// use spark_box::layout::BoxChildMeta;
/// use spark_box::types::Align;
///
/// let meta = BoxChildMeta::default().expand(true).x_fill(false).x_align(Align::End);
/// assert!(meta.expand);
/// assert!(!meta.x_fill);
/// assert!(meta.y_fill);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChildMeta {
    /// Take a share of the space left over after every child got its
    /// natural size.
    pub expand: bool,
    /// Stretch to the slot width instead of using the natural width.
    pub x_fill: bool,
    /// Stretch to the slot height instead of using the natural height.
    pub y_fill: bool,
    /// Horizontal placement when not filling.
    pub x_align: Align,
    /// Vertical placement when not filling.
    pub y_align: Align,
}

impl Default for BoxChildMeta {
    fn default() -> Self {
        Self {
            expand: false,
            x_fill: true,
            y_fill: true,
            x_align: Align::Center,
            y_align: Align::Center,
        }
    }
}

impl BoxChildMeta {
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn x_fill(mut self, fill: bool) -> Self {
        self.x_fill = fill;
        self
    }

    pub fn y_fill(mut self, fill: bool) -> Self {
        self.y_fill = fill;
        self
    }

    pub fn x_align(mut self, align: Align) -> Self {
        self.x_align = align;
        self
    }

    pub fn y_align(mut self, align: Align) -> Self {
        self.y_align = align;
        self
    }
}

/// One entry of a box's child list.
#[derive(Clone)]
pub(crate) struct BoxChild {
    pub actor: ActorRef,
    pub meta: BoxChildMeta,
}

impl BoxChild {
    pub fn is_visible(&self) -> bool {
        self.actor.node().is_visible()
    }
}
