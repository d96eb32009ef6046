//! # spark-box
//!
//! Single-axis box layout for a retained-mode scene graph.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! reactive properties.
//!
//! ## Architecture
//!
//! A [`BoxLayout`] arranges its children in one line, horizontally or
//! vertically. Size negotiation runs in two passes: preferred-size queries
//! bubble up, then allocations flow down. Extra space goes to children marked
//! `expand`; each child is then filled or aligned inside its slot.
//!
//! Scrolling is driven by two shared [`Adjustment`]s. The box keeps their
//! ranges in sync with its content on every allocation and translates its
//! children by their values when painting and picking. Children outside the
//! scrolled window are culled.
//!
//! ```text
//! Stage::update ─► relayout ─► BoxLayout::allocate ─► children
//!               └► paint    ─► BoxLayout::paint    ─► visible children
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Geometry, size requests, alignment, colors
//! - [`engine`] - Actors, containers, paint/pick contexts, the stage
//! - [`theme`] - Box-model insets and backgrounds
//! - [`state`] - Adjustments and scrolling
//! - [`layout`] - The box layout itself
//! - [`primitives`] - Leaf actors (labels, rectangles)

pub mod engine;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod state;
pub mod theme;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used items
pub use types::*;

pub use error::LayoutError;

pub use engine::{
    paint_actor, pick_actor, same_actor, Actor, ActorId, ActorNode, ActorRef, Container,
    HandlerId, HitRegion, PaintContext, PaintOp, PickContext, QueueFlags, Stage, Transform,
};

pub use layout::{allocate_fill, BoxChildMeta, BoxLayout, BoxProps};

pub use primitives::{Label, Rectangle};

pub use state::{
    clamp_page, scroll_by, scroll_page, scroll_step, scroll_to_end, scroll_to_start, Adjustment,
    AdjustmentRange, Scrollable, WHEEL_STEPS,
};

pub use theme::{Insets, ThemeNode};
