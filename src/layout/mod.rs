//! Layout Module - The box layout container and its helpers.
//!
//! - **BoxLayout** - Single-axis container with expand, fill and scrolling
//! - **BoxChildMeta** - Per-child expand/fill/align properties
//! - **Fill** - Resolving a child's box inside the slot it was given
//! - **Text measure** - Terminal cell widths and word wrapping for labels
//!
//! # Size negotiation
//!
//! Layout runs in two passes. Parents first ask each child for its preferred
//! (minimum, natural) size on one axis, given the extent already fixed on the
//! other axis (negative when unconstrained). They then hand every child a
//! final box through `allocate`, and the child lays out its own children
//! inside it.
//!
//! ```text
//! preferred_width(-1) ──► preferred_height(for_width) ──► allocate(box)
//!        │                         │                          │
//!   sum on main axis         max on cross axis        slots + fill/align
//! ```

mod box_layout;
mod child;
mod fill;
mod text_measure;

pub use box_layout::*;
pub use child::BoxChildMeta;
pub use fill::allocate_fill;
pub use text_measure::*;
