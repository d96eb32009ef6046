//! Primitives - Leaf actors to put inside containers.
//!
//! - [`Rectangle`] - Fixed-size block, solid or transparent
//! - [`Label`] - Wrapped text whose height depends on its width

mod label;
mod rectangle;

pub use label::Label;
pub use rectangle::Rectangle;
