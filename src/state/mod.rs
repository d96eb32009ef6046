//! State Module - Scroll state shared between scrollables and their drivers
//!
//! - **Adjustment** - Shared scroll range with value-changed notifications
//! - **Scroll** - The `Scrollable` capability and scroll operations

mod adjustment;
mod scroll;

pub use adjustment::*;
pub use scroll::*;
