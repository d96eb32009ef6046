//! Scroll State Module
//!
//! Manages scrolling behavior:
//! - The `Scrollable` capability (an actor driven by two adjustments)
//! - Scroll operations in steps, pages and absolute positions
//! - Bringing a range into view (e.g. a focused child)
//!
//! Architecture:
//! - adjustment value = user state (set by scrollbars, keys, wheel)
//! - adjustment range = computed by the scrollable's allocation pass
//!
//! All operations go through `Adjustment::set_value`, so they clamp to the
//! range and notify subscribers only when the value moves.

use super::adjustment::Adjustment;

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Steps scrolled per mouse wheel notch.
pub const WHEEL_STEPS: i32 = 3;

// =============================================================================
// SCROLLABLE CAPABILITY
// =============================================================================

/// An actor whose content is offset by a horizontal and a vertical
/// adjustment.
pub trait Scrollable {
    /// Install adjustments. Passing the currently installed adjustment for a
    /// slot leaves that slot untouched.
    fn set_adjustments(&self, hadjustment: Option<Adjustment>, vadjustment: Option<Adjustment>);

    /// Get both adjustments, creating defaults for missing ones.
    fn adjustments(&self) -> (Adjustment, Adjustment);
}

// =============================================================================
// SCROLL OPERATIONS
// =============================================================================

/// Scroll by a delta.
///
/// Returns `true` if scrolling occurred, `false` if already at the boundary.
pub fn scroll_by(adjustment: &Adjustment, delta: f64) -> bool {
    let before = adjustment.value();
    adjustment.set_value(before + delta);
    adjustment.value() != before
}

/// Scroll by whole step increments (negative scrolls back).
pub fn scroll_step(adjustment: &Adjustment, steps: i32) -> bool {
    scroll_by(adjustment, adjustment.step_increment() * f64::from(steps))
}

/// Scroll by whole page increments (negative scrolls back).
pub fn scroll_page(adjustment: &Adjustment, pages: i32) -> bool {
    scroll_by(adjustment, adjustment.page_increment() * f64::from(pages))
}

/// Scroll to the lower bound.
pub fn scroll_to_start(adjustment: &Adjustment) {
    adjustment.set_value(adjustment.lower());
}

/// Scroll to the last full page.
pub fn scroll_to_end(adjustment: &Adjustment) {
    adjustment.set_value(adjustment.upper());
}

/// Scroll the least amount that brings `[lower, upper]` into the page.
///
/// When the range is taller than a page, its start wins.
pub fn clamp_page(adjustment: &Adjustment, lower: f64, upper: f64) {
    let range = adjustment.range();
    let lower = lower.max(range.lower).min(range.max_value());
    let upper = upper.max(range.lower).min(range.upper);

    let mut value = adjustment.value();
    if upper > value + range.page_size {
        value = upper - range.page_size;
    }
    if lower < value {
        value = lower;
    }
    adjustment.set_value(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 200 units of content, a 50 unit page, steps of 5.
    fn create_test_adjustment() -> Adjustment {
        Adjustment::new(0.0, 0.0, 200.0, 5.0, 50.0, 50.0)
    }

    #[test]
    fn test_scroll_by_returns_bool() {
        let adj = create_test_adjustment();

        // Initial scroll should succeed
        assert!(scroll_by(&adj, 20.0));
        assert_eq!(adj.value(), 20.0);

        // Scroll to boundary
        assert!(scroll_by(&adj, 500.0));
        assert_eq!(adj.value(), 150.0);

        // At boundary - should return false
        assert!(!scroll_by(&adj, 1.0));
        assert_eq!(adj.value(), 150.0);
    }

    #[test]
    fn test_scroll_by_negative() {
        let adj = create_test_adjustment();
        adj.set_value(30.0);

        assert!(scroll_by(&adj, -10.0));
        assert_eq!(adj.value(), 20.0);

        assert!(scroll_by(&adj, -100.0));
        assert_eq!(adj.value(), 0.0);

        assert!(!scroll_by(&adj, -1.0));
    }

    #[test]
    fn test_scroll_step_and_page() {
        let adj = create_test_adjustment();

        assert!(scroll_step(&adj, WHEEL_STEPS));
        assert_eq!(adj.value(), 15.0);

        assert!(scroll_page(&adj, 1));
        assert_eq!(adj.value(), 65.0);

        assert!(scroll_step(&adj, -1));
        assert_eq!(adj.value(), 60.0);

        assert!(scroll_page(&adj, -2));
        assert_eq!(adj.value(), 0.0);
    }

    #[test]
    fn test_scroll_to_start_end() {
        let adj = create_test_adjustment();
        adj.set_value(70.0);

        scroll_to_end(&adj);
        assert_eq!(adj.value(), 150.0);

        scroll_to_start(&adj);
        assert_eq!(adj.value(), 0.0);
    }

    #[test]
    fn test_clamp_page_scrolls_down_to_reveal() {
        let adj = create_test_adjustment();

        // [80, 100] is below the page [0, 50]
        clamp_page(&adj, 80.0, 100.0);
        assert_eq!(adj.value(), 50.0);
    }

    #[test]
    fn test_clamp_page_scrolls_up_to_reveal() {
        let adj = create_test_adjustment();
        adj.set_value(120.0);

        clamp_page(&adj, 30.0, 40.0);
        assert_eq!(adj.value(), 30.0);
    }

    #[test]
    fn test_clamp_page_noop_when_visible() {
        let adj = create_test_adjustment();
        adj.set_value(20.0);

        clamp_page(&adj, 30.0, 60.0);
        assert_eq!(adj.value(), 20.0);
    }

    #[test]
    fn test_clamp_page_tall_range_shows_start() {
        let adj = create_test_adjustment();

        clamp_page(&adj, 60.0, 140.0);
        assert_eq!(adj.value(), 60.0);
    }
}
