//! Adjustment - A shared scroll range with a current value.
//!
//! An adjustment is shared between whatever scrolls (a box layout) and
//! whatever drives scrolling (a scrollbar, key bindings). Cloning the handle
//! shares the state; equality is identity.
//!
//! The value always stays within `[lower, max(lower, upper - page_size)]`.
//! Changing the range does not re-clamp the value by itself: owners that
//! reconfigure the range set the value again afterwards, which clamps it.
//!
//! # Example
//!
//! ```ignore
//! use spark_box::state::Adjustment;
//!
//! let adj = Adjustment::new(0.0, 0.0, 100.0, 1.0, 10.0, 10.0);
//! let id = adj.connect_value_changed(|adj| println!("scrolled to {}", adj.value()));
//!
//! adj.set_value(250.0);
//! assert_eq!(adj.value(), 90.0);
//!
//! adj.disconnect(id);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::engine::{HandlerId, HandlerList};

// =============================================================================
// AdjustmentRange
// =============================================================================

/// Everything about an adjustment except its value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdjustmentRange {
    pub lower: f64,
    pub upper: f64,
    pub page_size: f64,
    pub step_increment: f64,
    pub page_increment: f64,
}

impl AdjustmentRange {
    /// Largest value the range allows.
    pub fn max_value(&self) -> f64 {
        (self.upper - self.page_size).max(self.lower)
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.lower).min(self.max_value())
    }
}

// =============================================================================
// Adjustment
// =============================================================================

struct AdjustmentInner {
    range: Cell<AdjustmentRange>,
    value: Signal<f64>,
    value_changed: HandlerList<Adjustment>,
    changed: HandlerList<Adjustment>,
}

/// Shared handle to a scroll range.
#[derive(Clone)]
pub struct Adjustment {
    inner: Rc<AdjustmentInner>,
}

impl Adjustment {
    /// Create an adjustment. The value is clamped into the range.
    pub fn new(
        value: f64,
        lower: f64,
        upper: f64,
        step_increment: f64,
        page_increment: f64,
        page_size: f64,
    ) -> Self {
        let range = AdjustmentRange {
            lower,
            upper,
            page_size,
            step_increment,
            page_increment,
        };
        Self {
            inner: Rc::new(AdjustmentInner {
                range: Cell::new(range),
                value: signal(range.clamp(value)),
                value_changed: HandlerList::new(),
                changed: HandlerList::new(),
            }),
        }
    }

    /// Check if two handles share the same adjustment.
    pub fn ptr_eq(a: &Adjustment, b: &Adjustment) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    // =========================================================================
    // Value
    // =========================================================================

    pub fn value(&self) -> f64 {
        self.inner.value.get()
    }

    /// Reactive handle to the value, for deriveds and effects.
    pub fn value_signal(&self) -> Signal<f64> {
        self.inner.value.clone()
    }

    /// Set the value, clamped into the range.
    ///
    /// Value-changed handlers run only if the stored value actually changes.
    pub fn set_value(&self, value: f64) {
        let clamped = self.inner.range.get().clamp(value);
        if clamped == self.inner.value.get() {
            return;
        }
        self.inner.value.set(clamped);
        self.inner.value_changed.emit(self);
    }

    // =========================================================================
    // Range
    // =========================================================================

    pub fn range(&self) -> AdjustmentRange {
        self.inner.range.get()
    }

    pub fn lower(&self) -> f64 {
        self.range().lower
    }

    pub fn upper(&self) -> f64 {
        self.range().upper
    }

    pub fn page_size(&self) -> f64 {
        self.range().page_size
    }

    pub fn step_increment(&self) -> f64 {
        self.range().step_increment
    }

    pub fn page_increment(&self) -> f64 {
        self.range().page_increment
    }

    /// Replace the whole range at once. Changed handlers run once.
    pub fn set_range(&self, range: AdjustmentRange) {
        if self.inner.range.get() == range {
            return;
        }
        self.inner.range.set(range);
        self.inner.changed.emit(self);
    }

    pub fn set_lower(&self, lower: f64) {
        self.set_range(AdjustmentRange { lower, ..self.range() });
    }

    pub fn set_upper(&self, upper: f64) {
        self.set_range(AdjustmentRange { upper, ..self.range() });
    }

    pub fn set_page_size(&self, page_size: f64) {
        self.set_range(AdjustmentRange { page_size, ..self.range() });
    }

    pub fn set_step_increment(&self, step_increment: f64) {
        self.set_range(AdjustmentRange { step_increment, ..self.range() });
    }

    pub fn set_page_increment(&self, page_increment: f64) {
        self.set_range(AdjustmentRange { page_increment, ..self.range() });
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Run `handler` whenever the value changes.
    pub fn connect_value_changed(&self, handler: impl Fn(&Adjustment) + 'static) -> HandlerId {
        self.inner.value_changed.connect(handler)
    }

    /// Run `handler` whenever the range changes.
    pub fn connect_changed(&self, handler: impl Fn(&Adjustment) + 'static) -> HandlerId {
        self.inner.changed.connect(handler)
    }

    /// Disconnect a handler returned by either connect method.
    ///
    /// Returns `false` if it was not connected to this adjustment.
    pub fn disconnect(&self, id: HandlerId) -> bool {
        self.inner.value_changed.disconnect(id) || self.inner.changed.disconnect(id)
    }

    /// Number of value-changed subscribers.
    pub fn value_changed_handlers(&self) -> usize {
        self.inner.value_changed.len()
    }
}

impl PartialEq for Adjustment {
    fn eq(&self, other: &Self) -> bool {
        Adjustment::ptr_eq(self, other)
    }
}

impl fmt::Debug for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.range();
        f.debug_struct("Adjustment")
            .field("value", &self.value())
            .field("lower", &range.lower)
            .field("upper", &range.upper)
            .field("page_size", &range.page_size)
            .field("step_increment", &range.step_increment)
            .field("page_increment", &range.page_increment)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::effect;
    use std::cell::RefCell;

    fn page_of_ten() -> Adjustment {
        Adjustment::new(0.0, 0.0, 100.0, 1.0, 10.0, 10.0)
    }

    #[test]
    fn test_set_value_clamps() {
        let adj = page_of_ten();

        adj.set_value(50.0);
        assert_eq!(adj.value(), 50.0);

        adj.set_value(250.0);
        assert_eq!(adj.value(), 90.0);

        adj.set_value(-5.0);
        assert_eq!(adj.value(), 0.0);
    }

    #[test]
    fn test_new_clamps_initial_value() {
        let adj = Adjustment::new(500.0, 0.0, 100.0, 1.0, 10.0, 10.0);
        assert_eq!(adj.value(), 90.0);
    }

    #[test]
    fn test_page_larger_than_range_pins_to_lower() {
        let adj = Adjustment::new(0.0, 0.0, 5.0, 1.0, 10.0, 10.0);
        adj.set_value(3.0);
        assert_eq!(adj.value(), 0.0);
    }

    #[test]
    fn test_value_changed_only_on_change() {
        let adj = page_of_ten();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        adj.connect_value_changed(move |a| log.borrow_mut().push(a.value()));

        adj.set_value(10.0);
        adj.set_value(10.0);
        adj.set_value(500.0);
        adj.set_value(900.0);

        assert_eq!(*seen.borrow(), vec![10.0, 90.0]);
    }

    #[test]
    fn test_range_change_does_not_clamp_value() {
        let adj = page_of_ten();
        adj.set_value(80.0);

        adj.set_upper(50.0);
        assert_eq!(adj.value(), 80.0);

        // Re-setting the value applies the new bounds
        adj.set_value(adj.value());
        assert_eq!(adj.value(), 40.0);
    }

    #[test]
    fn test_changed_runs_once_per_range_update() {
        let adj = page_of_ten();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        adj.connect_changed(move |_| c.set(c.get() + 1));

        adj.set_range(AdjustmentRange {
            lower: 0.0,
            upper: 200.0,
            page_size: 20.0,
            step_increment: 2.0,
            page_increment: 20.0,
        });
        assert_eq!(count.get(), 1);

        adj.set_upper(200.0);
        assert_eq!(count.get(), 1);

        adj.set_page_size(30.0);
        assert_eq!(count.get(), 2);
        assert_eq!(adj.page_size(), 30.0);
    }

    #[test]
    fn test_disconnect_stops_notifications() {
        let adj = page_of_ten();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let id = adj.connect_value_changed(move |_| c.set(c.get() + 1));

        adj.set_value(1.0);
        assert!(adj.disconnect(id));
        assert!(!adj.disconnect(id));
        adj.set_value(2.0);

        assert_eq!(count.get(), 1);
        assert_eq!(adj.value_changed_handlers(), 0);
    }

    #[test]
    fn test_clones_share_state_and_identity() {
        let a = page_of_ten();
        let b = a.clone();
        b.set_value(42.0);

        assert_eq!(a.value(), 42.0);
        assert_eq!(a, b);
        assert_ne!(a, page_of_ten());
    }

    #[test]
    fn test_value_signal_is_reactive() {
        let adj = page_of_ten();
        let runs = Rc::new(Cell::new(0));
        let r = runs.clone();
        let value = adj.value_signal();
        let _stop = effect(move || {
            let _ = value.get();
            r.set(r.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        adj.set_value(5.0);
        assert_eq!(runs.get(), 2);

        // Clamped to the same value: no change, no re-run
        adj.set_value(5.0);
        assert_eq!(runs.get(), 2);
    }
}
