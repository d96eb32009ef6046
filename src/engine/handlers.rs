//! Handler lists - connect/disconnect/emit for change notifications.
//!
//! Every notification source (adjustment value changes, container child
//! changes) keeps one `HandlerList`. Handlers are identified by the
//! `HandlerId` returned from `connect`, which is what `disconnect` takes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identifies a connected handler.
///
/// Ids are unique per thread, not per list, so an owner of several lists can
/// try each of them with the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

thread_local! {
    static NEXT_HANDLER_ID: Cell<u64> = const { Cell::new(1) };
}

fn next_handler_id() -> HandlerId {
    NEXT_HANDLER_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        HandlerId(id)
    })
}

/// An ordered list of callbacks taking `&T`.
pub struct HandlerList<T: ?Sized> {
    handlers: RefCell<Vec<(HandlerId, Rc<dyn Fn(&T)>)>>,
}

impl<T: ?Sized> Default for HandlerList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> HandlerList<T> {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Connect a handler. Handlers run in connection order.
    pub fn connect(&self, handler: impl Fn(&T) + 'static) -> HandlerId {
        let id = next_handler_id();
        self.handlers.borrow_mut().push((id, Rc::new(handler)));
        id
    }

    /// Disconnect a handler.
    ///
    /// Returns `false` if the id was not connected (already disconnected, or
    /// from another list).
    pub fn disconnect(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        handlers.len() != before
    }

    /// Check if a handler id is currently connected.
    pub fn is_connected(&self, id: HandlerId) -> bool {
        self.handlers.borrow().iter().any(|(handler_id, _)| *handler_id == id)
    }

    /// Number of connected handlers.
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// Run every connected handler.
    ///
    /// Handlers run from a snapshot taken before the first call, so they may
    /// connect, disconnect or emit again without tripping a borrow.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Rc<dyn Fn(&T)>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in snapshot {
            handler(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_runs_in_connection_order() {
        let list: HandlerList<i32> = HandlerList::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l1 = log.clone();
        list.connect(move |v| l1.borrow_mut().push(("first", *v)));
        let l2 = log.clone();
        list.connect(move |v| l2.borrow_mut().push(("second", *v)));

        list.emit(&7);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let list: HandlerList<()> = HandlerList::new();
        let id = list.connect(|_| {});

        assert!(list.is_connected(id));
        assert!(list.disconnect(id));
        assert!(!list.disconnect(id));
        assert!(!list.is_connected(id));
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_do_not_collide_across_lists() {
        let a: HandlerList<()> = HandlerList::new();
        let b: HandlerList<()> = HandlerList::new();
        let id_a = a.connect(|_| {});
        let id_b = b.connect(|_| {});

        assert_ne!(id_a, id_b);
        assert!(!a.disconnect(id_b));
        assert!(a.is_connected(id_a));
    }

    #[test]
    fn test_handler_may_disconnect_itself() {
        let list: Rc<HandlerList<()>> = Rc::new(HandlerList::new());
        let calls = Rc::new(Cell::new(0));

        let id_slot: Rc<Cell<Option<HandlerId>>> = Rc::new(Cell::new(None));
        let list_ref = Rc::downgrade(&list);
        let slot = id_slot.clone();
        let counter = calls.clone();
        let id = list.connect(move |_| {
            counter.set(counter.get() + 1);
            if let (Some(list), Some(id)) = (list_ref.upgrade(), slot.get()) {
                list.disconnect(id);
            }
        });
        id_slot.set(Some(id));

        list.emit(&());
        list.emit(&());
        assert_eq!(calls.get(), 1);
    }
}
