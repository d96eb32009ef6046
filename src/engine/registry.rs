//! Actor Registry - Identity allocation for scene graph nodes.
//!
//! Manages the lifecycle of actor identities:
//! - Monotonic `ActorId` allocation (ids are never reused within a thread)
//! - Human-readable names for diagnostics, released with the actor

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Stable identity of an actor node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u64);

impl ActorId {
    /// Raw numeric value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map id to actor name.
    static ID_TO_NAME: RefCell<HashMap<ActorId, String>> = RefCell::new(HashMap::new());

    /// Next id to hand out.
    static NEXT_ID: RefCell<u64> = const { RefCell::new(1) };
}

// =============================================================================
// Id Allocation
// =============================================================================

/// Allocate an id for a new actor.
///
/// # Arguments
/// * `name` - Optional actor name. If not provided, one is generated.
///
/// Names need not be unique; they only label the actor in diagnostics.
pub fn allocate_id(name: Option<&str>) -> ActorId {
    let id = NEXT_ID.with(|next| {
        let mut next = next.borrow_mut();
        let id = ActorId(*next);
        *next += 1;
        id
    });

    let name = match name {
        Some(name) => name.to_string(),
        None => format!("actor{}", id.0),
    };
    ID_TO_NAME.with(|map| {
        map.borrow_mut().insert(id, name);
    });

    id
}

/// Release an id when its actor is dropped.
pub fn release_id(id: ActorId) {
    ID_TO_NAME.with(|map| {
        map.borrow_mut().remove(&id);
    });
}

/// Get the name of an actor.
pub fn get_name(id: ActorId) -> Option<String> {
    ID_TO_NAME.with(|map| map.borrow().get(&id).cloned())
}
