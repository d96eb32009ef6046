//! The generic container protocol.

use crate::error::LayoutError;

use super::actor::ActorRef;

/// An actor that owns an ordered list of child actors.
pub trait Container {
    /// Append a child and become its parent.
    fn add(&self, child: ActorRef);

    /// Detach a child.
    ///
    /// Fails without side effects if `child` is not in the container.
    fn remove(&self, child: &ActorRef) -> Result<(), LayoutError>;

    /// Visit every child in stored order.
    fn for_each(&self, visitor: &mut dyn FnMut(&ActorRef));

    /// Move `child` above `sibling` (or to the top) in paint order.
    fn raise(&self, child: &ActorRef, sibling: Option<&ActorRef>);

    /// Move `child` below `sibling` (or to the bottom) in paint order.
    fn lower(&self, child: &ActorRef, sibling: Option<&ActorRef>);

    /// Reorder children by depth.
    fn sort_depth_order(&self);
}
