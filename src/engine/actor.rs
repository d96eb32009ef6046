//! Actors - The scene graph capability surface.
//!
//! An actor is anything that can be sized, allocated, painted and picked.
//! The shared per-actor state (identity, parent link, visibility, allocation,
//! queued relayout/redraw requests) lives in an `ActorNode` that every actor
//! owns through an `Rc`, so parents, stages and adjustment subscriptions can
//! hold weak links to it without knowing the concrete actor type.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::types::{ActorBox, RequestMode, SizeRequest};

use super::paint::{PaintContext, PickContext, Transform};
use super::registry::{allocate_id, get_name, release_id, ActorId};

// =============================================================================
// Queue Flags
// =============================================================================

bitflags::bitflags! {
    /// Pending work queued on an actor node.
    ///
    /// Combine with bitwise OR: `QueueFlags::RELAYOUT | QueueFlags::REDRAW`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct QueueFlags: u8 {
        const NONE = 0;
        /// Sizes or positions must be renegotiated.
        const RELAYOUT = 1 << 0;
        /// The actor must be painted again.
        const REDRAW = 1 << 1;
    }
}

// =============================================================================
// ActorNode
// =============================================================================

/// Host-side state shared by every actor.
#[derive(Debug)]
pub struct ActorNode {
    id: ActorId,
    is_stage: bool,
    visible: Cell<bool>,
    allocation: Cell<ActorBox>,
    parent: RefCell<Weak<ActorNode>>,
    queued: Cell<QueueFlags>,
}

impl ActorNode {
    /// Create a visible, unparented, unallocated node.
    ///
    /// New nodes start with a relayout queued: they have never been allocated.
    pub fn new(name: Option<&str>) -> Rc<Self> {
        Rc::new(Self::build(name, false))
    }

    /// Create the root node of a stage.
    pub(crate) fn new_stage(name: Option<&str>) -> Rc<Self> {
        Rc::new(Self::build(name, true))
    }

    fn build(name: Option<&str>, is_stage: bool) -> Self {
        Self {
            id: allocate_id(name),
            is_stage,
            visible: Cell::new(true),
            allocation: Cell::new(ActorBox::default()),
            parent: RefCell::new(Weak::new()),
            queued: Cell::new(QueueFlags::RELAYOUT | QueueFlags::REDRAW),
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Registered name (generated when none was given).
    pub fn name(&self) -> String {
        get_name(self.id).unwrap_or_else(|| self.id.to_string())
    }

    pub fn is_stage(&self) -> bool {
        self.is_stage
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn show(&self) {
        self.set_visible(true);
    }

    pub fn hide(&self) {
        self.set_visible(false);
    }

    /// Change visibility. Parents renegotiate since hidden actors take no
    /// space in containers.
    pub fn set_visible(&self, visible: bool) {
        if self.visible.get() == visible {
            return;
        }
        self.visible.set(visible);
        self.queue_relayout();
    }

    // -------------------------------------------------------------------------
    // Allocation
    // -------------------------------------------------------------------------

    /// Last allocation, in the parent's coordinate space.
    pub fn allocation(&self) -> ActorBox {
        self.allocation.get()
    }

    /// The allocation moved to the actor's own origin.
    pub fn local_box(&self) -> ActorBox {
        let a = self.allocation.get();
        ActorBox::new(0.0, 0.0, a.width(), a.height())
    }

    pub fn width(&self) -> f32 {
        self.allocation.get().width()
    }

    pub fn height(&self) -> f32 {
        self.allocation.get().height()
    }

    /// Store a new allocation and clear the pending relayout.
    ///
    /// Returns `true` if the box changed, in which case a redraw is queued.
    pub fn set_allocation(&self, allocation: ActorBox) -> bool {
        self.clear_queued(QueueFlags::RELAYOUT);
        if self.allocation.get() == allocation {
            return false;
        }
        self.allocation.set(allocation);
        self.queue_redraw();
        true
    }

    // -------------------------------------------------------------------------
    // Parenting
    // -------------------------------------------------------------------------

    pub fn parent(&self) -> Option<Rc<ActorNode>> {
        self.parent.borrow().upgrade()
    }

    pub fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    /// Link this node under `parent` and queue a relayout there.
    pub fn set_parent(&self, parent: &Rc<ActorNode>) {
        *self.parent.borrow_mut() = Rc::downgrade(parent);
        self.queue_relayout();
    }

    /// Drop the parent link. The former parent gets a relayout queued.
    pub fn unparent(&self) {
        let former = self.parent();
        *self.parent.borrow_mut() = Weak::new();
        if let Some(former) = former {
            former.queue_relayout();
        }
    }

    /// Nearest stage among the ancestors, if the node is attached to one.
    pub fn stage(&self) -> Option<Rc<ActorNode>> {
        let mut current = self.parent();
        while let Some(node) = current {
            if node.is_stage {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    // -------------------------------------------------------------------------
    // Queues
    // -------------------------------------------------------------------------

    pub fn queued(&self) -> QueueFlags {
        self.queued.get()
    }

    pub fn needs_relayout(&self) -> bool {
        self.queued.get().contains(QueueFlags::RELAYOUT)
    }

    pub fn needs_redraw(&self) -> bool {
        self.queued.get().contains(QueueFlags::REDRAW)
    }

    pub fn clear_queued(&self, flags: QueueFlags) {
        self.queued.set(self.queued.get().difference(flags));
    }

    /// Request a new layout pass for this node and every ancestor.
    ///
    /// Idempotent: queuing while already queued changes nothing.
    pub fn queue_relayout(&self) {
        self.mark(QueueFlags::RELAYOUT | QueueFlags::REDRAW);
    }

    /// Request a repaint of this node and every ancestor.
    pub fn queue_redraw(&self) {
        self.mark(QueueFlags::REDRAW);
    }

    fn mark(&self, flags: QueueFlags) {
        self.queued.set(self.queued.get() | flags);
        let mut current = self.parent();
        while let Some(node) = current {
            node.queued.set(node.queued.get() | flags);
            current = node.parent();
        }
    }
}

impl Drop for ActorNode {
    fn drop(&mut self) {
        release_id(self.id);
    }
}

// =============================================================================
// Actor trait
// =============================================================================

/// The size negotiation, allocation and paint protocol.
///
/// Preferred size queries take the extent already fixed on the other axis,
/// or a negative value when it is unconstrained.
pub trait Actor {
    /// Shared host-side state.
    fn node(&self) -> &Rc<ActorNode>;

    /// Short type name used in diagnostics.
    fn type_name(&self) -> &'static str;

    fn request_mode(&self) -> RequestMode {
        RequestMode::HeightForWidth
    }

    fn preferred_width(&self, for_height: f32) -> SizeRequest;

    fn preferred_height(&self, for_width: f32) -> SizeRequest;

    /// Accept a final box in the parent's coordinate space.
    fn allocate(&self, allocation: &ActorBox) {
        self.node().set_allocation(*allocation);
    }

    /// Compose this actor's local-to-parent transform onto `transform`.
    fn apply_transform(&self, transform: &mut Transform) {
        let a = self.node().allocation();
        transform.translate(a.x1, a.y1);
    }

    /// Paint in local coordinates. The default paints nothing.
    fn paint(&self, _ctx: &mut PaintContext) {}

    /// Record pickable regions in local coordinates. The default makes the
    /// whole allocation pickable.
    fn pick(&self, ctx: &mut PickContext) {
        let node = self.node();
        ctx.add_region(node.id(), node.local_box());
    }
}

/// Shared handle to an actor in the scene graph.
pub type ActorRef = Rc<dyn Actor>;

/// Identity comparison between two actors.
pub fn same_actor(a: &dyn Actor, b: &dyn Actor) -> bool {
    a.node().id() == b.node().id()
}

/// Paint an actor: skip it if hidden, otherwise apply its transform, run its
/// paint and clear its pending redraw.
pub fn paint_actor(actor: &dyn Actor, ctx: &mut PaintContext) {
    let node = actor.node();
    if !node.is_visible() {
        return;
    }

    ctx.transforms().save();
    actor.apply_transform(ctx.transforms().current_mut());
    ctx.record_visit(node.id());
    actor.paint(ctx);
    ctx.transforms().restore();

    node.clear_queued(QueueFlags::REDRAW);
}

/// Pick an actor: skip it if hidden, otherwise apply its transform and run
/// its pick.
pub fn pick_actor(actor: &dyn Actor, ctx: &mut PickContext) {
    if !actor.node().is_visible() {
        return;
    }

    ctx.transforms().save();
    actor.apply_transform(ctx.transforms().current_mut());
    actor.pick(ctx);
    ctx.transforms().restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_visible_and_needs_layout() {
        let node = ActorNode::new(None);
        assert!(node.is_visible());
        assert!(node.needs_relayout());
        assert!(node.needs_redraw());
        assert!(!node.has_parent());
    }

    #[test]
    fn test_set_allocation_clears_relayout() {
        let node = ActorNode::new(None);
        node.clear_queued(QueueFlags::REDRAW);

        assert!(node.set_allocation(ActorBox::new(0.0, 0.0, 10.0, 5.0)));
        assert!(!node.needs_relayout());
        assert!(node.needs_redraw());
        assert_eq!(node.width(), 10.0);
        assert_eq!(node.height(), 5.0);

        node.clear_queued(QueueFlags::REDRAW);
        assert!(!node.set_allocation(ActorBox::new(0.0, 0.0, 10.0, 5.0)));
        assert!(!node.needs_redraw());
    }

    #[test]
    fn test_queue_relayout_propagates_to_ancestors() {
        let root = ActorNode::new(None);
        let mid = ActorNode::new(None);
        let leaf = ActorNode::new(None);
        mid.set_parent(&root);
        leaf.set_parent(&mid);

        root.clear_queued(QueueFlags::all());
        mid.clear_queued(QueueFlags::all());
        leaf.clear_queued(QueueFlags::all());

        leaf.queue_redraw();
        assert_eq!(root.queued(), QueueFlags::REDRAW);
        assert_eq!(mid.queued(), QueueFlags::REDRAW);

        leaf.queue_relayout();
        assert!(root.needs_relayout());
        assert!(mid.needs_relayout());
        assert!(leaf.needs_relayout());
    }

    #[test]
    fn test_hide_queues_relayout_on_parent() {
        let parent = ActorNode::new(None);
        let child = ActorNode::new(None);
        child.set_parent(&parent);
        parent.clear_queued(QueueFlags::all());

        child.hide();
        assert!(!child.is_visible());
        assert!(parent.needs_relayout());

        parent.clear_queued(QueueFlags::all());
        child.hide();
        assert!(!parent.needs_relayout());
    }

    #[test]
    fn test_unparent_queues_relayout_on_former_parent() {
        let parent = ActorNode::new(None);
        let child = ActorNode::new(None);
        child.set_parent(&parent);
        parent.clear_queued(QueueFlags::all());

        child.unparent();
        assert!(!child.has_parent());
        assert!(parent.needs_relayout());
    }

    #[test]
    fn test_stage_lookup() {
        let stage = ActorNode::new_stage(None);
        let mid = ActorNode::new(None);
        let leaf = ActorNode::new(None);
        mid.set_parent(&stage);
        leaf.set_parent(&mid);

        assert_eq!(leaf.stage().map(|s| s.id()), Some(stage.id()));

        let orphan = ActorNode::new(None);
        assert!(orphan.stage().is_none());
    }

    #[test]
    fn test_parent_link_is_weak() {
        let child = ActorNode::new(None);
        {
            let parent = ActorNode::new(None);
            child.set_parent(&parent);
            assert!(child.has_parent());
        }
        assert!(!child.has_parent());
    }
}
