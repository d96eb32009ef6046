//! Stage - The root of a scene graph and its update cycle.
//!
//! The stage owns the top-level actors, gives each of them the whole stage
//! box, and turns the relayout/redraw flags queued anywhere below it into
//! layout and paint passes.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use spark_box::{BoxLayout, Stage};
//!
//! let stage = Stage::new(80.0, 24.0);
//! let column = Rc::new(BoxLayout::new());
//! stage.add(column.clone());
//!
//! if let Some(frame) = stage.update() {
//!     // render frame.ops()
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::error::LayoutError;
use crate::types::ActorBox;

use super::actor::{paint_actor, pick_actor, ActorNode, ActorRef, QueueFlags};
use super::paint::{PaintContext, PickContext};
use super::registry::ActorId;

/// Root of a scene graph.
pub struct Stage {
    node: Rc<ActorNode>,
    children: RefCell<Vec<ActorRef>>,
}

impl Stage {
    /// Create a stage of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        let node = ActorNode::new_stage(None);
        node.set_allocation(ActorBox::new(0.0, 0.0, width, height));
        node.queue_relayout();
        Self {
            node,
            children: RefCell::new(Vec::new()),
        }
    }

    pub fn node(&self) -> &Rc<ActorNode> {
        &self.node
    }

    pub fn size(&self) -> (f32, f32) {
        (self.node.width(), self.node.height())
    }

    /// Resize the stage. Everything below is laid out again on the next
    /// update.
    pub fn set_size(&self, width: f32, height: f32) {
        if self.size() == (width, height) {
            return;
        }
        self.node.set_allocation(ActorBox::new(0.0, 0.0, width, height));
        self.node.queue_relayout();
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn add(&self, actor: ActorRef) {
        actor.node().set_parent(&self.node);
        self.children.borrow_mut().push(actor);
    }

    pub fn remove(&self, actor: &ActorRef) -> Result<(), LayoutError> {
        let id = actor.node().id();
        let position = self
            .children
            .borrow()
            .iter()
            .position(|child| child.node().id() == id);

        let Some(position) = position else {
            warn!(
                "Actor of type '{}' is not a child of container of type 'Stage'",
                actor.type_name()
            );
            return Err(LayoutError::NotAChild {
                child: actor.type_name(),
                container: "Stage",
            });
        };

        let removed = self.children.borrow_mut().remove(position);
        removed.node().unparent();
        Ok(())
    }

    pub fn children(&self) -> Vec<ActorRef> {
        self.children.borrow().clone()
    }

    // =========================================================================
    // Passes
    // =========================================================================

    /// Allocate every visible top-level actor to the full stage box.
    pub fn relayout(&self) {
        let (width, height) = self.size();
        let stage_box = ActorBox::new(0.0, 0.0, width, height);
        debug!(width, height, "stage relayout");

        for child in self.children() {
            if !child.node().is_visible() {
                continue;
            }
            trace!(actor = %child.node().name(), "allocating top-level actor");
            child.allocate(&stage_box);
        }

        self.node.clear_queued(QueueFlags::RELAYOUT);
    }

    /// Paint every top-level actor in order.
    pub fn paint(&self) -> PaintContext {
        let mut ctx = PaintContext::new();
        for child in self.children() {
            paint_actor(child.as_ref(), &mut ctx);
        }
        self.node.clear_queued(QueueFlags::REDRAW);
        debug!(painted = ctx.visited().len(), ops = ctx.ops().len(), "stage painted");
        ctx
    }

    /// Run a pick pass over the whole stage.
    pub fn pick_all(&self) -> PickContext {
        let mut ctx = PickContext::new();
        for child in self.children() {
            pick_actor(child.as_ref(), &mut ctx);
        }
        ctx
    }

    /// Topmost actor under a stage point.
    pub fn pick(&self, x: f32, y: f32) -> Option<ActorId> {
        self.pick_all().hit_test(x, y)
    }

    /// Process queued work.
    ///
    /// Runs a relayout if one is queued anywhere below the stage, then
    /// paints if a redraw is queued. Returns the painted frame, or `None`
    /// when nothing needed repainting.
    pub fn update(&self) -> Option<PaintContext> {
        if self.node.needs_relayout() {
            self.relayout();
        }
        if self.node.needs_redraw() {
            Some(self.paint())
        } else {
            None
        }
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        for child in self.children.get_mut().drain(..) {
            child.node().unparent();
        }
    }
}
