//! Rectangle Primitive - A fixed-size solid block.
//!
//! Reports the same size request whatever it is offered. With a transparent
//! color (the default) it is a plain spacer.

use std::cell::Cell;
use std::rc::Rc;

use crate::engine::{Actor, ActorNode, PaintContext};
use crate::types::{Rgba, SizeRequest};

pub struct Rectangle {
    node: Rc<ActorNode>,
    width: Cell<SizeRequest>,
    height: Cell<SizeRequest>,
    color: Cell<Rgba>,
}

impl Rectangle {
    /// Create a rectangle with explicit width and height requests.
    pub fn new(width: SizeRequest, height: SizeRequest) -> Self {
        Self {
            node: ActorNode::new(None),
            width: Cell::new(width),
            height: Cell::new(height),
            color: Cell::new(Rgba::TRANSPARENT),
        }
    }

    /// Create a rectangle whose minimum and natural sizes are equal.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(SizeRequest::fixed(width), SizeRequest::fixed(height))
    }

    /// Builder: set the fill color.
    pub fn with_color(self, color: Rgba) -> Self {
        self.color.set(color);
        self
    }

    pub fn color(&self) -> Rgba {
        self.color.get()
    }

    pub fn set_color(&self, color: Rgba) {
        if self.color.get() == color {
            return;
        }
        self.color.set(color);
        self.node.queue_redraw();
    }

    pub fn set_size_request(&self, width: SizeRequest, height: SizeRequest) {
        if self.width.get() == width && self.height.get() == height {
            return;
        }
        self.width.set(width);
        self.height.set(height);
        self.node.queue_relayout();
    }
}

impl Actor for Rectangle {
    fn node(&self) -> &Rc<ActorNode> {
        &self.node
    }

    fn type_name(&self) -> &'static str {
        "Rectangle"
    }

    fn preferred_width(&self, _for_height: f32) -> SizeRequest {
        self.width.get()
    }

    fn preferred_height(&self, _for_width: f32) -> SizeRequest {
        self.height.get()
    }

    fn paint(&self, ctx: &mut PaintContext) {
        ctx.fill_rect(self.node.local_box(), self.color.get());
    }
}
