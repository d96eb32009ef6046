//! Label Primitive - Wrapped text with height-for-width sizing.
//!
//! A label is as wide as its widest line and can narrow down to its widest
//! word. Its height depends on the width it is offered: the narrower, the
//! more lines.
//!
//! # Example
//!
//! ```rust
//! use spark_box::engine::Actor;
//! use spark_box::primitives::Label;
//!
//! let label = Label::new("hello wide world");
//! assert_eq!(label.preferred_width(-1.0).natural, 16.0);
//! assert_eq!(label.preferred_height(5.0).natural, 3.0);
//! ```

use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::engine::{Actor, ActorNode, PaintContext};
use crate::layout::{cells, measure_text_height, widest_line, widest_word, wrap_text};
use crate::types::{Rgba, SizeRequest};

pub struct Label {
    node: Rc<ActorNode>,
    text: Signal<String>,
    color: Signal<Rgba>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            node: ActorNode::new(None),
            text: signal(text.into()),
            color: signal(Rgba::WHITE),
        }
    }

    /// Builder: set the text color.
    pub fn with_color(self, color: Rgba) -> Self {
        self.color.set(color);
        self
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Replace the text. Queues a relayout since the size may change.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        if self.text.get() == text {
            return;
        }
        self.text.set(text);
        self.node.queue_relayout();
    }

    /// Reactive handle to the text.
    pub fn text_signal(&self) -> Signal<String> {
        self.text.clone()
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
}

impl Actor for Label {
    fn node(&self) -> &Rc<ActorNode> {
        &self.node
    }

    fn type_name(&self) -> &'static str {
        "Label"
    }

    fn preferred_width(&self, _for_height: f32) -> SizeRequest {
        let text = self.text.get();
        SizeRequest::new(f32::from(widest_word(&text)), f32::from(widest_line(&text)))
    }

    fn preferred_height(&self, for_width: f32) -> SizeRequest {
        let text = self.text.get();
        let lines = match cells(for_width) {
            // No room still wraps, one cell per line
            Some(width) => measure_text_height(&text, width.max(1)),
            // Unconstrained: only explicit newlines break
            None => measure_text_height(&text, 0),
        };
        SizeRequest::fixed(f32::from(lines))
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let text = self.text.get();
        if text.is_empty() {
            return;
        }

        let width = cells(self.node.width()).unwrap_or(0);
        let height = cells(self.node.height()).unwrap_or(0);
        if width == 0 {
            return;
        }

        let mut lines = wrap_text(&text, width);
        lines.truncate(usize::from(height));
        if lines.is_empty() {
            return;
        }
        ctx.draw_text(0.0, 0.0, lines, self.color.get());
    }
}
