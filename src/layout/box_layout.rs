//! BoxLayout - A single-axis container with expand, fill and scrolling.
//!
//! Children are laid out in one line, horizontally or vertically. Each child
//! gets its natural main-axis size; space left over is shared evenly among
//! children marked `expand`. On the cross axis every child is offered the
//! whole content extent and then filled or aligned inside it.
//!
//! Two adjustments drive scrolling. Every allocation pass resizes their
//! ranges to the content's preferred size, and the current values translate
//! the content during paint and pick.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use spark_box::{BoxLayout, BoxProps, BoxChildMeta, Container, Rectangle};
//!
//! let column = BoxLayout::with_props(BoxProps {
//!     vertical: true,
//!     spacing: 1,
//!     ..Default::default()
//! });
//!
//! column.add(Rc::new(Rectangle::sized(10.0, 1.0)));
//! column.pack(Rc::new(Rectangle::sized(10.0, 1.0)), BoxChildMeta::default().expand(true));
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};
use tracing::{debug, trace, warn};

use crate::engine::{
    paint_actor, pick_actor, same_actor, Actor, ActorNode, ActorRef, Container, HandlerId,
    HandlerList, PaintContext, PickContext, Transform,
};
use crate::error::LayoutError;
use crate::state::{Adjustment, AdjustmentRange, Scrollable};
use crate::theme::ThemeNode;
use crate::types::{ActorBox, SizeRequest};

use super::child::{BoxChild, BoxChildMeta};
use super::fill::allocate_fill;

// =============================================================================
// Props
// =============================================================================

/// Construction properties for a [`BoxLayout`].
#[derive(Debug, Clone, Default)]
pub struct BoxProps {
    /// Optional name for lookup and diagnostics.
    pub name: Option<String>,
    /// Lay children out top to bottom instead of left to right.
    pub vertical: bool,
    /// Place children in reverse insertion order.
    pub pack_start: bool,
    /// Gap between consecutive visible children.
    pub spacing: u32,
    pub hadjustment: Option<Adjustment>,
    pub vadjustment: Option<Adjustment>,
    pub theme: ThemeNode,
}

// =============================================================================
// BoxLayout
// =============================================================================

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// A container that packs its children along one axis.
pub struct BoxLayout {
    node: Rc<ActorNode>,
    children: RefCell<Vec<BoxChild>>,

    vertical: Signal<bool>,
    pack_start: Signal<bool>,
    spacing: Signal<u32>,
    theme: Signal<ThemeNode>,
    hadjustment: Signal<Option<Adjustment>>,
    vadjustment: Signal<Option<Adjustment>>,

    hadjustment_handler: Cell<Option<HandlerId>>,
    vadjustment_handler: Cell<Option<HandlerId>>,

    actor_added: HandlerList<ActorRef>,
    actor_removed: HandlerList<ActorRef>,
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxLayout {
    /// Create an empty horizontal box with no spacing.
    pub fn new() -> Self {
        Self::with_props(BoxProps::default())
    }

    pub fn with_props(props: BoxProps) -> Self {
        let layout = Self {
            node: ActorNode::new(props.name.as_deref()),
            children: RefCell::new(Vec::new()),
            vertical: signal(props.vertical),
            pack_start: signal(props.pack_start),
            spacing: signal(props.spacing),
            theme: signal(props.theme),
            hadjustment: signal(None),
            vadjustment: signal(None),
            hadjustment_handler: Cell::new(None),
            vadjustment_handler: Cell::new(None),
            actor_added: HandlerList::new(),
            actor_removed: HandlerList::new(),
        };
        layout.set_adjustments(props.hadjustment, props.vadjustment);
        layout
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn is_vertical(&self) -> bool {
        self.vertical.get()
    }

    /// Switch the main axis. Queues a relayout when it changes.
    pub fn set_vertical(&self, vertical: bool) {
        if self.vertical.get() == vertical {
            return;
        }
        self.vertical.set(vertical);
        self.node.queue_relayout();
    }

    pub fn is_pack_start(&self) -> bool {
        self.pack_start.get()
    }

    /// Switch between insertion order and reverse order.
    pub fn set_pack_start(&self, pack_start: bool) {
        if self.pack_start.get() == pack_start {
            return;
        }
        self.pack_start.set(pack_start);
        self.node.queue_relayout();
    }

    pub fn spacing(&self) -> u32 {
        self.spacing.get()
    }

    pub fn set_spacing(&self, spacing: u32) {
        if self.spacing.get() == spacing {
            return;
        }
        self.spacing.set(spacing);
        self.node.queue_relayout();
    }

    pub fn theme(&self) -> ThemeNode {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: ThemeNode) {
        if self.theme.get() == theme {
            return;
        }
        self.theme.set(theme);
        self.node.queue_relayout();
    }

    /// Reactive handle to the `vertical` property.
    pub fn vertical_signal(&self) -> Signal<bool> {
        self.vertical.clone()
    }

    /// Reactive handle to the `pack_start` property.
    pub fn pack_start_signal(&self) -> Signal<bool> {
        self.pack_start.clone()
    }

    /// Reactive handle to the `spacing` property.
    pub fn spacing_signal(&self) -> Signal<u32> {
        self.spacing.clone()
    }

    /// Reactive handle to the installed horizontal adjustment. Unlike
    /// [`hadjustment`](Self::hadjustment) this never creates one.
    pub fn hadjustment_signal(&self) -> Signal<Option<Adjustment>> {
        self.hadjustment.clone()
    }

    /// Reactive handle to the installed vertical adjustment.
    pub fn vadjustment_signal(&self) -> Signal<Option<Adjustment>> {
        self.vadjustment.clone()
    }

    // =========================================================================
    // Adjustments
    // =========================================================================

    /// The horizontal adjustment, created on first use.
    pub fn hadjustment(&self) -> Adjustment {
        if let Some(adjustment) = self.hadjustment.get() {
            return adjustment;
        }
        let adjustment = self.default_adjustment(Axis::Horizontal);
        self.set_adjustments(Some(adjustment.clone()), self.vadjustment.get());
        adjustment
    }

    /// The vertical adjustment, created on first use.
    pub fn vadjustment(&self) -> Adjustment {
        if let Some(adjustment) = self.vadjustment.get() {
            return adjustment;
        }
        let adjustment = self.default_adjustment(Axis::Vertical);
        self.set_adjustments(self.hadjustment.get(), Some(adjustment.clone()));
        adjustment
    }

    pub fn set_hadjustment(&self, adjustment: Option<Adjustment>) {
        self.set_adjustments(adjustment, self.vadjustment.get());
    }

    pub fn set_vadjustment(&self, adjustment: Option<Adjustment>) {
        self.set_adjustments(self.hadjustment.get(), adjustment);
    }

    /// Current scroll offset. Missing adjustments count as 0.
    pub fn scroll_offset(&self) -> (f64, f64) {
        let x = self.hadjustment.get().map_or(0.0, |adj| adj.value());
        let y = self.vadjustment.get().map_or(0.0, |adj| adj.value());
        (x, y)
    }

    /// A default adjustment sized against the enclosing stage.
    fn default_adjustment(&self, axis: Axis) -> Adjustment {
        let (extent, increment) = match self.node.stage() {
            Some(stage) => {
                let (extent, stage_extent) = match axis {
                    Axis::Horizontal => (self.node.width(), stage.width()),
                    Axis::Vertical => (self.node.height(), stage.height()),
                };
                (extent, stage_extent.min(extent).max(1.0))
            }
            None => (1.0, 1.0),
        };

        Adjustment::new(
            0.0,
            0.0,
            f64::from(extent),
            1.0,
            f64::from(increment),
            f64::from(increment),
        )
    }

    fn replace_adjustment(&self, axis: Axis, adjustment: Option<Adjustment>) {
        let (slot, handler) = match axis {
            Axis::Horizontal => (&self.hadjustment, &self.hadjustment_handler),
            Axis::Vertical => (&self.vadjustment, &self.vadjustment_handler),
        };

        let current = slot.get();
        if current == adjustment {
            return;
        }

        if let (Some(old), Some(id)) = (current, handler.take()) {
            old.disconnect(id);
        }

        if let Some(new) = &adjustment {
            let node = Rc::downgrade(&self.node);
            let id = new.connect_value_changed(move |_| {
                if let Some(node) = node.upgrade() {
                    node.queue_redraw();
                }
            });
            handler.set(Some(id));
        }

        slot.set(adjustment);
        self.node.queue_relayout();
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Snapshot of the children in insertion order.
    pub fn children(&self) -> Vec<ActorRef> {
        self.children
            .borrow()
            .iter()
            .map(|child| child.actor.clone())
            .collect()
    }

    pub fn n_children(&self) -> usize {
        self.children.borrow().len()
    }

    /// Add a child with the given placement properties.
    pub fn pack(&self, child: ActorRef, meta: BoxChildMeta) {
        self.insert(child, meta);
    }

    /// Placement properties of a child.
    pub fn child_meta(&self, child: &dyn Actor) -> Result<BoxChildMeta, LayoutError> {
        self.children
            .borrow()
            .iter()
            .find(|entry| same_actor(entry.actor.as_ref(), child))
            .map(|entry| entry.meta)
            .ok_or_else(|| self.not_a_child(child))
    }

    /// Replace the placement properties of a child.
    pub fn set_child_meta(&self, child: &dyn Actor, meta: BoxChildMeta) -> Result<(), LayoutError> {
        self.update_child_meta(child, |current| *current = meta)
    }

    /// Edit the placement properties of a child. Queues a relayout
    /// if anything changed.
    pub fn update_child_meta(
        &self,
        child: &dyn Actor,
        edit: impl FnOnce(&mut BoxChildMeta),
    ) -> Result<(), LayoutError> {
        // Edit a copy so `edit` may call back into the box
        let before = self.child_meta(child)?;
        let mut meta = before;
        edit(&mut meta);
        if meta == before {
            return Ok(());
        }

        // The child may have been removed from inside `edit`
        let Some(position) = self.position_of(child) else {
            return Err(self.not_a_child(child));
        };
        self.children.borrow_mut()[position].meta = meta;
        self.node.queue_relayout();
        Ok(())
    }

    /// Run `handler` after a child is added.
    pub fn connect_actor_added(&self, handler: impl Fn(&ActorRef) + 'static) -> HandlerId {
        self.actor_added.connect(handler)
    }

    /// Run `handler` after a child is removed.
    pub fn connect_actor_removed(&self, handler: impl Fn(&ActorRef) + 'static) -> HandlerId {
        self.actor_removed.connect(handler)
    }

    /// Disconnect an actor-added or actor-removed handler.
    pub fn disconnect(&self, id: HandlerId) -> bool {
        self.actor_added.disconnect(id) || self.actor_removed.disconnect(id)
    }

    fn insert(&self, child: ActorRef, meta: BoxChildMeta) {
        child.node().set_parent(&self.node);
        self.children.borrow_mut().push(BoxChild {
            actor: child.clone(),
            meta,
        });
        trace!(child = %child.node().name(), container = %self.node.name(), "actor added");
        self.actor_added.emit(&child);
    }

    fn snapshot(&self) -> Vec<BoxChild> {
        self.children.borrow().clone()
    }

    fn position_of(&self, child: &dyn Actor) -> Option<usize> {
        self.children
            .borrow()
            .iter()
            .position(|entry| same_actor(entry.actor.as_ref(), child))
    }

    fn not_a_child(&self, child: &dyn Actor) -> LayoutError {
        warn!(
            "Actor of type '{}' is not a child of container of type '{}'",
            child.type_name(),
            self.type_name()
        );
        LayoutError::NotAChild {
            child: child.type_name(),
            container: self.type_name(),
        }
    }

    // =========================================================================
    // Size negotiation
    // =========================================================================

    /// Preferred width of the children alone, without theme insets.
    fn content_preferred_width(&self, for_height: f32) -> SizeRequest {
        let vertical = self.vertical.get();
        let mut request = SizeRequest::ZERO;
        let mut visible = 0u32;

        for child in self.snapshot().iter().filter(|c| c.is_visible()) {
            visible += 1;
            let child_request = child
                .actor
                .preferred_width(if vertical { -1.0 } else { for_height });

            if vertical {
                request.min = request.min.max(child_request.min);
                request.natural = request.natural.max(child_request.natural);
            } else {
                request.min += child_request.min;
                request.natural += child_request.natural;
            }
        }

        if !vertical && visible > 1 {
            let gaps = self.spacing.get() as f32 * (visible - 1) as f32;
            request.min += gaps;
            request.natural += gaps;
        }

        request
    }

    /// Preferred height of the children alone, without theme insets.
    fn content_preferred_height(&self, for_width: f32) -> SizeRequest {
        let vertical = self.vertical.get();
        let mut request = SizeRequest::ZERO;
        let mut visible = 0u32;

        for child in self.snapshot().iter().filter(|c| c.is_visible()) {
            visible += 1;
            let child_request = child
                .actor
                .preferred_height(if vertical { for_width } else { -1.0 });

            if vertical {
                request.min += child_request.min;
                request.natural += child_request.natural;
            } else {
                request.min = request.min.max(child_request.min);
                request.natural = request.natural.max(child_request.natural);
            }
        }

        if vertical && visible > 1 {
            let gaps = self.spacing.get() as f32 * (visible - 1) as f32;
            request.min += gaps;
            request.natural += gaps;
        }

        request
    }

    // =========================================================================
    // Paint / pick helpers
    // =========================================================================

    /// Scroll offset as applied to the transform: whole units, toward zero.
    fn scroll_shift(&self) -> (f32, f32) {
        let (x, y) = self.scroll_offset();
        ((x as i32) as f32, (y as i32) as f32)
    }

    /// Visit every visible child overlapping the scrolled window.
    fn for_each_in_window(&self, visit: &mut dyn FnMut(&dyn Actor)) {
        let children = self.snapshot();
        if children.is_empty() {
            return;
        }

        let (x, y) = self.scroll_offset();
        let (x, y) = (x as f32, y as f32);
        let window = ActorBox::new(x, y, x + self.node.width(), y + self.node.height());

        for child in children.iter().filter(|c| c.is_visible()) {
            let child_box = child.actor.node().allocation();
            if child_box.intersects(&window) {
                visit(child.actor.as_ref());
            } else {
                trace!(child = %child.actor.node().name(), "culled outside scroll window");
            }
        }
    }
}

/// Resize an adjustment's range to the content, then re-clamp its value.
fn sync_adjustment(adjustment: &Adjustment, content_extent: f32, available: f32) {
    let available = f64::from(available);
    adjustment.set_range(AdjustmentRange {
        lower: 0.0,
        upper: f64::from(content_extent),
        page_size: available,
        step_increment: available / 6.0,
        page_increment: available,
    });
    adjustment.set_value(adjustment.value());
}

// =============================================================================
// Actor
// =============================================================================

impl Actor for BoxLayout {
    fn node(&self) -> &Rc<ActorNode> {
        &self.node
    }

    fn type_name(&self) -> &'static str {
        "BoxLayout"
    }

    fn preferred_width(&self, for_height: f32) -> SizeRequest {
        let theme = self.theme.get();
        let mut for_height = for_height;
        theme.adjust_for_height(&mut for_height);

        let mut request = self.content_preferred_width(for_height);
        theme.adjust_preferred_width(&mut request);
        request
    }

    fn preferred_height(&self, for_width: f32) -> SizeRequest {
        let theme = self.theme.get();
        let mut for_width = for_width;
        theme.adjust_for_width(&mut for_width);

        let mut request = self.content_preferred_height(for_width);
        theme.adjust_preferred_height(&mut request);
        request
    }

    fn allocate(&self, allocation: &ActorBox) {
        self.node.set_allocation(*allocation);

        let children = self.snapshot();
        if children.is_empty() {
            return;
        }

        let content = self.theme.get().content_box(allocation);
        let avail_width = content.width();
        let avail_height = content.height();

        let pref_height = self.content_preferred_height(avail_width).natural;
        let pref_width = self.content_preferred_width(avail_height).natural;

        if let Some(vadjustment) = self.vadjustment.get() {
            sync_adjustment(&vadjustment, pref_height, avail_height);
        }
        if let Some(hadjustment) = self.hadjustment.get() {
            sync_adjustment(&hadjustment, pref_width, avail_width);
        }

        let vertical = self.vertical.get();
        let spacing = self.spacing.get() as f32;

        let n_expand = children
            .iter()
            .filter(|c| c.is_visible() && c.meta.expand)
            .count();

        let extra_space = if n_expand == 0 {
            0.0
        } else {
            let (available, preferred) = if vertical {
                (avail_height, pref_height)
            } else {
                (avail_width, pref_width)
            };
            // Don't shrink anything
            ((available - preferred) / n_expand as f32).trunc().max(0.0)
        };

        debug!(
            actor = %self.node.name(),
            avail_width,
            avail_height,
            pref_width,
            pref_height,
            n_expand,
            extra_space,
            "box allocate"
        );

        let ordered: Vec<&BoxChild> = if self.pack_start.get() {
            children.iter().rev().collect()
        } else {
            children.iter().collect()
        };

        let mut position = if vertical { content.y1 } else { content.x1 };

        for child in ordered.into_iter().filter(|c| c.is_visible()) {
            let extent;
            let slot;

            if vertical {
                let natural = child.actor.preferred_height(avail_width).natural;
                extent = if child.meta.expand { natural + extra_space } else { natural };
                slot = ActorBox::new(content.x1, position, content.x2, position + extent);
            } else {
                let natural = child.actor.preferred_width(avail_height).natural;
                extent = if child.meta.expand { natural + extra_space } else { natural };
                slot = ActorBox::new(position, content.y1, position + extent, content.y2);
            }

            let child_box = allocate_fill(child.actor.as_ref(), &slot, &child.meta);
            trace!(
                child = %child.actor.node().name(),
                x1 = child_box.x1,
                y1 = child_box.y1,
                x2 = child_box.x2,
                y2 = child_box.y2,
                "child allocated"
            );
            child.actor.allocate(&child_box);

            position += extent + spacing;
        }
    }

    fn apply_transform(&self, transform: &mut Transform) {
        let allocation = self.node.allocation();
        transform.translate(allocation.x1, allocation.y1);

        let (x, y) = self.scroll_shift();
        transform.translate(-x, -y);
    }

    fn paint(&self, ctx: &mut PaintContext) {
        // The background stays put while the content scrolls under it
        let (x, y) = self.scroll_shift();
        let background = self.theme.get().background;
        ctx.fill_rect(self.node.local_box().translated(x, y), background);

        self.for_each_in_window(&mut |child: &dyn Actor| paint_actor(child, ctx));
    }

    fn pick(&self, ctx: &mut PickContext) {
        let (x, y) = self.scroll_shift();
        ctx.add_region(self.node.id(), self.node.local_box().translated(x, y));

        self.for_each_in_window(&mut |child: &dyn Actor| pick_actor(child, ctx));
    }
}

// =============================================================================
// Container / Scrollable
// =============================================================================

impl Container for BoxLayout {
    fn add(&self, child: ActorRef) {
        self.insert(child, BoxChildMeta::default());
    }

    fn remove(&self, child: &ActorRef) -> Result<(), LayoutError> {
        let Some(position) = self.position_of(child.as_ref()) else {
            return Err(self.not_a_child(child.as_ref()));
        };

        let removed = self.children.borrow_mut().remove(position);
        removed.actor.node().unparent();
        trace!(child = %removed.actor.node().name(), container = %self.node.name(), "actor removed");
        self.actor_removed.emit(&removed.actor);
        self.node.queue_relayout();
        Ok(())
    }

    fn for_each(&self, visitor: &mut dyn FnMut(&ActorRef)) {
        for child in self.children() {
            visitor(&child);
        }
    }

    fn raise(&self, _child: &ActorRef, _sibling: Option<&ActorRef>) {
        warn!("raise() not yet implemented");
    }

    fn lower(&self, _child: &ActorRef, _sibling: Option<&ActorRef>) {
        warn!("lower() not yet implemented");
    }

    fn sort_depth_order(&self) {
        warn!("sort_depth_order() not yet implemented");
    }
}

impl Scrollable for BoxLayout {
    fn set_adjustments(&self, hadjustment: Option<Adjustment>, vadjustment: Option<Adjustment>) {
        self.replace_adjustment(Axis::Horizontal, hadjustment);
        self.replace_adjustment(Axis::Vertical, vadjustment);
    }

    fn adjustments(&self) -> (Adjustment, Adjustment) {
        (self.hadjustment(), self.vadjustment())
    }
}

impl Drop for BoxLayout {
    fn drop(&mut self) {
        for child in self.children.get_mut().drain(..) {
            child.actor.node().unparent();
        }
        self.replace_adjustment(Axis::Horizontal, None);
        self.replace_adjustment(Axis::Vertical, None);
    }
}

// =============================================================================
// Tests
// =============================================================================
