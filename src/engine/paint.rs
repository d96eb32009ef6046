//! Paint and pick contexts.
//!
//! Painting does not rasterize anything. Each pass records what it visited
//! and which operations it would have drawn, in stage coordinates, so hosts
//! can render the ops however they like and tests can assert on them.
//!
//! Transforms are translations only: actors translate by their allocation
//! origin, scrolled containers additionally by their scroll offset.

use crate::types::{ActorBox, Rgba};

use super::registry::ActorId;

// =============================================================================
// Transform
// =============================================================================

/// A 2D translation mapping actor-local coordinates to stage coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub tx: f32,
    pub ty: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self { tx: 0.0, ty: 0.0 };

    /// Compose a further translation on top of this one.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.tx += dx;
        self.ty += dy;
    }

    /// Map a local point to stage coordinates.
    pub fn apply_point(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.tx, y + self.ty)
    }

    /// Map a local box to stage coordinates.
    pub fn apply_box(&self, b: &ActorBox) -> ActorBox {
        b.translated(self.tx, self.ty)
    }
}

/// Save/restore stack of transforms shared by paint and pick passes.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self {
            current: Transform::IDENTITY,
            saved: Vec::new(),
        }
    }
}

impl TransformStack {
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    pub fn current(&self) -> Transform {
        self.current
    }

    pub fn current_mut(&mut self) -> &mut Transform {
        &mut self.current
    }
}

// =============================================================================
// Paint
// =============================================================================

/// A recorded paint operation, in stage coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// Solid rectangle.
    FillRect { rect: ActorBox, color: Rgba },
    /// Lines of text starting at `(x, y)`, one line per unit of height.
    Text {
        x: f32,
        y: f32,
        lines: Vec<String>,
        color: Rgba,
    },
}

/// State of one paint pass.
#[derive(Debug, Clone, Default)]
pub struct PaintContext {
    transforms: TransformStack,
    visited: Vec<ActorId>,
    ops: Vec<PaintOp>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transforms(&mut self) -> &mut TransformStack {
        &mut self.transforms
    }

    pub fn transform(&self) -> Transform {
        self.transforms.current()
    }

    /// Record that an actor's paint ran in this pass.
    pub fn record_visit(&mut self, id: ActorId) {
        self.visited.push(id);
    }

    /// Fill a rectangle given in the current actor's local coordinates.
    pub fn fill_rect(&mut self, local: ActorBox, color: Rgba) {
        if color.is_transparent() {
            return;
        }
        let rect = self.transforms.current().apply_box(&local);
        self.ops.push(PaintOp::FillRect { rect, color });
    }

    /// Draw lines of text at a local origin.
    pub fn draw_text(&mut self, x: f32, y: f32, lines: Vec<String>, color: Rgba) {
        let (x, y) = self.transforms.current().apply_point(x, y);
        self.ops.push(PaintOp::Text { x, y, lines, color });
    }

    /// Ids of every actor painted in this pass, in paint order.
    pub fn visited(&self) -> &[ActorId] {
        &self.visited
    }

    pub fn was_painted(&self, id: ActorId) -> bool {
        self.visited.contains(&id)
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }
}

// =============================================================================
// Pick
// =============================================================================

/// A pickable region for pointer hit detection, in stage coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub rect: ActorBox,
    pub actor: ActorId,
}

/// State of one pick pass.
///
/// Regions are recorded in paint order, so later regions are on top.
#[derive(Debug, Clone, Default)]
pub struct PickContext {
    transforms: TransformStack,
    regions: Vec<HitRegion>,
}

impl PickContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transforms(&mut self) -> &mut TransformStack {
        &mut self.transforms
    }

    pub fn transform(&self) -> Transform {
        self.transforms.current()
    }

    /// Record a hit region given in the current actor's local coordinates.
    pub fn add_region(&mut self, actor: ActorId, local: ActorBox) {
        let rect = self.transforms.current().apply_box(&local);
        self.regions.push(HitRegion { rect, actor });
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    pub fn was_picked(&self, id: ActorId) -> bool {
        self.regions.iter().any(|r| r.actor == id)
    }

    /// Topmost actor whose region contains the stage point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<ActorId> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.rect.contains(x, y))
            .map(|r| r.actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::{allocate_id, release_id};

    #[test]
    fn test_transform_stack_save_restore() {
        let mut stack = TransformStack::default();
        stack.save();
        stack.current_mut().translate(10.0, 5.0);
        assert_eq!(stack.current(), Transform { tx: 10.0, ty: 5.0 });

        stack.restore();
        assert_eq!(stack.current(), Transform::IDENTITY);

        // Unbalanced restore keeps the current transform
        stack.restore();
        assert_eq!(stack.current(), Transform::IDENTITY);
    }

    #[test]
    fn test_fill_rect_uses_current_transform() {
        let mut ctx = PaintContext::new();
        ctx.transforms().current_mut().translate(3.0, 4.0);
        ctx.fill_rect(ActorBox::new(0.0, 0.0, 2.0, 2.0), Rgba::RED);
        ctx.fill_rect(ActorBox::new(0.0, 0.0, 2.0, 2.0), Rgba::TRANSPARENT);

        assert_eq!(
            ctx.ops(),
            &[PaintOp::FillRect {
                rect: ActorBox::new(3.0, 4.0, 5.0, 6.0),
                color: Rgba::RED,
            }]
        );
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let below = allocate_id(None);
        let above = allocate_id(None);

        let mut ctx = PickContext::new();
        ctx.add_region(below, ActorBox::new(0.0, 0.0, 10.0, 10.0));
        ctx.add_region(above, ActorBox::new(5.0, 5.0, 10.0, 10.0));

        assert_eq!(ctx.hit_test(7.0, 7.0), Some(above));
        assert_eq!(ctx.hit_test(1.0, 1.0), Some(below));
        assert_eq!(ctx.hit_test(20.0, 20.0), None);

        release_id(below);
        release_id(above);
    }
}
