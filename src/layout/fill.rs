//! Fill and alignment of a child inside its slot.

use crate::engine::Actor;
use crate::types::{ActorBox, RequestMode, SizeRequest};

use super::child::BoxChildMeta;

/// Clamp a request's natural extent into `[min, available]`, with
/// `available` winning when the two disagree.
fn fit(request: SizeRequest, available: f32) -> f32 {
    if request.natural > available {
        available
    } else if request.natural < request.min {
        request.min
    } else {
        request.natural
    }
}

/// Resolve the final box of `child` inside `slot`.
///
/// On a filled axis the child takes the whole slot extent. On the other
/// axis it takes its preferred size (measured in its request mode, limited
/// to the slot) and sits at `slot_start + free_space * align_factor`.
/// Positions and sizes are truncated to whole units.
pub fn allocate_fill(child: &dyn Actor, slot: &ActorBox, meta: &BoxChildMeta) -> ActorBox {
    let available_width = slot.width().max(0.0);
    let available_height = slot.height().max(0.0);

    let mut allocation = ActorBox::default();

    if meta.x_fill {
        allocation.x1 = slot.x1;
        allocation.x2 = (allocation.x1 + available_width).trunc();
    }

    if meta.y_fill {
        allocation.y1 = slot.y1;
        allocation.y2 = (allocation.y1 + available_height).trunc();
    }

    if meta.x_fill && meta.y_fill {
        return allocation;
    }

    let (child_width, child_height) = match child.request_mode() {
        RequestMode::HeightForWidth => {
            let width = fit(child.preferred_width(available_height), available_width);
            let height = fit(child.preferred_height(width), available_height);
            (width, height)
        }
        RequestMode::WidthForHeight => {
            let height = fit(child.preferred_height(available_width), available_height);
            let width = fit(child.preferred_width(height), available_width);
            (width, height)
        }
    };

    if !meta.x_fill {
        allocation.x1 = (slot.x1 + (available_width - child_width) * meta.x_align.factor()).trunc();
        allocation.x2 = allocation.x1 + child_width.trunc();
    }

    if !meta.y_fill {
        allocation.y1 = (slot.y1 + (available_height - child_height) * meta.y_align.factor()).trunc();
        allocation.y2 = allocation.y1 + child_height.trunc();
    }

    allocation
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::engine::ActorNode;
    use crate::primitives::Rectangle;
    use crate::types::Align;

    fn slot() -> ActorBox {
        ActorBox::new(10.0, 20.0, 30.0, 60.0)
    }

    /// Keeps a constant area: each extent is the area over the other one.
    struct Tile {
        node: Rc<ActorNode>,
        area: f32,
        mode: RequestMode,
    }

    impl Tile {
        fn new(area: f32, mode: RequestMode) -> Self {
            Self {
                node: ActorNode::new(None),
                area,
                mode,
            }
        }

        fn extent_for(&self, other: f32) -> SizeRequest {
            if other > 0.0 {
                SizeRequest::fixed((self.area / other).ceil())
            } else {
                SizeRequest::fixed(self.area)
            }
        }
    }

    impl Actor for Tile {
        fn node(&self) -> &Rc<ActorNode> {
            &self.node
        }

        fn type_name(&self) -> &'static str {
            "Tile"
        }

        fn request_mode(&self) -> RequestMode {
            self.mode
        }

        fn preferred_width(&self, for_height: f32) -> SizeRequest {
            self.extent_for(for_height)
        }

        fn preferred_height(&self, for_width: f32) -> SizeRequest {
            self.extent_for(for_width)
        }
    }

    #[test]
    fn test_fill_both_axes_takes_slot() {
        let child = Rectangle::sized(4.0, 6.0);
        let b = allocate_fill(&child, &slot(), &BoxChildMeta::default());
        assert_eq!(b, slot());
    }

    #[test]
    fn test_center_alignment_offsets_by_half_the_free_space() {
        let child = Rectangle::sized(4.0, 6.0);
        let meta = BoxChildMeta::default().x_fill(false).y_fill(false);
        let b = allocate_fill(&child, &slot(), &meta);

        // (20 - 4) / 2 = 8, (40 - 6) / 2 = 17
        assert_eq!(b, ActorBox::new(18.0, 37.0, 22.0, 43.0));
    }

    #[test]
    fn test_start_and_end_alignment() {
        let child = Rectangle::sized(4.0, 6.0);

        let start = BoxChildMeta::default()
            .x_fill(false)
            .y_fill(false)
            .x_align(Align::Start)
            .y_align(Align::Start);
        assert_eq!(
            allocate_fill(&child, &slot(), &start),
            ActorBox::new(10.0, 20.0, 14.0, 26.0)
        );

        let end = BoxChildMeta::default()
            .x_fill(false)
            .y_fill(false)
            .x_align(Align::End)
            .y_align(Align::End);
        assert_eq!(
            allocate_fill(&child, &slot(), &end),
            ActorBox::new(26.0, 54.0, 30.0, 60.0)
        );
    }

    #[test]
    fn test_mixed_fill() {
        let child = Rectangle::sized(4.0, 6.0);
        let meta = BoxChildMeta::default().y_fill(false).y_align(Align::End);
        let b = allocate_fill(&child, &slot(), &meta);
        assert_eq!(b, ActorBox::new(10.0, 54.0, 30.0, 60.0));
    }

    #[test]
    fn test_natural_larger_than_slot_is_limited() {
        let child = Rectangle::sized(50.0, 6.0);
        let meta = BoxChildMeta::default().x_fill(false);
        let b = allocate_fill(&child, &slot(), &meta);
        assert_eq!(b, ActorBox::new(10.0, 20.0, 30.0, 60.0));
    }

    #[test]
    fn test_natural_below_min_uses_min() {
        let child = Rectangle::new(SizeRequest::new(8.0, 2.0), SizeRequest::fixed(6.0));
        let meta = BoxChildMeta::default().x_fill(false).x_align(Align::Start);
        let b = allocate_fill(&child, &slot(), &meta);
        assert_eq!(b.width(), 8.0);
    }

    #[test]
    fn test_negative_slot_is_treated_as_empty() {
        let child = Rectangle::sized(4.0, 6.0);
        let inverted = ActorBox::new(10.0, 10.0, 5.0, 5.0);
        let b = allocate_fill(&child, &inverted, &BoxChildMeta::default());
        assert_eq!(b, ActorBox::new(10.0, 10.0, 10.0, 10.0));
    }

    #[test]
    fn test_request_mode_picks_the_axis_measured_first() {
        let wide = ActorBox::new(0.0, 0.0, 100.0, 10.0);
        let meta = BoxChildMeta::default()
            .x_fill(false)
            .y_fill(false)
            .x_align(Align::Start)
            .y_align(Align::Start);

        // Height first: 20 / 100 rounds up to one row, then 20 columns
        let tile = Tile::new(20.0, RequestMode::WidthForHeight);
        assert_eq!(allocate_fill(&tile, &wide, &meta), ActorBox::new(0.0, 0.0, 20.0, 1.0));

        // Width first: 20 / 10 = 2 columns, then 10 rows
        let tile = Tile::new(20.0, RequestMode::HeightForWidth);
        assert_eq!(allocate_fill(&tile, &wide, &meta), ActorBox::new(0.0, 0.0, 2.0, 10.0));
    }

    #[test]
    fn test_width_for_height_limits_height_before_measuring_width() {
        let tall = ActorBox::new(5.0, 0.0, 25.0, 3.0);
        let meta = BoxChildMeta::default().x_fill(false).x_align(Align::End);

        // Filled height is 3, natural height for width 20 is 1, so the
        // width is measured at 1: 12 columns, right-aligned in 20
        let tile = Tile::new(12.0, RequestMode::WidthForHeight);
        assert_eq!(allocate_fill(&tile, &tall, &meta), ActorBox::new(13.0, 0.0, 25.0, 3.0));
    }
}
