//! Core types for spark-box.
//!
//! Geometry, size requests and alignment. These flow between the box layout,
//! its children and the host stage on every layout and paint pass.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

// =============================================================================
// ActorBox - Allocation rectangles
// =============================================================================

/// An axis-aligned box given by its two corners.
///
/// Allocations are expressed in the parent's coordinate space, so a child at
/// the top-left corner of its parent's content area has `x1 == 0` (plus any
/// padding the parent applies).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActorBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl ActorBox {
    /// Create a box from its corners.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a box from an origin and a size.
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// The same box moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// Open-interval overlap test.
    ///
    /// Boxes that merely touch along an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &ActorBox) -> bool {
        self.x1 < other.x2 && self.x2 > other.x1 && self.y1 < other.y2 && self.y2 > other.y1
    }

    /// Check if a point lies inside this box (half-open on the far edges).
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }
}

// =============================================================================
// SizeRequest - Result of a preferred size query
// =============================================================================

/// A (minimum, natural) size pair returned by preferred size queries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeRequest {
    /// Smallest extent the actor can take without breaking.
    pub min: f32,
    /// Extent the actor would like when unconstrained.
    pub natural: f32,
}

impl SizeRequest {
    pub const ZERO: Self = Self { min: 0.0, natural: 0.0 };

    pub const fn new(min: f32, natural: f32) -> Self {
        Self { min, natural }
    }

    /// A request whose minimum and natural extents are equal.
    pub const fn fixed(size: f32) -> Self {
        Self { min: size, natural: size }
    }
}

// =============================================================================
// Align / RequestMode - Child placement enums
// =============================================================================

/// Placement of a child inside its allotted box on an axis it does not fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    /// Fraction of the free space placed before the child.
    pub const fn factor(self) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// Which dimension an actor wants negotiated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    /// Width is queried first, height is then queried for that width.
    #[default]
    HeightForWidth,
    /// Height is queried first, width is then queried for that height.
    WidthForHeight,
}

// =============================================================================
// Tests
// =============================================================================
