//! 2D vector and axis-aligned rectangle in a y-down coordinate system.
//!
//! These carry the exact edge semantics controls rely on (half-open containment, open-interval
//! intersection, position-only clamping). Convert to `kurbo` types at the render boundary.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::foundation::math::clamp;

/// A 2D vector or point.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise product.
    pub fn mul_elem(self, b: Vec2) -> Vec2 {
        Vec2::new(self.x * b.x, self.y * b.y)
    }

    /// Component-wise quotient.
    pub fn div_elem(self, b: Vec2) -> Vec2 {
        Vec2::new(self.x / b.x, self.y / b.y)
    }

    pub fn dot(self, b: Vec2) -> f64 {
        self.x * b.x + self.y * b.y
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn min(self, b: Vec2) -> Vec2 {
        Vec2::new(self.x.min(b.x), self.y.min(b.y))
    }

    pub fn max(self, b: Vec2) -> Vec2 {
        Vec2::new(self.x.max(b.x), self.y.max(b.y))
    }

    pub fn round(self) -> Vec2 {
        Vec2::new(self.x.round(), self.y.round())
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, b: Vec2) -> Vec2 {
        Vec2::new(self.x + b.x, self.y + b.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, b: Vec2) -> Vec2 {
        Vec2::new(self.x - b.x, self.y - b.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, s: f64) -> Vec2 {
        Vec2::new(self.x / s, self.y / s)
    }
}

impl From<Vec2> for kurbo::Vec2 {
    fn from(v: Vec2) -> Self {
        kurbo::Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for kurbo::Point {
    fn from(v: Vec2) -> Self {
        kurbo::Point::new(v.x, v.y)
    }
}

impl From<kurbo::Point> for Vec2 {
    fn from(p: kurbo::Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<kurbo::Vec2> for Vec2 {
    fn from(v: kurbo::Vec2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Axis-aligned rectangle: `pos` is the top-left corner, `size` is non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle at the origin with the given size.
    pub const fn from_size(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
        }
    }

    /// Half-open containment: inclusive on the left/top edge, exclusive on the right/bottom.
    pub fn contains(self, v: Vec2) -> bool {
        self.pos.x <= v.x
            && v.x < self.pos.x + self.size.x
            && self.pos.y <= v.y
            && v.y < self.pos.y + self.size.y
    }

    /// Open-interval overlap on both axes. Rectangles that only touch do not intersect.
    pub fn intersects(self, r: Rect) -> bool {
        (self.pos.x + self.size.x > r.pos.x && r.pos.x + r.size.x > self.pos.x)
            && (self.pos.y + self.size.y > r.pos.y && r.pos.y + r.size.y > self.pos.y)
    }

    pub fn center(self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn top_right(self) -> Vec2 {
        self.pos + Vec2::new(self.size.x, 0.0)
    }

    pub fn bottom_left(self) -> Vec2 {
        self.pos + Vec2::new(0.0, self.size.y)
    }

    pub fn bottom_right(self) -> Vec2 {
        self.pos + self.size
    }

    pub fn area(self) -> f64 {
        self.size.x * self.size.y
    }

    /// Move (never resize) this rectangle so it lies inside `bound`.
    ///
    /// On an axis where this rectangle is larger than `bound`, the position snaps to
    /// `bound.pos`.
    pub fn clamp(self, bound: Rect) -> Rect {
        Rect {
            pos: Vec2::new(
                clamp(
                    self.pos.x,
                    bound.pos.x,
                    bound.pos.x + bound.size.x - self.size.x,
                ),
                clamp(
                    self.pos.y,
                    bound.pos.y,
                    bound.pos.y + bound.size.y - self.size.y,
                ),
            ),
            size: self.size,
        }
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        kurbo::Rect::from_origin_size(
            kurbo::Point::from(r.pos),
            kurbo::Size::new(r.size.x, r.size.y),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
