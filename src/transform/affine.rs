//! Affine transform helpers.

use kurbo::{Affine, Point};

use crate::foundation::geom::Vec2;

#[inline]
pub fn compose(a: Affine, b: Affine) -> Affine {
    a * b
}

/// Mutable 2D affine transform built up from scale/rotate/translate calls.
///
/// Each call composes onto the current transform in the already-transformed frame, so the
/// effective matrix after `op_1; op_2; ...; op_n` is `M_1 * M_2 * ... * M_n`: the last call is
/// the first one applied to child coordinates. That is what makes pivoting work:
///
/// ```
/// use svgknob::{TransformAccumulator, Vec2};
///
/// let pivot = Vec2::new(5.0, 5.0);
/// let mut t = TransformAccumulator::new();
/// t.translate(pivot);
/// t.rotate(std::f64::consts::FRAC_PI_2);
/// t.translate(-pivot);
/// let p = t.apply(pivot);
/// assert!((p - pivot).norm() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformAccumulator {
    affine: Affine,
}

impl Default for TransformAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformAccumulator {
    pub fn new() -> Self {
        Self {
            affine: Affine::IDENTITY,
        }
    }

    /// Reset to the identity transform.
    pub fn identity(&mut self) {
        self.affine = Affine::IDENTITY;
    }

    pub fn scale(&mut self, s: Vec2) {
        self.affine = compose(self.affine, Affine::scale_non_uniform(s.x, s.y));
    }

    /// Rotate by `angle` radians (clockwise on screen, since y points down).
    pub fn rotate(&mut self, angle: f64) {
        self.affine = compose(self.affine, Affine::rotate(angle));
    }

    pub fn translate(&mut self, d: Vec2) {
        self.affine = compose(self.affine, Affine::translate(kurbo::Vec2::from(d)));
    }

    pub fn affine(&self) -> Affine {
        self.affine
    }

    /// Map a point in child space through the accumulated transform.
    pub fn apply(&self, p: Vec2) -> Vec2 {
        (self.affine * Point::from(p)).into()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
