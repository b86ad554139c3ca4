//! Scalar helpers shared by geometry and control mapping.
//!
//! Everything here is pure. Degenerate inputs (equal range bounds, short slices) are caller
//! contract violations and are not checked.

/// Limit `x` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: if `min > max`, `min` wins.
#[inline]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    let mut x = x;
    if x > max {
        x = max;
    }
    if x < min {
        x = min;
    }
    x
}

/// Return 0 when `|x| < eps`, otherwise `x`.
#[inline]
pub fn chop(x: f64, eps: f64) -> f64 {
    if x < eps && x > -eps { 0.0 } else { x }
}

/// Affinely remap `x` from `[x_min, x_max]` to `[y_min, y_max]`.
///
/// Does not clamp. `x_min == x_max` yields a non-finite result.
#[inline]
pub fn rescale(x: f64, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> f64 {
    y_min + (x - x_min) / (x_max - x_min) * (y_max - y_min)
}

/// Linear crossfade `(1 - frac) * a + frac * b`. Extrapolates outside `[0, 1]`.
#[inline]
pub fn cross(a: f64, b: f64, frac: f64) -> f64 {
    (1.0 - frac) * a + frac * b
}

/// Linearly interpolate `values` at fractional index `x`.
///
/// Negative `x` extrapolates from the first segment.
///
/// # Panics
///
/// Panics if `values` holds fewer than `floor(x) + 2` elements.
#[inline]
pub fn interp(values: &[f64], x: f64) -> f64 {
    let xi = x.trunc();
    let xf = x - xi;
    let i = xi as usize;
    cross(values[i], values[i + 1], xf)
}

/// Euclidean modulus: the result is in `[0, base)` for positive `base`.
#[inline]
pub fn euc_mod(a: i64, base: i64) -> i64 {
    let m = a % base;
    if m < 0 { m + base } else { m }
}

/// `x^2` carrying the sign of `x`.
#[inline]
pub fn quadratic_bipolar(x: f64) -> f64 {
    let x2 = x * x;
    if x >= 0.0 { x2 } else { -x2 }
}

#[inline]
pub fn cubic(x: f64) -> f64 {
    x * x * x
}

/// `x^4` carrying the sign of `x`.
#[inline]
pub fn quartic_bipolar(x: f64) -> f64 {
    let x2 = x * x;
    let x4 = x2 * x2;
    if x >= 0.0 { x4 } else { -x4 }
}

#[inline]
pub fn quintic(x: f64) -> f64 {
    x * x * x * x * x
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
