use resvg::tiny_skia;

use crate::foundation::{
    error::{KnobError, KnobResult},
    geom::Vec2,
};

pub use resvg::tiny_skia::Pixmap;

/// Avoid pathological allocations from a runaway box size.
pub(crate) const MAX_DIM: u32 = 16_384;

/// A rendered buffer as RGBA8 pixels, read back from a cache.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn from_pixmap(pixmap: &Pixmap) -> Self {
        Self {
            width: pixmap.width(),
            height: pixmap.height(),
            data: pixmap.data().to_vec(),
            premultiplied: true,
        }
    }

    /// Convert to straight alpha in place (for PNG export).
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }

    /// Premultiplied RGBA at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

pub fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Integer pixel size covering a box, or `None` for a box without positive finite area.
pub(crate) fn pixel_size(size: Vec2) -> KnobResult<Option<(u32, u32)>> {
    if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
        return Ok(None);
    }
    let w = size.x.ceil();
    let h = size.y.ceil();
    if w > f64::from(MAX_DIM) || h > f64::from(MAX_DIM) {
        return Err(KnobError::render(format!(
            "cache size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok(Some((w as u32, h as u32)))
}

pub(crate) fn alloc_pixmap(width: u32, height: u32) -> KnobResult<Pixmap> {
    Pixmap::new(width, height)
        .ok_or_else(|| KnobError::render(format!("failed to allocate {width}x{height} pixmap")))
}

pub(crate) fn to_skia(affine: kurbo::Affine) -> tiny_skia::Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    tiny_skia::Transform::from_row(
        a as f32, b as f32, c as f32, d as f32, e as f32, f as f32,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
