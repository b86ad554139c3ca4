//! Rotary knob: a graphic rotated about its own center according to a bounded value.

use crate::{
    foundation::{
        error::{KnobError, KnobResult},
        geom::{Rect, Vec2},
        math::rescale,
    },
    render::{
        cache::{CacheStats, CachedNode, StepOutcome},
        graphic::Graphic,
        surface::{FrameRGBA, Pixmap},
        transform::TransformNode,
    },
    widget::{config::KnobConfig, param::Param},
};

/// A knob drawn by rotating a graphic, cached offscreen between value changes.
///
/// Ownership runs strictly downwards: the knob owns the cache node, which owns the transform
/// node, which owns the graphic.
///
/// The host calls [`SvgKnob::step`] once per frame. Value changes made through
/// [`SvgKnob::set_value`] before a step are picked up by that step, which rebuilds the
/// transform and re-renders exactly once; later steps reuse the cache until the next change.
#[derive(Debug)]
pub struct SvgKnob<G> {
    framebuffer: CachedNode<TransformNode<G>>,
    param: Param,
    min_angle: f64,
    max_angle: f64,
    angle: f64,
}

fn check_natural_size(size: Vec2) -> KnobResult<()> {
    if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
        return Err(KnobError::validation(format!(
            "graphic natural size must be positive, got {}x{}",
            size.x, size.y
        )));
    }
    Ok(())
}

impl<G: Graphic> SvgKnob<G> {
    pub fn new(config: KnobConfig, graphic: G) -> KnobResult<Self> {
        check_natural_size(graphic.natural_size())?;
        let param = Param::new(&config)?;
        Ok(Self {
            framebuffer: CachedNode::new(TransformNode::new(graphic)),
            param,
            min_angle: config.min_angle,
            max_angle: config.max_angle,
            angle: config.min_angle,
        })
    }

    /// Swap in a new graphic and return the old one.
    ///
    /// Both the transform node's box and the knob's box become the new graphic's natural size,
    /// so layout sees a meaningful size before any resize.
    pub fn set_graphic(&mut self, graphic: G) -> KnobResult<G> {
        check_natural_size(graphic.natural_size())?;
        let old = self.framebuffer.child_mut().replace_child(graphic);
        self.framebuffer.mark_dirty();
        Ok(old)
    }

    pub fn graphic(&self) -> &G {
        self.framebuffer.child().child()
    }

    pub fn value(&self) -> f64 {
        self.param.value()
    }

    pub fn param(&self) -> &Param {
        &self.param
    }

    /// Assign a new value; a change schedules one transform rebuild and redraw.
    pub fn set_value(&mut self, v: f64) -> KnobResult<()> {
        if self.param.set_value(v)? {
            self.framebuffer.mark_dirty();
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        if self.param.reset() {
            self.framebuffer.mark_dirty();
        }
    }

    /// Display box size. Equals the graphic's natural size until [`SvgKnob::set_box_size`].
    pub fn box_size(&self) -> Vec2 {
        self.framebuffer.box_size()
    }

    /// Resize the display box. The graphic is scaled to fit through the transform.
    pub fn set_box_size(&mut self, size: Vec2) {
        if size != self.box_size() {
            self.framebuffer.child_mut().set_box_size(size);
            self.framebuffer.mark_dirty();
        }
    }

    pub fn angle_range(&self) -> (f64, f64) {
        (self.min_angle, self.max_angle)
    }

    /// Angle used by the most recent transform rebuild.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn transform(&self) -> kurbo::Affine {
        self.framebuffer.child().transform().affine()
    }

    pub fn is_dirty(&self) -> bool {
        self.framebuffer.is_dirty()
    }

    pub fn cached(&self) -> Option<&Pixmap> {
        self.framebuffer.cached()
    }

    pub fn snapshot(&self) -> Option<FrameRGBA> {
        self.framebuffer.snapshot()
    }

    pub fn stats(&self) -> CacheStats {
        self.framebuffer.stats()
    }

    #[tracing::instrument(level = "trace", skip(self), fields(value = self.param.value()))]
    pub fn step(&mut self) -> KnobResult<StepOutcome> {
        if self.framebuffer.is_dirty() {
            self.angle = rescale(
                self.param.value(),
                self.param.min_value(),
                self.param.max_value(),
                self.min_angle,
                self.max_angle,
            );

            let natural = self.graphic().natural_size();
            let scale = self.box_size().div_elem(natural);
            let center = Rect::from_size(natural).center();

            let t = self.framebuffer.child_mut().transform_mut();
            t.identity();
            t.scale(scale);
            t.translate(center);
            t.rotate(self.angle);
            t.translate(-center);

            self.framebuffer.mark_dirty();
            tracing::debug!(angle = self.angle, "rebuilt knob transform");
        }
        self.framebuffer.step()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/knob.rs"]
mod tests;
