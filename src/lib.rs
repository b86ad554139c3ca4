//! `svgknob` renders rotary controls by rotating a vector graphic according to a bounded value.
//!
//! # Pipeline overview
//!
//! 1. **Mutate**: the host assigns a value with [`SvgKnob::set_value`]; a change marks the knob
//!    dirty.
//! 2. **Map**: on the next [`SvgKnob::step`], the value is rescaled into the knob's angle range.
//! 3. **Transform**: the [`TransformAccumulator`] is rebuilt as
//!    `scale(box / natural) · translate(center) · rotate(angle) · translate(−center)`.
//! 4. **Cache**: the [`CachedNode`] renders the transformed graphic into an offscreen pixmap and
//!    reuses it on every later step until the next change.
//!
//! The scalar and geometry kernel ([`math`], [`Vec2`], [`Rect`], [`random`]) is usable on its
//! own.
//!
//! Everything is single-threaded and frame-driven: no call blocks, and nothing is shared
//! between nodes.
#![forbid(unsafe_code)]

mod foundation;
mod widget;

pub mod render;
pub mod transform;

pub use foundation::{math, random};

pub use foundation::error::{KnobError, KnobResult};
pub use foundation::geom::{Rect, Vec2};
pub use render::cache::{CacheState, CacheStats, CachedNode, StepOutcome};
pub use render::graphic::{Graphic, SvgGraphic};
pub use render::surface::{FrameRGBA, Pixmap, unpremultiply_rgba8_in_place};
pub use render::transform::TransformNode;
pub use transform::affine::TransformAccumulator;
pub use widget::config::{KnobConfig, OUT_OF_RANGE_ENV, OutOfRange};
pub use widget::knob::SvgKnob;
pub use widget::param::Param;

pub use kurbo::Affine;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
