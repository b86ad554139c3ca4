use crate::{
    foundation::{error::KnobResult, geom::Vec2},
    render::{graphic::Graphic, surface::Pixmap},
    transform::affine::{TransformAccumulator, compose},
};

/// Applies a [`TransformAccumulator`] to the output of one owned child.
///
/// The node reports its own box size, which starts at the child's natural size and is only
/// changed explicitly. Scaling the child into that box is the job of whoever drives the
/// accumulator.
#[derive(Debug)]
pub struct TransformNode<G> {
    child: G,
    transform: TransformAccumulator,
    box_size: Vec2,
}

impl<G: Graphic> TransformNode<G> {
    pub fn new(child: G) -> Self {
        let box_size = child.natural_size();
        Self {
            child,
            transform: TransformAccumulator::new(),
            box_size,
        }
    }

    /// Replace the child and return the previous one. The box follows the new child's natural
    /// size; the transform is left as is.
    pub fn replace_child(&mut self, child: G) -> G {
        self.box_size = child.natural_size();
        std::mem::replace(&mut self.child, child)
    }

    pub fn child(&self) -> &G {
        &self.child
    }

    pub fn transform(&self) -> &TransformAccumulator {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut TransformAccumulator {
        &mut self.transform
    }

    pub fn box_size(&self) -> Vec2 {
        self.box_size
    }

    pub fn set_box_size(&mut self, size: Vec2) {
        self.box_size = size;
    }
}

impl<G: Graphic> Graphic for TransformNode<G> {
    fn natural_size(&self) -> Vec2 {
        self.box_size
    }

    fn render(&self, transform: kurbo::Affine, target: &mut Pixmap) -> KnobResult<()> {
        self.child
            .render(compose(transform, self.transform.affine()), target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/transform.rs"]
mod tests;
