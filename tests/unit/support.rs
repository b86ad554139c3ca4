use std::{cell::Cell, rc::Rc};

use crate::{
    foundation::{error::KnobResult, geom::Vec2},
    render::{graphic::Graphic, surface::Pixmap},
};

/// Graphic that draws nothing and records how it was asked to render.
#[derive(Clone, Debug)]
pub(crate) struct CountingGraphic {
    size: Vec2,
    renders: Rc<Cell<usize>>,
    last_transform: Rc<Cell<Option<kurbo::Affine>>>,
    last_target: Rc<Cell<Option<(u32, u32)>>>,
}

impl CountingGraphic {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            size: Vec2::new(width, height),
            renders: Rc::new(Cell::new(0)),
            last_transform: Rc::new(Cell::new(None)),
            last_target: Rc::new(Cell::new(None)),
        }
    }

    pub(crate) fn renders(&self) -> usize {
        self.renders.get()
    }

    pub(crate) fn last_transform(&self) -> Option<kurbo::Affine> {
        self.last_transform.get()
    }

    pub(crate) fn last_target(&self) -> Option<(u32, u32)> {
        self.last_target.get()
    }
}

impl Graphic for CountingGraphic {
    fn natural_size(&self) -> Vec2 {
        self.size
    }

    fn render(&self, transform: kurbo::Affine, target: &mut Pixmap) -> KnobResult<()> {
        self.renders.set(self.renders.get() + 1);
        self.last_transform.set(Some(transform));
        self.last_target.set(Some((target.width(), target.height())));
        Ok(())
    }
}

pub(crate) fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).norm() < 1e-9
}
