//! Render producers.
//!
//! A [`Graphic`] knows its natural (unscaled) size and can draw itself into a pixmap through a
//! caller-supplied transform. The rendering pipeline never looks inside a graphic beyond that.

use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    foundation::{error::KnobResult, geom::Vec2},
    render::surface::{Pixmap, to_skia},
};

pub trait Graphic {
    /// Intrinsic bounding size before any scaling.
    fn natural_size(&self) -> Vec2;

    /// Draw into `target`, mapping graphic coordinates through `transform`.
    fn render(&self, transform: kurbo::Affine, target: &mut Pixmap) -> KnobResult<()>;
}

impl<G: Graphic + ?Sized> Graphic for &G {
    fn natural_size(&self) -> Vec2 {
        (**self).natural_size()
    }

    fn render(&self, transform: kurbo::Affine, target: &mut Pixmap) -> KnobResult<()> {
        (**self).render(transform, target)
    }
}

impl<G: Graphic + ?Sized> Graphic for Box<G> {
    fn natural_size(&self) -> Vec2 {
        (**self).natural_size()
    }

    fn render(&self, transform: kurbo::Affine, target: &mut Pixmap) -> KnobResult<()> {
        (**self).render(transform, target)
    }
}

impl<G: Graphic + ?Sized> Graphic for Arc<G> {
    fn natural_size(&self) -> Vec2 {
        (**self).natural_size()
    }

    fn render(&self, transform: kurbo::Affine, target: &mut Pixmap) -> KnobResult<()> {
        (**self).render(transform, target)
    }
}

/// A parsed SVG document drawn with `resvg`.
///
/// Cloning is cheap; the tree is shared, so many knobs can use one face graphic.
#[derive(Clone)]
pub struct SvgGraphic {
    tree: Arc<usvg::Tree>,
}

impl std::fmt::Debug for SvgGraphic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgGraphic")
            .field("natural_size", &self.natural_size())
            .finish()
    }
}

impl SvgGraphic {
    /// Parse SVG bytes into a prepared `usvg` tree.
    pub fn from_bytes(bytes: &[u8]) -> KnobResult<Self> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
        Ok(Self {
            tree: Arc::new(tree),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> KnobResult<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read svg '{}'", path.display()))?;
        Self::from_bytes(&bytes)
    }

    pub fn tree(&self) -> &usvg::Tree {
        &self.tree
    }
}

impl Graphic for SvgGraphic {
    fn natural_size(&self) -> Vec2 {
        let size = self.tree.size();
        Vec2::new(f64::from(size.width()), f64::from(size.height()))
    }

    fn render(&self, transform: kurbo::Affine, target: &mut Pixmap) -> KnobResult<()> {
        resvg::render(&self.tree, to_skia(transform), &mut target.as_mut());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/graphic.rs"]
mod tests;
