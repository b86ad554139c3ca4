//! Offscreen caching of a child's render output.

use resvg::tiny_skia;

use crate::{
    foundation::{error::KnobResult, geom::Vec2},
    render::{
        graphic::Graphic,
        surface::{FrameRGBA, Pixmap, alloc_pixmap, pixel_size},
    },
};

/// Whether the cached raster reflects the child's current appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheState {
    Clean,
    Dirty,
}

/// What a [`CachedNode::step`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The child was rendered into a fresh cache.
    Rendered,
    /// The cache was clean and reused as is.
    Reused,
    /// The box has no positive area; nothing was rendered and the cache is empty.
    Skipped,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub renders: u64,
    pub reuses: u64,
    pub skips: u64,
    pub reallocations: u64,
}

/// Caches the raster output of a child graphic and re-renders only when dirty.
///
/// The cache is sized to the child's box (`natural_size`, rounded up to whole pixels). It
/// starts dirty and goes clean only after a successful render; a step over an empty box leaves
/// it dirty so the next resize renders.
#[derive(Debug)]
pub struct CachedNode<C> {
    child: C,
    cache: Option<Pixmap>,
    state: CacheState,
    stats: CacheStats,
    // Set while consecutive steps keep skipping, so the warning fires once per episode.
    skipping: bool,
}

impl<C: Graphic> CachedNode<C> {
    pub fn new(child: C) -> Self {
        Self {
            child,
            cache: None,
            state: CacheState::Dirty,
            stats: CacheStats::default(),
            skipping: false,
        }
    }

    pub fn child(&self) -> &C {
        &self.child
    }

    /// Mutable access to the child. Callers changing the child's appearance must also call
    /// [`CachedNode::mark_dirty`].
    pub fn child_mut(&mut self) -> &mut C {
        &mut self.child
    }

    pub fn mark_dirty(&mut self) {
        self.state = CacheState::Dirty;
    }

    pub fn state(&self) -> CacheState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == CacheState::Dirty
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn box_size(&self) -> Vec2 {
        self.child.natural_size()
    }

    /// The cached raster, if the last render produced one and nothing invalidated it since.
    pub fn cached(&self) -> Option<&Pixmap> {
        match self.state {
            CacheState::Clean => self.cache.as_ref(),
            CacheState::Dirty => None,
        }
    }

    /// Read the clean cache back as premultiplied RGBA8.
    pub fn snapshot(&self) -> Option<FrameRGBA> {
        self.cached().map(FrameRGBA::from_pixmap)
    }

    /// Bring the cache up to date for this frame.
    pub fn step(&mut self) -> KnobResult<StepOutcome> {
        if self.state == CacheState::Clean {
            self.stats.reuses += 1;
            tracing::trace!("reusing cached raster");
            return Ok(StepOutcome::Reused);
        }

        let size = self.child.natural_size();
        let Some((w, h)) = pixel_size(size)? else {
            if self.skipping {
                tracing::debug!(width = size.x, height = size.y, "box still empty");
            } else {
                tracing::warn!(width = size.x, height = size.y, "skipping render of empty box");
                self.skipping = true;
            }
            self.cache = None;
            self.stats.skips += 1;
            return Ok(StepOutcome::Skipped);
        };

        let mut pixmap = match self.cache.take() {
            Some(mut p) if p.width() == w && p.height() == h => {
                p.fill(tiny_skia::Color::TRANSPARENT);
                p
            }
            _ => {
                tracing::debug!(width = w, height = h, "allocating cache pixmap");
                self.stats.reallocations += 1;
                alloc_pixmap(w, h)?
            }
        };

        self.child.render(kurbo::Affine::IDENTITY, &mut pixmap)?;

        self.cache = Some(pixmap);
        self.state = CacheState::Clean;
        self.skipping = false;
        self.stats.renders += 1;
        tracing::debug!(width = w, height = h, "refreshed cached raster");
        Ok(StepOutcome::Rendered)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cache.rs"]
mod tests;
