//! Render producers, transform application and offscreen caching.

pub mod cache;
pub mod graphic;
pub mod surface;
pub mod transform;
