//! Controls built on the render nodes.

pub mod config;
pub mod knob;
pub mod param;
