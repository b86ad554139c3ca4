//! Affine transform accumulation.

pub mod affine;
