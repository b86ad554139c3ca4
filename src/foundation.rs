pub mod error;
pub mod geom;
pub mod math;
pub mod random;
