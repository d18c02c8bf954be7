pub mod dataset;
pub mod sample;

pub use dataset::*;
pub use sample::*;
