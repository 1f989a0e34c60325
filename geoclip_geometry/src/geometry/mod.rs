mod kind;
mod sample;

pub use kind::*;
pub use sample::*;
