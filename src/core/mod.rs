pub mod glow;

pub use glow::*;
