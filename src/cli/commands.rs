pub mod render;
pub mod sample;

pub use render::{RenderRequest, render};
pub use sample::sample;
