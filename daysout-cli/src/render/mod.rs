mod renderer;
mod theme;
mod use_color;

pub use renderer::{RenderOptions, Renderer};
pub use use_color::use_color;
