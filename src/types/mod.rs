//! Core value types shared by both renderers:
//! - `Colour` - RGBA colour values
//! - `Canvas` - owned pixel buffer with clipped writes
//! - `Palette` - the sprite renderer's named colours

mod canvas;
mod colour;
mod palette;

pub use canvas::Canvas;
pub use colour::Colour;
pub use palette::Palette;
