//! The developer sprite: pixel primitives, body parts, props, expression
//! overlays and the animation composers built from them.
//!
//! Everything here draws into a caller-owned [`Canvas`] through a [`Pen`];
//! nothing touches the filesystem.

pub mod anim;
pub mod body;
mod character;
pub mod face;
pub mod pen;
pub mod props;

pub use anim::{Animation, FRAME_COUNT, KEYFRAMES};
pub use character::render_character;
pub use pen::{Origin, Pen};

use crate::error::{Result, SpriteError};
use crate::types::{Canvas, Palette};

/// Edge length of one sprite cell in pixels.
pub const FRAME_SIZE: u32 = 32;

/// Render a single animation frame onto its own transparent cell.
pub fn render_frame(anim: Animation, frame: usize, palette: &Palette) -> Result<Canvas> {
    if frame >= FRAME_COUNT {
        return Err(SpriteError::Build {
            message: format!(
                "frame {} is out of range for '{}' (frames 0-{})",
                frame,
                anim,
                FRAME_COUNT - 1
            ),
            help: None,
        });
    }
    Ok(render_cell(anim, frame, palette))
}

/// Render one cell without validating `frame`; the index wraps.
pub(crate) fn render_cell(anim: Animation, frame: usize, palette: &Palette) -> Canvas {
    let mut canvas = Canvas::new(FRAME_SIZE, FRAME_SIZE);
    let mut pen = Pen::new(&mut canvas, palette);
    anim.compose(&mut pen, Origin::ZERO, frame);
    canvas
}
