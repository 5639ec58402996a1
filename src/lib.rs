//! devsprite - Procedural pixel-art generator
//!
//! Draws the desk-exercise developer character pixel by pixel, assembles
//! its 18 animations into a sprite sheet with previews and key-frame
//! crops, and renders the retro "class select" panel used in the README.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod panel;
pub mod pipeline;
pub mod render;
pub mod sprite;
pub mod types;

pub use error::{Result, SpriteError};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use panel::{render_panel, Typeface};
pub use pipeline::{write_character, write_panel, write_sheet, SheetOptions, SheetOutput, Written};
pub use render::{write_png, write_sheet_json, SheetMeta, SpriteSheet};
pub use sprite::{render_character, render_frame, Animation, FRAME_COUNT, FRAME_SIZE, KEYFRAMES};
pub use types::{Canvas, Colour, Palette};
