//! Rendering to disk: PNG encoding and the exercise sprite sheet.

mod png;
mod sheet;

pub use png::{write_png, write_png_rgb};
pub use sheet::{
    frame_key, keyframe_file_name, write_sheet_json, Frame, SheetMeta, SpriteSheet,
    FRAME_DURATION_MS,
};
