//! Exercise sprite sheet assembly.
//!
//! Lays every animation out as one row of 16 cells, renders the rows in
//! parallel and writes a TexturePacker-compatible JSON Hash next to the
//! image for game engine interop.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Result, SpriteError};
use crate::sprite::{render_cell, Animation, FRAME_COUNT, FRAME_SIZE};
use crate::types::{Canvas, Palette};

/// Milliseconds each frame is shown; the game plays sheets at ~12 FPS.
pub const FRAME_DURATION_MS: u32 = 84;

/// A frame in the sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub duration: u32,
}

/// Sprite sheet metadata.
#[derive(Debug, Clone)]
pub struct SheetMeta {
    pub frames: Vec<Frame>,
    pub animations: Vec<Animation>,
    pub image: String,
    pub size: (u32, u32),
    pub scale: u32,
}

/// The full 16 × 18 grid of exercise frames.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    canvas: Canvas,
}

impl SpriteSheet {
    /// Sheet width in pixels.
    pub const WIDTH: u32 = FRAME_SIZE * FRAME_COUNT as u32;
    /// Sheet height in pixels.
    pub const HEIGHT: u32 = FRAME_SIZE * Animation::ALL.len() as u32;

    /// Render every row on the rayon pool and stack them top to bottom.
    pub fn assemble(palette: &Palette) -> Self {
        let rows: Vec<(Animation, Canvas)> = Animation::ALL
            .par_iter()
            .map(|&anim| (anim, render_row(anim, palette)))
            .collect();
        Self::stack(rows)
    }

    /// Same output as [`assemble`](Self::assemble), on the calling thread.
    pub fn assemble_sequential(palette: &Palette) -> Self {
        let rows = Animation::ALL
            .iter()
            .map(|&anim| (anim, render_row(anim, palette)))
            .collect();
        Self::stack(rows)
    }

    fn stack(rows: Vec<(Animation, Canvas)>) -> Self {
        let mut canvas = Canvas::new(Self::WIDTH, Self::HEIGHT);
        for (anim, row) in rows {
            canvas.blit(&row, 0, cell_y(anim) as i32);
        }
        Self { canvas }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Copy one cell out of the sheet.
    pub fn cell(&self, anim: Animation, frame: usize) -> Canvas {
        self.canvas.crop(
            cell_x(frame % FRAME_COUNT) as i32,
            cell_y(anim) as i32,
            FRAME_SIZE,
            FRAME_SIZE,
        )
    }

    /// Frame table for the JSON sidecar, in sheet order.
    pub fn meta(&self, image: &str) -> SheetMeta {
        let frames = Animation::ALL
            .iter()
            .flat_map(|&anim| {
                (0..FRAME_COUNT).map(move |frame| Frame {
                    name: frame_key(anim, frame),
                    x: cell_x(frame),
                    y: cell_y(anim),
                    w: FRAME_SIZE,
                    h: FRAME_SIZE,
                    duration: FRAME_DURATION_MS,
                })
            })
            .collect();

        SheetMeta {
            frames,
            animations: Animation::ALL.to_vec(),
            image: image.to_string(),
            size: self.canvas.size(),
            scale: 1,
        }
    }
}

fn render_row(anim: Animation, palette: &Palette) -> Canvas {
    let mut row = Canvas::new(SpriteSheet::WIDTH, FRAME_SIZE);
    for frame in 0..FRAME_COUNT {
        row.blit(&render_cell(anim, frame, palette), cell_x(frame) as i32, 0);
    }
    row
}

fn cell_x(frame: usize) -> u32 {
    frame as u32 * FRAME_SIZE
}

fn cell_y(anim: Animation) -> u32 {
    anim.row() as u32 * FRAME_SIZE
}

/// JSON key for one frame, e.g. `squats_f03`.
pub fn frame_key(anim: Animation, frame: usize) -> String {
    format!("{}_f{:02}", anim.name(), frame)
}

/// File name of an enlarged key-frame crop, e.g. `squats_f04_preview.png`.
pub fn keyframe_file_name(anim: Animation, frame: usize) -> String {
    format!("{}_preview.png", frame_key(anim, frame))
}

/// Write sheet metadata as TexturePacker-compatible JSON Hash format.
pub fn write_sheet_json(meta: &SheetMeta, path: &Path) -> Result<()> {
    let output = TexturePackerJson::from_meta(meta);
    let json = serde_json::to_string_pretty(&output).map_err(|e| SpriteError::Build {
        message: format!("Failed to serialize sheet metadata: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| SpriteError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write sheet metadata: {}", e),
    })?;
    Ok(())
}

// --- TexturePacker JSON serialization types ---

#[derive(Serialize)]
struct TexturePackerJson {
    frames: BTreeMap<String, TPFrame>,
    meta: TPMeta,
}

#[derive(Serialize)]
struct TPFrame {
    frame: TPRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: TPRect,
    #[serde(rename = "sourceSize")]
    source_size: TPSize,
    duration: u32,
}

#[derive(Serialize)]
struct TPRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPAnimation {
    name: String,
    #[serde(rename = "displayName")]
    display_name: String,
    row: usize,
    frames: usize,
}

#[derive(Serialize)]
struct TPMeta {
    app: String,
    version: String,
    image: String,
    size: TPSize,
    scale: String,
    animations: Vec<TPAnimation>,
}

impl TexturePackerJson {
    fn from_meta(meta: &SheetMeta) -> Self {
        let s = meta.scale;
        let frames = meta
            .frames
            .iter()
            .map(|f| {
                let frame = TPFrame {
                    frame: TPRect {
                        x: f.x * s,
                        y: f.y * s,
                        w: f.w * s,
                        h: f.h * s,
                    },
                    rotated: false,
                    trimmed: false,
                    sprite_source_size: TPRect {
                        x: 0,
                        y: 0,
                        w: f.w * s,
                        h: f.h * s,
                    },
                    source_size: TPSize { w: f.w * s, h: f.h * s },
                    duration: f.duration,
                };
                (f.name.clone(), frame)
            })
            .collect();

        let animations = meta
            .animations
            .iter()
            .map(|anim| TPAnimation {
                name: anim.name().to_string(),
                display_name: anim.display_name().to_string(),
                row: anim.row(),
                frames: FRAME_COUNT,
            })
            .collect();

        TexturePackerJson {
            frames,
            meta: TPMeta {
                app: "devsprite".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                image: meta.image.clone(),
                size: TPSize {
                    w: meta.size.0 * s,
                    h: meta.size.1 * s,
                },
                scale: meta.scale.to_string(),
                animations,
            },
        }
    }
}
