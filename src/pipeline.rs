//! Asset generation: the developer character, the exercise sheet with its
//! previews and crops, and the README panel.
//!
//! Each writer renders in memory, then saves; a failure part-way leaves
//! the files already written in place.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Result, SpriteError};
use crate::panel::{render_panel, Typeface};
use crate::render::{keyframe_file_name, write_png, write_png_rgb, write_sheet_json, SpriteSheet};
use crate::sprite::{render_character, Animation, FRAME_COUNT};
use crate::types::Palette;

pub const CHARACTER_FILE: &str = "dev_character.png";
pub const CHARACTER_PREVIEW_FILE: &str = "dev_character_preview.png";
pub const SHEET_FILE: &str = "exercise_spritesheet.png";
pub const SHEET_PREVIEW_FILE: &str = "exercise_spritesheet_preview.png";
pub const SHEET_JSON_FILE: &str = "exercise_spritesheet.json";
pub const PANEL_FILE: &str = "class_select.png";

/// A file produced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    /// Image size in pixels; `None` for non-image files.
    pub size: Option<(u32, u32)>,
}

impl Written {
    fn image(path: PathBuf, size: (u32, u32)) -> Self {
        Self { path, size: Some(size) }
    }
}

/// Write the 32×32 character and its enlarged preview into `dir`.
pub fn write_character(dir: &Path, palette: &Palette, preview_scale: u32) -> Result<Vec<Written>> {
    let canvas = render_character(palette);
    let (w, h) = canvas.size();

    let base = dir.join(CHARACTER_FILE);
    write_png(&canvas, &base, 1)?;

    let preview = dir.join(CHARACTER_PREVIEW_FILE);
    write_png(&canvas, &preview, preview_scale)?;

    Ok(vec![
        Written::image(base, (w, h)),
        Written::image(preview, (w * preview_scale, h * preview_scale)),
    ])
}

/// Settings for [`write_sheet`].
#[derive(Debug, Clone)]
pub struct SheetOptions {
    pub preview_scale: u32,
    pub keyframe_scale: u32,
    pub keyframes: Vec<usize>,
    pub metadata: bool,
}

/// Files produced by [`write_sheet`].
#[derive(Debug, Clone)]
pub struct SheetOutput {
    pub sheet: Written,
    pub preview: Written,
    pub metadata: Option<Written>,
    pub keyframes: Vec<Written>,
}

impl SheetOutput {
    pub fn files(&self) -> impl Iterator<Item = &Written> {
        [&self.sheet, &self.preview]
            .into_iter()
            .chain(self.metadata.as_ref())
            .chain(&self.keyframes)
    }
}

/// Assemble the exercise sheet and write it, its preview, the optional
/// JSON sidecar and every key-frame crop into `dir`.
pub fn write_sheet(dir: &Path, palette: &Palette, options: &SheetOptions) -> Result<SheetOutput> {
    if let Some(&frame) = options.keyframes.iter().find(|&&f| f >= FRAME_COUNT) {
        return Err(SpriteError::Build {
            message: format!("key frame {} is out of range", frame),
            help: Some(format!("Key frames must be between 0 and {}", FRAME_COUNT - 1)),
        });
    }

    let sheet = SpriteSheet::assemble(palette);
    let (w, h) = sheet.canvas().size();

    let sheet_path = dir.join(SHEET_FILE);
    write_png(sheet.canvas(), &sheet_path, 1)?;

    let preview_path = dir.join(SHEET_PREVIEW_FILE);
    write_png(sheet.canvas(), &preview_path, options.preview_scale)?;

    let metadata = if options.metadata {
        let path = dir.join(SHEET_JSON_FILE);
        write_sheet_json(&sheet.meta(SHEET_FILE), &path)?;
        Some(Written { path, size: None })
    } else {
        None
    };

    let jobs: Vec<(Animation, usize)> = Animation::ALL
        .iter()
        .flat_map(|&anim| options.keyframes.iter().map(move |&frame| (anim, frame)))
        .collect();
    let keyframes = jobs
        .par_iter()
        .map(|&(anim, frame)| {
            let cell = sheet.cell(anim, frame);
            let path = dir.join(keyframe_file_name(anim, frame));
            write_png(&cell, &path, options.keyframe_scale)?;
            let (cw, ch) = cell.size();
            Ok(Written::image(
                path,
                (cw * options.keyframe_scale, ch * options.keyframe_scale),
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SheetOutput {
        sheet: Written::image(sheet_path, (w, h)),
        preview: Written::image(
            preview_path,
            (w * options.preview_scale, h * options.preview_scale),
        ),
        metadata,
        keyframes,
    })
}

/// Render the README panel and save it as an RGB PNG at `scale`.
pub fn write_panel(path: &Path, face: &Typeface, scale: u32) -> Result<Written> {
    let canvas = render_panel(face);
    write_png_rgb(&canvas, path, scale)?;
    let (w, h) = canvas.size();
    Ok(Written::image(path.to_path_buf(), (w * scale, h * scale)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn options(keyframes: Vec<usize>) -> SheetOptions {
        SheetOptions {
            preview_scale: 4,
            keyframe_scale: 8,
            keyframes,
            metadata: true,
        }
    }

    #[test]
    fn test_write_character() {
        let dir = tempdir().unwrap();
        let written = write_character(dir.path(), &Palette::developer(), 8).unwrap();

        assert_eq!(written[0].size, Some((32, 32)));
        assert_eq!(written[1].size, Some((256, 256)));
        let preview = image::open(dir.path().join(CHARACTER_PREVIEW_FILE)).unwrap();
        assert_eq!((preview.width(), preview.height()), (256, 256));
    }

    #[test]
    fn test_write_sheet_lists_every_file() {
        let dir = tempdir().unwrap();
        let out = write_sheet(dir.path(), &Palette::developer(), &options(vec![0, 12])).unwrap();

        assert_eq!(out.keyframes.len(), 36);
        assert_eq!(out.files().count(), 39);
        assert_eq!(out.preview.size, Some((2048, 2304)));
        for file in out.files() {
            assert!(file.path.is_file(), "{} missing", file.path.display());
        }
        assert!(dir.path().join("wall_sit_f12_preview.png").is_file());
    }

    #[test]
    fn test_write_sheet_without_metadata() {
        let dir = tempdir().unwrap();
        let mut opts = options(vec![]);
        opts.metadata = false;

        let out = write_sheet(dir.path(), &Palette::developer(), &opts).unwrap();
        assert!(out.metadata.is_none());
        assert!(!dir.path().join(SHEET_JSON_FILE).exists());
    }

    #[test]
    fn test_write_sheet_rejects_bad_keyframe() {
        let dir = tempdir().unwrap();
        let err = write_sheet(dir.path(), &Palette::developer(), &options(vec![16])).unwrap_err();
        assert!(matches!(err, SpriteError::Build { .. }));
        assert!(!dir.path().join(SHEET_FILE).exists());
    }

    #[test]
    fn test_write_panel_with_bitmap_font() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PANEL_FILE);
        let written = write_panel(&path, &Typeface::Bitmap, 2).unwrap();

        assert_eq!(written.size, Some((920, 740)));
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (920, 740));
    }
}
