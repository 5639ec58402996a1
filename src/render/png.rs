//! PNG output for canvases.
//!
//! Writes a canvas to disk with optional integer scaling, creating the
//! parent directory first.

use std::fs;
use std::path::Path;

use image::DynamicImage;

use crate::error::{Result, SpriteError};
use crate::types::Canvas;

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The pixels to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    ensure_parent(path)?;
    let img = canvas.scaled(scale).to_image();

    img.save(path).map_err(|e| SpriteError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Write a canvas as an opaque RGB PNG, dropping the alpha channel.
pub fn write_png_rgb(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    ensure_parent(path)?;
    let img = DynamicImage::ImageRgba8(canvas.scaled(scale).to_image()).to_rgb8();

    img.save(path).map_err(|e| SpriteError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| SpriteError::Io {
                path: dir.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let mut canvas = Canvas::filled(2, 2, Colour::WHITE);
        canvas.put(0, 0, Colour::BLACK);
        canvas.put(1, 1, Colour::BLACK);

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&canvas, &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_write_png_scaled() {
        let mut canvas = Canvas::new(2, 1);
        canvas.put(0, 0, Colour::rgb(255, 0, 0));
        canvas.put(1, 0, Colour::rgb(0, 255, 0));

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&canvas, &path, 2).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (4, 2));
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(3, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_write_png_keeps_partial_alpha() {
        let mut canvas = Canvas::new(2, 1);
        canvas.put(1, 0, Colour::new(255, 0, 0, 128));

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        write_png(&canvas, &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_write_png_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assets").join("developer").join("x.png");

        write_png(&Canvas::new(1, 1), &path, 0).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (1, 1));
    }

    #[test]
    fn test_write_png_rgb_has_no_alpha() {
        let canvas = Canvas::filled(3, 2, Colour::rgb(18, 14, 28));
        let dir = tempdir().unwrap();
        let path = dir.path().join("panel.png");

        write_png_rgb(&canvas, &path, 2).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
        assert_eq!((img.width(), img.height()), (6, 4));
        assert_eq!(img.to_rgb8().get_pixel(5, 3).0, [18, 14, 28]);
    }

    #[test]
    fn test_write_png_reports_unwritable_path() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        let err = write_png(&Canvas::new(1, 1), &blocker.join("out.png"), 1).unwrap_err();
        assert!(matches!(err, SpriteError::Io { .. }));
    }
}
