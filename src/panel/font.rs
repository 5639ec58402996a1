//! Text rendering for the panel.
//!
//! A system monospace face is rasterized with `fontdue` when one can be
//! found; otherwise a built-in 5x7 bitmap font draws every size.

use std::fs;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};

use crate::error::{Result, SpriteError};
use crate::types::{Canvas, Colour};

use super::draw::blend;

/// Monospace faces tried, in order, after any configured fonts.
pub const SYSTEM_FONTS: [&str; 3] = [
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.dfont",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
];

/// The four text sizes the panel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Tag,
    Title,
}

impl TextSize {
    /// Pixel size for vector faces.
    pub fn px(self) -> f32 {
        match self {
            TextSize::Small => 11.0,
            TextSize::Medium => 13.0,
            TextSize::Tag => 10.0,
            TextSize::Title => 16.0,
        }
    }
}

/// Where the panel's glyphs come from.
pub enum Typeface {
    Vector { font: Box<Font>, path: PathBuf },
    Bitmap,
}

impl Typeface {
    /// Load a font from `extra`, then from [`SYSTEM_FONTS`].
    ///
    /// The first configured font that exists must parse. System fonts that
    /// fail to parse are skipped. Falls back to the bitmap font when no
    /// candidate loads.
    pub fn discover(extra: &[PathBuf]) -> Result<Self> {
        let system: Vec<PathBuf> = SYSTEM_FONTS.iter().map(PathBuf::from).collect();
        Self::discover_in(extra, &system)
    }

    fn discover_in(extra: &[PathBuf], system: &[PathBuf]) -> Result<Self> {
        if let Some(path) = first_existing(extra.iter().cloned()) {
            return Self::from_file(&path);
        }
        Ok(system
            .iter()
            .filter(|p| p.is_file())
            .find_map(|p| Self::from_file(p).ok())
            .unwrap_or(Typeface::Bitmap))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| SpriteError::Font {
            path: path.to_path_buf(),
            message: format!("Failed to read font: {}", e),
        })?;
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|e| {
            SpriteError::Font {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        Ok(Typeface::Vector {
            font: Box::new(font),
            path: path.to_path_buf(),
        })
    }

    /// Short description for status output.
    pub fn describe(&self) -> String {
        match self {
            Typeface::Vector { path, .. } => path.display().to_string(),
            Typeface::Bitmap => "built-in 5x7 bitmap".to_string(),
        }
    }

    /// Horizontal advance of `text` in pixels.
    pub fn text_width(&self, text: &str, size: TextSize) -> f32 {
        match self {
            Typeface::Vector { font, .. } => text
                .chars()
                .map(|ch| font.metrics(ch, size.px()).advance_width)
                .sum(),
            Typeface::Bitmap => (text.chars().count() as u32 * BITMAP_ADVANCE) as f32,
        }
    }

    /// Draw `text` with its ascender line at `y`.
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, size: TextSize, colour: Colour) {
        match self {
            Typeface::Vector { font, .. } => draw_vector(canvas, font, x, y, text, size.px(), colour),
            Typeface::Bitmap => draw_bitmap(canvas, x, y, text, colour),
        }
    }
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|p| p.is_file())
}

fn draw_vector(canvas: &mut Canvas, font: &Font, x: i32, y: i32, text: &str, px: f32, colour: Colour) {
    let ascent = font
        .horizontal_line_metrics(px)
        .map_or(px, |m| m.ascent);
    let baseline = y + ascent.round() as i32;

    let mut pen_x = x as f32;
    for ch in text.chars() {
        let (metrics, coverage) = font.rasterize(ch, px);
        let gx = pen_x.round() as i32 + metrics.xmin;
        let gy = baseline - metrics.height as i32 - metrics.ymin;
        for (i, &alpha) in coverage.iter().enumerate() {
            if alpha == 0 {
                continue;
            }
            let cx = gx + (i % metrics.width) as i32;
            let cy = gy + (i / metrics.width) as i32;
            if let Some(under) = canvas.get(cx, cy) {
                canvas.put(cx, cy, blend(under, colour, alpha));
            }
        }
        pen_x += metrics.advance_width;
    }
}

const BITMAP_ADVANCE: u32 = 6;

fn draw_bitmap(canvas: &mut Canvas, x: i32, y: i32, text: &str, colour: Colour) {
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = bitmap_glyph(ch) else {
            continue;
        };
        let gx = x + (i as u32 * BITMAP_ADVANCE) as i32;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..5 {
                if bits & (0x10 >> col) != 0 {
                    canvas.put(gx + col, y + row as i32, colour);
                }
            }
        }
    }
}

fn bitmap_glyph(ch: char) -> Option<[u8; 7]> {
    match ch {
        ' '..='~' => Some(FONT_5X7[ch as usize - 32]),
        '└' => Some([0x04, 0x04, 0x04, 0x04, 0x07, 0x00, 0x00]),
        '►' => Some([0x00, 0x10, 0x1C, 0x1F, 0x1C, 0x10, 0x00]),
        '▲' => Some([0x00, 0x04, 0x0E, 0x1F, 0x1F, 0x00, 0x00]),
        '▼' => Some([0x00, 0x1F, 0x1F, 0x0E, 0x04, 0x00, 0x00]),
        _ => None,
    }
}

/// ASCII 32..=126. Each glyph is 7 rows; the low 5 bits of a row are its
/// pixels, MSB on the left.
#[rustfmt::skip]
const FONT_5X7: [[u8; 7]; 95] = [
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00], // ' '
    [0x04,0x04,0x04,0x04,0x04,0x00,0x04], // '!'
    [0x0A,0x0A,0x0A,0x00,0x00,0x00,0x00], // '"'
    [0x0A,0x0A,0x1F,0x0A,0x1F,0x0A,0x0A], // '#'
    [0x04,0x0F,0x14,0x0E,0x05,0x1E,0x04], // '$'
    [0x18,0x19,0x02,0x04,0x08,0x13,0x03], // '%'
    [0x0C,0x12,0x14,0x08,0x15,0x12,0x0D], // '&'
    [0x04,0x04,0x08,0x00,0x00,0x00,0x00], // '''
    [0x02,0x04,0x08,0x08,0x08,0x04,0x02], // '('
    [0x08,0x04,0x02,0x02,0x02,0x04,0x08], // ')'
    [0x00,0x04,0x15,0x0E,0x15,0x04,0x00], // '*'
    [0x00,0x04,0x04,0x1F,0x04,0x04,0x00], // '+'
    [0x00,0x00,0x00,0x00,0x00,0x04,0x08], // ','
    [0x00,0x00,0x00,0x1F,0x00,0x00,0x00], // '-'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x04], // '.'
    [0x00,0x01,0x02,0x04,0x08,0x10,0x00], // '/'
    [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E], // '0'
    [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E], // '1'
    [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F], // '2'
    [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E], // '3'
    [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02], // '4'
    [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E], // '5'
    [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E], // '6'
    [0x1F,0x01,0x02,0x04,0x08,0x08,0x08], // '7'
    [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E], // '8'
    [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C], // '9'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x00], // ':'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x08], // ';'
    [0x02,0x04,0x08,0x10,0x08,0x04,0x02], // '<'
    [0x00,0x00,0x1F,0x00,0x1F,0x00,0x00], // '='
    [0x08,0x04,0x02,0x01,0x02,0x04,0x08], // '>'
    [0x0E,0x11,0x01,0x02,0x04,0x00,0x04], // '?'
    [0x0E,0x11,0x17,0x15,0x17,0x10,0x0E], // '@'
    [0x0E,0x11,0x11,0x1F,0x11,0x11,0x11], // 'A'
    [0x1E,0x11,0x11,0x1E,0x11,0x11,0x1E], // 'B'
    [0x0E,0x11,0x10,0x10,0x10,0x11,0x0E], // 'C'
    [0x1C,0x12,0x11,0x11,0x11,0x12,0x1C], // 'D'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x1F], // 'E'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x10], // 'F'
    [0x0E,0x11,0x10,0x17,0x11,0x11,0x0F], // 'G'
    [0x11,0x11,0x11,0x1F,0x11,0x11,0x11], // 'H'
    [0x0E,0x04,0x04,0x04,0x04,0x04,0x0E], // 'I'
    [0x07,0x02,0x02,0x02,0x02,0x12,0x0C], // 'J'
    [0x11,0x12,0x14,0x18,0x14,0x12,0x11], // 'K'
    [0x10,0x10,0x10,0x10,0x10,0x10,0x1F], // 'L'
    [0x11,0x1B,0x15,0x15,0x11,0x11,0x11], // 'M'
    [0x11,0x11,0x19,0x15,0x13,0x11,0x11], // 'N'
    [0x0E,0x11,0x11,0x11,0x11,0x11,0x0E], // 'O'
    [0x1E,0x11,0x11,0x1E,0x10,0x10,0x10], // 'P'
    [0x0E,0x11,0x11,0x11,0x15,0x12,0x0D], // 'Q'
    [0x1E,0x11,0x11,0x1E,0x14,0x12,0x11], // 'R'
    [0x0F,0x10,0x10,0x0E,0x01,0x01,0x1E], // 'S'
    [0x1F,0x04,0x04,0x04,0x04,0x04,0x04], // 'T'
    [0x11,0x11,0x11,0x11,0x11,0x11,0x0E], // 'U'
    [0x11,0x11,0x11,0x11,0x11,0x0A,0x04], // 'V'
    [0x11,0x11,0x11,0x15,0x15,0x1B,0x11], // 'W'
    [0x11,0x11,0x0A,0x04,0x0A,0x11,0x11], // 'X'
    [0x11,0x11,0x0A,0x04,0x04,0x04,0x04], // 'Y'
    [0x1F,0x01,0x02,0x04,0x08,0x10,0x1F], // 'Z'
    [0x0E,0x08,0x08,0x08,0x08,0x08,0x0E], // '['
    [0x00,0x10,0x08,0x04,0x02,0x01,0x00], // '\'
    [0x0E,0x02,0x02,0x02,0x02,0x02,0x0E], // ']'
    [0x04,0x0A,0x11,0x00,0x00,0x00,0x00], // '^'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x1F], // '_'
    [0x08,0x04,0x02,0x00,0x00,0x00,0x00], // '`'
    [0x00,0x00,0x0E,0x01,0x0F,0x11,0x0F], // 'a'
    [0x10,0x10,0x16,0x19,0x11,0x11,0x1E], // 'b'
    [0x00,0x00,0x0E,0x10,0x10,0x11,0x0E], // 'c'
    [0x01,0x01,0x0D,0x13,0x11,0x11,0x0F], // 'd'
    [0x00,0x00,0x0E,0x11,0x1F,0x10,0x0E], // 'e'
    [0x06,0x09,0x08,0x1C,0x08,0x08,0x08], // 'f'
    [0x00,0x00,0x0F,0x11,0x0F,0x01,0x0E], // 'g'
    [0x10,0x10,0x16,0x19,0x11,0x11,0x11], // 'h'
    [0x04,0x00,0x0C,0x04,0x04,0x04,0x0E], // 'i'
    [0x02,0x00,0x06,0x02,0x02,0x12,0x0C], // 'j'
    [0x10,0x10,0x12,0x14,0x18,0x14,0x12], // 'k'
    [0x0C,0x04,0x04,0x04,0x04,0x04,0x0E], // 'l'
    [0x00,0x00,0x1A,0x15,0x15,0x11,0x11], // 'm'
    [0x00,0x00,0x16,0x19,0x11,0x11,0x11], // 'n'
    [0x00,0x00,0x0E,0x11,0x11,0x11,0x0E], // 'o'
    [0x00,0x00,0x1E,0x11,0x1E,0x10,0x10], // 'p'
    [0x00,0x00,0x0D,0x13,0x0F,0x01,0x01], // 'q'
    [0x00,0x00,0x16,0x19,0x10,0x10,0x10], // 'r'
    [0x00,0x00,0x0E,0x10,0x0E,0x01,0x1E], // 's'
    [0x08,0x08,0x1C,0x08,0x08,0x09,0x06], // 't'
    [0x00,0x00,0x11,0x11,0x11,0x13,0x0D], // 'u'
    [0x00,0x00,0x11,0x11,0x11,0x0A,0x04], // 'v'
    [0x00,0x00,0x11,0x11,0x15,0x15,0x0A], // 'w'
    [0x00,0x00,0x11,0x0A,0x04,0x0A,0x11], // 'x'
    [0x00,0x00,0x11,0x11,0x0F,0x01,0x0E], // 'y'
    [0x00,0x00,0x1F,0x02,0x04,0x08,0x1F], // 'z'
    [0x02,0x04,0x04,0x08,0x04,0x04,0x02], // '{'
    [0x04,0x04,0x04,0x04,0x04,0x04,0x04], // '|'
    [0x08,0x04,0x04,0x02,0x04,0x04,0x08], // '}'
    [0x00,0x00,0x08,0x15,0x02,0x00,0x00], // '~'
];
