//! Owned RGBA pixel buffer that every drawing routine writes into.

use image::{ImageBuffer, RgbaImage};

use super::Colour;

/// A rectangular grid of RGBA pixels, transparent when created.
///
/// Coordinates are signed: drawing code computes positions from pose
/// offsets and rotations that routinely land outside the buffer, and
/// [`Canvas::put`] clips those writes silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Row-major pixels: `pixels[y * width + x]`.
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Colour::TRANSPARENT)
    }

    /// Create a canvas with every pixel set to `colour`.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![colour; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Write a pixel if `(x, y)` lies inside the canvas; otherwise do nothing.
    pub fn put(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour;
        }
    }

    /// Read a pixel, or `None` outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Fill the inclusive rectangle `(x1, y1)..=(x2, y2)`, clipped.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, colour: Colour) {
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.put(x, y, colour);
            }
        }
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Check whether every pixel is transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|c| c.is_transparent())
    }

    /// Mirror left-to-right into a new canvas.
    pub fn flip_horizontal(&self) -> Canvas {
        let mut flipped = Canvas::new(self.width, self.height);
        let w = self.width as usize;
        for (row_in, row_out) in self
            .pixels
            .chunks_exact(w.max(1))
            .zip(flipped.pixels.chunks_exact_mut(w.max(1)))
        {
            for (x, colour) in row_in.iter().enumerate() {
                row_out[w - 1 - x] = *colour;
            }
        }
        flipped
    }

    /// Draw `source` at `(dx, dy)`, skipping transparent source pixels.
    pub fn composite(&mut self, source: &Canvas, dx: i32, dy: i32) {
        for y in 0..source.height as i32 {
            for x in 0..source.width as i32 {
                if let Some(c) = source.get(x, y) {
                    if c.a > 0 {
                        self.put(dx + x, dy + y, c);
                    }
                }
            }
        }
    }

    /// Copy `source` verbatim (transparent pixels included) at `(dx, dy)`.
    pub fn blit(&mut self, source: &Canvas, dx: i32, dy: i32) {
        for y in 0..source.height as i32 {
            for x in 0..source.width as i32 {
                if let Some(c) = source.get(x, y) {
                    self.put(dx + x, dy + y, c);
                }
            }
        }
    }

    /// Copy out a region. Parts outside the canvas come back transparent.
    pub fn crop(&self, x: i32, y: i32, width: u32, height: u32) -> Canvas {
        let mut region = Canvas::new(width, height);
        for ry in 0..height as i32 {
            for rx in 0..width as i32 {
                if let Some(c) = self.get(x + rx, y + ry) {
                    region.put(rx, ry, c);
                }
            }
        }
        region
    }

    /// Nearest-neighbour upscale by an integer factor (0 is treated as 1).
    pub fn scaled(&self, factor: u32) -> Canvas {
        let factor = factor.max(1);
        if factor == 1 {
            return self.clone();
        }

        let mut scaled = Canvas::new(self.width * factor, self.height * factor);
        let out_w = scaled.width as usize;
        let f = factor as usize;
        for (i, colour) in self.pixels.iter().enumerate() {
            let x = i % self.width as usize;
            let y = i / self.width as usize;
            for sy in 0..f {
                let row = (y * f + sy) * out_w;
                scaled.pixels[row + x * f..row + x * f + f].fill(*colour);
            }
        }
        scaled
    }

    /// Convert to an `image` buffer for encoding.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            self.pixels[y as usize * self.width as usize + x as usize].into()
        })
    }

    /// Build a canvas from an `image` buffer.
    pub fn from_image(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().map(|p| Colour::from(*p)).collect(),
        }
    }
}
