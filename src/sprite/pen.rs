//! Drawing primitives for the sprite renderer.
//!
//! A [`Pen`] pairs a canvas with the palette it draws from. Every write goes
//! through the canvas' clipped `put`, so limbs swung past the edge of a
//! frame simply disappear instead of failing.

use crate::types::{Canvas, Colour, Palette};

/// Where a body part or prop is anchored, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}

impl Origin {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The same origin moved by `(dx, dy)`.
    pub const fn shifted(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Round to the nearest pixel, ties to even.
///
/// All tuned pose tables were authored against banker's rounding, so
/// `f64::round` (ties away from zero) would move limbs by a pixel.
pub fn round_px(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// Integer points along a straight line, endpoints included.
///
/// Steps = max(|dx|, |dy|, 1); each step interpolates linearly and rounds.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> impl Iterator<Item = (i32, i32)> {
    let steps = (x2 - x1).abs().max((y2 - y1).abs()).max(1);
    (0..=steps).map(move |i| {
        let t = i as f64 / steps as f64;
        (
            round_px(x1 as f64 + (x2 - x1) as f64 * t),
            round_px(y1 as f64 + (y2 - y1) as f64 * t),
        )
    })
}

/// A canvas and palette bundled for drawing.
pub struct Pen<'a> {
    canvas: &'a mut Canvas,
    palette: &'a Palette,
}

impl<'a> Pen<'a> {
    pub fn new(canvas: &'a mut Canvas, palette: &'a Palette) -> Self {
        Self { canvas, palette }
    }

    /// The palette this pen draws with.
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    pub fn canvas(&self) -> &Canvas {
        self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        self.canvas
    }

    /// Bounded single-pixel write.
    pub fn dot(&mut self, x: i32, y: i32, colour: Colour) {
        self.canvas.put(x, y, colour);
    }

    /// A 2px limb stroke from `(x1, y1)` to `(x2, y2)`, relative to `at`.
    ///
    /// The main pixel gets `main`; the second pixel sits below it when the
    /// stroke is mostly horizontal and to its right when mostly vertical.
    pub fn thick_line(
        &mut self,
        at: Origin,
        (x1, y1): (i32, i32),
        (x2, y2): (i32, i32),
        main: Colour,
        edge: Colour,
    ) {
        let horizontal = (x2 - x1).abs() >= (y2 - y1).abs();
        for (x, y) in line_points(x1, y1, x2, y2) {
            self.dot(at.x + x, at.y + y, main);
            if horizontal {
                self.dot(at.x + x, at.y + y + 1, edge);
            } else {
                self.dot(at.x + x + 1, at.y + y, edge);
            }
        }
    }

    /// Fill a rotated rectangle around the segment `from -> to`.
    ///
    /// A pixel is inside when its projection on the segment lies in
    /// `[-0.7, len + 0.7]` and its perpendicular distance is at most
    /// `half_w + 0.3`. Pixels within 1.2 of the edge on the negative
    /// perpendicular side take `highlight`, on the positive side `shade`.
    /// Segments shorter than 0.1 draw nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_segment(
        &mut self,
        at: Origin,
        (x1, y1): (f64, f64),
        (x2, y2): (f64, f64),
        half_w: f64,
        fill: Colour,
        shade: Colour,
        highlight: Colour,
    ) {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let len = (dx * dx + dy * dy).sqrt();
        if len < 0.1 {
            return;
        }

        let (ux, uy) = (dx / len, dy / len);
        // 90 degrees counter-clockwise from the segment direction.
        let (px, py) = (-uy, ux);

        let corners = [
            (x1 - half_w * px, y1 - half_w * py),
            (x1 + half_w * px, y1 + half_w * py),
            (x2 + half_w * px, y2 + half_w * py),
            (x2 - half_w * px, y2 - half_w * py),
        ];
        let min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
        let max_y = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

        let x_range = (min_x.floor() as i32 - 1)..=(max_x.ceil() as i32 + 1);
        let y_range = (min_y.floor() as i32 - 1)..=(max_y.ceil() as i32 + 1);

        for scan_y in y_range {
            for scan_x in x_range.clone() {
                let vx = scan_x as f64 - x1;
                let vy = scan_y as f64 - y1;
                let along = vx * ux + vy * uy;
                let perp = vx * px + vy * py;

                if !(-0.7..=len + 0.7).contains(&along) || perp.abs() > half_w + 0.3 {
                    continue;
                }

                let colour = if perp < -(half_w - 1.2) {
                    highlight
                } else if perp > half_w - 1.2 {
                    shade
                } else {
                    fill
                };
                self.dot(at.x + scan_x, at.y + scan_y, colour);
            }
        }
    }
}
