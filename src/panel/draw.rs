//! Drawing primitives for the panel: lines, boxes, stars and
//! coverage blending for anti-aliased text.

use crate::sprite::pen::line_points;
use crate::types::{Canvas, Colour};

/// One-pixel line between two points, both ends included.
pub fn line(canvas: &mut Canvas, (x1, y1): (i32, i32), (x2, y2): (i32, i32), colour: Colour) {
    for (x, y) in line_points(x1, y1, x2, y2) {
        canvas.put(x, y, colour);
    }
}

/// One-pixel rectangle outline with inclusive corners.
pub fn outline_rect(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, colour: Colour) {
    line(canvas, (x1, y1), (x2, y1), colour);
    line(canvas, (x1, y2), (x2, y2), colour);
    line(canvas, (x1, y1), (x1, y2), colour);
    line(canvas, (x2, y1), (x2, y2), colour);
}

/// Nine-pixel sparkle centred on `(cx, cy)`.
pub fn star(canvas: &mut Canvas, cx: i32, cy: i32, colour: Colour) {
    const POINTS: [(i32, i32); 9] = [
        (0, -2),
        (-1, -1),
        (1, -1),
        (-2, 0),
        (0, 0),
        (2, 0),
        (-1, 1),
        (1, 1),
        (0, 2),
    ];
    for (dx, dy) in POINTS {
        canvas.put(cx + dx, cy + dy, colour);
    }
}

/// Short dashes across a row, 4 pixels on and 2 off.
pub fn dashed_line(canvas: &mut Canvas, x_start: i32, x_end: i32, y: i32, colour: Colour) {
    for x in (x_start..x_end).step_by(6) {
        line(canvas, (x, y), (x + 3, y), colour);
    }
}

/// Mix `over` onto `under` with 8-bit coverage; the result is opaque
/// whenever `under` is.
pub fn blend(under: Colour, over: Colour, coverage: u8) -> Colour {
    let a = coverage as u32;
    let mix = |u: u8, o: u8| ((o as u32 * a + u as u32 * (255 - a) + 127) / 255) as u8;
    Colour::new(
        mix(under.r, over.r),
        mix(under.g, over.g),
        mix(under.b, over.b),
        under.a.max(coverage),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Colour = Colour::rgb(200, 100, 50);

    #[test]
    fn test_line_runs_either_direction() {
        let mut down = Canvas::new(4, 10);
        let mut up = Canvas::new(4, 10);
        line(&mut down, (1, 1), (1, 8), INK);
        line(&mut up, (1, 8), (1, 1), INK);
        assert_eq!(down, up);
        assert_eq!(down.pixels().iter().filter(|c| c.is_opaque()).count(), 8);
    }

    #[test]
    fn test_outline_rect_leaves_inside_empty() {
        let mut canvas = Canvas::new(6, 6);
        outline_rect(&mut canvas, 1, 1, 4, 4, INK);
        assert_eq!(canvas.get(1, 1), Some(INK));
        assert_eq!(canvas.get(4, 4), Some(INK));
        assert_eq!(canvas.get(4, 2), Some(INK));
        assert!(canvas.get(2, 2).unwrap().is_transparent());
        assert!(canvas.get(5, 5).unwrap().is_transparent());
    }

    #[test]
    fn test_star_is_a_diamond() {
        let mut canvas = Canvas::new(5, 5);
        star(&mut canvas, 2, 2, INK);
        assert_eq!(canvas.pixels().iter().filter(|c| c.is_opaque()).count(), 9);
        assert_eq!(canvas.get(2, 0), Some(INK));
        assert!(canvas.get(1, 0).unwrap().is_transparent());
        assert!(canvas.get(1, 2).unwrap().is_transparent());
    }

    #[test]
    fn test_dashes() {
        let mut canvas = Canvas::new(20, 1);
        dashed_line(&mut canvas, 0, 12, 0, INK);
        let lit: Vec<bool> = (0..14).map(|x| canvas.get(x, 0).unwrap().is_opaque()).collect();
        assert_eq!(
            lit,
            [true, true, true, true, false, false, true, true, true, true, false, false, false, false]
        );
    }

    #[test]
    fn test_blend_endpoints() {
        let bg = Colour::rgb(18, 14, 28);
        assert_eq!(blend(bg, INK, 255), INK);
        assert_eq!(blend(bg, INK, 0), bg);
        let half = blend(Colour::BLACK, Colour::WHITE, 128);
        assert_eq!((half.r, half.a), (128, 255));
    }
}
