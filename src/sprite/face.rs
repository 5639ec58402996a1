//! Facial expression overlays for the front-view head.
//!
//! Each overlay is drawn after [`front_head`](super::body::front_head) with
//! the same origin; it paints over the default eyes or mouth.

use super::pen::{Origin, Pen};

const EYE_COLUMNS: [i32; 4] = [13, 14, 17, 18];
const EYE_ROW: i32 = 11;
const MOUTH_ROW: i32 = 14;

/// Stage of a three-frame blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blink {
    Closing,
    Closed,
    Opening,
}

impl Blink {
    /// Blink stage for a frame, if `frame` falls in the blink window starting at `start`.
    pub fn at(frame: usize, start: usize) -> Option<Self> {
        match frame.checked_sub(start)? {
            0 => Some(Self::Closing),
            1 => Some(Self::Closed),
            2 => Some(Self::Opening),
            _ => None,
        }
    }
}

/// Which way both pupils point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gaze {
    Left,
    Ahead,
    Right,
}

impl Gaze {
    pub fn from_offset(offset: i32) -> Self {
        match offset.signum() {
            -1 => Self::Left,
            1 => Self::Right,
            _ => Self::Ahead,
        }
    }
}

/// Paint both eye areas with plain skin.
pub fn clear_eyes(pen: &mut Pen, o: Origin) {
    let skin = pen.palette().skin;
    for dy in 0..2 {
        for x in EYE_COLUMNS {
            pen.dot(o.x + x, o.y + EYE_ROW + dy, skin);
        }
    }
}

pub fn blink(pen: &mut Pen, o: Origin, stage: Blink) {
    let p = pen.palette();
    let y = o.y + EYE_ROW;
    clear_eyes(pen, o);
    match stage {
        Blink::Closing | Blink::Closed => {
            for x in EYE_COLUMNS {
                pen.dot(o.x + x, y + 1, p.outline);
            }
        }
        Blink::Opening => {
            for x in EYE_COLUMNS {
                pen.dot(o.x + x, y, p.white);
            }
            pen.dot(o.x + 13, y + 1, p.outline);
            pen.dot(o.x + 14, y + 1, p.white);
            pen.dot(o.x + 18, y + 1, p.outline);
            pen.dot(o.x + 17, y + 1, p.white);
        }
    }
}

/// Pupils shifted to one side. `Gaze::Ahead` leaves the head untouched.
pub fn glance(pen: &mut Pen, o: Origin, gaze: Gaze) {
    let pupil_dx = match gaze {
        Gaze::Left => 0,
        Gaze::Right => 1,
        Gaze::Ahead => return,
    };
    let p = pen.palette();
    let y = o.y + EYE_ROW;
    clear_eyes(pen, o);
    for eye_x in [13, 17] {
        pen.dot(o.x + eye_x, y, p.white);
        pen.dot(o.x + eye_x + 1, y, p.white);
        pen.dot(o.x + eye_x, y + 1, p.white);
        pen.dot(o.x + eye_x + 1, y + 1, p.white);
        pen.dot(o.x + eye_x + pupil_dx, y + 1, p.outline);
    }
}

/// Content `^ ^` eyes.
pub fn happy_eyes(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    let y = o.y + EYE_ROW;
    clear_eyes(pen, o);
    pen.dot(o.x + 13, y + 1, p.outline);
    pen.dot(o.x + 14, y, p.outline);
    pen.dot(o.x + 17, y, p.outline);
    pen.dot(o.x + 18, y + 1, p.outline);
}

/// Eyes shut softly, drawn as shadow lines rather than outlines.
pub fn relaxed_eyes(pen: &mut Pen, o: Origin) {
    let shadow = pen.palette().skin_shadow;
    clear_eyes(pen, o);
    for x in EYE_COLUMNS {
        pen.dot(o.x + x, o.y + EYE_ROW + 1, shadow);
    }
}

/// Open mouth starting at x=14; 3px when calling out, 4px for a grin.
pub fn open_mouth(pen: &mut Pen, o: Origin, width: i32) {
    let outline = pen.palette().outline;
    for dx in 0..width {
        pen.dot(o.x + 14 + dx, o.y + MOUTH_ROW, outline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::body::front_head;
    use crate::sprite::FRAME_SIZE;
    use crate::types::{Canvas, Palette};

    fn face(overlay: impl FnOnce(&mut Pen)) -> Canvas {
        let palette = Palette::developer();
        let mut canvas = Canvas::new(FRAME_SIZE, FRAME_SIZE);
        let mut pen = Pen::new(&mut canvas, &palette);
        front_head(&mut pen, Origin::ZERO);
        overlay(&mut pen);
        canvas
    }

    #[test]
    fn test_blink_window() {
        assert_eq!(Blink::at(11, 12), None);
        assert_eq!(Blink::at(12, 12), Some(Blink::Closing));
        assert_eq!(Blink::at(13, 12), Some(Blink::Closed));
        assert_eq!(Blink::at(14, 12), Some(Blink::Opening));
        assert_eq!(Blink::at(15, 12), None);
    }

    #[test]
    fn test_closed_blink_is_single_line() {
        let p = Palette::developer();
        let canvas = face(|pen| blink(pen, Origin::ZERO, Blink::Closed));
        for x in EYE_COLUMNS {
            assert_eq!(canvas.get(x, 11), Some(p.skin));
            assert_eq!(canvas.get(x, 12), Some(p.outline));
        }
    }

    #[test]
    fn test_opening_blink_matches_open_eyes() {
        let open = face(|_| {});
        let opening = face(|pen| blink(pen, Origin::ZERO, Blink::Opening));
        assert_eq!(open, opening);
    }

    #[test]
    fn test_glance_moves_pupils() {
        let p = Palette::developer();
        let left = face(|pen| glance(pen, Origin::ZERO, Gaze::Left));
        assert_eq!(left.get(13, 12), Some(p.outline));
        assert_eq!(left.get(17, 12), Some(p.outline));
        assert_eq!(left.get(18, 12), Some(p.white));

        let right = face(|pen| glance(pen, Origin::ZERO, Gaze::Right));
        assert_eq!(right.get(14, 12), Some(p.outline));
        assert_eq!(right.get(18, 12), Some(p.outline));
        assert_eq!(right.get(13, 12), Some(p.white));
    }

    #[test]
    fn test_glance_ahead_is_noop() {
        assert_eq!(face(|_| {}), face(|pen| glance(pen, Origin::ZERO, Gaze::Ahead)));
    }

    #[test]
    fn test_happy_eyes_shape() {
        let p = Palette::developer();
        let canvas = face(|pen| happy_eyes(pen, Origin::new(0, 1)));
        assert_eq!(canvas.get(13, 13), Some(p.outline));
        assert_eq!(canvas.get(14, 12), Some(p.outline));
        assert_eq!(canvas.get(17, 12), Some(p.outline));
        assert_eq!(canvas.get(18, 13), Some(p.outline));
        assert_eq!(canvas.get(14, 13), Some(p.skin));
    }

    #[test]
    fn test_open_mouth_widths() {
        let p = Palette::developer();
        let calling = face(|pen| open_mouth(pen, Origin::ZERO, 3));
        assert_eq!(calling.get(16, 14), Some(p.outline));
        assert_eq!(calling.get(17, 14), Some(p.skin));

        let grin = face(|pen| open_mouth(pen, Origin::ZERO, 4));
        assert_eq!(grin.get(17, 14), Some(p.outline));
    }
}
