//! Body-part drawers for the 32×32 developer character.
//!
//! Coordinates are literal pixel positions inside a frame; every drawer
//! offsets them by its `Origin`. Front-view parts face the viewer, side-view
//! parts face left. Right-facing poses are produced with [`mirrored`].

use crate::types::Canvas;

use super::pen::{Origin, Pen};
use super::FRAME_SIZE;

// --- front view ---

pub fn front_hair(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for x in 14..17 {
        pen.dot(o.x + x, o.y + 6, p.hair);
    }
    for x in 11..21 {
        let c = if x == 11 || x == 20 { p.hair_highlight } else { p.hair };
        pen.dot(o.x + x, o.y + 7, c);
    }
    for x in 10..22 {
        let c = if x >= 18 { p.hair_highlight } else { p.hair };
        pen.dot(o.x + x, o.y + 8, c);
    }
    // Sides only; the forehead shows between them.
    for x in 10..13 {
        pen.dot(o.x + x, o.y + 9, p.hair);
    }
    for x in 19..22 {
        pen.dot(o.x + x, o.y + 9, p.hair_highlight);
    }
}

/// Face with open eyes looking forward and a closed smile.
pub fn front_head(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for y in 9..16 {
        let (left, right) = if y == 9 || y == 15 { (11, 20) } else { (10, 21) };
        for x in left..=right {
            let c = if x == left {
                p.skin_shadow
            } else if x == right {
                p.skin_highlight
            } else {
                p.skin
            };
            pen.dot(o.x + x, o.y + y, c);
        }
    }

    pen.dot(o.x + 13, o.y + 11, p.white);
    pen.dot(o.x + 14, o.y + 11, p.white);
    pen.dot(o.x + 13, o.y + 12, p.outline);
    pen.dot(o.x + 14, o.y + 12, p.white);
    pen.dot(o.x + 17, o.y + 11, p.white);
    pen.dot(o.x + 18, o.y + 11, p.white);
    pen.dot(o.x + 18, o.y + 12, p.outline);
    pen.dot(o.x + 17, o.y + 12, p.white);

    for x in 14..17 {
        pen.dot(o.x + x, o.y + 14, p.skin_shadow);
    }
}

pub fn front_neck(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    pen.dot(o.x + 15, o.y + 16, p.skin);
    pen.dot(o.x + 16, o.y + 16, p.skin);
}

pub fn front_shirt(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for y in 17..24 {
        let (left, right) = if y >= 22 { (10, 21) } else { (9, 22) };
        for x in left..=right {
            let c = if x <= left + 1 {
                p.shirt_shadow
            } else if x >= right - 1 {
                p.shirt_highlight
            } else {
                p.shirt
            };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
}

/// The 6×4 orange blob on the shirt, with eyes and two little legs.
pub fn front_logo(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    let (lx, ly) = (o.x + 13, o.y + 19);
    for dy in 0..4 {
        for dx in 0..6 {
            let c = match (dx, dy) {
                (_, 0) => p.logo_highlight,
                (_, 3) => p.logo_shadow,
                (0, _) => p.logo_shadow,
                (5, _) => p.logo_highlight,
                _ => p.logo,
            };
            pen.dot(lx + dx, ly + dy, c);
        }
    }
    pen.dot(lx + 1, ly + 1, p.logo_outline);
    pen.dot(lx + 4, ly + 1, p.logo_outline);
    pen.dot(lx + 1, ly + 4, p.logo_shadow);
    pen.dot(lx + 4, ly + 4, p.logo_shadow);
}

pub fn front_pants(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for y in 24..28 {
        for x in 10..22 {
            if y >= 26 && (x == 15 || x == 16) {
                continue;
            }
            let c = if x == 10 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
}

pub fn front_shoes(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for x in 9..15 {
        let c = if x == 9 { p.shoe_highlight } else { p.shoe };
        pen.dot(o.x + x, o.y + 28, c);
        if x <= 13 {
            pen.dot(o.x + x, o.y + 29, c);
        }
    }
    for x in 17..23 {
        let c = if x == 22 { p.shoe_highlight } else { p.shoe };
        pen.dot(o.x + x, o.y + 28, c);
        if x >= 18 {
            pen.dot(o.x + x, o.y + 29, c);
        }
    }
}

/// Hair, head, neck, shirt and logo: everything above the belt.
pub fn front_upper_body(pen: &mut Pen, o: Origin) {
    front_hair(pen, o);
    front_head(pen, o);
    front_neck(pen, o);
    front_shirt(pen, o);
    front_logo(pen, o);
}

/// Viewer's-left arm hanging at the side: 3px sleeve then `forearm` px of skin.
pub fn front_left_arm(pen: &mut Pen, o: Origin, forearm: i32) {
    let p = pen.palette();
    for dy in 0..3 {
        pen.dot(o.x + 7, o.y + 17 + dy, p.shirt_shadow);
        pen.dot(o.x + 8, o.y + 17 + dy, p.shirt);
    }
    for dy in 0..forearm {
        pen.dot(o.x + 7, o.y + 20 + dy, p.skin_shadow);
        pen.dot(o.x + 8, o.y + 20 + dy, p.skin);
    }
}

/// Viewer's-right arm hanging at the side.
pub fn front_right_arm(pen: &mut Pen, o: Origin, forearm: i32) {
    let p = pen.palette();
    for dy in 0..3 {
        pen.dot(o.x + 23, o.y + 17 + dy, p.shirt);
        pen.dot(o.x + 24, o.y + 17 + dy, p.shirt_highlight);
    }
    for dy in 0..forearm {
        pen.dot(o.x + 23, o.y + 20 + dy, p.skin);
        pen.dot(o.x + 24, o.y + 20 + dy, p.skin_highlight);
    }
}

pub fn front_arms_at_sides(pen: &mut Pen, o: Origin, forearm: i32) {
    front_left_arm(pen, o, forearm);
    front_right_arm(pen, o, forearm);
}

/// The full standing character at rest, as in the static character image.
pub fn front_standing(pen: &mut Pen, o: Origin) {
    front_upper_body(pen, o);
    front_arms_at_sides(pen, o, 3);
    front_pants(pen, o);
    front_shoes(pen, o);
}

// --- side view (facing left) ---

pub fn side_hair(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for x in 11..16 {
        pen.dot(o.x + x, o.y + 6, p.hair);
    }
    for x in 10..17 {
        let c = if x >= 15 { p.hair_highlight } else { p.hair };
        pen.dot(o.x + x, o.y + 7, c);
    }
    for x in 9..17 {
        let c = if x >= 15 { p.hair_highlight } else { p.hair };
        pen.dot(o.x + x, o.y + 8, c);
    }
    for y in 9..13 {
        pen.dot(o.x + 15, o.y + y, p.hair);
        pen.dot(o.x + 16, o.y + y, p.hair_highlight);
    }
}

/// Profile head: one eye, a nose bump on the left edge and a short mouth.
pub fn side_head(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for y in 9..16 {
        let (left, right) = match y {
            9 | 15 => (10, 14),
            _ => (9, 15),
        };
        for x in left..=right {
            let c = if x == left {
                p.skin_shadow
            } else if x == right {
                p.skin_highlight
            } else {
                p.skin
            };
            pen.dot(o.x + x, o.y + y, c);
        }
    }

    pen.dot(o.x + 10, o.y + 11, p.white);
    pen.dot(o.x + 11, o.y + 11, p.white);
    pen.dot(o.x + 10, o.y + 12, p.outline);
    pen.dot(o.x + 11, o.y + 12, p.white);

    pen.dot(o.x + 8, o.y + 12, p.skin);
    pen.dot(o.x + 8, o.y + 13, p.skin_shadow);

    pen.dot(o.x + 10, o.y + 14, p.skin_shadow);
    pen.dot(o.x + 11, o.y + 14, p.skin_shadow);
}

pub fn side_neck(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    pen.dot(o.x + 12, o.y + 16, p.skin);
    pen.dot(o.x + 13, o.y + 16, p.skin_shadow);
}

/// Orange hint of the logo as seen from the side.
pub fn side_logo(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    pen.dot(o.x + 11, o.y + 19, p.logo);
    pen.dot(o.x + 12, o.y + 19, p.logo);
    pen.dot(o.x + 13, o.y + 19, p.logo_highlight);
    pen.dot(o.x + 11, o.y + 20, p.logo_shadow);
    pen.dot(o.x + 12, o.y + 20, p.logo);
    pen.dot(o.x + 13, o.y + 20, p.logo);
}

fn side_shirt_rows(pen: &mut Pen, o: Origin, (left, right): (i32, i32)) {
    let p = pen.palette();
    for y in 17..24 {
        let (l, r) = if y >= 22 { (left + 1, right - 1) } else { (left, right) };
        for x in l..=r {
            let c = if x == l {
                p.shirt_shadow
            } else if x == r {
                p.shirt_highlight
            } else {
                p.shirt
            };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
}

/// Side-view torso, narrower than the front shirt.
pub fn side_torso(pen: &mut Pen, o: Origin) {
    side_shirt_rows(pen, o, (10, 17));
    side_logo(pen, o);
}

/// Torso one pixel wider each side: the in-between frame of a turn.
pub fn side_torso_turning(pen: &mut Pen, o: Origin) {
    side_shirt_rows(pen, o, (9, 18));
    side_logo(pen, o);
}

/// Hair, head and neck in profile.
pub fn side_head_and_neck(pen: &mut Pen, o: Origin) {
    side_hair(pen, o);
    side_head(pen, o);
    side_neck(pen, o);
}

/// Hair, head, neck and torso in profile.
pub fn side_upper_body(pen: &mut Pen, o: Origin) {
    side_head_and_neck(pen, o);
    side_torso(pen, o);
}

/// Sleeve hanging from the shoulder at (16, 18), `rows` pixels long.
pub fn side_sleeve(pen: &mut Pen, o: Origin, rows: i32) {
    let p = pen.palette();
    for dy in 0..rows {
        pen.dot(o.x + 16, o.y + 18 + dy, p.shirt);
        pen.dot(o.x + 17, o.y + 18 + dy, p.shirt_highlight);
    }
}

/// Arm bent forward with the hand resting on the lap while seated.
///
/// The last two hand pixels sit on the thigh, which does not move with
/// `breath`.
pub fn side_arm_on_lap(pen: &mut Pen, o: Origin, breath: i32) {
    let p = pen.palette();
    side_sleeve(pen, o.shifted(0, breath), 3);
    pen.dot(o.x + 15, o.y + 21 + breath, p.skin);
    pen.dot(o.x + 14, o.y + 22 + breath, p.skin);
    pen.dot(o.x + 13, o.y + 22 + breath, p.skin_highlight);
    pen.dot(o.x + 12, o.y + 23, p.skin);
    pen.dot(o.x + 13, o.y + 23, p.skin_highlight);
}

/// Arm relaxed in front of the body while standing.
pub fn side_arm_relaxed(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    side_sleeve(pen, o, 3);
    pen.dot(o.x + 15, o.y + 21, p.skin);
    pen.dot(o.x + 14, o.y + 22, p.skin);
    pen.dot(o.x + 13, o.y + 22, p.skin_highlight);
}

/// Shorter relaxed arm used while turning and in lunges.
pub fn side_arm_short(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    side_sleeve(pen, o, 3);
    pen.dot(o.x + 15, o.y + 21, p.skin);
    pen.dot(o.x + 14, o.y + 22, p.skin_highlight);
}

/// Legs of a seated figure: thighs along the seat, shins hanging down.
pub fn seated_legs(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    seated_thighs(pen, o);
    for y in 25..28 {
        for x in 10..13 {
            let c = if x == 10 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
    for x in 9..13 {
        let c = if x == 9 { p.shoe_highlight } else { p.shoe };
        pen.dot(o.x + x, o.y + 28, c);
    }
    for x in 9..12 {
        pen.dot(o.x + x, o.y + 29, p.shoe);
    }
}

/// Just the thighs of a seated figure.
pub fn seated_thighs(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for y in 23..25 {
        for x in 10..19 {
            let c = if x <= 11 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
}

/// Standing legs in profile, feet pointing left.
pub fn side_standing_legs(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for y in 24..27 {
        for x in 11..15 {
            let c = if x == 11 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
    for y in 27..29 {
        for x in 10..14 {
            let c = if x == 10 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
    for x in 8..14 {
        let c = if x == 8 { p.shoe_highlight } else { p.shoe };
        pen.dot(o.x + x, o.y + 29, c);
    }
}

/// Draw a left-facing pose mirrored so it faces right.
///
/// `draw` renders into a blank frame-sized scratch canvas at the zero
/// origin; the scratch is flipped horizontally and its non-transparent
/// pixels are composited at `o`.
pub fn mirrored(pen: &mut Pen, o: Origin, draw: impl FnOnce(&mut Pen)) {
    let mut scratch = Canvas::new(FRAME_SIZE, FRAME_SIZE);
    {
        let mut scratch_pen = Pen::new(&mut scratch, pen.palette());
        draw(&mut scratch_pen);
    }
    pen.canvas_mut().composite(&scratch.flip_horizontal(), o.x, o.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, Palette};

    fn render(f: impl FnOnce(&mut Pen)) -> Canvas {
        let palette = Palette::developer();
        let mut canvas = Canvas::new(FRAME_SIZE, FRAME_SIZE);
        let mut pen = Pen::new(&mut canvas, &palette);
        f(&mut pen);
        canvas
    }

    #[test]
    fn test_front_head_eyes_and_smile() {
        let p = Palette::developer();
        let canvas = render(|pen| front_head(pen, Origin::ZERO));
        assert_eq!(canvas.get(13, 12), Some(p.outline));
        assert_eq!(canvas.get(18, 12), Some(p.outline));
        assert_eq!(canvas.get(14, 11), Some(p.white));
        assert_eq!(canvas.get(15, 14), Some(p.skin_shadow));
        assert_eq!(canvas.get(10, 12), Some(p.skin_shadow));
        assert_eq!(canvas.get(21, 12), Some(p.skin_highlight));
        assert!(canvas.get(10, 9).unwrap().is_transparent());
    }

    #[test]
    fn test_front_logo_corners_and_legs() {
        let p = Palette::developer();
        let canvas = render(|pen| front_logo(pen, Origin::ZERO));
        assert_eq!(canvas.get(13, 19), Some(p.logo_highlight));
        assert_eq!(canvas.get(13, 20), Some(p.logo_shadow));
        assert_eq!(canvas.get(18, 20), Some(p.logo_highlight));
        assert_eq!(canvas.get(15, 21), Some(p.logo));
        assert_eq!(canvas.get(14, 20), Some(p.logo_outline));
        assert_eq!(canvas.get(17, 20), Some(p.logo_outline));
        assert_eq!(canvas.get(14, 23), Some(p.logo_shadow));
        assert_eq!(canvas.get(14, 23), canvas.get(17, 23));
    }

    #[test]
    fn test_front_pants_leg_gap() {
        let canvas = render(|pen| front_pants(pen, Origin::ZERO));
        assert!(canvas.get(15, 26).unwrap().is_transparent());
        assert!(canvas.get(16, 27).unwrap().is_transparent());
        assert!(!canvas.get(15, 25).unwrap().is_transparent());
    }

    #[test]
    fn test_front_standing_fits_frame() {
        let canvas = render(|pen| front_standing(pen, Origin::ZERO));
        for x in 0..32 {
            assert!(canvas.get(x, 5).unwrap().is_transparent());
            assert!(canvas.get(x, 30).unwrap().is_transparent());
        }
        assert!(!canvas.get(14, 6).unwrap().is_transparent());
        assert!(!canvas.get(9, 29).unwrap().is_transparent());
    }

    #[test]
    fn test_side_torso_narrows_at_waist() {
        let p = Palette::developer();
        let canvas = render(|pen| side_torso(pen, Origin::ZERO));
        assert_eq!(canvas.get(10, 17), Some(p.shirt_shadow));
        assert_eq!(canvas.get(17, 17), Some(p.shirt_highlight));
        assert!(canvas.get(10, 22).unwrap().is_transparent());
        assert_eq!(canvas.get(11, 22), Some(p.shirt_shadow));
        assert_eq!(canvas.get(16, 23), Some(p.shirt_highlight));
    }

    #[test]
    fn test_origin_shifts_every_pixel() {
        let base = render(|pen| side_upper_body(pen, Origin::ZERO));
        let moved = render(|pen| side_upper_body(pen, Origin::new(3, 2)));
        for y in 0..28 {
            for x in 0..28 {
                assert_eq!(base.get(x, y), moved.get(x + 3, y + 2));
            }
        }
    }

    #[test]
    fn test_mirrored_flips_profile() {
        let p = Palette::developer();
        let canvas = render(|pen| {
            mirrored(pen, Origin::ZERO, |scratch| side_head(scratch, Origin::ZERO));
        });
        // Nose bump moves from x=8 to x=23; the pupil from 10 to 21.
        assert_eq!(canvas.get(23, 12), Some(p.skin));
        assert_eq!(canvas.get(21, 12), Some(p.outline));
        assert!(canvas.get(8, 12).unwrap().is_transparent());
    }

    #[test]
    fn test_mirrored_leaves_background_untouched() {
        let marker = Colour::rgb(1, 2, 3);
        let canvas = render(|pen| {
            pen.dot(0, 0, marker);
            mirrored(pen, Origin::ZERO, |scratch| side_neck(scratch, Origin::ZERO));
        });
        assert_eq!(canvas.get(0, 0), Some(marker));
        let painted = canvas.pixels().iter().filter(|c| !c.is_transparent()).count();
        assert_eq!(painted, 3);
    }
}
