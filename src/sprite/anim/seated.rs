//! Side-view animations on or against the office chair.

use crate::sprite::body::{
    front_arms_at_sides, front_upper_body, seated_legs, seated_thighs, side_arm_on_lap,
    side_head_and_neck, side_logo, side_sleeve, side_torso_turning, side_upper_body,
};
use crate::sprite::pen::{line_points, round_px, Origin, Pen};
use crate::sprite::props;

use super::{cycle_angle, Curve};

/// Shift that puts a seated figure's back against the chair backrest.
const SEAT_DX: i32 = 6;

fn seat(o: Origin) -> Origin {
    o.shifted(SEAT_DX, 0)
}

/// Side-view figure sitting upright with hands on the lap.
fn sitting(pen: &mut Pen, at: Origin) {
    side_upper_body(pen, at);
    side_arm_on_lap(pen, at, 0);
}

// --- chair dips ---

const DIP: Curve = [0, 0, 1, 2, 3, 4, 4, 4, 3, 2, 1, 0, 0, 0, 0, 0];

pub(super) fn chair_dips(pen: &mut Pen, o: Origin, frame: usize) {
    let dip = DIP[frame];
    props::office_chair(pen, o);
    dip_legs(pen, o);
    side_upper_body(pen, o.shifted(0, dip));
    dip_arm(pen, o, dip);
}

/// Legs stretched out in front of the chair, heels on the floor.
fn dip_legs(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for y in 24..26 {
        for x in 5..14 {
            let c = if x <= 6 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
    for y in 26..28 {
        for x in 3..8 {
            let c = if x <= 4 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
    for x in 1..6 {
        let c = if x == 1 { p.shoe_highlight } else { p.shoe };
        pen.dot(o.x + x, o.y + 28, c);
    }
    for x in 2..5 {
        pen.dot(o.x + x, o.y + 29, p.shoe);
    }
}

/// Arm reaching back from the shoulder to grip the front of the seat.
fn dip_arm(pen: &mut Pen, o: Origin, dip: i32) {
    let p = pen.palette();
    let shoulder: (i32, i32) = (16, 18 + dip);
    let hand: (i32, i32) = (19, 23);
    let elbow = (
        (shoulder.0 + hand.0).div_euclid(2),
        (shoulder.1 + hand.1).div_euclid(2),
    );

    for (x, y) in line_points(shoulder.0, shoulder.1, elbow.0, elbow.1) {
        pen.dot(o.x + x, o.y + y, p.shirt);
        pen.dot(o.x + x + 1, o.y + y, p.shirt_highlight);
    }
    for (x, y) in line_points(elbow.0, elbow.1, hand.0, hand.1) {
        pen.dot(o.x + x, o.y + y, p.skin);
        pen.dot(o.x + x + 1, o.y + y, p.skin_highlight);
    }
    pen.dot(o.x + hand.0, o.y + hand.1, p.skin);
    pen.dot(o.x + hand.0 + 1, o.y + hand.1, p.skin_shadow);
}

// --- knee raises ---

const KNEE_LIFT: Curve = [0, 1, 2, 3, 4, 4, 3, 2, 1, 0, 0, 0, 0, 0, 0, 0];
/// Knee position relative to the seated origin, per lift level 1..=4.
const KNEE_AT: [(i32, i32); 5] = [(0, 0), (10, 22), (8, 21), (7, 20), (6, 20)];

pub(super) fn knee_raises(pen: &mut Pen, o: Origin, frame: usize) {
    let at = seat(o);
    let lift = KNEE_LIFT[frame] as usize;

    props::office_chair(pen, o);
    seated_legs(pen, at);
    sitting(pen, at);
    if lift == 0 {
        return;
    }

    // The raised leg is drawn last so it sits in front of the body.
    let p = pen.palette();
    let hip = (at.x + 13, o.y + 23);
    let (kx, ky) = (at.x + KNEE_AT[lift].0, o.y + KNEE_AT[lift].1);
    pen.fill_segment(
        Origin::ZERO,
        (f64::from(hip.0), f64::from(hip.1)),
        (f64::from(kx), f64::from(ky)),
        1.8,
        p.pants,
        p.pants_shadow,
        p.pants_shadow,
    );
    for dy in 0..4 {
        pen.dot(kx - 1, ky + 1 + dy, p.pants);
        pen.dot(kx, ky + 1 + dy, p.pants);
        pen.dot(kx + 1, ky + 1 + dy, p.pants_shadow);
    }
    let foot_y = ky + 5;
    pen.dot(kx - 1, foot_y, p.shoe_highlight);
    pen.dot(kx, foot_y, p.shoe);
    pen.dot(kx - 1, foot_y + 1, p.shoe);
    pen.dot(kx, foot_y + 1, p.shoe);
}

// --- spinal twist ---

/// 0 = profile, 1 = half turned, 2 = facing the viewer.
const TWIST_VIEW: Curve = [0, 0, 0, 0, 1, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0];

pub(super) fn spinal_twist(pen: &mut Pen, o: Origin, frame: usize) {
    let at = seat(o);
    props::office_chair(pen, o);
    seated_legs(pen, at);

    match TWIST_VIEW[frame] {
        2 => {
            // front view lined up with the profile's body centre
            let front = at.shifted(-4, 0);
            front_upper_body(pen, front);
            front_arms_at_sides(pen, front, 2);
        }
        1 => {
            side_head_and_neck(pen, at);
            side_torso_turning(pen, at);
            side_arm_on_lap(pen, at, 0);
        }
        _ => sitting(pen, at),
    }
}

// --- glute squeeze ---

const SQUEEZE: Curve = [0, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 0, 0, 0];

pub(super) fn glute_squeeze(pen: &mut Pen, o: Origin, frame: usize) {
    let at = seat(o);
    let squeeze = SQUEEZE[frame];
    props::office_chair(pen, o);
    seated_legs(pen, at);
    side_upper_body(pen, at.shifted(0, squeeze));
    side_arm_on_lap(pen, at, squeeze);
}

// --- shoulder rolls ---

const ROLL_RADIUS: f64 = 1.5;

pub(super) fn shoulder_rolls(pen: &mut Pen, o: Origin, frame: usize) {
    let at = seat(o);
    let angle = cycle_angle(frame);
    let sdx = round_px(ROLL_RADIUS * angle.cos());
    let sdy = round_px(ROLL_RADIUS * angle.sin());

    props::office_chair(pen, o);
    seated_legs(pen, at);
    side_head_and_neck(pen, at);

    // Rows down to the chest follow the shoulder; the waist stays put.
    let p = pen.palette();
    for y in 17..24 {
        let (left, right) = if y >= 22 { (11, 16) } else { (10, 17) };
        let (dx, dy) = if y <= 19 { (sdx, sdy) } else { (0, 0) };
        for x in left + dx..=right + dx {
            let c = if x == left + dx {
                p.shirt_shadow
            } else if x == right + dx {
                p.shirt_highlight
            } else {
                p.shirt
            };
            pen.dot(at.x + x, at.y + y + dy, c);
        }
    }
    side_logo(pen, at);

    side_sleeve(pen, at.shifted(sdx, sdy), 3);
    pen.dot(at.x + 15 + sdx, at.y + 21 + sdy, p.skin);
    pen.dot(at.x + 14, at.y + 22, p.skin);
    pen.dot(at.x + 13, at.y + 22, p.skin_highlight);
    pen.dot(at.x + 12, at.y + 23, p.skin);
    pen.dot(at.x + 13, at.y + 23, p.skin_highlight);
}

// --- leg extensions ---

const EXTEND: Curve = [0, 1, 2, 3, 4, 5, 5, 4, 3, 2, 1, 0, 0, 0, 0, 0];

pub(super) fn leg_extensions(pen: &mut Pen, o: Origin, frame: usize) {
    let at = seat(o);
    let ext = EXTEND[frame];

    props::office_chair(pen, o);
    seated_thighs(pen, at);

    if ext > 0 {
        // At full extension the foot is 7px in front of the knee, level with it.
        let p = pen.palette();
        let (knee_x, knee_y) = (at.x + 10, o.y + 25);
        let foot_x = round_px(f64::from(knee_x) - f64::from(ext * 7) / 5.0);
        let foot_y = round_px(f64::from(o.y + 28) - f64::from(ext * 3) / 5.0);

        for (x, y) in line_points(knee_x, knee_y, foot_x, foot_y) {
            pen.dot(x, y - 1, p.pants);
            pen.dot(x, y, p.pants);
            pen.dot(x, y + 1, p.pants_shadow);
        }
        pen.dot(foot_x - 1, foot_y - 1, p.shoe_highlight);
        pen.dot(foot_x, foot_y - 1, p.shoe);
        pen.dot(foot_x - 1, foot_y, p.shoe);
        pen.dot(foot_x, foot_y, p.shoe);
    } else {
        seated_legs(pen, at);
    }

    sitting(pen, at);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::FRAME_SIZE;
    use crate::types::{Canvas, Colour, Palette};

    fn render(f: impl FnOnce(&mut Pen)) -> Canvas {
        let palette = Palette::developer();
        let mut canvas = Canvas::new(FRAME_SIZE, FRAME_SIZE);
        let mut pen = Pen::new(&mut canvas, &palette);
        f(&mut pen);
        canvas
    }

    #[test]
    fn test_chair_dip_lowers_body_only() {
        let p = Palette::developer();
        let top = render(|pen| chair_dips(pen, Origin::ZERO, 0));
        let bottom = render(|pen| chair_dips(pen, Origin::ZERO, 6));

        // head drops by four pixels, feet stay
        assert_eq!(top.get(10, 12), Some(p.outline));
        assert_eq!(bottom.get(10, 16), Some(p.outline));
        assert_eq!(top.get(1, 28), bottom.get(1, 28));
        // hand grips the seat edge in both
        assert_eq!(top.get(20, 23), Some(p.skin_shadow));
        assert_eq!(bottom.get(20, 23), Some(p.skin_shadow));
    }

    #[test]
    fn test_dip_arm_bends_at_midpoint() {
        let p = Palette::developer();
        let up = render(|pen| dip_arm(pen, Origin::ZERO, 0));
        assert_eq!(up.get(16, 18), Some(p.shirt));
        assert_eq!(up.get(17, 20), Some(p.skin));
        assert_eq!(up.get(19, 23), Some(p.skin));
        assert_eq!(up.get(20, 23), Some(p.skin_shadow));

        let down = render(|pen| dip_arm(pen, Origin::ZERO, 4));
        assert_eq!(down.get(16, 22), Some(p.shirt));
        assert_eq!(down.get(17, 22), Some(p.skin));
        assert_eq!(down.get(16, 18), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_seated_figure_sits_on_chair() {
        let p = Palette::developer();
        let canvas = render(|pen| glute_squeeze(pen, Origin::ZERO, 0));
        // side-view pupil shifted by the seat offset
        assert_eq!(canvas.get(16, 12), Some(p.outline));
        // thighs run along the seat
        assert_eq!(canvas.get(20, 24), Some(p.pants));
        assert_eq!(canvas.get(16, 24), Some(p.pants_shadow));
    }

    #[test]
    fn test_glute_squeeze_lifts_one_pixel() {
        let p = Palette::developer();
        let canvas = render(|pen| glute_squeeze(pen, Origin::ZERO, 5));
        assert_eq!(canvas.get(16, 11), Some(p.outline));
        // hand stays on the thigh
        assert_eq!(canvas.get(18, 23), Some(p.skin));
    }

    #[test]
    fn test_knee_raise_peak_lifts_foot() {
        let p = Palette::developer();
        let canvas = render(|pen| knee_raises(pen, Origin::ZERO, 4));
        // lift 4: knee at (12, 20), foot rows 25..26
        assert_eq!(canvas.get(11, 25), Some(p.shoe_highlight));
        assert_eq!(canvas.get(12, 26), Some(p.shoe));
        assert_eq!(canvas.get(13, 21), Some(p.pants_shadow));
    }

    #[test]
    fn test_spinal_twist_front_view_shows_logo() {
        let p = Palette::developer();
        let canvas = render(|pen| spinal_twist(pen, Origin::ZERO, 6));
        // front logo at (13, 19) relative to the front origin (2, 0)
        assert_eq!(canvas.get(15, 19), Some(p.logo_highlight));
        assert_eq!(canvas.get(16, 20), Some(p.logo_outline));
    }

    #[test]
    fn test_shoulder_roll_frame_zero_shifts_right() {
        let p = Palette::developer();
        let canvas = render(|pen| shoulder_rolls(pen, Origin::ZERO, 0));
        // sdx = round(1.5) = 2, sdy = 0
        assert_eq!(canvas.get(18, 17), Some(p.shirt_shadow));
        assert_eq!(canvas.get(25, 17), Some(p.shirt_highlight));
    }

    #[test]
    fn test_leg_extension_straightens_leg() {
        let p = Palette::developer();
        let canvas = render(|pen| leg_extensions(pen, Origin::ZERO, 5));
        // ext 5: knee (16, 25), foot (9, 25)
        assert_eq!(canvas.get(9, 25), Some(p.shoe));
        assert_eq!(canvas.get(8, 24), Some(p.shoe_highlight));
        assert_eq!(canvas.get(12, 26), Some(p.pants_shadow));
        // shin no longer hangs down
        assert!(canvas.get(16, 28).unwrap().is_transparent());
    }
}
