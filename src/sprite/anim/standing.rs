//! Front-view standing animations.

use crate::sprite::body::{
    front_arms_at_sides, front_hair, front_head, front_left_arm, front_logo, front_neck,
    front_pants, front_right_arm, front_shirt, front_shoes, front_upper_body,
};
use crate::sprite::face::{self, Blink, Gaze};
use crate::sprite::pen::{round_px, Origin, Pen};
use crate::sprite::props;

use super::{cycle_angle, Curve};

const BREATH: Curve = [0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0];
const BLINK_START: usize = 12;

/// Draws hair and head, lets `face` paint an expression, then the rest of
/// the upper body. Everything is raised or lowered by `dy`; legs stay put.
fn standing_body(pen: &mut Pen, o: Origin, dy: i32, face: impl FnOnce(&mut Pen, Origin)) {
    let upper = o.shifted(0, dy);
    front_hair(pen, upper);
    front_head(pen, upper);
    face(pen, upper);
    front_neck(pen, upper);
    front_shirt(pen, upper);
    front_logo(pen, upper);
    front_pants(pen, o);
    front_shoes(pen, o);
}

// --- coffee idle ---

const SIP: Curve = [0, 0, 0, 0, 1, 2, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0];

pub(super) fn coffee_idle(pen: &mut Pen, o: Origin, frame: usize) {
    let breath = BREATH[frame];
    let sip = SIP[frame];

    standing_body(pen, o, breath, |pen, at| {
        if let Some(stage) = Blink::at(frame, BLINK_START) {
            face::blink(pen, at, stage);
        }
        if sip == 2 {
            face::happy_eyes(pen, at);
        }
    });

    let p = pen.palette();
    let at = o.shifted(0, breath);
    front_left_arm(pen, at, 3);
    match sip {
        0 => {
            front_right_arm(pen, at, 3);
            props::coffee_mug(pen, at, (25, 20));
            props::steam(pen, at, (25, 20), frame);
        }
        2 => {
            pen.dot(at.x + 23, at.y + 17, p.shirt);
            pen.dot(at.x + 24, at.y + 17, p.shirt_highlight);
            pen.dot(at.x + 23, at.y + 16, p.skin);
            pen.dot(at.x + 22, at.y + 15, p.skin);
            pen.dot(at.x + 21, at.y + 14, p.skin_highlight);
            props::coffee_mug(pen, at, (20, 12));
        }
        // raising and lowering share a pose
        _ => {
            for dy in 0..2 {
                pen.dot(at.x + 23, at.y + 17 + dy, p.shirt);
                pen.dot(at.x + 24, at.y + 17 + dy, p.shirt_highlight);
            }
            pen.dot(at.x + 23, at.y + 19, p.skin);
            pen.dot(at.x + 24, at.y + 18, p.skin);
            pen.dot(at.x + 25, at.y + 17, p.skin_highlight);
            props::coffee_mug(pen, at, (24, 15));
        }
    }
}

// --- waving ---

const BOUNCE: Curve = [0, 0, -1, -1, 0, 0, -1, -1, 0, 0, -1, -1, 0, 0, -1, -1];

/// Elbow and hand offsets from the shoulder: (elbow dx, dy, hand dx, dy).
const WAVE: [(i32, i32, i32, i32); 16] = [
    (3, -3, 5, -6),
    (4, -3, 6, -6),
    (4, -2, 7, -4),
    (5, -2, 7, -3),
    (4, -3, 6, -6),
    (3, -3, 5, -6),
    (2, -3, 2, -7),
    (1, -3, 1, -7),
    (2, -3, 3, -6),
    (3, -3, 5, -6),
    (4, -2, 7, -4),
    (5, -2, 7, -3),
    (4, -3, 6, -6),
    (3, -3, 5, -6),
    (2, -3, 2, -7),
    (1, -3, 1, -7),
];

fn is_calling(frame: usize) -> bool {
    frame % 4 >= 2
}

pub(super) fn waving(pen: &mut Pen, o: Origin, frame: usize) {
    let bounce = BOUNCE[frame];
    standing_body(pen, o, bounce, |pen, at| {
        if is_calling(frame) {
            face::open_mouth(pen, at, 3);
        }
    });

    let p = pen.palette();
    front_left_arm(pen, o.shifted(0, bounce), 3);

    let (sx, sy) = (23, 17 + bounce);
    let (edx, edy, hdx, hdy) = WAVE[frame];
    let elbow = (sx + edx, sy + edy);
    let (hx, hy) = (sx + hdx, sy + hdy);
    pen.thick_line(o, (sx, sy), elbow, p.shirt, p.shirt_highlight);
    pen.thick_line(o, elbow, (hx, hy), p.skin, p.skin_highlight);
    pen.dot(o.x + hx, o.y + hy, p.skin);
    pen.dot(o.x + hx + 1, o.y + hy, p.skin_highlight);
    pen.dot(o.x + hx, o.y + hy + 1, p.skin_highlight);
}

// --- pump up ---

const PUMP_BOUNCE: Curve = [0, 0, 0, -1, -1, -2, -2, -1, -2, -1, 0, -1, -1, -2, -2, -1];
const PUMP: Curve = [0, 0, 0, 1, 1, 2, 2, 2, 2, 3, 0, 1, 1, 2, 2, 2];

pub(super) fn pump_up(pen: &mut Pen, o: Origin, frame: usize) {
    let bounce = PUMP_BOUNCE[frame];
    let pump = PUMP[frame];
    standing_body(pen, o, bounce, |pen, at| {
        if pump == 2 {
            face::open_mouth(pen, at, 4);
        }
    });

    let at = o.shifted(0, bounce);
    match pump {
        0 => front_arms_at_sides(pen, at, 2),
        2 => fist_overhead(pen, at),
        _ => fists_rising(pen, at),
    }
}

fn fists_rising(pen: &mut Pen, at: Origin) {
    let p = pen.palette();
    let pixels = [
        (7, 17, p.shirt_shadow),
        (8, 17, p.shirt),
        (6, 16, p.shirt_shadow),
        (7, 16, p.shirt),
        (6, 15, p.skin_shadow),
        (7, 14, p.skin),
        (7, 13, p.skin),
        (8, 13, p.skin_highlight),
        (23, 17, p.shirt),
        (24, 17, p.shirt_highlight),
        (24, 16, p.shirt),
        (25, 16, p.shirt_highlight),
        (25, 15, p.skin),
        (24, 14, p.skin_highlight),
        (24, 13, p.skin),
        (23, 13, p.skin_shadow),
    ];
    for (x, y, c) in pixels {
        pen.dot(at.x + x, at.y + y, c);
    }
}

fn fist_overhead(pen: &mut Pen, at: Origin) {
    let p = pen.palette();
    let pixels = [
        (7, 17, p.shirt_shadow),
        (8, 17, p.shirt),
        (6, 16, p.shirt_shadow),
        (7, 15, p.shirt),
        (7, 14, p.skin),
        (8, 14, p.skin_highlight),
        (23, 17, p.shirt),
        (24, 17, p.shirt_highlight),
        (24, 16, p.shirt),
        (25, 15, p.shirt_highlight),
        (25, 14, p.skin),
        (25, 13, p.skin),
        (25, 12, p.skin_highlight),
        (24, 11, p.skin_highlight),
        (24, 10, p.skin),
        (25, 10, p.skin_highlight),
        (24, 9, p.skin),
        (25, 9, p.skin_highlight),
    ];
    for (x, y, c) in pixels {
        pen.dot(at.x + x, at.y + y, c);
    }
}

// --- arm circles ---

const BOB: Curve = [0, 0, 0, 0, -1, -1, 0, 0, 0, 0, 0, 0, -1, -1, 0, 0];
const CIRCLE_RADIUS: f64 = 5.0;

pub(super) fn arm_circles(pen: &mut Pen, o: Origin, frame: usize) {
    let bob = BOB[frame];
    standing_body(pen, o, bob, |_, _| {});

    let p = pen.palette();
    let at = o.shifted(0, bob);
    let angle = cycle_angle(frame);
    let (cos, sin) = (angle.cos(), angle.sin());

    // Both hands rise together; the left one mirrors the right across the body.
    let left = (9, 18);
    let left_hand = (
        left.0 + round_px(-CIRCLE_RADIUS * cos),
        left.1 + round_px(-CIRCLE_RADIUS * sin),
    );
    let left_elbow = (
        (left.0 + left_hand.0).div_euclid(2),
        (left.1 + left_hand.1).div_euclid(2),
    );
    pen.thick_line(at, left, left_elbow, p.shirt_shadow, p.shirt);
    pen.thick_line(at, left_elbow, left_hand, p.skin_shadow, p.skin);

    let right = (22, 18);
    let right_hand = (
        right.0 + round_px(CIRCLE_RADIUS * cos),
        right.1 + round_px(-CIRCLE_RADIUS * sin),
    );
    let right_elbow = (
        (right.0 + right_hand.0).div_euclid(2),
        (right.1 + right_hand.1).div_euclid(2),
    );
    pen.thick_line(at, right, right_elbow, p.shirt, p.shirt_highlight);
    pen.thick_line(at, right_elbow, right_hand, p.skin, p.skin_highlight);
}

// --- wondering ---

const GAZE: Curve = [-1, -1, -1, -1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0];

pub(super) fn wondering(pen: &mut Pen, o: Origin, frame: usize) {
    let breath = BREATH[frame];
    standing_body(pen, o, breath, |pen, at| match Blink::at(frame, BLINK_START) {
        Some(stage) => face::blink(pen, at, stage),
        None => face::glance(pen, at, Gaze::from_offset(GAZE[frame])),
    });
    front_arms_at_sides(pen, o.shifted(0, breath), 3);
}

// --- neck stretch ---

const TILT: Curve = [0, 0, -1, -2, -2, -2, -2, -2, -2, -2, -1, 0, 0, 0, 0, 0];

pub(super) fn neck_stretch(pen: &mut Pen, o: Origin, frame: usize) {
    let tilt = TILT[frame];
    let head = o.shifted(tilt, 0);
    front_hair(pen, head);
    front_head(pen, head);
    if tilt.abs() == 2 {
        face::relaxed_eyes(pen, head);
    }
    front_neck(pen, o);
    front_shirt(pen, o);
    front_logo(pen, o);
    front_pants(pen, o);
    front_shoes(pen, o);

    let p = pen.palette();
    if tilt < 0 {
        // left hand pulls the head over
        front_right_arm(pen, o, 3);
        let pixels = [
            (7, 17, p.shirt_shadow),
            (8, 17, p.shirt),
            (8, 16, p.shirt),
            (9, 15, p.skin),
            (10, 14, p.skin),
            (11, 13, p.skin_shadow),
            (11 + tilt, 11, p.skin_shadow),
            (10 + tilt, 11, p.skin),
        ];
        for (x, y, c) in pixels {
            pen.dot(o.x + x, o.y + y, c);
        }
    } else if tilt > 0 {
        front_left_arm(pen, o, 3);
        let pixels = [
            (23, 17, p.shirt),
            (24, 17, p.shirt_highlight),
            (23, 16, p.shirt),
            (22, 15, p.skin),
            (21, 14, p.skin),
            (20, 13, p.skin_highlight),
            (20 + tilt, 11, p.skin),
            (21 + tilt, 11, p.skin_highlight),
        ];
        for (x, y, c) in pixels {
            pen.dot(o.x + x, o.y + y, c);
        }
    } else {
        front_arms_at_sides(pen, o, 3);
    }
}

// --- squats ---

const SQUAT_DEPTH: Curve = [0, 0, 1, 2, 3, 4, 5, 5, 4, 3, 2, 1, 0, 0, 0, 0];

pub(super) fn squats(pen: &mut Pen, o: Origin, frame: usize) {
    let p = pen.palette();
    let depth = SQUAT_DEPTH[frame];
    front_upper_body(pen, o.shifted(0, depth));

    if depth > 0 {
        // arms held out in front for balance
        let at = o.shifted(0, depth);
        for dy in 0..2 {
            pen.dot(at.x + 6, at.y + 18 + dy, p.shirt_shadow);
            pen.dot(at.x + 7, at.y + 18 + dy, p.shirt);
            pen.dot(at.x + 24, at.y + 18 + dy, p.shirt);
            pen.dot(at.x + 25, at.y + 18 + dy, p.shirt_highlight);
        }
        pen.dot(at.x + 5, at.y + 19, p.skin_shadow);
        pen.dot(at.x + 4, at.y + 19, p.skin);
        pen.dot(at.x + 26, at.y + 19, p.skin);
        pen.dot(at.x + 27, at.y + 19, p.skin_highlight);
    } else {
        front_arms_at_sides(pen, o, 3);
    }

    let spread = depth / 2;
    for y in 24 + depth..28 {
        for leg_x in [10 - spread, 18 + spread] {
            for x in leg_x..leg_x + 4 {
                let c = if x == leg_x { p.pants_shadow } else { p.pants };
                pen.dot(o.x + x, o.y + y, c);
            }
        }
    }

    for x in 8 - spread..14 - spread {
        let c = if x == 8 - spread { p.shoe_highlight } else { p.shoe };
        pen.dot(o.x + x, o.y + 28, c);
        if x <= 12 - spread {
            pen.dot(o.x + x, o.y + 29, c);
        }
    }
    for x in 18 + spread..24 + spread {
        let c = if x == 23 + spread { p.shoe_highlight } else { p.shoe };
        pen.dot(o.x + x, o.y + 28, c);
        if x >= 19 + spread {
            pen.dot(o.x + x, o.y + 29, c);
        }
    }
}

// --- calf raises ---

const HEEL_LIFT: Curve = [0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0];

pub(super) fn calf_raises(pen: &mut Pen, o: Origin, frame: usize) {
    let p = pen.palette();
    let lift = HEEL_LIFT[frame];
    let raised = o.shifted(0, -lift);
    front_upper_body(pen, raised);
    front_arms_at_sides(pen, raised, 3);

    // legs stretch from the raised hips down to the planted toes
    for y in 24 - lift..28 {
        for x in 10..22 {
            if y >= 26 && (x == 15 || x == 16) {
                continue;
            }
            let c = if x == 10 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }

    if lift > 0 {
        for x in (11..14).chain(18..21) {
            pen.dot(o.x + x, o.y + 29, p.shoe);
        }
        for x in (10..14).chain(18..22) {
            pen.dot(o.x + x, o.y + 28, p.shoe);
        }
    } else {
        front_shoes(pen, o);
    }
}
