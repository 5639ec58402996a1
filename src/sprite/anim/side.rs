//! Standing side-view animations and the turning torso rotation.

use crate::sprite::body::{
    front_arms_at_sides, front_pants, front_shoes, front_upper_body, mirrored,
    side_arm_relaxed, side_arm_short, side_head_and_neck, side_sleeve, side_standing_legs,
    side_torso_turning, side_upper_body,
};
use crate::sprite::pen::{round_px, Origin, Pen};
use crate::sprite::props;

use super::Curve;

// --- desk push-ups ---

const PUSHUP_DIP: Curve = [0, 0, 1, 2, 3, 4, 4, 4, 4, 4, 3, 2, 1, 0, 0, 0];

/// Where the hands rest on the desk's front edge.
const DESK_HAND: (i32, i32) = (22, 16);

/// A straight body line leaning from the feet up towards the desk.
struct Lean {
    cos: f64,
    sin: f64,
}

impl Lean {
    const FOOT: (f64, f64) = (1.0, 29.0);

    /// Steeper at the top of the push-up (48 degrees), flatter at the bottom.
    fn for_dip(dip: i32) -> Self {
        let angle = (48.0 - f64::from(dip) * 13.0 / 4.0).to_radians();
        Self {
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    /// Exact point `dist` pixels up the body from the feet.
    fn at(&self, dist: f64) -> (f64, f64) {
        (Self::FOOT.0 + dist * self.cos, Self::FOOT.1 - dist * self.sin)
    }

    /// Pixel `dist` pixels up the body from the feet.
    fn pixel(&self, dist: f64) -> (i32, i32) {
        let (x, y) = self.at(dist);
        (round_px(x), round_px(y))
    }
}

pub(super) fn desk_pushups(pen: &mut Pen, o: Origin, frame: usize) {
    let p = pen.palette();
    let dip = PUSHUP_DIP[frame];
    let lean = Lean::for_dip(dip);

    props::desk(pen, o);

    // feet flat on the floor
    for x in 0..5 {
        let c = if x == 0 { p.shoe_highlight } else { p.shoe };
        pen.dot(o.x + x, o.y + 29, c);
    }
    pen.dot(o.x + 1, o.y + 28, p.shoe);
    pen.dot(o.x + 2, o.y + 28, p.shoe);
    pen.dot(o.x + 3, o.y + 28, p.shoe_highlight);

    // calf, thigh and torso along one straight line
    let (ankle, knee, hip, shoulder) = (lean.at(1.0), lean.at(6.0), lean.at(11.0), lean.at(18.0));
    pen.fill_segment(o, ankle, knee, 2.0, p.pants, p.pants_shadow, p.pants_shadow);
    pen.fill_segment(o, knee, hip, 2.8, p.pants, p.pants_shadow, p.pants_shadow);
    pen.fill_segment(o, hip, shoulder, 4.0, p.shirt, p.shirt_shadow, p.shirt_highlight);

    // logo on the chest, three pixels across the body
    let (perp_x, perp_y) = (-lean.sin, lean.cos);
    let upper = lean.pixel(14.0);
    let lower = lean.pixel(15.0);
    for point in [upper, lower] {
        for j in -1..=1 {
            let x = round_px(f64::from(point.0) + f64::from(j) * perp_x);
            let y = round_px(f64::from(point.1) + f64::from(j) * perp_y);
            let c = if point == upper {
                if j >= 1 {
                    p.logo_highlight
                } else {
                    p.logo
                }
            } else if j >= 0 {
                p.logo
            } else {
                p.logo_shadow
            };
            pen.dot(o.x + x, o.y + y, c);
        }
    }

    let neck = lean.pixel(19.0);
    pen.dot(o.x + neck.0, o.y + neck.1, p.skin);
    pen.dot(o.x + neck.0 + 1, o.y + neck.1, p.skin_highlight);

    leaning_head(pen, o, lean.pixel(22.0));

    // Arms: elbows drop further out of line as the chest nears the desk.
    let shoulder = lean.pixel(18.0);
    let elbow = (
        (shoulder.0 + DESK_HAND.0).div_euclid(2) + 1,
        (shoulder.1 + DESK_HAND.1).div_euclid(2) + (dip * 3).div_euclid(4),
    );
    pen.thick_line(o, shoulder, elbow, p.shirt, p.shirt_highlight);
    pen.thick_line(o, elbow, DESK_HAND, p.skin, p.skin_highlight);
    let (hx, hy) = DESK_HAND;
    pen.dot(o.x + hx, o.y + hy, p.skin);
    pen.dot(o.x + hx, o.y + hy - 1, p.skin_highlight);
    pen.dot(o.x + hx - 1, o.y + hy, p.skin_shadow);
}

/// Right-facing 7×7 head centred on `(hx, hy)`.
fn leaning_head(pen: &mut Pen, o: Origin, (hx, hy): (i32, i32)) {
    let p = pen.palette();
    let (cx, cy) = (o.x + hx, o.y + hy);

    for dy in -3..=3 {
        let reach = if dy == -3 || dy == 3 { 2 } else { 3 };
        for dx in -reach..=reach {
            let c = if dx <= -2 {
                p.skin_shadow
            } else if dx >= 2 {
                p.skin_highlight
            } else {
                p.skin
            };
            pen.dot(cx + dx, cy + dy, c);
        }
    }

    for dx in -1..=1 {
        pen.dot(cx + dx, cy - 5, p.hair);
    }
    for dy in [-4, -3] {
        for dx in -2..=2 {
            let c = if dx >= 1 { p.hair_highlight } else { p.hair };
            pen.dot(cx + dx, cy + dy, c);
        }
    }
    // back of the head
    for dy in -2..=0 {
        pen.dot(cx - 3, cy + dy, p.hair);
        pen.dot(cx - 4, cy + dy, p.hair_highlight);
    }

    pen.dot(cx + 1, cy - 1, p.white);
    pen.dot(cx + 2, cy - 1, p.white);
    pen.dot(cx + 2, cy, p.outline);
    pen.dot(cx + 1, cy, p.white);

    pen.dot(cx + 4, cy, p.skin);
    pen.dot(cx + 4, cy + 1, p.skin_highlight);

    pen.dot(cx + 1, cy + 2, p.skin_shadow);
    pen.dot(cx + 2, cy + 2, p.skin_shadow);
}

// --- wall sit ---

/// Shift that puts the figure's back against the wall.
const WALL_DX: i32 = 8;
const WALL_SQUAT: Curve = [0, 0, 1, 2, 3, 4, 4, 4, 4, 4, 4, 3, 2, 1, 0, 0];

pub(super) fn wall_sit(pen: &mut Pen, o: Origin, frame: usize) {
    let p = pen.palette();
    let squat = WALL_SQUAT[frame];
    let drop = squat.min(2);
    let at = o.shifted(WALL_DX, 0);
    let body = at.shifted(0, drop);

    props::wall(pen, o);
    side_upper_body(pen, body);

    // hands on the thighs
    side_sleeve(pen, body, 3);
    pen.dot(body.x + 15, body.y + 21, p.skin);
    pen.dot(body.x + 14, body.y + 22, p.skin);
    pen.dot(body.x + 13, body.y + 23, p.skin_highlight);

    if squat == 0 {
        side_standing_legs(pen, at);
        return;
    }

    // Knees push forward as the squat deepens; shins stay vertical.
    let hip_y = 23 + drop;
    let knee_x = 11 - (squat + 1);
    for y in hip_y..hip_y + 2 {
        for x in knee_x..14 {
            let c = if x == knee_x { p.pants_shadow } else { p.pants };
            pen.dot(at.x + x, at.y + y, c);
        }
    }
    for y in hip_y + 2..29 {
        for x in knee_x - 1..knee_x + 2 {
            let c = if x == knee_x - 1 { p.pants_shadow } else { p.pants };
            pen.dot(at.x + x, at.y + y, c);
        }
    }
    for x in knee_x - 2..knee_x + 2 {
        let c = if x == knee_x - 2 { p.shoe_highlight } else { p.shoe };
        pen.dot(at.x + x, at.y + 29, c);
    }
}

// --- torso rotation ---

/// 0 = front, 1 = turning left, 2 = left profile, 3 = turning right,
/// 4 = right profile.
const ROTATION_VIEW: Curve = [0, 0, 1, 2, 2, 1, 0, 0, 0, 3, 4, 4, 4, 3, 0, 0];
/// Horizontal shift that keeps the profile torso over the hips.
const PROFILE_DX: i32 = 4;

fn profile(pen: &mut Pen, at: Origin) {
    side_upper_body(pen, at);
    side_arm_relaxed(pen, at);
}

fn half_turned(pen: &mut Pen, at: Origin) {
    side_head_and_neck(pen, at);
    side_torso_turning(pen, at);
    side_arm_short(pen, at);
}

pub(super) fn torso_rotation(pen: &mut Pen, o: Origin, frame: usize) {
    // legs face the viewer throughout
    front_pants(pen, o);
    front_shoes(pen, o);

    let left = o.shifted(PROFILE_DX, 0);
    let right = o.shifted(-PROFILE_DX, 0);
    match ROTATION_VIEW[frame] {
        1 => half_turned(pen, left),
        2 => profile(pen, left),
        3 => mirrored(pen, right, |scratch| half_turned(scratch, Origin::ZERO)),
        4 => mirrored(pen, right, |scratch| profile(scratch, Origin::ZERO)),
        _ => {
            front_upper_body(pen, o);
            front_arms_at_sides(pen, o, 3);
        }
    }
}

// --- reverse lunges ---

const LUNGE_DEPTH: Curve = [0, 0, 1, 2, 3, 4, 4, 3, 2, 1, 0, 0, 0, 0, 0, 0];

/// Per-depth pose, indexed by lunge depth 1..=4.
const LUNGE_DROP: [i32; 5] = [0, 0, 1, 2, 3];
const FRONT_KNEE_X: [i32; 5] = [0, 11, 11, 10, 10];
const BACK_KNEE: [(i32, i32); 5] = [(0, 0), (15, 26), (16, 27), (18, 28), (19, 28)];
const BACK_FOOT_X: [i32; 5] = [0, 16, 18, 20, 22];
/// The planted front foot's centre column.
const FRONT_FOOT_X: i32 = 10;

pub(super) fn reverse_lunges(pen: &mut Pen, o: Origin, frame: usize) {
    let depth = LUNGE_DEPTH[frame] as usize;
    if depth == 0 {
        side_standing_legs(pen, o);
        side_upper_body(pen, o);
        side_arm_short(pen, o);
        return;
    }

    let p = pen.palette();
    let drop = LUNGE_DROP[depth];
    let hip_y = 23 + drop;

    // back leg: thigh down to the knee, shin out to the toes
    let (bkx, bky) = BACK_KNEE[depth];
    let bfx = BACK_FOOT_X[depth];
    pen.fill_segment(
        o,
        (14.0, f64::from(hip_y)),
        (f64::from(bkx), f64::from(bky)),
        1.8,
        p.pants,
        p.pants_shadow,
        p.pants_shadow,
    );
    pen.fill_segment(
        o,
        (f64::from(bkx), f64::from(bky)),
        (f64::from(bfx), 29.0),
        1.2,
        p.pants,
        p.pants_shadow,
        p.pants_shadow,
    );
    pen.dot(o.x + bfx, o.y + 29, p.shoe);
    pen.dot(o.x + bfx + 1, o.y + 29, p.shoe_highlight);

    // front leg: thigh forward to the knee, shin straight down
    let fkx = FRONT_KNEE_X[depth];
    let fky = hip_y + i32::from(depth <= 2);
    for y in fky - 1..=fky {
        for x in fkx - 1..14 {
            let c = if x == fkx - 1 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
    for y in fky + 1..29 {
        for x in FRONT_FOOT_X - 1..=FRONT_FOOT_X + 1 {
            let c = if x == FRONT_FOOT_X - 1 { p.pants_shadow } else { p.pants };
            pen.dot(o.x + x, o.y + y, c);
        }
    }
    for x in FRONT_FOOT_X - 2..=FRONT_FOOT_X + 2 {
        let c = if x == FRONT_FOOT_X - 2 { p.shoe_highlight } else { p.shoe };
        pen.dot(o.x + x, o.y + 29, c);
    }
    pen.dot(o.x + FRONT_FOOT_X - 1, o.y + 28, p.shoe);
    pen.dot(o.x + FRONT_FOOT_X, o.y + 28, p.shoe);

    // upper body stays upright and sinks with the hips
    let body = o.shifted(0, drop);
    side_upper_body(pen, body);
    side_sleeve(pen, body, 4);
    pen.dot(body.x + 15, body.y + 24, p.skin);
    pen.dot(body.x + 14, body.y + 24, p.skin_highlight);
}
