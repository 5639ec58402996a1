//! Scenery and held objects: coffee mug, steam, office chair, desk and wall.

use super::pen::{Origin, Pen};

/// 5×4 mug with coffee showing on top and a handle on the right.
pub fn coffee_mug(pen: &mut Pen, o: Origin, (mx, my): (i32, i32)) {
    let p = pen.palette();
    let (x0, y0) = (o.x + mx, o.y + my);
    for dy in 0..4 {
        for dx in 0..5 {
            let c = match (dx, dy) {
                (_, 3) | (0, _) => p.mug_shade,
                (4, _) => p.mug_dark,
                _ => p.mug,
            };
            pen.dot(x0 + dx, y0 + dy, c);
        }
    }
    for dx in 1..4 {
        pen.dot(x0 + dx, y0, p.coffee);
    }
    pen.dot(x0 + 5, y0 + 1, p.mug_shade);
    pen.dot(x0 + 5, y0 + 2, p.mug_shade);
}

const SWAY_A: [i32; 8] = [0, 0, 1, 1, 0, 0, -1, -1];
const SWAY_B: [i32; 8] = [0, -1, -1, 0, 0, 1, 1, 0];

fn wisp_alpha(phase: i32) -> u8 {
    (180 - phase * 30).max(40) as u8
}

/// Two wisps rising from a mug at `(mx, my)`, half a cycle apart.
///
/// Each wisp climbs a pixel every two frames and fades out; it is hidden
/// for the last two frames of its 8-frame cycle.
pub fn steam(pen: &mut Pen, o: Origin, (mx, my): (i32, i32), frame: usize) {
    let p = pen.palette();
    let step = frame % 8;

    let phase = step as i32;
    if phase < 6 {
        let c = p.steam_light.with_alpha(wisp_alpha(phase));
        pen.dot(o.x + mx + 1 + SWAY_A[step], o.y + my - 1 - phase / 2, c);
    }

    let phase = ((frame + 4) % 8) as i32;
    if phase < 6 {
        let c = p.steam_dark.with_alpha(wisp_alpha(phase));
        pen.dot(o.x + mx + 3 + SWAY_B[step], o.y + my - 1 - phase / 2, c);
    }
}

/// Office chair seen from the side, backrest on the right.
pub fn office_chair(pen: &mut Pen, o: Origin) {
    let p = pen.palette();

    for x in 19..27 {
        pen.dot(o.x + x, o.y + 29, p.chair_frame);
    }
    for x in [18, 19, 26, 27] {
        pen.dot(o.x + x, o.y + 29, p.chair_wheel);
    }

    for y in 26..29 {
        pen.dot(o.x + 22, o.y + y, p.chair_frame);
        pen.dot(o.x + 23, o.y + y, p.chair_light);
    }

    for y in 23..26 {
        let c = match y {
            23 => p.chair_light,
            25 => p.chair_cushion,
            _ => p.chair_seat,
        };
        for x in 18..27 {
            pen.dot(o.x + x, o.y + y, c);
        }
    }

    for y in 14..24 {
        for x in 25..28 {
            let c = match (x, y) {
                (_, 14) => p.chair_light,
                (25, _) => p.chair_cushion,
                (27, _) => p.chair_light,
                _ => p.chair_seat,
            };
            pen.dot(o.x + x, o.y + y, c);
        }
    }

    // armrest
    for x in 21..26 {
        pen.dot(o.x + x, o.y + 19, p.chair_frame);
        pen.dot(o.x + x, o.y + 20, p.chair_light);
    }
}

/// Desk on the right of the frame; tabletop at y=16, front edge at x=22.
pub fn desk(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for x in 22..31 {
        let top = if x >= 29 { p.desk_highlight } else { p.desk_top };
        pen.dot(o.x + x, o.y + 16, top);
        pen.dot(o.x + x, o.y + 17, p.desk_top);
    }
    for leg_x in [22, 29] {
        for y in 18..30 {
            let lit = if y == 18 { p.desk_highlight } else { p.desk_leg };
            pen.dot(o.x + leg_x, o.y + y, p.desk_leg);
            pen.dot(o.x + leg_x + 1, o.y + y, lit);
        }
    }
}

/// Full-height wall band at x=27..=30.
pub fn wall(pen: &mut Pen, o: Origin) {
    let p = pen.palette();
    for y in 0..32 {
        pen.dot(o.x + 27, o.y + y, p.wall_shade);
        pen.dot(o.x + 28, o.y + y, p.wall);
        pen.dot(o.x + 29, o.y + y, p.wall);
        pen.dot(o.x + 30, o.y + y, p.wall_highlight);
    }
}
