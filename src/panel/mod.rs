//! The "class select" README panel.
//!
//! A fixed 460×370 layout in the style of a retro RPG menu: bevelled
//! border, starred title, three class rows with stat lines and verdicts,
//! and a controls hint. Saved at 2× with nearest-neighbour scaling.

pub mod draw;
mod font;
pub mod theme;

pub use font::{TextSize, Typeface, SYSTEM_FONTS};

use crate::types::{Canvas, Colour};

use draw::{dashed_line, line, outline_rect, star};
use theme::TagColours;

pub const PANEL_WIDTH: u32 = 460;
pub const PANEL_HEIGHT: u32 = 370;
/// Default upscale applied when the panel is saved.
pub const PANEL_SCALE: u32 = 2;

const W: i32 = PANEL_WIDTH as i32;
const H: i32 = PANEL_HEIGHT as i32;

const TITLE: &str = "IS THIS FOR ME?";
const CONTROLS: &str = "▲▼ to select    ENTER to continue";
const FIRST_ROW_Y: i32 = 46;
const STAT_SPACING: i32 = 15;
const VALUE_X: i32 = 210;

/// One selectable class in the menu.
#[derive(Debug, Clone, Copy)]
pub struct ClassRow {
    pub key: char,
    pub name: &'static str,
    pub colour: Colour,
    pub tag: &'static str,
    pub tag_colours: TagColours,
    pub stats: [(&'static str, &'static str); 3],
    pub verdict: &'static [&'static str],
}

pub const CLASSES: [ClassRow; 3] = [
    ClassRow {
        key: 'A',
        name: "THE BROKEN VETERAN",
        colour: theme::LABEL_A,
        tag: "MUST USE",
        tag_colours: theme::TAG_MUST,
        stats: [
            ("Age", "30+"),
            ("Got children", "yes"),
            ("Body status", "back pain, neck crunches"),
        ],
        verdict: &["you need this yesterday"],
    },
    ClassRow {
        key: 'B',
        name: "THE TICKING CLOCK",
        colour: theme::LABEL_B,
        tag: "SHOULD USE",
        tag_colours: theme::TAG_SHOULD,
        stats: [
            ("Age", "25-30"),
            ("Got children", "not yet"),
            ("Body status", "fine (for now)"),
        ],
        verdict: &["install now, thank yourself", "in 6 months"],
    },
    ClassRow {
        key: 'C',
        name: "THE YOUNG BLOKE",
        colour: theme::LABEL_C,
        tag: "DON'T USE",
        tag_colours: theme::TAG_DONT,
        stats: [("Age", "< 25"), ("Got children", "lol no"), ("Body status", "runs 5km at dawn")],
        verdict: &["why are you even here?"],
    },
];

/// Render the panel at native size; the first class is selected.
pub fn render_panel(face: &Typeface) -> Canvas {
    let mut canvas = Canvas::filled(PANEL_WIDTH, PANEL_HEIGHT, theme::BG);

    bevel(&mut canvas, 6, 6, W - 12, H - 12);
    title(&mut canvas, face);

    let mut y = FIRST_ROW_Y;
    for (i, class) in CLASSES.iter().enumerate() {
        let verdict_y = class_row(&mut canvas, face, class, y, i == 0);
        if i + 1 < CLASSES.len() {
            let divider_y = verdict_y + 22 + 10 * (class.verdict.len() as i32 - 1);
            dashed_line(&mut canvas, 20, W - 20, divider_y, theme::DIVIDER);
            y = divider_y + 10;
        }
    }

    let cw = face.text_width(CONTROLS, TextSize::Small);
    let cx = ((W as f32 - cw) / 2.0).floor() as i32;
    face.draw(&mut canvas, cx, H - 24, CONTROLS, TextSize::Small, theme::DIM);

    canvas
}

fn bevel(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32) {
    outline_rect(canvas, x, y, x + w, y + h, theme::BORDER_DARK);
    outline_rect(canvas, x + 2, y + 2, x + w - 2, y + h - 2, theme::BORDER);
    line(canvas, (x + 2, y + 2), (x + w - 2, y + 2), theme::BORDER_HI);
    line(canvas, (x + 2, y + 2), (x + 2, y + h - 2), theme::BORDER_HI);
    line(canvas, (x + 3, y + h - 2), (x + w - 2, y + h - 2), theme::BORDER_DARK);
    line(canvas, (x + w - 2, y + 3), (x + w - 2, y + h - 2), theme::BORDER_DARK);
    for (cx, cy) in [(x + 1, y + 1), (x + w - 1, y + 1), (x + 1, y + h - 1), (x + w - 1, y + h - 1)] {
        canvas.put(cx, cy, theme::BORDER);
    }
}

fn title(canvas: &mut Canvas, face: &Typeface) {
    let tw = face.text_width(TITLE, TextSize::Title);
    let tx = ((W as f32 - tw) / 2.0).floor();
    face.draw(canvas, tx as i32, 16, TITLE, TextSize::Title, theme::TITLE);
    star(canvas, (tx - 12.0) as i32, 24, theme::TITLE);
    star(canvas, (tx + tw + 12.0) as i32, 24, theme::TITLE);
    line(canvas, (20, 36), (W - 20, 36), theme::BORDER);
}

/// Right-pointing arrow, 5 columns shrinking from 9 pixels to 1.
fn selector(canvas: &mut Canvas, x: i32, y: i32) {
    for i in 0..5 {
        line(canvas, (x + i, y - i + 4), (x + i, y + i - 4), theme::SELECT);
    }
}

fn tag(canvas: &mut Canvas, face: &Typeface, x: i32, y: i32, text: &str, colours: TagColours) {
    let tw = face.text_width(text, TextSize::Tag) as i32;
    let w = tw + 10;
    let h = 14;
    canvas.fill_rect(x + 1, y, x + w - 1, y + h, colours.bg);
    canvas.fill_rect(x, y + 1, x + w, y + h - 1, colours.bg);
    face.draw(canvas, x + 5, y + 2, text, TextSize::Tag, colours.fg);
}

/// Draw one class block at `y`; returns the verdict line's y.
fn class_row(canvas: &mut Canvas, face: &Typeface, class: &ClassRow, y: i32, selected: bool) -> i32 {
    if selected {
        selector(canvas, 16, y + 8);
    }
    let label = format!("[{}]", class.key);
    face.draw(canvas, 30, y, &label, TextSize::Medium, class.colour);
    canvas.fill_rect(56, y + 1, 60, y + 11, class.colour);
    face.draw(canvas, 62, y, class.name, TextSize::Medium, class.colour);

    let tag_x = 62 + face.text_width(class.name, TextSize::Medium) as i32 + 8;
    tag(canvas, face, tag_x, y, class.tag, class.tag_colours);

    for (i, (key, value)) in class.stats.iter().enumerate() {
        let sy = y + 20 + i as i32 * STAT_SPACING;
        line(canvas, (36, y + 16), (36, sy + 6), theme::DIM);
        line(canvas, (36, sy + 6), (42, sy + 6), theme::DIM);
        face.draw(canvas, 46, sy, key, TextSize::Small, theme::DIM);
        face.draw(canvas, VALUE_X, sy, value, TextSize::Small, theme::TEXT);
    }

    let vy = y + 20 + class.stats.len() as i32 * STAT_SPACING + 4;
    line(canvas, (36, vy - 10), (36, vy + 6), theme::DIM);
    face.draw(canvas, 36, vy + 2, "└►", TextSize::Small, theme::ACCENT);
    face.draw(canvas, 58, vy, "VERDICT:", TextSize::Medium, theme::ACCENT);
    for (i, text) in class.verdict.iter().enumerate() {
        face.draw(canvas, 140, vy + 14 * i as i32, text, TextSize::Medium, class.colour);
    }
    vy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap_panel() -> Canvas {
        render_panel(&Typeface::Bitmap)
    }

    #[test]
    fn test_panel_size_and_scale() {
        let panel = bitmap_panel();
        assert_eq!(panel.size(), (460, 370));
        assert_eq!(panel.scaled(PANEL_SCALE).size(), (920, 740));
    }

    #[test]
    fn test_panel_is_opaque() {
        assert!(bitmap_panel().pixels().iter().all(|c| c.is_opaque()));
    }

    #[test]
    fn test_bevel_layers() {
        let panel = bitmap_panel();
        assert_eq!(panel.get(0, 0), Some(theme::BG));
        assert_eq!(panel.get(6, 6), Some(theme::BORDER_DARK));
        assert_eq!(panel.get(7, 7), Some(theme::BORDER));
        assert_eq!(panel.get(8, 8), Some(theme::BORDER_HI));
        assert_eq!(panel.get(8, 362), Some(theme::BORDER_HI));
        assert_eq!(panel.get(9, 362), Some(theme::BORDER_DARK));
        assert_eq!(panel.get(452, 9), Some(theme::BORDER_DARK));
        assert_eq!(panel.get(453, 363), Some(theme::BORDER));
        assert_eq!(panel.get(454, 364), Some(theme::BORDER_DARK));
    }

    #[test]
    fn test_title_rule_and_stars() {
        let panel = bitmap_panel();
        assert_eq!(panel.get(20, 36), Some(theme::BORDER));
        assert_eq!(panel.get(440, 36), Some(theme::BORDER));
        assert_eq!(panel.get(19, 36), Some(theme::BG));

        // 15 glyphs of 6px: tx = (460 - 90) / 2
        assert_eq!(panel.get(185 - 12, 24), Some(theme::TITLE));
        assert_eq!(panel.get(185 + 90 + 12, 22), Some(theme::TITLE));
    }

    #[test]
    fn test_only_first_row_has_selector() {
        let panel = bitmap_panel();
        assert_eq!(panel.get(16, 50), Some(theme::SELECT));
        assert_eq!(panel.get(16, 58), Some(theme::SELECT));
        assert_eq!(panel.get(20, 54), Some(theme::SELECT));
        assert_eq!(panel.get(20, 53), Some(theme::BG));
        assert!(!panel.pixels().iter().skip(70 * 460).any(|&c| c == theme::SELECT));
    }

    #[test]
    fn test_colour_bars_and_dividers() {
        let panel = bitmap_panel();
        // rows start at 46, 147 and 258
        for (y, colour) in [(46, theme::LABEL_A), (147, theme::LABEL_B), (258, theme::LABEL_C)] {
            assert_eq!(panel.get(56, y + 1), Some(colour));
            assert_eq!(panel.get(60, y + 11), Some(colour));
            assert_eq!(panel.get(58, y), Some(theme::BG));
        }
        for y in [137, 248] {
            assert_eq!(panel.get(20, y), Some(theme::DIVIDER));
            assert_eq!(panel.get(24, y), Some(theme::BG));
            assert_eq!(panel.get(26, y), Some(theme::DIVIDER));
        }
    }

    #[test]
    fn test_tag_badge_has_clipped_corners() {
        let panel = bitmap_panel();
        // "THE BROKEN VETERAN" is 18 glyphs wide
        let x = 62 + 18 * 6 + 8;
        let bg = theme::TAG_MUST.bg;
        assert_eq!(panel.get(x, 46), Some(theme::BG));
        assert_eq!(panel.get(x + 1, 46), Some(bg));
        assert_eq!(panel.get(x, 47), Some(bg));
        assert_eq!(panel.get(x + 58, 59), Some(bg));
        assert_eq!(panel.get(x + 58, 60), Some(theme::BG));
    }

    #[test]
    fn test_stat_connectors() {
        let panel = bitmap_panel();
        assert_eq!(panel.get(36, 62), Some(theme::DIM));
        assert_eq!(panel.get(42, 72), Some(theme::DIM));
        assert_eq!(panel.get(43, 72), Some(theme::BG));
    }

    #[test]
    fn test_text_uses_row_colour() {
        let panel = bitmap_panel();
        let count = |c: Colour| panel.pixels().iter().filter(|&&p| p == c).count();
        assert!(count(theme::LABEL_B) > 100);
        assert!(count(theme::ACCENT) > 50);
        assert!(count(theme::TAG_DONT.fg) > 10);
    }
}
