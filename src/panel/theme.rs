//! Retro menu colours.

use crate::types::Colour;

pub const BG: Colour = Colour::rgb(18, 14, 28);
pub const BORDER: Colour = Colour::rgb(120, 100, 160);
pub const BORDER_HI: Colour = Colour::rgb(180, 160, 220);
pub const BORDER_DARK: Colour = Colour::rgb(60, 50, 80);
pub const TITLE: Colour = Colour::rgb(255, 220, 60);
pub const LABEL_A: Colour = Colour::rgb(255, 90, 70);
pub const LABEL_B: Colour = Colour::rgb(90, 200, 255);
pub const LABEL_C: Colour = Colour::rgb(80, 200, 100);
pub const TEXT: Colour = Colour::rgb(200, 195, 210);
pub const DIM: Colour = Colour::rgb(160, 155, 175);
pub const ACCENT: Colour = Colour::rgb(255, 170, 50);
pub const SELECT: Colour = Colour::rgb(60, 220, 90);
pub const DIVIDER: Colour = Colour::rgb(60, 50, 80);

/// Background and text colours of a tag badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagColours {
    pub bg: Colour,
    pub fg: Colour,
}

pub const TAG_MUST: TagColours = TagColours {
    bg: Colour::rgb(180, 40, 30),
    fg: Colour::WHITE,
};
pub const TAG_SHOULD: TagColours = TagColours {
    bg: Colour::rgb(30, 110, 170),
    fg: Colour::WHITE,
};
pub const TAG_DONT: TagColours = TagColours {
    bg: Colour::rgb(55, 55, 65),
    fg: Colour::rgb(140, 140, 150),
};
