//! Sprite palette: named colours shared by every drawing routine.
//!
//! The palette is built once (defaults plus optional overrides from the
//! manifest) and then only ever passed around by shared reference.

use std::collections::BTreeMap;

use crate::error::{Result, SpriteError};

use super::Colour;

/// Every colour used by the sprite renderer, keyed by its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub skin: Colour,
    pub skin_shadow: Colour,
    pub skin_highlight: Colour,

    pub hair: Colour,
    pub hair_highlight: Colour,

    pub shirt: Colour,
    pub shirt_shadow: Colour,
    pub shirt_highlight: Colour,

    pub logo: Colour,
    pub logo_shadow: Colour,
    pub logo_highlight: Colour,
    pub logo_outline: Colour,

    pub pants: Colour,
    pub pants_shadow: Colour,

    pub shoe: Colour,
    pub shoe_highlight: Colour,

    pub outline: Colour,
    pub white: Colour,

    pub mug: Colour,
    pub mug_shade: Colour,
    pub mug_dark: Colour,
    pub coffee: Colour,
    pub steam_light: Colour,
    pub steam_dark: Colour,

    pub chair_seat: Colour,
    pub chair_frame: Colour,
    pub chair_light: Colour,
    pub chair_wheel: Colour,
    pub chair_cushion: Colour,

    pub desk_top: Colour,
    pub desk_leg: Colour,
    pub desk_highlight: Colour,

    pub wall: Colour,
    pub wall_shade: Colour,
    pub wall_highlight: Colour,
}

impl Palette {
    /// Names accepted by [`Palette::get`] and manifest overrides.
    pub const NAMES: [&'static str; 35] = [
        "skin",
        "skin_shadow",
        "skin_highlight",
        "hair",
        "hair_highlight",
        "shirt",
        "shirt_shadow",
        "shirt_highlight",
        "logo",
        "logo_shadow",
        "logo_highlight",
        "logo_outline",
        "pants",
        "pants_shadow",
        "shoe",
        "shoe_highlight",
        "outline",
        "white",
        "mug",
        "mug_shade",
        "mug_dark",
        "coffee",
        "steam_light",
        "steam_dark",
        "chair_seat",
        "chair_frame",
        "chair_light",
        "chair_wheel",
        "chair_cushion",
        "desk_top",
        "desk_leg",
        "desk_highlight",
        "wall",
        "wall_shade",
        "wall_highlight",
    ];

    /// The developer character's palette: navy shirt, orange logo.
    pub const fn developer() -> Self {
        Self {
            skin: Colour::rgb(0xF5, 0xD0, 0xA9),
            skin_shadow: Colour::rgb(0xD4, 0xA5, 0x74),
            skin_highlight: Colour::rgb(0xFF, 0xE0, 0xBD),

            hair: Colour::rgb(0x4A, 0x33, 0x28),
            hair_highlight: Colour::rgb(0x6B, 0x4A, 0x3A),

            shirt: Colour::rgb(0x2C, 0x3E, 0x50),
            shirt_shadow: Colour::rgb(0x1A, 0x25, 0x30),
            shirt_highlight: Colour::rgb(0x3D, 0x55, 0x6E),

            logo: Colour::rgb(0xFF, 0x99, 0x33),
            logo_shadow: Colour::rgb(0xCC, 0x66, 0x00),
            logo_highlight: Colour::rgb(0xFF, 0xBB, 0x77),
            logo_outline: Colour::rgb(0x22, 0x22, 0x22),

            pants: Colour::rgb(0x3B, 0x3B, 0x5C),
            pants_shadow: Colour::rgb(0x2A, 0x2A, 0x45),

            shoe: Colour::rgb(0x44, 0x44, 0x44),
            shoe_highlight: Colour::rgb(0x66, 0x66, 0x66),

            outline: Colour::rgb(0x22, 0x22, 0x22),
            white: Colour::rgb(0xFF, 0xFF, 0xFF),

            mug: Colour::rgb(0xEE, 0xEE, 0xE8),
            mug_shade: Colour::rgb(0xCC, 0xCC, 0xC0),
            mug_dark: Colour::rgb(0xAA, 0xAA, 0x9E),
            coffee: Colour::rgb(0x6B, 0x3A, 0x1A),
            steam_light: Colour::new(0xDD, 0xDD, 0xDD, 180),
            steam_dark: Colour::new(0xCC, 0xCC, 0xCC, 120),

            chair_seat: Colour::rgb(0x33, 0x33, 0x33),
            chair_frame: Colour::rgb(0x55, 0x55, 0x55),
            chair_light: Colour::rgb(0x6A, 0x6A, 0x6A),
            chair_wheel: Colour::rgb(0x22, 0x22, 0x22),
            chair_cushion: Colour::rgb(0x44, 0x44, 0x44),

            desk_top: Colour::rgb(0x8B, 0x6B, 0x4A),
            desk_leg: Colour::rgb(0x6B, 0x4E, 0x37),
            desk_highlight: Colour::rgb(0xA8, 0x85, 0x60),

            wall: Colour::rgb(0x9E, 0x9E, 0xA8),
            wall_shade: Colour::rgb(0x85, 0x85, 0x90),
            wall_highlight: Colour::rgb(0xB5, 0xB5, 0xBE),
        }
    }

    /// Build a palette from the defaults with hex overrides applied.
    ///
    /// Unknown names and malformed hex values are configuration errors.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self> {
        let mut palette = Self::developer();

        for (name, value) in overrides {
            let colour = Colour::from_hex(value).map_err(|e| SpriteError::Config {
                message: format!("palette entry '{}': {}", name, e),
                help: None,
            })?;

            let Some(slot) = palette.slot_mut(name) else {
                return Err(SpriteError::Config {
                    message: format!("unknown palette entry '{}'", name),
                    help: Some(format!("Known entries: {}", Self::NAMES.join(", "))),
                });
            };
            *slot = colour;
        }

        Ok(palette)
    }

    /// Look up a colour by its role name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.entries()
            .into_iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, colour)| colour)
    }

    /// All entries in [`Palette::NAMES`] order.
    pub fn entries(&self) -> [(&'static str, Colour); 35] {
        [
            ("skin", self.skin),
            ("skin_shadow", self.skin_shadow),
            ("skin_highlight", self.skin_highlight),
            ("hair", self.hair),
            ("hair_highlight", self.hair_highlight),
            ("shirt", self.shirt),
            ("shirt_shadow", self.shirt_shadow),
            ("shirt_highlight", self.shirt_highlight),
            ("logo", self.logo),
            ("logo_shadow", self.logo_shadow),
            ("logo_highlight", self.logo_highlight),
            ("logo_outline", self.logo_outline),
            ("pants", self.pants),
            ("pants_shadow", self.pants_shadow),
            ("shoe", self.shoe),
            ("shoe_highlight", self.shoe_highlight),
            ("outline", self.outline),
            ("white", self.white),
            ("mug", self.mug),
            ("mug_shade", self.mug_shade),
            ("mug_dark", self.mug_dark),
            ("coffee", self.coffee),
            ("steam_light", self.steam_light),
            ("steam_dark", self.steam_dark),
            ("chair_seat", self.chair_seat),
            ("chair_frame", self.chair_frame),
            ("chair_light", self.chair_light),
            ("chair_wheel", self.chair_wheel),
            ("chair_cushion", self.chair_cushion),
            ("desk_top", self.desk_top),
            ("desk_leg", self.desk_leg),
            ("desk_highlight", self.desk_highlight),
            ("wall", self.wall),
            ("wall_shade", self.wall_shade),
            ("wall_highlight", self.wall_highlight),
        ]
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Colour> {
        let slot = match name {
            "skin" => &mut self.skin,
            "skin_shadow" => &mut self.skin_shadow,
            "skin_highlight" => &mut self.skin_highlight,
            "hair" => &mut self.hair,
            "hair_highlight" => &mut self.hair_highlight,
            "shirt" => &mut self.shirt,
            "shirt_shadow" => &mut self.shirt_shadow,
            "shirt_highlight" => &mut self.shirt_highlight,
            "logo" => &mut self.logo,
            "logo_shadow" => &mut self.logo_shadow,
            "logo_highlight" => &mut self.logo_highlight,
            "logo_outline" => &mut self.logo_outline,
            "pants" => &mut self.pants,
            "pants_shadow" => &mut self.pants_shadow,
            "shoe" => &mut self.shoe,
            "shoe_highlight" => &mut self.shoe_highlight,
            "outline" => &mut self.outline,
            "white" => &mut self.white,
            "mug" => &mut self.mug,
            "mug_shade" => &mut self.mug_shade,
            "mug_dark" => &mut self.mug_dark,
            "coffee" => &mut self.coffee,
            "steam_light" => &mut self.steam_light,
            "steam_dark" => &mut self.steam_dark,
            "chair_seat" => &mut self.chair_seat,
            "chair_frame" => &mut self.chair_frame,
            "chair_light" => &mut self.chair_light,
            "chair_wheel" => &mut self.chair_wheel,
            "chair_cushion" => &mut self.chair_cushion,
            "desk_top" => &mut self.desk_top,
            "desk_leg" => &mut self.desk_leg,
            "desk_highlight" => &mut self.desk_highlight,
            "wall" => &mut self.wall,
            "wall_shade" => &mut self.wall_shade,
            "wall_highlight" => &mut self.wall_highlight,
            _ => return None,
        };
        Some(slot)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::developer()
    }
}
