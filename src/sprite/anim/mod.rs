//! The exercise animation catalogue.
//!
//! Every animation is 16 frames of a 32×32 cell. A composer draws one
//! frame at the given origin; it reads only its own curves at index
//! `frame` and never looks at other frames, so cells can be rendered in
//! any order or in parallel.

mod seated;
mod side;
mod standing;

use std::fmt;
use std::str::FromStr;

use crate::error::SpriteError;

use super::pen::{Origin, Pen};

/// Frames per animation row.
pub const FRAME_COUNT: usize = 16;

/// A per-frame integer curve. The array length pins it to [`FRAME_COUNT`].
pub type Curve = [i32; FRAME_COUNT];

/// Frames exported as enlarged previews by default.
pub const KEYFRAMES: [usize; 6] = [0, 4, 5, 6, 8, 12];

/// One row of the exercise sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Animation {
    CoffeeIdle,
    Waving,
    PumpUp,
    ChairDips,
    ArmCircles,
    Wondering,
    KneeRaises,
    SpinalTwist,
    GluteSqueeze,
    ShoulderRolls,
    LegExtensions,
    NeckStretch,
    DeskPushups,
    Squats,
    CalfRaises,
    WallSit,
    TorsoRotation,
    ReverseLunges,
}

impl Animation {
    /// All animations in sheet-row order.
    pub const ALL: [Animation; 18] = [
        Animation::CoffeeIdle,
        Animation::Waving,
        Animation::PumpUp,
        Animation::ChairDips,
        Animation::ArmCircles,
        Animation::Wondering,
        Animation::KneeRaises,
        Animation::SpinalTwist,
        Animation::GluteSqueeze,
        Animation::ShoulderRolls,
        Animation::LegExtensions,
        Animation::NeckStretch,
        Animation::DeskPushups,
        Animation::Squats,
        Animation::CalfRaises,
        Animation::WallSit,
        Animation::TorsoRotation,
        Animation::ReverseLunges,
    ];

    /// File-name stem, e.g. `coffee_idle`.
    pub fn name(&self) -> &'static str {
        match self {
            Animation::CoffeeIdle => "coffee_idle",
            Animation::Waving => "waving",
            Animation::PumpUp => "pump_up",
            Animation::ChairDips => "chair_dips",
            Animation::ArmCircles => "arm_circles",
            Animation::Wondering => "wondering",
            Animation::KneeRaises => "knee_raises",
            Animation::SpinalTwist => "spinal_twist",
            Animation::GluteSqueeze => "glute_squeeze",
            Animation::ShoulderRolls => "shoulder_rolls",
            Animation::LegExtensions => "leg_extensions",
            Animation::NeckStretch => "neck_stretch",
            Animation::DeskPushups => "desk_pushups",
            Animation::Squats => "squats",
            Animation::CalfRaises => "calf_raises",
            Animation::WallSit => "wall_sit",
            Animation::TorsoRotation => "torso_rotation",
            Animation::ReverseLunges => "reverse_lunges",
        }
    }

    /// Name the game uses for this animation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Animation::CoffeeIdle => "Coffee",
            Animation::Waving => "Wave",
            Animation::PumpUp => "PumpUp",
            Animation::ChairDips => "ChairDips",
            Animation::ArmCircles => "ArmCircles",
            Animation::Wondering => "Wondering",
            Animation::KneeRaises => "KneeRaises",
            Animation::SpinalTwist => "SpinalTwist",
            Animation::GluteSqueeze => "GluteSqueeze",
            Animation::ShoulderRolls => "ShoulderRolls",
            Animation::LegExtensions => "LegExtensions",
            Animation::NeckStretch => "NeckStretch",
            Animation::DeskPushups => "DeskPushUps",
            Animation::Squats => "Squats",
            Animation::CalfRaises => "CalfRaises",
            Animation::WallSit => "WallSit",
            Animation::TorsoRotation => "TorsoRotation",
            Animation::ReverseLunges => "ReverseLunges",
        }
    }

    /// Sheet row index.
    pub fn row(&self) -> usize {
        *self as usize
    }

    /// Look up an animation by file-name stem or display name
    /// (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|anim| {
            anim.name().eq_ignore_ascii_case(name) || anim.display_name().eq_ignore_ascii_case(name)
        })
    }

    /// Draw frame `frame` (taken modulo [`FRAME_COUNT`]) at `o`.
    pub fn compose(&self, pen: &mut Pen, o: Origin, frame: usize) {
        let frame = frame % FRAME_COUNT;
        match self {
            Animation::CoffeeIdle => standing::coffee_idle(pen, o, frame),
            Animation::Waving => standing::waving(pen, o, frame),
            Animation::PumpUp => standing::pump_up(pen, o, frame),
            Animation::ChairDips => seated::chair_dips(pen, o, frame),
            Animation::ArmCircles => standing::arm_circles(pen, o, frame),
            Animation::Wondering => standing::wondering(pen, o, frame),
            Animation::KneeRaises => seated::knee_raises(pen, o, frame),
            Animation::SpinalTwist => seated::spinal_twist(pen, o, frame),
            Animation::GluteSqueeze => seated::glute_squeeze(pen, o, frame),
            Animation::ShoulderRolls => seated::shoulder_rolls(pen, o, frame),
            Animation::LegExtensions => seated::leg_extensions(pen, o, frame),
            Animation::NeckStretch => standing::neck_stretch(pen, o, frame),
            Animation::DeskPushups => side::desk_pushups(pen, o, frame),
            Animation::Squats => standing::squats(pen, o, frame),
            Animation::CalfRaises => standing::calf_raises(pen, o, frame),
            Animation::WallSit => side::wall_sit(pen, o, frame),
            Animation::TorsoRotation => side::torso_rotation(pen, o, frame),
            Animation::ReverseLunges => side::reverse_lunges(pen, o, frame),
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Animation {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SpriteError::Build {
            message: format!("unknown animation '{}'", s),
            help: Some("Run `devsprite list` to see available animations".to_string()),
        })
    }
}

/// Rotation angle of a 16-step cycle, in radians.
fn cycle_angle(frame: usize) -> f64 {
    frame as f64 * 2.0 * std::f64::consts::PI / FRAME_COUNT as f64
}
