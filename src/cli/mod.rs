pub mod build;
pub mod completions;
pub mod frame;
pub mod init;
pub mod list;
pub mod palette;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::manifest::Manifest;

/// devsprite - Procedural pixel-art generator for the desk-exercise developer
#[derive(Parser, Debug)]
#[command(name = "devsprite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only report warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the character, exercise sheet and README panel
    Build(build::BuildArgs),

    /// Render a single animation frame to PNG
    Frame(frame::FrameArgs),

    /// List the animation rows of the exercise sheet
    List(list::ListArgs),

    /// Print the effective sprite palette
    Palette(palette::PaletteArgs),

    /// Write a devsprite.yaml with the default settings
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Manifest selection shared by the commands that render.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Manifest to load (default: ./devsprite.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<Manifest> {
        Manifest::locate(self.config.as_deref(), Path::new("."))
    }
}
