//! Frame command: render one animation frame for inspection.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{frame_key, write_png};
use crate::sprite::{render_frame, Animation};

use super::ConfigArgs;

/// Render a single animation frame to PNG
#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Animation name, e.g. `squats` or `DeskPushUps`
    pub animation: Animation,

    /// Frame index (0-15)
    pub frame: usize,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "8")]
    pub scale: u32,

    /// Output file (default: <animation>_f<frame>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: FrameArgs, printer: &Printer) -> Result<()> {
    let palette = args.config.load()?.palette()?;
    let canvas = render_frame(args.animation, args.frame, &palette)?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.png", frame_key(args.animation, args.frame))));
    write_png(&canvas, &path, args.scale)?;

    printer.success(
        "Rendered",
        &format!("{} frame {} to {}", args.animation, args.frame, display_path(&path)),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpriteError;
    use tempfile::tempdir;

    fn frame_args(frame: usize, output: PathBuf) -> FrameArgs {
        FrameArgs {
            animation: Animation::Squats,
            frame,
            scale: 4,
            output: Some(output),
            config: ConfigArgs::default(),
        }
    }

    #[test]
    fn test_frame_writes_scaled_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("squat.png");

        run(frame_args(6, path.clone()), &Printer::new(true)).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (128, 128));
    }

    #[test]
    fn test_frame_out_of_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.png");

        let err = run(frame_args(16, path.clone()), &Printer::new(true)).unwrap_err();
        assert!(matches!(err, SpriteError::Build { .. }));
        assert!(!path.exists());
    }
}
