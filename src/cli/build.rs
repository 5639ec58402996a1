//! Build command implementation.
//!
//! Renders the requested asset groups and writes them under the output
//! directory.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{Result, SpriteError};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::panel::Typeface;
use crate::pipeline::{self, SheetOptions, Written, PANEL_FILE};
use crate::sprite::Animation;

use super::ConfigArgs;

/// Asset groups that can be built on their own.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Character,
    Sheet,
    Panel,
}

/// Generate the character, exercise sheet and README panel
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Build only these groups (repeatable; default: all)
    #[arg(long, value_enum)]
    pub only: Vec<Target>,

    /// Output root (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Worker threads for sheet rendering (default: one per core)
    #[arg(long, short)]
    pub jobs: Option<usize>,

    /// Skip the sheet's JSON metadata
    #[arg(long)]
    pub no_metadata: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl BuildArgs {
    fn wants(&self, target: Target) -> bool {
        self.only.is_empty() || self.only.contains(&target)
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let mut manifest = args.config.load()?;
    if let Some(output) = &args.output {
        manifest.output = output.clone();
    }
    if args.no_metadata {
        manifest.metadata = false;
    }

    let pool = build_thread_pool(args.jobs)?;
    let palette = manifest.palette()?;
    let sprite_dir = manifest.sprite_dir();
    let mut written: Vec<Written> = Vec::new();

    if args.wants(Target::Character) {
        printer.status("Rendering", "developer character");
        written.extend(pipeline::write_character(
            &sprite_dir,
            &palette,
            manifest.character_preview_scale,
        )?);
    }

    if args.wants(Target::Sheet) {
        printer.status(
            "Rendering",
            &format!(
                "exercise sheet ({})",
                plural(Animation::ALL.len(), "animation", "animations")
            ),
        );
        let options = sheet_options(&manifest);
        let output = pool.install(|| pipeline::write_sheet(&sprite_dir, &palette, &options))?;
        written.extend(output.files().cloned());
    }

    if args.wants(Target::Panel) {
        let face = Typeface::discover(&manifest.fonts)?;
        if matches!(face, Typeface::Bitmap) {
            printer.warning("Font", "no monospace font found, using the built-in bitmap font");
        } else {
            printer.info("Font", &face.describe());
        }
        printer.status("Rendering", "class select panel");
        written.push(pipeline::write_panel(
            &manifest.output.join(PANEL_FILE),
            &face,
            manifest.panel_scale,
        )?);
    }

    for file in &written {
        let size = file
            .size
            .map(|(w, h)| printer.dim(&format!("({}x{})", w, h)))
            .unwrap_or_default();
        printer.info("Wrote", &format!("{} {}", display_path(&file.path), size));
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "file", "files"),
            display_path(&manifest.output)
        ),
    );

    Ok(())
}

fn sheet_options(manifest: &Manifest) -> SheetOptions {
    SheetOptions {
        preview_scale: manifest.sheet_preview_scale,
        keyframe_scale: manifest.keyframe_scale,
        keyframes: manifest.effective_keyframes(),
        metadata: manifest.metadata,
    }
}

fn build_thread_pool(jobs: Option<usize>) -> Result<rayon::ThreadPool> {
    if jobs == Some(0) {
        return Err(SpriteError::Config {
            message: "--jobs must be at least 1".to_string(),
            help: None,
        });
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = jobs {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| SpriteError::Build {
        message: format!("Failed to start worker threads: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{CHARACTER_FILE, SHEET_FILE, SHEET_JSON_FILE};
    use tempfile::tempdir;

    fn args(output: PathBuf, only: Vec<Target>) -> BuildArgs {
        BuildArgs {
            only,
            output: Some(output),
            jobs: Some(2),
            no_metadata: false,
            config: ConfigArgs::default(),
        }
    }

    #[test]
    fn test_build_only_character() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("assets");

        run(args(out.clone(), vec![Target::Character]), &Printer::new(true)).unwrap();

        assert!(out.join("developer").join(CHARACTER_FILE).is_file());
        assert!(!out.join("developer").join(SHEET_FILE).exists());
        assert!(!out.join(PANEL_FILE).exists());
    }

    #[test]
    fn test_build_sheet_honours_no_metadata() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("assets");
        let mut build = args(out.clone(), vec![Target::Sheet]);
        build.no_metadata = true;

        run(build, &Printer::new(true)).unwrap();

        let sprites = out.join("developer");
        assert!(sprites.join(SHEET_FILE).is_file());
        assert!(sprites.join("coffee_idle_f05_preview.png").is_file());
        assert!(!sprites.join(SHEET_JSON_FILE).exists());
    }

    #[test]
    fn test_build_reads_manifest() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("devsprite.yaml");
        std::fs::write(&config, "character_preview_scale: 2\npalette:\n  hair: \"#ff0000\"\n").unwrap();
        let out = dir.path().join("art");

        let mut build = args(out.clone(), vec![Target::Character]);
        build.config.config = Some(config);
        run(build, &Printer::new(true)).unwrap();

        let preview = image::open(out.join("developer").join("dev_character_preview.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!(preview.dimensions(), (64, 64));
        assert_eq!(preview.get_pixel(28, 12).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let dir = tempdir().unwrap();
        let mut build = args(dir.path().to_path_buf(), vec![Target::Character]);
        build.jobs = Some(0);
        assert!(matches!(
            run(build, &Printer::new(true)),
            Err(SpriteError::Config { .. })
        ));
    }

    #[test]
    fn test_target_selection() {
        let all = args(PathBuf::from("x"), vec![]);
        assert!(all.wants(Target::Panel));
        let some = args(PathBuf::from("x"), vec![Target::Sheet]);
        assert!(some.wants(Target::Sheet));
        assert!(!some.wants(Target::Panel));
    }
}
