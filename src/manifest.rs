//! Project manifest (devsprite.yaml) parsing.
//!
//! Every field is optional; an empty or missing manifest reproduces the
//! stock asset set under `assets/`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpriteError};
use crate::panel::PANEL_SCALE;
use crate::sprite::{FRAME_COUNT, KEYFRAMES};
use crate::types::Palette;

/// Manifest file looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "devsprite.yaml";

/// Project manifest loaded from devsprite.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Output root; sprite assets go in its `developer/` subdirectory.
    pub output: PathBuf,

    /// Upscale of the whole-sheet preview.
    pub sheet_preview_scale: u32,

    /// Upscale of each key-frame crop.
    pub keyframe_scale: u32,

    /// Upscale of the character preview.
    pub character_preview_scale: u32,

    /// Upscale of the README panel.
    pub panel_scale: u32,

    /// Frames exported as key-frame crops for every animation.
    pub keyframes: Vec<usize>,

    /// Font files tried before the system search list.
    pub fonts: Vec<PathBuf>,

    /// Sprite palette overrides: colour name to hex string.
    pub palette: BTreeMap<String, String>,

    /// Write the TexturePacker JSON next to the sheet.
    pub metadata: bool,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: PathBuf::from("assets"),
            sheet_preview_scale: 4,
            keyframe_scale: 8,
            character_preview_scale: 8,
            panel_scale: PANEL_SCALE,
            keyframes: KEYFRAMES.to_vec(),
            fonts: vec![],
            palette: BTreeMap::new(),
            metadata: true,
        }
    }
}

impl Manifest {
    /// Load manifest from a devsprite.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `devsprite.yaml` in `dir` if present,
    /// else the defaults.
    pub fn locate(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let candidate = dir.join(MANIFEST_FILENAME);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse and validate a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| SpriteError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject values no renderer can honour.
    pub fn validate(&self) -> Result<()> {
        if let Some(&frame) = self.keyframes.iter().find(|&&f| f >= FRAME_COUNT) {
            return Err(SpriteError::Config {
                message: format!("keyframe {} is out of range", frame),
                help: Some(format!("Key frames must be between 0 and {}", FRAME_COUNT - 1)),
            });
        }

        let scales = [
            ("sheet_preview_scale", self.sheet_preview_scale),
            ("keyframe_scale", self.keyframe_scale),
            ("character_preview_scale", self.character_preview_scale),
            ("panel_scale", self.panel_scale),
        ];
        if let Some((name, _)) = scales.iter().find(|(_, scale)| *scale == 0) {
            return Err(SpriteError::Config {
                message: format!("{} must be at least 1", name),
                help: None,
            });
        }

        Ok(())
    }

    /// The sprite palette with this manifest's overrides applied.
    pub fn palette(&self) -> Result<Palette> {
        Palette::with_overrides(&self.palette)
    }

    /// Directory holding the character, sheet and crops.
    pub fn sprite_dir(&self) -> PathBuf {
        self.output.join("developer")
    }

    /// Keyframes sorted with duplicates removed.
    pub fn effective_keyframes(&self) -> Vec<usize> {
        let mut frames = self.keyframes.clone();
        frames.sort_unstable();
        frames.dedup();
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.sprite_dir(), PathBuf::from("assets/developer"));
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
output: build/art
sheet_preview_scale: 2
keyframe_scale: 6
character_preview_scale: 4
panel_scale: 3
keyframes: [8, 0, 8]
fonts:
  - fonts/Mono.ttf
palette:
  shirt: "#336699"
metadata: false
"##;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("build/art"));
        assert_eq!(manifest.sheet_preview_scale, 2);
        assert_eq!(manifest.keyframe_scale, 6);
        assert_eq!(manifest.character_preview_scale, 4);
        assert_eq!(manifest.panel_scale, 3);
        assert_eq!(manifest.effective_keyframes(), vec![0, 8]);
        assert_eq!(manifest.fonts, vec![PathBuf::from("fonts/Mono.ttf")]);
        assert!(!manifest.metadata);

        let palette = manifest.palette().unwrap();
        assert_eq!(palette.shirt.to_rgba(), [0x33, 0x66, 0x99, 255]);
    }

    #[test]
    fn test_keyframe_out_of_range() {
        let err = Manifest::parse("keyframes: [0, 16]").unwrap_err();
        assert!(matches!(err, SpriteError::Config { .. }));
        assert!(err.to_string().contains("keyframe 16"));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let err = Manifest::parse("panel_scale: 0").unwrap_err();
        assert!(err.to_string().contains("panel_scale"));
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let err = Manifest::parse("outptu: dist").unwrap_err();
        assert!(matches!(err, SpriteError::Parse { .. }));
    }

    #[test]
    fn test_unknown_palette_name() {
        let manifest = Manifest::parse("palette:\n  cape: \"#ff0000\"").unwrap();
        assert!(matches!(manifest.palette(), Err(SpriteError::Config { .. })));
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILENAME), "output: found").unwrap();
        let explicit = dir.path().join("other.yaml");
        std::fs::write(&explicit, "output: explicit").unwrap();

        let found = Manifest::locate(None, dir.path()).unwrap();
        assert_eq!(found.output, PathBuf::from("found"));

        let chosen = Manifest::locate(Some(&explicit), dir.path()).unwrap();
        assert_eq!(chosen.output, PathBuf::from("explicit"));

        let empty = tempfile::tempdir().unwrap();
        assert_eq!(Manifest::locate(None, empty.path()).unwrap(), Manifest::default());
    }
}
