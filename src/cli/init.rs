//! Init command implementation.
//!
//! Writes a `devsprite.yaml` holding the default settings, ready to edit.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SpriteError};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Write a devsprite.yaml with the default settings
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the manifest into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing devsprite.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SpriteError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = serde_yaml::to_string(&Manifest::default()).map_err(|e| SpriteError::Build {
        message: format!("Failed to serialize manifest: {}", e),
        help: None,
    })?;

    fs::write(&manifest_path, yaml).map_err(|e| SpriteError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_loadable_manifest() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::new(true)).unwrap();

        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        let content = fs::read_to_string(&manifest_path).unwrap();
        assert!(content.contains("output: assets"));
        assert_eq!(Manifest::load(&manifest_path).unwrap(), Manifest::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: mine\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &Printer::new(true)).is_err());

        let forced = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(forced, &Printer::new(true)).unwrap();
        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(!content.contains("mine"));
    }
}
