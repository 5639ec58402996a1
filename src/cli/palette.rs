use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Palette;

use super::ConfigArgs;

/// Print the effective sprite palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Only print entries changed by the manifest
    #[arg(long)]
    pub changed: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = args.config.load()?.palette()?;
    let lines = palette_lines(&palette, args.changed);

    printer.status("Palette", &plural(lines.len(), "colour", "colours"));

    // Lines are valid devsprite.yaml `palette:` entries.
    for line in lines {
        println!("  {}", line);
    }

    Ok(())
}

fn palette_lines(palette: &Palette, changed_only: bool) -> Vec<String> {
    let defaults = Palette::developer();
    palette
        .entries()
        .into_iter()
        .filter(|(name, colour)| !changed_only || defaults.get(name) != Some(*colour))
        .map(|(name, colour)| format!("{}: \"{}\"", name, colour))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_palette_lines() {
        let all = palette_lines(&Palette::developer(), false);
        assert_eq!(all.len(), Palette::NAMES.len());
        assert_eq!(all[0], format!("skin: \"{}\"", Palette::developer().skin));
        assert!(palette_lines(&Palette::developer(), true).is_empty());
    }

    #[test]
    fn test_changed_only() {
        let mut overrides = BTreeMap::new();
        overrides.insert("shirt".to_string(), "#112233".to_string());
        let palette = Palette::with_overrides(&overrides).unwrap();

        assert_eq!(palette_lines(&palette, true), vec!["shirt: \"#112233\"".to_string()]);
    }
}
