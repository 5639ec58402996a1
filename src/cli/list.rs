//! List command implementation.
//!
//! Prints the sheet's animation rows in order.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::sprite::{Animation, FRAME_COUNT, FRAME_SIZE, KEYFRAMES};

/// List the animation rows of the exercise sheet
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print tab-separated rows to stdout instead of status lines
    #[arg(long)]
    pub plain: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    if args.plain {
        for line in plain_rows() {
            println!("{}", line);
        }
        return Ok(());
    }

    for anim in Animation::ALL {
        let row = format!("row {:>2}", anim.row());
        printer.info(
            anim.name(),
            &format!(
                "{} {} {}",
                printer.dim(&row),
                printer.dim("->"),
                printer.cyan(anim.display_name())
            ),
        );
    }

    let keyframes: Vec<String> = KEYFRAMES.iter().map(|f| f.to_string()).collect();
    printer.info(
        "Frames",
        &format!(
            "{} per row, {}x{} px, key frames {}",
            FRAME_COUNT,
            FRAME_SIZE,
            FRAME_SIZE,
            keyframes.join(", ")
        ),
    );
    Ok(())
}

fn plain_rows() -> Vec<String> {
    Animation::ALL
        .iter()
        .map(|anim| format!("{}\t{}\t{}", anim.row(), anim.name(), anim.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rows() {
        let rows = plain_rows();
        assert_eq!(rows.len(), 18);
        assert_eq!(rows[0], "0\tcoffee_idle\tCoffee");
        assert_eq!(rows[12], "12\tdesk_pushups\tDeskPushUps");
    }
}
