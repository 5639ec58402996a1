//! The standalone developer character: front view at rest.

use super::{body, Origin, Pen, FRAME_SIZE};
use crate::types::{Canvas, Palette};

/// Render the 32×32 developer character.
pub fn render_character(palette: &Palette) -> Canvas {
    let mut canvas = Canvas::new(FRAME_SIZE, FRAME_SIZE);
    body::front_standing(&mut Pen::new(&mut canvas, palette), Origin::ZERO);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_stands_on_the_bottom_rows() {
        let p = Palette::developer();
        let canvas = render_character(&p);

        assert_eq!(canvas.size(), (FRAME_SIZE, FRAME_SIZE));
        assert_eq!(canvas.get(14, 6), Some(p.hair));
        assert_eq!(canvas.get(9, 28), Some(p.shoe_highlight));
        assert_eq!(canvas.get(22, 28), Some(p.shoe_highlight));
        assert_eq!(canvas.get(10, 29), Some(p.shoe));
        for y in 30..32 {
            for x in 0..32 {
                assert!(canvas.get(x, y).unwrap().is_transparent());
            }
        }
    }
}
