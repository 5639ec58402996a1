//! Pixel-exact regression hashes for the stock palette.
//!
//! Each entry is the SHA-256 of a 32-pixel band of raw RGBA bytes,
//! row-major. A changed hash names the animation that moved.

use devsprite::{render_character, Animation, Canvas, Palette, SpriteSheet, FRAME_SIZE};
use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};

const SHEET_ROWS: [&str; 18] = [
    "e8da9117b10be19ccb11271d1bddb407ece63a45c53090be7a57cc9a1c485b73",
    "b2a6068d8502b9a316e63569e9684aa2878f93cdf890991aa96bd5cb3a3ad865",
    "c50b5343bfd85c1405522a930df441ede620d0b4b1fd8a5b38f959f951d362ad",
    "c009e326d35acb7f9d9647582f7f54cf7783a84eb809f0ac29c56a770ce0b477",
    "6034ef666fb3abde762893c5577e44f2ecee9673ac0dcb784703657b5d84e05a",
    "73f2739cbcc187db7f89fb23c378af27f943872e3a6f1fe1e316c2a70e1c1faf",
    "c78c482a801254a3f7b09a9d9476db30ab228f1122fd419c6bb4127f44149103",
    "b66783b374d43ff475e7c4c21cffaefb5aa71152385c55c628e5b11112ff13a7",
    "55776522c34eeeababf78e85ce94b1b80d45eb1262b6392e8aed267201f25edc",
    "970c4f08f98295b91884e6cc2fcc8b948a5e3914bcca43651a4ff96c994523f8",
    "851b41e38876a3fc0206f0795a0d9f8df2b35441472fc547c3921b2fd8655159",
    "0365bc2b7232fdec34dd92734b9e9fb29a2234a735a85d094a246b6d4722c408",
    "54efd08670671d3199cb93818af79c81fac83f8ce1cc12cab01629c76236f8b9",
    "f09d19daa603f12f728a3907f99f6401825596995745ae1932486a85f61974ae",
    "04dd8ae4a1181b1a23092ca0b796aeeae88ba86014bdf5134b7af2a47cdaf1af",
    "18537d7154e629fa2daf5bacf7d77fff9fa23f6bcf78f1adefc5926156591e43",
    "58391dbf97579ce7a0ad4383970880828660f06fd178d41b89b3fbec6e05dcf3",
    "6a462b3013c0fa5c5841268b6f254d5a7c91374d06b661d9d9209123dc5418a4",
];

const CHARACTER: &str = "0c4f391f1a7838fcd7058faca3949f7818b25705a0d8db210409e194c5e1fc89";

fn digest(canvas: &Canvas) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canvas.to_image().as_raw());
    format!("{:x}", hasher.finalize())
}

#[test]
fn sheet_rows_match_reference_hashes() {
    let sheet = SpriteSheet::assemble_sequential(&Palette::developer());
    let canvas = sheet.canvas();

    let actual: Vec<(&str, String)> = Animation::ALL
        .iter()
        .map(|anim| {
            let y = (anim.row() as u32 * FRAME_SIZE) as i32;
            let band = canvas.crop(0, y, canvas.width(), FRAME_SIZE);
            (anim.name(), digest(&band))
        })
        .collect();
    let expected: Vec<(&str, String)> = Animation::ALL
        .iter()
        .map(|anim| (anim.name(), SHEET_ROWS[anim.row()].to_string()))
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn parallel_sheet_matches_reference_hashes() {
    let sheet = SpriteSheet::assemble(&Palette::developer());
    let canvas = sheet.canvas();
    for (row, expected) in SHEET_ROWS.iter().enumerate() {
        let band = canvas.crop(0, (row as u32 * FRAME_SIZE) as i32, canvas.width(), FRAME_SIZE);
        assert_eq!(digest(&band), *expected, "row {row}");
    }
}

#[test]
fn character_matches_reference_hash() {
    let canvas = render_character(&Palette::developer());
    assert_eq!(canvas.size(), (FRAME_SIZE, FRAME_SIZE));
    assert_eq!(digest(&canvas), CHARACTER);
}
