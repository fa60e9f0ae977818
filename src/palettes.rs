// Palettes of the 25-pair color code,
// see https://en.wikipedia.org/wiki/25-pair_color_code

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref MAJOR: PaletteData = {
    PaletteData::new(Role::Major, vec![
      ColorData { name: "White",  rgb: RGB8 { r: 255, g: 255, b: 255 } },
      ColorData { name: "Red",    rgb: RGB8 { r: 255, g:   0, b:   0 } },
      ColorData { name: "Black",  rgb: RGB8 { r:   0, g:   0, b:   0 } },
      ColorData { name: "Yellow", rgb: RGB8 { r: 255, g: 255, b:   0 } },
      ColorData { name: "Violet", rgb: RGB8 { r: 139, g:   0, b: 255 } },
    ])
  };
}

lazy_static! {
  pub(crate) static ref MINOR: PaletteData = {
    PaletteData::new(Role::Minor, vec![
      ColorData { name: "Blue",   rgb: RGB8 { r:   0, g:   0, b: 255 } },
      ColorData { name: "Orange", rgb: RGB8 { r: 255, g: 165, b:   0 } },
      ColorData { name: "Green",  rgb: RGB8 { r:   0, g: 128, b:   0 } },
      ColorData { name: "Brown",  rgb: RGB8 { r: 150, g:  75, b:   0 } },
      ColorData { name: "Slate",  rgb: RGB8 { r: 112, g: 128, b: 144 } },
    ])
  };
}
