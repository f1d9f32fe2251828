//! Visual themes: the light/dark [`Appearance`] and the colour palettes.

pub mod palettes;
pub mod types;

pub use palettes::{PALETTES, find_palette, palette_names, resolve_palette};
pub use types::{Appearance, ColourPalette};
