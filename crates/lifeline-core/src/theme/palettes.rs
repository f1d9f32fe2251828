use tracing::warn;

use super::types::ColourPalette;

/// Built-in visual themes. The first entry is the fallback.
pub const PALETTES: [ColourPalette; 3] = [
    ColourPalette {
        name: "Default",
        text_primary: "#dce4ee",
        button_hover: "#36719f",
        background: "#242424",
        accent: "#1f6aa5",
    },
    ColourPalette {
        name: "Dark Magician",
        text_primary: "#f1e6ff",
        button_hover: "#5b2c83",
        background: "#1a1024",
        accent: "#8e44ad",
    },
    ColourPalette {
        name: "Blue-Eyes",
        text_primary: "#eef6ff",
        button_hover: "#4f86c6",
        background: "#101b2b",
        accent: "#9cc9ff",
    },
];

pub fn palette_names() -> Vec<&'static str> {
    PALETTES.iter().map(|p| p.name).collect()
}

/// Find a palette by exact name, ignoring ASCII case.
pub fn find_palette(name: &str) -> Option<&'static ColourPalette> {
    PALETTES
        .iter()
        .find(|palette| palette.name.eq_ignore_ascii_case(name.trim()))
}

/// Resolve the palette for a stored selection, falling back to the default.
pub fn resolve_palette(selected: &str) -> &'static ColourPalette {
    find_palette(selected).unwrap_or_else(|| {
        warn!(
            event = "core.theme.palette_not_found",
            selected = selected,
            fallback = PALETTES[0].name
        );
        &PALETTES[0]
    })
}
