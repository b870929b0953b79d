// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named garden colors and the fixed edge/text colors.

use alloc::string::String;
use alloc::vec::Vec;

use garden_bed_tree::{Color, Paint};

/// Key of the rectangle border color.
pub const EDGE_KEY: &str = "edgecolor";
/// Key of the label text color.
pub const TEXT_KEY: &str = "textcolor";

const DEFAULT_ENTRIES: &[(&str, Color)] = &[
    ("path", Color::from_rgb_u32(0xC2_B2_80)),
    ("bed", Color::from_rgb_u32(0x8B_5A_2B)),
    ("tomatoes", Color::from_rgb_u32(0xFF_63_47)),
    ("veggies", Color::from_rgb_u32(0x6B_8E_23)),
    ("vegetables", Color::from_rgb_u32(0x6B_8E_23)),
    ("veg", Color::from_rgb_u32(0x6B_8E_23)),
    (EDGE_KEY, Color::BLACK),
    (TEXT_KEY, Color::BLACK),
];

/// Compare two names, ignoring case (Unicode lowercase folding).
fn same_name(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive table from color names to colors.
///
/// Names not in the table are not an error: [`Palette::resolve`] hands them to
/// the renderer unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Vec<(String, Color)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(name, color)| (String::from(*name), *color))
                .collect(),
        }
    }
}

impl Palette {
    /// A palette with no entries; edge and text fall back to black.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `name`, or replace it if already present (names compare case-insensitively).
    #[must_use]
    pub fn with_entry(mut self, name: &str, color: Color) -> Self {
        match self
            .entries
            .iter_mut()
            .find(|(n, _)| same_name(n, name))
        {
            Some(entry) => entry.1 = color,
            None => self.entries.push((String::from(name), color)),
        }
        self
    }

    /// Look up a name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(n, _)| same_name(n, name))
            .map(|(_, c)| *c)
    }

    /// Map known names to their color; pass anything else through.
    pub fn resolve(&self, paint: &Paint) -> Paint {
        match paint {
            Paint::Named(name) => self
                .lookup(name)
                .map_or_else(|| paint.clone(), Paint::Rgba),
            Paint::Rgba(_) => paint.clone(),
        }
    }

    /// Border color for every rectangle.
    pub fn edge_color(&self) -> Color {
        self.lookup(EDGE_KEY).unwrap_or(Color::BLACK)
    }

    /// Color for every label.
    pub fn text_color(&self) -> Color {
        self.lookup(TEXT_KEY).unwrap_or(Color::BLACK)
    }

    /// Iterate over all entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let palette = Palette::default();
        let tomato = Color::rgb(0xFF, 0x63, 0x47);
        assert_eq!(palette.lookup("tomatoes"), Some(tomato));
        assert_eq!(palette.lookup("ToMaToEs"), Some(tomato));
        assert_eq!(palette.lookup("VEG"), palette.lookup("vegetables"));
        assert_eq!(palette.lookup("orchids"), None);
    }

    #[test]
    fn lookup_folds_non_ascii_case() {
        let maple = Color::rgb(0xC0, 0x40, 0x20);
        let palette = Palette::default().with_entry("Érable", maple);
        assert_eq!(palette.lookup("ÉRABLE"), Some(maple));
        assert_eq!(palette.lookup("érable"), Some(maple));
        let palette = palette.with_entry("ÉRABLE", Color::BLACK);
        assert_eq!(palette.lookup("érable"), Some(Color::BLACK));
        assert_eq!(palette.entries().count(), DEFAULT_ENTRIES.len() + 1);
    }

    #[test]
    fn resolve_passes_unknown_values_through() {
        let palette = Palette::default();
        assert_eq!(
            palette.resolve(&Paint::from("PATH")),
            Paint::Rgba(Color::rgb(0xC2, 0xB2, 0x80))
        );
        assert_eq!(
            palette.resolve(&Paint::from("#336699")),
            Paint::Named("#336699".into())
        );
        let raw = Paint::Rgba(Color::new(1, 2, 3, 4));
        assert_eq!(palette.resolve(&raw), raw);
    }

    #[test]
    fn with_entry_overrides_and_extends() {
        let red = Color::rgb(255, 0, 0);
        let palette = Palette::default()
            .with_entry("EdgeColor", red)
            .with_entry("herbs", Color::rgb(0, 128, 0));
        assert_eq!(palette.edge_color(), red);
        assert_eq!(palette.text_color(), Color::BLACK);
        assert_eq!(palette.lookup("HERBS"), Some(Color::rgb(0, 128, 0)));
        assert_eq!(palette.entries().count(), DEFAULT_ENTRIES.len() + 1);
    }

    #[test]
    fn empty_palette_falls_back_to_black() {
        let palette = Palette::empty();
        assert_eq!(palette.edge_color(), Color::BLACK);
        assert_eq!(palette.text_color(), Color::BLACK);
        assert_eq!(
            palette.resolve(&Paint::from("bed")),
            Paint::Named("bed".into())
        );
    }
}
