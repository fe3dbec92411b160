//! Colors the map renderer and legend draw with.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::filter::ViewMode;
use crate::street::StreetFeature;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const FEMALE: Color = Color::hex(0x7c3aed);
    pub const MALE: Color = Color::hex(0xd97706);
    pub const NEUTRAL: Color = Color::hex(0x6b7280);
    pub const HIGHLIGHT: Color = Color::hex(0xdc2626);

    /// Color from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Color {
        Color { r: (rgb >> 16) as u8, g: (rgb >> 8) as u8, b: rgb as u8 }
    }
}

impl fmt::Display for Color {
    /// Format as CSS: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Line color of a street in the given view.
pub fn draw_color(street: &StreetFeature, mode: ViewMode) -> Color {
    let Some(honoree) = &street.honoree else { return Color::NEUTRAL };
    match mode {
        ViewMode::Gender if honoree.is_female => Color::FEMALE,
        ViewMode::Gender => Color::MALE,
        ViewMode::Era => honoree.era.color(),
    }
}
