use std::{fmt, str::FromStr};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::style::Color;

/// Historical period an honoree's death year falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Era {
    Medieval,
    Century16,
    Century17,
    Century18,
    PreUnification,
    Wilhelmine,
    Weimar,
    ThirdReich,
    Gdr,
    PostReunification,
    Unknown,
}

/// Lower bound (inclusive) of each era after `Medieval`, ascending.
const ERA_STARTS: [(u16, Era); 9] = [
    (1500, Era::Century16),
    (1600, Era::Century17),
    (1700, Era::Century18),
    (1800, Era::PreUnification),
    (1871, Era::Wilhelmine),
    (1919, Era::Weimar),
    (1933, Era::ThirdReich),
    (1946, Era::Gdr),
    (1990, Era::PostReunification),
];

impl Era {
    /// Chronological order, `Unknown` last.
    pub const ALL: [Era; 11] = [
        Era::Medieval,
        Era::Century16,
        Era::Century17,
        Era::Century18,
        Era::PreUnification,
        Era::Wilhelmine,
        Era::Weimar,
        Era::ThirdReich,
        Era::Gdr,
        Era::PostReunification,
        Era::Unknown,
    ];

    /// Bucket a death year; ranges are [low, high) and the last one is open.
    pub fn from_death_year(year: Option<u16>) -> Era {
        let Some(year) = year else { return Era::Unknown };
        ERA_STARTS.iter()
            .rev()
            .find(|&&(start, _)| year >= start)
            .map(|&(_, era)| era)
            .unwrap_or(Era::Medieval)
    }

    /// Position in `Era::ALL`.
    pub fn index(self) -> usize { self as usize }

    pub fn as_str(&self) -> &'static str {
        match self {
            Era::Medieval => "medieval",
            Era::Century16 => "century16",
            Era::Century17 => "century17",
            Era::Century18 => "century18",
            Era::PreUnification => "pre-unification",
            Era::Wilhelmine => "wilhelmine",
            Era::Weimar => "weimar",
            Era::ThirdReich => "third-reich",
            Era::Gdr => "gdr",
            Era::PostReunification => "post-reunification",
            Era::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Era::Medieval => "Mittelalter",
            Era::Century16 => "16. Jahrhundert",
            Era::Century17 => "17. Jahrhundert",
            Era::Century18 => "18. Jahrhundert",
            Era::PreUnification => "1800-1870",
            Era::Wilhelmine => "Kaiserzeit (1871-1918)",
            Era::Weimar => "Weimarer Rep. (1919-1932)",
            Era::ThirdReich => "NS-Zeit (1933-1945)",
            Era::Gdr => "DDR (1946-1989)",
            Era::PostReunification => "Nach 1990",
            Era::Unknown => "Unbekannt",
        }
    }

    /// Line color in the era view.
    pub fn color(&self) -> Color {
        match self {
            Era::Medieval => Color::hex(0x1e3a5f),
            Era::Century16 => Color::hex(0x2563eb),
            Era::Century17 => Color::hex(0x0891b2),
            Era::Century18 => Color::hex(0x059669),
            Era::PreUnification => Color::hex(0x65a30d),
            Era::Wilhelmine => Color::hex(0xca8a04),
            Era::Weimar => Color::hex(0xea580c),
            Era::ThirdReich => Color::hex(0xdc2626),
            Era::Gdr => Color::hex(0xbe185d),
            Era::PostReunification => Color::hex(0x7c3aed),
            Era::Unknown => Color::hex(0x9ca3af),
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Era {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Era::ALL.into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| anyhow!("[classify::era] Unknown era: {s}"))
    }
}
