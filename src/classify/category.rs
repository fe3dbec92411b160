use std::{fmt, str::FromStr, sync::LazyLock};

use anyhow::{anyhow, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Public role of the person a street is named after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Artist,
    Writer,
    Scientist,
    Politician,
    Musician,
    Nobility,
    Educator,
    AntifascistResistance,
    Other,
}

/// Keyword table, tried top to bottom; the first category whose keywords
/// occur in the annotation wins. Keywords are matched case-insensitively as
/// substrings, so `maler` also catches `Malerin`.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Artist, &["maler", "bildhauer", "grafik", "künstler", "architekt", "painter", "sculptor", "architect"]),
    (Category::Writer, &["dichter", "schriftsteller", "autor", "journalist", "literat", "poet", "writer"]),
    (Category::Musician, &["komponist", "sänger", "musik", "kapellmeister", "dirigent", "composer", "singer", "conductor"]),
    (Category::Scientist, &["professor", "physiker", "chemiker", "wissenschaft", "forscher", "gelehrter", "arzt", "medizin", "physicist", "chemist", "physician"]),
    (Category::Politician, &["politiker", "minister", "bürgermeister", "staatsmann", "stadtverordnet", "mayor", "statesman"]),
    (Category::AntifascistResistance, &["antifaschist", "widerstandskämpfer", "widerstand", "resistance fighter", "anti-fascist"]),
    (Category::Nobility, &["könig", "herzog", "kurfürst", "prinz", "gemahlin", "fürst", "king", "duke", "prince"]),
    (Category::Educator, &["pädagog", "lehrer", "erzieher", "teacher", "pedagogue"]),
];

static PATTERNS: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    CATEGORY_KEYWORDS.iter()
        .map(|&(category, keywords)| (category, keyword_pattern(keywords)))
        .collect()
});

fn keyword_pattern(keywords: &[&str]) -> Regex {
    let alternation = keywords.iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()
        .expect("category keywords form a valid pattern")
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Artist,
        Category::Writer,
        Category::Scientist,
        Category::Politician,
        Category::Musician,
        Category::Nobility,
        Category::Educator,
        Category::AntifascistResistance,
        Category::Other,
    ];

    /// Classify a biographical annotation. Absent or blank text, and text
    /// that matches no specific keyword list, falls back to `Other`.
    pub fn classify(note: Option<&str>) -> Category {
        let Some(note) = note.map(str::trim).filter(|n| !n.is_empty()) else { return Category::Other };
        PATTERNS.iter()
            .find(|(_, pattern)| pattern.is_match(note))
            .map(|&(category, _)| category)
            .unwrap_or(Category::Other)
    }

    /// Position in `Category::ALL`.
    pub fn index(self) -> usize { self as usize }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Artist => "artist",
            Category::Writer => "writer",
            Category::Scientist => "scientist",
            Category::Politician => "politician",
            Category::Musician => "musician",
            Category::Nobility => "nobility",
            Category::Educator => "educator",
            Category::AntifascistResistance => "antifascist-resistance",
            Category::Other => "other",
        }
    }

    /// Display label used by the legend and detail panel.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Artist => "Künstler:innen",
            Category::Writer => "Schriftsteller:innen",
            Category::Scientist => "Wissenschaftler:innen",
            Category::Politician => "Politiker:innen",
            Category::Musician => "Musiker:innen",
            Category::Nobility => "Adel",
            Category::Educator => "Pädagog:innen",
            Category::AntifascistResistance => "Antifaschist:innen",
            Category::Other => "Andere",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL.into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| anyhow!("[classify::category] Unknown category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    fn classify(note: &str) -> Category { Category::classify(Some(note)) }

    #[test]
    fn artist() {
        assert_eq!(classify("Malerin und Grafikerin"), Category::Artist);
        assert_eq!(classify("Bildhauer"), Category::Artist);
        assert_eq!(classify("Architekt des Zwingers"), Category::Artist);
    }

    #[test]
    fn writer() {
        assert_eq!(classify("Dichter der Romantik"), Category::Writer);
        assert_eq!(classify("Journalistin"), Category::Writer);
    }

    #[test]
    fn musician() {
        assert_eq!(classify("Komponist"), Category::Musician);
        assert_eq!(classify("Hofkapellmeister"), Category::Musician);
        assert_eq!(classify("Opernsängerin"), Category::Musician);
    }

    #[test]
    fn scientist() {
        assert_eq!(classify("Physiker, Nobelpreisträger"), Category::Scientist);
        assert_eq!(classify("Ärztin und Forscherin"), Category::Scientist);
    }

    #[test]
    fn politician() {
        assert_eq!(classify("Oberbürgermeister von Dresden"), Category::Politician);
        assert_eq!(classify("sächsischer Staatsminister"), Category::Politician);
    }

    #[test]
    fn antifascist_resistance() {
        assert_eq!(classify("Antifaschistin"), Category::AntifascistResistance);
        assert_eq!(classify("Widerstandskämpfer gegen den Nationalsozialismus"), Category::AntifascistResistance);
    }

    #[test]
    fn nobility() {
        assert_eq!(classify("König von Sachsen"), Category::Nobility);
        assert_eq!(classify("Kurfürstin"), Category::Nobility);
    }

    #[test]
    fn educator() {
        assert_eq!(classify("Reformpädagogin"), Category::Educator);
        assert_eq!(classify("Lehrerin"), Category::Educator);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        // professor (scientist) and pädagoge (educator) both match
        assert_eq!(classify("Professor und Pädagoge"), Category::Scientist);
        // maler (artist) precedes dichter (writer)
        assert_eq!(classify("Dichter und Maler"), Category::Artist);
    }

    #[test]
    fn unmatched_or_absent_is_other() {
        assert_eq!(classify("Kaufmann und Stifter"), Category::Other);
        assert_eq!(Category::classify(None), Category::Other);
        assert_eq!(Category::classify(Some("   ")), Category::Other);
    }

    #[test]
    fn slug_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("painter".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&Category::AntifascistResistance).unwrap();
        assert_eq!(json, "\"antifascist-resistance\"");
    }
}
