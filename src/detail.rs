//! Text shown in the detail panel for the selected street.

use std::fmt;

use crate::street::StreetFeature;

/// Display-ready view of one street.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetDetail {
    pub title: String,
    pub subtitle: Option<String>,  // Short name, when it differs
    pub person: Option<PersonDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDetail {
    pub name: String,
    pub description: Option<String>,
    pub life_span: Option<String>,  // "* 1867 – † 1945"
    pub death_note: Option<String>,
    pub gender: &'static str,
    pub category: &'static str,
    pub era: &'static str,
}

impl StreetDetail {
    pub fn of(street: &StreetFeature) -> StreetDetail {
        let person = street.honoree.as_ref().map(|h| {
            let born = h.birth_year.map(|y| format!("* {y}"));
            let died = h.death_year.map(|y| format!("† {y}"));
            let life_span = match (born, died) {
                (Some(b), Some(d)) => Some(format!("{b} – {d}")),
                (b, d) => b.or(d),
            };
            PersonDetail {
                name: h.name.clone(),
                description: h.note.clone(),
                life_span,
                death_note: h.death_note.clone(),
                gender: if h.is_female { "Weiblich" } else { "Männlich" },
                category: h.category.label(),
                era: h.era.label(),
            }
        });

        StreetDetail {
            title: street.name.clone(),
            subtitle: (street.short_name != street.name).then(|| street.short_name.clone()),
            person,
        }
    }
}

impl fmt::Display for StreetDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(f, "{subtitle}")?;
        }
        let Some(person) = &self.person else {
            return writeln!(f, "Diese Straße ist nicht nach einer Person benannt.");
        };
        writeln!(f)?;
        writeln!(f, "{}", person.name)?;
        if let Some(description) = &person.description {
            writeln!(f, "{description}")?;
        }
        match (&person.life_span, &person.death_note) {
            (Some(span), Some(note)) => writeln!(f, "{span} ({note})")?,
            (Some(span), None) => writeln!(f, "{span}")?,
            (None, Some(note)) => writeln!(f, "({note})")?,
            (None, None) => {}
        }
        writeln!(f, "{} · {} · {}", person.gender, person.category, person.era)
    }
}

#[cfg(test)]
mod tests {
    use geo::LineString;

    use super::StreetDetail;
    use crate::classify::{Category, Era};
    use crate::street::{Honoree, StreetFeature, StreetGeometry};

    fn street(honoree: Option<Honoree>) -> StreetFeature {
        StreetFeature {
            id: 1,
            ident: None,
            name: "Käthe-Kollwitz-Ufer".into(),
            short_name: "Kollwitz-Ufer".into(),
            geometry: StreetGeometry::Line(LineString::from(vec![(13.75, 51.05), (13.76, 51.051)])),
            honoree,
        }
    }

    fn kollwitz() -> Honoree {
        Honoree {
            name: "Käthe Kollwitz".into(),
            note: Some("Malerin und Grafikerin".into()),
            birth_year: Some(1867),
            death_year: Some(1945),
            death_note: None,
            is_female: true,
            category: Category::Artist,
            era: Era::ThirdReich,
        }
    }

    #[test]
    fn life_span_joins_known_years() {
        let detail = StreetDetail::of(&street(Some(kollwitz())));
        let person = detail.person.unwrap();
        assert_eq!(person.life_span.as_deref(), Some("* 1867 – † 1945"));
        assert_eq!(person.gender, "Weiblich");
        assert_eq!(person.category, "Künstler:innen");

        let only_death = Honoree { birth_year: None, ..kollwitz() };
        let person = StreetDetail::of(&street(Some(only_death))).person.unwrap();
        assert_eq!(person.life_span.as_deref(), Some("† 1945"));

        let no_years = Honoree { birth_year: None, death_year: None, ..kollwitz() };
        assert_eq!(StreetDetail::of(&street(Some(no_years))).person.unwrap().life_span, None);
    }

    #[test]
    fn subtitle_only_when_short_name_differs() {
        let mut s = street(None);
        assert_eq!(StreetDetail::of(&s).subtitle.as_deref(), Some("Kollwitz-Ufer"));
        s.short_name = s.name.clone();
        assert_eq!(StreetDetail::of(&s).subtitle, None);
    }

    #[test]
    fn renders_panel_text() {
        let text = StreetDetail::of(&street(Some(kollwitz()))).to_string();
        assert!(text.starts_with("Käthe-Kollwitz-Ufer\nKollwitz-Ufer\n"));
        assert!(text.contains("Malerin und Grafikerin\n"));
        assert!(text.contains("Weiblich · Künstler:innen · NS-Zeit (1933-1945)"));

        let text = StreetDetail::of(&street(None)).to_string();
        assert!(text.ends_with("Diese Straße ist nicht nach einer Person benannt.\n"));
    }
}
