//! Normalization of the free-text date and annotation fields.

use std::sync::LazyLock;

use regex::Regex;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("year pattern"));

/// A year with optional leading day and month, e.g. `1945`, `03.1945`, `12.02.1945`.
static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\d{1,2}\.\s?){0,2}\d{4}").expect("date pattern")
});

/// Markers that precede a death date, e.g. `† 1945`.
const DEATH_MARKERS: &[char] = &['†', '✝', '+', '*'];

/// Returns the trimmed text, or `None` if nothing but whitespace is left.
pub fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}

/// First run of four consecutive digits anywhere in `text`.
pub fn extract_year(text: Option<&str>) -> Option<u16> {
    YEAR.find(text?)?.as_str().parse().ok()
}

/// Explanatory remainder of a death-date field once the cross marker and the
/// date are removed, e.g. `"† 12.02.1945 (Suizid)"` gives `"Suizid"`.
pub fn death_note(text: Option<&str>) -> Option<String> {
    let text = non_blank(text)?
        .trim_start_matches(|c: char| DEATH_MARKERS.contains(&c) || c.is_whitespace());
    let rest = DATE.replace(text, "");
    let rest = rest.trim();
    let rest = match rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        Some(inner) => inner.trim(),
        None => rest,
    };
    let rest = rest.trim_start_matches([',', ';', ':', '-']).trim();
    (!rest.is_empty()).then(|| rest.to_string())
}
