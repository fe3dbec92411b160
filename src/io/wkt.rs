//! Reading of the WKT line geometries used by the CSV export, e.g.
//! `SRID=4326;MULTILINESTRING((13.7 51.0,13.8 51.1),(13.9 51.2,14.0 51.3))`.

use std::sync::LazyLock;

use anyhow::{anyhow, bail, ensure, Context, Result};
use geo::{Coord, LineString, MultiLineString};
use regex::Regex;

use crate::street::StreetGeometry;

static SRID_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)SRID=\d+;").expect("srid pattern"));

/// Parse a LINESTRING or MULTILINESTRING, optionally prefixed with `SRID=<n>;`.
pub fn parse(text: &str) -> Result<StreetGeometry> {
    let text = text.trim();
    let body = SRID_PREFIX.replace(text, "");
    let body = body.trim();

    let open = body.find('(')
        .ok_or_else(|| anyhow!("[io::wkt::parse] Missing coordinate list in {text:?}"))?;
    let (keyword, rest) = body.split_at(open);
    let inner = strip_parens(rest)
        .with_context(|| format!("[io::wkt::parse] Unbalanced parentheses in {text:?}"))?;

    match keyword.trim().to_ascii_uppercase().as_str() {
        "LINESTRING" => Ok(StreetGeometry::Line(parse_line(inner)?)),
        "MULTILINESTRING" => {
            let lines = split_parts(inner)?
                .into_iter()
                .map(parse_line)
                .collect::<Result<Vec<_>>>()?;
            ensure!(!lines.is_empty(), "[io::wkt::parse] Empty MULTILINESTRING");
            Ok(StreetGeometry::MultiLine(MultiLineString::new(lines)))
        }
        other => bail!("[io::wkt::parse] Unsupported geometry type {other:?}"),
    }
}

/// Inside of the outermost parentheses of `text`.
fn strip_parens(text: &str) -> Result<&str> {
    text.trim()
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| anyhow!("expected (...)"))
}

/// Split `(a b, c d), (e f, g h)` into `["a b, c d", "e f, g h"]`.
fn split_parts(text: &str) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    let mut rest = text.trim();
    while !rest.is_empty() {
        let after_open = rest.strip_prefix('(')
            .ok_or_else(|| anyhow!("[io::wkt::parse] Expected '(' at {rest:?}"))?;
        let close = after_open.find(')')
            .ok_or_else(|| anyhow!("[io::wkt::parse] Unclosed line in MULTILINESTRING"))?;
        parts.push(&after_open[..close]);
        rest = after_open[close + 1..].trim_start();
        if let Some(next) = rest.strip_prefix(',') {
            rest = next.trim_start();
        }
    }
    Ok(parts)
}

/// Parse `lng lat, lng lat, ...`; extra ordinates (Z, M) are ignored.
fn parse_line(text: &str) -> Result<LineString<f64>> {
    let coords = text.split(',')
        .map(|pair| {
            let mut ordinates = pair.split_whitespace().map(str::parse::<f64>);
            match (ordinates.next(), ordinates.next()) {
                (Some(Ok(x)), Some(Ok(y))) if x.is_finite() && y.is_finite() => Ok(Coord { x, y }),
                _ => bail!("[io::wkt::parse] Invalid coordinate {:?}", pair.trim()),
            }
        })
        .collect::<Result<Vec<_>>>()?;
    ensure!(!coords.is_empty(), "[io::wkt::parse] Line without coordinates");
    Ok(LineString::new(coords))
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::street::StreetGeometry;

    #[test]
    fn linestring_keeps_coordinate_order() {
        let StreetGeometry::Line(line) = parse("LINESTRING(13.7 51.0, 13.8 51.1,13.9 51.2)").unwrap() else {
            panic!("expected single line");
        };
        let coords: Vec<(f64, f64)> = line.coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(13.7, 51.0), (13.8, 51.1), (13.9, 51.2)]);
    }

    #[test]
    fn multilinestring_keeps_parts() {
        let geometry = parse("MULTILINESTRING((13.7 51.0,13.8 51.1),(13.9 51.2,14.0 51.3,14.1 51.4))").unwrap();
        let StreetGeometry::MultiLine(multi) = &geometry else { panic!("expected multi line") };
        assert_eq!(multi.0.len(), 2);
        assert_eq!(multi.0[1].0.len(), 3);
        assert_eq!(geometry.coord_count(), 5);
    }

    #[test]
    fn srid_prefix_is_stripped() {
        let plain = parse("LINESTRING(13.7 51.0,13.8 51.1)").unwrap();
        assert_eq!(parse("SRID=4326;LINESTRING(13.7 51.0,13.8 51.1)").unwrap(), plain);
        assert_eq!(parse("srid=25833;LINESTRING(13.7 51.0,13.8 51.1)").unwrap(), plain);
    }

    #[test]
    fn keyword_spacing_and_case_are_tolerated() {
        assert!(parse("LineString (13.7 51.0, 13.8 51.1)").is_ok());
        assert!(parse("MULTILINESTRING ((1 2, 3 4), (5 6, 7 8))").is_ok());
    }

    #[test]
    fn extra_ordinates_are_ignored() {
        let geometry = parse("LINESTRING(13.7 51.0 112.5,13.8 51.1 113.0)").unwrap();
        assert_eq!(geometry.coord_count(), 2);
    }

    #[test]
    fn malformed_input_is_rejected() {
        for text in [
            "",
            "POINT(13.7 51.0)",
            "LINESTRING",
            "LINESTRING()",
            "LINESTRING(13.7 51.0,13.8)",
            "LINESTRING(13.7 abc,13.8 51.1)",
            "LINESTRING(13.7 51.0,13.8 51.1",
            "MULTILINESTRING(())",
            "MULTILINESTRING((1 2,3 4),(5 6",
        ] {
            assert!(parse(text).is_err(), "{text:?} should not parse");
        }
    }
}
