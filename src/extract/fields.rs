//! Field parsers and label routing.
//!
//! Every extraction pass funnels label/value pairs through [`route_label`],
//! so the keyword matching is identical for tables, definition lists,
//! free-text blocks and detail pages.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::LookupResult;

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^0-9])([0-9]{4})(?:[^0-9]|$)").expect("year regex"));

static RUNTIME_MIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*min").expect("runtime min regex"));
static RUNTIME_CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+):([0-9]+)").expect("runtime clock regex"));
static RUNTIME_HM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)h\s*([0-9]+)m").expect("runtime h/m regex"));

/// Result field a label can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Year,
    Director,
    Genre,
    Format,
    Sides,
    Runtime,
}

/// Label keywords per field, checked in order; first containment wins.
const LABEL_ROUTES: &[(Field, &[&str])] = &[
    (Field::Title, &["title"]),
    (Field::Year, &["year", "date"]),
    (Field::Director, &["director", "directed"]),
    (Field::Genre, &["genre", "category"]),
    (Field::Format, &["format"]),
    (Field::Sides, &["sides"]),
    (Field::Runtime, &["runtime", "duration"]),
];

/// Find the first run of exactly four ASCII digits.
pub fn parse_year(text: &str) -> Option<u32> {
    YEAR.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Parse a runtime in minutes from `120 min`, `2:30` or `1h 30m` forms.
pub fn parse_runtime_minutes(text: &str) -> Option<u32> {
    let text = text.to_lowercase();

    if let Some(caps) = RUNTIME_MIN.captures(&text) {
        return caps[1].parse().ok();
    }

    for pattern in [&*RUNTIME_CLOCK, &*RUNTIME_HM] {
        if let Some(caps) = pattern.captures(&text) {
            let hours: u32 = caps[1].parse().ok()?;
            let minutes: u32 = caps[2].parse().ok()?;
            return hours.checked_mul(60)?.checked_add(minutes);
        }
    }

    None
}

/// Resolve which field a label targets, if any.
pub fn field_for_label(label: &str) -> Option<Field> {
    let label = label.to_lowercase();
    LABEL_ROUTES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| label.contains(k)))
        .map(|(field, _)| *field)
}

/// Assign `value` to the field `label` routes to.
///
/// Unparseable years, sides and runtimes leave the field unchanged; an
/// unknown label is ignored.
pub fn route_label(label: &str, value: &str, result: &mut LookupResult) {
    let Some(field) = field_for_label(label.trim()) else {
        return;
    };
    let value = value.trim();

    match field {
        Field::Title => result.title = value.to_string(),
        Field::Year => {
            if let Some(year) = parse_year(value) {
                result.year = year;
            }
        }
        Field::Director => result.director = value.to_string(),
        Field::Genre => result.genre = value.to_string(),
        Field::Format => result.format = value.to_string(),
        Field::Sides => {
            if let Some(sides) = value
                .split_whitespace()
                .next()
                .and_then(|token| token.parse().ok())
            {
                result.sides = sides;
            }
        }
        Field::Runtime => {
            if let Some(runtime) = parse_runtime_minutes(value) {
                result.runtime = runtime;
            }
        }
    }
}

/// Route every `label: value` line of a free-text block.
///
/// Lines with no colon or more than one colon are skipped.
pub fn parse_label_lines(text: &str, result: &mut LookupResult) {
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let mut parts = line.split(':');
        if let (Some(label), Some(value), None) = (parts.next(), parts.next(), parts.next()) {
            route_label(label, value, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        let cases = [
            ("1995", Some(1995)),
            ("Released in 1995", Some(1995)),
            ("1995-12-25", Some(1995)),
            ("The year was 2001", Some(2001)),
            ("no year here", None),
            ("", None),
            ("012345678905", None),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_year(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_parse_runtime_minutes() {
        let cases = [
            ("120 min", Some(120)),
            ("120min", Some(120)),
            ("121 MIN", Some(121)),
            ("2:00", Some(120)),
            ("2:30", Some(150)),
            ("1:45", Some(105)),
            ("1h 30m", Some(90)),
            ("2h15m", Some(135)),
            ("garbage", None),
            ("", None),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_runtime_minutes(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_minutes_pattern_wins_over_clock() {
        assert_eq!(parse_runtime_minutes("1:45 (105 min)"), Some(105));
    }

    #[test]
    fn test_field_for_label() {
        let cases = [
            ("title", Some(Field::Title)),
            ("TITLE", Some(Field::Title)),
            ("movie title", Some(Field::Title)),
            ("release year", Some(Field::Year)),
            ("Release Date", Some(Field::Year)),
            ("directed by", Some(Field::Director)),
            ("category", Some(Field::Genre)),
            ("disc format", Some(Field::Format)),
            ("number of sides", Some(Field::Sides)),
            ("duration", Some(Field::Runtime)),
            ("invalid", None),
        ];
        for (label, expected) in cases {
            assert_eq!(field_for_label(label), expected, "label: {label:?}");
        }
    }

    #[test]
    fn test_title_keyword_checked_first() {
        assert_eq!(field_for_label("title runtime"), Some(Field::Title));
    }

    #[test]
    fn test_route_label_assigns_parsed_values() {
        let mut result = LookupResult::new("1");
        route_label("Title:", " Star Wars ", &mut result);
        route_label("Year", "May 1977", &mut result);
        route_label("Sides", "4 sides", &mut result);
        route_label("Runtime", "121 min", &mut result);
        route_label("Label", "Fox Video", &mut result);

        assert_eq!(result.title, "Star Wars");
        assert_eq!(result.year, 1977);
        assert_eq!(result.sides, 4);
        assert_eq!(result.runtime, 121);
        assert!(!result.found);
    }

    #[test]
    fn test_route_label_skips_unparseable_sides() {
        let mut result = LookupResult::new("1");
        result.sides = 2;
        route_label("sides", "", &mut result);
        route_label("sides", "two", &mut result);
        assert_eq!(result.sides, 2);
    }

    #[test]
    fn test_route_label_last_assignment_wins() {
        let mut result = LookupResult::new("1");
        route_label("director", "First", &mut result);
        route_label("directed by", "Second", &mut result);
        assert_eq!(result.director, "Second");
    }

    #[test]
    fn test_parse_label_lines_requires_single_colon() {
        let mut result = LookupResult::new("1");
        let text = "\n  Title: Blade Runner\nYear 1982\nFormat: CLV: CAV\n  Genre : Sci-Fi  \n";
        parse_label_lines(text, &mut result);

        assert_eq!(result.title, "Blade Runner");
        assert_eq!(result.year, 0);
        assert_eq!(result.format, "");
        assert_eq!(result.genre, "Sci-Fi");
    }
}
