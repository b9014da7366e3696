//! Field Decoder: raw text and attribute content to typed values.
//!
//! Numeric decoding strips all non-digit characters before parsing, so
//! thousands separators, currency symbols and percent signs decode safely.
//! Negative numbers cannot be represented; there are none in this domain.
//! Composite strings go through the fixed capture patterns in
//! [`crate::patterns`]; a miss is always an explicit error, never a default.

use std::str::FromStr;

use dom_query::Selection;
use regex::Regex;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns;

/// Parses a number out of arbitrary display text by dropping every
/// non-digit character first (`"1,204"` → 1204, `"87%"` → 87).
pub fn digits<T: FromStr>(text: &str) -> Result<T> {
    let stripped = patterns::NON_DIGIT.replace_all(text, "");
    stripped.parse().map_err(|_| Error::MalformedPattern {
        pattern: "digit sequence",
        text: text.to_string(),
    })
}

/// Parses a plain unsigned number from already-clean cell text.
pub fn uint<T: FromStr>(text: &str) -> Result<T> {
    text.trim().parse().map_err(|_| Error::MalformedPattern {
        pattern: "unsigned integer",
        text: text.to_string(),
    })
}

/// First capture group of `re` against `text`.
pub fn capture(re: &Regex, text: &str, pattern: &'static str) -> Result<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::MalformedPattern {
            pattern,
            text: text.to_string(),
        })
}

/// Entity id encoded in an href by one of the `…id/(\d+)` conventions.
pub fn id_from_href(re: &Regex, href: &str, pattern: &'static str) -> Result<u32> {
    uint(&capture(re, href, pattern)?)
}

/// `"Name (N reports)"` → name and report count.
pub fn name_with_count(text: &str) -> Result<(String, u32)> {
    let trimmed = text.trim();
    let caps =
        patterns::NAME_WITH_COUNT
            .captures(trimmed)
            .ok_or_else(|| Error::MalformedPattern {
                pattern: "name with report count",
                text: trimmed.to_string(),
            })?;
    Ok((caps[1].to_string(), uint(&caps[2])?))
}

/// Stadium cell `"Name (current/capacity)"` → name and capacity.
pub fn stadium(text: &str) -> Result<(String, u32)> {
    let caps = patterns::STADIUM
        .captures(text)
        .ok_or_else(|| Error::MalformedPattern {
            pattern: "stadium name and capacity",
            text: text.to_string(),
        })?;
    Ok((caps[1].trim().to_string(), uint(&caps[2])?))
}

/// Round header `"Round N matches (date time )"` → round number, date, time.
pub fn round_header(text: &str) -> Result<(u32, String, String)> {
    let trimmed = text.trim();
    let caps = patterns::ROUND_HEADER
        .captures(trimmed)
        .ok_or_else(|| Error::MalformedPattern {
            pattern: "round header",
            text: trimmed.to_string(),
        })?;
    Ok((uint(&caps[1])?, caps[2].to_string(), caps[3].to_string()))
}

/// Concatenated `top`+`left` pixel offsets of a positioned marker's inline
/// style, the key format of the position coordinate table.
pub fn style_coords(style: &str) -> Result<String> {
    let top = capture(&patterns::STYLE_TOP, style, "marker top offset")?;
    let left = capture(&patterns::STYLE_LEFT, style, "marker left offset")?;
    Ok(format!("{top}{left}"))
}

/// Half-star-resolution rating of a starred cell.
///
/// Counts the cell's direct `li` star markers: full markers count one, the
/// half marker counts one half. A cell without markers rates 0.
#[must_use]
pub fn half_stars(sel: &Selection) -> f32 {
    let mut full = 0_usize;
    let mut half = 0_usize;
    for child in dom::element_children(sel) {
        if dom::tag_name(&child).as_deref() != Some("li") {
            continue;
        }
        if has_class_token(&child, "fa-star") {
            full += 1;
        } else if has_class_token(&child, "fa-star-half-o") {
            half += 1;
        }
    }
    full as f32 + half as f32 / 2.0
}

/// The first name(s) of a display name: everything up to the final
/// whitespace-separated token. Single-token names pass through unchanged.
#[must_use]
pub fn first_name(name: &str) -> &str {
    match patterns::LAST_NAME.find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}

fn has_class_token(sel: &Selection, token: &str) -> bool {
    dom::attr(sel, "class")
        .is_some_and(|class| class.split_whitespace().any(|t| t == token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_strip_separators_and_symbols() {
        assert_eq!(digits::<u32>("1,204").unwrap(), 1204);
        assert_eq!(digits::<u32>("87%").unwrap(), 87);
        assert_eq!(digits::<u64>("€ 2.300.000").unwrap(), 2_300_000);
        assert!(digits::<u32>("n/a").is_err());
    }

    #[test]
    fn uint_rejects_embedded_garbage() {
        assert_eq!(uint::<u32>(" 42 ").unwrap(), 42);
        assert!(uint::<u32>("42nd").is_err());
    }

    #[test]
    fn name_with_count_handles_parenthesized_suffix() {
        let (name, count) = name_with_count("  Edson Costa (12 reports)  ").unwrap();
        assert_eq!(name, "Edson Costa");
        assert_eq!(count, 12);
        assert!(name_with_count("Edson Costa").is_err());
    }

    #[test]
    fn stadium_splits_name_from_capacity() {
        let (name, capacity) = stadium("Westfalenpark (18250/25000)").unwrap();
        assert_eq!(name, "Westfalenpark");
        assert_eq!(capacity, 25000);
    }

    #[test]
    fn style_coords_are_order_independent() {
        assert_eq!(style_coords("top: 69px; left: 10px;").unwrap(), "69px10px");
        assert_eq!(style_coords("left:185px;top:20px").unwrap(), "20px185px");
        assert!(style_coords("top: 69px").is_err());
    }

    #[test]
    fn half_stars_count_both_marker_kinds() {
        let doc = dom::parse(
            "<table><tr><td><li class='fa fa-star'></li><li class='fa fa-star'></li>\
             <li class='fa fa-star-half-o'></li><li class='fa fa-star-o'></li></td></tr></table>",
        );
        let cell = doc.select("td");
        assert_eq!(half_stars(&cell), 2.5);
    }

    #[test]
    fn half_stars_rate_zero_without_markers() {
        let doc = dom::parse("<table><tr><td>no rating yet</td></tr></table>");
        assert_eq!(half_stars(&doc.select("td")), 0.0);
    }

    #[test]
    fn first_name_drops_only_the_final_token() {
        assert_eq!(first_name("Jan van der Berg"), "Jan van der");
        assert_eq!(first_name("Ronaldinho"), "Ronaldinho");
    }
}
