//! Compiled regex patterns for field decoding.
//!
//! All patterns are compiled once at startup using `LazyLock` and shared by
//! the four pipelines. The pattern strings are part of the implicit wire
//! format between this engine and the page producer: href conventions encode
//! entity ids, icon URL substrings encode country codes, and a handful of
//! composite display strings carry two or three fields each.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Href id conventions
// =============================================================================

/// Club id embedded in club-page hrefs, e.g. `.../clubid/2077/`.
pub static CLUB_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"clubid/(\d+)").expect("CLUB_ID regex"));

/// Game id embedded in match-report hrefs.
pub static GAME_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gameid/(\d+)").expect("GAME_ID regex"));

/// Player id embedded in player-page hrefs. The upstream URLs really do use
/// mixed case here.
pub static PLAYER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playerID/(\d+)").expect("PLAYER_ID regex"));

/// Manager id embedded in manager-page hrefs.
pub static MANAGER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"managerid/(\d+)").expect("MANAGER_ID regex"));

// =============================================================================
// Composite display strings
// =============================================================================

/// Stadium cell: `Name (current/capacity)`. Group 1 is the name, group 2 the
/// capacity; the current-attendance figure is not captured.
pub static STADIUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)\([0-9]*/([0-9]*)\)").expect("STADIUM regex"));

/// Round header above each fixture table: `Round N matches (date time )`.
pub static ROUND_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Round (\d+) matches\s?\((\S+)\s?(\S+)\s?\s?\)").expect("ROUND_HEADER regex")
});

/// Roster name cell of a loaned player: `Name (Owning Team)`.
pub static LOANED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^()]+) \([^()]*\)$").expect("LOANED_NAME regex"));

/// Report table name cell: `Name (N reports)` / `Name (N scoutings)`.
pub static NAME_WITH_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\((\d+)\s*[^)]+\)$").expect("NAME_WITH_COUNT regex"));

// =============================================================================
// Icon URL conventions
// =============================================================================

/// Country code from a round flag icon, `images/flags_round/half/br.png` or
/// `images/flags_round/br.png`.
pub static ROUND_FLAG_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"flags_round/(?:\w+/)?(\w+)\.png").expect("ROUND_FLAG_CODE regex")
});

/// Country code from a small flag icon, `images/flags_small/new/br.png`.
pub static SMALL_FLAG_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"flags_small/new/(\w+)\.png").expect("SMALL_FLAG_CODE regex")
});

/// Form history values carried in the chart image URL, `form_history=4-5-7`.
pub static FORM_HISTORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"form_history=([\d-]+)").expect("FORM_HISTORY regex"));

// =============================================================================
// Inline style coordinates
// =============================================================================

/// `top` offset of a positioned marker, `top: 69px`.
pub static STYLE_TOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"top:\s*(\d+px)").expect("STYLE_TOP regex"));

/// `left` offset of a positioned marker, `left: 10px`.
pub static STYLE_LEFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"left:\s*(\d+px)").expect("STYLE_LEFT regex"));

// =============================================================================
// Text cleanup
// =============================================================================

/// Everything that is not a decimal digit.
pub static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D+").expect("NON_DIGIT regex"));

/// The final whitespace-separated token of a full name. Removing it leaves
/// the first name(s) used to recognize genuine personality traits.
pub static LAST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\S+$").expect("LAST_NAME regex"));
