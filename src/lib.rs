//! # dugout-extract
//!
//! Structured record extraction for Dugout Online pages.
//!
//! This library turns four kinds of already-loaded pages from the Dugout
//! Online football manager into typed records: club info, league standings
//! with round fixtures, the club roster, and full player profiles. It is a
//! pure document-to-record transformer (no network, no persistence, no UI)
//! tuned to one known page layout. Feeding it foreign markup fails with an
//! error naming the missing structural anchor; it never returns a partial
//! record.
//!
//! ## Quick Start
//!
//! ```rust
//! use dugout_extract::{parse_document, parse_league};
//!
//! // A league page without its standings table is rejected outright.
//! let doc = parse_document("<html><body><p>wrong page</p></body></html>");
//! let err = parse_league(&doc).unwrap_err();
//! assert!(err.to_string().contains("table#myTable"));
//! ```
//!
//! Each pipeline runs synchronously over its own input tree and writes only
//! its own freshly allocated record, so concurrent invocations on different
//! documents need no coordination.

mod club;
mod error;
mod league;
mod options;
mod profile;
mod records;
mod roster;

/// DOM primitives over `dom_query`.
pub mod dom;

/// Field decoding: text and attribute content to typed values.
pub mod decode;

/// Character encoding detection and transcoding for byte input.
pub mod encoding;

/// Structural locators that fail loudly when an anchor is missing.
pub mod locate;

/// Compiled regex patterns shared by the pipelines.
pub mod patterns;

// Public API - re-exports
pub use dom_query::Document;
pub use error::{Error, Result};
pub use options::Options;
pub use records::{
    ClubInfo, ClubRef, CoachReport, CountryRef, Fixture, LeagueRef, LeagueSummary, Manager,
    PlayerAttributes, PlayerProfile, Position, PremiumStatus, RosterEntry, RoundFixtures,
    ScoutReport, Stadium, StandingsRow, TalentReport, TeamRef,
};

/// Parses an HTML string into a document for the extraction functions.
#[must_use]
pub fn parse_document(html: &str) -> Document {
    dom::parse(html)
}

/// Parses raw HTML bytes, honoring a `<meta>` charset declaration.
#[must_use]
pub fn parse_document_bytes(html: &[u8]) -> Document {
    dom::parse(&encoding::transcode_to_utf8(html))
}

/// Extracts the club record from a club info page.
///
/// Premium view data (`viewed_by`, `fame_rank`) is populated only when the
/// page shows the premium icon; see [`PremiumStatus`].
#[allow(clippy::missing_errors_doc)]
pub fn parse_club_info(doc: &Document) -> Result<ClubInfo> {
    club::parse_club_info(doc, &Options::default())
}

/// Extracts the club record, resolving the league href against
/// `options.base_url` when set.
#[allow(clippy::missing_errors_doc)]
pub fn parse_club_info_with_options(doc: &Document, options: &Options) -> Result<ClubInfo> {
    club::parse_club_info(doc, options)
}

/// Extracts league standings and round fixtures from a league page.
#[allow(clippy::missing_errors_doc)]
pub fn parse_league(doc: &Document) -> Result<LeagueSummary> {
    league::parse_league(doc)
}

/// Extracts every listed player from a club players page, across all four
/// position tables in document order.
///
/// The viewer's own roster carries an extra leading tactics column; the
/// pipeline detects this and shifts all column offsets accordingly.
#[allow(clippy::missing_errors_doc)]
pub fn parse_roster(doc: &Document) -> Result<Vec<RosterEntry>> {
    roster::parse_roster(doc)
}

/// Extracts the full player record from an individual player's page.
#[allow(clippy::missing_errors_doc)]
pub fn parse_player_profile(doc: &Document) -> Result<PlayerProfile> {
    profile::parse_player_profile(doc)
}
