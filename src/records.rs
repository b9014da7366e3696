//! Record types produced by the four extraction pipelines.
//!
//! All records are plain immutable values, built fresh per call and owned by
//! the caller. Serde names follow the camelCase shape of the upstream page
//! tooling, so serialized records are drop-in compatible with it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A country as displayed on a page: full name plus the two-letter code the
/// flag icon URL encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRef {
    pub name: String,
    pub code: String,
}

/// A team referenced from a standings row or fixture line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: u32,
    pub name: String,
}

// =============================================================================
// Club info
// =============================================================================

/// Stadium name and total capacity from the club quick-facts table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stadium {
    pub name: String,
    pub capacity: u32,
}

/// The club's manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub name: String,
    pub id: u32,
}

/// The league the club currently plays in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueRef {
    pub name: String,
    pub url: String,
}

/// Premium-account view data.
///
/// `viewed_by` and `fame_rank` are only rendered by the page when the
/// premium icon is shown, so they are `Some` exactly when `active` is true.
/// This is a lifecycle invariant of the source, not missing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumStatus {
    pub active: bool,
    pub viewed_by: Option<u32>,
    pub fame_rank: Option<u32>,
}

/// Everything the club info page states about one club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubInfo {
    pub id: u32,
    pub team_name: String,
    pub short_name: String,
    pub country: CountryRef,
    pub stadium: Stadium,
    pub rating: u32,
    pub manager: Manager,
    pub league: LeagueRef,
    /// Opaque display string; the format depends on the viewer's settings
    /// upstream and is intentionally not normalized.
    pub last_active: String,
    pub trophies: Vec<String>,
    pub achievements: Vec<String>,
    pub premium: PremiumStatus,
}

// =============================================================================
// League summary
// =============================================================================

/// One standings row, in the document's (already rank-sorted) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub pos: u32,
    pub team_id: u32,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

/// One fixture line below the standings table.
///
/// `score` is free-form: unplayed fixtures carry a placeholder instead of a
/// numeric score and must not be parsed numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub home: TeamRef,
    pub away: TeamRef,
    pub game_id: u32,
    pub score: String,
}

/// All fixtures of one round, with the round's scheduled date and time as
/// free-form strings (their format follows the viewer's settings upstream).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundFixtures {
    pub round: u32,
    pub date: String,
    pub time: String,
    pub fixtures: Vec<Fixture>,
}

/// Standings plus round fixtures from one league page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSummary {
    pub table: Vec<StandingsRow>,
    pub rounds: Vec<RoundFixtures>,
}

// =============================================================================
// Players
// =============================================================================

/// The fixed 21-skill schema shared by roster rows and profile pages.
///
/// Field order mirrors the upstream skill grid, row-major across its five
/// columns; `from_grid` fills the struct in exactly that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttributes {
    pub reflexes: u8,
    pub tackling: u8,
    pub creativity: u8,
    pub shooting: u8,
    pub team_work: u8,
    pub one_on_ones: u8,
    pub marking: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub speed: u8,
    pub handling: u8,
    pub heading: u8,
    pub long_shots: u8,
    pub positioning: u8,
    pub strength: u8,
    pub communication: u8,
    pub crossing: u8,
    pub first_touch: u8,
    pub aggression: u8,
    pub influence: u8,
    pub eccentricity: u8,
}

impl PlayerAttributes {
    /// Builds the schema from grid-ordered values.
    #[must_use]
    pub fn from_grid(v: [u8; 21]) -> Self {
        Self {
            reflexes: v[0],
            tackling: v[1],
            creativity: v[2],
            shooting: v[3],
            team_work: v[4],
            one_on_ones: v[5],
            marking: v[6],
            passing: v[7],
            dribbling: v[8],
            speed: v[9],
            handling: v[10],
            heading: v[11],
            long_shots: v[12],
            positioning: v[13],
            strength: v[14],
            communication: v[15],
            crossing: v[16],
            first_touch: v[17],
            aggression: v[18],
            influence: v[19],
            eccentricity: v[20],
        }
    }
}

/// One row of the four roster position tables.
///
/// `attributes` is `None` exactly when the row is loaned out (the source
/// never renders attribute data for such rows); this is independent of the
/// `on_loan` name-text flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub on_loan: bool,
    pub age: u32,
    pub country: CountryRef,
    pub rating: u32,
    /// Position label as displayed in the table, e.g. `GK` or `DC, DR`.
    pub position: String,
    pub national_team: Option<String>,
    pub transfer_listed: bool,
    pub bid_started: bool,
    pub injured: bool,
    pub red_card: bool,
    pub attributes: Option<PlayerAttributes>,
}

/// The club a profiled player belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubRef {
    pub id: u32,
    pub name: String,
    pub country: CountryRef,
}

/// A single coach's evaluation row from the talent panel.
///
/// `jpt` is `None` when the coach has retired (the cell carries a literal
/// `n/a`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachReport {
    pub coach: String,
    pub number_of_reports: u32,
    pub jpt: Option<u32>,
    pub average: f32,
}

/// A single scout's evaluation row from the talent panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutReport {
    pub scout: String,
    pub number_of_reports: u32,
    pub average: f32,
}

/// Talent panel contents.
///
/// Fully empty (all `None`) when no scouting or coaching investment has been
/// made yet; the panel then shows a zero-star average and no tables at all.
/// Averages have half-star resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentReport {
    pub average: Option<f32>,
    pub coaches_reports: Option<Vec<CoachReport>>,
    pub scout_reports: Option<Vec<ScoutReport>>,
}

/// The ten pitch positions a player's main-position marker can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Gk,
    Dc,
    Dl,
    Dr,
    Mc,
    Ml,
    Mr,
    Fc,
    Fl,
    Fr,
}

/// Marker coordinates on the position chart, keyed as `top` + `left` pixel
/// offsets concatenated. The chart layout is fixed upstream, so the table is
/// a compile-time constant.
const POSITION_COORDS: [(&str, Position); 10] = [
    ("69px10px", Position::Gk),
    ("69px40px", Position::Dc),
    ("20px40px", Position::Dl),
    ("117px40px", Position::Dr),
    ("69px108px", Position::Mc),
    ("20px108px", Position::Ml),
    ("117px108px", Position::Mr),
    ("69px185px", Position::Fc),
    ("20px185px", Position::Fl),
    ("117px185px", Position::Fr),
];

impl Position {
    /// Resolves a concatenated `top`+`left` coordinate key to a position.
    pub fn from_coords(key: &str) -> Result<Self> {
        POSITION_COORDS
            .iter()
            .find(|(coords, _)| *coords == key)
            .map(|(_, position)| *position)
            .ok_or_else(|| Error::UnknownEnumKey {
                table: "position coordinates",
                key: key.to_string(),
            })
    }

    /// The two-letter position code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Gk => "GK",
            Self::Dc => "DC",
            Self::Dl => "DL",
            Self::Dr => "DR",
            Self::Mc => "MC",
            Self::Ml => "ML",
            Self::Mr => "MR",
            Self::Fc => "FC",
            Self::Fl => "FL",
            Self::Fr => "FR",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Everything a player's own page states about them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub country: CountryRef,
    pub club: ClubRef,
    pub attributes: PlayerAttributes,
    /// Condition percentage, 0-100.
    pub condition: u32,
    pub morale: String,
    pub weeks_at_club: u32,
    pub preferred_foot: String,
    pub form: String,
    /// Chronological form samples; empty when the chart URL carries none.
    pub form_history: Vec<u32>,
    pub talent_report: TalentReport,
    pub experience: u32,
    pub position: Position,
    /// `None` exactly when the player is contract-free (the contract cell
    /// shows a literal `/`); `wage` is `None` in the same case.
    pub contract: Option<u32>,
    pub wage: Option<u32>,
    pub estimated_value: u64,
    /// Traits genuinely about this player; assistant commentary rows that
    /// never mention the player's first name are filtered out.
    pub personalities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_coords_resolve_all_ten_codes() {
        let codes: Vec<&str> = POSITION_COORDS
            .iter()
            .map(|(coords, _)| Position::from_coords(coords).unwrap().code())
            .collect();
        assert_eq!(
            codes,
            ["GK", "DC", "DL", "DR", "MC", "ML", "MR", "FC", "FL", "FR"]
        );
    }

    #[test]
    fn unknown_coords_fail_with_enum_key_error() {
        let err = Position::from_coords("12px34px").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownEnumKey { table: "position coordinates", .. }
        ));
    }

    #[test]
    fn attributes_fill_in_grid_order() {
        let mut grid = [0_u8; 21];
        for (i, slot) in grid.iter_mut().enumerate() {
            *slot = u8::try_from(i).unwrap() + 1;
        }
        let attrs = PlayerAttributes::from_grid(grid);
        assert_eq!(attrs.reflexes, 1);
        assert_eq!(attrs.team_work, 5);
        assert_eq!(attrs.one_on_ones, 6);
        assert_eq!(attrs.strength, 15);
        assert_eq!(attrs.eccentricity, 21);
    }

    #[test]
    fn serde_names_match_upstream_tooling() {
        let premium = PremiumStatus { active: true, viewed_by: Some(1204), fame_rank: Some(3) };
        let json = serde_json::to_value(&premium).unwrap();
        assert_eq!(json["viewedBy"], 1204);
        assert_eq!(json["fameRank"], 3);

        let json = serde_json::to_value(Position::Fl).unwrap();
        assert_eq!(json, "FL");
    }
}
