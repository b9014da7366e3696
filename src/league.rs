//! League pipeline: standings table plus the round fixture tables below it.

use dom_query::{Document, Selection};

use crate::decode;
use crate::dom;
use crate::error::{Error, Result};
use crate::locate;
use crate::patterns;
use crate::records::{Fixture, LeagueSummary, RoundFixtures, StandingsRow, TeamRef};

/// Extracts standings and round fixtures from a league page.
pub fn parse_league(doc: &Document) -> Result<LeagueSummary> {
    Ok(LeagueSummary {
        table: parse_standings(doc)?,
        rounds: parse_rounds(doc)?,
    })
}

fn parse_standings(doc: &Document) -> Result<Vec<StandingsRow>> {
    let table = locate::require_doc(doc, "table#myTable", "league standings table (table#myTable)")?;

    let mut standings = Vec::new();
    // First row is the header.
    for row in locate::collect(&table, "tr").iter().skip(1) {
        standings.push(parse_standings_row(row)?);
    }
    Ok(standings)
}

fn parse_standings_row(row: &Selection) -> Result<StandingsRow> {
    // Cell 2 holds a decoration icon and carries no field.
    let [pos_el, team_el, _, played_el, won_el, drawn_el, lost_el, gf_el, ga_el, pts_el] =
        locate::fixed::<10>(dom::cells(row), "standings row cells")?;

    // Team id and name come from the one anchor so they can never disagree.
    let team_link = locate::require(&team_el, "a", "standings team link")?;
    let team_id = decode::id_from_href(
        &patterns::CLUB_ID,
        &locate::require_attr(&team_link, "href", "standings team link")?,
        "clubid href",
    )?;

    Ok(StandingsRow {
        pos: decode::uint(&dom::text_content(&pos_el))?,
        team_id,
        team_name: dom::text_content(&team_link).trim().to_string(),
        played: decode::uint(&dom::text_content(&played_el))?,
        won: decode::uint(&dom::text_content(&won_el))?,
        drawn: decode::uint(&dom::text_content(&drawn_el))?,
        lost: decode::uint(&dom::text_content(&lost_el))?,
        goals_for: decode::uint(&dom::text_content(&gf_el))?,
        goals_against: decode::uint(&dom::text_content(&ga_el))?,
        points: decode::uint(&dom::text_content(&pts_el))?,
    })
}

fn parse_rounds(doc: &Document) -> Result<Vec<RoundFixtures>> {
    let headers = locate::collect_doc(doc, "div.cup_title");
    let tables = locate::collect_doc(doc, "div.cup_title + div > table");
    if headers.len() != tables.len() {
        return Err(Error::StructureNotFound(format!(
            "round fixture tables: {} headers, {} tables",
            headers.len(),
            tables.len()
        )));
    }

    let mut rounds = Vec::with_capacity(headers.len());
    for (header, table) in headers.iter().zip(&tables) {
        let (round, date, time) = decode::round_header(&dom::text_content(header))?;
        let mut fixtures = Vec::new();
        for row in locate::collect(table, "tr") {
            fixtures.push(parse_fixture(&row)?);
        }
        rounds.push(RoundFixtures { round, date, time, fixtures });
    }
    Ok(rounds)
}

fn parse_fixture(row: &Selection) -> Result<Fixture> {
    let [home_el, game_el, away_el] =
        locate::fixed::<3>(locate::collect(row, "a"), "fixture row links")?;

    Ok(Fixture {
        home: fixture_team(&home_el)?,
        away: fixture_team(&away_el)?,
        game_id: decode::id_from_href(
            &patterns::GAME_ID,
            &locate::require_attr(&game_el, "href", "fixture game link")?,
            "gameid href",
        )?,
        // Placeholder text for unplayed fixtures stays as-is.
        score: dom::text_content(&game_el).trim().to_string(),
    })
}

fn fixture_team(link: &Selection) -> Result<TeamRef> {
    Ok(TeamRef {
        id: decode::id_from_href(
            &patterns::CLUB_ID,
            &locate::require_attr(link, "href", "fixture team link")?,
            "clubid href",
        )?,
        name: dom::text_content(link).trim().to_string(),
    })
}
