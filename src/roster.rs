//! Roster pipeline: one entry per player row across the four position
//! tables (goalkeepers, defenders, midfielders, attackers).
//!
//! Two layout variants are resolved up front and per row:
//!
//! * Own-roster column shift: on the viewer's own club the tables gain a
//!   leading tactics-selection column, detected through `div#top_positions`
//!   having children; every column index then shifts by one, uniformly.
//! * Loaned-out rows: an info cell without element children means the
//!   acting club renders no attribute data for the row, so the attribute
//!   sub-record is skipped by construction instead of failing mid-cell.

use dom_query::{Document, Selection};

use crate::decode;
use crate::dom;
use crate::error::{Error, Result};
use crate::locate;
use crate::patterns;
use crate::records::{CountryRef, PlayerAttributes, RosterEntry};

/// The icon token that stands for "no national team"; decodes to `None`.
const NO_NATIONAL_TEAM: &str = "DEF";

/// Extracts every listed player from a club players page, in document order.
pub fn parse_roster(doc: &Document) -> Result<Vec<RosterEntry>> {
    let tables = locate::collect_doc(doc, "table.forumline");
    if tables.is_empty() {
        return Err(Error::StructureNotFound(
            "squad position tables (table.forumline)".to_string(),
        ));
    }

    let tactics = locate::require_doc(
        doc,
        "div#top_positions",
        "tactics slot container (div#top_positions)",
    )?;
    let shift = usize::from(!dom::element_children(&tactics).is_empty());

    let mut entries = Vec::new();
    for table in &tables {
        for row in locate::collect(table, "tr[class*='matches_row']") {
            entries.push(parse_row(&row, shift)?);
        }
    }
    Ok(entries)
}

fn parse_row(row: &Selection, shift: usize) -> Result<RosterEntry> {
    let cells = dom::cells(row);
    if cells.len() < 6 + shift {
        return Err(Error::StructureNotFound(format!(
            "squad row cells: expected {}, found {}",
            6 + shift,
            cells.len()
        )));
    }
    let position_el = &cells[shift];
    let info_el = &cells[1 + shift];
    let name_el = &cells[2 + shift];
    let age_el = &cells[3 + shift];
    let nationality_el = &cells[4 + shift];
    let rating_el = &cells[5 + shift];

    let player_link = locate::require(name_el, "a", "player link")?;
    let id = decode::id_from_href(
        &patterns::PLAYER_ID,
        &locate::require_attr(&player_link, "href", "player link")?,
        "playerID href",
    )?;

    // Loaned players list as "Name (Owning Team)"; the qualifier is
    // stripped and kept as a flag. Independent of the loaned-out layout
    // below: a loan inside the club's own reserve context still renders
    // attributes.
    let raw_name = dom::text_content(&player_link).trim().to_string();
    let (name, on_loan) = match patterns::LOANED_NAME.captures(&raw_name) {
        Some(caps) => (caps[1].to_string(), true),
        None => (raw_name, false),
    };

    let loaned_out = dom::first_element_child(info_el).is_none();
    let attributes = if loaned_out { None } else { Some(parse_attributes(info_el)?) };

    let flag = dom::first_element_child(nationality_el)
        .ok_or_else(|| Error::StructureNotFound("nationality flag icon".to_string()))?;
    let country = CountryRef {
        name: locate::require_attr(&flag, "title", "nationality flag icon")?,
        code: decode::capture(
            &patterns::SMALL_FLAG_CODE,
            &locate::require_attr(&flag, "src", "nationality flag icon")?,
            "small flag country code",
        )?,
    };

    Ok(RosterEntry {
        id,
        name,
        on_loan,
        age: decode::uint(&dom::text_content(age_el))?,
        country,
        rating: decode::uint(&dom::text_content(rating_el))?,
        position: dom::text_content(position_el).trim().to_string(),
        national_team: national_team_tag(position_el)?,
        transfer_listed: !name_el.select(".pl_tra").is_empty(),
        bid_started: !name_el.select(".pl_bid").is_empty(),
        injured: !name_el.select(".pl_injured").is_empty(),
        red_card: !name_el.select(".pl_cardr").is_empty(),
        attributes,
    })
}

/// National-team tag from the position cell's status icon class
/// (`br_icon` → `BR`). The default icon token maps to no tag; whether that
/// token is true domain semantics or a display quirk is unverified, so the
/// behavior is preserved as observed.
fn national_team_tag(position_el: &Selection) -> Result<Option<String>> {
    let icon = dom::first_element_child(position_el)
        .ok_or_else(|| Error::StructureNotFound("position cell status icon".to_string()))?;
    let class = locate::require_attr(&icon, "class", "position cell status icon")?;
    let tag = class.strip_suffix("_icon").unwrap_or(&class).to_uppercase();
    Ok(if tag == NO_NATIONAL_TEAM { None } else { Some(tag) })
}

/// Attribute values from the info cell's nested skill grid.
///
/// The grid mixes label cells and value cells; only classed cells with a
/// nonzero numeric text are skill values, read in grid order.
fn parse_attributes(info_el: &Selection) -> Result<PlayerAttributes> {
    let mut values = Vec::new();
    for cell in locate::collect(info_el, "td[class]") {
        let text = dom::text_content(&cell);
        if let Ok(value) = text.trim().parse::<u8>() {
            if value != 0 {
                values.push(value);
            }
        }
    }
    if values.len() < 21 {
        return Err(Error::StructureNotFound(format!(
            "skill grid values: expected 21, found {}",
            values.len()
        )));
    }
    values.truncate(21);
    let grid: [u8; 21] = values
        .try_into()
        .map_err(|_| Error::StructureNotFound("skill grid values".to_string()))?;
    Ok(PlayerAttributes::from_grid(grid))
}
