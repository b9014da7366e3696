//! Player Profile pipeline.
//!
//! The profile page carries the highest field count of the four pipelines
//! and all of the real state-resolution logic: the talent panel's table
//! ordering is ambiguous and resolved structurally, and the contract cells
//! switch between populated and contract-free layouts.

use dom_query::{Document, Selection};

use crate::decode;
use crate::dom;
use crate::error::{Error, Result};
use crate::locate;
use crate::patterns;
use crate::records::{
    ClubRef, CoachReport, CountryRef, PlayerAttributes, PlayerProfile, Position, ScoutReport,
    TalentReport,
};

/// Extracts the full player record from an individual player's page.
pub fn parse_player_profile(doc: &Document) -> Result<PlayerProfile> {
    // The page sections are unlabeled div siblings of the skill panel;
    // destructured by position, skipping decoration divs.
    let skills_anchor = locate::require_doc(doc, "#main-1", "player page skill panel (#main-1)")?;
    let container = skills_anchor.parent();
    if container.is_empty() {
        return Err(Error::StructureNotFound(
            "player page section container".to_string(),
        ));
    }
    let [header_el, _, bio_el, basic_el, main_el] = locate::fixed::<5>(
        div_children(&container),
        "player page sections",
    )?;
    let [skills_el, personality_el, positions_el, _, economics_el] = locate::fixed::<5>(
        div_children(&main_el),
        "player page main panels",
    )?;

    let [id_el, country_flag_el, name_el] = locate::fixed::<3>(
        locate::collect(&header_el, ".player_id_txt, img, .player_name"),
        "player header fields",
    )?;
    let [club_country_el, club_el, _, age_el] =
        locate::fixed::<4>(locate::collect(&bio_el, "td"), "player bio cells")?;

    let basic_table = locate::require(&basic_el, "table", "basic info table")?;
    let [_, condition_el, _, morale_el, _, weeks_el, talent_el, _, foot_el, _, form_el, _, exp_el] =
        locate::fixed::<13>(
            locate::direct_row_cells(&basic_table, "basic info table")?,
            "basic info cells",
        )?;

    let economics_table = locate::require(&economics_el, "table", "economics table")?;
    let [_, contract_el, _, wage_el, _, value_el] = locate::fixed::<6>(
        locate::direct_row_cells(&economics_table, "economics table")?,
        "economics cells",
    )?;

    // A literal "/" marks a contract-free player; contract and wage are
    // null together, anything else decodes both numerically.
    let contract_text = dom::text_content(&contract_el).trim().to_string();
    let (contract, wage) = if contract_text == "/" {
        (None, None)
    } else {
        (
            Some(decode::uint(&contract_text)?),
            Some(decode::uint(&dom::text_content(&wage_el))?),
        )
    };

    let name = dom::text_content(&name_el).trim().to_string();

    let country = CountryRef {
        name: locate::require_attr(&country_flag_el, "title", "player country flag")?,
        code: decode::capture(
            &patterns::ROUND_FLAG_CODE,
            &locate::require_attr(&country_flag_el, "src", "player country flag")?,
            "round flag country code",
        )?,
    };

    let experience_icon = dom::first_element_child(&exp_el)
        .ok_or_else(|| Error::StructureNotFound("experience icon".to_string()))?;

    Ok(PlayerProfile {
        id: decode::digits(&dom::text_content(&id_el))?,
        age: decode::digits(&dom::text_content(&age_el))?,
        country,
        club: parse_club_ref(&club_el, &club_country_el)?,
        attributes: parse_attributes(&skills_el)?,
        condition: decode::digits(&dom::text_content(&condition_el))?,
        morale: dom::text_content(&morale_el).trim().to_string(),
        weeks_at_club: decode::uint(&dom::text_content(&weeks_el))?,
        preferred_foot: dom::text_content(&foot_el).trim().to_string(),
        form: dom::text_content(&form_el).trim().to_string(),
        form_history: parse_form_history(doc)?,
        talent_report: parse_talent_report(&talent_el)?,
        experience: decode::digits(&locate::require_attr(
            &experience_icon,
            "title",
            "experience icon",
        )?)?,
        position: parse_position(&positions_el)?,
        contract,
        wage,
        estimated_value: decode::digits(&dom::text_content(&value_el))?,
        personalities: parse_personalities(&personality_el, &name),
        name,
    })
}

fn div_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    dom::element_children(sel)
        .into_iter()
        .filter(|child| dom::tag_name(child).as_deref() == Some("div"))
        .collect()
}

fn parse_club_ref(club_el: &Selection, club_country_el: &Selection) -> Result<ClubRef> {
    let club_link = locate::require(club_el, "a", "club link")?;
    let club_flag = locate::require(club_country_el, "img", "club country flag")?;
    Ok(ClubRef {
        id: decode::digits(&locate::require_attr(&club_link, "href", "club link")?)?,
        name: dom::text_content(&club_link).trim().to_string(),
        country: CountryRef {
            name: locate::require_attr(&club_flag, "title", "club country flag")?,
            code: decode::capture(
                &patterns::SMALL_FLAG_CODE,
                &locate::require_attr(&club_flag, "src", "club country flag")?,
                "small flag country code",
            )?,
        },
    })
}

/// Skill values sit in every third cell of the grid rows; each skill is a
/// name cell, a value cell and a trend-arrow cell.
fn parse_attributes(skills_el: &Selection) -> Result<PlayerAttributes> {
    let mut value_cells = Vec::new();
    for row in locate::collect(skills_el, ".row1, .row2") {
        value_cells.extend(locate::collect(&row, "td:nth-child(3n+2)"));
    }
    let cells = locate::fixed::<21>(value_cells, "skill value cells")?;

    let mut grid = [0_u8; 21];
    for (slot, cell) in grid.iter_mut().zip(cells.iter()) {
        *slot = decode::uint(&dom::text_content(cell))?;
    }
    Ok(PlayerAttributes::from_grid(grid))
}

fn parse_position(positions_el: &Selection) -> Result<Position> {
    let marker = locate::require(
        positions_el,
        "div[style*='club/positions-1.png']",
        "main position marker",
    )?;
    let style = locate::require_attr(&marker, "style", "main position marker")?;
    Position::from_coords(&decode::style_coords(&style)?)
}

/// Form history rides in the chart image URL as `form_history=4-5-7`; a
/// chart URL without the parameter means no samples yet.
fn parse_form_history(doc: &Document) -> Result<Vec<u32>> {
    let chart = locate::require_doc(
        doc,
        "img[src*='form_history']",
        "form history chart (img[src*='form_history'])",
    )?;
    let src = locate::require_attr(&chart, "src", "form history chart")?;
    match patterns::FORM_HISTORY.captures(&src) {
        Some(caps) => caps[1].split('-').map(decode::uint).collect(),
        None => Ok(Vec::new()),
    }
}

/// Talent panel resolution.
///
/// A zero-star average means no scouting or coaching investment yet: the
/// sub-record stays fully empty and no table lookup is attempted. Otherwise
/// the zero, one or two report tables are classified structurally (a
/// two-column first header row marks the scout table, whatever its document
/// position) and dispatched accordingly.
fn parse_talent_report(talent_el: &Selection) -> Result<TalentReport> {
    let average = decode::half_stars(talent_el);
    if average == 0.0 {
        return Ok(TalentReport::default());
    }

    let mut tables = locate::collect(talent_el, "#talentPanel table").into_iter();
    let first = tables.next();
    let second = tables.next();

    let scout_first = first
        .as_ref()
        .is_some_and(|table| header_column_count(table) == 2);
    let (scout_table, coach_table) = if scout_first {
        (first, second)
    } else {
        (second, first)
    };

    Ok(TalentReport {
        average: Some(average),
        coaches_reports: coach_table
            .map(|table| parse_coach_reports(&table))
            .transpose()?,
        scout_reports: scout_table
            .map(|table| parse_scout_reports(&table))
            .transpose()?,
    })
}

fn header_column_count(table: &Selection) -> usize {
    locate::collect(table, "tr")
        .first()
        .map_or(0, |row| dom::cells(row).len())
}

fn parse_coach_reports(table: &Selection) -> Result<Vec<CoachReport>> {
    let mut reports = Vec::new();
    for row in locate::collect(table, "tr[class*=row]") {
        let [coach_el, jpt_el, stars_el] = locate::fixed::<3>(dom::cells(&row), "coach report cells")?;
        let (coach, number_of_reports) = decode::name_with_count(&dom::text_content(&coach_el))?;
        // "n/a" means the coach has retired since filing.
        let jpt_text = dom::text_content(&jpt_el).trim().to_string();
        let jpt = if jpt_text == "n/a" { None } else { Some(decode::uint(&jpt_text)?) };
        reports.push(CoachReport {
            coach,
            number_of_reports,
            jpt,
            average: decode::half_stars(&stars_el),
        });
    }
    Ok(reports)
}

fn parse_scout_reports(table: &Selection) -> Result<Vec<ScoutReport>> {
    let mut reports = Vec::new();
    for row in locate::collect(table, "tr[class*=row]") {
        let [scout_el, stars_el] = locate::fixed::<2>(dom::cells(&row), "scout report cells")?;
        let (scout, number_of_reports) = decode::name_with_count(&dom::text_content(&scout_el))?;
        reports.push(ScoutReport {
            scout,
            number_of_reports,
            average: decode::half_stars(&stars_el),
        });
    }
    Ok(reports)
}

/// Personality rows that never mention the player's first name are
/// assistant-coach commentary, not traits. The substring heuristic is
/// preserved from observed behavior; no stronger discriminator exists in
/// the markup.
fn parse_personalities(personality_el: &Selection, name: &str) -> Vec<String> {
    let first = decode::first_name(name);
    locate::collect(personality_el, ".row1, .row2")
        .iter()
        .map(|row| dom::text_content(row).trim().to_string())
        .filter(|trait_text| trait_text.contains(first))
        .collect()
}
