//! Club Info pipeline.
//!
//! Flat field mapping over the club page's quick-facts table, with one
//! conditional block for the premium view data. The premium icon count is
//! the activation signal, never the data cells themselves: those cells
//! exist in the tree regardless and must not be blindly read.

use dom_query::Document;

use crate::decode;
use crate::dom;
use crate::error::{Error, Result};
use crate::locate;
use crate::options::Options;
use crate::patterns;
use crate::records::{ClubInfo, CountryRef, LeagueRef, Manager, PremiumStatus, Stadium};

/// Extracts the club record from a club info page.
pub fn parse_club_info(doc: &Document, options: &Options) -> Result<ClubInfo> {
    // The big round flag left of the club name carries both country fields.
    let flag = locate::require_doc(
        doc,
        "img[src*='images/flags_round']",
        "club country flag (img[src*='images/flags_round'])",
    )?;
    let country = CountryRef {
        name: locate::require_attr(&flag, "title", "club country flag")?,
        code: decode::capture(
            &patterns::ROUND_FLAG_CODE,
            &locate::require_attr(&flag, "src", "club country flag")?,
            "round flag country code",
        )?,
    };

    // Manager-info cells are fixed-arity: last-active at index 5, then the
    // premium pair. The premium cells are located here but only decoded
    // below once the icon count says they are live.
    let [_, _, _, _, _, last_active_el, viewed_by_el, fame_rank_el] = locate::fixed::<8>(
        locate::collect_doc(doc, "td.maninfo"),
        "manager info cells (td.maninfo)",
    )?;

    // Second column of the quick-facts table, one cell per fact row.
    let facts_table = locate::require_doc(
        doc,
        "div#content_main > div:last-child table",
        "club quick facts table",
    )?;
    let [team_name_el, short_name_el, stadium_el, rating_el, manager_el, _, league_el, id_el] =
        locate::fixed::<8>(
            locate::collect(&facts_table, "td[class*=matches_row]:nth-child(2)"),
            "club quick facts cells",
        )?;

    let (stadium_name, capacity) = decode::stadium(&dom::text_content(&stadium_el))?;

    let manager_link = locate::require(&manager_el, "a", "manager link")?;
    let manager = Manager {
        name: dom::text_content(&manager_link).trim().to_string(),
        id: decode::id_from_href(
            &patterns::MANAGER_ID,
            &locate::require_attr(&manager_link, "href", "manager link")?,
            "managerid href",
        )?,
    };

    let league_link = locate::require(&league_el, "a", "league link")?;
    let league_href = locate::require_attr(&league_link, "href", "league link")?;
    let league = LeagueRef {
        name: dom::text_content(&league_link).to_string(),
        url: resolve_league_url(&league_href, options)?,
    };

    let premium = parse_premium(doc, &viewed_by_el, &fame_rank_el)?;

    let trophies = icon_titles(doc, "img[src*='images/club/cups']", "trophy icon")?;
    let achievements = icon_titles(doc, "img[src*='images/trophies']", "achievement icon")?;

    Ok(ClubInfo {
        id: decode::digits(&dom::text_content(&id_el))?,
        team_name: dom::text_content(&team_name_el).trim().to_string(),
        short_name: dom::text_content(&short_name_el).trim().to_string(),
        country,
        stadium: Stadium { name: stadium_name, capacity },
        rating: decode::digits(&dom::text_content(&rating_el))?,
        manager,
        league,
        last_active: dom::text_content(&last_active_el).trim().to_string(),
        trophies,
        achievements,
        premium,
    })
}

/// Premium view data behind the icon-count signal.
fn parse_premium(
    doc: &Document,
    viewed_by_el: &dom::Selection,
    fame_rank_el: &dom::Selection,
) -> Result<PremiumStatus> {
    let icon_count = doc.select("img[src*='images/superdugout']").nodes().len();
    if icon_count != 1 {
        return Ok(PremiumStatus { active: false, viewed_by: None, fame_rank: None });
    }
    Ok(PremiumStatus {
        active: true,
        viewed_by: Some(decode::digits(&dom::text_content(viewed_by_el))?),
        fame_rank: Some(decode::digits(&dom::text_content(fame_rank_el))?),
    })
}

fn icon_titles(doc: &Document, selector: &str, anchor: &str) -> Result<Vec<String>> {
    locate::collect_doc(doc, selector)
        .iter()
        .map(|icon| locate::require_attr(icon, "title", anchor))
        .collect()
}

fn resolve_league_url(href: &str, options: &Options) -> Result<String> {
    match &options.base_url {
        Some(base) => base
            .join(href)
            .map(|url| url.to_string())
            .map_err(|_| Error::MalformedPattern {
                pattern: "league href",
                text: href.to_string(),
            }),
        None => Ok(href.to_string()),
    }
}
