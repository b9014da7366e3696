use dugout_extract::{parse_document, parse_player_profile, Error, Position};

/// Skill grid values in grid order (row-major across the five columns).
const SKILLS: [u8; 21] = [
    14, 12, 9, 13, 15, 16, 8, 14, 11, 17, 13, 10, 7, 12, 16, 9, 11, 15, 6, 13, 4,
];

const SKILL_NAMES: [&str; 21] = [
    "Reflexes", "Tackling", "Creativity", "Shooting", "Team work",
    "One on ones", "Marking", "Passing", "Dribbling", "Speed",
    "Handling", "Heading", "Long shots", "Positioning", "Strength",
    "Communication", "Crossing", "First touch", "Aggression", "Influence",
    "Eccentricity",
];

/// Each skill renders as a name cell, a value cell and a trend-arrow cell.
fn skills_panel() -> String {
    let mut rows = String::new();
    for (chunk_index, chunk) in SKILL_NAMES.chunks(5).enumerate() {
        let class = if chunk_index % 2 == 0 { "row1" } else { "row2" };
        rows.push_str(&format!("<tr class=\"{class}\">"));
        for (i, name) in chunk.iter().enumerate() {
            let value = SKILLS[chunk_index * 5 + i];
            rows.push_str(&format!(
                "<td>{name}</td><td>{value}</td><td><img src=\"images/arrow_up.png\"></td>"
            ));
        }
        rows.push_str("</tr>");
    }
    format!("<table><tbody>{rows}</tbody></table>")
}

fn stars(full: usize, half: bool) -> String {
    let mut markers = "<li class=\"fa fa-star\"></li>".repeat(full);
    if half {
        markers.push_str("<li class=\"fa fa-star-half-o\"></li>");
    }
    markers
}

/// Coach table first, scout table second, the usual order.
fn talent_coach_first() -> String {
    format!(
        r#"{average}<div id="talentPanel">
        <table><tbody>
            <tr><td>Coach</td><td>JPT</td><td>Talent</td></tr>
            <tr class="row1"><td>Edson Costa (12 reports)</td><td>8</td><td>{coach1}</td></tr>
            <tr class="row2"><td>Ron Veld (3 reports)</td><td>n/a</td><td>{coach2}</td></tr>
        </tbody></table>
        <table><tbody>
            <tr><td>Scout</td><td>Talent</td></tr>
            <tr class="row1"><td>International scout (5 reports)</td><td>{scout1}</td></tr>
        </tbody></table>
        </div>"#,
        average = stars(2, true),
        coach1 = stars(3, false),
        coach2 = stars(2, true),
        scout1 = stars(2, true),
    )
}

/// Only a scout table, sitting in first position.
fn talent_scout_only() -> String {
    format!(
        r#"{average}<div id="talentPanel">
        <table><tbody>
            <tr><td>Scout</td><td>Talent</td></tr>
            <tr class="row1"><td>International scout (2 reports)</td><td>{scout1}</td></tr>
        </tbody></table>
        </div>"#,
        average = stars(4, false),
        scout1 = stars(4, false),
    )
}

fn profile_page(contract: &str, wage: &str, talent: &str, marker_style: &str, form_src: &str) -> String {
    format!(
        r#"<html><body>
        <div id="profile">
            <div class="player_header">
                <span class="player_id_txt">Player ID: 4521</span>
                <img src="images/flags_round/half/ar.png" title="Argentina">
                <span class="player_name">Diego Armando</span>
            </div>
            <div id="main-1"><img src="images/decoration.png"></div>
            <div class="player_bio">
                <table><tr>
                    <td><img src="images/flags_small/new/br.png" title="Brazil"></td>
                    <td><a href="/clubs/view/clubid/2077/">Sporting Clube do Sul</a></td>
                    <td>Senior squad</td>
                    <td>Age: 24</td>
                </tr></table>
            </div>
            <div class="player_basic">
                <table><tbody>
                    <tr class="row1">
                        <td>Condition</td><td>87%</td>
                        <td>Morale</td><td>Superb</td>
                        <td>Weeks at club</td><td>104</td>
                        <td class="talent_cell">{talent}</td>
                    </tr>
                    <tr class="row2">
                        <td>Preferred foot</td><td>Left</td>
                        <td>Form</td><td>Good</td>
                        <td>Experience</td><td><img src="images/experience.png" title="Experience: 34"></td>
                    </tr>
                </tbody></table>
            </div>
            <div class="player_main">
                <div class="skills_panel">{skills}</div>
                <div class="personality_panel">
                    <table><tbody>
                        <tr class="row1"><td>Diego is a born leader.</td></tr>
                        <tr class="row2"><td>Your assistant did not notice anything peculiar this week.</td></tr>
                        <tr class="row1"><td>Diego thrives on the big stage.</td></tr>
                    </tbody></table>
                </div>
                <div class="positions_panel">
                    <div style="{marker_style} background-image: url('images/club/positions-1.png');"></div>
                    <div style="top: 69px; left: 10px; background-image: url('images/club/positions-2.png');"></div>
                </div>
                <div class="form_panel"><img src="{form_src}"></div>
                <div class="economics_panel">
                    <table><tbody>
                        <tr class="row1">
                            <td>Contract</td><td>{contract}</td>
                            <td>Wage</td><td>{wage}</td>
                            <td>Estimated value</td><td>2,300,000 &euro;</td>
                        </tr>
                    </tbody></table>
                </div>
            </div>
        </div>
        </body></html>"#,
        skills = skills_panel(),
    )
}

fn default_page() -> String {
    profile_page(
        "3",
        "1450",
        &talent_coach_first(),
        "top: 20px; left: 185px;",
        "charts/graph.php?form_history=4-5-7-6",
    )
}

#[test]
fn profile_round_trips_known_fixture_values() {
    let doc = parse_document(&default_page());
    let player = parse_player_profile(&doc).unwrap();

    assert_eq!(player.id, 4521);
    assert_eq!(player.name, "Diego Armando");
    assert_eq!(player.age, 24);
    assert_eq!(player.country.name, "Argentina");
    assert_eq!(player.country.code, "ar");

    assert_eq!(player.club.id, 2077);
    assert_eq!(player.club.name, "Sporting Clube do Sul");
    assert_eq!(player.club.country.name, "Brazil");
    assert_eq!(player.club.country.code, "br");

    assert_eq!(player.condition, 87);
    assert_eq!(player.morale, "Superb");
    assert_eq!(player.weeks_at_club, 104);
    assert_eq!(player.preferred_foot, "Left");
    assert_eq!(player.form, "Good");
    assert_eq!(player.form_history, [4, 5, 7, 6]);
    assert_eq!(player.experience, 34);
    assert_eq!(player.position, Position::Fl);
    assert_eq!(player.contract, Some(3));
    assert_eq!(player.wage, Some(1450));
    assert_eq!(player.estimated_value, 2_300_000);

    assert_eq!(player.attributes.reflexes, 14);
    assert_eq!(player.attributes.team_work, 15);
    assert_eq!(player.attributes.one_on_ones, 16);
    assert_eq!(player.attributes.strength, 16);
    assert_eq!(player.attributes.eccentricity, 4);
}

#[test]
fn talent_panel_classifies_tables_by_header_width() {
    let doc = parse_document(&default_page());
    let player = parse_player_profile(&doc).unwrap();

    let talent = &player.talent_report;
    assert_eq!(talent.average, Some(2.5));

    let coaches = talent.coaches_reports.as_ref().unwrap();
    assert_eq!(coaches.len(), 2);
    assert_eq!(coaches[0].coach, "Edson Costa");
    assert_eq!(coaches[0].number_of_reports, 12);
    assert_eq!(coaches[0].jpt, Some(8));
    assert_eq!(coaches[0].average, 3.0);
    // Retired coach: the JPT cell carries a literal "n/a".
    assert_eq!(coaches[1].jpt, None);
    assert_eq!(coaches[1].average, 2.5);

    let scouts = talent.scout_reports.as_ref().unwrap();
    assert_eq!(scouts.len(), 1);
    assert_eq!(scouts[0].scout, "International scout");
    assert_eq!(scouts[0].number_of_reports, 5);
    assert_eq!(scouts[0].average, 2.5);
}

#[test]
fn scout_table_in_first_position_is_still_recognized() {
    let page = profile_page(
        "3",
        "1450",
        &talent_scout_only(),
        "top: 20px; left: 185px;",
        "charts/graph.php?form_history=4-5",
    );
    let player = parse_player_profile(&parse_document(&page)).unwrap();

    let talent = &player.talent_report;
    assert_eq!(talent.average, Some(4.0));
    assert!(talent.coaches_reports.is_none());

    let scouts = talent.scout_reports.as_ref().unwrap();
    assert_eq!(scouts[0].number_of_reports, 2);
    assert_eq!(scouts[0].average, 4.0);
}

#[test]
fn zero_star_average_short_circuits_to_the_empty_report() {
    let page = profile_page(
        "3",
        "1450",
        "not rated yet",
        "top: 20px; left: 185px;",
        "charts/graph.php?form_history=4-5",
    );
    let player = parse_player_profile(&parse_document(&page)).unwrap();

    let talent = &player.talent_report;
    assert_eq!(talent.average, None);
    assert!(talent.coaches_reports.is_none());
    assert!(talent.scout_reports.is_none());
}

#[test]
fn contract_free_players_have_neither_contract_nor_wage() {
    let page = profile_page(
        "/",
        "would fail numeric decoding",
        &talent_coach_first(),
        "top: 20px; left: 185px;",
        "charts/graph.php?form_history=4-5",
    );
    let player = parse_player_profile(&parse_document(&page)).unwrap();

    assert_eq!(player.contract, None);
    assert_eq!(player.wage, None);
}

#[test]
fn chart_url_without_samples_yields_empty_history() {
    let page = profile_page(
        "3",
        "1450",
        &talent_coach_first(),
        "top: 20px; left: 185px;",
        "charts/graph.php?form_history=",
    );
    let player = parse_player_profile(&parse_document(&page)).unwrap();

    assert!(player.form_history.is_empty());
}

#[test]
fn personality_rows_without_the_first_name_are_dropped() {
    let doc = parse_document(&default_page());
    let player = parse_player_profile(&doc).unwrap();

    assert_eq!(
        player.personalities,
        vec!["Diego is a born leader.", "Diego thrives on the big stage."]
    );
}

#[test]
fn unknown_marker_coordinates_fail_with_enum_key_error() {
    let page = profile_page(
        "3",
        "1450",
        &talent_coach_first(),
        "top: 999px; left: 5px;",
        "charts/graph.php?form_history=4-5",
    );

    match parse_player_profile(&parse_document(&page)) {
        Err(Error::UnknownEnumKey { table, key }) => {
            assert_eq!(table, "position coordinates");
            assert_eq!(key, "999px5px");
        }
        other => panic!("expected UnknownEnumKey, got {other:?}"),
    }
}

#[test]
fn missing_section_container_fails_fast() {
    let doc = parse_document("<html><body><p>not a player page</p></body></html>");

    match parse_player_profile(&doc) {
        Err(Error::StructureNotFound(anchor)) => assert!(anchor.contains("#main-1")),
        other => panic!("expected StructureNotFound, got {other:?}"),
    }
}

#[test]
fn profile_serializes_with_upstream_field_names() {
    let doc = parse_document(&default_page());
    let player = parse_player_profile(&doc).unwrap();

    let json = serde_json::to_value(&player).unwrap();
    assert_eq!(json["weeksAtClub"], 104);
    assert_eq!(json["prefFoot"], serde_json::Value::Null); // not an upstream name
    assert_eq!(json["preferredFoot"], "Left");
    assert_eq!(json["position"], "FL");
    assert_eq!(json["formHistory"][2], 7);
    assert_eq!(json["talentReport"]["coachesReports"][1]["jpt"], serde_json::Value::Null);
    assert_eq!(json["talentReport"]["coachesReports"][0]["numberOfReports"], 12);
    assert_eq!(json["estimatedValue"], 2_300_000);
}
