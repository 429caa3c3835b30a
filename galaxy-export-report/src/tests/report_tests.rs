use super::*;
use crate::columns::{ColumnSpec, report_columns};
use galaxy_export_core::{AttrValue, GameRecord};

fn game(key: &str, title: &str) -> GameRecord {
    let mut g = GameRecord::new(key);
    g.set("title", AttrValue::text(title));
    g
}

fn group(platform: &str, games: Vec<GameRecord>) -> PlatformGroup {
    PlatformGroup {
        platform: platform.to_string(),
        games,
    }
}

#[test]
fn sheets_follow_group_order_with_display_names() {
    let groups = vec![
        group("gog", vec![game("gog_1", "A")]),
        group("steam", vec![game("steam_1", "B")]),
        group("itch", vec![game("itch_1", "C")]),
    ];
    let report = Report::build(&groups, &report_columns(false));
    let names: Vec<&str> = report.sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["GOG Galaxy", "Steam", "itch"]);
    assert_eq!(report.row_count(), 3);
}

#[test]
fn filter_spans_leading_filterable_block() {
    let groups = vec![group(
        "steam",
        vec![game("steam_1", "A"), game("steam_2", "B")],
    )];

    let report = Report::build(&groups, &report_columns(true));
    let sheet = report.sheet("Steam").unwrap();
    assert_eq!(
        sheet.filter,
        Some(FilterRange {
            first_col: 0,
            last_col: 1,
            last_row: 2,
        })
    );

    let report = Report::build(&groups, &report_columns(false));
    assert_eq!(report.sheets[0].filter.unwrap().last_col, 0);
}

#[test]
fn no_filterable_columns_means_no_filter() {
    let groups = vec![group("steam", vec![game("steam_1", "A")])];
    let report = Report::build(&groups, &[ColumnSpec::new("Title", "title")]);
    assert_eq!(report.sheets[0].filter, None);
}

#[test]
fn tag_column_present_even_for_untagged_games() {
    let mut tagged = game("steam_1", "A");
    tagged.set("tags", AttrValue::text("rpg,indie"));
    let groups = vec![group("steam", vec![tagged, game("steam_2", "B")])];

    let report = Report::build(&groups, &report_columns(true));
    let sheet = &report.sheets[0];
    assert_eq!(sheet.columns[1].title, "Tags");
    assert_eq!(sheet.rows[0][1], Some(CellValue::Text("rpg,indie".into())));
    assert_eq!(sheet.rows[1][1], None);
    assert!(sheet.rows.iter().all(|r| r.len() == 3));
}

#[test]
fn header_widths_default_when_unset() {
    let groups = vec![group("steam", vec![game("steam_1", "A")])];
    let report = Report::build(&groups, &report_columns(false));
    let widths: Vec<f64> = report.sheets[0].columns.iter().map(|c| c.width).collect();
    assert_eq!(widths, [75.0, 25.0]);
}

#[test]
fn colliding_sheet_names_get_a_suffix() {
    let groups = vec![
        group("steam", vec![game("steam_1", "A")]),
        group("Steam", vec![game("Steam_1", "B")]),
        group("STEAM", vec![game("STEAM_1", "C")]),
    ];
    let report = Report::build(&groups, &report_columns(false));
    let names: Vec<&str> = report.sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Steam", "Steam (2)", "STEAM (3)"]);
}

#[test]
fn case_only_differences_collide() {
    assert_eq!(unique_sheet_name("steam", &["Steam"]), "steam (2)");
    assert_eq!(unique_sheet_name("steam", &["Steam", "steam (2)"]), "steam (3)");
    assert_eq!(unique_sheet_name("epic", &["Steam"]), "epic");
}

#[test]
fn forbidden_characters_are_replaced() {
    assert_eq!(sanitize_sheet_name("a/b:c*d?[e]\\f"), "a_b_c_d__e__f");
    assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
    assert_eq!(sanitize_sheet_name(""), "Sheet");
}

#[test]
fn long_names_are_truncated_before_the_suffix() {
    let long = "x".repeat(40);
    let first = unique_sheet_name(&long, &[]);
    assert_eq!(first.chars().count(), MAX_SHEET_NAME);

    let second = unique_sheet_name(&long, &[first.as_str()]);
    assert_eq!(second.chars().count(), MAX_SHEET_NAME);
    assert!(second.ends_with(" (2)"));
}
