use super::*;
use galaxy_export_core::decode_piece_value;

fn with_achievements(json: &str) -> GameRecord {
    let mut game = GameRecord::new("steam_1");
    game.set(
        piece::ACHIEVEMENTS,
        decode_piece_value("steam_1", piece::ACHIEVEMENTS, json).unwrap(),
    );
    game
}

fn achievements_cell(json: &str) -> Option<CellValue> {
    let column = ColumnSpec::new("Achievements", piece::ACHIEVEMENTS).formatted(format_achievements);
    column.cell(&with_achievements(json))
}

#[test]
fn achievements_with_positive_total() {
    assert_eq!(
        achievements_cell(r#"{"all": 10, "unlocked": 3}"#),
        Some(CellValue::Text("3 / 10".into()))
    );
}

#[test]
fn achievements_zero_total_is_blank() {
    assert_eq!(achievements_cell(r#"{"all": 0, "unlocked": 0}"#), None);
}

#[test]
fn achievements_null_total_is_blank() {
    assert_eq!(achievements_cell(r#"{"all": null}"#), None);
    assert_eq!(achievements_cell(r#"{"all": null, "unlocked": 4}"#), None);
}

#[test]
fn achievements_negative_total_is_blank() {
    assert_eq!(achievements_cell(r#"{"all": -1, "unlocked": 0}"#), None);
}

#[test]
fn achievements_null_unlocked_shows_zero() {
    assert_eq!(
        achievements_cell(r#"{"all": 4, "unlocked": null}"#),
        Some(CellValue::Text("0 / 4".into()))
    );
}

#[test]
fn missing_field_leaves_cell_blank() {
    let game = GameRecord::new("gog_1");
    assert_eq!(ColumnSpec::new("Title", piece::TITLE).cell(&game), None);
    assert_eq!(
        ColumnSpec::new("Achievements", piece::ACHIEVEMENTS)
            .formatted(format_achievements)
            .cell(&game),
        None
    );
}

#[test]
fn falsy_raw_values_leave_cell_blank() {
    let mut game = GameRecord::new("gog_1");
    game.set("title", AttrValue::text(""));
    game.set("count", AttrValue::number(0));
    assert_eq!(ColumnSpec::new("Title", "title").cell(&game), None);
    assert_eq!(ColumnSpec::new("Count", "count").cell(&game), None);
}

#[test]
fn numbers_stay_numeric() {
    let mut game = GameRecord::new("gog_1");
    game.set("count", AttrValue::number(7));
    assert_eq!(
        ColumnSpec::new("Count", "count").cell(&game),
        Some(CellValue::Number(7.0))
    );
}

#[test]
fn filterable_columns_lead_in_declared_order() {
    let columns = partition_filterable(vec![
        ColumnSpec::new("A", "a"),
        ColumnSpec::new("B", "b").filterable(),
        ColumnSpec::new("C", "c"),
        ColumnSpec::new("D", "d").filterable(),
    ]);
    let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["B", "D", "A", "C"]);
}

#[test]
fn report_columns_with_and_without_tags() {
    let titles = |cols: Vec<ColumnSpec>| -> Vec<String> {
        cols.into_iter().map(|c| c.title).collect()
    };
    assert_eq!(titles(report_columns(false)), ["Title", "Achievements"]);
    assert_eq!(titles(report_columns(true)), ["Title", "Tags", "Achievements"]);

    let columns = report_columns(true);
    assert_eq!(columns[0].effective_width(), 75.0);
    assert_eq!(columns[1].effective_width(), DEFAULT_WIDTH);
    assert!(columns[0].filterable && columns[1].filterable);
    assert!(!columns[2].filterable);
}

#[test]
fn achievements_without_unlocked_field_show_zero() {
    assert_eq!(
        achievements_cell(r#"{"all": 4, "other": 1}"#),
        Some(CellValue::Text("0 / 4".into()))
    );
}

#[test]
fn float_encoded_counts_print_as_integers() {
    assert_eq!(
        achievements_cell(r#"{"all": 10.0, "unlocked": 3.0}"#),
        Some(CellValue::Text("3 / 10".into()))
    );
}

#[test]
fn fractional_counts_keep_their_fraction() {
    assert_eq!(
        achievements_cell(r#"{"all": 2.5, "unlocked": 1}"#),
        Some(CellValue::Text("1 / 2.5".into()))
    );
}
