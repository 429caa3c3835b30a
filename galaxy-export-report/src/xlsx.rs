use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::columns::CellValue;
use crate::report::{Report, Sheet};
use crate::{ReportError, ReportWriter};

/// Writes the report as an `.xlsx` workbook with bold headers.
pub struct XlsxReportWriter;

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XlsxReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for XlsxReportWriter {
    fn name(&self) -> &'static str {
        "xlsx"
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn write(&self, report: &Report, dest: &Path) -> Result<(), ReportError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        if report.sheets.is_empty() {
            log::warn!("No games left to export; writing an empty workbook");
        }

        for sheet in &report.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(&sheet.name)
                .map_err(|source| ReportError::Sheet {
                    name: sheet.name.clone(),
                    source,
                })?;
            write_sheet(worksheet, sheet, &header)?;
        }

        workbook.save(dest).map_err(|source| ReportError::Save {
            path: dest.to_path_buf(),
            source,
        })
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, header: &Format) -> Result<(), ReportError> {
    for (col, column) in sheet.columns.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, column.width)?;
        worksheet.write_string_with_format(0, col, &column.title, header)?;
    }

    for (i, row) in sheet.rows.iter().enumerate() {
        let row_num = i as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Some(CellValue::Text(s)) => {
                    worksheet.write_string(row_num, col, s)?;
                }
                Some(CellValue::Number(n)) => {
                    worksheet.write_number(row_num, col, *n)?;
                }
                Some(CellValue::Bool(b)) => {
                    worksheet.write_boolean(row_num, col, *b)?;
                }
                None => {}
            }
        }
    }

    if let Some(filter) = sheet.filter {
        worksheet.autofilter(0, filter.first_col, filter.last_row, filter.last_col)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::report_columns;
    use calamine::{Data, Reader, open_workbook_auto};
    use galaxy_export_core::{AttrValue, GameRecord, PlatformGroup};

    fn game(key: &str, title: &str) -> GameRecord {
        let mut g = GameRecord::new(key);
        g.set("title", AttrValue::text(title));
        g
    }

    fn sample_report() -> Report {
        let mut tagged = game("steam_1", "Alpha");
        tagged.set("tags", AttrValue::text("rpg,indie"));
        let groups = vec![
            PlatformGroup {
                platform: "steam".into(),
                games: vec![tagged, game("steam_2", "Beta")],
            },
            PlatformGroup {
                platform: "itch".into(),
                games: vec![game("itch_1", "Gamma")],
            },
        ];
        Report::build(&groups, &report_columns(true))
    }

    #[test]
    fn workbook_round_trips_through_calamine() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.xlsx");
        XlsxReportWriter::new().write(&sample_report(), &path).unwrap();

        let mut workbook = open_workbook_auto(&path).unwrap();
        assert_eq!(workbook.sheet_names(), ["Steam", "itch"]);

        let range = workbook.worksheet_range("Steam").unwrap();
        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Data::String("Title".into()));
        assert_eq!(rows[0][1], Data::String("Tags".into()));
        assert_eq!(rows[0][2], Data::String("Achievements".into()));
        assert_eq!(rows[1][0], Data::String("Alpha".into()));
        assert_eq!(rows[1][1], Data::String("rpg,indie".into()));
        assert_eq!(rows[2][0], Data::String("Beta".into()));
        assert_eq!(rows[2][1], Data::Empty);
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.xlsx");
        std::fs::write(&path, b"old contents").unwrap();

        XlsxReportWriter::new().write(&sample_report(), &path).unwrap();
        assert!(open_workbook_auto(&path).is_ok());
    }

    #[test]
    fn unwritable_destination_is_a_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("library.xlsx");
        let err = XlsxReportWriter::new()
            .write(&sample_report(), &path)
            .unwrap_err();
        assert!(matches!(err, ReportError::Save { .. }));
    }
}
