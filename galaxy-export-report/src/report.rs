//! In-memory shape of the document: sheets, headers, rows, filter range.

use galaxy_export_core::{PlatformGroup, display_name};

use crate::columns::{CellValue, ColumnSpec};

/// Longest worksheet name a workbook accepts.
pub const MAX_SHEET_NAME: usize = 31;
const FORBIDDEN_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHeader {
    pub title: String,
    pub width: f64,
}

/// Zero-based auto-filter bounds. Row 0 is the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterRange {
    pub first_col: u16,
    pub last_col: u16,
    pub last_row: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Vec<Option<CellValue>>>,
    pub filter: Option<FilterRange>,
}

impl Sheet {
    /// Lay out one platform's games under `columns`.
    ///
    /// Filterable columns are expected to lead; the filter covers exactly
    /// that leading block.
    pub fn build(group: &PlatformGroup, columns: &[ColumnSpec]) -> Self {
        let headers = columns
            .iter()
            .map(|c| ColumnHeader {
                title: c.title.clone(),
                width: c.effective_width(),
            })
            .collect();

        let rows: Vec<Vec<Option<CellValue>>> = group
            .games
            .iter()
            .map(|game| columns.iter().map(|c| c.cell(game)).collect())
            .collect();

        let leading = columns.iter().take_while(|c| c.filterable).count();
        let filter = (leading > 0).then(|| FilterRange {
            first_col: 0,
            last_col: (leading - 1) as u16,
            last_row: rows.len() as u32,
        });

        Self {
            name: display_name(&group.platform).to_string(),
            columns: headers,
            rows,
            filter,
        }
    }
}

/// A complete document, one sheet per platform group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub sheets: Vec<Sheet>,
}

impl Report {
    /// One sheet per group. Sheet names are made valid and unique, since
    /// the platform prefix of a release key is free-form text.
    pub fn build(groups: &[PlatformGroup], columns: &[ColumnSpec]) -> Self {
        let mut sheets: Vec<Sheet> = Vec::with_capacity(groups.len());
        for group in groups {
            let mut sheet = Sheet::build(group, columns);
            let taken: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
            sheet.name = unique_sheet_name(&sheet.name, &taken);
            sheets.push(sheet);
        }
        Self { sheets }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.sheets.iter().map(|s| s.rows.len()).sum()
    }
}

/// Replace characters a worksheet name may not contain and cut it to length.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches('\'');
    if cleaned.is_empty() {
        return "Sheet".to_string();
    }
    cleaned.chars().take(MAX_SHEET_NAME).collect()
}

/// Sanitize `name`, then add a ` (n)` suffix while it collides with any of
/// `taken`. Workbooks compare sheet names case-insensitively.
pub fn unique_sheet_name(name: &str, taken: &[&str]) -> String {
    let base = sanitize_sheet_name(name);
    let clashes = |candidate: &str| {
        let lower = candidate.to_lowercase();
        taken.iter().any(|t| t.to_lowercase() == lower)
    };
    if !clashes(&base) {
        return base;
    }

    let mut n = 2;
    loop {
        let suffix = format!(" ({n})");
        let room = MAX_SHEET_NAME - suffix.chars().count();
        let candidate: String = base.chars().take(room).chain(suffix.chars()).collect();
        if !clashes(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
