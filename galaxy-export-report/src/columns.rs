//! Column definitions and how a game record fills each cell.

use galaxy_export_core::{AttrValue, GameRecord, Scalar, piece};

/// Width used when a column does not set one.
pub const DEFAULT_WIDTH: f64 = 25.0;

/// A single cell's content.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Falsy values (`""`, `0`, `false`) are never written.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0,
            Self::Bool(b) => *b,
        }
    }

    /// Convert an attribute for display. `None` for null.
    pub fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Absent => None,
            AttrValue::Scalar(Scalar::Text(s)) => Some(Self::Text(s.clone())),
            AttrValue::Scalar(Scalar::Number(n)) => n.as_f64().map(Self::Number),
            AttrValue::Scalar(Scalar::Bool(b)) => Some(Self::Bool(*b)),
            AttrValue::List(_) | AttrValue::Map(_) => Some(Self::Text(value.to_string())),
        }
    }
}

/// Derives a cell from the whole record.
pub type CellFormatter = fn(&GameRecord) -> Option<CellValue>;

/// How a column's cells are produced.
#[derive(Debug, Clone, Copy)]
pub enum ColumnValue {
    /// The field's value as stored.
    Raw,
    Formatted(CellFormatter),
}

#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub title: String,
    /// Attribute the column reads; the cell stays empty when a record lacks it.
    pub field: String,
    pub width: Option<f64>,
    pub filterable: bool,
    pub value: ColumnValue,
}

impl ColumnSpec {
    pub fn new(title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            field: field.into(),
            width: None,
            filterable: false,
            value: ColumnValue::Raw,
        }
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn formatted(mut self, formatter: CellFormatter) -> Self {
        self.value = ColumnValue::Formatted(formatter);
        self
    }

    pub fn effective_width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    /// The cell for `game`, or `None` to leave it blank.
    pub fn cell(&self, game: &GameRecord) -> Option<CellValue> {
        let raw = game.get(&self.field)?;
        let cell = match self.value {
            ColumnValue::Raw => CellValue::from_attr(raw),
            ColumnValue::Formatted(format) => format(game),
        };
        cell.filter(CellValue::is_truthy)
    }
}

/// `"<unlocked> / <all>"`, only when the achievement total is positive.
pub fn format_achievements(game: &GameRecord) -> Option<CellValue> {
    let counts = game.get(piece::ACHIEVEMENTS)?;
    let all = counts.field("all")?;
    if !all.as_f64().is_some_and(|n| n > 0.0) {
        return None;
    }

    let unlocked = match counts.field("unlocked") {
        Some(AttrValue::Absent) | None => "0".to_string(),
        Some(value) => count_text(value),
    };
    Some(CellValue::Text(format!("{} / {}", unlocked, count_text(all))))
}

/// Whole numbers print without a fractional part, even when stored as floats.
fn count_text(value: &AttrValue) -> String {
    match value.as_f64() {
        Some(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => (n as i64).to_string(),
        _ => value.to_string(),
    }
}

/// Move filterable columns to the front, keeping relative order in each group.
///
/// The sheet's single auto-filter range has to start at the first column.
pub fn partition_filterable(columns: Vec<ColumnSpec>) -> Vec<ColumnSpec> {
    let (mut front, back): (Vec<_>, Vec<_>) = columns.into_iter().partition(|c| c.filterable);
    front.extend(back);
    front
}

/// The report's columns: Title, then Tags when requested, then Achievements.
pub fn report_columns(with_tags: bool) -> Vec<ColumnSpec> {
    let mut columns = vec![ColumnSpec::new("Title", piece::TITLE).width(75.0).filterable()];
    if with_tags {
        columns.push(ColumnSpec::new("Tags", piece::TAGS).filterable());
    }
    columns.push(ColumnSpec::new("Achievements", piece::ACHIEVEMENTS).formatted(format_achievements));
    partition_filterable(columns)
}

#[cfg(test)]
#[path = "tests/columns_tests.rs"]
mod tests;
