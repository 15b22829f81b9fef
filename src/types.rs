use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

//==============================================================================
// Sheet Selection
//==============================================================================

/// Which sheet of a workbook to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// Zero-based position in the workbook
    Index(usize),
    /// Literal sheet name
    Name(String),
}

impl SheetSelector {
    /// Interpret raw user input.
    ///
    /// A non-empty string made only of ASCII digits is a sheet index; anything
    /// else (including digit strings too large for `usize`) is a sheet name.
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = raw.parse::<usize>() {
                return SheetSelector::Index(index);
            }
        }
        SheetSelector::Name(raw.to_string())
    }
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Index(i) => write!(f, "#{}", i),
            SheetSelector::Name(name) => write!(f, "'{}'", name),
        }
    }
}

//==============================================================================
// Cell Values
//==============================================================================

/// A single cell loaded from a sheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    DateTime(NaiveDateTime),
    /// Elapsed time, already rendered as `[-]H:MM:SS`
    Duration(String),
    /// Excel error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Text used for CSV fields: like `Display`, but empty cells stay empty
    pub fn to_field(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str("NaN"),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::String(s) => f.write_str(s),
            CellValue::DateTime(dt) => {
                if dt.time() == NaiveTime::MIN {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            CellValue::Duration(s) => f.write_str(s),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Int(i) => serializer.serialize_i64(*i),
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::String(s) | CellValue::Duration(s) | CellValue::Error(s) => {
                serializer.serialize_str(s)
            }
            CellValue::DateTime(dt) => {
                serializer.collect_str(&dt.format("%Y-%m-%dT%H:%M:%S"))
            }
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::String(s) => CellValue::String(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::DateTime(dt) => {
                if dt.is_duration() {
                    match dt.as_duration() {
                        Some(d) => CellValue::Duration(format_duration(d)),
                        None => CellValue::Float(dt.as_f64()),
                    }
                } else {
                    match dt.as_datetime() {
                        Some(ndt) => CellValue::DateTime(ndt),
                        None => CellValue::Float(dt.as_f64()),
                    }
                }
            }
            Data::DateTimeIso(s) => parse_iso_datetime(s)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::String(s.clone())),
            Data::DurationIso(s) => CellValue::Duration(s.clone()),
        }
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| s.parse::<NaiveDate>().ok().map(|d| d.and_time(NaiveTime::MIN)))
}

fn format_duration(d: chrono::Duration) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

//==============================================================================
// Table
//==============================================================================

/// One sheet loaded into memory: named columns over ordered rows.
///
/// Every row holds exactly `columns.len()` cells. Serializes as an array of
/// row objects whose keys follow column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the column count
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The first `n` rows (all of them when the table is shorter)
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

struct RowRecord<'a> {
    columns: &'a [String],
    cells: &'a [CellValue],
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowRecord {
                columns: &self.columns,
                cells: row,
            })?;
        }
        seq.end()
    }
}
