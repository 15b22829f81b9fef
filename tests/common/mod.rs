//! Shared fixture builders for integration tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Write a workbook with a 5-row, 3-column "Bookings" sheet followed by a
/// "Summary" sheet
pub fn write_bookings(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Bookings").unwrap();
    for (col, header) in ["date", "guest", "party"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    let rows = [
        ("2024-04-01", "山田", 2.0),
        ("2024-04-01", "Smith", 4.0),
        ("2024-04-02", "佐藤", 1.0),
        ("2024-04-03", "Lee", 3.0),
        ("2024-04-03", "田中", 6.0),
    ];
    for (i, (date, guest, party)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, *date).unwrap();
        sheet.write_string(row, 1, *guest).unwrap();
        sheet.write_number(row, 2, *party).unwrap();
    }

    let summary = workbook.add_worksheet();
    summary.set_name("Summary").unwrap();
    summary.write_string(0, 0, "total").unwrap();
    summary.write_number(1, 0, 16.0).unwrap();

    workbook.save(&path).unwrap();
    path
}

/// Write a single-sheet workbook with a numbered column of `rows` rows
pub fn write_numbered(dir: &Path, name: &str, rows: u32) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "n").unwrap();
    sheet.write_string(0, 1, "label").unwrap();
    for i in 1..=rows {
        sheet.write_number(i, 0, i as f64).unwrap();
        sheet.write_string(i, 1, format!("row{}", i)).unwrap();
    }
    workbook.save(&path).unwrap();
    path
}
