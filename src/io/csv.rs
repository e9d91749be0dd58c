// Copyright (c) 2026, Filmroom Contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Roster CSV encoding and decoding.
//!
//! The on-disk format is a plain RFC-4180-style table with the fixed
//! header `id,first,last,position,jersey,team` and minimal quoting
//! (fields containing commas, quotes, or newlines are quoted, embedded
//! quotes doubled). Import is tolerant: header names accept common
//! synonyms, unknown columns are ignored, and rows with neither a first
//! nor a last name are skipped.

use crate::models::athlete::Athlete;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// One parsed roster row, prior to id assignment/merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterRow {
    /// Id from the file, if the column held a valid number.
    pub id: Option<u64>,
    pub first: String,
    pub last: String,
    pub position: String,
    pub jersey: String,
    pub team: String,
}

/// Fixed export column order.
const COLUMNS: [&str; 6] = ["id", "first", "last", "position", "jersey", "team"];

/// Serialize the roster to CSV text.
pub fn encode(roster: &[Athlete]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for athlete in roster {
        let fields = [
            athlete.id.to_string(),
            athlete.first.clone(),
            athlete.last.clone(),
            athlete.position.clone(),
            athlete.jersey.clone(),
            athlete.team.clone(),
        ];
        let row: Vec<String> = fields.iter().map(|f| quote_field(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Export the roster to a CSV file.
pub fn export_file(roster: &[Athlete], path: &Path) -> Result<()> {
    std::fs::write(path, encode(roster))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import roster rows from a CSV file.
pub fn import_file(path: &Path) -> Result<Vec<RosterRow>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    decode(&text)
}

/// Parse CSV text into roster rows.
pub fn decode(text: &str) -> Result<Vec<RosterRow>> {
    let mut records = parse_records(text)?;
    if records.is_empty() {
        bail!("CSV file is empty");
    }

    let header = records.remove(0);
    let mapping: Vec<Option<Field>> = header.iter().map(|name| match_column(name)).collect();
    if !mapping.iter().any(|m| matches!(m, Some(Field::First)))
        && !mapping.iter().any(|m| matches!(m, Some(Field::Last)))
    {
        bail!("CSV header has no recognizable name column");
    }

    let mut rows = Vec::new();
    for record in records {
        let mut row = RosterRow::default();
        for (value, field) in record.iter().zip(mapping.iter()) {
            let value = value.trim();
            match field {
                Some(Field::Id) => row.id = value.parse().ok(),
                Some(Field::First) => row.first = value.to_string(),
                Some(Field::Last) => row.last = value.to_string(),
                Some(Field::Position) => row.position = value.to_string(),
                Some(Field::Jersey) => row.jersey = value.to_string(),
                Some(Field::Team) => row.team = value.to_string(),
                None => {}
            }
        }
        // rows with no name at all are noise, not athletes
        if row.first.is_empty() && row.last.is_empty() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Id,
    First,
    Last,
    Position,
    Jersey,
    Team,
}

/// Map a header cell to a roster field, accepting common synonyms.
fn match_column(name: &str) -> Option<Field> {
    match name.trim().to_lowercase().as_str() {
        "id" => Some(Field::Id),
        "first" | "firstname" | "name" => Some(Field::First),
        "last" | "lastname" | "surname" => Some(Field::Last),
        "position" | "pos" => Some(Field::Position),
        "jersey" | "number" | "jerseynumber" => Some(Field::Jersey),
        "team" | "squad" => Some(Field::Team),
        _ => None,
    }
}

/// Quote a field if it contains a comma, quote, or newline.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split CSV text into records of fields, honoring quoted fields with
/// embedded commas, doubled quotes, and newlines.
fn parse_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => {
                if field.is_empty() {
                    in_quotes = true;
                } else {
                    // stray quote mid-field, keep it verbatim
                    field.push('"');
                }
            }
            ',' => {
                record.push(std::mem::take(&mut field));
            }
            '\n' => {
                record.push(std::mem::take(&mut field));
                if !(record.len() == 1 && record[0].is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            '\r' => {
                // consumed as part of CRLF; bare CR treated the same
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        bail!("CSV ends inside a quoted field");
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}
