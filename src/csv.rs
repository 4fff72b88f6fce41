// src/csv.rs
use std::io::{self, Write};

use crate::data::{ClueRecord, ShowMetadata};

/// Fixed output schema. Metadata columns lead; every row repeats them.
pub const HEADERS: [&str; 7] = [
    "show_id", "air_date", "game_type", "topic", "money", "question", "answer",
];

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, ",")?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn header_row() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Flatten one clue against the document's metadata, in `HEADERS` order.
/// Absent money serializes as an empty field.
pub fn build_row(meta: &ShowMetadata, clue: &ClueRecord) -> Vec<String> {
    vec![
        meta.show_id.clone(),
        meta.air_date.clone(),
        s!(meta.game_type.as_str()),
        clue.topic.clone(),
        clue.money.map(|m| m.to_string()).unwrap_or_default(),
        clue.question.clone(),
        clue.answer.clone(),
    ]
}
