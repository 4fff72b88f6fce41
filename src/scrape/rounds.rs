// src/scrape/rounds.rs
// One main-round grid: a category header row, then rows of up to six clue
// cells positionally aligned with those categories. Vacated cells are
// skipped; category slots never are, or the columns drift.

use scraper::ElementRef;

use super::{extract_answer, sel};
use crate::core::money::parse_money;
use crate::core::sanitize::element_text;
use crate::data::ClueRecord;

/// Parse one `table.round`. The two main rounds differ only in wager
/// magnitude, so both go through here.
pub fn parse_round(table: ElementRef<'_>) -> Vec<ClueRecord> {
    let mut rows = Vec::new();

    // Header row: up to six `td.category` cells. Blank labels stay in
    // place so later columns keep their index.
    let category_name = sel(".category_name");
    let categories: Vec<String> = table
        .select(&sel("tr > td.category"))
        .map(|cat| element_text(cat.select(&category_name).next()))
        .collect();

    let tr = sel("tr");
    let td_clue = sel("td.clue");
    let inner_table = sel("table");
    let value = sel(".clue_header .clue_value, .clue_header .clue_value_daily_double");
    let clue_text = sel("td.clue_text");

    // Everything after the category row. Rows nested inside clue cells
    // turn up in this walk too, but they carry no `td.clue` of their own.
    for row in table.select(&tr).skip(1) {
        for (col_idx, cell) in row.select(&td_clue).enumerate() {
            // Vacated cells hold no inner table and no clue.
            if cell.select(&inner_table).next().is_none() {
                continue;
            }

            // Normal and daily-double value markers both funnel through
            // the money parser.
            let money = parse_money(&element_text(cell.select(&value).next()));

            // Reveal cells carry the `_r` id suffix; the first non-reveal
            // `clue_text` cell is the prompt.
            let mut q_td = None;
            let mut a_td = None;
            for td in cell.select(&clue_text) {
                let id = td.value().attr("id").unwrap_or("");
                if id.ends_with("_r") {
                    a_td = Some(td);
                } else if q_td.is_none() {
                    q_td = Some(td);
                }
            }

            let record = ClueRecord {
                topic: categories.get(col_idx).cloned().unwrap_or_default(),
                money,
                question: element_text(q_td),
                answer: extract_answer(a_td),
            };
            if record.is_worth_keeping() {
                rows.push(record);
            }
        }
    }

    rows
}
