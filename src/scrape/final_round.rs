// src/scrape/final_round.rs
// The final round is one clue, one category, sudden death. Wagers are
// player-controlled and not modeled, so `money` stays absent.

use scraper::Html;

use super::{extract_answer, sel};
use crate::core::sanitize::element_text;
use crate::data::ClueRecord;

/// Zero or one record. The final round is optional: double-game specials
/// lack it, and pages with a tiebreaker contribute only the first table.
pub fn parse_final(doc: &Html) -> Vec<ClueRecord> {
    let mut out = Vec::new();

    let Some(table) = doc.select(&sel("table.final_round")).next() else {
        return out;
    };

    let record = ClueRecord {
        topic: element_text(table.select(&sel(".category_name")).next()),
        money: None,
        question: element_text(table.select(&sel("#clue_FJ")).next()),
        answer: extract_answer(table.select(&sel("#clue_FJ_r")).next()),
    };
    if record.is_worth_keeping() {
        out.push(record);
    }
    out
}
