// src/scrape/mod.rs
pub mod final_round;
pub mod metadata;
pub mod rounds;

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::element_text;
use crate::data::ClueRecord;

/// Compile a selector literal. Every pattern in this crate is a string
/// literal, so a parse failure is a typo caught by the first test run.
pub(crate) fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Official answer lives in `em.correct_response` inside the reveal cell.
/// Surrounding chatter (who rang in, bracketed notes, contestant tables)
/// is ignored. No reveal cell at all yields an empty answer, not an error.
pub(crate) fn extract_answer(reveal: Option<ElementRef<'_>>) -> String {
    match reveal {
        Some(td) => element_text(td.select(&sel("em.correct_response")).next()),
        None => s!(),
    }
}

/// Concatenate, in order: round 1, round 2, final (0 or 1 record).
/// A structurally absent round contributes nothing; an empty total is the
/// caller's to report, not a failure here.
pub fn scrape_game(doc: &Html) -> Vec<ClueRecord> {
    let mut data = Vec::new();

    if let Some(table) = doc.select(&sel("#jeopardy_round table.round")).next() {
        data.extend(rounds::parse_round(table));
    }
    if let Some(table) = doc.select(&sel("#double_jeopardy_round table.round")).next() {
        data.extend(rounds::parse_round(table));
    }
    data.extend(final_round::parse_final(doc));

    data
}
