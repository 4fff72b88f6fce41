// src/core/money.rs

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").unwrap());

/// Pull the dollar amount out of a clue value cell.
/// The *last* digit group wins, so marker text before the wager
/// ("DD: $1,800") never shadows the amount. No digit group, or a group
/// that fails to parse, yields `None`; this never errors.
pub fn parse_money(raw: &str) -> Option<u32> {
    let group = DIGIT_GROUPS.find_iter(raw).last()?;
    group.as_str().replace(',', "").parse().ok()
}
