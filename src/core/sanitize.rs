// src/core/sanitize.rs

use scraper::ElementRef;

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn squish(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Squished text content of an element; text nodes joined by single spaces.
/// A selector miss (`None`) maps to the empty string so every extraction
/// step degrades instead of failing.
pub fn element_text(el: Option<ElementRef<'_>>) -> String {
    match el {
        Some(el) => squish(&el.text().collect::<Vec<_>>().join(" ")),
        None => s!(),
    }
}
