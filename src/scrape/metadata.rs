// src/scrape/metadata.rs

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use super::sel;
use crate::core::dates;
use crate::core::sanitize::element_text;
use crate::data::{GameType, ShowMetadata};

static GAME_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"game_id=(\d+)").unwrap());

/// Show-level fields. Every lookup degrades to an empty or default value;
/// this never fails.
pub fn extract_metadata(doc: &Html, url: &str) -> ShowMetadata {
    let show_id = GAME_ID
        .captures(url)
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    let comments = element_text(doc.select(&sel(".game_comments, .game_comment")).next());
    let title = element_text(doc.select(&sel("h1, .game_title")).next());

    // Fixed-precedence chain: the first strategy that parses wins, even if
    // a later region holds a different date. Comments are consulted before
    // the title.
    let attempts: [(&str, fn(&str) -> Option<String>); 3] = [
        (&comments, dates::iso_date),
        (&comments, dates::long_form_date),
        (&title, dates::weekday_long_form_date),
    ];
    let air_date = attempts
        .iter()
        .find_map(|(text, strategy)| strategy(text))
        .unwrap_or_default();

    ShowMetadata { show_id, air_date, game_type: detect_game_type(doc) }
}

/// Tournament, then celebrity, then college; first structural match wins,
/// no match means a regular game.
fn detect_game_type(doc: &Html) -> GameType {
    let checks = [
        (".tournament_game", GameType::Tournament),
        (".celebrity_game", GameType::Celebrity),
        (".college_game", GameType::College),
    ];
    for (css, kind) in checks {
        if doc.select(&sel(css)).next().is_some() {
            return kind;
        }
    }
    GameType::Regular
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.j-archive.com/showgame.php?game_id=8881";

    #[test]
    fn show_id_comes_from_the_url() {
        let doc = Html::parse_document("<html></html>");
        let meta = extract_metadata(&doc, URL);
        assert_eq!(meta.show_id, "8881");

        let meta = extract_metadata(&doc, "https://www.j-archive.com/");
        assert_eq!(meta.show_id, "");
    }

    #[test]
    fn iso_date_in_comments_wins_without_fallback() {
        let doc = Html::parse_document(
            r#"<div class="game_comments">aired 2024-01-15, see also January 20, 2024</div>
               <h1>Show, aired Wednesday, April 10, 2024</h1>"#,
        );
        assert_eq!(extract_metadata(&doc, URL).air_date, "2024-01-15");
    }

    #[test]
    fn long_form_comment_date_reformats_to_iso() {
        let doc = Html::parse_document(
            r#"<div class="game_comment">First aired January 15, 2024.</div>"#,
        );
        assert_eq!(extract_metadata(&doc, URL).air_date, "2024-01-15");
    }

    #[test]
    fn title_weekday_date_is_the_last_resort() {
        let doc = Html::parse_document(
            r#"<div class="game_comments">no date in here</div>
               <h1>Show #9000, aired Wednesday, April 10, 2024</h1>"#,
        );
        assert_eq!(extract_metadata(&doc, URL).air_date, "2024-04-10");
    }

    #[test]
    fn comments_date_shadows_a_differing_title_date() {
        let doc = Html::parse_document(
            r#"<div class="game_comments">taped January 15, 2024</div>
               <h1>aired Wednesday, April 10, 2024</h1>"#,
        );
        assert_eq!(extract_metadata(&doc, URL).air_date, "2024-01-15");
    }

    #[test]
    fn no_date_anywhere_is_empty() {
        let doc = Html::parse_document("<h1>A game page with no date</h1>");
        assert_eq!(extract_metadata(&doc, URL).air_date, "");
    }

    #[test]
    fn game_type_precedence_is_fixed() {
        let doc = Html::parse_document(
            r#"<div class="celebrity_game"></div><div class="tournament_game"></div>"#,
        );
        assert_eq!(extract_metadata(&doc, URL).game_type, GameType::Tournament);

        let doc = Html::parse_document(r#"<div class="college_game"></div>"#);
        assert_eq!(extract_metadata(&doc, URL).game_type, GameType::College);

        let doc = Html::parse_document("<html></html>");
        assert_eq!(extract_metadata(&doc, URL).game_type, GameType::Regular);
    }
}
