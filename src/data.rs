// src/data.rs
// Typed records handed from the scrape layer to serialization.

/// One cell of gameplay content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClueRecord {
    /// Category label governing this clue's column; empty when the header
    /// cell for that column was blank or missing.
    pub topic: String,
    /// Fixed board value. Absent for the final round (player-wagered, not
    /// modeled) and when the value cell held nothing parseable.
    pub money: Option<u32>,
    pub question: String,
    pub answer: String,
}

impl ClueRecord {
    /// Blank placeholder cells never become rows.
    pub fn is_worth_keeping(&self) -> bool {
        !self.question.is_empty() || !self.answer.is_empty()
    }
}

/// Show-level fields, one per document, repeated onto every output row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowMetadata {
    /// Numeric id lifted from the source URL; empty if absent.
    pub show_id: String,
    /// ISO `YYYY-MM-DD`, or empty when no date strategy matched.
    pub air_date: String,
    pub game_type: GameType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameType {
    #[default]
    Regular,
    Tournament,
    Celebrity,
    College,
}

impl GameType {
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Regular => "Regular",
            GameType::Tournament => "Tournament",
            GameType::Celebrity => "Celebrity",
            GameType::College => "College",
        }
    }
}
