// src/params.rs

pub const DEFAULT_OUT_FILE: &str = "jarchive_clues.csv";

// Request headers the site sees. Kept fixed so runs are reproducible.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (compatible; jarchive-scraper/1.0; +https://example.com/)";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.8";

/// One bounded network wait per run; nothing retries.
pub const REQUEST_TIMEOUT_SECS: u64 = 20;
