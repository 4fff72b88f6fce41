// src/cli.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use scraper::Html;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::params::DEFAULT_OUT_FILE;
use crate::scrape::{metadata, scrape_game};
use crate::{file, net};

/// Scrape a J-Archive game page into CSV.
#[derive(Parser, Debug)]
#[command(name = "ja_scrape", version, about)]
pub struct Args {
    /// Game URL, e.g. https://www.j-archive.com/showgame.php?game_id=8881
    pub url: String,

    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    let body = net::fetch(&args.url)?;
    let doc = Html::parse_document(&body);

    let meta = metadata::extract_metadata(&doc, &args.url);
    let records = scrape_game(&doc);

    if records.is_empty() {
        // Not fatal: the output file still gets its header row.
        warn!("no clues found; the page structure may have changed or the URL is not a game page");
    }

    file::write_output(&args.out, &meta, &records)?;

    info!(
        show_id = %meta.show_id,
        air_date = %meta.air_date,
        game_type = meta.game_type.as_str(),
        "show metadata"
    );
    println!("Wrote {} rows to {}", records.len(), args.out.display());
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
