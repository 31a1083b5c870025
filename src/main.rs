use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::error;

use strictgtfs::{Feed, LoadOptions};

/// Loads a GTFS feed directory and prints how many records each file holds.
#[derive(Parser)]
#[command(name = "strictgtfs")]
#[command(version)]
struct Cli {
    /// Directory containing the feed files
    feed_dir: PathBuf,

    /// Log and drop invalid data rows instead of failing the file
    #[arg(long)]
    skip_invalid_rows: bool,

    /// Also reject records missing conditionally required fields
    #[arg(long)]
    check_conditional: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let mut options = LoadOptions::new().check_conditionally_required(cli.check_conditional);
    if cli.skip_invalid_rows {
        options = options.skip_invalid_rows();
    }

    let feed = match Feed::from_path(&cli.feed_dir, &options) {
        Ok(feed) => feed,
        Err(e) => {
            error!("{}", e);
            if let Some(source) = std::error::Error::source(&e) {
                error!("caused by: {}", source);
            }
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&feed.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("could not serialize the summary: {}", e);
            process::exit(1);
        }
    }
}
