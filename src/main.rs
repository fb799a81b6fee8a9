use clap::Parser;
use scribe::core::config::{self, CliOverrides, ScribeConfig};
use scribe::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "scribe", about = "Student writing helper: style, grammar and definitions")]
struct Args {
    /// Backend base URL (overrides SCRIBE_BACKEND_URL and the config file)
    #[arg(short, long)]
    backend_url: Option<String>,

    /// Word cap for the style and grammar inputs
    #[arg(short, long)]
    max_words: Option<usize>,

    /// Render every response as it lands, even if a newer request was made
    #[arg(long)]
    keep_stale_responses: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to scribe.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("scribe.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        ScribeConfig::default()
    });
    let overrides = CliOverrides {
        backend_url: args.backend_url,
        max_words: args.max_words,
        keep_stale_responses: args.keep_stale_responses,
    };
    let resolved = config::resolve(&file_config, &overrides);

    log::info!(
        "Scribe starting up (backend={}, max_words={}, discard_stale={})",
        resolved.backend_url,
        resolved.max_words,
        resolved.discard_stale_responses
    );

    tui::run(resolved)
}
