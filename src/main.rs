use clap::Parser;
use crossword::core::config::{self, CliSource};
use crossword::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crossword", about = "Play crossword puzzles in the terminal")]
struct Args {
    /// Fetch the puzzle from this URL (wins over --file)
    #[arg(long)]
    url: Option<String>,

    /// Read the puzzle from a local JSON file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Play the built-in sample puzzle, ignoring env and config
    #[arg(long)]
    sample: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to crossword.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("crossword.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::CrosswordConfig::default()
    });
    let cli = CliSource {
        url: args.url,
        file: args.file,
        sample: args.sample,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!("Crossword starting up with puzzle from {}", resolved.location);

    tui::run(resolved)
}
