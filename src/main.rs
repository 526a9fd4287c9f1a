use chrono::NaiveDate;
use clap::Parser;
use mix_item::{Episode, Overrides};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Print the podcast feed <item> for one Essential Mix episode directory
#[derive(Parser)]
#[command(name = "mix-item", version)]
struct Cli {
    /// Directory holding the episode's .txt description and .m4a recording
    directory: PathBuf,

    /// JSON file with field overrides, e.g. {"episode": 1200}
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Use this title instead of the one from the info text
    #[arg(long)]
    title: Option<String>,

    /// Use this episode number instead of the one from the info text
    #[arg(long)]
    episode: Option<u32>,

    /// Use this enclosure URL instead of the derived one
    #[arg(long)]
    url: Option<String>,

    /// Use this size in bytes instead of the audio file's size
    #[arg(long)]
    size: Option<u64>,

    /// Use this duration in seconds instead of the probed one
    #[arg(long)]
    duration: Option<u64>,

    /// Use this air date (YYYY-MM-DD) instead of the one from the info text
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl Cli {
    /// Overrides given as individual flags
    fn flag_overrides(&self) -> Overrides {
        Overrides {
            title: self.title.clone(),
            episode: self.episode,
            url: self.url.clone(),
            size: self.size,
            duration: self.duration,
            date: self.date,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Check if directory exists
    if !cli.directory.is_dir() {
        eprintln!("Error: Not a directory: {}", cli.directory.display());
        process::exit(1);
    }

    let overrides = match &cli.overrides {
        Some(path) => match Overrides::from_json_file(path) {
            Ok(overrides) => overrides,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => Overrides::default(),
    };
    let overrides = overrides.merge(cli.flag_overrides());

    let result = Episode::new(&cli.directory, overrides).and_then(|episode| episode.xml_item());

    match result {
        Ok(xml) => println!("{}", xml),
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "failed to resolve episode");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
