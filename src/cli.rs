use clap::{ArgAction::Count, Parser};
use cmfetch::clients::{
    entities::{Artist, Source},
    errors::Result,
};
use cmfetch::fetcher::{ConfigBuilder, Fetcher};
use log::{LevelFilter, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cmfetch")]
#[command(version, about = "Append Chartmetric artist stats to a per-artist CSV file", long_about = None)]
struct Cli {
    /// Chartmetric API bearer token
    api_token: String,

    /// Chartmetric artist id
    entity_id: String,

    /// Artist name, also the directory the CSV lives in
    artist_name: String,

    /// Statistic stream to fetch
    #[arg(short, long, value_enum, default_value_t = Source::YoutubeArtist)]
    source: Source,

    /// Directory holding one sub-directory per artist
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Root of the Chartmetric API
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Turn debugging information on
    #[arg(short, long, action = Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("Building config ...");
    let config = ConfigBuilder::new(cli.api_token)
        .api_url(cli.api_url)
        .data_dir(cli.data_dir)
        .build()?;
    let fetcher = Fetcher::new(config);

    let artist = Artist::new(cli.entity_id, cli.artist_name);
    let outcome = fetcher.fetch(&artist, cli.source).await?;
    if let Some(line) = outcome.diagnostic() {
        println!("{line}");
    }
    Ok(())
}
