use std::path::PathBuf;

use anyhow::Context;
use bookshelf::config::Config;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "bookshelf",
    version,
    about = "Track the books you want to read, are reading and have finished"
)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the book service base URL [default: http://localhost:8000]
    ///
    /// The service address can also be set with `base_url` under `[api]` in the config file.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    bookshelf::logging::init_tracing(&config.logging).with_context(|| {
        format!(
            "Failed to open log file '{}'",
            config.logging.file_path().display()
        )
    })?;

    bookshelf::ui::run(config)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }

    Ok(config)
}
