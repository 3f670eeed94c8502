//! postdeck: compose carousel posts from the terminal.
//!
//! Usage:
//!   postdeck add-slide
//!   postdeck tag https://www.instagram.com/janedoe/
//!   postdeck show

use anyhow::Result;
use clap::Parser;
use postdeck_composer::{Cli, ComposerConfig, Session};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ComposerConfig::load_from(&cli.config);
    if let Some(dir) = cli.draft_dir {
        config.draft_dir = dir;
    }

    let mut session = Session::open(&config);
    let stdout = std::io::stdout();
    session.execute(cli.command, &mut stdout.lock()).await
}
