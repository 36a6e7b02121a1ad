mod clock;
mod config;
mod model;
mod prompt;
mod reaper;
mod twitter;

use crate::clock::SystemClock;
use crate::config::Config;
use crate::prompt::LineConfirm;
use crate::reaper::{ReapOptions, Reaper};
use crate::twitter::v1::TwitterClientV1;
use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Path to the JSON file with API credentials and tweets to spare
    #[clap(short, long)]
    config: PathBuf,
    /// Tweets at least this many days old will be deleted (0 deletes everything)
    #[clap(short, long, default_value_t = 0)]
    days: u32,
    /// Do not delete anything, only report what would be deleted
    #[clap(short, long)]
    test: bool,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = main2().await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn main2() -> anyhow::Result<()> {
    let args: Args = Args::parse();
    let config = Config::load(&args.config).await?;

    let proceed = {
        let stdin = io::stdin();
        let mut confirm = LineConfirm::new(stdin.lock(), io::stdout());
        prompt::confirm_threshold(args.days, &mut confirm).context("Prompt failed")?
    };
    if !proceed {
        log::info!("Nothing was deleted");
        return Ok(());
    }

    if args.test {
        log::info!("Test mode, nothing will be deleted");
    }
    let client = TwitterClientV1::new(&config);
    let options = ReapOptions {
        days: args.days,
        dry_run: args.test,
    };
    let summary = Reaper::new(&client, &SystemClock, &config.spare, options)
        .run()
        .await?;

    if args.test {
        log::info!(
            "Examined {} tweets, {} would be deleted, {} spared",
            summary.examined,
            summary.candidates,
            summary.skipped
        );
    } else {
        log::info!(
            "Examined {} tweets, deleted {}, {} spared",
            summary.examined,
            summary.deleted,
            summary.skipped
        );
    }
    Ok(())
}
