use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};
use clap::{Parser, Subcommand};
use landing_core::{FilterKey, LandingConfig};
use landing_wasm::render_countdown;

#[derive(Parser, Debug)]
#[command(
    name = "landing-cli",
    about = "Check countdown deadlines, filter keys and page config for the NFT landing page."
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the countdown a timer element would show.
    Countdown {
        /// Value of the element's deadline attribute.
        #[arg(short, long)]
        end_time: String,
        /// Instant to render at (RFC 3339); defaults to now.
        #[arg(long)]
        now: Option<DateTime<FixedOffset>>,
        /// Page timezone for deadlines without an offset, e.g. +07:00.
        #[arg(long, default_value = "+00:00")]
        utc_offset: FixedOffset,
    },
    /// Print the filter key derived from each control label.
    FilterKey {
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Merge a JSON config file onto the defaults, validate it and print it.
    Config {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Countdown {
            end_time,
            now,
            utc_offset,
        } => {
            let now = now.map_or_else(Utc::now, |now| now.with_timezone(&Utc));
            let rendered = render_countdown(&end_time, now, utc_offset)
                .with_context(|| format!("Could not render countdown for {end_time:?}"))?;
            println!("{rendered}");
        }
        Command::FilterKey { labels } => {
            for label in labels {
                println!("{label:?} -> {}", FilterKey::from_label(&label));
            }
        }
        Command::Config { input } => {
            let config = match input {
                Some(path) => {
                    let data = std::fs::read_to_string(&path)
                        .with_context(|| format!("Could not read file {path:?}"))?;
                    serde_json::from_str::<LandingConfig>(&data)
                        .with_context(|| format!("Invalid config in {path:?}"))?
                }
                None => LandingConfig::default(),
            };
            config.validate()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
