//! Binary entrypoint for the image carousel demo.
//!
//! Embeds the library widget in a terminal host: scans a directory for
//! images, builds the carousel, and drives it from stdin commands until
//! `q` or Ctrl-C tears it down.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rand::seq::SliceRandom;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use image_carousel::carousel::{Carousel, CarouselHandle};
use image_carousel::config;
use image_carousel::scan::{ScanOptions, scan_images};
use image_carousel::structure::Host;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "image-carousel", about = "Terminal-hosted image carousel")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the delay between automatic advances (e.g. "5s", "750ms")
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    auto_play_delay: Option<Duration>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("image_carousel={}", level).parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = config::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cfg.validate().context("validating configuration")?;

    let mut images: Vec<String> = scan_images(&cfg.image_directory, &ScanOptions::default())?
        .into_iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    if cfg.startup_shuffle {
        images.shuffle(&mut rand::rng());
    }
    info!(count = images.len(), "scanned images");

    let mut options = cfg.carousel.clone();
    if let Some(delay) = cli.auto_play_delay {
        options.auto_play_delay = delay;
    }

    let carousel = Carousel::new(Host::new(), images, options)?;
    let handle = carousel.handle();
    let mut index_changes = carousel.index_changes();

    let cancel = CancellationToken::new();
    let widget = tokio::spawn(carousel.run(cancel.clone()));

    tokio::spawn(async move {
        while index_changes.changed().await.is_ok() {
            let index = *index_changes.borrow();
            info!(index, "showing slide");
        }
    });

    // Terminal input adapter: n/p step, digits jump, a/s control auto-play.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line? {
                Some(input) => {
                    if !dispatch(&handle, input.trim()).await? {
                        break;
                    }
                }
                None => break,
            },
        }
    }

    cancel.cancel();
    widget.await.context("joining carousel task")??;
    info!("carousel torn down");
    Ok(())
}

async fn dispatch(handle: &CarouselHandle, input: &str) -> Result<bool> {
    match input {
        "" => {}
        "q" | "quit" => return Ok(false),
        "n" | "next" => handle.next().await?,
        "p" | "prev" => handle.previous().await?,
        "a" | "play" => handle.start_auto_play().await?,
        "s" | "stop" => handle.stop_auto_play().await?,
        other => match other.parse::<usize>() {
            Ok(index) => handle.go_to(index).await?,
            Err(_) => warn!(input = other, "unrecognized command"),
        },
    }
    Ok(true)
}
