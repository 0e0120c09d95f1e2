//! Configuration types for the carousel widget and its host application.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Options recognized by the carousel, resolved once at construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CarouselOptions {
    /// Interval between automatic advances.
    #[serde(
        with = "humantime_serde",
        default = "CarouselOptions::default_auto_play_delay"
    )]
    pub auto_play_delay: Duration,
    /// Whether previous/next controls are built.
    #[serde(default = "CarouselOptions::default_show_arrows")]
    pub show_arrows: bool,
    /// Whether per-slide indicator dots are built.
    #[serde(default = "CarouselOptions::default_show_dots")]
    pub show_dots: bool,
    /// Whether the timer starts automatically and restarts after manual
    /// navigation.
    #[serde(default = "CarouselOptions::default_auto_play")]
    pub auto_play: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            auto_play_delay: Self::default_auto_play_delay(),
            show_arrows: Self::default_show_arrows(),
            show_dots: Self::default_show_dots(),
            auto_play: Self::default_auto_play(),
        }
    }
}

impl CarouselOptions {
    const fn default_auto_play_delay() -> Duration {
        Duration::from_millis(5000)
    }

    const fn default_show_arrows() -> bool {
        true
    }

    const fn default_show_dots() -> bool {
        true
    }

    const fn default_auto_play() -> bool {
        true
    }

    /// # Errors
    /// Fails when the auto-play delay is zero.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.auto_play_delay > Duration::ZERO,
            "carousel.auto-play-delay must be positive"
        );
        Ok(())
    }
}

/// Top-level configuration for the demo binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    /// Directory scanned for the image sequence.
    pub image_directory: PathBuf,
    /// Shuffle the scanned sequence once at startup.
    #[serde(default)]
    pub startup_shuffle: bool,
    /// Widget options.
    #[serde(default)]
    pub carousel: CarouselOptions,
}

impl Configuration {
    /// # Errors
    /// Fails when any nested option group is invalid.
    pub fn validate(&self) -> Result<()> {
        self.carousel.validate()
    }
}

/// Load a [`Configuration`] from a YAML file.
///
/// # Errors
/// Fails when the file cannot be read or does not parse.
pub fn from_yaml_file(path: &Path) -> Result<Configuration> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: Configuration =
        serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
