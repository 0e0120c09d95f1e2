//! Carousel widget: the navigation state machine and its auto-play timer.
//!
//! [`Carousel`] owns the rendered subtree, the current slide index, and the
//! optional repeating timer. External events reach it as [`Command`]s over a
//! bounded channel ([`CarouselHandle`]); the [`Carousel::run`] loop applies
//! them one at a time until its cancellation token fires.

use std::time::Duration;

use tokio::select;
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::CarouselOptions;
use crate::error::Error;
use crate::events::Command;
use crate::structure::{self, Host};

const COMMAND_QUEUE_DEPTH: usize = 16;

/// Clonable sender used by input adapters (arrow activations, dot
/// activations, remote controllers) to drive a running carousel.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    tx: mpsc::Sender<Command>,
}

impl CarouselHandle {
    /// Deliver a command to the widget's event loop.
    ///
    /// # Errors
    /// Returns [`Error::ControllerClosed`] once the widget has been torn
    /// down.
    pub async fn send(&self, command: Command) -> Result<(), Error> {
        self.tx
            .send(command)
            .await
            .map_err(|_| Error::ControllerClosed)
    }

    pub async fn next(&self) -> Result<(), Error> {
        self.send(Command::Next).await
    }

    pub async fn previous(&self) -> Result<(), Error> {
        self.send(Command::Previous).await
    }

    pub async fn go_to(&self, index: usize) -> Result<(), Error> {
        self.send(Command::GoTo(index)).await
    }

    pub async fn start_auto_play(&self) -> Result<(), Error> {
        self.send(Command::StartAutoPlay).await
    }

    pub async fn stop_auto_play(&self) -> Result<(), Error> {
        self.send(Command::StopAutoPlay).await
    }
}

/// A running repeating timer. Dropping it cancels the pending tick, so the
/// owner can never leak more than one.
#[derive(Debug)]
struct AutoPlayTimer {
    cancel: CancellationToken,
}

impl AutoPlayTimer {
    fn spawn(delay: Duration, tx: mpsc::Sender<Command>) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        tokio::spawn(async move {
            loop {
                select! {
                    _ = token.cancelled() => break,
                    _ = sleep(delay) => {
                        if tx.send(Command::Next).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });
        Self { cancel }
    }
}

impl Drop for AutoPlayTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// The carousel widget.
///
/// The current index is always in `[0, len)`; at most one auto-play timer is
/// live; the indicator marked active always matches the current index.
#[derive(Debug)]
pub struct Carousel {
    host: Host,
    images: Vec<String>,
    options: CarouselOptions,
    index: usize,
    autoplay: Option<AutoPlayTimer>,
    commands_tx: mpsc::Sender<Command>,
    commands_rx: Option<mpsc::Receiver<Command>>,
    index_tx: watch::Sender<usize>,
}

impl Carousel {
    /// Build the widget inside `host` and, when configured, start auto-play.
    ///
    /// # Errors
    /// Returns [`Error::EmptyImages`] if `images` is empty.
    pub fn new(
        mut host: Host,
        images: Vec<String>,
        options: CarouselOptions,
    ) -> Result<Self, Error> {
        if images.is_empty() {
            return Err(Error::EmptyImages);
        }

        structure::build(&mut host, &images, &options);
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        let (index_tx, _) = watch::channel(0);

        let mut carousel = Self {
            host,
            images,
            options,
            index: 0,
            autoplay: None,
            commands_tx,
            commands_rx: Some(commands_rx),
            index_tx,
        };
        carousel.apply_visual_state();
        if carousel.options.auto_play {
            carousel.start_auto_play();
        }
        Ok(carousel)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[must_use]
    pub fn is_auto_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Handle for delivering commands to [`run`](Self::run).
    #[must_use]
    pub fn handle(&self) -> CarouselHandle {
        CarouselHandle {
            tx: self.commands_tx.clone(),
        }
    }

    /// Subscribe to current-index changes.
    #[must_use]
    pub fn index_changes(&self) -> watch::Receiver<usize> {
        self.index_tx.subscribe()
    }

    /// Advance one slide, wrapping past the end.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
        self.apply_visual_state();
        self.reset_auto_play();
    }

    /// Step back one slide, wrapping before the start.
    pub fn previous(&mut self) {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
        self.apply_visual_state();
        self.reset_auto_play();
    }

    /// Jump straight to `index`, no wraparound semantics.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a valid slide.
    pub fn go_to_slide(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.images.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.index = index;
        self.apply_visual_state();
        self.reset_auto_play();
        Ok(())
    }

    /// Start the auto-play timer. No-op when auto-play is disabled by
    /// configuration or a timer is already running.
    pub fn start_auto_play(&mut self) {
        if !self.options.auto_play || self.autoplay.is_some() {
            return;
        }
        debug!(delay = ?self.options.auto_play_delay, "auto-play started");
        self.autoplay = Some(AutoPlayTimer::spawn(
            self.options.auto_play_delay,
            self.commands_tx.clone(),
        ));
    }

    /// Cancel the auto-play timer if one is running. Idempotent.
    pub fn stop_auto_play(&mut self) {
        if self.autoplay.take().is_some() {
            debug!("auto-play stopped");
        }
    }

    /// Restart the countdown window so manual navigation doesn't race the
    /// pending automatic advance. No-op when auto-play is disabled.
    fn reset_auto_play(&mut self) {
        if self.options.auto_play {
            self.stop_auto_play();
            self.start_auto_play();
        }
    }

    /// Bring the rendered subtree in line with the current index: track
    /// offset, exactly one active indicator. Idempotent.
    fn apply_visual_state(&mut self) {
        let index = self.index;
        if let Some(subtree) = self.host.subtree_mut() {
            subtree.frame.track.offset_percent = -(index as f32) * 100.0;
            for dot in &mut subtree.dots {
                dot.active = dot.target() == index;
            }
        }
        self.index_tx.send_replace(index);
        debug!(index, "applied visual state");
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::GoTo(index) => {
                if let Err(err) = self.go_to_slide(index) {
                    warn!(%err, "ignoring jump to invalid slide");
                }
            }
            Command::StartAutoPlay => self.start_auto_play(),
            Command::StopAutoPlay => self.stop_auto_play(),
        }
    }

    /// Run the widget's event loop, applying commands from input adapters
    /// and auto-play ticks until `cancel` fires, then tear down.
    ///
    /// # Errors
    /// Returns [`Error::ControllerClosed`] if the loop was already consumed.
    pub async fn run(mut self, cancel: CancellationToken) -> Result<Host, Error> {
        let mut commands = self.commands_rx.take().ok_or(Error::ControllerClosed)?;
        loop {
            select! {
                _ = cancel.cancelled() => break,
                maybe = commands.recv() => match maybe {
                    Some(command) => self.apply(command),
                    None => break,
                },
            }
        }
        Ok(self.destroy())
    }

    /// Stop any running timer and clear the rendered subtree, returning the
    /// emptied host container to the embedding.
    #[must_use]
    pub fn destroy(mut self) -> Host {
        self.stop_auto_play();
        self.host.clear();
        debug!("carousel destroyed");
        self.host
    }
}
