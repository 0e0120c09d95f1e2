//! Builds the visual subtree for a carousel: a viewport frame holding a
//! sliding track of slides, plus optional arrow controls and indicator dots.
//!
//! The types here are the structural contract embedders may style or
//! inspect. Interactive elements carry the [`Command`] they issue; an input
//! adapter dispatches that command through the widget's handle when the
//! element is activated.

use crate::config::CarouselOptions;
use crate::events::Command;

/// Container owned by the embedding page. The carousel installs its rendered
/// subtree here and clears it again on teardown.
#[derive(Debug, Default)]
pub struct Host {
    subtree: Option<Subtree>,
}

impl Host {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove any rendered content.
    pub fn clear(&mut self) {
        self.subtree = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subtree.is_none()
    }

    #[must_use]
    pub fn subtree(&self) -> Option<&Subtree> {
        self.subtree.as_ref()
    }

    pub(crate) fn subtree_mut(&mut self) -> Option<&mut Subtree> {
        self.subtree.as_mut()
    }
}

/// Rendered carousel root.
#[derive(Debug)]
pub struct Subtree {
    pub frame: Frame,
    pub arrows: Option<Arrows>,
    pub dots: Vec<Dot>,
}

/// Viewport clipping the track to a single slide's width.
#[derive(Debug)]
pub struct Frame {
    pub track: Track,
}

/// Slides laid side by side. `offset_percent` shifts the strip (in
/// percentages of the viewport width) so the current slide sits fully
/// inside the frame.
#[derive(Debug)]
pub struct Track {
    pub offset_percent: f32,
    pub slides: Vec<Slide>,
}

/// One slide, wrapping one image. Slide order matches sequence order; the
/// track offset math depends on it.
#[derive(Debug)]
pub struct Slide {
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub source: String,
    pub alt: String,
}

/// Previous/next controls.
#[derive(Debug)]
pub struct Arrows {
    pub previous: Control,
    pub next: Control,
}

/// An activatable control carrying the navigation command it issues.
#[derive(Debug)]
pub struct Control {
    command: Command,
    pub glyph: char,
}

impl Control {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command
    }
}

/// Indicator for one slide; activating it jumps straight to that slide.
#[derive(Debug)]
pub struct Dot {
    target: usize,
    pub active: bool,
}

impl Dot {
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    #[must_use]
    pub fn command(&self) -> Command {
        Command::GoTo(self.target)
    }
}

/// Build the carousel subtree inside `host`, replacing any prior content.
///
/// One slide per image, in sequence order; arrows and dots only when the
/// options ask for them. The initial visual state shows slide 0.
pub fn build(host: &mut Host, images: &[String], options: &CarouselOptions) {
    host.clear();

    let slides = images
        .iter()
        .enumerate()
        .map(|(i, source)| Slide {
            image: Image {
                source: source.clone(),
                alt: format!("Slide {}", i + 1),
            },
        })
        .collect();

    let arrows = options.show_arrows.then(|| Arrows {
        previous: Control {
            command: Command::Previous,
            glyph: '\u{276e}',
        },
        next: Control {
            command: Command::Next,
            glyph: '\u{276f}',
        },
    });

    let dots = if options.show_dots {
        (0..images.len())
            .map(|target| Dot {
                target,
                active: target == 0,
            })
            .collect()
    } else {
        Vec::new()
    };

    host.subtree = Some(Subtree {
        frame: Frame {
            track: Track {
                offset_percent: 0.0,
                slides,
            },
        },
        arrows,
        dots,
    });
}
