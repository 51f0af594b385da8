//! Error types for the carousel engine and its slide decks.
//!
//! Only caller bugs and unusable decks surface as [`CarouselError`]. Bad timing
//! input and media playback failures are absorbed where they happen and never
//! reach the viewer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    /// A carousel needs at least one slide to have an active index.
    #[error("Carousel has no slides")]
    NoSlides,

    /// `go_to` was asked for a slide that does not exist.
    ///
    /// ```
    /// # use carousel::CarouselError;
    /// let err = CarouselError::OutOfRange { index: 7, len: 4 };
    /// assert_eq!(err.to_string(), "Slide index 7 out of range (4 slides)");
    /// ```
    #[error("Slide index {index} out of range ({len} slides)")]
    OutOfRange { index: usize, len: usize },

    /// An explicit display duration that is zero or negative.
    #[error("Invalid slide duration: {0} ms")]
    InvalidDuration(i64),

    #[error("Duplicate slide id {0}")]
    DuplicateSlideId(u32),

    /// The slide deck could not be parsed.
    #[error("Invalid slide deck: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for CarouselError {
    fn from(e: serde_yaml::Error) -> Self {
        CarouselError::Config(e.to_string())
    }
}

/// Failure reported by a [`MediaSink`](crate::media::MediaSink) when it cannot
/// start, pause or stop a slide's media. The carousel logs these and keeps
/// advancing on its own clock.
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Playback of slide {index} rejected: {reason}")]
    PlaybackRejected { index: usize, reason: String },

    #[error("Media for slide {0} is not available")]
    Unavailable(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
