use crate::error::MediaError;

/// Playback commands the carousel issues for video slides.
///
/// Implementations own the actual players. Errors are reported back but the
/// carousel only logs them: its own clock keeps slides advancing whether or
/// not the media actually plays.
pub trait MediaSink {
    /// Seek the slide's media to the start and begin playback.
    fn restart(&mut self, index: usize) -> Result<(), MediaError>;
    /// Hold the slide's media at its current position.
    fn pause(&mut self, index: usize) -> Result<(), MediaError>;
    /// Stop the slide's media and release whatever it holds while playing.
    fn stop(&mut self, index: usize) -> Result<(), MediaError>;
}

/// Sink for decks without playable media.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMedia;

impl MediaSink for NoMedia {
    fn restart(&mut self, _index: usize) -> Result<(), MediaError> {
        Ok(())
    }

    fn pause(&mut self, _index: usize) -> Result<(), MediaError> {
        Ok(())
    }

    fn stop(&mut self, _index: usize) -> Result<(), MediaError> {
        Ok(())
    }
}
