use std::collections::HashMap;
use std::path::PathBuf;

use carousel::{MediaError, MediaSink, Slide};
use log::debug;

use crate::ffmpeg::VideoDecoder;

struct VideoSlot {
    path: PathBuf,
    decoder: Option<VideoDecoder>,
    playing: bool,
}

/// ffmpeg-backed players for the video slides of a deck.
pub struct VideoPlayers {
    slots: HashMap<usize, VideoSlot>,
    width: i32,
    height: i32,
    fps: u32,
}

impl VideoPlayers {
    pub fn new(slides: &[Slide], width: i32, height: i32, fps: u32) -> Self {
        let slots = slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.is_video())
            .map(|(index, slide)| {
                (index, VideoSlot { path: slide.media.clone(), decoder: None, playing: false })
            })
            .collect();
        Self { slots, width, height, fps }
    }

    pub fn frame_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Next frame for a playing slide. Paused or stopped slides yield nothing,
    /// which leaves their decoder blocked where it is.
    pub fn next_frame(&self, index: usize) -> Option<Vec<u8>> {
        let slot = self.slots.get(&index)?;
        if !slot.playing {
            return None;
        }
        slot.decoder.as_ref()?.next_frame()
    }

    fn slot(&mut self, index: usize) -> Result<&mut VideoSlot, MediaError> {
        self.slots.get_mut(&index).ok_or(MediaError::Unavailable(index))
    }
}

impl MediaSink for VideoPlayers {
    fn restart(&mut self, index: usize) -> Result<(), MediaError> {
        let (width, height, fps) = (self.width, self.height, self.fps);
        let slot = self.slot(index)?;
        // Seeking to zero is a fresh decoder
        slot.decoder = None;
        slot.playing = false;
        slot.decoder = Some(VideoDecoder::spawn(&slot.path, width, height, fps)?);
        slot.playing = true;
        debug!("Video slide {} playing from start", index);
        Ok(())
    }

    fn pause(&mut self, index: usize) -> Result<(), MediaError> {
        self.slot(index)?.playing = false;
        Ok(())
    }

    fn stop(&mut self, index: usize) -> Result<(), MediaError> {
        let slot = self.slot(index)?;
        slot.playing = false;
        slot.decoder = None;
        Ok(())
    }
}
