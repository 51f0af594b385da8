//! Playback controller: the only writer of [`CarouselState`].
//!
//! The carousel owns the progress clock, the host's clock and frame scheduler,
//! and the media sink. Hosts feed it frame callbacks and media events and read
//! back a snapshot for drawing.

use log::{debug, info, warn};

use crate::clock::{ClockTick, ProgressClock};
use crate::duration::resolve_duration;
use crate::error::{CarouselError, MediaError};
use crate::frame::{Clock, FrameId, FrameQueue, FrameScheduler};
use crate::media::MediaSink;
use crate::readiness::MediaReadiness;
use crate::slide::Slide;
use crate::state::{CarouselState, Direction};

pub struct Carousel<C, S, M>
where
    C: Clock,
    S: FrameScheduler,
    M: MediaSink,
{
    slides: Vec<Slide>,
    state: CarouselState,
    readiness: MediaReadiness,
    progress: ProgressClock,
    slide_changes: u64,

    clock: C,
    scheduler: S,
    media: M,
}

impl<C, S, M> Carousel<C, S, M>
where
    C: Clock,
    S: FrameScheduler,
    M: MediaSink,
{
    /// Mount the carousel: first slide active, playing, clock started.
    pub fn new(slides: Vec<Slide>, clock: C, scheduler: S, media: M) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        info!("Carousel mounted with {} slides", slides.len());

        let mut carousel = Self {
            slides,
            state: CarouselState::mounted(),
            readiness: MediaReadiness::new(),
            progress: ProgressClock::new(),
            slide_changes: 0,
            clock,
            scheduler,
            media,
        };
        carousel.start_presentation();
        Ok(carousel)
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn play(&mut self) {
        if self.state.is_playing {
            return;
        }
        debug!("Play at slide {}", self.state.active_index);
        self.state.is_playing = true;
        self.state.progress_percent = 0.0;
        self.start_presentation();
    }

    /// Freeze progress where it is and hold the active media.
    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }
        debug!("Pause at slide {} ({:.1}%)", self.state.active_index, self.state.progress_percent);
        self.state.is_playing = false;
        self.progress.stop(&mut self.scheduler);

        let index = self.state.active_index;
        if self.slides[index].is_video() {
            absorb("pause", self.media.pause(index));
        }
    }

    pub fn toggle(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to a slide. Jumping to the active slide changes nothing.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::OutOfRange { index, len: self.slides.len() });
        }
        if index == self.state.active_index {
            return Ok(());
        }
        let direction = if index > self.state.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.change_slide(index, direction);
        Ok(())
    }

    /// Frame callback from the host scheduler.
    pub fn on_frame(&mut self, frame: FrameId) {
        let now = self.clock.now();
        match self.progress.tick(frame, now, &mut self.scheduler) {
            Some(ClockTick::Progress(percent)) => self.state.progress_percent = percent,
            Some(ClockTick::Complete) => self.advance(),
            None => {}
        }
    }

    pub fn on_metadata_ready(&mut self, index: usize, duration_seconds: f64) {
        if index >= self.slides.len() {
            warn!("Metadata for unknown slide {} ignored", index);
            return;
        }
        self.readiness.on_metadata_ready(index, duration_seconds);
    }

    pub fn on_media_loaded(&mut self, index: usize) {
        self.readiness.on_media_loaded(index);
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.readiness.is_loaded(index)
    }

    pub fn readiness(&self) -> &MediaReadiness {
        &self.readiness
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.state.active_index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Number of slide changes since mount, automatic or manual. Also counts
    /// a one-slide deck wrapping onto itself.
    pub fn slide_changes(&self) -> u64 {
        self.slide_changes
    }

    /// Duration driving the current presentation.
    pub fn current_duration_ms(&self) -> u64 {
        self.progress.duration_ms()
    }

    pub fn is_clock_running(&self) -> bool {
        self.progress.is_running()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    fn advance(&mut self) {
        let next = (self.state.active_index + 1) % self.slides.len();
        self.change_slide(next, Direction::Forward);
    }

    fn change_slide(&mut self, index: usize, direction: Direction) {
        let previous = self.state.active_index;
        self.progress.stop(&mut self.scheduler);

        self.state.active_index = index;
        self.state.direction = direction;
        self.state.progress_percent = 0.0;
        self.slide_changes += 1;
        info!("Slide {} -> {} ({:?})", previous, index, direction);

        if self.slides[previous].is_video() {
            absorb("stop", self.media.stop(previous));
        }
        if self.state.is_playing {
            self.start_presentation();
        }
    }

    // Start media and clock for the active slide. Duration is resolved here
    // and stays fixed until the next presentation.
    fn start_presentation(&mut self) {
        let index = self.state.active_index;
        if self.slides[index].is_video() {
            absorb("restart", self.media.restart(index));
        }

        let duration_ms = resolve_duration(index, &self.slides[index], self.readiness.measured());
        debug!("Slide {} presented for {} ms", index, duration_ms);
        self.progress.start(duration_ms, self.clock.now(), &mut self.scheduler);
    }
}

impl<C, M> Carousel<C, FrameQueue, M>
where
    C: Clock,
    M: MediaSink,
{
    /// Dispatch every frame callback that came due since the last call.
    pub fn run_frame(&mut self) {
        for frame in self.scheduler.drain_due() {
            self.on_frame(frame);
        }
    }
}

impl<C, S, M> Drop for Carousel<C, S, M>
where
    C: Clock,
    S: FrameScheduler,
    M: MediaSink,
{
    fn drop(&mut self) {
        self.progress.stop(&mut self.scheduler);
        let index = self.state.active_index;
        if self.slides[index].is_video() {
            absorb("stop", self.media.stop(index));
        }
    }
}

fn absorb(action: &str, result: Result<(), MediaError>) {
    if let Err(e) = result {
        warn!("Media {} failed, timing continues: {}", action, e);
    }
}
