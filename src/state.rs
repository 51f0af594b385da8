/// Last navigation direction. Only used to pick the slide-in side of the
/// transition animation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Forward,  // Next slide enters from the right
    Backward, // Next slide enters from the left
}

/// Read-only snapshot of the carousel handed to the presenter each frame.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CarouselState {
    pub active_index: usize,
    pub direction: Direction,
    pub is_playing: bool,
    pub progress_percent: f32, // 0..=100, for the active slide only
}

impl CarouselState {
    /// State at mount: first slide, playing, no progress.
    pub fn mounted() -> Self {
        Self {
            active_index: 0,
            direction: Direction::Forward,
            is_playing: true,
            progress_percent: 0.0,
        }
    }
}
