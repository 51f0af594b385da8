//! Display duration policy.
//!
//! A slide shows for its explicit duration if it has one, otherwise for the
//! measured length of its video, otherwise for [`DEFAULT_SLIDE_DURATION_MS`].

use std::collections::HashMap;

use log::debug;

use crate::constants::DEFAULT_SLIDE_DURATION_MS;
use crate::error::CarouselError;
use crate::slide::{MediaKind, Slide};

/// Measured media lengths in seconds, keyed by slide index.
///
/// Each index is written at most once: the first valid reading wins so a
/// re-fired metadata event cannot make a slide's timing jitter.
#[derive(Debug, Default, Clone)]
pub struct MeasuredDurations {
    by_index: HashMap<usize, f64>,
}

impl MeasuredDurations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a reading. Returns `true` if it was recorded, `false` if the
    /// value is not a finite positive number or the index already has one.
    pub fn record(&mut self, index: usize, seconds: f64) -> bool {
        if !seconds.is_finite() || seconds <= 0.0 {
            debug!("Discarding invalid duration {} s for slide {}", seconds, index);
            return false;
        }
        if self.by_index.contains_key(&index) {
            debug!("Slide {} already measured, ignoring {} s", index, seconds);
            return false;
        }
        self.by_index.insert(index, seconds);
        true
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.by_index.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }
}

/// Duration in milliseconds to drive the progress clock for one presentation
/// of `slide` (found at `index` in the deck). Always positive.
pub fn resolve_duration(index: usize, slide: &Slide, measured: &MeasuredDurations) -> u64 {
    if let Some(ms) = slide.explicit_duration_ms.filter(|ms| *ms > 0) {
        return ms;
    }
    match slide.kind {
        MediaKind::Video => match measured.get(index) {
            Some(seconds) => ((seconds * 1000.0).round() as u64).max(1),
            None => DEFAULT_SLIDE_DURATION_MS,
        },
        MediaKind::Image => DEFAULT_SLIDE_DURATION_MS,
    }
}

/// Strict check for an explicit duration coming from configuration.
pub fn validate_explicit_duration(ms: i64) -> Result<u64, CarouselError> {
    if ms <= 0 {
        return Err(CarouselError::InvalidDuration(ms));
    }
    Ok(ms as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_duration_wins() {
        let mut measured = MeasuredDurations::new();
        measured.record(0, 30.0);
        measured.record(1, 30.0);

        let image = Slide::image(1, "a.jpg").with_duration_ms(7000);
        let video = Slide::video(2, "b.mp4").with_duration_ms(3000);
        assert_eq!(resolve_duration(0, &image, &measured), 7000);
        assert_eq!(resolve_duration(1, &video, &measured), 3000);
    }

    #[test]
    fn test_video_uses_measurement_once_known() {
        let mut measured = MeasuredDurations::new();
        let video = Slide::video(1, "clip.mp4");
        assert_eq!(resolve_duration(0, &video, &measured), DEFAULT_SLIDE_DURATION_MS);

        assert!(measured.record(0, 12.5));
        assert_eq!(resolve_duration(0, &video, &measured), 12500);
    }

    #[test]
    fn test_image_ignores_measurement() {
        let mut measured = MeasuredDurations::new();
        measured.record(0, 42.0);
        let image = Slide::image(1, "a.png");
        assert_eq!(resolve_duration(0, &image, &measured), DEFAULT_SLIDE_DURATION_MS);
    }

    #[test]
    fn test_zero_explicit_duration_falls_back() {
        let measured = MeasuredDurations::new();
        let image = Slide::image(1, "a.png").with_duration_ms(0);
        assert_eq!(resolve_duration(0, &image, &measured), DEFAULT_SLIDE_DURATION_MS);
    }

    #[test]
    fn test_tiny_measurement_is_still_positive() {
        let mut measured = MeasuredDurations::new();
        measured.record(0, 0.0001);
        let video = Slide::video(1, "blip.mp4");
        assert_eq!(resolve_duration(0, &video, &measured), 1);
    }

    #[test]
    fn test_first_measurement_wins() {
        let mut measured = MeasuredDurations::new();
        assert!(measured.record(2, 8.0));
        assert!(!measured.record(2, 9.0));
        assert_eq!(measured.get(2), Some(8.0));
        assert_eq!(measured.len(), 1);
    }

    #[test]
    fn test_invalid_measurements_discarded() {
        let mut measured = MeasuredDurations::new();
        assert!(!measured.record(0, f64::NAN));
        assert!(!measured.record(0, f64::INFINITY));
        assert!(!measured.record(0, 0.0));
        assert!(!measured.record(0, -3.0));
        assert!(measured.is_empty());
        // A later valid reading is still accepted
        assert!(measured.record(0, 4.0));
    }

    #[test]
    fn test_validate_explicit_duration() {
        assert_eq!(validate_explicit_duration(2500).unwrap(), 2500);
        assert!(matches!(validate_explicit_duration(0), Err(CarouselError::InvalidDuration(0))));
        assert!(matches!(validate_explicit_duration(-10), Err(CarouselError::InvalidDuration(-10))));
    }
}
