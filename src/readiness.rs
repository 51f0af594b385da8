use std::collections::HashSet;

use log::debug;

use crate::duration::MeasuredDurations;

/// Tracks which slides have finished loading and what their media measured.
///
/// Measurements only feed future presentations: the progress clock resolves a
/// slide's duration once, when the slide starts.
#[derive(Debug, Default)]
pub struct MediaReadiness {
    measured: MeasuredDurations,
    loaded: HashSet<usize>,
}

impl MediaReadiness {
    pub fn new() -> Self {
        Self::default()
    }

    /// A video's natural duration became known. Returns `true` if the reading
    /// was stored (first valid reading for this slide).
    pub fn on_metadata_ready(&mut self, index: usize, duration_seconds: f64) -> bool {
        self.loaded.insert(index);
        let recorded = self.measured.record(index, duration_seconds);
        if recorded {
            debug!("Slide {} measured at {:.3} s", index, duration_seconds);
        }
        recorded
    }

    /// The slide's media finished loading (image decoded, video playable).
    pub fn on_media_loaded(&mut self, index: usize) {
        self.loaded.insert(index);
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.contains(&index)
    }

    pub fn measured(&self) -> &MeasuredDurations {
        &self.measured
    }
}
