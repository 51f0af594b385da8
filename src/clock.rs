use std::time::Duration;

use crate::frame::{FrameId, FrameScheduler};

/// Outcome of one frame for a running [`ProgressClock`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ClockTick {
    Progress(f32), // Still running, percent in 0..100
    Complete,      // Reached 100 %, no further frames scheduled
}

/// Turns elapsed time into a 0..=100 progress value for one slide at a time.
///
/// Owns at most one pending frame. `start` always cancels the previous loop
/// before requesting a new frame, so two loops can never race.
#[derive(Debug, Default)]
pub struct ProgressClock {
    pending: Option<FrameId>,
    started_at: Duration,
    duration_ms: u64,
    percent: f32,
}

impl ProgressClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<S: FrameScheduler + ?Sized>(&mut self, duration_ms: u64, now: Duration, scheduler: &mut S) {
        self.stop(scheduler);
        self.started_at = now;
        self.duration_ms = duration_ms;
        self.percent = 0.0;
        self.pending = Some(scheduler.request_frame());
    }

    /// Cancel the pending frame, if any. Safe to call at any time.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel_frame(id);
        }
    }

    /// Handle a frame callback. Frames that don't belong to the current loop
    /// (cancelled or superseded) yield `None`.
    pub fn tick<S: FrameScheduler + ?Sized>(
        &mut self,
        frame: FrameId,
        now: Duration,
        scheduler: &mut S,
    ) -> Option<ClockTick> {
        if self.pending != Some(frame) {
            return None;
        }
        self.pending = None;

        self.percent = self.percent_at(now);
        if self.percent >= 100.0 {
            return Some(ClockTick::Complete);
        }

        self.pending = Some(scheduler.request_frame());
        Some(ClockTick::Progress(self.percent))
    }

    fn percent_at(&self, now: Duration) -> f32 {
        // Zero duration completes on the first frame
        if self.duration_ms == 0 {
            return 100.0;
        }
        let elapsed_ms = now.saturating_sub(self.started_at).as_nanos() as f64 / 1_000_000.0;
        (elapsed_ms * 100.0 / self.duration_ms as f64).min(100.0) as f32
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Duration of the current (or last) loop.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Clock, FrameQueue, ManualClock};

    // Dispatch one frame batch, collecting what the clock reported
    fn pump(clock: &mut ProgressClock, queue: &mut FrameQueue, now: Duration) -> Vec<ClockTick> {
        queue
            .drain_due()
            .into_iter()
            .filter_map(|id| clock.tick(id, now, &mut *queue))
            .collect()
    }

    #[test]
    fn test_progress_follows_elapsed_time() {
        let time = ManualClock::new();
        let mut queue = FrameQueue::new();
        let mut clock = ProgressClock::new();
        clock.start(1000, time.now(), &mut queue);

        time.advance_ms(250);
        assert_eq!(pump(&mut clock, &mut queue, time.now()), vec![ClockTick::Progress(25.0)]);
        time.advance_ms(500);
        assert_eq!(pump(&mut clock, &mut queue, time.now()), vec![ClockTick::Progress(75.0)]);
        time.advance_ms(400);
        assert_eq!(pump(&mut clock, &mut queue, time.now()), vec![ClockTick::Complete]);
        assert_eq!(clock.percent(), 100.0);

        // Nothing scheduled after completion
        assert!(!clock.is_running());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_double_start_leaves_one_loop() {
        let time = ManualClock::new();
        let mut queue = FrameQueue::new();
        let mut clock = ProgressClock::new();
        clock.start(500, time.now(), &mut queue);
        clock.start(500, time.now(), &mut queue);
        assert_eq!(queue.pending_count(), 1);

        let mut completions = 0;
        for _ in 0..60 {
            time.advance_ms(16);
            completions += pump(&mut clock, &mut queue, time.now())
                .iter()
                .filter(|t| **t == ClockTick::Complete)
                .count();
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_stale_frame_ignored() {
        let time = ManualClock::new();
        let mut queue = FrameQueue::new();
        let mut clock = ProgressClock::new();
        clock.start(100, time.now(), &mut queue);
        let stale = queue.drain_due()[0];
        clock.start(100, time.now(), &mut queue);

        time.advance_ms(200);
        assert_eq!(clock.tick(stale, time.now(), &mut queue), None);
        assert!(clock.is_running());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut queue = FrameQueue::new();
        let mut clock = ProgressClock::new();
        clock.stop(&mut queue);
        clock.start(1000, Duration::ZERO, &mut queue);
        clock.stop(&mut queue);
        clock.stop(&mut queue);
        assert!(!clock.is_running());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_frame() {
        let mut queue = FrameQueue::new();
        let mut clock = ProgressClock::new();
        clock.start(0, Duration::ZERO, &mut queue);
        assert_eq!(pump(&mut clock, &mut queue, Duration::ZERO), vec![ClockTick::Complete]);
    }

    #[test]
    fn test_restart_resets_progress() {
        let time = ManualClock::new();
        let mut queue = FrameQueue::new();
        let mut clock = ProgressClock::new();
        clock.start(1000, time.now(), &mut queue);
        time.advance_ms(600);
        pump(&mut clock, &mut queue, time.now());
        assert_eq!(clock.percent(), 60.0);

        clock.start(2000, time.now(), &mut queue);
        assert_eq!(clock.percent(), 0.0);
        assert_eq!(clock.duration_ms(), 2000);
        time.advance_ms(500);
        assert_eq!(pump(&mut clock, &mut queue, time.now()), vec![ClockTick::Progress(25.0)]);
    }
}
