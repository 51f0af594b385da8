use carousel::{
    Carousel, CarouselError, Direction, FrameQueue, ManualClock, MediaError, MediaSink, NoMedia, Slide,
};

const FRAME_MS: u64 = 10;

type ImageCarousel = Carousel<ManualClock, FrameQueue, NoMedia>;

fn images(count: u32) -> Vec<Slide> {
    (0..count).map(|id| Slide::image(id, format!("slide{}.jpg", id))).collect()
}

fn mount<M: MediaSink>(slides: Vec<Slide>, media: M) -> (Carousel<ManualClock, FrameQueue, M>, ManualClock) {
    let time = ManualClock::new();
    let carousel = Carousel::new(slides, time.clone(), FrameQueue::new(), media).unwrap();
    (carousel, time)
}

// Step simulated time frame by frame, returning how many times progress
// dropped back to zero.
fn run_ms<M: MediaSink>(carousel: &mut Carousel<ManualClock, FrameQueue, M>, time: &ManualClock, ms: u64) -> usize {
    let mut resets = 0;
    let mut last = carousel.state().progress_percent;
    for _ in 0..ms / FRAME_MS {
        time.advance_ms(FRAME_MS);
        carousel.run_frame();
        let now = carousel.state().progress_percent;
        if last > 0.0 && now == 0.0 {
            resets += 1;
        }
        last = now;
    }
    resets
}

#[test]
fn test_four_images_full_cycle() {
    let (mut carousel, time): (ImageCarousel, _) = mount(images(4), NoMedia);
    let resets = run_ms(&mut carousel, &time, 20_000);

    assert_eq!(carousel.state().active_index, 0);
    assert_eq!(resets, 4);
    assert_eq!(carousel.slide_changes(), 4);
    assert!(carousel.state().is_playing);
}

#[test]
fn test_progress_is_monotonic_within_a_presentation() {
    let (mut carousel, time): (ImageCarousel, _) = mount(images(2), NoMedia);
    let mut last = 0.0;
    for _ in 0..499 {
        time.advance_ms(FRAME_MS);
        carousel.run_frame();
        let percent = carousel.state().progress_percent;
        assert!(percent >= last);
        assert!(percent <= 100.0);
        last = percent;
    }
    assert_eq!(carousel.state().active_index, 0);
}

#[test]
fn test_video_measured_while_playing_applies_next_pass() {
    let slides = vec![Slide::video(0, "intro.mp4"), Slide::image(1, "still.jpg")];
    let (mut carousel, time) = mount(slides, NoMedia);
    assert_eq!(carousel.current_duration_ms(), 5000);

    run_ms(&mut carousel, &time, 1000);
    carousel.on_metadata_ready(0, 8.0);
    assert_eq!(carousel.current_duration_ms(), 5000);

    // First pass still ends on the fallback
    run_ms(&mut carousel, &time, 4000);
    assert_eq!(carousel.state().active_index, 1);

    // Back to the video after the image
    run_ms(&mut carousel, &time, 5000);
    assert_eq!(carousel.state().active_index, 0);
    assert_eq!(carousel.current_duration_ms(), 8000);

    run_ms(&mut carousel, &time, 7990);
    assert_eq!(carousel.state().active_index, 0);
    run_ms(&mut carousel, &time, 10);
    assert_eq!(carousel.state().active_index, 1);
}

#[test]
fn test_measured_duration_used_when_revisited() {
    let slides = vec![Slide::image(0, "a.jpg"), Slide::video(1, "b.mp4")];
    let (mut carousel, _time) = mount(slides, NoMedia);

    carousel.on_metadata_ready(1, 12.5);
    carousel.go_to(1).unwrap();
    assert_eq!(carousel.current_duration_ms(), 12_500);
}

#[test]
fn test_late_metadata_after_slide_left() {
    let slides = vec![Slide::video(0, "a.mp4"), Slide::image(1, "b.jpg"), Slide::image(2, "c.jpg")];
    let (mut carousel, time) = mount(slides, NoMedia);
    run_ms(&mut carousel, &time, 5000);
    assert_eq!(carousel.state().active_index, 1);

    // Arrives after the fallback presentation already finished
    carousel.on_metadata_ready(0, 3.0);
    assert_eq!(carousel.current_duration_ms(), 5000);

    carousel.go_to(0).unwrap();
    assert_eq!(carousel.current_duration_ms(), 3000);
}

#[test]
fn test_second_measurement_ignored() {
    let slides = vec![Slide::video(0, "a.mp4"), Slide::image(1, "b.jpg")];
    let (mut carousel, _time) = mount(slides, NoMedia);
    carousel.on_metadata_ready(1, 9.0);
    carousel.on_metadata_ready(0, 6.0);
    carousel.on_metadata_ready(0, 7.0);
    carousel.go_to(1).unwrap();
    carousel.go_to(0).unwrap();
    assert_eq!(carousel.current_duration_ms(), 6000);
}

#[test]
fn test_invalid_metadata_keeps_fallback() {
    let slides = vec![Slide::image(0, "a.jpg"), Slide::video(1, "b.mp4")];
    let (mut carousel, _time) = mount(slides, NoMedia);
    carousel.on_metadata_ready(1, f64::NAN);
    carousel.on_metadata_ready(1, f64::INFINITY);
    carousel.on_metadata_ready(1, -2.0);
    carousel.go_to(1).unwrap();
    assert_eq!(carousel.current_duration_ms(), 5000);
    assert!(carousel.is_loaded(1));
}

#[test]
fn test_explicit_duration_beats_measurement() {
    let slides = vec![Slide::image(0, "a.jpg"), Slide::video(1, "b.mp4").with_duration_ms(4000)];
    let (mut carousel, _time) = mount(slides, NoMedia);
    carousel.on_metadata_ready(1, 30.0);
    carousel.go_to(1).unwrap();
    assert_eq!(carousel.current_duration_ms(), 4000);
}

#[test]
fn test_pause_play_does_not_advance() {
    let (mut carousel, time): (ImageCarousel, _) = mount(images(3), NoMedia);
    run_ms(&mut carousel, &time, 4500);
    carousel.pause();
    run_ms(&mut carousel, &time, 30_000);
    carousel.play();

    let state = carousel.state();
    assert_eq!(state.active_index, 0);
    assert_eq!(state.progress_percent, 0.0);
    assert_eq!(carousel.scheduler().pending_count(), 1);
}

#[test]
fn test_go_to_active_is_noop() {
    let (mut carousel, time): (ImageCarousel, _) = mount(images(3), NoMedia);
    run_ms(&mut carousel, &time, 2000);
    carousel.go_to(2).unwrap();
    carousel.go_to(0).unwrap();
    run_ms(&mut carousel, &time, 1000);
    let before = carousel.state();
    assert_eq!(before.direction, Direction::Backward);

    carousel.go_to(0).unwrap();
    assert_eq!(carousel.state(), before);
    run_ms(&mut carousel, &time, 10);
    assert!(carousel.state().progress_percent > before.progress_percent);
}

#[test]
fn test_rapid_navigation_keeps_single_loop() {
    let (mut carousel, time): (ImageCarousel, _) = mount(images(5), NoMedia);
    for index in [3, 1, 4, 0, 2, 2, 1] {
        carousel.go_to(index).unwrap();
        carousel.toggle();
        carousel.toggle();
        assert!(carousel.scheduler().pending_count() <= 1);
    }
    let changes = carousel.slide_changes();
    run_ms(&mut carousel, &time, 5000);
    assert_eq!(carousel.slide_changes(), changes + 1);
    assert_eq!(carousel.state().active_index, 2);
}

#[test]
fn test_out_of_range_is_an_error() {
    let (mut carousel, _time): (ImageCarousel, _) = mount(images(2), NoMedia);
    assert!(matches!(carousel.go_to(2), Err(CarouselError::OutOfRange { index: 2, len: 2 })));
}

struct FailingMedia;

impl MediaSink for FailingMedia {
    fn restart(&mut self, index: usize) -> Result<(), MediaError> {
        Err(MediaError::Unavailable(index))
    }

    fn pause(&mut self, index: usize) -> Result<(), MediaError> {
        Err(MediaError::Unavailable(index))
    }

    fn stop(&mut self, index: usize) -> Result<(), MediaError> {
        Err(MediaError::Unavailable(index))
    }
}

#[test]
fn test_media_failures_never_stall() {
    let slides = vec![Slide::video(0, "a.mp4"), Slide::video(1, "b.mp4")];
    let (mut carousel, time) = mount(slides, FailingMedia);
    carousel.pause();
    carousel.play();
    let resets = run_ms(&mut carousel, &time, 10_000);
    assert_eq!(resets, 2);
    assert_eq!(carousel.state().active_index, 0);
}
