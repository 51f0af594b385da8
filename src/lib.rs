//! # carousel
//!
//! A self-advancing slideshow engine for hero carousels mixing images and
//! videos. Each slide shows for an explicit duration, its measured video
//! length, or a default; a per-frame progress clock drives the progress
//! indicator and advances to the next slide when it completes.
//!
//! The engine is host-agnostic. A host supplies a [`Clock`], a
//! [`FrameScheduler`] and a [`MediaSink`], calls [`Carousel::on_frame`] for
//! every frame callback and reads [`Carousel::state`] to draw.
//!
//! ```
//! use carousel::{Carousel, FrameQueue, ManualClock, NoMedia, Slide};
//!
//! let slides = vec![Slide::image(1, "a.jpg"), Slide::image(2, "b.jpg")];
//! let time = ManualClock::new();
//! let mut carousel = Carousel::new(slides, time.clone(), FrameQueue::new(), NoMedia).unwrap();
//!
//! for _ in 0..500 {
//!     time.advance_ms(10);
//!     carousel.run_frame();
//! }
//! assert_eq!(carousel.state().active_index, 1);
//! ```

pub mod carousel;
pub mod clock;
pub mod constants;
pub mod deck;
pub mod duration;
pub mod error;
pub mod frame;
pub mod media;
pub mod readiness;
pub mod slide;
pub mod state;

pub use carousel::Carousel;
pub use clock::{ClockTick, ProgressClock};
pub use deck::{load_slides, parse_slides};
pub use duration::{resolve_duration, validate_explicit_duration, MeasuredDurations};
pub use error::{CarouselError, MediaError};
pub use frame::{Clock, FrameId, FrameQueue, FrameScheduler, InstantClock, ManualClock};
pub use media::{MediaSink, NoMedia};
pub use readiness::MediaReadiness;
pub use slide::{ButtonKind, MediaKind, Slide, SlideButton, SlideContent};
pub use state::{CarouselState, Direction};
