use std::path::PathBuf;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use raylib::prelude::*;

use carousel::constants;
use carousel::{Carousel, Clock, FrameQueue, InstantClock, ManualClock, MediaKind, load_slides};

mod ffmpeg;
mod presenter;
mod texture_loader;
mod video;

use crate::constants::*;
use crate::presenter::Presenter;
use crate::presenter::controls::ControlLayout;
use crate::presenter::slide_view::{SlideMedia, SlideView};
use crate::texture_loader::{create_frame_texture, load_texture_with_exif_rotation};
use crate::video::VideoPlayers;

#[derive(Parser, Debug)]
#[command(version, about = "Hero carousel player for image and video slide decks")]
struct Args {
    /// Slide deck (YAML)
    deck: PathBuf,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Advance time by exactly one frame per rendered frame instead of
    /// following the wall clock
    #[arg(long)]
    fixed_step: bool,

    /// Start paused
    #[arg(long)]
    paused: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Wall clock, or one frame of simulated time per rendered frame.
enum HostClock {
    Realtime(InstantClock),
    FixedStep(ManualClock),
}

impl Clock for HostClock {
    fn now(&self) -> Duration {
        match self {
            HostClock::Realtime(clock) => clock.now(),
            HostClock::FixedStep(clock) => clock.now(),
        }
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level.as_str())).init();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let slides = load_slides(&args.deck).with_context(|| format!("Failed to load deck {:?}", args.deck))?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Hero Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut views = Vec::with_capacity(slides.len());
    let mut loaded = Vec::new();
    for (index, slide) in slides.iter().enumerate() {
        let media = match slide.kind {
            MediaKind::Image => match load_texture_with_exif_rotation(&mut rl, &thread, &slide.media) {
                Ok(texture) => {
                    loaded.push(index);
                    SlideMedia::Image(texture)
                }
                Err(e) => {
                    error!("Slide {}: {:#}", slide.id, e);
                    SlideMedia::Missing
                }
            },
            MediaKind::Video => SlideMedia::Video(create_frame_texture(&mut rl, &thread, args.width, args.height)?),
        };
        views.push(SlideView::new(media));
    }

    let videos: Vec<(usize, PathBuf)> = slides
        .iter()
        .enumerate()
        .filter(|(_, slide)| slide.is_video())
        .map(|(index, slide)| (index, slide.media.clone()))
        .collect();
    let probes = ffmpeg::spawn_probes(videos);

    let fixed_clock = ManualClock::new();
    let clock = if args.fixed_step {
        HostClock::FixedStep(fixed_clock.clone())
    } else {
        HostClock::Realtime(InstantClock::new())
    };
    let frame_time = 1.0 / args.fps.max(1) as f32;

    let players = VideoPlayers::new(&slides, args.width, args.height, args.fps);
    let mut carousel = Carousel::new(slides, clock, FrameQueue::new(), players)?;
    for index in loaded {
        carousel.on_media_loaded(index);
    }
    if args.paused {
        carousel.pause();
    }

    let mut presenter = Presenter::new(views);
    let mut probes_open = true;
    info!("Press Space to pause, Left/Right or 1-9 to switch slides");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = if args.fixed_step {
            fixed_clock.advance(Duration::from_secs_f32(frame_time));
            frame_time
        } else {
            rl.get_frame_time()
        };

        // Media metadata that arrived since the last frame
        while probes_open {
            match probes.try_recv() {
                Ok((index, seconds)) => carousel.on_metadata_ready(index, seconds),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => probes_open = false,
            }
        }

        handle_input(&rl, &mut carousel)?;

        carousel.run_frame();
        presenter.update(dt, &carousel);

        let mut d = rl.begin_drawing(&thread);
        presenter.draw(&mut d, &carousel);
    }

    Ok(())
}

fn handle_input(rl: &RaylibHandle, carousel: &mut Carousel<HostClock, FrameQueue, VideoPlayers>) -> Result<()> {
    let count = carousel.slide_count();
    let active = carousel.state().active_index;

    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        carousel.toggle();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        carousel.go_to((active + 1) % count)?;
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        carousel.go_to((active + count - 1) % count)?;
    }

    const DIGITS: [KeyboardKey; 9] = [
        KeyboardKey::KEY_ONE,
        KeyboardKey::KEY_TWO,
        KeyboardKey::KEY_THREE,
        KeyboardKey::KEY_FOUR,
        KeyboardKey::KEY_FIVE,
        KeyboardKey::KEY_SIX,
        KeyboardKey::KEY_SEVEN,
        KeyboardKey::KEY_EIGHT,
        KeyboardKey::KEY_NINE,
    ];
    for (index, key) in DIGITS.iter().enumerate().take(count) {
        if rl.is_key_pressed(*key) {
            carousel.go_to(index)?;
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let layout = ControlLayout::new(count, rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let mouse = rl.get_mouse_position();
        if layout.play_button_hit(mouse) {
            carousel.toggle();
        } else if let Some(index) = layout.indicator_at(mouse) {
            carousel.go_to(index)?;
        }
    }

    Ok(())
}
