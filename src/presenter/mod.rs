//! Desktop presenter: draws the carousel state and streams video frames.
//!
//! Reads the carousel only through its snapshot and slide list; every change
//! to playback goes back through the carousel's commands.

pub mod caption;
pub mod controls;
pub mod slide_view;

use carousel::{Carousel, Clock, Direction, FrameScheduler};
use raylib::prelude::*;

use crate::constants::*;
use crate::presenter::caption::draw_caption;
use crate::presenter::controls::ControlLayout;
use crate::presenter::slide_view::SlideView;
use crate::video::VideoPlayers;

/// A slide change in flight: the new slide pushes the old one off screen.
struct Transition {
    outgoing: usize,
    direction: Direction,
    timer: f32,
    tween: ease::Tween, // 1.0 -> 0.0, remaining offset of the incoming slide
    offset: f32,
}

pub struct Presenter {
    views: Vec<SlideView>,
    active: usize,
    transition: Option<Transition>,
    seen_changes: u64,
    caption_timer: f32,
    spinner_angle: f32,
}

impl Presenter {
    pub fn new(views: Vec<SlideView>) -> Self {
        Self {
            views,
            active: 0,
            transition: None,
            seen_changes: 0,
            caption_timer: 0.0,
            spinner_angle: 0.0,
        }
    }

    pub fn update<C, S>(&mut self, dt: f32, carousel: &Carousel<C, S, VideoPlayers>)
    where
        C: Clock,
        S: FrameScheduler,
    {
        let state = carousel.state();
        if carousel.slide_changes() != self.seen_changes {
            self.seen_changes = carousel.slide_changes();
            self.begin_transition(state.active_index, state.direction);
        }

        if let Some(transition) = &mut self.transition {
            transition.timer += dt;
            transition.offset = transition.tween.apply(dt);
            if transition.timer >= SLIDE_TRANSITION_DURATION {
                self.transition = None;
            }
        }

        self.caption_timer += dt;
        self.spinner_angle = (self.spinner_angle + dt * 360.0) % 360.0;

        self.views[self.active].update(dt);
        if let Some(frame) = carousel.media().next_frame(self.active) {
            self.views[self.active].set_frame(&frame);
        }
    }

    fn begin_transition(&mut self, index: usize, direction: Direction) {
        let outgoing = self.active;
        self.active = index;
        self.views[index].restart();
        self.caption_timer = 0.0;
        // A one-slide deck just restarts in place
        self.transition = (outgoing != index).then(|| Transition {
            outgoing,
            direction,
            timer: 0.0,
            tween: ease::Tween::new(ease::cubic_out, 1.0, 0.0, SLIDE_TRANSITION_DURATION),
            offset: 1.0,
        });
    }

    pub fn draw<C, S>(&self, d: &mut RaylibDrawHandle, carousel: &Carousel<C, S, VideoPlayers>)
    where
        C: Clock,
        S: FrameScheduler,
    {
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;
        let area = Rectangle::new(0.0, 0.0, screen_width, screen_height);
        let state = carousel.state();

        d.clear_background(Color::new(29, 29, 31, 255));

        match &self.transition {
            Some(transition) => {
                // Forward: new slide enters from the right, old one leaves left
                let side = match transition.direction {
                    Direction::Forward => 1.0,
                    Direction::Backward => -1.0,
                };
                let incoming_x = side * transition.offset * screen_width;
                let outgoing_x = incoming_x - side * screen_width;
                self.views[transition.outgoing].draw(d, area, outgoing_x, transition.offset);
                self.views[self.active].draw(d, area, incoming_x, 1.0 - transition.offset * 0.5);
            }
            None => self.views[self.active].draw(d, area, 0.0, 1.0),
        }

        if !carousel.is_loaded(self.active) && !self.views[self.active].is_missing() {
            self.draw_spinner(d, Vector2::new(screen_width * 0.5, screen_height * 0.5));
        }

        // Darken the top half so the caption stays readable
        d.draw_rectangle_gradient_v(
            0,
            0,
            screen_width as i32,
            screen_height as i32,
            Color::new(0, 0, 0, 153),
            Color::new(0, 0, 0, 0),
        );

        let caption_progress = (self.caption_timer / CAPTION_FADE_DURATION).min(1.0);
        let alpha = ease::cubic_out(caption_progress, 0.0, 1.0, 1.0);
        let lift = 40.0 * (1.0 - alpha);
        let margin = screen_width * 0.08;
        draw_caption(
            d,
            &carousel.slides()[self.active].content,
            Vector2::new(margin, screen_height * 0.3),
            (screen_width * 0.6).min(1100.0),
            alpha,
            lift,
        );

        ControlLayout::new(carousel.slide_count(), screen_width, screen_height).draw(d, &state);
    }

    fn draw_spinner(&self, d: &mut RaylibDrawHandle, center: Vector2) {
        d.draw_ring(center, 20.0, 24.0, 0.0, 360.0, 48, Color::new(255, 255, 255, 51));
        d.draw_ring(center, 20.0, 24.0, self.spinner_angle, self.spinner_angle + 90.0, 24, Color::WHITE);
    }
}
