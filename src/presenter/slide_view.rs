use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;

pub enum SlideMedia {
    Image(Texture2D),
    Video(Texture2D), // Streamed into from the decoder
    Missing,          // Failed to load; drawn as a plain backdrop
}

/// Visual state of one slide: its texture plus the Ken Burns drift applied
/// while it is on screen.
pub struct SlideView {
    media: SlideMedia,

    zoom: f32,
    pan: f32, // 0..1 along the pan direction
    ken_burns_pan_direction: i32,

    tween_zoom: ease::Tween,
    tween_pan: ease::Tween,
}

impl SlideView {
    pub fn new(media: SlideMedia) -> Self {
        let display = DEFAULT_SLIDE_DURATION_MS as f32 / 1000.0;
        Self {
            media,
            zoom: KEN_BURNS_ZOOM,
            pan: 0.0,
            ken_burns_pan_direction: rand::rng().random_range(0..4),
            tween_zoom: ease::Tween::new(ease::cubic_out, KEN_BURNS_ZOOM, 1.0, SLIDE_TRANSITION_DURATION),
            tween_pan: ease::Tween::new(ease::linear_none, 0.0, 1.0, display),
        }
    }

    /// Start the drift over for a new presentation of this slide.
    pub fn restart(&mut self) {
        *self = Self::new(std::mem::replace(&mut self.media, SlideMedia::Missing));
    }

    pub fn update(&mut self, dt: f32) {
        self.zoom = self.tween_zoom.apply(dt);
        // Videos settle but don't drift
        if matches!(self.media, SlideMedia::Image(_)) {
            self.pan = self.tween_pan.apply(dt);
        }
    }

    pub fn set_frame(&mut self, pixels: &[u8]) {
        if let SlideMedia::Video(texture) = &mut self.media {
            let _ = texture.update_texture(pixels);
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.media, SlideMedia::Missing)
    }

    /// Draw cover-fit into `area`, shifted horizontally by `offset_x` pixels.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle, offset_x: f32, alpha: f32) {
        let texture = match &self.media {
            SlideMedia::Image(texture) | SlideMedia::Video(texture) => texture,
            SlideMedia::Missing => {
                d.draw_rectangle_rec(
                    Rectangle::new(area.x + offset_x, area.y, area.width, area.height),
                    Color::new(29, 29, 31, (alpha * 255.0) as u8),
                );
                return;
            }
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;

        // Scale so the texture covers the whole area, then crop the overflow
        let scale = (area.width / tex_width).max(area.height / tex_height) * self.zoom;
        let source_width = area.width / scale;
        let source_height = area.height / scale;
        let slack_x = (tex_width - source_width) * 0.5;
        let slack_y = (tex_height - source_height) * 0.5;

        let pan = match self.ken_burns_pan_direction {
            0 => Vector2::new(-slack_x * self.pan, 0.0), // left-to-right
            1 => Vector2::new(slack_x * self.pan, 0.0),  // right-to-left
            2 => Vector2::new(0.0, -slack_y * self.pan), // top-to-bottom
            _ => Vector2::new(0.0, slack_y * self.pan),  // bottom-to-top
        };

        let source_rec = Rectangle::new(slack_x + pan.x, slack_y + pan.y, source_width, source_height);
        let dest_rec = Rectangle::new(area.x + offset_x, area.y, area.width, area.height);

        d.draw_texture_pro(
            texture,
            source_rec,
            dest_rec,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (alpha * 255.0) as u8),
        );
    }
}
