use carousel::CarouselState;
use raylib::prelude::*;

use crate::constants::*;

/// Right-hand control column: play/pause button on top, then one indicator
/// per slide, vertically centered.
pub struct ControlLayout {
    pub count: usize,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl ControlLayout {
    pub fn new(count: usize, screen_width: f32, screen_height: f32) -> Self {
        Self { count, screen_width, screen_height }
    }

    fn column_x(&self) -> f32 {
        self.screen_width - INDICATOR_MARGIN
    }

    // Top of the column, play button included
    fn column_top(&self) -> f32 {
        let height = INDICATOR_SPACING * (self.count + 1) as f32;
        (self.screen_height - height) * 0.5
    }

    pub fn play_button_center(&self) -> Vector2 {
        Vector2::new(self.column_x(), self.column_top() + INDICATOR_SPACING * 0.5)
    }

    pub fn indicator_center(&self, index: usize) -> Vector2 {
        Vector2::new(self.column_x(), self.column_top() + INDICATOR_SPACING * (index as f32 + 1.5))
    }

    pub fn indicator_at(&self, point: Vector2) -> Option<usize> {
        (0..self.count).find(|index| within(point, self.indicator_center(*index), INDICATOR_SPACING * 0.5))
    }

    pub fn play_button_hit(&self, point: Vector2) -> bool {
        within(point, self.play_button_center(), INDICATOR_SPACING * 0.5)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, state: &CarouselState) {
        // Play/pause button
        let button = self.play_button_center();
        d.draw_circle_v(button, 24.0, Color::new(255, 255, 255, 26));
        if state.is_playing {
            d.draw_rectangle_rec(Rectangle::new(button.x - 7.0, button.y - 9.0, 5.0, 18.0), Color::WHITE);
            d.draw_rectangle_rec(Rectangle::new(button.x + 2.0, button.y - 9.0, 5.0, 18.0), Color::WHITE);
        } else {
            d.draw_triangle(
                Vector2::new(button.x - 5.0, button.y - 10.0),
                Vector2::new(button.x - 5.0, button.y + 10.0),
                Vector2::new(button.x + 10.0, button.y),
                Color::WHITE,
            );
        }

        for index in 0..self.count {
            let center = self.indicator_center(index);
            if index == state.active_index {
                // Background circle, then the progress arc clockwise from the top
                d.draw_ring(center, RING_RADIUS - RING_THICKNESS, RING_RADIUS, 0.0, 360.0, 48, Color::new(255, 255, 255, 77));
                let sweep = 360.0 * state.progress_percent / 100.0;
                if sweep > 0.0 {
                    d.draw_ring(center, RING_RADIUS - RING_THICKNESS, RING_RADIUS, -90.0, -90.0 + sweep, 48, Color::WHITE);
                }
                d.draw_circle_v(center, 3.0, Color::WHITE);
            } else {
                d.draw_circle_v(center, 3.0, Color::new(255, 255, 255, 102));
            }
        }
    }
}

fn within(point: Vector2, center: Vector2, radius: f32) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}
