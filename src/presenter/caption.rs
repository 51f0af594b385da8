use carousel::{ButtonKind, SlideContent};
use raylib::core::text::measure_text;
use raylib::prelude::*;

const SUBTITLE_SIZE: i32 = 20;
const TITLE_SIZE: i32 = 56;
const DESCRIPTION_SIZE: i32 = 24;
const BUTTON_SIZE: i32 = 20;

/// Break `text` into lines no wider than `max_width` pixels at `font_size`.
pub fn wrap_text(text: &str, font_size: i32, max_width: i32, measure: impl Fn(&str, i32) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() { word.to_string() } else { format!("{} {}", line, word) };
        if !line.is_empty() && measure(&candidate, font_size) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draw subtitle, title, description and buttons, left-aligned at `origin`.
/// `alpha` and `lift` animate the fade-in after a slide change.
pub fn draw_caption(d: &mut RaylibDrawHandle, content: &SlideContent, origin: Vector2, max_width: f32, alpha: f32, lift: f32) {
    let fade = |r: u8, g: u8, b: u8| Color::new(r, g, b, (alpha * 255.0) as u8);
    let x = origin.x as i32;
    let mut y = (origin.y + lift) as i32;

    if !content.subtitle.is_empty() {
        d.draw_text(&content.subtitle.to_uppercase(), x, y, SUBTITLE_SIZE, fade(161, 161, 166));
        y += SUBTITLE_SIZE + 16;
    }

    for line in wrap_text(&content.title, TITLE_SIZE, max_width as i32, measure_text) {
        // Offset copy as a cheap text shadow
        d.draw_text(&line, x + 2, y + 3, TITLE_SIZE, Color::new(0, 0, 0, (alpha * 100.0) as u8));
        d.draw_text(&line, x, y, TITLE_SIZE, fade(255, 255, 255));
        y += TITLE_SIZE + 8;
    }
    y += 16;

    for line in wrap_text(&content.description, DESCRIPTION_SIZE, max_width as i32, measure_text) {
        d.draw_text(&line, x, y, DESCRIPTION_SIZE, fade(232, 232, 237));
        y += DESCRIPTION_SIZE + 8;
    }
    y += 24;

    let mut button_x = x as f32;
    for button in &content.buttons {
        let text_width = measure_text(&button.text, BUTTON_SIZE) as f32;
        let rec = Rectangle::new(button_x, y as f32, text_width + 48.0, BUTTON_SIZE as f32 + 28.0);
        match button.kind {
            ButtonKind::Primary => {
                d.draw_rectangle_rounded(rec, 1.0, 16, fade(255, 255, 255));
                d.draw_text(&button.text, (rec.x + 24.0) as i32, (rec.y + 14.0) as i32, BUTTON_SIZE, fade(29, 29, 31));
            }
            ButtonKind::Secondary => {
                // Outline: white pill with a darker inset
                d.draw_rectangle_rounded(rec, 1.0, 16, fade(255, 255, 255));
                let inner = Rectangle::new(rec.x + 2.0, rec.y + 2.0, rec.width - 4.0, rec.height - 4.0);
                d.draw_rectangle_rounded(inner, 1.0, 16, Color::new(29, 29, 31, (alpha * 200.0) as u8));
                d.draw_text(&button.text, (rec.x + 24.0) as i32, (rec.y + 14.0) as i32, BUTTON_SIZE, fade(255, 255, 255));
            }
        }
        button_x += rec.width + 16.0;
    }
}
