pub const DEFAULT_SLIDE_DURATION_MS: u64 = 5000; // Images, and videos whose metadata is pending

pub const RENDER_WIDTH: i32 = 1920;           // Default window width
pub const RENDER_HEIGHT: i32 = 1080;          // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SLIDE_TRANSITION_DURATION: f32 = 0.7; // Slide-in of the next slide (seconds)
pub const CAPTION_FADE_DURATION: f32 = 0.6;     // Caption fade-in after a slide change (seconds)
pub const KEN_BURNS_ZOOM: f32 = 1.1;            // Image slides start zoomed in and settle to 1.0

pub const RING_RADIUS: f32 = 19.0;            // Active slide progress ring
pub const RING_THICKNESS: f32 = 2.0;
pub const INDICATOR_SPACING: f32 = 60.0;      // Distance between slide indicators
pub const INDICATOR_MARGIN: f32 = 48.0;       // Distance of the indicator column from the right edge
