use std::path::PathBuf;

use serde::Deserialize;

/// What kind of media backs a slide. Drives the duration policy and whether
/// the slide has playback to start and stop.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Guess the media kind from a file extension.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "bmp" | "gif" | "webp" => Some(MediaKind::Image),
            "mp4" | "webm" | "mov" | "mkv" | "m4v" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Primary,   // Filled
    Secondary, // Outlined
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct SlideButton {
    pub text: String,
    pub href: String,
    #[serde(rename = "type", default)]
    pub kind: ButtonKind,
    #[serde(default)]
    pub external: bool,
}

/// Caption and call-to-action links shown over a slide. The engine never
/// looks inside; it only hands it to the presenter.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct SlideContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub buttons: Vec<SlideButton>,
}

/// One entry of the carousel. Immutable once the deck is loaded.
#[derive(Debug, PartialEq, Clone)]
pub struct Slide {
    pub id: u32,
    pub media: PathBuf,
    pub kind: MediaKind,
    pub explicit_duration_ms: Option<u64>,
    pub content: SlideContent,
}

impl Slide {
    pub fn image(id: u32, media: impl Into<PathBuf>) -> Self {
        Self {
            id,
            media: media.into(),
            kind: MediaKind::Image,
            explicit_duration_ms: None,
            content: SlideContent::default(),
        }
    }

    pub fn video(id: u32, media: impl Into<PathBuf>) -> Self {
        Self {
            kind: MediaKind::Video,
            ..Self::image(id, media)
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.explicit_duration_ms = Some(duration_ms);
        self
    }

    pub fn with_content(mut self, content: SlideContent) -> Self {
        self.content = content;
        self
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
