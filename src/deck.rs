//! Slide deck loading.
//!
//! A deck is a YAML file listing the slides in display order:
//!
//! ```yaml
//! slides:
//!   - id: 1
//!     media: carousel/wikipedia.jpg
//!     title: Wikipedia without a proxy
//!     subtitle: wikipedia
//!     description: Served through Cloudflare Workers.
//!     buttons:
//!       - { text: Visit, href: "https://example.org", type: primary, external: true }
//!   - id: 2
//!     media: carousel/trailer.mp4
//!     duration: 12000
//! ```
//!
//! `type` (image/video) may be omitted when the file extension says it.
//! Relative media paths are resolved against the deck's directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

use crate::duration::validate_explicit_duration;
use crate::error::CarouselError;
use crate::slide::{MediaKind, Slide, SlideContent};

#[derive(Debug, Deserialize)]
struct RawDeck {
    slides: Vec<RawSlide>,
}

#[derive(Debug, Deserialize)]
struct RawSlide {
    id: u32,
    media: PathBuf,
    #[serde(rename = "type", default)]
    kind: Option<MediaKind>,
    #[serde(default)]
    duration: Option<i64>,
    #[serde(flatten)]
    content: SlideContent,
}

/// Read and validate a deck file.
pub fn load_slides(path: &Path) -> Result<Vec<Slide>, CarouselError> {
    let text = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let slides = parse_slides(&text, base_dir)?;
    info!("Loaded {} slides from {}", slides.len(), path.display());
    Ok(slides)
}

/// Parse a deck from YAML text. `base_dir` anchors relative media paths.
pub fn parse_slides(yaml: &str, base_dir: &Path) -> Result<Vec<Slide>, CarouselError> {
    let raw: RawDeck = serde_yaml::from_str(yaml)?;
    if raw.slides.is_empty() {
        return Err(CarouselError::NoSlides);
    }

    let mut seen = HashSet::new();
    let mut slides = Vec::with_capacity(raw.slides.len());
    for entry in raw.slides {
        if !seen.insert(entry.id) {
            return Err(CarouselError::DuplicateSlideId(entry.id));
        }

        let kind = match entry.kind.or_else(|| MediaKind::from_path(&entry.media)) {
            Some(kind) => kind,
            None => {
                return Err(CarouselError::Config(format!(
                    "slide {}: cannot tell media type of {}",
                    entry.id,
                    entry.media.display()
                )));
            }
        };

        // A bad override is dropped, never fatal: the slide falls back to its
        // measured or default duration.
        let explicit_duration_ms = match entry.duration.map(validate_explicit_duration) {
            Some(Ok(ms)) => Some(ms),
            Some(Err(e)) => {
                warn!("Slide {}: {}, using default timing", entry.id, e);
                None
            }
            None => None,
        };

        let media = if entry.media.is_absolute() {
            entry.media
        } else {
            base_dir.join(entry.media)
        };

        slides.push(Slide {
            id: entry.id,
            media,
            kind,
            explicit_duration_ms,
            content: entry.content,
        });
    }
    Ok(slides)
}
