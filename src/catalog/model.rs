use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::scene::assets::normalize_rel_path;
use crate::theme::registry::{Theme, ThemeId};
use crate::timeline::slides::total_duration;

/// One image and its caption. Position within the show decides when it plays.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideSpec {
    /// Logical asset path, relative to the host's static root.
    pub image: String,
    /// Caption shown in the bubble under the image.
    pub caption: String,
}

/// A complete video: title, palette and ordered slides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Show {
    /// Catalog-unique numeric id.
    pub id: u32,
    /// Header title.
    pub title: String,
    /// Palette reference.
    pub theme: ThemeId,
    /// Slides in playback order.
    pub slides: Vec<SlideSpec>,
}

impl Show {
    /// Resolved palette.
    pub fn theme(&self) -> &'static Theme {
        self.theme.theme()
    }

    /// Id the external renderer knows this show's composition by.
    pub fn composition_id(&self) -> String {
        format!("{COMPOSITION_PREFIX}{}", self.id)
    }
}

const COMPOSITION_PREFIX: &str = "BatchCarousel-Video";

/// Renderer-facing description of a show's composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompositionInfo {
    /// Composition id, e.g. `BatchCarousel-Video3`.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Show rendered by this composition.
    pub show_id: u32,
    /// Total length in frames.
    pub duration_frames: u64,
    /// Frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
}

/// Static list of shows plus the backdrop images they rotate through.
///
/// Loaded once, never mutated; every lookup is read-only.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    /// Shows, looked up by [`Show::id`].
    pub shows: Vec<Show>,
    /// Backdrop image paths; a show uses `backgrounds[id % len]`.
    #[serde(default)]
    pub backgrounds: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> CarouselResult<Self> {
        let catalog: Catalog = serde_json::from_reader(r)
            .map_err(|e| CarouselError::serde(format!("parse catalog JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> CarouselResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| CarouselError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check ids are unique, shows are non-empty and every asset path is a clean relative path.
    pub fn validate(&self) -> CarouselResult<()> {
        let mut seen = BTreeSet::new();
        for show in &self.shows {
            if !seen.insert(show.id) {
                return Err(CarouselError::validation(format!(
                    "duplicate show id {}",
                    show.id
                )));
            }
            if show.title.trim().is_empty() {
                return Err(CarouselError::validation(format!(
                    "show {} has an empty title",
                    show.id
                )));
            }
            if show.slides.is_empty() {
                return Err(CarouselError::validation(format!(
                    "show {} has no slides",
                    show.id
                )));
            }
            for (i, slide) in show.slides.iter().enumerate() {
                normalize_rel_path(&slide.image).map_err(|e| {
                    CarouselError::validation(format!("show {} slide {i}: {e}", show.id))
                })?;
            }
        }
        for bg in &self.backgrounds {
            normalize_rel_path(bg)
                .map_err(|e| CarouselError::validation(format!("background '{bg}': {e}")))?;
        }
        Ok(())
    }

    /// Look up a show by id.
    pub fn get(&self, show_id: u32) -> CarouselResult<&Show> {
        self.shows
            .iter()
            .find(|s| s.id == show_id)
            .ok_or_else(|| CarouselError::not_found(format!("show {show_id}")))
    }

    /// Look up a show by its composition id (`BatchCarousel-Video<id>`).
    pub fn get_by_composition(&self, composition_id: &str) -> CarouselResult<&Show> {
        composition_id
            .strip_prefix(COMPOSITION_PREFIX)
            .and_then(|n| n.parse::<u32>().ok())
            .and_then(|id| self.shows.iter().find(|s| s.id == id))
            .ok_or_else(|| CarouselError::not_found(format!("composition \"{composition_id}\"")))
    }

    /// Backdrop for a show, if the catalog has any.
    pub fn background_for(&self, show_id: u32) -> Option<&str> {
        if self.backgrounds.is_empty() {
            return None;
        }
        let idx = show_id as usize % self.backgrounds.len();
        Some(self.backgrounds[idx].as_str())
    }

    /// Composition descriptors for every show, in catalog order.
    pub fn compositions(&self) -> Vec<CompositionInfo> {
        self.shows
            .iter()
            .map(|show| CompositionInfo {
                id: show.composition_id(),
                name: format!("Batch Carousel Video {}", show.id),
                show_id: show.id,
                duration_frames: total_duration(show),
                fps: Fps::CAROUSEL,
                canvas: Canvas::CAROUSEL,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
