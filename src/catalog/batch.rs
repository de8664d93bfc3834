use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::catalog::builtin::BACKGROUNDS;
use crate::catalog::model::{Catalog, Show, SlideSpec};
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::theme::registry::ThemeId;

/// Slides per generated show.
pub const IMAGES_PER_SHOW: usize = 4;

/// Longest caption kept from a prompts file, in characters.
pub const PROMPT_MAX_CHARS: usize = 200;

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

#[derive(serde::Deserialize)]
struct PromptFile {
    images: Vec<PromptEntry>,
}

#[derive(serde::Deserialize)]
struct PromptEntry {
    filename: String,
    #[serde(default)]
    prompt: String,
}

/// Captions keyed by image file name, as written to `batch-prompts.json`
/// (`{"images": [{"filename", "publicPath", "prompt"}]}`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptBook {
    prompts: BTreeMap<String, String>,
}

impl PromptBook {
    pub fn from_reader<R: std::io::Read>(r: R) -> CarouselResult<Self> {
        let file: PromptFile = serde_json::from_reader(r)
            .map_err(|e| CarouselError::serde(format!("parse prompts JSON: {e}")))?;
        let prompts = file
            .images
            .into_iter()
            .filter_map(|entry| {
                let prompt = clean_prompt(&entry.prompt);
                (!prompt.is_empty()).then_some((entry.filename, prompt))
            })
            .collect();
        Ok(Self { prompts })
    }

    pub fn from_path(path: impl AsRef<Path>) -> CarouselResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| CarouselError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// The recorded prompt for `filename`, or `AI Concept #<stem>`.
    pub fn caption_for(&self, filename: &str) -> String {
        if let Some(prompt) = self.prompts.get(filename) {
            return prompt.clone();
        }
        let stem = Path::new(filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(filename);
        format!("AI Concept #{stem}")
    }
}

fn clean_prompt(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(PROMPT_MAX_CHARS).collect()
}

impl Catalog {
    /// Build shows from every image in `dir`, [`IMAGES_PER_SHOW`] per show in file-name order.
    ///
    /// Slide images are `<logical_prefix>/<file name>`. Themes cycle through [`ThemeId::ALL`]
    /// and the built-in backdrops are kept. Captions come from `prompts` when given.
    #[tracing::instrument(skip(prompts))]
    pub fn from_images_dir(
        dir: &Path,
        logical_prefix: &str,
        prompts: Option<&Path>,
    ) -> CarouselResult<Self> {
        let book = match prompts {
            Some(path) => PromptBook::from_path(path)?,
            None => PromptBook::default(),
        };

        let entries = std::fs::read_dir(dir).map_err(|e| CarouselError::io(dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CarouselError::io(dir, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if let Some(name) = entry.file_name().to_str()
                && is_file
                && is_image_name(name)
            {
                names.push(name.to_owned());
            }
        }
        names.sort();

        let catalog = Self::from_image_names(&names, logical_prefix, &book)?;
        tracing::info!(
            images = names.len(),
            shows = catalog.shows.len(),
            "grouped images into shows"
        );
        Ok(catalog)
    }

    /// [`Catalog::from_images_dir`] over an already ordered list of file names.
    pub fn from_image_names(
        names: &[String],
        logical_prefix: &str,
        prompts: &PromptBook,
    ) -> CarouselResult<Self> {
        if names.is_empty() {
            return Err(CarouselError::validation("no images to group into shows"));
        }
        let prefix = logical_prefix.trim_matches('/');

        let shows = names
            .chunks(IMAGES_PER_SHOW)
            .enumerate()
            .map(|(i, group)| {
                let id = i as u32 + 1;
                Show {
                    id,
                    title: format!("COOL PROMPT IDEAS - PART {id}"),
                    theme: ThemeId::ALL[i % ThemeId::ALL.len()],
                    slides: group
                        .iter()
                        .map(|name| SlideSpec {
                            image: if prefix.is_empty() {
                                name.clone()
                            } else {
                                format!("{prefix}/{name}")
                            },
                            caption: prompts.caption_for(name),
                        })
                        .collect(),
                }
            })
            .collect();

        let catalog = Self {
            shows,
            backgrounds: BACKGROUNDS.iter().map(|s| (*s).to_owned()).collect(),
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

fn is_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/batch.rs"]
mod tests;
