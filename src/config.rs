use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::catalog::model::Catalog;
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::jobs::{DEFAULT_CODEC, JobRunner, RendererCommand};
use crate::library::MediaLibrary;
use crate::pipeline::ComposeThreading;
use crate::scene::assets::StaticDirResolver;

/// Deployment settings. Every field has a default relative to the working directory, so an empty
/// JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Root that catalog asset paths are resolved against.
    pub public_dir: PathBuf,
    /// Where imported slide images land.
    pub images_dir: PathBuf,
    /// Where the renderer writes videos.
    pub output_dir: PathBuf,
    /// Public copies of rendered videos.
    pub videos_dir: PathBuf,
    /// Catalog JSON; the built-in catalog when unset.
    pub catalog: Option<PathBuf>,
    /// Captions for `batch`; used only when the file exists.
    pub prompts_file: PathBuf,
    pub renderer: RendererCommand,
    /// Batch script run by `process`.
    pub process_script: PathBuf,
    pub default_codec: String,
    /// Worker threads for parallel composition; rayon's default when unset.
    pub threads: Option<usize>,
    pub chunk_size: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            images_dir: Path::new("public").join("batch-images"),
            output_dir: Path::new("output").join("batch-videos"),
            videos_dir: Path::new("public").join("videos"),
            catalog: None,
            prompts_file: Path::new("public").join("batch-prompts.json"),
            renderer: RendererCommand::default(),
            process_script: Path::new("deploy").join("auto-render-videos.command"),
            default_codec: DEFAULT_CODEC.to_owned(),
            threads: None,
            chunk_size: ComposeThreading::default().chunk_size,
        }
    }
}

impl CarouselConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> CarouselResult<Self> {
        let config: Self = serde_json::from_reader(r)
            .map_err(|e| CarouselError::serde(format!("parse config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CarouselResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| CarouselError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if self.renderer.program.trim().is_empty() {
            return Err(CarouselError::validation("renderer.program must be non-empty"));
        }
        if self.default_codec.trim().is_empty() {
            return Err(CarouselError::validation("default_codec must be non-empty"));
        }
        if self.threads == Some(0) {
            return Err(CarouselError::validation("threads must be >= 1 when set"));
        }
        Ok(())
    }

    /// The configured catalog file, or the built-in shows.
    pub fn load_catalog(&self) -> CarouselResult<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_path(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Shows generated from the images folder, with slide paths relative to `public_dir`.
    pub fn batch_catalog(&self) -> CarouselResult<Catalog> {
        let prefix = self
            .images_dir
            .strip_prefix(&self.public_dir)
            .ok()
            .or_else(|| self.images_dir.file_name().map(Path::new))
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default();
        let prompts = self.prompts_file.is_file().then_some(self.prompts_file.as_path());
        Catalog::from_images_dir(&self.images_dir, &prefix, prompts)
    }

    pub fn threading(&self, parallel: bool) -> ComposeThreading {
        ComposeThreading {
            parallel,
            chunk_size: self.chunk_size,
            threads: self.threads,
        }
    }

    pub fn asset_resolver(&self) -> StaticDirResolver {
        StaticDirResolver::new(&self.public_dir)
    }

    pub fn media_library(&self) -> MediaLibrary {
        MediaLibrary::new(&self.images_dir, &self.output_dir, &self.videos_dir)
    }

    /// Job runner that launches processes from the current working directory.
    pub fn job_runner(&self) -> JobRunner {
        JobRunner::new(self.renderer.clone(), &self.output_dir, ".")
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
