use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::foundation::error::{CarouselError, CarouselResult};

/// Upper bound on images accepted by one import.
pub const MAX_IMPORT_FILES: usize = 20;

/// A rendered video available for download.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VideoEntry {
    pub filename: String,
    /// Public URL path (`/videos/<filename>`).
    pub url: String,
    pub size: u64,
    /// Creation time (RFC 3339, UTC). Falls back to the modification time on filesystems that do
    /// not record birth times.
    pub created: String,
    /// Last modification (RFC 3339, UTC).
    pub modified: String,
}

/// Filesystem side of the product: imported slide images and rendered videos.
#[derive(Clone, Debug)]
pub struct MediaLibrary {
    images_dir: PathBuf,
    output_dir: PathBuf,
    videos_dir: PathBuf,
}

impl MediaLibrary {
    pub fn new(
        images_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        videos_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            images_dir: images_dir.into(),
            output_dir: output_dir.into(),
            videos_dir: videos_dir.into(),
        }
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Copy images into the images directory, keeping their file names.
    ///
    /// Every source must be a readable image; nothing is copied if any of them is not.
    /// Returns the imported file names in input order.
    #[tracing::instrument(skip(self, sources), fields(count = sources.len()))]
    pub fn import_images<P: AsRef<Path>>(&self, sources: &[P]) -> CarouselResult<Vec<String>> {
        if sources.is_empty() {
            return Err(CarouselError::validation("no images to import"));
        }
        if sources.len() > MAX_IMPORT_FILES {
            return Err(CarouselError::validation(format!(
                "at most {MAX_IMPORT_FILES} images per import, got {}",
                sources.len()
            )));
        }

        let mut planned = Vec::with_capacity(sources.len());
        for src in sources {
            let src = src.as_ref();
            let name = src
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| {
                    CarouselError::validation(format!("'{}' has no file name", src.display()))
                })?
                .to_owned();
            let (w, h) = image::image_dimensions(src).map_err(|e| {
                CarouselError::validation(format!(
                    "'{}' is not a readable image: {e}",
                    src.display()
                ))
            })?;
            tracing::debug!(file = %name, width = w, height = h, "validated image");
            planned.push((src, name));
        }

        std::fs::create_dir_all(&self.images_dir)
            .map_err(|e| CarouselError::io(&self.images_dir, e))?;
        let mut imported = Vec::with_capacity(planned.len());
        for (src, name) in planned {
            let dest = self.images_dir.join(&name);
            std::fs::copy(src, &dest).map_err(|e| CarouselError::io(&dest, e))?;
            imported.push(name);
        }
        tracing::info!(count = imported.len(), dir = %self.images_dir.display(), "imported images");
        Ok(imported)
    }

    /// Copy new or updated `*.mp4` files from the render output directory into the public videos
    /// directory. Returns the names that were copied.
    pub fn sync_videos(&self) -> CarouselResult<Vec<String>> {
        std::fs::create_dir_all(&self.videos_dir)
            .map_err(|e| CarouselError::io(&self.videos_dir, e))?;
        if !self.output_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut copied = Vec::new();
        for name in mp4_names(&self.output_dir)? {
            let src = self.output_dir.join(&name);
            let dest = self.videos_dir.join(&name);
            let stale = match modified(&dest) {
                Ok(dest_time) => modified(&src)? > dest_time,
                Err(_) => true,
            };
            if stale {
                std::fs::copy(&src, &dest).map_err(|e| CarouselError::io(&dest, e))?;
                copied.push(name);
            }
        }
        if !copied.is_empty() {
            tracing::info!(count = copied.len(), "synced rendered videos");
        }
        Ok(copied)
    }

    /// Sync, then list public videos sorted by file name.
    #[tracing::instrument(skip(self))]
    pub fn list_videos(&self) -> CarouselResult<Vec<VideoEntry>> {
        self.sync_videos()?;

        let mut out = Vec::new();
        for filename in mp4_names(&self.videos_dir)? {
            let path = self.videos_dir.join(&filename);
            let meta = std::fs::metadata(&path).map_err(|e| CarouselError::io(&path, e))?;
            let modified = meta.modified().map_err(|e| CarouselError::io(&path, e))?;
            let created = meta.created().unwrap_or(modified);
            out.push(VideoEntry {
                url: format!("/videos/{filename}"),
                size: meta.len(),
                created: rfc3339(created),
                modified: rfc3339(modified),
                filename,
            });
        }
        Ok(out)
    }

    /// Path of a public video. Names must be bare file names.
    pub fn video_path(&self, filename: &str) -> CarouselResult<PathBuf> {
        if filename.is_empty()
            || filename.contains(['/', '\\'])
            || filename == "."
            || filename == ".."
        {
            return Err(CarouselError::validation(format!(
                "invalid video name \"{filename}\""
            )));
        }
        let path = self.videos_dir.join(filename);
        if !path.is_file() {
            return Err(CarouselError::not_found(format!("video \"{filename}\"")));
        }
        Ok(path)
    }
}

fn mp4_names(dir: &Path) -> CarouselResult<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| CarouselError::io(dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CarouselError::io(dir, e))?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if let Some(name) = entry.file_name().to_str()
            && is_file
            && name.ends_with(".mp4")
        {
            names.push(name.to_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// RFC 3339 UTC timestamp with millisecond precision, e.g. `2026-10-19T08:15:00.123Z`.
pub fn rfc3339(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn modified(path: &Path) -> CarouselResult<SystemTime> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| CarouselError::io(path, e))
}

#[cfg(test)]
#[path = "../tests/unit/library/library.rs"]
mod tests;
