use std::path::PathBuf;

use url::Url;

use crate::foundation::error::{CarouselError, CarouselResult};

/// Host capability that turns a logical asset path into something the renderer can load.
///
/// Scene composition never touches the filesystem; it only asks the resolver for a reference.
pub trait AssetResolver: Send + Sync {
    /// Resolve a catalog-relative path such as `batch-images/a.png`.
    fn resolve(&self, logical_path: &str) -> CarouselResult<String>;
}

/// Resolves assets to file paths below a static root directory.
#[derive(Clone, Debug)]
pub struct StaticDirResolver {
    root: PathBuf,
}

impl StaticDirResolver {
    /// Resolver rooted at `root` (typically the `public` directory).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetResolver for StaticDirResolver {
    fn resolve(&self, logical_path: &str) -> CarouselResult<String> {
        let rel = normalize_rel_path(logical_path)?;
        Ok(self.root.join(rel).to_string_lossy().into_owned())
    }
}

/// Resolves assets to URLs below a base URL. Path segments are appended to the base path (query
/// and fragment stay in place) and percent-encoded by `url`.
#[derive(Clone, Debug)]
pub struct UrlPrefixResolver {
    base: Url,
}

impl UrlPrefixResolver {
    /// Resolver below `base`, which must be an absolute URL that can carry a path.
    pub fn new(base: &str) -> CarouselResult<Self> {
        let url = Url::parse(base).map_err(|e| {
            CarouselError::validation(format!("invalid asset base URL \"{base}\": {e}"))
        })?;
        if url.cannot_be_a_base() {
            return Err(CarouselError::validation(format!(
                "asset base URL \"{base}\" cannot hold a path"
            )));
        }
        Ok(Self { base: url })
    }
}

impl AssetResolver for UrlPrefixResolver {
    fn resolve(&self, logical_path: &str) -> CarouselResult<String> {
        let rel = normalize_rel_path(logical_path)?;
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| CarouselError::validation("asset base URL cannot hold a path"))?
            .pop_if_empty()
            .extend(rel.split('/'));
        Ok(url.into())
    }
}

/// Normalize a relative asset path to `/`-separated form without `.` segments.
///
/// Rejects absolute paths, `..` and paths without a file name.
pub fn normalize_rel_path(source: &str) -> CarouselResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CarouselError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(CarouselError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CarouselError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CarouselError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/assets.rs"]
mod tests;
