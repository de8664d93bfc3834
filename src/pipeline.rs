use rayon::prelude::*;

use crate::{
    catalog::model::{Catalog, Show},
    fingerprint::{SceneFingerprint, fingerprint_scene},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{CarouselError, CarouselResult},
    scene::{assets::AssetResolver, composer::Composer, model::SceneDescription},
    timeline::slides::total_duration,
};

/// How [`compose_range`] splits work.
#[derive(Clone, Debug)]
pub struct ComposeThreading {
    pub parallel: bool,
    pub chunk_size: usize,
    pub threads: Option<usize>,
}

impl Default for ComposeThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ComposeStats {
    pub frames_total: u64,
    pub frames_slide: u64,
    pub frames_end_of_show: u64,
    pub chunks: u64,
}

/// Compose every frame of `range` (inclusive start, exclusive end) for one show.
///
/// Output is in frame order and identical whether or not `threading.parallel` is set.
#[tracing::instrument(skip(catalog, assets, threading))]
pub fn compose_range(
    catalog: &Catalog,
    show_id: u32,
    range: FrameRange,
    assets: &dyn AssetResolver,
    threading: &ComposeThreading,
) -> CarouselResult<(Vec<SceneDescription>, ComposeStats)> {
    if range.is_empty() {
        return Err(CarouselError::validation("compose range must be non-empty"));
    }
    let show = catalog.get(show_id)?;
    let background = catalog.background_for(show_id);

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let mut stats = ComposeStats::default();

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| CarouselError::evaluation(format!("invalid chunk range: {e}")))?;
        let scenes = match &pool {
            Some(pool) => compose_chunk_parallel(show, background, chunk, assets, pool)?,
            None => compose_chunk_sequential(show, background, chunk, assets)?,
        };
        for scene in &scenes {
            stats.frames_total += 1;
            if scene.is_end_of_show() {
                stats.frames_end_of_show += 1;
            } else {
                stats.frames_slide += 1;
            }
        }
        out.extend(scenes);
        stats.chunks += 1;
        chunk_start = chunk_end;
    }

    tracing::debug!(
        frames = stats.frames_total,
        chunks = stats.chunks,
        parallel = threading.parallel,
        "composed frame range"
    );
    Ok((out, stats))
}

/// Compose the full duration of a show.
pub fn compose_show(
    catalog: &Catalog,
    show_id: u32,
    assets: &dyn AssetResolver,
    threading: &ComposeThreading,
) -> CarouselResult<(Vec<SceneDescription>, ComposeStats)> {
    let total = total_duration(catalog.get(show_id)?);
    let range = FrameRange::new(FrameIndex(0), FrameIndex(total))?;
    compose_range(catalog, show_id, range, assets, threading)
}

/// Fingerprints of a range of scenes, in order.
pub fn fingerprint_scenes(scenes: &[SceneDescription]) -> Vec<SceneFingerprint> {
    scenes.iter().map(fingerprint_scene).collect()
}

fn compose_chunk_sequential(
    show: &Show,
    background: Option<&str>,
    range: FrameRange,
    assets: &dyn AssetResolver,
) -> CarouselResult<Vec<SceneDescription>> {
    range
        .frames()
        .map(|f| Composer::compose_show(show, background, f, assets))
        .collect()
}

fn compose_chunk_parallel(
    show: &Show,
    background: Option<&str>,
    range: FrameRange,
    assets: &dyn AssetResolver,
    pool: &rayon::ThreadPool,
) -> CarouselResult<Vec<SceneDescription>> {
    let frames: Vec<FrameIndex> = range.frames().collect();
    pool.install(|| {
        frames
            .par_iter()
            .map(|f| Composer::compose_show(show, background, *f, assets))
            .collect::<CarouselResult<Vec<_>>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> CarouselResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CarouselError::validation(
            "compose threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CarouselError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;
