use std::io::Read as _;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use chrono::Utc;

use crate::catalog::model::Catalog;
use crate::foundation::error::{CarouselError, CarouselResult};

/// Codec used when a render request does not name one.
pub const DEFAULT_CODEC: &str = "h264";

/// External renderer invocation. `{composition}`, `{output}` and `{codec}` in `args` are
/// substituted per job.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RendererCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for RendererCommand {
    fn default() -> Self {
        Self {
            program: "npx".to_owned(),
            args: [
                "remotion",
                "render",
                "{composition}",
                "{output}",
                "--codec={codec}",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

impl RendererCommand {
    /// Arguments with placeholders filled in. Unknown `{...}` sequences are left alone.
    pub fn expand_args(&self, composition: &str, output: &Path, codec: &str) -> Vec<String> {
        let output = output.to_string_lossy();
        self.args
            .iter()
            .map(|a| {
                a.replace("{composition}", composition)
                    .replace("{output}", &output)
                    .replace("{codec}", codec)
            })
            .collect()
    }
}

/// A render that has been handed to the external renderer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RenderJob {
    pub composition: String,
    pub codec: String,
    pub output_path: PathBuf,
}

/// What [`JobRunner::poll`] observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JobStatus {
    /// The artifact does not exist yet.
    Pending,
    /// The artifact exists with `size` bytes.
    Ready { size: u64 },
}

/// Launches render and batch-processing jobs as detached child processes.
///
/// Jobs are fire-and-forget: a watcher thread waits for each child and logs its exit status.
#[derive(Clone, Debug)]
pub struct JobRunner {
    renderer: RendererCommand,
    output_dir: PathBuf,
    working_dir: PathBuf,
}

impl JobRunner {
    pub fn new(
        renderer: RendererCommand,
        output_dir: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            renderer,
            output_dir: output_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Where a render of `composition` started at `unix_millis` writes its video.
    pub fn output_path_for(&self, composition: &str, unix_millis: i64) -> PathBuf {
        self.output_dir.join(format!("{composition}-{unix_millis}.mp4"))
    }

    /// Start rendering `composition`. Returns as soon as the renderer has been spawned.
    ///
    /// The composition must exist in `catalog`; the renderer and the output name always get the
    /// show's canonical id (`BatchCarousel-Video01` runs as `BatchCarousel-Video1`). `codec`
    /// defaults to [`DEFAULT_CODEC`].
    #[tracing::instrument(skip(self, catalog))]
    pub fn submit(
        &self,
        catalog: &Catalog,
        composition: &str,
        codec: Option<&str>,
    ) -> CarouselResult<RenderJob> {
        if composition.trim().is_empty() {
            return Err(CarouselError::validation("composition id required"));
        }
        let composition = catalog.get_by_composition(composition)?.composition_id();
        let codec = codec.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_CODEC);
        if !codec
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CarouselError::validation(format!("invalid codec \"{codec}\"")));
        }

        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| CarouselError::io(&self.output_dir, e))?;
        let output_path = self.output_path_for(&composition, Utc::now().timestamp_millis());

        let mut cmd = Command::new(&self.renderer.program);
        cmd.args(self.renderer.expand_args(&composition, &output_path, codec))
            .current_dir(&self.working_dir);
        let child = spawn_detached(cmd, &self.renderer.program)?;
        tracing::info!(pid = child.id(), output = %output_path.display(), "render started");
        watch(child, format!("render {composition}"));

        Ok(RenderJob {
            composition,
            codec: codec.to_owned(),
            output_path,
        })
    }

    /// Start the batch processing script. `images_dir` must already exist.
    #[tracing::instrument(skip(self))]
    pub fn run_process_script(&self, script: &Path, images_dir: &Path) -> CarouselResult<()> {
        if !images_dir.is_dir() {
            return Err(CarouselError::validation("no images found, import images first"));
        }
        let script = if script.is_absolute() {
            script.to_path_buf()
        } else {
            self.working_dir.join(script)
        };
        if !script.is_file() {
            return Err(CarouselError::not_found(format!(
                "process script '{}'",
                script.display()
            )));
        }
        let script = std::fs::canonicalize(&script).map_err(|e| CarouselError::io(&script, e))?;

        make_executable(&script)?;
        let mut cmd = Command::new(&script);
        cmd.current_dir(&self.working_dir);
        let child = spawn_detached(cmd, &script.to_string_lossy())?;
        tracing::info!(pid = child.id(), script = %script.display(), "processing started");
        watch(child, "process script".to_owned());
        Ok(())
    }

    /// Check whether a job's artifact has appeared.
    pub fn poll(job: &RenderJob) -> CarouselResult<JobStatus> {
        poll_path(&job.output_path)
    }
}

/// [`JobRunner::poll`] for a bare output path.
pub fn poll_path(path: &Path) -> CarouselResult<JobStatus> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(JobStatus::Ready { size: meta.len() }),
        Ok(_) => Err(CarouselError::validation(format!(
            "'{}' is not a file",
            path.display()
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(JobStatus::Pending),
        Err(e) => Err(CarouselError::io(path, e)),
    }
}

fn spawn_detached(mut cmd: Command, program: &str) -> CarouselResult<Child> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    cmd.spawn().map_err(|e| {
        CarouselError::evaluation(format!(
            "failed to spawn '{program}' (is it installed and on PATH?): {e}"
        ))
    })
}

fn watch(mut child: Child, label: String) {
    let stderr = child.stderr.take();
    std::thread::spawn(move || {
        let mut stderr_bytes = Vec::new();
        if let Some(mut stderr) = stderr {
            let _ = stderr.read_to_end(&mut stderr_bytes);
        }
        match child.wait() {
            Ok(status) if status.success() => tracing::info!(job = %label, "job finished"),
            Ok(status) => {
                let stderr = String::from_utf8_lossy(&stderr_bytes);
                tracing::warn!(job = %label, %status, stderr = stderr.trim(), "job failed");
            }
            Err(e) => tracing::warn!(job = %label, error = %e, "failed to wait for job"),
        }
    });
}

#[cfg(unix)]
fn make_executable(path: &Path) -> CarouselResult<()> {
    use std::os::unix::fs::PermissionsExt as _;

    let meta = std::fs::metadata(path).map_err(|e| CarouselError::io(path, e))?;
    let mut perms = meta.permissions();
    if perms.mode() & 0o111 != 0o111 {
        perms.set_mode(perms.mode() | 0o111);
        std::fs::set_permissions(path, perms).map_err(|e| CarouselError::io(path, e))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> CarouselResult<()> {
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/jobs/jobs.rs"]
mod tests;
