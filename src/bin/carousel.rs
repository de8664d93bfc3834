use std::io::Write as _;
use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use carousel::{
    AssetResolver, CarouselConfig, Composer, FrameIndex, FrameRange, UrlPrefixResolver,
};

#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Cli {
    /// Config JSON; defaults relative to the working directory when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List compositions in the catalog.
    Compositions,
    /// Print the scene description of one frame as JSON.
    Scene(SceneArgs),
    /// Compose a frame range and write scenes or fingerprints.
    Dump(DumpArgs),
    /// Copy slide images into the images directory.
    Import(ImportArgs),
    /// Group the images directory into shows and print the catalog JSON.
    Batch(BatchArgs),
    /// Start rendering a composition with the external renderer.
    Render(RenderArgs),
    /// Start the batch processing script.
    Process,
    /// Report whether a render output exists yet.
    Status(StatusArgs),
    /// Sync and list rendered videos.
    Videos(VideosArgs),
    /// Print a liveness record.
    Health,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Show id.
    #[arg(long)]
    show: u32,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Resolve assets to URLs under this prefix instead of file paths.
    #[arg(long)]
    url_prefix: Option<String>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Show id.
    #[arg(long)]
    show: u32,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive); the show's duration when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Compose frames on a thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per chunk.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Write one `frame fingerprint` line per frame instead of full scenes.
    #[arg(long, default_value_t = false)]
    fingerprints: bool,

    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Resolve assets to URLs under this prefix instead of file paths.
    #[arg(long)]
    url_prefix: Option<String>,
}

#[derive(Parser, Debug)]
struct ImportArgs {
    /// Image files (1 to 20).
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Write the catalog here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Composition id, e.g. `BatchCarousel-Video1`.
    #[arg(long)]
    composition: String,

    /// Codec passed to the renderer; the configured default when omitted.
    #[arg(long)]
    codec: Option<String>,
}

#[derive(Parser, Debug)]
struct StatusArgs {
    /// Output path reported by `render`.
    output: PathBuf,
}

#[derive(Parser, Debug)]
struct VideosArgs {
    /// Print the path of one video instead of listing all.
    #[arg(long)]
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => CarouselConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => CarouselConfig::default(),
    };

    match cli.cmd {
        Command::Compositions => cmd_compositions(&config),
        Command::Scene(args) => cmd_scene(&config, args),
        Command::Dump(args) => cmd_dump(&config, args),
        Command::Import(args) => cmd_import(&config, args),
        Command::Batch(args) => cmd_batch(&config, args),
        Command::Render(args) => cmd_render(&config, args),
        Command::Process => cmd_process(&config),
        Command::Status(args) => cmd_status(args),
        Command::Videos(args) => cmd_videos(&config, args),
        Command::Health => cmd_health(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON to stdout")?;
    writeln!(out)?;
    Ok(())
}

fn resolver(
    config: &CarouselConfig,
    url_prefix: Option<String>,
) -> anyhow::Result<Box<dyn AssetResolver>> {
    let assets: Box<dyn AssetResolver> = match url_prefix {
        Some(base) => Box::new(
            UrlPrefixResolver::new(&base).with_context(|| format!("asset URL prefix '{base}'"))?,
        ),
        None => Box::new(config.asset_resolver()),
    };
    Ok(assets)
}

fn cmd_compositions(config: &CarouselConfig) -> anyhow::Result<()> {
    let catalog = config.load_catalog().context("load catalog")?;
    print_json(&catalog.compositions())
}

fn cmd_scene(config: &CarouselConfig, args: SceneArgs) -> anyhow::Result<()> {
    let catalog = config.load_catalog().context("load catalog")?;
    let assets = resolver(config, args.url_prefix)?;
    let scene = Composer::compose(&catalog, args.show, FrameIndex(args.frame), assets.as_ref())
        .with_context(|| format!("compose show {} frame {}", args.show, args.frame))?;
    print_json(&scene)
}

fn cmd_dump(config: &CarouselConfig, args: DumpArgs) -> anyhow::Result<()> {
    let catalog = config.load_catalog().context("load catalog")?;
    let show = catalog.get(args.show)?;
    let end = args.end.unwrap_or_else(|| carousel::total_duration(show));
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let mut threading = config.threading(args.parallel);
    if args.threads.is_some() {
        threading.threads = args.threads;
    }
    if let Some(chunk_size) = args.chunk_size {
        threading.chunk_size = chunk_size;
    }

    let assets = resolver(config, args.url_prefix)?;
    let (scenes, stats) =
        carousel::compose_range(&catalog, args.show, range, assets.as_ref(), &threading)?;

    let mut out: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = std::fs::File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            Box::new(std::io::BufWriter::new(f))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    if args.fingerprints {
        for scene in &scenes {
            writeln!(out, "{} {}", scene.frame.0, carousel::fingerprint_scene(scene))?;
        }
    } else {
        serde_json::to_writer_pretty(&mut out, &scenes).context("write scenes")?;
        writeln!(out)?;
    }
    out.flush()?;

    eprintln!(
        "composed {} frames ({} slide, {} end of show)",
        stats.frames_total, stats.frames_slide, stats.frames_end_of_show
    );
    Ok(())
}

fn cmd_import(config: &CarouselConfig, args: ImportArgs) -> anyhow::Result<()> {
    let library = config.media_library();
    let files = library.import_images(&args.files)?;
    print_json(&serde_json::json!({
        "message": format!("imported {} images", files.len()),
        "files": files,
    }))
}

fn cmd_batch(config: &CarouselConfig, args: BatchArgs) -> anyhow::Result<()> {
    let catalog = config
        .batch_catalog()
        .with_context(|| format!("group images in '{}'", config.images_dir.display()))?;
    let Some(path) = args.out else {
        return print_json(&catalog);
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&catalog).context("serialize catalog")?;
    std::fs::write(&path, json).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {} shows to {}", catalog.shows.len(), path.display());
    Ok(())
}

fn cmd_render(config: &CarouselConfig, args: RenderArgs) -> anyhow::Result<()> {
    let catalog = config.load_catalog().context("load catalog")?;
    let codec = args.codec.unwrap_or_else(|| config.default_codec.clone());
    let job = config
        .job_runner()
        .submit(&catalog, &args.composition, Some(&codec))
        .with_context(|| format!("start render of '{}'", args.composition))?;
    print_json(&job)
}

fn cmd_process(config: &CarouselConfig) -> anyhow::Result<()> {
    config
        .job_runner()
        .run_process_script(&config.process_script, &config.images_dir)
        .context("start processing")?;
    print_json(&serde_json::json!({ "message": "processing started" }))
}

fn cmd_status(args: StatusArgs) -> anyhow::Result<()> {
    let status = carousel::poll_path(&args.output)?;
    print_json(&status)
}

fn cmd_videos(config: &CarouselConfig, args: VideosArgs) -> anyhow::Result<()> {
    let library = config.media_library();
    if let Some(name) = args.name {
        let path = library.video_path(&name)?;
        println!("{}", path.display());
        return Ok(());
    }
    let videos = library.list_videos()?;
    print_json(&serde_json::json!({ "count": videos.len(), "videos": videos }))
}

fn cmd_health() -> anyhow::Result<()> {
    let timestamp = carousel::rfc3339(SystemTime::now());
    print_json(&serde_json::json!({ "status": "ok", "timestamp": timestamp }))
}
