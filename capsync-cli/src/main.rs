use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "capsync", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the presentation of a single frame as JSON.
    Frame(FrameArgs),
    /// Write the tagged ASS track and optional SRT/WebVTT tracks.
    Export(ExportArgs),
    /// Render every frame up to the last phrase end and print render stats.
    Scan(ScanArgs),
}

#[derive(clap::Args, Debug)]
struct CanvasArgs {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1080)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 1920)]
    height: u32,
}

impl CanvasArgs {
    fn canvas(&self) -> anyhow::Result<capsync::Canvas> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("canvas width and height must be > 0");
        }
        Ok(capsync::Canvas {
            width: self.width,
            height: self.height,
        })
    }
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input caption state JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input caption state JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output ASS path.
    #[arg(long)]
    out: PathBuf,

    /// Also write a SubRip track.
    #[arg(long)]
    srt: Option<PathBuf>,

    /// Also write a WebVTT track.
    #[arg(long)]
    vtt: Option<PathBuf>,

    /// Script title.
    #[arg(long, default_value = "capsync")]
    title: String,

    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Parser, Debug)]
struct ScanArgs {
    /// Input caption state JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    #[command(flatten)]
    canvas: CanvasArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Export(args) => cmd_export(args),
        Command::Scan(args) => cmd_scan(args),
    }
}

fn load_state(path: &Path) -> anyhow::Result<capsync::CaptionState> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read caption state '{}'", path.display()))?;
    let state = capsync::CaptionState::from_json(&json)
        .with_context(|| format!("parse caption state '{}'", path.display()))?;
    if let Err(e) = state.validate() {
        tracing::warn!(error = %e, "caption state is not well-formed, continuing");
    }
    Ok(state)
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let state = load_state(&args.in_path)?;
    let video = capsync::VideoConfig {
        fps: capsync::Fps::new(args.fps, 1)?,
        canvas: args.canvas.canvas()?,
    };
    let presentation = capsync::render_frame(&state, capsync::FrameIndex(args.frame), &video);
    println!("{}", serde_json::to_string_pretty(&presentation)?);
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let state = load_state(&args.in_path)?;
    let opts = capsync::ExportOptions {
        canvas: args.canvas.canvas()?,
        title: args.title,
    };
    write_output(&args.out, &capsync::export_ass(&state, &opts))?;
    if let Some(path) = &args.srt {
        write_output(path, &capsync::export_srt(&state))?;
    }
    if let Some(path) = &args.vtt {
        write_output(path, &capsync::export_vtt(&state))?;
    }
    Ok(())
}

fn cmd_scan(args: ScanArgs) -> anyhow::Result<()> {
    let state = load_state(&args.in_path)?;
    let fps = capsync::Fps::new(args.fps, 1)?;
    let video = capsync::VideoConfig {
        fps,
        canvas: args.canvas.canvas()?,
    };
    let last_ms = state
        .phrase_groups
        .iter()
        .map(|g| g.end_ms)
        .max()
        .unwrap_or(0);
    let range = capsync::FrameRange::new(
        capsync::FrameIndex(0),
        capsync::FrameIndex(fps.ms_to_frames(last_ms) + 1),
    )?;
    let threading = capsync::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let (_, stats) = capsync::render_frames_with_stats(&state, range, &video, &threading)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
