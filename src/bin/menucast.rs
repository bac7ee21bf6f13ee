use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use menucast::{Compositor, FrameIndex, FrameRange, Snapshot};

#[derive(Parser, Debug)]
#[command(name = "menucast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one frame of a snapshot to visual-node JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range as JSON lines, one object per frame.
    Frames(FramesArgs),
    /// Validate a snapshot file.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive).
    #[arg(long)]
    end: u64,

    /// Evaluate frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let snapshot = Snapshot::from_path(&args.in_path)?;
    snapshot.validate()?;

    let nodes = Compositor::render_frame(&snapshot.elements, FrameIndex(args.frame));
    let json = serde_json::to_string_pretty(&nodes)?;
    write_out(args.out.as_deref(), &json)
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let snapshot = Snapshot::from_path(&args.in_path)?;
    snapshot.validate()?;

    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(args.end))?;
    let frames = if args.parallel {
        Compositor::render_range(&snapshot.elements, range)
    } else {
        (range.start.0..range.end.0)
            .map(|f| {
                let frame = FrameIndex(f);
                (frame, Compositor::render_frame(&snapshot.elements, frame))
            })
            .collect()
    };

    let mut lines = String::new();
    for (frame, nodes) in &frames {
        let record = serde_json::json!({ "frame": frame.0, "nodes": nodes });
        lines.push_str(&serde_json::to_string(&record)?);
        lines.push('\n');
    }
    write_out(args.out.as_deref(), &lines)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let snapshot = Snapshot::from_path(&args.in_path)?;
    snapshot.validate()?;
    eprintln!(
        "ok: {} ({} elements)",
        args.in_path.display(),
        snapshot.elements.len()
    );
    Ok(())
}

fn write_out(out: Option<&Path>, payload: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, payload)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{payload}"),
    }
    Ok(())
}
