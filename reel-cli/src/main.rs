use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "reel", version)]
struct Cli {
    /// Log pipeline activity to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one frame and print its visual tree as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range and write one JSON line per frame.
    Render(RenderArgs),
    /// Print the tree fingerprint and the SHA-256 of the JSON-lines stream for a range.
    Digest(DigestArgs),
    /// Print a spring's settle time and progress curve.
    Spring(SpringArgs),
    /// List the built-in scenes.
    Scenes,
    /// Print the stock glass trailer definition.
    Trailer,
}

#[derive(Args, Debug)]
struct Input {
    /// Timeline definition JSON; the stock glass trailer when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); the timeline's duration when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate chunks on a rayon pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Count frames identical to their predecessor.
    #[arg(long, default_value_t = false)]
    detect_static: bool,
}

impl RangeArgs {
    fn threading(&self) -> reel::EvalThreading {
        reel::EvalThreading {
            parallel: self.parallel,
            chunk_size: self.chunk_size,
            threads: self.threads,
            detect_static_frames: self.detect_static,
        }
    }

    fn range(&self, timeline: &reel::Timeline) -> anyhow::Result<reel::FrameRange> {
        let end = self.end.unwrap_or(timeline.duration);
        Ok(reel::FrameRange::new(
            reel::FrameIndex(self.start),
            reel::FrameIndex(end),
        )?)
    }
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: Input,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: Input,

    #[command(flatten)]
    range: RangeArgs,

    /// Output JSON-lines path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DigestArgs {
    #[command(flatten)]
    input: Input,

    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Parser, Debug)]
struct SpringArgs {
    /// Named preset (gentle, snappy, bouncy, heavy, smooth, crisp).
    #[arg(long, conflicts_with_all = ["damping", "stiffness", "mass"])]
    preset: Option<String>,

    /// Damping coefficient.
    #[arg(long, default_value_t = 10.0)]
    damping: f64,

    #[arg(long, default_value_t = 100.0)]
    stiffness: f64,

    #[arg(long, default_value_t = 1.0)]
    mass: f64,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Sample every Nth frame in the printed curve.
    #[arg(long, default_value_t = 2)]
    step: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Digest(args) => cmd_digest(args),
        Command::Spring(args) => cmd_spring(args),
        Command::Scenes => cmd_scenes(),
        Command::Trailer => cmd_trailer(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_timeline(input: &Input) -> anyhow::Result<reel::Timeline> {
    let def = match &input.in_path {
        Some(path) => reel::TimelineDef::from_path(path)?,
        None => reel_std::glass_trailer_def(),
    };
    let timeline = def
        .build(&reel_std::registry())
        .with_context(|| match &input.in_path {
            Some(path) => format!("build timeline '{}'", path.display()),
            None => "build stock trailer".to_owned(),
        })?;
    tracing::info!(
        sequences = timeline.sequences().len(),
        duration = timeline.duration,
        "timeline loaded"
    );
    Ok(timeline)
}

fn open_output(out: Option<&Path>) -> anyhow::Result<Box<dyn Write + Send>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Ok(Box::new(BufWriter::new(f)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.input)?;
    let tree = reel::eval_frame(&timeline, reel::FrameIndex(args.frame))?;

    let mut out = open_output(args.out.as_deref())?;
    serde_json::to_writer_pretty(&mut out, &tree).context("serialize frame tree")?;
    writeln!(out).context("write frame tree")?;
    out.flush().context("flush frame tree")?;

    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.input)?;
    let range = args.range.range(&timeline)?;

    let mut sink = reel::JsonLinesSink::new(open_output(args.out.as_deref())?);
    let stats = reel::eval_range_into(&timeline, range, &args.range.threading(), &mut sink)?;

    eprintln!(
        "{} frames in {} chunks ({} static)",
        stats.frames_total, stats.chunks, stats.frames_static
    );
    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_digest(args: DigestArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.input)?;
    let range = args.range.range(&timeline)?;
    let threading = args.range.threading();

    let (trees, _) = reel::eval_frames(&timeline, range, &threading)?;
    let fingerprint = reel::fingerprint_trees(&trees);

    let mut sink = reel::JsonLinesSink::new(Vec::new());
    for (i, tree) in (range.start.0..).zip(&trees) {
        reel::FrameSink::push_frame(&mut sink, reel::FrameIndex(i), tree)?;
    }
    let bytes = sink.into_inner();

    println!("frames:      {}", trees.len());
    println!("fingerprint: {fingerprint}");
    println!("sha256:      {}", sha256_hex(&bytes));
    Ok(())
}

fn cmd_spring(args: SpringArgs) -> anyhow::Result<()> {
    let cfg = match &args.preset {
        Some(name) => {
            let spec: reel_std::SpringSpec =
                serde_json::from_value(serde_json::Value::String(name.clone()))
                    .with_context(|| format!("unknown spring preset '{name}'"))?;
            spec.config()
        }
        None => reel::SpringConfig::from_damping(args.damping, args.stiffness, args.mass),
    };
    let fps = reel::Fps::new(args.fps, 1)?;
    let settle = reel::measure_spring(fps, &cfg, reel::DEFAULT_SETTLE_THRESHOLD)?;

    println!(
        "damping ratio {:.3}, settles after {settle} frames ({:.2}s)",
        cfg.damping_ratio,
        fps.frames_to_secs(settle)
    );
    let step = args.step.max(1);
    let mut f = 0;
    while f <= settle {
        let p = reel::spring_progress(f as f64, fps, &cfg)?;
        println!("{f:>5}  {p:.4}");
        f += step;
    }
    Ok(())
}

fn cmd_scenes() -> anyhow::Result<()> {
    for name in reel_std::registry().names() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_trailer() -> anyhow::Result<()> {
    println!("{}", reel_std::glass_trailer_def().to_json_pretty()?);
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
