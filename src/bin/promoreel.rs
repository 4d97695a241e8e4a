use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use promoreel::RenderBackend as _;

#[derive(Parser, Debug)]
#[command(name = "promoreel", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print template, canvas, duration and sanitization issues.
    Info(InputArgs),
    /// Print the draw plan of one frame as JSON.
    Plan(PlanArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the full video (MP4 via `ffmpeg`, Y4M when that fails).
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Template parameter JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Register a font face, `FAMILY=PATH`. Repeatable.
    #[arg(long = "font", value_parser = parse_font_arg)]
    fonts: Vec<(String, PathBuf)>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based).
    #[arg(long, conflicts_with = "secs")]
    frame: Option<u64>,

    /// Timeline position in seconds.
    #[arg(long)]
    secs: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output directory; the file is named `<template>-<unix-millis>.mp4`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Rasterize every frame even when it matches the previous one.
    #[arg(long, default_value_t = false)]
    no_static_frame_elision: bool,
}

fn parse_font_arg(s: &str) -> Result<(String, PathBuf), String> {
    let (family, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FAMILY=PATH, got '{s}'"))?;
    if family.trim().is_empty() || path.trim().is_empty() {
        return Err(format!("expected FAMILY=PATH, got '{s}'"));
    }
    Ok((family.trim().to_owned(), PathBuf::from(path.trim())))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

struct Loaded {
    params: promoreel::TemplateParams,
    issues: Vec<promoreel::FieldIssue>,
    assets: promoreel::AssetStore,
}

fn load(args: &InputArgs) -> anyhow::Result<Loaded> {
    let json = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("open parameters '{}'", args.in_path.display()))?;
    let params = promoreel::TemplateParams::from_json(&json)
        .with_context(|| format!("parse parameters '{}'", args.in_path.display()))?;
    let (params, issues) = params.sanitized();

    let mut fonts = promoreel::FontBook::new();
    for (family, path) in &args.fonts {
        fonts
            .load_file(family, path)
            .with_context(|| format!("load font '{}'", path.display()))?;
    }

    let assets_root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let assets = promoreel::AssetStore::prepare(&params, assets_root, fonts)?;
    Ok(Loaded {
        params,
        issues,
        assets,
    })
}

fn cmd_info(args: InputArgs) -> anyhow::Result<()> {
    let loaded = load(&args)?;
    let template = loaded.params.template();
    let canvas = template.canvas();
    println!("template: {}", loaded.params.kind_name());
    println!("canvas: {}x{}", canvas.width, canvas.height);
    println!(
        "duration: {:.3}s ({} frames @ {} fps)",
        template.duration_secs(),
        template.duration_frames(),
        template.fps().as_f64()
    );
    for issue in &loaded.issues {
        println!("issue: {issue}");
    }
    for notice in loaded.assets.notices() {
        println!("asset: {}: {}", notice.reference, notice.message);
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let loaded = load(&args.input)?;
    let plan = match args.secs {
        Some(secs) => promoreel::render_frame_at(&loaded.params, &loaded.assets, secs),
        None => promoreel::render_frame(
            &loaded.params,
            &loaded.assets,
            promoreel::FrameIndex(args.frame.unwrap_or(0)),
        ),
    };
    println!("{}", plan.to_json_pretty()?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let loaded = load(&args.input)?;
    let plan = promoreel::render_frame(
        &loaded.params,
        &loaded.assets,
        promoreel::FrameIndex(args.frame),
    );
    let mut backend = promoreel::create_backend(promoreel::BackendKind::Cpu);
    let frame = backend.render_plan(&plan, &loaded.assets)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let loaded = load(&args.input)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let opts = promoreel::ExportOpts {
        static_frame_elision: !args.no_static_frame_elision,
        ..promoreel::ExportOpts::default()
    };
    let outcome =
        promoreel::session::export_to_dir(&loaded.params, &loaded.assets, &args.out_dir, &opts)?;

    let stats = outcome.stats();
    if let promoreel::ExportOutcome::Fallback { reason, .. } = &outcome {
        eprintln!("mp4 encoding failed ({reason}); wrote uncompressed y4m instead");
    }
    if let Some(path) = outcome.output_path() {
        eprintln!(
            "wrote {} ({} frames, {} rasterized)",
            path.display(),
            stats.frames_total,
            stats.frames_rendered
        );
    }
    Ok(())
}
