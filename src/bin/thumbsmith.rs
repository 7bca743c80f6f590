use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use thumbsmith::{
    CpuRenderer, DesignSpec, DirectoryDelivery, ExportOutcome, QUICK_IDEAS, Rasterizer, Session,
    ThumbnailSettings,
};

#[derive(Parser, Debug)]
#[command(name = "thumbsmith", version)]
struct Cli {
    /// Log more (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the design generated from a description as JSON.
    Design(DesignArgs),
    /// Generate a design and export it as a PNG.
    Export(ExportArgs),
    /// Render a saved design JSON to a PNG.
    Render(RenderArgs),
    /// List the preset ideas.
    Ideas,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct BriefArgs {
    /// Free-text video description.
    #[arg(long)]
    description: Option<String>,

    /// Preset idea index (see `thumbsmith ideas`).
    #[arg(long)]
    idea: Option<usize>,
}

#[derive(Parser, Debug)]
struct DesignArgs {
    #[command(flatten)]
    brief: BriefArgs,

    /// Shape placement seed (defaults to a hash of the description).
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the detected category, mood and hook on stderr.
    #[arg(long)]
    explain: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    brief: BriefArgs,

    #[arg(long)]
    seed: Option<u64>,

    /// Settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output directory (overrides the settings file).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Font file for all text (overrides the settings file).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input design JSON (as printed by `thumbsmith design`).
    #[arg(long)]
    design: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Design(args) => cmd_design(args),
        Command::Export(args) => cmd_export(args),
        Command::Render(args) => cmd_render(args),
        Command::Ideas => {
            for (i, idea) in QUICK_IDEAS.iter().enumerate() {
                println!("{i}: {idea}");
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn session_for(brief: &BriefArgs, seed: Option<u64>) -> anyhow::Result<Session> {
    let mut session = Session::new();
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }
    match (&brief.description, brief.idea) {
        (Some(text), _) => {
            session.set_description(text.as_str());
            session.generate();
        }
        (None, Some(idx)) => {
            session.apply_quick_idea(idx)?;
        }
        (None, None) => {}
    }
    Ok(session)
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<ThumbnailSettings> {
    Ok(match path {
        Some(p) => ThumbnailSettings::load(p)?,
        None => ThumbnailSettings::default(),
    })
}

fn make_renderer(settings: &ThumbnailSettings) -> anyhow::Result<CpuRenderer> {
    Ok(CpuRenderer::new(settings.to_render_settings()?)?)
}

fn cmd_design(args: DesignArgs) -> anyhow::Result<()> {
    let session = session_for(&args.brief, args.seed)?;
    if args.explain {
        let a = thumbsmith::analyze_description(session.description());
        eprintln!(
            "category: {}  mood: {:?}  hook: {}",
            a.category.label(),
            a.mood,
            a.hook.as_deref().unwrap_or("-")
        );
        eprintln!("badge text color: {}", session.contrast_accent());
    }
    println!("{}", serde_json::to_string_pretty(session.design())?);
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let mut settings = load_settings(args.settings.as_deref())?;
    if let Some(dir) = args.out_dir {
        settings.out_dir = dir;
    }
    if let Some(font) = args.font {
        settings.font_path = Some(font);
    }

    let session = session_for(&args.brief, args.seed)?;
    let renderer = make_renderer(&settings)?;
    let delivery = DirectoryDelivery::new(&settings.out_dir);

    match session.export(&renderer, &delivery) {
        ExportOutcome::Delivered { file_name } => {
            eprintln!("wrote {}", delivery.path_for(&file_name).display());
            Ok(())
        }
        ExportOutcome::Skipped => anyhow::bail!("export skipped: another export is in flight"),
        ExportOutcome::Failed => anyhow::bail!("export failed (see log above)"),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let f = File::open(&args.design)
        .with_context(|| format!("open design '{}'", args.design.display()))?;
    let design: DesignSpec =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse design JSON")?;
    design.validate()?;

    let mut settings = load_settings(args.settings.as_deref())?;
    if let Some(font) = args.font {
        settings.font_path = Some(font);
    }
    let renderer = make_renderer(&settings)?;
    let frame = renderer.rasterize(&design)?;
    let png = thumbsmith::encode_png(&frame)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
