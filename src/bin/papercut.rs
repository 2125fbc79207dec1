use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "papercut", version)]
struct Cli {
    /// Log more to stderr (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn an image into a flat-color papercut PNG with transparent background.
    Stylize(StylizeArgs),
    /// Place an existing cutout into one scene.
    Scene(SceneArgs),
    /// Stylize once, then render every scene from an assets directory.
    Run(RunArgs),
    /// Print the effective scene layouts as JSON.
    Layouts(LayoutsArgs),
}

#[derive(Args, Debug)]
struct StyleFlags {
    /// Named contrast/threshold pair; explicit flags override it.
    #[arg(long, value_enum)]
    preset: Option<PresetChoice>,

    /// Contrast factor.
    #[arg(long)]
    contrast: Option<f32>,

    /// Near-white keying threshold (0-255).
    #[arg(long)]
    threshold: Option<i64>,

    /// Cutout color as #rrggbb.
    #[arg(long)]
    color: Option<String>,

    /// Cutout opacity in [0, 1].
    #[arg(long)]
    opacity: Option<f64>,
}

#[derive(Parser, Debug)]
struct StylizeArgs {
    /// Source image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    style: StyleFlags,

    /// Config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene to render.
    #[arg(long, value_enum)]
    scene: SceneChoice,

    /// Cutout PNG (from `stylize`).
    #[arg(long)]
    cutout: PathBuf,

    /// Background photograph.
    #[arg(long)]
    background: PathBuf,

    /// Output image path; format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// Config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Source image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory holding the Base_* backgrounds. Falls back to the config, then `assets`.
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    style: StyleFlags,

    /// Render scenes in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads when `--parallel` is set.
    #[arg(long)]
    threads: Option<usize>,

    /// Config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutsArgs {
    /// Config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Interactive,
    Batch,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneChoice {
    Window,
    Wall,
    Door,
    Package,
}

impl From<SceneChoice> for papercut::SceneKind {
    fn from(c: SceneChoice) -> Self {
        match c {
            SceneChoice::Window => Self::Window,
            SceneChoice::Wall => Self::Wall,
            SceneChoice::Door => Self::Door,
            SceneChoice::Package => Self::Package,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Stylize(args) => cmd_stylize(args),
        Command::Scene(args) => cmd_scene(args),
        Command::Run(args) => cmd_run(args),
        Command::Layouts(args) => cmd_layouts(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<papercut::PapercutConfig> {
    match path {
        Some(p) => papercut::PapercutConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(papercut::PapercutConfig::default()),
    }
}

fn apply_style_flags(
    mut params: papercut::StylizeParams,
    flags: &StyleFlags,
) -> anyhow::Result<papercut::StylizeParams> {
    if let Some(preset) = flags.preset {
        let preset = match preset {
            PresetChoice::Interactive => papercut::StylePreset::Interactive,
            PresetChoice::Batch => papercut::StylePreset::Batch,
        };
        let p = papercut::StylizeParams::preset(preset);
        params.contrast = p.contrast;
        params.threshold = p.threshold;
    }
    if let Some(c) = flags.contrast {
        params.contrast = c;
    }
    if let Some(t) = flags.threshold {
        params.threshold = papercut::Threshold::new(t)?;
    }
    if let Some(hex) = &flags.color {
        params.color = papercut::Rgb8::from_hex(hex)?;
    }
    if let Some(o) = flags.opacity {
        params.opacity = papercut::Opacity::new(o)?;
    }
    params.validate()?;
    Ok(params)
}

fn cmd_stylize(args: StylizeArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let params = apply_style_flags(cfg.stylize, &args.style)?;
    let cutout = papercut::stylize(&papercut::ImageInput::from(args.in_path.clone()), &params)
        .with_context(|| format!("stylize '{}'", args.in_path.display()))?;
    papercut::save_cutout_png(&cutout, &args.out)?;
    println!("{}", args.out.display());
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let table = cfg.layout_table()?;
    let layout = table.get(args.scene.into());
    papercut::render_scene_with(
        layout,
        &papercut::ImageInput::from(args.cutout),
        &papercut::ImageInput::from(args.background),
        Some(&args.out),
    )
    .with_context(|| format!("render {} scene", layout.scene))?;
    println!("{}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let assets_dir = args
        .assets_dir
        .or_else(|| cfg.assets_dir.clone())
        .unwrap_or_else(|| PathBuf::from("assets"));

    let mut opts = papercut::RunOptions::new(assets_dir, &args.out_dir);
    opts.params = apply_style_flags(cfg.stylize, &args.style)?;
    opts.layouts = cfg.layout_table()?;
    opts.threading = papercut::SceneThreading {
        parallel: args.parallel,
        threads: args.threads,
    };

    let report = papercut::run(&papercut::ImageInput::from(args.in_path.clone()), &opts)
        .with_context(|| format!("run '{}'", args.in_path.display()))?;

    println!("cutout: {}", report.cutout_path.display());
    for outcome in &report.scenes {
        match (&outcome.result, &outcome.output) {
            (Ok(_), Some(path)) => println!("{}: {}", outcome.scene, path.display()),
            (Ok(_), None) => println!("{}: ok", outcome.scene),
            (Err(e), _) => println!("{}: failed: {e}", outcome.scene),
        }
    }
    if report.succeeded() == 0 {
        anyhow::bail!("every scene failed to render");
    }
    Ok(())
}

fn cmd_layouts(args: LayoutsArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let table = cfg.layout_table()?;
    let json = serde_json::to_string_pretty(&table).context("serialize layouts")?;
    println!("{json}");
    Ok(())
}
