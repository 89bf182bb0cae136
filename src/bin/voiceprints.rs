use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "voiceprints", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the fractal background alone as a PNG.
    Background(SceneArgs),
    /// Render the background with card panels and the chart as a PNG.
    Dashboard(SceneArgs),
    /// Print the metric cards as JSON.
    Cards,
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Colour seed. Falls back to `VOICEPRINTS_SEED`, then to the clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Background config JSON (palette, apex_y, size, depth).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Background(args) => cmd_scene(args, false),
        Command::Dashboard(args) => cmd_scene(args, true),
        Command::Cards => cmd_cards(),
    }
}

fn load_background(path: Option<&Path>) -> anyhow::Result<voiceprints::FractalBackground> {
    let cfg = match path {
        Some(p) => voiceprints::BackgroundConfig::from_json_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => voiceprints::BackgroundConfig::default(),
    };
    Ok(voiceprints::FractalBackground::from_config(&cfg)?)
}

fn resolve_seed(flag: Option<u64>) -> u64 {
    flag.or_else(voiceprints::seed_from_env).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

fn cmd_scene(args: SceneArgs, with_dashboard: bool) -> anyhow::Result<()> {
    let viewport = voiceprints::Viewport::new(args.width, args.height)?;
    let background = load_background(args.config.as_deref())?;
    let seed = resolve_seed(args.seed);
    tracing::info!(
        width = viewport.width,
        height = viewport.height,
        seed,
        "rendering"
    );

    let mut surface = voiceprints::FractalBackground::acquire_cpu_surface(viewport)
        .context("acquire drawing surface")?;
    let mut colors = voiceprints::Rng64::new(seed);

    let mounted = if with_dashboard {
        voiceprints::DashboardPage::with_background(background).render(&mut surface, &mut colors)?
    } else {
        background.mount(&mut surface, &mut colors)?
    };

    mounted
        .surface()
        .snapshot()
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    mounted.unmount();

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_cards() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&voiceprints::primary_metrics())
        .context("serialize metric cards")?;
    println!("{json}");
    Ok(())
}
