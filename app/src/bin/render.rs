use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use app::config::Config;
use app::figure::{FIGURE_FILE_NAME, FieldDump, render_panel, render_single, single_file_name};
use clap::{Args, Parser, Subcommand};
use landscape::{AdaptationPanel, ColorScale, LandscapeParams, LossLandscape, save_png, sigmoid};
use log::info;

#[derive(Parser)]
#[command(name = "landscape-render")]
#[command(about = "Render synthetic loss landscapes to PNG", long_about = None)]
struct Cli {
    /// JSON config file; flags given on the command line win over it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one landscape
    Single(SingleArgs),

    /// Render the multi-category adaptation figure
    Figure(FigureArgs),

    /// Write a generated field as JSON
    Dump(DumpArgs),
}

#[derive(Args)]
struct LandscapeArgs {
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long, allow_negative_numbers = true)]
    complexity: Option<i64>,
    #[arg(long)]
    seed: Option<u64>,
}

impl LandscapeArgs {
    fn apply(&self, p: &mut LandscapeParams) {
        if let Some(w) = self.width {
            p.width = w;
        }
        if let Some(h) = self.height {
            p.height = h;
        }
        if let Some(c) = self.complexity {
            p.complexity = c;
        }
        if let Some(s) = self.seed {
            p.seed = s;
        }
    }
}

#[derive(Args)]
struct RenderArgs {
    /// Nearest-neighbour upscale factor
    #[arg(long)]
    scale: Option<u32>,
    #[arg(long, value_enum)]
    colors: Option<ColorArg>,
    /// Disable hillshading
    #[arg(long)]
    flat: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ColorArg {
    Spectral,
    Viridis,
    Gray,
}

impl From<ColorArg> for ColorScale {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::Spectral => ColorScale::Spectral,
            ColorArg::Viridis => ColorScale::Viridis,
            ColorArg::Gray => ColorScale::Gray,
        }
    }
}

impl RenderArgs {
    fn apply(&self, cfg: &mut Config) {
        if let Some(s) = self.scale {
            cfg.render.scale = s;
        }
        if let Some(c) = self.colors {
            cfg.render.color_scale = c.into();
        }
        if self.flat {
            cfg.render.hillshade = false;
        }
    }
}

#[derive(Args)]
struct SingleArgs {
    #[command(flatten)]
    landscape: LandscapeArgs,
    #[command(flatten)]
    render: RenderArgs,
    /// Apply the sigmoid before rendering
    #[arg(long)]
    sigmoid: bool,
    /// Output PNG; defaults to single_loss_landscape_seed{seed}.png
    /// (100x100, seed 123 unless overridden)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct FigureArgs {
    #[command(flatten)]
    landscape: LandscapeArgs,
    #[command(flatten)]
    render: RenderArgs,
    /// Comma-separated category labels, one figure row each
    #[arg(long, value_delimiter = ',')]
    categories: Option<Vec<String>>,
    /// Seed of the generator that picks the per-row seeds
    #[arg(long)]
    figure_seed: Option<u64>,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct DumpArgs {
    #[command(flatten)]
    landscape: LandscapeArgs,
    #[arg(long)]
    sigmoid: bool,
    #[arg(long)]
    out: PathBuf,
}

fn run_single(mut cfg: Config, args: SingleArgs) -> anyhow::Result<()> {
    args.landscape.apply(&mut cfg.single);
    args.render.apply(&mut cfg);

    let start = Instant::now();
    let field = LossLandscape::from_params(&cfg.single)?.generate()?;
    let img = render_single(&field, args.sigmoid, &cfg.render)?;
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(single_file_name(cfg.single.seed)));
    save_png(&img, &out).with_context(|| format!("writing {}", out.display()))?;
    info!(
        "single landscape (seed {}) done in {:.2} ms",
        cfg.single.seed,
        start.elapsed().as_secs_f32() * 1000.0
    );
    Ok(())
}

fn run_figure(mut cfg: Config, args: FigureArgs) -> anyhow::Result<()> {
    args.landscape.apply(&mut cfg.landscape);
    args.render.apply(&mut cfg);
    if let Some(c) = args.categories {
        cfg.categories = c;
    }
    if let Some(s) = args.figure_seed {
        cfg.figure_seed = s;
    }

    let start = Instant::now();
    let panel = AdaptationPanel::build(&cfg.categories[..], &cfg.landscape, cfg.figure_seed)?;
    for row in &panel.rows {
        info!("row {:?} uses seed {}", row.category, row.seed);
    }
    let img = render_panel(&panel, &cfg.render)?;
    let out = args.out.unwrap_or_else(|| PathBuf::from(FIGURE_FILE_NAME));
    save_png(&img, &out).with_context(|| format!("writing {}", out.display()))?;
    info!(
        "figure with {} rows done in {:.2} ms",
        panel.rows.len(),
        start.elapsed().as_secs_f32() * 1000.0
    );
    Ok(())
}

fn run_dump(mut cfg: Config, args: DumpArgs) -> anyhow::Result<()> {
    args.landscape.apply(&mut cfg.landscape);

    let mut field = LossLandscape::from_params(&cfg.landscape)?.generate()?;
    if args.sigmoid {
        field = sigmoid(&field);
    }
    let dump = FieldDump::new(cfg.landscape, args.sigmoid, &field);
    let json = serde_json::to_string_pretty(&dump)?;
    fs::write(&args.out, json).with_context(|| format!("writing {}", args.out.display()))?;
    info!("dumped {}x{} field to {}", dump.width, dump.height, args.out.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let cfg = Config::load_or_default(cli.config.as_deref())?;

    match cli.cmd {
        Commands::Single(args) => run_single(cfg, args),
        Commands::Figure(args) => run_figure(cfg, args),
        Commands::Dump(args) => run_dump(cfg, args),
    }
}
