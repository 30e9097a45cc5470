use std::{
    io::BufRead as _,
    path::{Path, PathBuf},
    time::SystemTime,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hotswap-probe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a solid-color 2x2 PNG.
    Png(PngArgs),
    /// Decode a PNG and print its size and (if uniform) color.
    Inspect(InspectArgs),
    /// Run the perturbation sequence against an assets directory.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct PngArgs {
    /// Fill color: `#rrggbb`, `r,g,b`, or a name (red, gray, orange, ...).
    #[arg(long)]
    color: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// PNG file to decode.
    path: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Harness config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Assets root holding `config/settings.json` and `textures/`.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Multiplier on every pause (0 runs back to back).
    #[arg(long)]
    time_scale: Option<f64>,

    /// Seed for the rapid burst.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of writes in the rapid burst.
    #[arg(long)]
    rapid: Option<u32>,

    /// Restrict to these phases (repeatable).
    #[arg(long = "phase", value_enum)]
    phases: Vec<PhaseChoice>,

    /// Print the plan instead of running it.
    #[arg(long)]
    dry_run: bool,

    /// Start immediately instead of waiting for Enter.
    #[arg(long, short = 'y')]
    yes: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PhaseChoice {
    Config,
    Textures,
    Churn,
    Rapid,
}

impl From<PhaseChoice> for hotswap_probe::Phase {
    fn from(choice: PhaseChoice) -> Self {
        match choice {
            PhaseChoice::Config => Self::Config,
            PhaseChoice::Textures => Self::Textures,
            PhaseChoice::Churn => Self::Churn,
            PhaseChoice::Rapid => Self::Rapid,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Png(args) => cmd_png(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let color: hotswap_probe::Rgb8 = args.color.parse()?;
    let bytes = hotswap_probe::encode_solid_png(color)?;
    hotswap_probe::write_file(&args.out, &bytes)?;

    eprintln!("wrote {} ({color}, {} bytes)", args.out.display(), bytes.len());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(&args.path).with_context(|| format!("read '{}'", args.path.display()))?;
    let summary = hotswap_probe::inspect_png(&bytes)?;

    println!("{}x{}", summary.width, summary.height);
    match summary.solid {
        Some(c) => println!("solid {c}"),
        None => println!("mixed"),
    }
    Ok(())
}

fn load_config(args: &RunArgs) -> anyhow::Result<hotswap_probe::HarnessConfig> {
    let mut cfg = match &args.config {
        Some(path) => hotswap_probe::HarnessConfig::from_path(path)?,
        None => hotswap_probe::HarnessConfig::default(),
    };
    cfg.apply_overrides(hotswap_probe::RunOverrides {
        assets_dir: args.assets.clone(),
        time_scale: args.time_scale,
        rapid_changes: args.rapid,
        seed: args.seed,
        phases: args.phases.iter().copied().map(Into::into).collect(),
    });
    Ok(cfg)
}

fn wait_for_enter(assets: &Path) -> anyhow::Result<()> {
    eprintln!(
        "about to modify files under '{}'; make sure the application under test is running",
        assets.display()
    );
    eprintln!("press Enter to start the sequence...");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read confirmation from stdin")?;
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;

    if args.dry_run {
        let steps = hotswap_probe::build_plan(&cfg, SystemTime::now())?;
        for step in &steps {
            println!("{step}");
        }
        eprintln!(
            "{} steps, {:.1}s of pauses",
            steps.len(),
            hotswap_probe::total_pause(&steps).as_secs_f64()
        );
        return Ok(());
    }

    cfg.validate()?;
    cfg.check_assets_dir()?;
    if !args.yes {
        wait_for_enter(&cfg.assets_dir)?;
    }

    let report = hotswap_probe::run_harness(&cfg, hotswap_probe::SystemClock)?;
    eprintln!(
        "done: {} settings writes, {} texture writes, {} removals",
        report.settings_writes, report.texture_writes, report.removals
    );
    Ok(())
}
