use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use proton_life_core::{phase1, ProtonLifeError, Stage, StageConfig, TimelineStage};
use tracing_subscriber::EnvFilter;

fn main() -> proton_life_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => run_list(),
        Commands::Beat { name, preset, seed } => run_beat(&name, preset.as_deref(), seed),
        Commands::Phase { preset, seed } => run_phase(preset.as_deref(), seed),
    }
}

fn run_list() -> proton_life_core::Result<()> {
    let phase = phase1();
    println!("Phase {} – {}", phase.number, phase.title);
    for beat in phase.beats() {
        println!("  {}", beat.id);
    }
    Ok(())
}

fn run_beat(name: &str, preset: Option<&Path>, seed: Option<u64>) -> proton_life_core::Result<()> {
    let config = load_config(preset, seed)?;
    let phase = phase1();
    let beat = phase
        .find_beat(name)
        .ok_or_else(|| ProtonLifeError::msg(format!("unknown beat '{name}', try `list`")))?;

    tracing::info!(beat = %beat.id, "playing beat standalone");
    let stage = beat.run_standalone(&config)?;
    println!("{}: {:.1}s of timeline", beat.id, stage.elapsed());
    Ok(())
}

fn run_phase(preset: Option<&Path>, seed: Option<u64>) -> proton_life_core::Result<()> {
    let config = load_config(preset, seed)?;
    let phase = phase1();

    tracing::info!(phase = phase.number, title = %phase.title, "playing combined phase");
    let mut stage = TimelineStage::new();
    phase.run(&mut stage, &config)?;
    println!(
        "Phase {}: {} beats, {:.1}s of timeline",
        phase.number,
        phase.beats().len(),
        stage.elapsed()
    );
    Ok(())
}

fn load_config(preset: Option<&Path>, seed: Option<u64>) -> proton_life_core::Result<StageConfig> {
    let mut config = match preset {
        Some(path) => StageConfig::from_preset(path)?,
        None => StageConfig::default(),
    };
    if let Some(seed) = seed {
        config.starfield_seed = seed;
    }
    Ok(config)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Scripted beats for The Life of a Proton", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every registered beat.
    List,
    /// Play a single beat standalone on a fresh stage.
    Beat {
        /// Beat name (e.g. `intro-rewind`) or position (e.g. `beat1`).
        name: String,
        /// Optional JSON preset overriding the default configuration.
        #[arg(short, long)]
        preset: Option<PathBuf>,
        /// Override the starfield seed for this run.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play the combined Phase 1 sequence.
    Phase {
        /// Optional JSON preset overriding the default configuration.
        #[arg(short, long)]
        preset: Option<PathBuf>,
        /// Override the starfield seed for this run.
        #[arg(long)]
        seed: Option<u64>,
    },
}
