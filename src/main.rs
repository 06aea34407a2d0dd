use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use camp_escape::{
    CautiousController, Controller, GameRng, GameSummary, MapBuilder, PlayerId, RandomController,
    RulesConfig, SaveStore, Session, DEFAULT_SAVE_PATH,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    Cautious,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless two-player camp escape simulation", long_about = None)]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of authored zones before the exit is appended
    #[arg(short, long, default_value_t = 7)]
    zones: usize,

    /// Snapshot file
    #[arg(long, default_value = DEFAULT_SAVE_PATH)]
    save: PathBuf,

    /// Resume from the snapshot instead of starting a new game
    #[arg(long)]
    resume: bool,

    /// JSON rules configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// How both players decide
    #[arg(long, value_enum, default_value_t = Strategy::Cautious)]
    strategy: Strategy,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(path: Option<&PathBuf>) -> Result<RulesConfig> {
    let Some(path) = path else {
        return Ok(RulesConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn run(session: &mut Session, controller: &mut impl Controller) -> Result<GameSummary> {
    Ok(session.run(controller)?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let config = load_config(args.config.as_ref())?;
    let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    let store = SaveStore::new(&args.save);

    let mut session = if args.resume {
        Session::resume(store, config.clone(), seed)
            .with_context(|| format!("resuming from {}", args.save.display()))?
    } else {
        let mut map_rng = GameRng::new(seed);
        let mut builder = MapBuilder::new(&config);
        for _ in 0..args.zones.max(config.min_authored_zones) {
            builder.append_random_zone(&mut map_rng)?;
        }
        let map = builder.close()?;
        log::info!("map:\n{}", map.describe());
        Session::new(map, config.clone(), seed.wrapping_add(1), Some(store))?
    };

    let summary = match args.strategy {
        Strategy::Cautious => {
            run(&mut session, &mut CautiousController::new(config.backpack_size))?
        }
        Strategy::Random => run(&mut session, &mut RandomController::new(seed.wrapping_add(2)))?,
    };

    for player in PlayerId::both() {
        let fate = if summary.escaped(player) { "escaped" } else { "died" };
        log::info!("{player} {fate}");
    }
    log::info!("finished after {} turns", summary.turns);
    Ok(())
}
