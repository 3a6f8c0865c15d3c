use nbsim::{Scenario, Parameters, ScenarioConfig, Headless};
use nbsim::{read_universe, write_universe};
use nbsim::{bench_gravity, bench_step};
use nbsim::simulation::engine;

use clap::Parser;
use anyhow::{bail, Context, Result};

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nbsim", about = "Planar N-body gravity simulator")]
struct Args {
    /// Simulation time at which to stop
    stopping_time: Option<f64>,

    /// Time advanced per simulation tick
    delta_t: Option<f64>,

    /// Read the universe from this file instead of standard input
    #[arg(short, long)]
    universe: Option<PathBuf>,

    /// Load a full scenario (parameters + bodies) from a YAML file
    #[arg(short, long, conflicts_with_all = ["stopping_time", "delta_t", "universe"])]
    scenario: Option<PathBuf>,

    /// Run the built-in micro-benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &PathBuf) -> Result<ScenarioConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario file {}", path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario file {}", path.display()))?;

    Ok(scenario_cfg)
}

fn load_universe_text(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read universe file {}", p.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read universe from stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let mut scenario = if let Some(path) = &args.scenario {
        let scenario_cfg = load_scenario_from_yaml(path)?;
        Scenario::build_scenario(scenario_cfg)
    } else {
        let (Some(t_end), Some(h0)) = (args.stopping_time, args.delta_t) else {
            bail!("stopping time and time step are required unless --scenario is given");
        };
        let input = load_universe_text(args.universe.as_ref())?;
        let universe = read_universe(&input)?;
        Scenario::from_parts(universe, Parameters { t_end, h0, eps2: 0.0 })
    };

    engine::run(&mut scenario, &mut Headless);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_universe(&mut out, &scenario.universe)?;
    out.flush()?;

    Ok(())
}
