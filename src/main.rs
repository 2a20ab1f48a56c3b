#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::{bail, Context};
#[cfg(feature = "std")]
use battlegrid::{
    init_logging, Column, Coordinate, GameGrid, Orientation, Row, ShipClass, ShipPlacement,
    ShotOutcome,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about = "Battleship grid rule engine", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Place a random fleet, then fire at cells in random order until it is sunk.
    Simulate {
        #[arg(long, help = "Fix RNG seed for a reproducible run (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },
    /// Place ships, fire at cells and report the state of every ship.
    Check {
        /// Placements as class:orientation:cell, e.g. carrier:h:A1 or patrol-boat:v:J9.
        #[arg(required = true, value_name = "PLACEMENT")]
        placements: Vec<String>,
        /// Cell to fire at after placing; may be repeated.
        #[arg(long = "fire", value_name = "CELL")]
        fire: Vec<String>,
    },
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct SimulationSummary {
    seed: u64,
    shots: usize,
    hits: usize,
    sunk_order: Vec<ShipClass>,
    fleet: Vec<ShipPlacement>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { seed, json } => simulate(seed, json),
        Commands::Check { placements, fire } => check(&placements, &fire),
    }
}

#[cfg(feature = "std")]
fn simulate(seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut grid = GameGrid::new()
        .with_random_fleet(&mut rng)
        .context("unable to place the fleet")?;
    log::info!("placed {} ships with seed {}", grid.ship_count(), seed);

    let mut targets: Vec<Coordinate> = Row::ALL
        .into_iter()
        .flat_map(|row| Column::ALL.into_iter().map(move |column| Coordinate::new(column, row)))
        .collect();
    targets.shuffle(&mut rng);

    let mut shots = 0;
    let mut hits = 0;
    let mut sunk_order = Vec::new();
    for target in targets {
        if grid.ship_count() > 0 && grid.is_all_ships_sunk() {
            break;
        }
        let (next, outcome) = grid.fire_and_report(target)?;
        shots += 1;
        if outcome.is_hit() {
            hits += 1;
        }
        if let ShotOutcome::Sunk(class) = outcome {
            log::info!("{} sunk after {} shots", class, shots);
            sunk_order.push(class);
        }
        grid = next;
    }

    let summary = SimulationSummary {
        seed,
        shots,
        hits,
        sunk_order,
        fleet: grid.placements().to_vec(),
    };
    if json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("seed: {}", summary.seed);
        for placement in &summary.fleet {
            println!("  {}", placement);
        }
        println!("shots: {} (hits: {})", summary.shots, summary.hits);
        let order: Vec<&str> = summary.sunk_order.iter().map(|c| c.name()).collect();
        println!("sunk: {}", order.join(", "));
    }
    Ok(())
}

#[cfg(feature = "std")]
fn check(placements: &[String], fire: &[String]) -> anyhow::Result<()> {
    let mut grid = GameGrid::new();
    for spec in placements {
        let placement = parse_placement(spec)?;
        grid = grid
            .place_ship(placement)
            .with_context(|| format!("cannot place {}", placement))?;
    }

    for cell in fire {
        let target: Coordinate = cell
            .parse()
            .with_context(|| format!("invalid cell `{}`", cell))?;
        let (next, outcome) = grid
            .fire_and_report(target)
            .with_context(|| format!("cannot fire at {}", target))?;
        match outcome {
            ShotOutcome::Miss => println!("{}: miss", target),
            ShotOutcome::Hit(class) => println!("{}: hit {}", target, class),
            ShotOutcome::Sunk(class) => println!("{}: sunk {}", target, class),
        }
        grid = next;
    }

    for ship in grid.all_ships() {
        let cells: Vec<String> = ship.cells().map(|c| c.to_string()).collect();
        let damage: Vec<String> = ship.damage().iter().map(|c| c.to_string()).collect();
        println!(
            "{:<12} {:<10} cells=[{}] damage=[{}]{}",
            ship.ship_class(),
            ship.orientation(),
            cells.join(" "),
            damage.join(" "),
            if ship.is_sunk() { " sunk" } else { "" },
        );
    }
    if grid.ship_count() > 0 && grid.is_all_ships_sunk() {
        println!("all ships sunk");
    }
    Ok(())
}

/// Parse `class:orientation:cell`.
#[cfg(feature = "std")]
fn parse_placement(spec: &str) -> anyhow::Result<ShipPlacement> {
    let parts: Vec<&str> = spec.split(':').collect();
    let [class, orientation, cell] = parts.as_slice() else {
        bail!("expected class:orientation:cell, got `{}`", spec);
    };
    let class: ShipClass = class
        .parse()
        .with_context(|| format!("unknown ship class in `{}`", spec))?;
    let orientation: Orientation = orientation
        .parse()
        .with_context(|| format!("unknown orientation in `{}`", spec))?;
    let top_left: Coordinate = cell
        .parse()
        .with_context(|| format!("invalid cell in `{}`", spec))?;
    Ok(ShipPlacement::new(class, orientation, top_left))
}
