use std::process::ExitCode;

use bst::{
    selftest,
    stats::{self, HeightsConfig, StatsError},
};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, thread_rng, Rng, RngCore, SeedableRng};

/// Build random binary search trees and report their heights.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the random number generator. Runs without one differ every time.
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the tree against a fixed insert sequence.
    Selftest,

    /// Print one random tree in order.
    Show {
        #[arg(short, long, default_value_t = 128)]
        nodes: usize,

        #[arg(short, long, default_value_t = stats::RAND_ITEM_BOUND)]
        bound: i32,
    },

    /// Build many random trees and summarise their heights.
    Heights {
        #[arg(short, long, default_value_t = 128)]
        nodes: usize,

        #[arg(short, long, default_value_t = 100)]
        trees: usize,

        #[arg(short, long, default_value_t = stats::RAND_ITEM_BOUND)]
        bound: i32,
    },
}

fn rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            log::debug!("seeding with {}", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(thread_rng()),
    }
}

fn run_selftest() -> bool {
    let checks = selftest::run();
    for check in &checks {
        println!("{}", check);
    }

    checks.iter().all(selftest::Check::passed)
}

fn show<R: Rng>(rng: &mut R, nodes: usize, bound: i32) -> Result<(), StatsError> {
    let tree = stats::random_tree(rng, nodes, bound)?;
    println!("{}", tree);
    println!("size: {}, height: {}", tree.size(), tree.height());
    Ok(())
}

fn heights<R: Rng>(rng: &mut R, config: &HeightsConfig) -> Result<(), StatsError> {
    let stats = stats::measure_heights(rng, config)?;
    println!(
        "{} trees of {} insertions from 0..{}",
        stats.trees, config.nodes, config.bound
    );
    println!("{}", stats);
    Ok(())
}

fn main() -> Result<ExitCode, StatsError> {
    env_logger::init();

    let args = Args::parse();
    let mut rng = rng(args.seed);

    let passed = match args.command {
        Some(Commands::Selftest) => run_selftest(),
        Some(Commands::Show { nodes, bound }) => {
            show(&mut rng, nodes, bound)?;
            true
        }
        Some(Commands::Heights {
            nodes,
            trees,
            bound,
        }) => {
            heights(&mut rng, &HeightsConfig { nodes, trees, bound })?;
            true
        }
        None => {
            let config = HeightsConfig::default();
            let passed = run_selftest();
            show(&mut rng, config.nodes, config.bound)?;
            heights(&mut rng, &config)?;
            passed
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
