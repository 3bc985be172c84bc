//! Example sampling many branches and printing their density statistics.
//!
//! This example shows how to:
//! - Generate a branch from a seed and render it as text
//! - Sample many seeds in parallel to see how the relax factor and topology
//!   change the shape of the branches
//!
//! # Usage
//!
//! ```sh
//! cargo run --example branch_stats
//! ```
//!
//! Compare a sparse toroidal board against the default:
//!
//! ```sh
//! cargo run --example branch_stats -- --width 12 --height 10 --relax 0.6 --toroidal
//! ```
//!
//! Reproduce the printed branch from its seed:
//!
//! ```sh
//! cargo run --example branch_stats -- --seed <SEED> --samples 1
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use sakura_core::{Grid, Layer, Topology};
use sakura_generator::{BranchGenerator, GeneratedBranch, RelaxFactor, RoundSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of columns.
    #[arg(long, default_value_t = 7)]
    width: usize,

    /// Number of rows.
    #[arg(long, default_value_t = 6)]
    height: usize,

    /// Forbidden-cell density in [0, 0.7].
    #[arg(long, default_value_t = 0.1)]
    relax: f64,

    /// Wrap the grid edges around.
    #[arg(long)]
    toroidal: bool,

    /// Seed of the printed branch (64 hex digits). Random if omitted.
    #[arg(long)]
    seed: Option<RoundSeed>,

    /// Number of branches to sample for the statistics.
    #[arg(long, default_value_t = 10_000)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    let relax = RelaxFactor::new(args.relax).unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(2);
    });
    let topology = if args.toroidal {
        Topology::Toroidal
    } else {
        Topology::Bounded
    };
    if let Err(err) = Grid::check_dimensions(args.width, args.height) {
        eprintln!("{err}");
        process::exit(2);
    }
    let generator = BranchGenerator::new(relax);
    let sample = |seed: RoundSeed| {
        let mut grid = Grid::new(args.width, args.height).unwrap();
        grid.set_topology(topology);
        let branch = generator.generate_with_seed(&mut grid, seed);
        (grid, branch)
    };

    let seed = args.seed.unwrap_or_else(RoundSeed::random);
    let (grid, branch) = sample(seed);
    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Branch (root at {}):", branch.root);
    println!("{}", grid.render(Layer::Original));
    println!();

    if args.samples == 0 {
        return;
    }
    let branches: Vec<GeneratedBranch> = (0..args.samples)
        .into_par_iter()
        .map(|_| sample(RoundSeed::random()).1)
        .collect();
    print_stats(&branches, args.width * args.height);
}

#[expect(clippy::cast_precision_loss)]
fn print_stats(branches: &[GeneratedBranch], cells: usize) {
    let n = branches.len() as f64;
    let occupied: usize = branches.iter().map(|b| b.occupied).sum();
    let forbidden: usize = branches.iter().map(|b| b.forbidden).sum();
    let degenerate = branches.iter().filter(|b| !b.root_found).count();
    let full = branches.iter().filter(|b| b.occupied == cells).count();

    println!("Stats over {} branches:", branches.len());
    println!(
        "  occupied cells: {:.2} / {cells} on average",
        occupied as f64 / n
    );
    println!("  forbidden cells: {:.2} on average", forbidden as f64 / n);
    println!(
        "  fully covered: {:.2}%",
        full as f64 / n * 100.0
    );
    println!(
        "  degenerate roots: {:.2}%",
        degenerate as f64 / n * 100.0
    );
}
