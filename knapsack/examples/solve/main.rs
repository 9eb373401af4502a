// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This example uses the knapsack solvers to solve instances read from text
//! files (see `io_utils` for the format). When several files are given, they
//! are solved in parallel. When no file is given, it solves the three
//! reference scenarios with every model and every strategy.

use std::time::Instant;

use clap::{Parser, ValueEnum};
use knapsack::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::io_utils::{read_instance, RawInstance};

mod io_utils;


/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The paths to the instance files
    fnames: Vec<String>,
    /// How many times each item may be put in the sack
    #[clap(short, long, value_enum, default_value = "zero-one")]
    model: Model,
    /// How the dynamic program is tabulated
    #[clap(short, long, value_enum, default_value = "rolling")]
    strategy: Tabulation,
    /// Overrides the capacity of every instance
    #[clap(short, long)]
    capacity: Option<usize>,
    /// The number of concurrent threads (defaults to the number of hardware threads)
    #[clap(short, long)]
    threads: Option<usize>,
    /// Logs the progress of the solvers
    #[clap(short, long)]
    verbose: bool,
}

/// The knapsack model used to solve the instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Model {
    /// Each item at most once
    ZeroOne,
    /// Each item as many times as the capacity allows
    Unbounded,
    /// Each item at most `count` times, enumerating all counts
    Naive,
    /// Each item at most `count` times, using the binary split
    BinarySplit,
}

/// How the dynamic program is tabulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tabulation {
    Table,
    Rolling,
}
impl From<Tabulation> for Strategy {
    fn from(tabulation: Tabulation) -> Self {
        match tabulation {
            Tabulation::Table   => Strategy::Table,
            Tabulation::Rolling => Strategy::Rolling,
        }
    }
}

/// Solves all the given instances with the requested model and strategy
/// using a pool of `threads` threads.
pub fn solve_all(model: Model, strategy: Strategy, instances: &[RawInstance], threads: usize) -> Vec<Result<isize>> {
    match model {
        Model::ZeroOne => {
            let instances = instances.iter().map(|i| i.items()).collect::<Vec<_>>();
            BatchSolver::new(ZeroOneSolver::with_strategy(strategy)).with_nb_threads(threads).solve_all(&instances)
        },
        Model::Unbounded => {
            let instances = instances.iter().map(|i| i.items()).collect::<Vec<_>>();
            BatchSolver::new(UnboundedSolver::with_strategy(strategy)).with_nb_threads(threads).solve_all(&instances)
        },
        Model::Naive => {
            let instances = instances.iter().map(|i| i.bounded()).collect::<Vec<_>>();
            BatchSolver::new(NaiveBoundedSolver).with_nb_threads(threads).solve_all(&instances)
        },
        Model::BinarySplit => {
            let instances = instances.iter().map(|i| i.bounded()).collect::<Vec<_>>();
            BatchSolver::new(BinarySplitSolver::with_strategy(strategy)).with_nb_threads(threads).solve_all(&instances)
        },
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

/// Solves the reference scenarios with every model and strategy.
fn demo() {
    let zero_one  = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 8)];
    let unbounded = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)];
    let bounded   = [BoundedItem::new(2, 3, 2), BoundedItem::new(3, 4, 3), BoundedItem::new(4, 5, 1)];
    let capacity  = 10;

    println!("=== 0-1 knapsack ===");
    println!("Items:      {:?}", zero_one);
    println!("Capacity:   {}", capacity);
    for strategy in [Strategy::Table, Strategy::Rolling] {
        let value = ZeroOneSolver::with_strategy(strategy).maximize(&zero_one, capacity);
        println!("Objective:  {:?} ({:?})", value, strategy);
    }

    println!("\n=== Unbounded knapsack ===");
    println!("Items:      {:?}", unbounded);
    println!("Capacity:   {}", capacity);
    for strategy in [Strategy::Table, Strategy::Rolling] {
        let value = UnboundedSolver::with_strategy(strategy).maximize(&unbounded, capacity);
        println!("Objective:  {:?} ({:?})", value, strategy);
    }

    println!("\n=== Bounded knapsack ===");
    println!("Items:      {:?}", bounded);
    println!("Capacity:   {}", capacity);
    println!("Objective:  {:?} (naive)", solve_multiple_naive(&bounded, capacity));
    println!("Objective:  {:?} (binary split)", solve_multiple_optimized(&bounded, capacity));
}

/// This is your executable's entry point. It is the place where all the pieces are put together
/// to solve knapsack instances from the command line.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if args.fnames.is_empty() {
        demo();
        return Ok(());
    }

    let mut instances = vec![];
    for fname in args.fnames.iter() {
        let mut instance = read_instance(fname)?;
        if let Some(capacity) = args.capacity {
            instance.capacity = capacity;
        }
        if matches!(args.model, Model::Naive | Model::BinarySplit) && !instance.counted {
            tracing::warn!(fname = %fname, "some items have no count: one copy of each is assumed");
        }
        instances.push(instance);
    }

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    let start   = Instant::now();
    let results = solve_all(args.model, args.strategy.into(), &instances, threads);
    let duration = start.elapsed();

    for (fname, result) in args.fnames.iter().zip(results) {
        println!("Instance:   {}", fname);
        match result {
            Ok(value) => println!("Objective:  {}", value),
            Err(e)    => println!("Error:      {}", e),
        }
    }
    println!("Model:      {:?}", args.model);
    println!("Duration:   {:.3} seconds", duration.as_secs_f32());
    Ok(())
}
