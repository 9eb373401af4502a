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

//! This module provides the implementation of a batch solver. That is a
//! solver that spreads many independent instances over as many threads as
//! requested. By default, it uses as many threads as the number of hardware
//! threads available on the machine.
//!
//! Each single instance is still solved sequentially: the cells of a row
//! depend on one another, so only whole instances are processed in parallel.

use derive_builder::Builder;
use parking_lot::Mutex;

use crate::{Instance, Solver, Result};

/// This is how you configure a batch solver.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let config = BatchConfigBuilder::default()
///     .nb_threads(4)
///     .build()
///     .unwrap();
/// assert_eq!(4, config.nb_threads());
/// assert_eq!(2, config.parallel_threshold());
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct BatchConfig {
    /// The number of worker threads. Defaults to the number of hardware
    /// threads available on the machine.
    #[builder(default="num_cpus::get()")]
    nb_threads: usize,
    /// Batches comprising fewer instances than this are solved on the calling
    /// thread without spawning any worker.
    #[builder(default="2")]
    parallel_threshold: usize,
}
impl Default for BatchConfig {
    fn default() -> Self {
        Self { nb_threads: num_cpus::get(), parallel_threshold: 2 }
    }
}
impl BatchConfig {
    pub fn nb_threads(&self) -> usize {
        self.nb_threads
    }
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

/// The shared data that may only be manipulated within critical sections
struct Critical {
    /// The index of the next instance that must be solved
    next: usize,
    /// The outcome of each instance, in the order of the batch. A slot
    /// remains empty until the corresponding instance has been solved.
    results: Vec<Option<Result<isize>>>,
}

/// The workload a thread can get from the shared state
enum WorkLoad {
    /// There is no work left to be done: you can safely terminate
    Complete,
    /// The index of the instance to solve
    WorkItem { index: usize },
}

/// This is the structure implementing a multi-threaded batch solver. It
/// wraps a single-instance solver and applies it to every instance of a
/// batch. The results are returned in the order of the batch and are the
/// very same as the ones the wrapped solver would return sequentially.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let batch = vec![
///     Instance::new(vec![Item::new(2, 3), Item::new(3, 4)], 5),
///     Instance::new(vec![Item::new(2, 3), Item::new(3, -4)], 5),
///     Instance::new(vec![], 5),
/// ];
/// let solver  = BatchSolver::new(ZeroOneSolver::default()).with_nb_threads(2);
/// let results = solver.solve_all(&batch);
/// assert_eq!(Ok(7), results[0]);
/// assert!(results[1].is_err());
/// assert_eq!(Ok(0), results[2]);
/// ```
#[derive(Debug, Clone)]
pub struct BatchSolver<S> {
    solver: S,
    config: BatchConfig,
}

impl <S> BatchSolver<S>
where
    S: Solver + Sync,
    S::Item: Sync,
{
    pub fn new(solver: S) -> Self {
        Self::custom(solver, BatchConfig::default())
    }
    pub fn custom(solver: S, config: BatchConfig) -> Self {
        Self { solver, config }
    }
    /// Sets the number of threads used by the solver
    pub fn with_nb_threads(mut self, nb_threads: usize) -> Self {
        self.config.nb_threads = nb_threads;
        self
    }
    /// Returns the configuration of this solver
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Solves all the instances of the batch and returns their outcomes in
    /// the order of the batch.
    pub fn solve_all(&self, instances: &[Instance<S::Item>]) -> Vec<Result<isize>> {
        let nb_threads = self.config.nb_threads.max(1).min(instances.len());
        let span = tracing::debug_span!("batch", instances = instances.len(), nb_threads);
        let _guard = span.enter();

        if nb_threads <= 1 || instances.len() < self.config.parallel_threshold {
            return instances.iter()
                .map(|i| self.solver.maximize(&i.items, i.capacity))
                .collect();
        }

        let critical = Mutex::new(Critical {
            next: 0,
            results: vec![None; instances.len()],
        });

        std::thread::scope(|s| {
            for worker in 0..nb_threads {
                let critical = &critical;
                s.spawn(move || {
                    let mut solved = 0_usize;
                    loop {
                        match Self::get_workload(critical, instances.len()) {
                            WorkLoad::Complete => break,
                            WorkLoad::WorkItem { index } => {
                                let instance = &instances[index];
                                let outcome  = self.solver.maximize(&instance.items, instance.capacity);
                                critical.lock().results[index] = Some(outcome);
                                solved += 1;
                            }
                        }
                    }
                    tracing::trace!(worker, solved, "worker done");
                });
            }
        });

        critical.into_inner().results.into_iter().flatten().collect()
    }

    /// Picks the next instance to solve (if any).
    fn get_workload(critical: &Mutex<Critical>, nb_instances: usize) -> WorkLoad {
        let mut critical = critical.lock();
        if critical.next >= nb_instances {
            WorkLoad::Complete
        } else {
            let index = critical.next;
            critical.next += 1;
            WorkLoad::WorkItem { index }
        }
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
