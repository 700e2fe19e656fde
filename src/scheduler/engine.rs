//! Non-preemptive priority scheduling engine.
//!
//! # Algorithm
//!
//! 1. Start a discrete clock at t=0.
//! 2. Among arrived, unfinished processes, select the lowest priority
//!    number. The scan uses strictly-less comparison in insertion order, so
//!    the earliest-inserted process wins ties.
//! 3. If nothing has arrived, jump the clock to the next arrival.
//! 4. Run the selected process to completion atomically, write its metrics,
//!    and notify the observer.
//! 5. Repeat until every process has completed, then average the metrics.
//!
//! # Complexity
//! O(n) scan per decision, n completion events → O(n²). Fine at the tens of
//! processes this simulator targets.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Process, Segment, Timeline};
use crate::store::ProcessStore;

/// Why a simulation request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulateError {
    /// The store holds no processes.
    NoProcesses,
    /// The store already holds completed records from a previous run.
    AlreadyCompleted,
}

impl fmt::Display for SimulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProcesses => write!(f, "no processes to simulate"),
            Self::AlreadyCompleted => write!(f, "store already holds a completed simulation"),
        }
    }
}

impl std::error::Error for SimulateError {}

/// Notification emitted each time a process finishes.
///
/// `(process_id, start_time, completion_time)` keys a Gantt redraw;
/// the metric fields drive incremental per-process reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// Process that finished.
    pub process_id: i32,
    /// Clock value at which it started running.
    pub start_time: i64,
    /// Clock value at which it finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

/// Final result of a simulation.
///
/// Per-process outcomes live on the store's records; this carries the
/// aggregates and the timeline.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Mean turnaround time across all processes.
    pub average_turnaround_time: f64,
    /// Mean waiting time across all processes.
    pub average_waiting_time: f64,
    /// Gantt timeline in execution order.
    pub timeline: Timeline,
}

/// One scheduling decision.
enum Decision {
    /// Run the process at this index to completion.
    Run(usize),
    /// Nothing has arrived; jump the clock to this time.
    IdleUntil(i64),
}

/// Non-preemptive priority scheduler.
///
/// Stateless; each [`run`](Self::run) call consumes one store's worth of
/// processes and writes their outcome fields in place.
///
/// # Example
///
/// ```
/// use prio_sim::models::Process;
/// use prio_sim::scheduler::PriorityScheduler;
/// use prio_sim::store::ProcessStore;
///
/// let mut store = ProcessStore::new();
/// store.add(Process::new(1, 0, 5, 1)).unwrap();
///
/// let result = PriorityScheduler::new().run(&mut store).unwrap();
/// assert!((result.average_turnaround_time - 5.0).abs() < 1e-10);
/// assert!(store.get(1).unwrap().completed);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl PriorityScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs the simulation to completion.
    ///
    /// Fails with [`SimulateError::NoProcesses`] on an empty store and with
    /// [`SimulateError::AlreadyCompleted`] if any record was completed by a
    /// previous run; in both cases the store is unchanged.
    pub fn run(&self, store: &mut ProcessStore) -> Result<SimulationResult, SimulateError> {
        self.run_with_observer(store, |_| {})
    }

    /// Runs the simulation, invoking `observer` after each completion.
    ///
    /// The observer is called synchronously, once per process, in completion
    /// order. The loop's progress does not depend on it.
    pub fn run_with_observer<F>(
        &self,
        store: &mut ProcessStore,
        mut observer: F,
    ) -> Result<SimulationResult, SimulateError>
    where
        F: FnMut(&CompletionEvent),
    {
        if store.is_empty() {
            return Err(SimulateError::NoProcesses);
        }
        if store.iter().any(|p| p.completed) {
            return Err(SimulateError::AlreadyCompleted);
        }

        let processes = store.processes_mut();
        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;

        while let Some(decision) = next_decision(processes, clock) {
            match decision {
                Decision::IdleUntil(next_arrival) => {
                    debug!("cpu idle {clock}..{next_arrival}");
                    clock = next_arrival;
                }
                Decision::Run(idx) => {
                    let process = &mut processes[idx];
                    let start = clock;
                    clock += process.burst_time;
                    process.completion_time = clock;
                    process.turnaround_time = process.completion_time - process.arrival_time;
                    process.waiting_time = process.turnaround_time - process.burst_time;
                    process.completed = true;

                    total_turnaround += process.turnaround_time;
                    total_waiting += process.waiting_time;
                    timeline.add_segment(Segment::new(process.id, start, clock));
                    debug!(
                        "process {} (priority {}) ran {start}..{clock}",
                        process.id, process.priority
                    );

                    observer(&CompletionEvent {
                        process_id: process.id,
                        start_time: start,
                        completion_time: process.completion_time,
                        turnaround_time: process.turnaround_time,
                        waiting_time: process.waiting_time,
                    });
                }
            }
        }

        let count = processes.len() as f64;
        Ok(SimulationResult {
            average_turnaround_time: total_turnaround as f64 / count,
            average_waiting_time: total_waiting as f64 / count,
            timeline,
        })
    }
}

/// Scans for the next decision at the given clock value.
///
/// Returns `None` once every process has completed. A single pass tracks
/// both the best eligible candidate (strictly-less comparison keeps the
/// earliest-inserted process on priority ties) and the earliest arrival
/// among unfinished processes, which becomes the idle jump target when
/// nothing is eligible.
fn next_decision(processes: &[Process], clock: i64) -> Option<Decision> {
    let mut best: Option<(usize, i32)> = None;
    let mut next_arrival: Option<i64> = None;

    for (idx, process) in processes.iter().enumerate() {
        if process.completed {
            continue;
        }
        if process.arrival_time <= clock {
            match best {
                Some((_, best_priority)) if process.priority >= best_priority => {}
                _ => best = Some((idx, process.priority)),
            }
        } else {
            next_arrival = Some(match next_arrival {
                Some(t) => t.min(process.arrival_time),
                None => process.arrival_time,
            });
        }
    }

    match (best, next_arrival) {
        (Some((idx, _)), _) => Some(Decision::Run(idx)),
        (None, Some(arrival)) => Some(Decision::IdleUntil(arrival)),
        (None, None) => None,
    }
}
