//! Non-preemptive priority CPU scheduling simulator.
//!
//! Simulates a single CPU running a static batch of processes under a
//! priority discipline: among arrived, unfinished processes the one with the
//! lowest priority number runs next, and always runs to completion. The
//! simulator computes completion, turnaround, and waiting time per process,
//! aggregate averages, and the Gantt timeline of CPU intervals.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Timeline`, `Segment`
//! - **`store`**: `ProcessStore` with admission validation
//! - **`scheduler`**: `PriorityScheduler`, `CompletionEvent`,
//!   `SimulationResult`, `SimulationKpi`
//!
//! # Usage
//!
//! ```
//! use prio_sim::models::Process;
//! use prio_sim::scheduler::PriorityScheduler;
//! use prio_sim::store::ProcessStore;
//!
//! let mut store = ProcessStore::new();
//! store.add(Process::new(1, 0, 4, 2)).unwrap();
//! store.add(Process::new(2, 0, 3, 1)).unwrap();
//!
//! let result = PriorityScheduler::new().run(&mut store).unwrap();
//! assert_eq!(result.timeline.makespan(), 7);
//! assert!((result.average_waiting_time - 1.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod scheduler;
pub mod store;
