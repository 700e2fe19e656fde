//! Process (job) model.
//!
//! A process is one unit of work submitted to the simulator: it arrives at a
//! fixed clock value, needs a fixed amount of CPU time, and carries a static
//! scheduling priority. The scheduler fills in the outcome fields when the
//! process finishes.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// The input fields (`id`, `arrival_time`, `burst_time`, `priority`) are set
/// at construction and never change. The outcome fields (`completion_time`,
/// `turnaround_time`, `waiting_time`, `completed`) are zero/false until the
/// scheduler runs the process to completion, and are written exactly once.
///
/// # Time Representation
/// All times are integer units on a discrete clock starting at t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (positive).
    pub id: i32,
    /// Clock value at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required; consumed in one uninterrupted span.
    pub burst_time: i64,
    /// Scheduling priority. Lower value = scheduled first.
    pub priority: i32,
    /// Clock value when the process finished. Zero until completed.
    pub completion_time: i64,
    /// `completion_time - arrival_time`. Zero until completed.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`. Zero until completed.
    pub waiting_time: i64,
    /// Whether the scheduler has run this process to completion.
    pub completed: bool,
}

impl Process {
    /// Creates a new process with zeroed outcome fields.
    ///
    /// Field constraints (`id > 0`, `arrival_time >= 0`, `burst_time > 0`,
    /// `priority >= 0`) are enforced at admission by
    /// [`ProcessStore::add`](crate::store::ProcessStore::add), not here.
    pub fn new(id: i32, arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            completed: false,
        }
    }

    /// Whether the scheduler has finished this process.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Clock value at which the process started running.
    ///
    /// Returns `None` until the process has completed. Equal to
    /// `completion_time - burst_time` since execution is non-preemptive.
    pub fn start_time(&self) -> Option<i64> {
        self.completed
            .then(|| self.completion_time - self.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroes_outcome_fields() {
        let p = Process::new(1, 5, 3, 2);
        assert_eq!(p.id, 1);
        assert_eq!(p.arrival_time, 5);
        assert_eq!(p.burst_time, 3);
        assert_eq!(p.priority, 2);
        assert_eq!(p.completion_time, 0);
        assert_eq!(p.turnaround_time, 0);
        assert_eq!(p.waiting_time, 0);
        assert!(!p.is_completed());
    }

    #[test]
    fn test_start_time_requires_completion() {
        let mut p = Process::new(1, 0, 4, 1);
        assert_eq!(p.start_time(), None);

        p.completion_time = 10;
        p.turnaround_time = 10;
        p.waiting_time = 6;
        p.completed = true;
        assert_eq!(p.start_time(), Some(6));
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Process::new(3, 2, 7, 0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
