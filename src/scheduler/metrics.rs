//! Aggregate simulation metrics (KPIs).
//!
//! Computes summary statistics from a finished simulation's store and
//! timeline, for tabular display next to the per-process records.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Max Waiting | largest single wait |
//! | Makespan | end of the last CPU segment |
//! | Total Idle | makespan minus CPU busy time |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | completed processes per time unit over the makespan |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use crate::models::Timeline;
use crate::store::ProcessStore;

/// Simulation performance indicators.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Mean turnaround time across completed processes.
    pub average_turnaround_time: f64,
    /// Mean waiting time across completed processes.
    pub average_waiting_time: f64,
    /// Largest single waiting time.
    pub max_waiting_time: i64,
    /// End of the last CPU segment.
    pub makespan: i64,
    /// CPU idle time before and between segments.
    pub total_idle_time: i64,
    /// Busy time / makespan (0.0 for an empty timeline).
    pub cpu_utilization: f64,
    /// Completed processes per time unit over the makespan.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a finished simulation.
    ///
    /// Only completed records contribute; on a store that has not been run
    /// yet every metric is zero.
    pub fn calculate(store: &ProcessStore, timeline: &Timeline) -> Self {
        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut max_waiting: i64 = 0;
        let mut completed: usize = 0;

        for process in store.iter().filter(|p| p.completed) {
            completed += 1;
            total_turnaround += process.turnaround_time;
            total_waiting += process.waiting_time;
            max_waiting = max_waiting.max(process.waiting_time);
        }

        let makespan = timeline.makespan();
        let (average_turnaround_time, average_waiting_time) = if completed == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / completed as f64,
                total_waiting as f64 / completed as f64,
            )
        };
        let throughput = if makespan == 0 {
            0.0
        } else {
            completed as f64 / makespan as f64
        };

        Self {
            average_turnaround_time,
            average_waiting_time,
            max_waiting_time: max_waiting,
            makespan,
            total_idle_time: timeline.total_idle_time(),
            cpu_utilization: timeline.cpu_utilization().unwrap_or(0.0),
            throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::PriorityScheduler;

    fn run_store(entries: &[(i32, i64, i64, i32)]) -> (ProcessStore, Timeline) {
        let mut store = ProcessStore::new();
        for &(id, at, bt, priority) in entries {
            store.add(Process::new(id, at, bt, priority)).unwrap();
        }
        let result = PriorityScheduler::new().run(&mut store).unwrap();
        (store, result.timeline)
    }

    #[test]
    fn test_kpi_basic() {
        // P2 runs 0..3, P1 runs 3..7
        let (store, timeline) = run_store(&[(1, 0, 4, 2), (2, 0, 3, 1)]);
        let kpi = SimulationKpi::calculate(&store, &timeline);

        assert!((kpi.average_turnaround_time - 5.0).abs() < 1e-10);
        assert!((kpi.average_waiting_time - 1.5).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 3);
        assert_eq!(kpi.makespan, 7);
        assert_eq!(kpi.total_idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 2.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_with_idle() {
        // P1 runs 0..2, gap, P2 runs 10..11
        let (store, timeline) = run_store(&[(1, 0, 2, 1), (2, 10, 1, 1)]);
        let kpi = SimulationKpi::calculate(&store, &timeline);

        assert_eq!(kpi.makespan, 11);
        assert_eq!(kpi.total_idle_time, 8);
        assert!((kpi.cpu_utilization - 3.0 / 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_unrun_store_is_all_zero() {
        let mut store = ProcessStore::new();
        store.add(Process::new(1, 0, 5, 1)).unwrap();

        let kpi = SimulationKpi::calculate(&store, &Timeline::new());
        assert!((kpi.average_turnaround_time - 0.0).abs() < 1e-10);
        assert!((kpi.average_waiting_time - 0.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 0);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }
}
