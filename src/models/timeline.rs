//! Gantt timeline model.
//!
//! A timeline is the solution side of a simulation: the ordered list of CPU
//! intervals, one per completed process. Because scheduling is
//! non-preemptive and single-CPU, segments never overlap and appear in
//! execution order; gaps between them are CPU idle time.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};
use std::fmt;

/// One uninterrupted run of a process on the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that occupied the CPU.
    pub process_id: i32,
    /// Clock value at which the run started.
    pub start: i64,
    /// Clock value at which the run ended (exclusive).
    pub end: i64,
}

/// The Gantt timeline of a simulation: CPU segments in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in execution order.
    pub segments: Vec<Segment>,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(process_id: i32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Makespan: end of the last segment, or 0 if empty.
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Finds the segment for a given process.
    pub fn segment_for_process(&self, process_id: i32) -> Option<&Segment> {
        self.segments.iter().find(|s| s.process_id == process_id)
    }

    /// Total CPU busy time across all segments.
    pub fn total_busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Total CPU idle time: gaps before the first segment and between
    /// consecutive segments.
    pub fn total_idle_time(&self) -> i64 {
        self.makespan() - self.total_busy_time()
    }

    /// CPU utilization: busy time / makespan.
    ///
    /// Returns `None` for an empty timeline.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let makespan = self.makespan();
        if makespan <= 0 {
            return None;
        }
        Some(self.total_busy_time() as f64 / makespan as f64)
    }

    /// Whether the CPU never idles once the first segment has started.
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[1].start == pair[0].end)
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Renders the timeline as a one-line textual Gantt chart, idle gaps
/// included: `[ idle 0..5 ][ P1 5..7 ]`.
impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(empty)");
        }
        let mut clock = 0;
        for segment in &self.segments {
            if segment.start > clock {
                write!(f, "[ idle {}..{} ]", clock, segment.start)?;
            }
            write!(
                f,
                "[ P{} {}..{} ]",
                segment.process_id, segment.start, segment.end
            )?;
            clock = segment.end;
        }
        Ok(())
    }
}
