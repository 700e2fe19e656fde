//! Process store with admission validation.
//!
//! Holds the ordered collection of submitted processes for one simulation
//! session. Admission checks field constraints and id uniqueness; a rejected
//! candidate leaves the store unchanged. Insertion order is preserved because
//! it is the scheduler's tie-break order.
//!
//! Only the scheduler mutates stored records; callers get read access.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Why a candidate process was rejected at admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidProcessKind {
    /// `id` must be positive.
    NonPositiveId,
    /// `arrival_time` must be non-negative.
    NegativeArrivalTime,
    /// `burst_time` must be positive.
    NonPositiveBurstTime,
    /// `priority` must be non-negative.
    NegativePriority,
    /// A process with the same `id` is already stored.
    DuplicateId,
}

/// An admission error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidProcess {
    /// Error category.
    pub kind: InvalidProcessKind,
    /// Human-readable description.
    pub message: String,
}

impl InvalidProcess {
    fn new(kind: InvalidProcessKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for InvalidProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid process: {}", self.message)
    }
}

impl std::error::Error for InvalidProcess {}

/// Ordered collection of validated processes for one simulation session.
///
/// # Example
///
/// ```
/// use prio_sim::models::Process;
/// use prio_sim::store::ProcessStore;
///
/// let mut store = ProcessStore::new();
/// store.add(Process::new(1, 0, 5, 1)).unwrap();
/// assert_eq!(store.len(), 1);
/// assert!(store.add(Process::new(0, 0, 5, 1)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessStore {
    processes: Vec<Process>,
}

impl ProcessStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a process.
    ///
    /// Checks:
    /// 1. `id > 0`
    /// 2. `arrival_time >= 0`
    /// 3. `burst_time > 0`
    /// 4. `priority >= 0`
    /// 5. `id` not already stored
    ///
    /// On failure the store is left unchanged. Outcome fields of the
    /// candidate are reset regardless of what the caller put there.
    pub fn add(&mut self, candidate: Process) -> Result<(), InvalidProcess> {
        if candidate.id <= 0 {
            return Err(InvalidProcess::new(
                InvalidProcessKind::NonPositiveId,
                format!("id must be positive, got {}", candidate.id),
            ));
        }
        if candidate.arrival_time < 0 {
            return Err(InvalidProcess::new(
                InvalidProcessKind::NegativeArrivalTime,
                format!(
                    "arrival time must be non-negative, got {}",
                    candidate.arrival_time
                ),
            ));
        }
        if candidate.burst_time <= 0 {
            return Err(InvalidProcess::new(
                InvalidProcessKind::NonPositiveBurstTime,
                format!("burst time must be positive, got {}", candidate.burst_time),
            ));
        }
        if candidate.priority < 0 {
            return Err(InvalidProcess::new(
                InvalidProcessKind::NegativePriority,
                format!("priority must be non-negative, got {}", candidate.priority),
            ));
        }
        if self.processes.iter().any(|p| p.id == candidate.id) {
            return Err(InvalidProcess::new(
                InvalidProcessKind::DuplicateId,
                format!("duplicate process id: {}", candidate.id),
            ));
        }

        self.processes.push(Process::new(
            candidate.id,
            candidate.arrival_time,
            candidate.burst_time,
            candidate.priority,
        ));
        Ok(())
    }

    /// The stored processes in insertion order, completed records included.
    pub fn all(&self) -> &[Process] {
        &self.processes
    }

    /// Finds a process by id.
    pub fn get(&self, id: i32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Iterates over the stored processes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Number of stored processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether no process has been added.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Whether every stored process id is unique.
    ///
    /// Always true for a store populated through [`add`](Self::add); kept as
    /// a cheap integrity check for tests and debug assertions.
    pub fn ids_unique(&self) -> bool {
        let mut seen = HashSet::new();
        self.processes.iter().all(|p| seen.insert(p.id))
    }

    /// Mutable access for the scheduler. The scheduler is the only writer of
    /// outcome fields.
    pub(crate) fn processes_mut(&mut self) -> &mut [Process] {
        &mut self.processes
    }
}
