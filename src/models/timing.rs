//! CPM timing results.
//!
//! Output types of the forward/backward pass: per-task earliest/latest
//! times, total float, and the deterministic critical path.
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-task timing computed by the forward and backward passes.
///
/// All values are in days relative to project start (t = 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingResult {
    /// Earliest the task can start given its predecessors.
    pub earliest_start: f64,
    /// Earliest the task can finish.
    pub earliest_finish: f64,
    /// Latest the task can start without delaying the project.
    pub latest_start: f64,
    /// Latest the task can finish without delaying the project.
    pub latest_finish: f64,
    /// Total float: `latest_start - earliest_start`.
    pub total_float: f64,
    /// Whether total float is within epsilon of zero.
    pub is_critical: bool,
}

/// Result of a full CPM calculation over a task graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalPathResult {
    /// Task ids forming the critical path, in dependency order.
    pub critical_path: Vec<String>,
    /// Minimum project duration: max earliest finish over terminal tasks.
    pub project_duration_days: f64,
    /// Per-task timing, keyed by task id.
    pub timings: HashMap<String, TimingResult>,
}

impl CriticalPathResult {
    /// Timing for a single task, if present.
    pub fn timing(&self, task_id: &str) -> Option<&TimingResult> {
        self.timings.get(task_id)
    }

    /// Whether the given task sits on the critical path.
    pub fn is_on_critical_path(&self, task_id: &str) -> bool {
        self.critical_path.iter().any(|id| id == task_id)
    }

    /// Number of tasks on the critical path.
    pub fn critical_path_len(&self) -> usize {
        self.critical_path.len()
    }
}
