//! Delay what-if scenario.
//!
//! A scenario records one injected delay and its computed cascade: which
//! downstream tasks absorb extra days and how much the project completion
//! moves. The explanation string is assembled from the same structured data
//! and carries no information of its own.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of simulating one injected delay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayScenario {
    /// Task where the delay is injected.
    pub task_id: String,
    /// Injected delay magnitude in days.
    pub delay_days: f64,
    /// Downstream task id -> additional delay days absorbed.
    pub affected_tasks: HashMap<String, f64>,
    /// Change in project completion, in days (>= 0).
    pub total_project_delay_days: f64,
    /// Human-readable summary derived from the fields above.
    pub explanation: String,
}

impl DelayScenario {
    /// Number of downstream tasks affected by the injected delay.
    pub fn affected_count(&self) -> usize {
        self.affected_tasks.len()
    }

    /// Whether the delay was fully absorbed before reaching project completion.
    pub fn is_fully_absorbed(&self) -> bool {
        self.total_project_delay_days == 0.0
    }
}
