//! Per-task delay-risk factors.
//!
//! Output of the risk estimator: delay probability, expected and worst-case
//! delay magnitude, and a confidence grade. Derived solely from task
//! attributes — stateless and recomputable, with no graph access.

use serde::{Deserialize, Serialize};

/// Confidence grade of a risk estimate.
///
/// Confidence drops as external unknowns (weather, resource contention)
/// enter the estimate:
/// - `High`: neither flag set — the estimate is driven by complexity alone.
/// - `Medium`: exactly one flag set.
/// - `Low`: both flags set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

/// Delay-risk factors for a single task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Probability the task slips, in [0, 1].
    pub combined_delay_probability: f64,
    /// Expected slip magnitude in days (>= 0).
    pub expected_delay_days: f64,
    /// Worst-case slip magnitude in days (>= expected).
    pub worst_case_delay_days: f64,
    /// How much external uncertainty feeds the estimate.
    pub confidence_level: ConfidenceLevel,
}
