//! Aggregated schedule analysis result.
//!
//! The single object the engine hands outward. External layers serialize it
//! to their own document contracts and may blend `integration_risk_score`
//! with unrelated risk signals downstream.

use serde::{Deserialize, Serialize};

/// Final output of a schedule analysis run.
///
/// Both scores are bounded to [0, 1] by construction (weighted averages of
/// already-bounded sub-scores).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleAnalysisResult {
    /// Task ids forming the critical path, in dependency order.
    pub critical_path: Vec<String>,
    /// Minimum project duration in days.
    pub project_duration_days: f64,
    /// How well the schedule absorbs delays (1 = very resilient).
    pub schedule_resilience_score: f64,
    /// How much delay risk the schedule exports downstream (1 = severe).
    pub integration_risk_score: f64,
    /// Whole-day buffer covering the worst critical-path risk.
    pub recommended_buffer_days: u32,
}
