//! Schedule-intelligence aggregation.
//!
//! Folds the CPM baseline, per-task risks, and the canonical scenario set
//! into the single [`ScheduleAnalysisResult`] that crosses the engine
//! boundary. Every weight is a fixed, documented constant; both scores are
//! weighted averages of sub-scores already bounded to [0, 1], so the
//! results are bounded by construction.

use std::collections::HashMap;

use crate::models::{CriticalPathResult, DelayScenario, RiskFactors, ScheduleAnalysisResult};

/// Weight of the slack sub-score in the resilience score; the inverse
/// critical-path risk sub-score carries the remainder.
pub const RESILIENCE_SLACK_WEIGHT: f64 = 0.5;

/// Weight of the worst-scenario delay ratio in the integration-risk score;
/// the critical-path mean delay probability carries the remainder.
pub const INTEGRATION_DELAY_WEIGHT: f64 = 0.6;

/// Produces the final, outward-facing analysis result.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntelligenceAggregator;

impl IntelligenceAggregator {
    /// Aggregates baseline timing, risks, and scenarios into one result.
    ///
    /// - `schedule_resilience_score`: [`RESILIENCE_SLACK_WEIGHT`] x the mean
    ///   non-critical float normalized by project duration (clamped), plus
    ///   the complement weight x (1 - mean critical-path delay probability).
    /// - `integration_risk_score`: [`INTEGRATION_DELAY_WEIGHT`] x the worst
    ///   scenario's project delay normalized by project duration (clamped),
    ///   plus the complement weight x the mean critical-path delay
    ///   probability.
    /// - `recommended_buffer_days`: ceiling of the largest
    ///   `worst_case_delay_days` among critical-path tasks.
    pub fn aggregate(
        baseline: &CriticalPathResult,
        risk_factors: &HashMap<String, RiskFactors>,
        scenarios: &[DelayScenario],
    ) -> ScheduleAnalysisResult {
        let critical_path_mean_probability =
            mean_critical_probability(baseline, risk_factors);

        let slack_score = slack_sub_score(baseline);
        let schedule_resilience_score = (RESILIENCE_SLACK_WEIGHT * slack_score
            + (1.0 - RESILIENCE_SLACK_WEIGHT) * (1.0 - critical_path_mean_probability))
            .clamp(0.0, 1.0);

        let worst_delay_ratio = worst_scenario_ratio(baseline, scenarios);
        let integration_risk_score = (INTEGRATION_DELAY_WEIGHT * worst_delay_ratio
            + (1.0 - INTEGRATION_DELAY_WEIGHT) * critical_path_mean_probability)
            .clamp(0.0, 1.0);

        let recommended_buffer_days = baseline
            .critical_path
            .iter()
            .filter_map(|id| risk_factors.get(id))
            .map(|r| r.worst_case_delay_days)
            .fold(0.0f64, f64::max)
            .ceil() as u32;

        ScheduleAnalysisResult {
            critical_path: baseline.critical_path.clone(),
            project_duration_days: baseline.project_duration_days,
            schedule_resilience_score,
            integration_risk_score,
            recommended_buffer_days,
        }
    }
}

/// Mean delay probability over critical-path tasks; 0 for an empty path.
fn mean_critical_probability(
    baseline: &CriticalPathResult,
    risk_factors: &HashMap<String, RiskFactors>,
) -> f64 {
    let probabilities: Vec<f64> = baseline
        .critical_path
        .iter()
        .filter_map(|id| risk_factors.get(id))
        .map(|r| r.combined_delay_probability)
        .collect();
    if probabilities.is_empty() {
        0.0
    } else {
        probabilities.iter().sum::<f64>() / probabilities.len() as f64
    }
}

/// Mean non-critical float normalized by project duration, clamped to
/// [0, 1]. An empty schedule is maximally resilient (nothing to delay); a
/// schedule whose every task is critical has no slack at all.
fn slack_sub_score(baseline: &CriticalPathResult) -> f64 {
    if baseline.timings.is_empty() {
        return 1.0;
    }
    let floats: Vec<f64> = baseline
        .timings
        .values()
        .filter(|t| !t.is_critical)
        .map(|t| t.total_float)
        .collect();
    if floats.is_empty() {
        return 0.0;
    }
    if baseline.project_duration_days <= 0.0 {
        return 0.0;
    }
    let mean = floats.iter().sum::<f64>() / floats.len() as f64;
    (mean / baseline.project_duration_days).clamp(0.0, 1.0)
}

/// Worst scenario delay as a fraction of the project duration, clamped to
/// [0, 1]; 0 when there are no scenarios or no duration to compare against.
fn worst_scenario_ratio(baseline: &CriticalPathResult, scenarios: &[DelayScenario]) -> f64 {
    if scenarios.is_empty() || baseline.project_duration_days <= 0.0 {
        return 0.0;
    }
    let worst = scenarios
        .iter()
        .map(|s| s.total_project_delay_days)
        .fold(0.0f64, f64::max);
    (worst / baseline.project_duration_days).clamp(0.0, 1.0)
}
