//! Per-task delay-risk estimation.
//!
//! A pure function of task attributes — no graph access, no history. Every
//! coefficient is a fixed, documented constant so the estimate is exactly
//! reproducible and explainable.

use std::collections::HashMap;

use crate::models::{ConfidenceLevel, RiskFactors, Task};

/// Baseline probability that any task slips.
pub const BASE_DELAY_PROBABILITY: f64 = 0.15;

/// Additive probability increment for weather-dependent tasks.
pub const WEATHER_RISK_INCREMENT: f64 = 0.20;

/// Additive probability increment for resource-constrained tasks.
pub const RESOURCE_RISK_INCREMENT: f64 = 0.15;

/// Fraction of a task's duration expected to slip per unit of delay
/// probability.
pub const DELAY_SEVERITY_COEFFICIENT: f64 = 0.5;

/// Worst-case delay as a multiple of the expected delay.
pub const WORST_CASE_MULTIPLIER: f64 = 2.5;

/// Stateless estimator of per-task delay risk.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskFactorEstimator;

impl RiskFactorEstimator {
    /// Estimates delay-risk factors for one task.
    ///
    /// The combined probability starts from [`BASE_DELAY_PROBABILITY`],
    /// scales multiplicatively with `complexity_factor`, adds
    /// [`WEATHER_RISK_INCREMENT`] and [`RESOURCE_RISK_INCREMENT`] for the
    /// corresponding flags, and clamps to [0, 1]. Expected delay is
    /// probability x duration x [`DELAY_SEVERITY_COEFFICIENT`]; worst case
    /// is expected x [`WORST_CASE_MULTIPLIER`].
    ///
    /// Confidence mapping (exact, by flag count): no flags = `High`, one
    /// flag = `Medium`, both flags = `Low`.
    pub fn estimate(task: &Task) -> RiskFactors {
        let mut probability = BASE_DELAY_PROBABILITY * task.complexity_factor;
        if task.weather_dependency {
            probability += WEATHER_RISK_INCREMENT;
        }
        if task.resource_constrained {
            probability += RESOURCE_RISK_INCREMENT;
        }
        let combined_delay_probability = probability.clamp(0.0, 1.0);

        let expected_delay_days =
            combined_delay_probability * task.duration_days * DELAY_SEVERITY_COEFFICIENT;
        let worst_case_delay_days = expected_delay_days * WORST_CASE_MULTIPLIER;

        let confidence_level = match (task.weather_dependency, task.resource_constrained) {
            (false, false) => ConfidenceLevel::High,
            (true, true) => ConfidenceLevel::Low,
            _ => ConfidenceLevel::Medium,
        };

        RiskFactors {
            combined_delay_probability,
            expected_delay_days,
            worst_case_delay_days,
            confidence_level,
        }
    }

    /// Estimates risk factors for every task, keyed by task id.
    pub fn estimate_all<'a>(
        tasks: impl IntoIterator<Item = &'a Task>,
    ) -> HashMap<String, RiskFactors> {
        tasks
            .into_iter()
            .map(|t| (t.id.clone(), Self::estimate(t)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_task_uses_base_probability() {
        let task = Task::new("T1").with_duration_days(10.0);
        let risk = RiskFactorEstimator::estimate(&task);

        assert!((risk.combined_delay_probability - 0.15).abs() < 1e-12);
        // 0.15 * 10 * 0.5 = 0.75
        assert!((risk.expected_delay_days - 0.75).abs() < 1e-12);
        // 0.75 * 2.5 = 1.875
        assert!((risk.worst_case_delay_days - 1.875).abs() < 1e-12);
        assert_eq!(risk.confidence_level, ConfidenceLevel::High);
    }

    #[test]
    fn test_complexity_scales_multiplicatively() {
        let simple = Task::new("S").with_duration_days(4.0).with_complexity_factor(0.5);
        let complex = Task::new("C").with_duration_days(4.0).with_complexity_factor(2.0);

        let low = RiskFactorEstimator::estimate(&simple);
        let high = RiskFactorEstimator::estimate(&complex);

        assert!((low.combined_delay_probability - 0.075).abs() < 1e-12);
        assert!((high.combined_delay_probability - 0.30).abs() < 1e-12);
        assert!(
            (high.combined_delay_probability / low.combined_delay_probability - 4.0).abs() < 1e-9
        );
    }

    #[test]
    fn test_flags_add_fixed_increments() {
        let weather = Task::new("W").with_duration_days(1.0).with_weather_dependency(true);
        let resource = Task::new("R").with_duration_days(1.0).with_resource_constraint(true);

        let w = RiskFactorEstimator::estimate(&weather);
        let r = RiskFactorEstimator::estimate(&resource);

        assert!((w.combined_delay_probability - 0.35).abs() < 1e-12);
        assert!((r.combined_delay_probability - 0.30).abs() < 1e-12);
    }

    #[test]
    fn test_probability_clamped_to_one() {
        let task = Task::new("T")
            .with_duration_days(2.0)
            .with_complexity_factor(2.0)
            .with_weather_dependency(true)
            .with_resource_constraint(true);
        let risk = RiskFactorEstimator::estimate(&task);

        // Maximum reachable: 0.15 * 2.0 + 0.20 + 0.15 = 0.65.
        assert!((risk.combined_delay_probability - 0.65).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&risk.combined_delay_probability));
    }

    #[test]
    fn test_worst_case_exceeds_expected() {
        let task = Task::new("T").with_duration_days(6.0).with_weather_dependency(true);
        let risk = RiskFactorEstimator::estimate(&task);
        assert!(risk.worst_case_delay_days > risk.expected_delay_days);
        assert!(
            (risk.worst_case_delay_days - risk.expected_delay_days * WORST_CASE_MULTIPLIER).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_confidence_mapping_is_exact() {
        let none = Task::new("A");
        let weather = Task::new("B").with_weather_dependency(true);
        let resource = Task::new("C").with_resource_constraint(true);
        let both = Task::new("D")
            .with_weather_dependency(true)
            .with_resource_constraint(true);

        assert_eq!(
            RiskFactorEstimator::estimate(&none).confidence_level,
            ConfidenceLevel::High
        );
        assert_eq!(
            RiskFactorEstimator::estimate(&weather).confidence_level,
            ConfidenceLevel::Medium
        );
        assert_eq!(
            RiskFactorEstimator::estimate(&resource).confidence_level,
            ConfidenceLevel::Medium
        );
        assert_eq!(
            RiskFactorEstimator::estimate(&both).confidence_level,
            ConfidenceLevel::Low
        );
    }

    #[test]
    fn test_zero_duration_has_zero_delay() {
        let task = Task::new("T").with_weather_dependency(true);
        let risk = RiskFactorEstimator::estimate(&task);
        assert_eq!(risk.expected_delay_days, 0.0);
        assert_eq!(risk.worst_case_delay_days, 0.0);
    }

    #[test]
    fn test_estimate_all_keys_by_id() {
        let tasks = vec![
            Task::new("A").with_duration_days(2.0),
            Task::new("B").with_duration_days(3.0),
        ];
        let map = RiskFactorEstimator::estimate_all(&tasks);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("A"));
        assert!(map.contains_key("B"));
    }
}
