//! Schedule-analysis engine.
//!
//! The computation pipeline over a validated [`TaskGraph`]:
//!
//! 1. [`CriticalPathCalculator`] — CPM forward/backward pass, float, and
//!    the deterministic critical path.
//! 2. [`RiskFactorEstimator`] — per-task delay risk from task attributes.
//! 3. [`DelayPropagationEngine`] / [`ScenarioGenerator`] — injected-delay
//!    cascades and the canonical what-if set.
//! 4. [`IntelligenceAggregator`] — the single outward-facing result.
//!
//! Data flows strictly one direction; every stage is pure and synchronous,
//! holds no state between calls, and is safe to invoke from any thread.
//!
//! [`TaskGraph`]: crate::graph::TaskGraph

pub mod aggregate;
pub mod critical_path;
pub mod propagation;
pub mod risk;
pub mod scenario;

pub use aggregate::IntelligenceAggregator;
pub use critical_path::{CriticalPathCalculator, FLOAT_EPSILON};
pub use propagation::DelayPropagationEngine;
pub use risk::RiskFactorEstimator;
pub use scenario::ScenarioGenerator;

use crate::error::AnalysisError;
use crate::graph::TaskGraph;
use crate::models::{ScheduleAnalysisResult, Task, TaskDependency};

/// Runs the full analysis pipeline on plain task and dependency records.
///
/// Convenience entry point for boundary callers: builds and validates the
/// graph, computes the CPM baseline, estimates risks, generates the
/// canonical scenarios, and aggregates the result. Fails before any
/// computation if the input is structurally invalid.
pub fn analyze(
    tasks: Vec<Task>,
    dependencies: Vec<TaskDependency>,
) -> Result<ScheduleAnalysisResult, AnalysisError> {
    let graph = TaskGraph::build(tasks, dependencies)?;
    let baseline = CriticalPathCalculator::calculate(&graph);
    let risk_factors = RiskFactorEstimator::estimate_all(graph.tasks());
    let scenarios = ScenarioGenerator::generate(&graph, &baseline, &risk_factors)?;
    Ok(IntelligenceAggregator::aggregate(
        &baseline,
        &risk_factors,
        &scenarios,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DependencyType;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_analyze_end_to_end() {
        let tasks = vec![
            Task::new("T1").with_name("Site prep").with_duration_days(3.0),
            Task::new("T2")
                .with_name("Foundation")
                .with_duration_days(7.0)
                .with_weather_dependency(true),
            Task::new("T3")
                .with_name("Framing")
                .with_duration_days(10.0)
                .with_complexity_factor(1.3),
            Task::new("T4")
                .with_name("Inspection")
                .with_duration_days(1.0),
        ];
        let dependencies = vec![
            TaskDependency::new("D1", "T1", "T2"),
            TaskDependency::new("D2", "T2", "T3"),
            TaskDependency::new("D3", "T3", "T4"),
        ];

        let result = analyze(tasks, dependencies).unwrap();

        assert_eq!(result.critical_path, vec!["T1", "T2", "T3", "T4"]);
        assert_eq!(result.project_duration_days, 21.0);
        assert!((0.0..=1.0).contains(&result.schedule_resilience_score));
        assert!((0.0..=1.0).contains(&result.integration_risk_score));
        assert!(result.recommended_buffer_days > 0);
    }

    #[test]
    fn test_analyze_surfaces_validation_errors() {
        let err = analyze(
            vec![
                Task::new("A").with_duration_days(1.0),
                Task::new("B").with_duration_days(1.0),
            ],
            vec![
                TaskDependency::new("D1", "A", "B"),
                TaskDependency::new("D2", "B", "A"),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::CycleDetected { .. }));
    }

    /// Builds a random small DAG: edges only go from lower to higher task
    /// index, so the input is always acyclic and `analyze` must succeed.
    fn random_dag(rng: &mut SmallRng) -> (Vec<Task>, Vec<TaskDependency>) {
        let task_count = rng.random_range(0..12);
        let tasks: Vec<Task> = (0..task_count)
            .map(|i| {
                Task::new(format!("T{i:02}"))
                    .with_duration_days(rng.random_range(0.0..10.0))
                    .with_complexity_factor(rng.random_range(0.5..=2.0))
                    .with_weather_dependency(rng.random_bool(0.3))
                    .with_resource_constraint(rng.random_bool(0.3))
            })
            .collect();

        let kinds = [
            DependencyType::FinishToStart,
            DependencyType::StartToStart,
            DependencyType::FinishToFinish,
            DependencyType::StartToFinish,
        ];
        let mut dependencies = Vec::new();
        for i in 0..task_count {
            for j in (i + 1)..task_count {
                if rng.random_bool(0.25) {
                    dependencies.push(
                        TaskDependency::new(
                            format!("D{}", dependencies.len()),
                            format!("T{i:02}"),
                            format!("T{j:02}"),
                        )
                        .with_type(kinds[rng.random_range(0..kinds.len())])
                        .with_lag_days(rng.random_range(-3.0..5.0)),
                    );
                }
            }
        }
        (tasks, dependencies)
    }

    #[test]
    fn test_scores_bounded_over_random_dags() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let (tasks, dependencies) = random_dag(&mut rng);
            let result = analyze(tasks, dependencies).unwrap();

            assert!(
                (0.0..=1.0).contains(&result.schedule_resilience_score),
                "resilience out of bounds: {}",
                result.schedule_resilience_score
            );
            assert!(
                (0.0..=1.0).contains(&result.integration_risk_score),
                "integration risk out of bounds: {}",
                result.integration_risk_score
            );
            assert!(result.project_duration_days >= 0.0);
        }
    }

    #[test]
    fn test_analysis_is_deterministic_across_runs() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (tasks, dependencies) = random_dag(&mut rng);

        let first = analyze(tasks.clone(), dependencies.clone()).unwrap();
        let second = analyze(tasks, dependencies).unwrap();
        assert_eq!(first, second);
    }
}
