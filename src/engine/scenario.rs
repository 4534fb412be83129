//! Canonical what-if scenario generation.
//!
//! Produces the fixed scenario set downstream scoring consumes: one
//! injected-delay simulation per critical-path task, sized by that task's
//! expected delay, in critical-path order.

use std::collections::HashMap;

use crate::engine::propagation::DelayPropagationEngine;
use crate::error::AnalysisError;
use crate::graph::TaskGraph;
use crate::models::{CriticalPathResult, DelayScenario, RiskFactors};

/// Generates the canonical scenario set for a schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioGenerator;

impl ScenarioGenerator {
    /// One scenario per critical-path task, using its estimated expected
    /// delay as the injected magnitude. Output order follows the critical
    /// path. An empty critical path yields an empty list.
    ///
    /// # Errors
    /// [`AnalysisError::UnknownTaskReference`] if a critical-path task is
    /// missing from `risk_factors`.
    pub fn generate(
        graph: &TaskGraph,
        baseline: &CriticalPathResult,
        risk_factors: &HashMap<String, RiskFactors>,
    ) -> Result<Vec<DelayScenario>, AnalysisError> {
        let mut scenarios = Vec::with_capacity(baseline.critical_path.len());
        for task_id in &baseline.critical_path {
            let risk = risk_factors
                .get(task_id)
                .ok_or_else(|| AnalysisError::unknown_task(task_id))?;
            scenarios.push(DelayPropagationEngine::simulate(
                graph,
                baseline,
                task_id,
                risk.expected_delay_days,
            )?);
        }
        Ok(scenarios)
    }
}
