//! Delay-propagation simulation.
//!
//! Injects a delay at one task and walks the cascade through the dependency
//! DAG. Only FS and SS edges carry delay (they are the relations whose
//! successor start depends on the perturbed task), positive lag acts as a
//! buffer that absorbs transmitted delay, and a task fed by several
//! perturbed paths takes the maximum propagated delay rather than the sum.
//! The project-level effect is re-derived from terminal-task finishes, so
//! float on parallel paths can shrink the total below the injected amount.

use std::collections::{HashMap, VecDeque};

use crate::engine::critical_path::FLOAT_EPSILON;
use crate::error::AnalysisError;
use crate::graph::TaskGraph;
use crate::models::{CriticalPathResult, DelayScenario, DependencyType};

/// Simulates how one injected delay ripples through the schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayPropagationEngine;

impl DelayPropagationEngine {
    /// Simulates injecting `delay_days` at `task_id`.
    ///
    /// The injected delay lands on the task's finish. Breadth-first over FS
    /// and SS edges, each edge transmits
    /// `max(0, incoming - max(lag_days, 0))` — a positive lag is a buffer
    /// and absorbs delay, a negative lag transmits in full. SS edges leaving
    /// the injection point transmit nothing, because the origin's start does
    /// not move.
    ///
    /// # Errors
    /// - [`AnalysisError::UnknownTaskReference`] if `task_id` is not in the
    ///   graph.
    /// - [`AnalysisError::InvalidDependency`] if `delay_days` is negative or
    ///   not finite.
    pub fn simulate(
        graph: &TaskGraph,
        baseline: &CriticalPathResult,
        task_id: &str,
        delay_days: f64,
    ) -> Result<DelayScenario, AnalysisError> {
        let origin = graph
            .task_index(task_id)
            .ok_or_else(|| AnalysisError::unknown_task(task_id))?;
        if !delay_days.is_finite() || delay_days < 0.0 {
            return Err(AnalysisError::invalid(
                task_id,
                "injected delay_days must be finite and >= 0",
            ));
        }

        // Propagated delay per task index; the origin carries the full
        // injected amount on its finish.
        let mut delays: HashMap<usize, f64> = HashMap::new();
        delays.insert(origin, delay_days);

        let mut queue = VecDeque::new();
        queue.push_back(origin);

        while let Some(current) = queue.pop_front() {
            let incoming = delays[&current];
            for edge in graph.successor_edges(current) {
                let transmits_start_shift = match edge.kind {
                    DependencyType::FinishToStart => true,
                    // The origin's start is unchanged; only downstream
                    // tasks shift as a whole.
                    DependencyType::StartToStart => current != origin,
                    DependencyType::FinishToFinish | DependencyType::StartToFinish => false,
                };
                if !transmits_start_shift {
                    continue;
                }

                let transmitted = (incoming - edge.lag_days.max(0.0)).max(0.0);
                if transmitted <= FLOAT_EPSILON {
                    continue;
                }
                let succ = edge.successor;
                let known = delays.get(&succ).copied().unwrap_or(0.0);
                if transmitted > known {
                    delays.insert(succ, transmitted);
                    queue.push_back(succ);
                }
            }
        }

        // New completion: every terminal task's finish shifts by its
        // propagated delay; the project delta is re-derived, never assumed
        // equal to the injection.
        let new_completion = graph
            .terminal_tasks()
            .map(|i| {
                let id = &graph.task_at(i).id;
                let finish = baseline.timings.get(id).map_or(0.0, |t| t.earliest_finish);
                finish + delays.get(&i).copied().unwrap_or(0.0)
            })
            .fold(0.0f64, f64::max);
        let total_project_delay_days =
            (new_completion - baseline.project_duration_days).max(0.0);

        let affected_tasks: HashMap<String, f64> = delays
            .iter()
            .filter(|&(&i, _)| i != origin)
            .map(|(&i, &d)| (graph.task_at(i).id.clone(), d))
            .collect();

        let explanation =
            build_explanation(graph, task_id, delay_days, &affected_tasks, total_project_delay_days);

        Ok(DelayScenario {
            task_id: task_id.to_string(),
            delay_days,
            affected_tasks,
            total_project_delay_days,
            explanation,
        })
    }
}

/// Formats the scenario summary from already-computed data.
///
/// Pure formatting over the structured fields; contributes no logic of its
/// own. The affected list is sorted by id so the text is deterministic.
fn build_explanation(
    graph: &TaskGraph,
    task_id: &str,
    delay_days: f64,
    affected_tasks: &HashMap<String, f64>,
    total_project_delay_days: f64,
) -> String {
    let label = graph
        .task(task_id)
        .filter(|t| !t.name.is_empty())
        .map_or_else(|| task_id.to_string(), |t| format!("{} ({})", t.name, task_id));

    let mut affected_ids: Vec<&String> = affected_tasks.keys().collect();
    affected_ids.sort();

    if affected_ids.is_empty() && total_project_delay_days <= 0.0 {
        return format!(
            "A {delay_days:.1}-day delay at '{label}' is absorbed without affecting \
             downstream tasks or project completion."
        );
    }

    let affected_clause = if affected_ids.is_empty() {
        "no downstream tasks".to_string()
    } else {
        let ids = affected_ids
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} downstream task(s) ({ids})", affected_ids.len())
    };

    format!(
        "A {delay_days:.1}-day delay at '{label}' affects {affected_clause} and \
         extends project completion by {total_project_delay_days:.1} day(s)."
    )
}
