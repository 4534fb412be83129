//! Critical Path Method calculator.
//!
//! Classic CPM forward and backward passes, extended to all four
//! precedence-relation types. The forward pass computes earliest times in
//! topological order; the backward pass computes latest times anchored so
//! terminal tasks finish at the project duration. Total float is the gap
//! between the two, and zero-float tasks (within a fixed epsilon) form the
//! critical path.
//!
//! # Constraint formulas
//!
//! For an edge predecessor -> successor with lag `l`:
//!
//! | Type | Forward constraint on successor | Backward constraint on predecessor |
//! |------|--------------------------------|-----------------------------------|
//! | FS   | ES >= EF(pred) + l             | LF <= LS(succ) - l                |
//! | SS   | ES >= ES(pred) + l             | LS <= LS(succ) - l                |
//! | FF   | EF >= EF(pred) + l             | LF <= LF(succ) - l                |
//! | SF   | EF >= ES(pred) + l             | LS <= LF(succ) - l                |
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling";
//! PMI, "PMBOK Guide", precedence diagramming method

use std::collections::{HashMap, HashSet};

use crate::graph::TaskGraph;
use crate::models::{CriticalPathResult, DependencyType, TimingResult};

/// Tolerance when comparing float to zero.
///
/// Forward/backward passes accumulate floating-point additions, so exact
/// zero comparison would misclassify critical tasks.
pub const FLOAT_EPSILON: f64 = 1e-6;

/// Computes per-task timing and the critical path for a validated graph.
///
/// Pure and idempotent: calling [`calculate`](Self::calculate) twice on the
/// same graph yields identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalPathCalculator;

impl CriticalPathCalculator {
    /// Runs the full CPM computation.
    ///
    /// An empty graph yields duration 0 and an empty critical path.
    /// Disconnected components are scheduled independently; the project
    /// duration is the max across all of them, and only tasks in the
    /// longest component(s) end up with zero float.
    pub fn calculate(graph: &TaskGraph) -> CriticalPathResult {
        let n = graph.task_count();
        let mut earliest_start = vec![0.0f64; n];
        let mut earliest_finish = vec![0.0f64; n];

        // Forward pass in topological order.
        for &i in graph.topological_order() {
            let duration = graph.task_at(i).duration_days;
            let mut start = 0.0f64;
            let mut finish_floor = f64::NEG_INFINITY;

            for edge in graph.predecessor_edges(i) {
                let p = edge.predecessor;
                match edge.kind {
                    DependencyType::FinishToStart => {
                        start = start.max(earliest_finish[p] + edge.lag_days);
                    }
                    DependencyType::StartToStart => {
                        start = start.max(earliest_start[p] + edge.lag_days);
                    }
                    DependencyType::FinishToFinish => {
                        finish_floor = finish_floor.max(earliest_finish[p] + edge.lag_days);
                    }
                    DependencyType::StartToFinish => {
                        finish_floor = finish_floor.max(earliest_start[p] + edge.lag_days);
                    }
                }
            }

            let mut finish = start + duration;
            if finish_floor > finish {
                // Finish is constrained directly (FF/SF); pull the start
                // back with it, clipped at project start.
                finish = finish_floor;
                start = (finish - duration).max(0.0);
            }
            earliest_start[i] = start;
            earliest_finish[i] = finish;
        }

        let project_duration_days = graph
            .terminal_tasks()
            .map(|i| earliest_finish[i])
            .fold(0.0f64, f64::max);

        // Backward pass in reverse topological order, anchored at the
        // project duration.
        let mut latest_start = vec![0.0f64; n];
        let mut latest_finish = vec![0.0f64; n];

        for &i in graph.topological_order().iter().rev() {
            let duration = graph.task_at(i).duration_days;
            let mut finish = project_duration_days;
            let mut start_cap = f64::INFINITY;

            for edge in graph.successor_edges(i) {
                let s = edge.successor;
                match edge.kind {
                    DependencyType::FinishToStart => {
                        finish = finish.min(latest_start[s] - edge.lag_days);
                    }
                    DependencyType::FinishToFinish => {
                        finish = finish.min(latest_finish[s] - edge.lag_days);
                    }
                    DependencyType::StartToStart => {
                        start_cap = start_cap.min(latest_start[s] - edge.lag_days);
                    }
                    DependencyType::StartToFinish => {
                        start_cap = start_cap.min(latest_finish[s] - edge.lag_days);
                    }
                }
            }

            let mut start = finish - duration;
            if start_cap < start {
                // Start is constrained directly (SS/SF); pull the finish
                // forward with it.
                start = start_cap;
                finish = start + duration;
            }
            latest_start[i] = start;
            latest_finish[i] = finish;
        }

        let mut timings = HashMap::with_capacity(n);
        let mut critical = HashSet::new();
        for i in 0..n {
            let total_float = latest_start[i] - earliest_start[i];
            let is_critical = total_float.abs() < FLOAT_EPSILON;
            if is_critical {
                critical.insert(i);
            }
            timings.insert(
                graph.task_at(i).id.clone(),
                TimingResult {
                    earliest_start: earliest_start[i],
                    earliest_finish: earliest_finish[i],
                    latest_start: latest_start[i],
                    latest_finish: latest_finish[i],
                    total_float,
                    is_critical,
                },
            );
        }

        let critical_path = extract_critical_path(graph, &critical, &earliest_start, &earliest_finish);

        CriticalPathResult {
            critical_path,
            project_duration_days,
            timings,
        }
    }
}

/// Walks one deterministic path through the critical tasks.
///
/// Starts at the chain head (a critical task with no critical predecessor,
/// chosen by smallest earliest start, then smallest id) and repeatedly moves
/// to the critical successor with the largest earliest finish, breaking ties
/// by smallest id. The DAG property bounds the walk.
fn extract_critical_path(
    graph: &TaskGraph,
    critical: &HashSet<usize>,
    earliest_start: &[f64],
    earliest_finish: &[f64],
) -> Vec<String> {
    let head = critical
        .iter()
        .copied()
        .filter(|&i| {
            !graph
                .predecessor_edges(i)
                .any(|e| critical.contains(&e.predecessor))
        })
        .min_by(|&a, &b| {
            earliest_start[a]
                .total_cmp(&earliest_start[b])
                .then_with(|| graph.task_at(a).id.cmp(&graph.task_at(b).id))
        });

    let Some(head) = head else {
        return Vec::new();
    };

    let mut path = Vec::new();
    let mut current = head;
    loop {
        path.push(graph.task_at(current).id.clone());
        let next = graph
            .successor_edges(current)
            .map(|e| e.successor)
            .filter(|s| critical.contains(s))
            .min_by(|&a, &b| {
                earliest_finish[b]
                    .total_cmp(&earliest_finish[a])
                    .then_with(|| graph.task_at(a).id.cmp(&graph.task_at(b).id))
            });
        match next {
            Some(next) => current = next,
            None => break,
        }
    }
    path
}
