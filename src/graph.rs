//! Dependency graph construction and structural validation.
//!
//! Builds an immutable, id-indexed task graph from plain task and dependency
//! records. Validation is all-or-nothing: duplicate or unresolved ids,
//! unschedulable values, and dependency cycles are hard errors raised before
//! any timing computation runs. Tasks live in an arena (`Vec`) keyed by an
//! id index, and edges are index pairs — there are no direct object links,
//! so cycle detection reduces to a pure topological-sort check.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
//! (Topological Sort, Kahn's algorithm)

use std::collections::{HashMap, VecDeque};

use crate::error::AnalysisError;
use crate::models::{DependencyType, Task, TaskDependency};

/// A validated dependency edge, resolved to arena indices.
#[derive(Debug, Clone)]
pub struct DependencyEdge {
    /// Id of the originating dependency record.
    pub dependency_id: String,
    /// Arena index of the constraining task.
    pub predecessor: usize,
    /// Arena index of the constrained task.
    pub successor: usize,
    /// Which instants the relation ties together.
    pub kind: DependencyType,
    /// Signed lag in days.
    pub lag_days: f64,
}

/// An immutable, validated task dependency graph.
///
/// Construction via [`TaskGraph::build`] is the only way to obtain one, so
/// every graph in circulation is acyclic with fully resolved references.
/// Adjacency lists are built once and shared by every downstream pass.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
    edges: Vec<DependencyEdge>,
    /// Per task: indices into `edges` where the task is the predecessor.
    forward: Vec<Vec<usize>>,
    /// Per task: indices into `edges` where the task is the successor.
    backward: Vec<Vec<usize>>,
    /// Arena indices in a valid topological order of the predecessor ->
    /// successor relation.
    topo_order: Vec<usize>,
}

impl TaskGraph {
    /// Builds and validates a graph from plain task and dependency records.
    ///
    /// # Errors
    /// - [`AnalysisError::InvalidDependency`]: duplicate ids, negative or
    ///   non-finite duration, out-of-range complexity factor, non-finite lag.
    /// - [`AnalysisError::UnknownTaskReference`]: a dependency endpoint does
    ///   not resolve to a supplied task.
    /// - [`AnalysisError::CycleDetected`]: the dependency relation is not a
    ///   DAG; carries the task ids of one concrete cycle.
    pub fn build(
        tasks: Vec<Task>,
        dependencies: Vec<TaskDependency>,
    ) -> Result<Self, AnalysisError> {
        let mut index = HashMap::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            if index.insert(task.id.clone(), i).is_some() {
                return Err(AnalysisError::invalid(&task.id, "duplicate task id"));
            }
            if !task.duration_days.is_finite() || task.duration_days < 0.0 {
                return Err(AnalysisError::invalid(
                    &task.id,
                    "duration_days must be finite and >= 0",
                ));
            }
            if !task.complexity_factor.is_finite()
                || !(0.5..=2.0).contains(&task.complexity_factor)
            {
                return Err(AnalysisError::invalid(
                    &task.id,
                    "complexity_factor must be within [0.5, 2.0]",
                ));
            }
        }

        let mut edges = Vec::with_capacity(dependencies.len());
        let mut forward = vec![Vec::new(); tasks.len()];
        let mut backward = vec![Vec::new(); tasks.len()];
        let mut seen_dependency_ids = HashMap::with_capacity(dependencies.len());

        for dep in &dependencies {
            if seen_dependency_ids.insert(dep.id.clone(), ()).is_some() {
                return Err(AnalysisError::invalid(&dep.id, "duplicate dependency id"));
            }
            if !dep.lag_days.is_finite() {
                return Err(AnalysisError::invalid(&dep.id, "lag_days must be finite"));
            }
            let predecessor = *index
                .get(&dep.predecessor_id)
                .ok_or_else(|| AnalysisError::unknown_task(&dep.predecessor_id))?;
            let successor = *index
                .get(&dep.successor_id)
                .ok_or_else(|| AnalysisError::unknown_task(&dep.successor_id))?;

            let edge_idx = edges.len();
            edges.push(DependencyEdge {
                dependency_id: dep.id.clone(),
                predecessor,
                successor,
                kind: dep.dependency_type,
                lag_days: dep.lag_days,
            });
            forward[predecessor].push(edge_idx);
            backward[successor].push(edge_idx);
        }

        let topo_order = topological_sort(&tasks, &edges, &forward, &backward)?;

        Ok(Self {
            tasks,
            index,
            edges,
            forward,
            backward,
            topo_order,
        })
    }

    /// Number of tasks in the graph.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of dependency edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.index.get(task_id).map(|&i| &self.tasks[i])
    }

    /// Arena index of a task id.
    pub fn task_index(&self, task_id: &str) -> Option<usize> {
        self.index.get(task_id).copied()
    }

    /// Task at an arena index.
    pub fn task_at(&self, index: usize) -> &Task {
        &self.tasks[index]
    }

    /// Arena indices in topological (predecessor-first) order.
    pub fn topological_order(&self) -> &[usize] {
        &self.topo_order
    }

    /// Edges leaving the task at `index` (task as predecessor).
    pub fn successor_edges(&self, index: usize) -> impl Iterator<Item = &DependencyEdge> {
        self.forward[index].iter().map(move |&e| &self.edges[e])
    }

    /// Edges entering the task at `index` (task as successor).
    pub fn predecessor_edges(&self, index: usize) -> impl Iterator<Item = &DependencyEdge> {
        self.backward[index].iter().map(move |&e| &self.edges[e])
    }

    /// Indices of tasks with no predecessors.
    pub fn entry_tasks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.tasks.len()).filter(|&i| self.backward[i].is_empty())
    }

    /// Indices of tasks with no successors.
    pub fn terminal_tasks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.tasks.len()).filter(|&i| self.forward[i].is_empty())
    }
}

/// Kahn's algorithm over the predecessor -> successor relation.
///
/// Failure to order every task means the relation has a cycle; one concrete
/// cycle is then recovered by DFS for the error value.
fn topological_sort(
    tasks: &[Task],
    edges: &[DependencyEdge],
    forward: &[Vec<usize>],
    backward: &[Vec<usize>],
) -> Result<Vec<usize>, AnalysisError> {
    let mut in_degree: Vec<usize> = backward.iter().map(Vec::len).collect();
    let mut queue: VecDeque<usize> = (0..tasks.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(tasks.len());

    while let Some(task_idx) = queue.pop_front() {
        order.push(task_idx);
        for &edge_idx in &forward[task_idx] {
            let succ = edges[edge_idx].successor;
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                queue.push_back(succ);
            }
        }
    }

    if order.len() != tasks.len() {
        let cycle = find_cycle(tasks.len(), edges, forward);
        return Err(AnalysisError::CycleDetected {
            cycle_task_ids: cycle.into_iter().map(|i| tasks[i].id.clone()).collect(),
        });
    }

    Ok(order)
}

/// Recovers one concrete cycle by DFS with an explicit path stack.
///
/// Only called after Kahn's algorithm has proven a cycle exists, so the
/// back-edge search always succeeds.
fn find_cycle(task_count: usize, edges: &[DependencyEdge], forward: &[Vec<usize>]) -> Vec<usize> {
    let mut marks = vec![Mark::Unvisited; task_count];
    let mut path = Vec::new();

    for start in 0..task_count {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        if let Some(cycle) = dfs_cycle(start, edges, forward, &mut marks, &mut path) {
            return cycle;
        }
    }

    Vec::new()
}

fn dfs_cycle(
    node: usize,
    edges: &[DependencyEdge],
    forward: &[Vec<usize>],
    marks: &mut [Mark],
    path: &mut Vec<usize>,
) -> Option<Vec<usize>> {
    marks[node] = Mark::OnPath;
    path.push(node);

    for &edge_idx in &forward[node] {
        let next = edges[edge_idx].successor;
        match marks[next] {
            Mark::OnPath => {
                // Back edge: the cycle is the path suffix from `next`.
                let pos = path.iter().position(|&n| n == next).unwrap_or(0);
                return Some(path[pos..].to_vec());
            }
            Mark::Unvisited => {
                if let Some(cycle) = dfs_cycle(next, edges, forward, marks, path) {
                    return Some(cycle);
                }
            }
            Mark::Done => {}
        }
    }

    path.pop();
    marks[node] = Mark::Done;
    None
}

/// DFS visit state for cycle recovery.
#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DependencyType;

    fn task(id: &str, duration: f64) -> Task {
        Task::new(id).with_duration_days(duration)
    }

    fn fs(id: &str, pred: &str, succ: &str) -> TaskDependency {
        TaskDependency::new(id, pred, succ)
    }

    #[test]
    fn test_build_valid_graph() {
        let graph = TaskGraph::build(
            vec![task("A", 2.0), task("B", 3.0), task("C", 1.0)],
            vec![fs("D1", "A", "B"), fs("D2", "B", "C")],
        )
        .unwrap();

        assert_eq!(graph.task_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.entry_tasks().count(), 1);
        assert_eq!(graph.terminal_tasks().count(), 1);
        assert_eq!(graph.topological_order().len(), 3);
    }

    #[test]
    fn test_topological_order_respects_edges() {
        let graph = TaskGraph::build(
            vec![task("C", 1.0), task("A", 1.0), task("B", 1.0)],
            vec![fs("D1", "A", "B"), fs("D2", "B", "C")],
        )
        .unwrap();

        let order = graph.topological_order();
        let pos = |id: &str| {
            let idx = graph.task_index(id).unwrap();
            order.iter().position(|&i| i == idx).unwrap()
        };
        assert!(pos("A") < pos("B"));
        assert!(pos("B") < pos("C"));
    }

    #[test]
    fn test_unknown_predecessor_rejected() {
        let err = TaskGraph::build(vec![task("A", 1.0)], vec![fs("D1", "GHOST", "A")]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownTaskReference {
                task_id: "GHOST".into()
            }
        );
    }

    #[test]
    fn test_unknown_successor_rejected() {
        let err = TaskGraph::build(vec![task("A", 1.0)], vec![fs("D1", "A", "GHOST")]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownTaskReference {
                task_id: "GHOST".into()
            }
        );
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = TaskGraph::build(vec![task("A", -1.0)], vec![]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidDependency { .. }));
    }

    #[test]
    fn test_non_finite_lag_rejected() {
        let err = TaskGraph::build(
            vec![task("A", 1.0), task("B", 1.0)],
            vec![fs("D1", "A", "B").with_lag_days(f64::NAN)],
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidDependency { .. }));
    }

    #[test]
    fn test_out_of_range_complexity_rejected() {
        let err =
            TaskGraph::build(vec![task("A", 1.0).with_complexity_factor(3.0)], vec![]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidDependency { .. }));
    }

    #[test]
    fn test_duplicate_task_id_rejected() {
        let err = TaskGraph::build(vec![task("A", 1.0), task("A", 2.0)], vec![]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidDependency { .. }));
    }

    #[test]
    fn test_duplicate_dependency_id_rejected() {
        let err = TaskGraph::build(
            vec![task("A", 1.0), task("B", 1.0), task("C", 1.0)],
            vec![fs("D1", "A", "B"), fs("D1", "B", "C")],
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidDependency { .. }));
    }

    #[test]
    fn test_two_task_cycle_carries_both_ids() {
        let err = TaskGraph::build(
            vec![task("A", 1.0), task("B", 1.0)],
            vec![fs("D1", "A", "B"), fs("D2", "B", "A")],
        )
        .unwrap_err();

        match err {
            AnalysisError::CycleDetected { cycle_task_ids } => {
                assert!(cycle_task_ids.contains(&"A".to_string()));
                assert!(cycle_task_ids.contains(&"B".to_string()));
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let err =
            TaskGraph::build(vec![task("A", 1.0)], vec![fs("D1", "A", "A")]).unwrap_err();
        match err {
            AnalysisError::CycleDetected { cycle_task_ids } => {
                assert_eq!(cycle_task_ids, vec!["A".to_string()]);
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn test_longer_cycle_detected_behind_valid_prefix() {
        // A -> B is fine; C -> D -> E -> C is a cycle.
        let err = TaskGraph::build(
            vec![
                task("A", 1.0),
                task("B", 1.0),
                task("C", 1.0),
                task("D", 1.0),
                task("E", 1.0),
            ],
            vec![
                fs("D1", "A", "B"),
                fs("D2", "C", "D"),
                fs("D3", "D", "E"),
                fs("D4", "E", "C"),
            ],
        )
        .unwrap_err();

        match err {
            AnalysisError::CycleDetected { cycle_task_ids } => {
                assert_eq!(cycle_task_ids.len(), 3);
                for id in ["C", "D", "E"] {
                    assert!(cycle_task_ids.contains(&id.to_string()));
                }
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let graph = TaskGraph::build(vec![], vec![]).unwrap();
        assert!(graph.is_empty());
        assert!(graph.topological_order().is_empty());
    }

    #[test]
    fn test_adjacency_keyed_by_dependency_type() {
        let graph = TaskGraph::build(
            vec![task("A", 2.0), task("B", 3.0)],
            vec![
                fs("D1", "A", "B").with_type(DependencyType::StartToStart),
                fs("D2", "A", "B").with_lag_days(1.5),
            ],
        )
        .unwrap();

        let a = graph.task_index("A").unwrap();
        let kinds: Vec<_> = graph.successor_edges(a).map(|e| e.kind).collect();
        assert!(kinds.contains(&DependencyType::StartToStart));
        assert!(kinds.contains(&DependencyType::FinishToStart));
    }
}
