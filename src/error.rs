//! Error taxonomy for schedule analysis.
//!
//! Every error is a structural validation failure in caller input, raised
//! during graph construction or simulation request handling and surfaced
//! as-is. There is no recoverable or retryable class: either validation
//! passes and every downstream computation proceeds, or analysis fails
//! before any computation begins. The engine never silently corrects input
//! or returns a partial result.

use thiserror::Error;

/// Fatal input-validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The dependency relation contains a cycle, so no topological order
    /// (and therefore no timing result) exists. Carries the task ids of one
    /// concrete offending cycle for diagnostics.
    #[error("dependency cycle detected involving tasks: {}", .cycle_task_ids.join(" -> "))]
    CycleDetected {
        /// Ids of the tasks forming the cycle, in traversal order.
        cycle_task_ids: Vec<String>,
    },

    /// A dependency or simulation request names a task id that is not in
    /// the graph.
    #[error("unknown task reference: '{task_id}'")]
    UnknownTaskReference {
        /// The unresolved id.
        task_id: String,
    },

    /// A task or dependency carries values the engine cannot schedule with
    /// (negative or non-finite duration, non-finite lag, duplicate ids,
    /// out-of-range complexity).
    #[error("invalid dependency input for '{entity_id}': {reason}")]
    InvalidDependency {
        /// Id of the offending task or dependency record.
        entity_id: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl AnalysisError {
    pub(crate) fn invalid(entity_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDependency {
            entity_id: entity_id.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_task(task_id: impl Into<String>) -> Self {
        Self::UnknownTaskReference {
            task_id: task_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_lists_tasks() {
        let err = AnalysisError::CycleDetected {
            cycle_task_ids: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(
            err.to_string(),
            "dependency cycle detected involving tasks: A -> B -> A"
        );
    }

    #[test]
    fn test_unknown_task_message() {
        let err = AnalysisError::unknown_task("T9");
        assert_eq!(err.to_string(), "unknown task reference: 'T9'");
    }

    #[test]
    fn test_invalid_dependency_message() {
        let err = AnalysisError::invalid("D1", "lag_days is not finite");
        assert_eq!(
            err.to_string(),
            "invalid dependency input for 'D1': lag_days is not finite"
        );
    }
}
