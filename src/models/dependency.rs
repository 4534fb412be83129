//! Precedence dependency model.
//!
//! Dependencies relate two tasks by id with one of the four standard
//! precedence-relation types and a signed lag. Positive lag is a buffer
//! between the related instants; negative lag is an overlap (lead time).
//!
//! # Reference
//! PMI, "PMBOK Guide", precedence diagramming method (PDM)

use serde::{Deserialize, Serialize};

/// The four standard precedence-relation types.
///
/// The variant determines which instants of the predecessor and successor
/// the relation ties together. Exhaustive matching over this enum is what
/// guarantees every timing computation handles all four relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyType {
    /// Successor cannot start until the predecessor finishes (the default).
    FinishToStart,
    /// Successor cannot start until the predecessor starts.
    StartToStart,
    /// Successor cannot finish until the predecessor finishes.
    FinishToFinish,
    /// Successor cannot finish until the predecessor starts.
    StartToFinish,
}

impl DependencyType {
    /// Conventional two-letter abbreviation (FS, SS, FF, SF).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::FinishToStart => "FS",
            Self::StartToStart => "SS",
            Self::FinishToFinish => "FF",
            Self::StartToFinish => "SF",
        }
    }
}

/// A directed precedence dependency between two tasks.
///
/// References tasks by id only; the [`TaskGraph`](crate::graph::TaskGraph)
/// resolves ids to an indexed adjacency structure at construction time and
/// rejects references to unknown tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDependency {
    /// Unique dependency identifier.
    pub id: String,
    /// Id of the task that constrains.
    pub predecessor_id: String,
    /// Id of the task being constrained.
    pub successor_id: String,
    /// Which instants the relation ties together.
    pub dependency_type: DependencyType,
    /// Signed lag in days. Positive = buffer, negative = overlap/lead.
    pub lag_days: f64,
}

impl TaskDependency {
    /// Creates a finish-to-start dependency with zero lag.
    pub fn new(
        id: impl Into<String>,
        predecessor_id: impl Into<String>,
        successor_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            predecessor_id: predecessor_id.into(),
            successor_id: successor_id.into(),
            dependency_type: DependencyType::FinishToStart,
            lag_days: 0.0,
        }
    }

    /// Sets the relation type.
    pub fn with_type(mut self, dependency_type: DependencyType) -> Self {
        self.dependency_type = dependency_type;
        self
    }

    /// Sets the lag in days.
    pub fn with_lag_days(mut self, lag_days: f64) -> Self {
        self.lag_days = lag_days;
        self
    }
}
