//! Task model.
//!
//! A task is the unit of scheduling: a named piece of work with a duration
//! and the attributes that drive its delay-risk estimate. Tasks never link
//! to each other directly — precedence lives in [`TaskDependency`] records
//! resolved by id, so there is no pointer-cycle risk in the object graph.
//!
//! [`TaskDependency`]: crate::models::TaskDependency
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use serde::{Deserialize, Serialize};

/// A task to be analyzed.
///
/// Immutable once added to a [`TaskGraph`](crate::graph::TaskGraph) snapshot;
/// a new analysis run uses a fresh copy. Durations are in days and may be
/// fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, stable task identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Planned duration in days (finite, >= 0, fractional allowed).
    pub duration_days: f64,
    /// Delay-likelihood multiplier in [0.5, 2.0].
    pub complexity_factor: f64,
    /// Whether the task is exposed to weather conditions.
    pub weather_dependency: bool,
    /// Whether the task competes for constrained resources.
    pub resource_constrained: bool,
}

impl Task {
    /// Creates a new task with the given id and a neutral risk profile.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            duration_days: 0.0,
            complexity_factor: 1.0,
            weather_dependency: false,
            resource_constrained: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the planned duration in days.
    pub fn with_duration_days(mut self, duration_days: f64) -> Self {
        self.duration_days = duration_days;
        self
    }

    /// Sets the complexity factor (delay-likelihood multiplier).
    pub fn with_complexity_factor(mut self, complexity_factor: f64) -> Self {
        self.complexity_factor = complexity_factor;
        self
    }

    /// Marks the task as weather-dependent.
    pub fn with_weather_dependency(mut self, weather_dependency: bool) -> Self {
        self.weather_dependency = weather_dependency;
        self
    }

    /// Marks the task as resource-constrained.
    pub fn with_resource_constraint(mut self, resource_constrained: bool) -> Self {
        self.resource_constrained = resource_constrained;
        self
    }
}
