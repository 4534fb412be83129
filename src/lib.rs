//! Deterministic project-schedule analysis engine.
//!
//! Given tasks and their precedence dependencies, computes the critical
//! path, per-task slack, delay risk, and how an injected delay propagates
//! through the dependency graph — then folds everything into a single
//! [`ScheduleAnalysisResult`](models::ScheduleAnalysisResult) for external
//! consumption.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskDependency`, `TimingResult`,
//!   `CriticalPathResult`, `RiskFactors`, `DelayScenario`,
//!   `ScheduleAnalysisResult`
//! - **`graph`**: `TaskGraph` — id-indexed adjacency, structural validation,
//!   cycle detection
//! - **`engine`**: CPM calculator, risk estimator, delay propagation,
//!   scenario generation, and aggregation; [`engine::analyze`] runs the
//!   whole pipeline
//! - **`error`**: the closed `AnalysisError` taxonomy
//!
//! # Guarantees
//!
//! The engine is a pure, synchronous computation with no I/O and no shared
//! mutable state: every analysis call owns its own graph and derived
//! results, holds nothing between calls, and is safe to invoke from any
//! thread. All failure modes are deterministic validation errors raised
//! before computation begins — there are no partial or best-effort results.
//!
//! # Example
//!
//! ```
//! use schedule_intel::engine;
//! use schedule_intel::models::{Task, TaskDependency};
//!
//! let tasks = vec![
//!     Task::new("T1").with_name("Excavate").with_duration_days(4.0),
//!     Task::new("T2")
//!         .with_name("Pour foundation")
//!         .with_duration_days(6.0)
//!         .with_weather_dependency(true),
//! ];
//! let dependencies = vec![TaskDependency::new("D1", "T1", "T2")];
//!
//! let result = engine::analyze(tasks, dependencies).unwrap();
//! assert_eq!(result.critical_path, vec!["T1", "T2"]);
//! assert_eq!(result.project_duration_days, 10.0);
//! ```
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - PMI, "PMBOK Guide", precedence diagramming method
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

pub mod engine;
pub mod error;
pub mod graph;
pub mod models;

pub use error::AnalysisError;
pub use graph::TaskGraph;
