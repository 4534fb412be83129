//! Schedule-analysis domain models.
//!
//! Input records ([`Task`], [`TaskDependency`]) arrive as plain structured
//! data from an external project-data source; output types
//! ([`CriticalPathResult`], [`DelayScenario`], [`ScheduleAnalysisResult`])
//! cross the boundary back out. All types serialize with serde so callers
//! can map them onto their own wire contracts.

mod analysis;
mod dependency;
mod risk;
mod scenario;
mod task;
mod timing;

pub use analysis::ScheduleAnalysisResult;
pub use dependency::{DependencyType, TaskDependency};
pub use risk::{ConfidenceLevel, RiskFactors};
pub use scenario::DelayScenario;
pub use task::Task;
pub use timing::{CriticalPathResult, TimingResult};
