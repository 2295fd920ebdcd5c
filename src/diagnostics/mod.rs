//! Serializable run reports and stage timings.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, MattingReport};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
