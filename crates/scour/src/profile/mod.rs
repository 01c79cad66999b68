//! Dataset profiling: column classification and statistics.

mod profiler;
mod types;

pub use profiler::Profiler;
pub use types::{ColumnKind, ColumnProfile, DatasetProfile, NumericSummary};
