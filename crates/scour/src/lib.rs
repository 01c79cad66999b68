//! Scour: dataset profiling and cleaning engine for CSV data.
//!
//! Scour takes an in-memory tabular dataset, classifies each column as
//! numeric or categorical, derives an ordered cleaning plan (column
//! removal, mean/median/mode imputation, duplicate removal, numeric
//! normalization), applies it without touching the caller's copy, and
//! renders human-readable summaries and reports. A remote language model
//! can be attached for free-text insights; its failures never affect
//! locally computed results.
//!
//! # Core Principles
//!
//! - **Non-destructive**: cleaning produces a new dataset; the original
//!   is never modified in place
//! - **Deterministic**: the same dataset always yields the same profile,
//!   plan, and cleaned output
//! - **Stateless**: the engine holds no dataset state between calls;
//!   callers own the dataset lifecycle
//!
//! # Example
//!
//! ```no_run
//! use scour::Scour;
//!
//! let engine = Scour::new();
//! let (dataset, _meta) = engine.load("sales.csv").unwrap();
//!
//! if let Some(outcome) = engine.clean(&dataset) {
//!     println!("{}", outcome.plan.description);
//!     println!("{}", outcome.report);
//! }
//! ```

pub mod clean;
pub mod error;
pub mod input;
pub mod llm;
pub mod profile;
pub mod summary;

mod scour;

pub use crate::scour::{Analysis, CleaningOutcome, Scour, ScourConfig};
pub use clean::{
    CleanOptions, CleaningOperation, CleaningPlan, ExecutionLog, Executor, FillPolicy,
    FillStrategy, Planner, cleaning_report,
};
pub use error::{Result, ScourError};
pub use input::{Dataset, Parser, ParserConfig, Row, SourceMetadata, Value};
pub use llm::{InsightConfig, InsightProvider, MockProvider, OpenAiProvider};
pub use profile::{ColumnKind, ColumnProfile, DatasetProfile, NumericSummary, Profiler};
pub use summary::{dataset_summary, visualization_advice};
