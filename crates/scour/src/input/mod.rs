//! Input parsing and dataset representation.

mod dataset;
mod parser;
mod source;

pub use dataset::{Dataset, Row, Value, row_identity};
pub use parser::{Parser, ParserConfig, write_csv};
pub use source::SourceMetadata;
