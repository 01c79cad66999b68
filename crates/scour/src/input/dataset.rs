//! Dataset representation: typed scalar values in ordered rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl Value {
    /// True for null values only.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True when the cell counts as missing for profiling purposes:
    /// null or the empty string.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Str(s) => s.is_empty(),
            _ => false,
        }
    }

    /// True for null, `false`, `0`, NaN, and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => *n == 0.0 || n.is_nan(),
            Value::Str(s) => s.is_empty(),
        }
    }

    /// Loose numeric coercion. Null and blank strings coerce to zero,
    /// booleans to 0/1, strings by parsing after trimming. Unparseable or
    /// non-finite results coerce to nothing.
    pub fn coerce_number(&self) -> Option<f64> {
        let n = match self {
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        };
        n.is_finite().then_some(n)
    }

    /// Display form of the value. Nulls render empty; numbers use their
    /// shortest representation (`1`, not `1.0`).
    pub fn as_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Str(s) => s.clone(),
        }
    }

    /// Type-tagged key for uniqueness and duplicate detection. Values of
    /// different types never collide: the string "1" and the number 1 are
    /// distinct.
    pub fn identity_key(&self) -> String {
        match self {
            Value::Null => "~".to_string(),
            Value::Bool(b) => format!("b:{}", b),
            Value::Number(n) => format!("n:{}", n),
            Value::Str(s) => format!("s:{}", s),
        }
    }
}

/// One record: an ordered mapping from column name to value.
pub type Row = IndexMap<String, Value>;

/// Deterministic serialization of a row for duplicate detection. Field
/// insertion order and value types both participate, so two rows share an
/// identity only when they are structurally identical.
pub fn row_identity(row: &Row) -> String {
    let mut key = String::new();
    for (name, value) in row {
        key.push_str(name);
        key.push('\u{1f}');
        key.push_str(&value.identity_key());
        key.push('\u{1e}');
    }
    key
}

/// An ordered collection of rows sharing (by convention) one field set.
/// Fields absent from a later row are treated as missing for that column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Row data in original order.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Create a dataset from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in the order the first row declares them. Empty for an
    /// empty dataset.
    pub fn columns(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of columns, derived from the first row (0 when empty).
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Value at (row, column), if present.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}
