//! CSV/TSV parser with delimiter detection and dynamic cell typing.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::{Result, ScourError};

use super::dataset::{Dataset, Row, Value};
use super::source::SourceMetadata;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Cells matching this pattern are typed as numbers. Deliberately excludes
/// "inf"/"nan" spellings and hex, which stay strings.
static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap()
});

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses tabular data files into typed datasets.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the dataset and source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| ScourError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| ScourError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let dataset = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            dataset.len(),
            dataset.column_count(),
        );

        Ok((dataset, metadata))
    }

    /// Parse bytes directly.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            if headers.is_empty() {
                headers = (0..record.len())
                    .map(|i| format!("column_{}", i + 1))
                    .collect();
            }

            // Short rows pad with nulls; extra fields beyond the header are
            // dropped.
            let mut row = Row::with_capacity(headers.len());
            for (idx, name) in headers.iter().enumerate() {
                let value = match record.get(idx) {
                    Some(cell) => type_cell(cell),
                    None => Value::Null,
                };
                row.insert(name.clone(), value);
            }
            rows.push(row);
        }

        if headers.is_empty() {
            return Err(ScourError::EmptyData("No columns found".to_string()));
        }
        if rows.is_empty() {
            return Err(ScourError::EmptyData("No data rows found".to_string()));
        }

        Ok(Dataset::new(rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a dataset back to CSV text (the export path for cleaned data).
pub fn write_csv(dataset: &Dataset) -> Result<String> {
    let columns = dataset.columns();
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;

    for row in &dataset.rows {
        let record: Vec<String> = columns
            .iter()
            .map(|name| row.get(name).map(Value::as_text).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScourError::Config(format!("CSV buffer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ScourError::Config(format!("CSV output was not UTF-8: {}", e)))
}

/// Type a raw cell the way the upload surface does: exact `true`/`false`
/// become booleans, numeric-looking cells become numbers, everything else
/// (including the empty string) stays a string.
fn type_cell(raw: &str) -> Value {
    match raw {
        "" => Value::Str(String::new()),
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            let trimmed = raw.trim();
            if NUMERIC_PATTERN.is_match(trimmed) {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::Str(raw.to_string()))
            } else {
                Value::Str(raw.to_string())
            }
        }
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ScourError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines make a delimiter trustworthy; tab
        // gets a small bonus since it rarely appears inside actual data.
        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_dynamic_typing() {
        assert_eq!(type_cell("42"), Value::Number(42.0));
        assert_eq!(type_cell("-3.5"), Value::Number(-3.5));
        assert_eq!(type_cell("1e3"), Value::Number(1000.0));
        assert_eq!(type_cell("true"), Value::Bool(true));
        assert_eq!(type_cell("false"), Value::Bool(false));
        assert_eq!(type_cell("x1"), Value::Str("x1".to_string()));
        assert_eq!(type_cell(""), Value::Str(String::new()));
        // Spellings the upload surface leaves alone
        assert_eq!(type_cell("inf"), Value::Str("inf".to_string()));
        assert_eq!(type_cell("True"), Value::Str("True".to_string()));
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"name,age,active\nAlice,30,true\nBob,25,false";
        let dataset = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(dataset.columns(), vec!["name", "age", "active"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(0, "name"), Some(&Value::Str("Alice".to_string())));
        assert_eq!(dataset.get(1, "age"), Some(&Value::Number(25.0)));
        assert_eq!(dataset.get(1, "active"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let parser = Parser::new();
        let data = b"a,b,c\n1,2,3\n4,5";
        let dataset = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(dataset.get(1, "c"), Some(&Value::Null));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let parser = Parser::new();
        let data = b"a,b\n1,2\n\n3,4\n";
        let dataset = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_parse_empty_errors() {
        let parser = Parser::new();
        assert!(parser.parse_bytes(b"a,b\n", b',').is_err());
    }

    #[test]
    fn test_write_csv_round_trip() {
        let parser = Parser::new();
        let data = b"name,score\nAlice,10\nBob,\n";
        let dataset = parser.parse_bytes(data, b',').unwrap();
        let exported = write_csv(&dataset).unwrap();
        let reparsed = parser.parse_bytes(exported.as_bytes(), b',').unwrap();

        assert_eq!(reparsed.columns(), dataset.columns());
        assert_eq!(reparsed.len(), dataset.len());
    }
}
