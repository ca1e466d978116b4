//! JSONL record loading.
//!
//! Each non-blank line holds one JSON object:
//! ```jsonl
//! {"type": "article", "key": "einstein1905", "author": "Einstein, Albert", "year": 1905}
//! {"type": "book", "key": "knuth1968", "author": ["Knuth, Donald E."], "publisher": "Addison-Wesley"}
//! ```
//!
//! `type` and `key` fill the record header; every other member becomes a
//! field. Numbers and booleans are stored as their JSON text, arrays are
//! joined with ` and ` (the person-list separator), and nulls are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::{QuiverError, Result};
use crate::record::record::Record;

/// Parse one JSON object into a record.
pub fn parse_record(line: &str) -> Result<Record> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| QuiverError::record(format!("Failed to parse JSON: {e}")))?;

    let Value::Object(map) = value else {
        return Err(QuiverError::record("Expected a JSON object"));
    };

    let mut record = Record::default();
    for (name, val) in map {
        let Some(text) = field_text(&name, &val)? else {
            continue;
        };
        match name.as_str() {
            "type" => record.set_entry_type(text),
            "key" => record.set_key(text),
            _ => record.set_field(&name, text),
        }
    }

    Ok(record)
}

fn field_text(name: &str, value: &Value) -> Result<Option<String>> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match field_text(name, item)? {
                    Some(part) => parts.push(part),
                    None => continue,
                }
            }
            parts.join(" and ")
        }
        Value::Object(_) => {
            return Err(QuiverError::record(format!(
                "Field '{name}' holds a nested object"
            )));
        }
    };
    Ok(Some(text))
}

/// Parse every record from a JSONL reader.
///
/// Blank lines are skipped. The first malformed line aborts parsing with an
/// error naming its line number.
pub fn parse_jsonl<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record = parse_record(line)
            .map_err(|e| QuiverError::record(format!("line {}: {e}", line_num + 1)))?;
        records.push(record);
    }

    Ok(records)
}

/// Load every record from a JSONL file.
pub fn load_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = parse_jsonl(BufReader::new(file))?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_record_types() {
        let record = parse_record(
            r#"{"type": "article", "key": "e1905", "Title": "Relativity", "year": 1905, "peer_reviewed": true, "note": null}"#,
        )
        .unwrap();

        assert_eq!(record.entry_type(), "article");
        assert_eq!(record.key(), "e1905");
        assert_eq!(record.field("title"), Some("Relativity"));
        assert_eq!(record.field("year"), Some("1905"));
        assert_eq!(record.field("peer_reviewed"), Some("true"));
        assert!(!record.has_field("note"));
    }

    #[test]
    fn test_arrays_join_as_person_list() {
        let record =
            parse_record(r#"{"author": ["Einstein, Albert", "Podolsky, Boris", "Rosen, Nathan"]}"#)
                .unwrap();

        assert_eq!(
            record.field("author"),
            Some("Einstein, Albert and Podolsky, Boris and Rosen, Nathan")
        );
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(matches!(parse_record("[1, 2]"), Err(QuiverError::Record(_))));
        assert!(matches!(parse_record("{"), Err(QuiverError::Record(_))));
        assert!(matches!(
            parse_record(r#"{"author": {"name": "x"}}"#),
            Err(QuiverError::Record(_))
        ));
    }

    #[test]
    fn test_parse_jsonl_skips_blank_lines() {
        let input = "{\"key\": \"a\"}\n\n   \n{\"key\": \"b\"}\n";
        let records = parse_jsonl(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key(), "a");
        assert_eq!(records[1].key(), "b");
    }

    #[test]
    fn test_parse_jsonl_reports_line_number() {
        let input = "{\"key\": \"a\"}\nnot json\n";
        let err = parse_jsonl(Cursor::new(input)).unwrap_err();

        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_jsonl_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"type": "book", "key": "k1", "publisher": "Springer"}}"#).unwrap();
        writeln!(file, r#"{{"type": "book", "key": "k2", "publisher": "Elsevier"}}"#).unwrap();
        file.flush().unwrap();

        let records = load_jsonl(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].field("publisher"), Some("Elsevier"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_jsonl("/nonexistent/records.jsonl");
        assert!(matches!(result, Err(QuiverError::Io(_))));
    }
}
