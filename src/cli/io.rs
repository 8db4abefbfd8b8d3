//! JSON I/O handling for CLI
//!
//! - Input: a single JSON object of properties via stdin
//! - Output: a single JSON object via stdout
//! - UTF-8 only

use std::collections::BTreeMap;
use std::io::{self, Read, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read a property request from stdin
pub fn read_request() -> CliResult<Vec<(String, String)>> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_request(&input)
}

/// Decode a JSON object into property pairs.
///
/// Strings are taken as-is; numbers and booleans are rendered as text, so
/// `{"gc_grace_seconds": 3600}` and `{"gc_grace_seconds": "3600"}` agree.
/// Integral floats such as `1e3` or `3600.0` render without a fraction.
pub fn parse_request(input: &str) -> CliResult<Vec<(String, String)>> {
    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    let object: BTreeMap<String, Value> = serde_json::from_str(input)?;

    object
        .into_iter()
        .map(|(key, value)| {
            let raw = match value {
                Value::String(s) => s,
                Value::Number(n) => number_text(&n),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(CliError::io_error(format!(
                        "Property '{}' must be a string, number or boolean, got {}",
                        key, other
                    )))
                }
            };
            Ok((key, raw))
        })
        .collect()
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f)
            if f.is_finite()
                && f.fract() == 0.0
                && f >= i64::MIN as f64
                && f < i64::MAX as f64 =>
        {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_line(&response)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(&response)
}

fn write_line(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_stringifies_scalars() {
        let pairs = parse_request(
            r#"{"comment": "t", "gc_grace_seconds": 3600, "replicate_on_write": false}"#,
        )
        .unwrap();
        assert_eq!(
            pairs,
            vec![
                ("comment".to_string(), "t".to_string()),
                ("gc_grace_seconds".to_string(), "3600".to_string()),
                ("replicate_on_write".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_request_integral_floats_read_as_integers() {
        let pairs = parse_request(
            r#"{"gc_grace_seconds": 1e3, "min_compaction_threshold": 4.0, "read_repair_chance": 0.25}"#,
        )
        .unwrap();
        assert_eq!(
            pairs,
            vec![
                ("gc_grace_seconds".to_string(), "1000".to_string()),
                ("min_compaction_threshold".to_string(), "4".to_string()),
                ("read_repair_chance".to_string(), "0.25".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_request_rejects_nested_values() {
        let err = parse_request(r#"{"caching": ["ALL"]}"#).unwrap_err();
        assert!(err.message().contains("caching"));
    }

    #[test]
    fn test_parse_request_rejects_empty_and_non_object() {
        assert!(parse_request("  ").is_err());
        assert!(parse_request("[1, 2]").is_err());
    }
}
