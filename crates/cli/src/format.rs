//! Output formatting for query results and errors.

use lse_core::{DocId, Error};
use serde::Serialize;

/// Output mode for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    keywords: [&'a str; 2],
    documents: &'a [DocId],
}

/// Format a query result.
pub fn format_matches(kw1: &str, kw2: &str, docs: &[DocId], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let result = JsonResult {
                keywords: [kw1, kw2],
                documents: docs,
            };
            serde_json::to_string_pretty(&result)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
        OutputMode::Human => {
            if docs.is_empty() {
                return "(empty list)".to_string();
            }
            docs.iter()
                .enumerate()
                .map(|(i, doc)| format!("{}) {}", i + 1, doc))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<DocId> {
        vec![DocId::new("a.txt"), DocId::new("b.txt")]
    }

    #[test]
    fn test_human_numbered() {
        let out = format_matches("x", "y", &docs(), OutputMode::Human);
        assert_eq!(out, "1) a.txt\n2) b.txt");
    }

    #[test]
    fn test_human_empty() {
        assert_eq!(format_matches("x", "y", &[], OutputMode::Human), "(empty list)");
    }

    #[test]
    fn test_json_shape() {
        let out = format_matches("x", "y", &docs(), OutputMode::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["keywords"], serde_json::json!(["x", "y"]));
        assert_eq!(value["documents"], serde_json::json!(["a.txt", "b.txt"]));
    }

    #[test]
    fn test_error_modes() {
        let err = Error::invalid_input("no documents file");
        assert_eq!(
            format_error(&err, OutputMode::Human),
            "(error) Invalid input: no documents file"
        );
        let json: serde_json::Value =
            serde_json::from_str(&format_error(&err, OutputMode::Json)).unwrap();
        assert_eq!(json["error"], "Invalid input: no documents file");
    }
}
