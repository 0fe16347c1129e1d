//! Provenance ledger writers
//!
//! Successful saves accumulate [`CreditRecord`]s in memory; at the end of
//! a run the list is serialized twice, as `credits.csv` and
//! `credits.json` under the output root.

use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// One provenance entry: category term, relative output path, source URL
#[derive(Debug, Clone, Serialize)]
pub struct CreditRecord {
    pub rock: String,
    pub file: String,
    pub url: String,
}

/// Writes the tabular ledger: a `rock,file,url` header plus one row per record
pub fn write_credits_csv(path: &Path, records: &[CreditRecord]) -> io::Result<()> {
    let mut out = String::from("rock,file,url\n");
    for record in records {
        out.push_str(&csv_field(&record.rock));
        out.push(',');
        out.push_str(&csv_field(&record.file));
        out.push(',');
        out.push_str(&csv_field(&record.url));
        out.push('\n');
    }

    let mut file = File::create(path)?;
    file.write_all(out.as_bytes())?;
    Ok(())
}

/// Writes the structured ledger as a pretty-printed JSON array
pub fn write_credits_json(path: &Path, records: &[CreditRecord]) -> crate::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, records)?;
    Ok(())
}

/// Quotes a field when it contains a comma, quote, or line break
fn csv_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_records() -> Vec<CreditRecord> {
        vec![
            CreditRecord {
                rock: "Basalt".to_string(),
                file: "Basalt/Basalt_001.png".to_string(),
                url: "https://example.edu/basalt.jpg".to_string(),
            },
            CreditRecord {
                rock: "Granite".to_string(),
                file: "Granite/Granite_001.png".to_string(),
                url: "https://example.edu/img?a=1,b=2".to_string(),
            },
        ]
    }

    #[test]
    fn test_csv_field_plain() {
        assert_eq!(csv_field("Basalt"), "Basalt");
    }

    #[test]
    fn test_csv_field_comma_quoted() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_csv_field_quote_doubled() {
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_field_newline_quoted() {
        assert_eq!(csv_field("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_write_credits_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credits.csv");

        write_credits_csv(&path, &sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "rock,file,url");
        assert_eq!(
            lines[1],
            "Basalt,Basalt/Basalt_001.png,https://example.edu/basalt.jpg"
        );
        // URL with a comma gets quoted
        assert_eq!(
            lines[2],
            "Granite,Granite/Granite_001.png,\"https://example.edu/img?a=1,b=2\""
        );
    }

    #[test]
    fn test_write_credits_csv_empty_is_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credits.csv");

        write_credits_csv(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "rock,file,url\n");
    }

    #[test]
    fn test_write_credits_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credits.json");

        write_credits_json(&path, &sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // Pretty-printed array
        assert!(content.starts_with("[\n"));

        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["rock"], "Basalt");
        assert_eq!(rows[0]["file"], "Basalt/Basalt_001.png");
        assert_eq!(rows[1]["url"], "https://example.edu/img?a=1,b=2");
    }

    #[test]
    fn test_write_credits_json_empty_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credits.json");

        write_credits_json(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
