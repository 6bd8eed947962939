//! Tab-delimited output of a holdings table

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::info;

use crate::edgar::{FilingError, Result};
use crate::holdings::HoldingsTable;

/// `<identifier>_13F.txt`
pub fn output_file_name(identifier: &str) -> String {
    format!("{}_13F.txt", identifier)
}

/// Reject identifiers that would escape the output directory or name a directory
pub fn check_identifier(identifier: &str) -> Result<()> {
    let trimmed = identifier.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || identifier.contains(['/', '\\'])
        || identifier.contains(std::path::MAIN_SEPARATOR)
    {
        return Err(FilingError::InvalidIdentifier(identifier.to_string()));
    }
    Ok(())
}

/// Write `table` to `<dir>/<identifier>_13F.txt`, replacing any existing file
pub fn write_table(dir: &Path, identifier: &str, table: &HoldingsTable) -> Result<PathBuf> {
    check_identifier(identifier)?;
    let path = dir.join(output_file_name(identifier));

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(&path)?;

    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", table.rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::ReaderBuilder;
    use tempfile::TempDir;

    fn sample_table() -> HoldingsTable {
        HoldingsTable {
            header: vec!["nameOfIssuer".into(), "cusip".into(), "value".into()],
            rows: vec![
                vec!["APPLE INC".into(), "037833100".into(), "174347".into()],
                vec!["AT&T INC".into(), "N/A".into(), "12".into()],
                vec!["ODD \"NAME\"\tCO".into(), "00206R102".into(), "0".into()],
            ],
        }
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("0001234567"), "0001234567_13F.txt");
        assert_eq!(output_file_name("BRK"), "BRK_13F.txt");
    }

    #[test]
    fn test_written_table_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let table = sample_table();

        let path = write_table(temp_dir.path(), "0001234567", &table).unwrap();
        assert_eq!(path, temp_dir.path().join("0001234567_13F.txt"));

        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .from_path(&path)
            .unwrap();
        let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();

        assert_eq!(header, table.header);
        assert_eq!(rows, table.rows);
    }

    #[test]
    fn test_plain_values_are_tab_separated() {
        let temp_dir = TempDir::new().unwrap();
        let table = HoldingsTable {
            header: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into(), "N/A".into()]],
        };

        let path = write_table(temp_dir.path(), "X", &table).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "a\tb\n1\tN/A\n");
    }

    #[test]
    fn test_identifier_with_path_separator_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("out");
        std::fs::create_dir(&nested).unwrap();
        let table = HoldingsTable {
            header: vec!["a".into()],
            rows: vec![vec!["1".into()]],
        };

        for identifier in ["BRK/B", "../x", "..\\x", "", ".."] {
            let err = write_table(&nested, identifier, &table).unwrap_err();
            assert!(matches!(err, FilingError::InvalidIdentifier(_)), "{identifier}");
        }
        assert!(!temp_dir.path().join("x_13F.txt").exists());
        assert_eq!(std::fs::read_dir(&nested).unwrap().count(), 0);

        check_identifier("BRK-B").unwrap();
        check_identifier("0001067983").unwrap();
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(output_file_name("X"));
        std::fs::write(&path, "stale contents that are longer than the new table\n").unwrap();

        let table = HoldingsTable {
            header: vec!["a".into()],
            rows: vec![vec!["1".into()]],
        };
        write_table(temp_dir.path(), "X", &table).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "a\n1\n");
    }
}
