//! Spreadsheet export for selected table rows.
//!
//! Selected rows are flattened into label/value records and serialized to
//! CSV in memory; the browser download itself happens in `utils::dom`.

use crate::core::error::ExportError;

/// One exported row: column label paired with the formatted cell value.
pub type SheetRecord = Vec<(&'static str, String)>;

/// Serialize records to CSV bytes, header row first.
///
/// Returns `Ok(None)` for an empty record set so callers skip the file write
/// entirely instead of producing a header-only file. Column order follows the
/// first record; every record is expected to carry the same labels.
pub fn write_csv(records: &[SheetRecord]) -> Result<Option<Vec<u8>>, ExportError> {
    let Some(first) = records.first() else {
        return Ok(None);
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(first.iter().map(|(label, _)| *label))
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    for record in records {
        writer
            .write_record(record.iter().map(|(_, value)| value.as_str()))
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    Ok(Some(bytes))
}

/// File name for an exported sheet: formatted date plus the active team
/// filter, or `ALL` when no team filter is set.
pub fn export_file_name(date: &str, team_name: Option<&str>) -> String {
    format!("{}-{}.csv", date, team_name.unwrap_or("ALL"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> SheetRecord {
        vec![
            ("Name", name.to_string()),
            ("Phone", phone.to_string()),
            ("Result", "Not rated".to_string()),
        ]
    }

    #[test]
    fn test_empty_selection_writes_nothing() {
        assert!(write_csv(&[]).unwrap().is_none());
    }

    #[test]
    fn test_csv_layout() {
        let bytes = write_csv(&[record("Kim", "010-1234"), record("Lee", "010-5678")])
            .unwrap()
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Name,Phone,Result");
        assert_eq!(lines[1], "Kim,010-1234,Not rated");
        assert_eq!(lines[2], "Lee,010-5678,Not rated");
    }

    #[test]
    fn test_values_with_commas_are_quoted() {
        let bytes = write_csv(&[vec![("Name", "Kim, Minsu".to_string())]])
            .unwrap()
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.lines().nth(1).unwrap().contains("\"Kim, Minsu\""));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("2024-03-01", Some("WEB")), "2024-03-01-WEB.csv");
        assert_eq!(export_file_name("2024-03-01", None), "2024-03-01-ALL.csv");
    }
}
