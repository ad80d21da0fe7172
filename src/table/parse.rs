// src/table/parse.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::io::Read;

use super::Row;

/// Parse a delimited-text payload with a header row into ordered field maps,
/// one per record. Column order is preserved exactly as the header declares
/// it. Malformed records are a hard failure for the whole run rather than a
/// silently truncated row set.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record =
            record.with_context(|| format!("CSV parse error at record {}", idx + 1))?;
        let fields = headers
            .iter()
            .cloned()
            .zip(record.iter().map(|v| v.to_string()))
            .collect();
        rows.push(Row::new(fields));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_preserving_column_order() -> Result<()> {
        let data = "name,opening_hours,city\nShop A,Mo-Fr 9-5,Berlin\nShop B,,Hamburg\n";
        let rows = parse_rows(data.as_bytes())?;

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].field_names().collect::<Vec<_>>(),
            vec!["name", "opening_hours", "city"]
        );
        assert_eq!(rows[0].get("city"), Some("Berlin"));
        assert_eq!(rows[1].opening_hours(), Some(""));
        Ok(())
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() -> Result<()> {
        let data = "name,opening_hours\n\"Shop, The\",\"Mo-Fr 9-5\"\n";
        let rows = parse_rows(data.as_bytes())?;
        assert_eq!(rows[0].get("name"), Some("Shop, The"));
        Ok(())
    }

    #[test]
    fn ragged_record_is_a_parse_error() {
        let data = "name,opening_hours\nShop A,Mo-Fr 9-5,extra\n";
        let err = parse_rows(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn header_only_input_yields_no_rows() -> Result<()> {
        let rows = parse_rows("name,opening_hours\n".as_bytes())?;
        assert!(rows.is_empty());
        Ok(())
    }
}
