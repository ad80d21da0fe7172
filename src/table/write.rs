// src/table/write.rs
use super::Row;

/// Serialize rows into a single delimited-text payload with every header name
/// and field value wrapped in literal quote characters. Embedded quotes are
/// not escaped; that matches the output contract and is a documented
/// limitation of the format, not something this function repairs.
///
/// The header line comes from the first row's field names. An empty row set
/// serializes to an empty payload.
pub fn serialize_quoted(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(quote_join(first.field_names()));
    for row in rows {
        lines.push(quote_join(row.values()));
    }
    lines.join("\n")
}

fn quote_join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .map(|part| format!("\"{}\"", part))
        .collect::<Vec<_>>()
        .join(",")
}
