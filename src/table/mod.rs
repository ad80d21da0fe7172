// src/table/mod.rs
pub mod parse;
pub mod write;

pub use parse::parse_rows;
pub use write::serialize_quoted;

pub const FIELD_NAME: &str = "name";
pub const FIELD_NAME_EN: &str = "name_en";
pub const FIELD_OPENING_HOURS: &str = "opening_hours";

/// A single parsed record: field name → value pairs in the order the columns
/// appeared in the input. Field order is what keeps the serialized output
/// aligned with the header line, so it is never re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Row { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Field names in column order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(field, _)| field.as_str())
    }

    /// Field values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    /// The identity used for grouping and reconciliation: `name` when present
    /// and non-empty, otherwise `name_en`. Rows with neither have no identity.
    pub fn identity(&self) -> Option<&str> {
        [FIELD_NAME, FIELD_NAME_EN]
            .into_iter()
            .filter_map(|field| self.get(field))
            .find(|value| !value.is_empty())
    }

    pub fn opening_hours(&self) -> Option<&str> {
        self.get(FIELD_OPENING_HOURS)
    }

    /// Overwrite the opening-hours value. A row parsed without that column
    /// gains the field at the end; the serializer does not re-align columns.
    pub fn set_opening_hours(&mut self, value: &str) {
        match self
            .fields
            .iter_mut()
            .find(|(field, _)| field == FIELD_OPENING_HOURS)
        {
            Some(slot) => slot.1 = value.to_string(),
            None => self
                .fields
                .push((FIELD_OPENING_HOURS.to_string(), value.to_string())),
        }
    }
}
