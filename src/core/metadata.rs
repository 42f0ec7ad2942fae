use crate::domain::model::{CustomerRow, OrderLineItemRow, OrderRow};
use chrono::Utc;

/// Wire format for the `_loaded_at` provenance column.
pub const LOADED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Rows that carry the two provenance columns. Stamping overwrites any
/// previous values, so re-stamping never grows a row.
pub trait StampMetadata {
    fn stamp(&mut self, loaded_at: &str, source: &str);
}

impl StampMetadata for CustomerRow {
    fn stamp(&mut self, loaded_at: &str, source: &str) {
        self.loaded_at = Some(loaded_at.to_owned());
        self.source = Some(source.to_owned());
    }
}

impl StampMetadata for OrderRow {
    fn stamp(&mut self, loaded_at: &str, source: &str) {
        self.loaded_at = Some(loaded_at.to_owned());
        self.source = Some(source.to_owned());
    }
}

impl StampMetadata for OrderLineItemRow {
    fn stamp(&mut self, loaded_at: &str, source: &str) {
        self.loaded_at = Some(loaded_at.to_owned());
        self.source = Some(source.to_owned());
    }
}

/// Stamps `_loaded_at` and `_source` onto every row. The timestamp is
/// computed once per call, so all rows of one batch share the same value.
pub fn add_metadata<R: StampMetadata>(mut rows: Vec<R>, source: &str) -> Vec<R> {
    let loaded_at = Utc::now().format(LOADED_AT_FORMAT).to_string();
    for row in rows.iter_mut() {
        row.stamp(&loaded_at, source);
    }
    rows
}
