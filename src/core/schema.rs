use serde::Serialize;
use std::fmt;

/// Logical column type tag understood by the warehouse loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "NUMBER")]
    Number,
    #[serde(rename = "TIMESTAMP_TZ")]
    TimestampTz,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ColumnType::String => "STRING",
            ColumnType::Number => "NUMBER",
            ColumnType::TimestampTz => "TIMESTAMP_TZ",
        };
        f.write_str(tag)
    }
}

/// Ordered column-name to type mapping describing one target table. Passed
/// to the loader as metadata only; nothing here validates row contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub columns: &'static [(&'static str, ColumnType)],
}

impl TableSchema {
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(name, _)| *name)
    }
}

use ColumnType::{Number, String as Str, TimestampTz};

pub const CUSTOMERS_SCHEMA: TableSchema = TableSchema {
    columns: &[
        ("id", Str),
        ("email", Str),
        ("first_name", Str),
        ("last_name", Str),
        ("phone", Str),
        ("street", Str),
        ("city", Str),
        ("state", Str),
        ("zip_code", Str),
        ("country", Str),
        ("created_at", TimestampTz),
        ("updated_at", TimestampTz),
        ("_loaded_at", TimestampTz),
        ("_source", Str),
    ],
};

pub const ORDERS_SCHEMA: TableSchema = TableSchema {
    columns: &[
        ("id", Str),
        ("customer_id", Str),
        ("order_number", Str),
        ("status", Str),
        ("total_amount", Number),
        ("currency", Str),
        ("order_date", TimestampTz),
        ("shipped_date", TimestampTz),
        ("delivered_date", TimestampTz),
        ("created_at", TimestampTz),
        ("updated_at", TimestampTz),
        ("_loaded_at", TimestampTz),
        ("_source", Str),
    ],
};

pub const ORDER_LINE_ITEMS_SCHEMA: TableSchema = TableSchema {
    columns: &[
        ("id", Str),
        ("order_id", Str),
        ("product_id", Str),
        ("product_name", Str),
        ("quantity", Number),
        ("unit_price", Number),
        ("total_price", Number),
        ("created_at", TimestampTz),
        ("updated_at", TimestampTz),
        ("_loaded_at", TimestampTz),
        ("_source", Str),
    ],
};
