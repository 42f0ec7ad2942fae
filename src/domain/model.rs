use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One record as the API returned it. Field sets vary per entity and per
/// record, so this stays an untyped map until a transformer projects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub data: HashMap<String, Value>,
}

impl RawRecord {
    pub fn new(data: HashMap<String, Value>) -> Self {
        Self { data }
    }

    /// Lenient string extraction: strings pass through, numbers are rendered
    /// with their JSON representation, anything else is absent.
    pub fn get_string(&self, key: &str) -> Option<String> {
        value_to_string(self.data.get(key))
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.data.get(key).and_then(Value::as_f64)
    }

    pub fn get_object(&self, key: &str) -> Option<&serde_json::Map<String, Value>> {
        self.data.get(key).and_then(Value::as_object)
    }
}

impl From<serde_json::Map<String, Value>> for RawRecord {
    fn from(obj: serde_json::Map<String, Value>) -> Self {
        Self {
            data: obj.into_iter().collect(),
        }
    }
}

pub fn value_to_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Flat customer row matching `CUSTOMERS_SCHEMA`. The nested address object
/// from the API is flattened into the five street/city/state/zip/country
/// columns. Absent source fields serialize as null, never as missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(rename = "_loaded_at")]
    pub loaded_at: Option<String>,
    #[serde(rename = "_source")]
    pub source: Option<String>,
}

/// Flat order row matching `ORDERS_SCHEMA`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: Option<String>,
    pub customer_id: Option<String>,
    pub order_number: Option<String>,
    pub status: Option<String>,
    pub total_amount: Option<f64>,
    pub currency: Option<String>,
    pub order_date: Option<String>,
    pub shipped_date: Option<String>,
    pub delivered_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(rename = "_loaded_at")]
    pub loaded_at: Option<String>,
    #[serde(rename = "_source")]
    pub source: Option<String>,
}

/// Flat order line item row matching `ORDER_LINE_ITEMS_SCHEMA`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItemRow {
    pub id: Option<String>,
    pub order_id: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(rename = "_loaded_at")]
    pub loaded_at: Option<String>,
    #[serde(rename = "_source")]
    pub source: Option<String>,
}

/// Result report from the warehouse load collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub records_loaded: usize,
    pub records_skipped: usize,
}
