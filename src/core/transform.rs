use crate::domain::model::{
    value_to_string, CustomerRow, OrderLineItemRow, OrderRow, RawRecord,
};

/// Flattens the nested address object and projects the columns the
/// `CUSTOMERS` table expects. Missing fields load as null.
pub fn transform_customers(records: Vec<RawRecord>) -> Vec<CustomerRow> {
    records
        .into_iter()
        .map(|r| {
            let address = r.get_object("address").cloned().unwrap_or_default();
            CustomerRow {
                id: r.get_string("id"),
                email: r.get_string("email"),
                first_name: r.get_string("first_name"),
                last_name: r.get_string("last_name"),
                phone: r.get_string("phone"),
                street: value_to_string(address.get("street")),
                city: value_to_string(address.get("city")),
                state: value_to_string(address.get("state")),
                zip_code: value_to_string(address.get("zip_code")),
                country: value_to_string(address.get("country")),
                created_at: r.get_string("created_at"),
                updated_at: r.get_string("updated_at"),
                loaded_at: None,
                source: None,
            }
        })
        .collect()
}

pub fn transform_orders(records: Vec<RawRecord>) -> Vec<OrderRow> {
    records
        .into_iter()
        .map(|r| OrderRow {
            id: r.get_string("id"),
            customer_id: r.get_string("customer_id"),
            order_number: r.get_string("order_number"),
            status: r.get_string("status"),
            total_amount: r.get_number("total_amount"),
            currency: r.get_string("currency"),
            order_date: r.get_string("order_date"),
            shipped_date: r.get_string("shipped_date"),
            delivered_date: r.get_string("delivered_date"),
            created_at: r.get_string("created_at"),
            updated_at: r.get_string("updated_at"),
            loaded_at: None,
            source: None,
        })
        .collect()
}

pub fn transform_order_line_items(records: Vec<RawRecord>) -> Vec<OrderLineItemRow> {
    records
        .into_iter()
        .map(|r| OrderLineItemRow {
            id: r.get_string("id"),
            order_id: r.get_string("order_id"),
            product_id: r.get_string("product_id"),
            product_name: r.get_string("product_name"),
            quantity: r.get_number("quantity"),
            unit_price: r.get_number("unit_price"),
            total_price: r.get_number("total_price"),
            created_at: r.get_string("created_at"),
            updated_at: r.get_string("updated_at"),
            loaded_at: None,
            source: None,
        })
        .collect()
}
