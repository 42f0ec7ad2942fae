use crate::core::schema::TableSchema;
use crate::domain::model::LoadReport;
use crate::domain::ports::WarehouseLoader;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Stand-in for the Snowflake writer owned by the data platform team. It
/// acknowledges every row; swap in the real client behind the same trait.
pub struct SnowflakeStubLoader;

#[async_trait]
impl WarehouseLoader for SnowflakeStubLoader {
    async fn load(
        &self,
        schema: &TableSchema,
        rows: Vec<Value>,
        database: &str,
        schema_name: &str,
        table: &str,
    ) -> Result<LoadReport> {
        tracing::debug!(
            "Stub load of {} rows into {}.{}.{} ({} columns)",
            rows.len(),
            database,
            schema_name,
            table,
            schema.columns.len()
        );
        Ok(LoadReport {
            records_loaded: rows.len(),
            records_skipped: 0,
        })
    }
}
