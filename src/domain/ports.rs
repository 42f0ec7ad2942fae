use crate::core::schema::TableSchema;
use crate::domain::model::LoadReport;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Seam to the warehouse write path, which is owned by another team. Rows
/// arrive as flat JSON objects already stamped with provenance metadata;
/// the schema describes the target column types, the remaining arguments
/// name the target table.
#[async_trait]
pub trait WarehouseLoader: Send + Sync {
    async fn load(
        &self,
        schema: &TableSchema,
        rows: Vec<Value>,
        database: &str,
        schema_name: &str,
        table: &str,
    ) -> Result<LoadReport>;
}
