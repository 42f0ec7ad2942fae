pub mod fetch;
pub mod metadata;
pub mod pipeline;
pub mod schema;
pub mod transform;

pub use crate::domain::model::{LoadReport, RawRecord};
pub use crate::domain::ports::WarehouseLoader;
pub use crate::utils::error::Result;
