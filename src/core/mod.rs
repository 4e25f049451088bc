pub mod csv_source;
pub mod etl;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{Book, Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
