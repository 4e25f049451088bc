pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    etl::{run_books_etl, EtlEngine, RunReport},
    pipeline::BookPipeline,
};
pub use crate::domain::model::{Book, Record};
pub use crate::utils::error::{EtlError, Result};
