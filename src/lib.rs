pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "http-server")]
pub mod http;
pub mod indexing;
pub mod io;
pub mod logging;
pub mod manifest;
pub mod mcp;

pub use catalog::{
    Catalog, CatalogEntry, CatalogHandle, CatalogRules, CatalogSource, Category, IconFile,
    IconIdentity, Variation,
};
pub use config::Settings;
pub use error::{IndexError, IndexResult};
pub use indexing::{FsIconSource, IconIndexer, IconSource};
pub use manifest::Manifest;
pub use mcp::IconCatalogServer;
