pub mod catalog;
pub mod config;
pub mod contact;
pub mod data;
pub mod error;
pub mod query;
pub mod types;

pub use catalog::{BlogStats, Catalog};
pub use config::{SiteConfig, load_site_config, parse_site_toml};
pub use contact::ContactForm;
pub use error::{Error, Result};
pub use query::{CatalogQuery, PostSort, ProjectSort, QueryPage, SortDirection};
pub use types::*;
