pub mod build;
pub mod init;
pub mod preview;
pub mod query;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use folio_core::{SiteConfig, load_site_config};
use std::path::Path;

/// Load the site configuration for a site directory
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'folio init {}' first",
            path.display(),
            path.display()
        );
    }

    load_site_config(path).context("Failed to load site.toml")
}
