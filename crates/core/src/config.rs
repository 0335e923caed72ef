use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use url::Url;

/// File name of the site configuration inside a site directory
pub const SITE_TOML: &str = "site.toml";

/// Environment variable that overrides `site.base_url`
pub const BASE_URL_ENV: &str = "FOLIO_BASE_URL";

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Validated site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub base_url: String,
    pub author: AuthorConfig,
    pub blog_page_size: usize,
    pub projects_page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorConfig {
    pub name: String,
    pub role: String,
    pub tagline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Ezedin Ebrahim - Software Developer".to_string(),
            description: "Personal website of Ezedin Ebrahim, a passionate software developer \
                          specializing in modern web technologies."
                .to_string(),
            base_url: "https://example.com".to_string(),
            author: AuthorConfig {
                name: "Ezedin Ebrahim".to_string(),
                role: "Software Developer".to_string(),
                tagline: "I build fast, accessible web applications and the APIs behind them."
                    .to_string(),
                email: None,
            },
            blog_page_size: DEFAULT_PAGE_SIZE,
            projects_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    site: RawSite,
    author: RawAuthor,
    #[serde(default)]
    blog: Option<RawListing>,
    #[serde(default)]
    projects: Option<RawListing>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    title: String,
    description: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    name: String,
    role: String,
    tagline: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawListing {
    page_size: Option<i64>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = SiteConfig::default();

    let base_url = validate_base_url(&raw.site.base_url, "site.base_url")?;

    let blog_page_size = match raw.blog.and_then(|b| b.page_size) {
        Some(size) => validate_page_size(size, "blog.page_size")?,
        None => DEFAULT_PAGE_SIZE,
    };
    let projects_page_size = match raw.projects.and_then(|p| p.page_size) {
        Some(size) => validate_page_size(size, "projects.page_size")?,
        None => DEFAULT_PAGE_SIZE,
    };

    if raw.author.name.trim().is_empty() {
        return Err(Error::ConfigParse("author.name must not be empty".to_string()));
    }

    Ok(SiteConfig {
        title: raw.site.title,
        description: raw.site.description,
        base_url,
        author: AuthorConfig {
            name: raw.author.name,
            role: raw.author.role,
            tagline: raw.author.tagline.unwrap_or(defaults.author.tagline),
            email: raw.author.email.filter(|e| !e.trim().is_empty()),
        },
        blog_page_size,
        projects_page_size,
    })
}

/// Load the configuration for a site directory.
///
/// A missing site.toml is not an error: the defaults describe the embedded
/// catalog's author. A present but invalid file is.
pub fn load_site_config(dir: &Path) -> Result<SiteConfig> {
    let path = dir.join(SITE_TOML);
    let mut config = if path.exists() {
        debug!(path = %path.display(), "loading site config");
        parse_site_toml(&path)?
    } else {
        warn!(
            path = %path.display(),
            "site.toml not found, using built-in defaults"
        );
        SiteConfig::default()
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Apply environment overrides using the given lookup
pub fn apply_env_overrides<F>(config: &mut SiteConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(BASE_URL_ENV) {
        debug!(%url, "base_url overridden from environment");
        config.base_url = validate_base_url(&url, BASE_URL_ENV)?;
    }
    Ok(())
}

/// Validate a base URL: http(s) scheme, a host, no trailing slash kept
fn validate_base_url(url: &str, field_name: &str) -> Result<String> {
    let invalid = |reason: String| {
        Error::ConfigParse(format!("'{}' {}: '{}'", field_name, reason, url))
    };

    let parsed =
        Url::parse(url.trim()).map_err(|e| invalid(format!("is not a valid URL ({})", e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid(format!("has unsupported scheme {}", scheme))),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("has no host".to_string()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn validate_page_size(size: i64, field_name: &str) -> Result<usize> {
    if size <= 0 {
        return Err(Error::ConfigParse(format!(
            "'{}' must be greater than zero, got {}",
            field_name, size
        )));
    }
    usize::try_from(size)
        .map_err(|_| Error::ConfigParse(format!("'{}' is too large: {}", field_name, size)))
}
