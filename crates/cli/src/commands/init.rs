use anyhow::{Context, Result};
use folio_core::config::{SITE_TOML, parse_site_toml_str};
use folio_core::contact::is_valid_email;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Escape a string for a TOML basic string.
///
/// The template carries comments and hand-picked layout, so it is written as
/// text rather than serialized.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Initialize a new site directory.
///
/// Creates the directory if needed, writes a commented `site.toml` and an
/// empty `static/` directory whose files are copied into every build.
///
/// # Errors
///
/// Returns an error if `site.toml` already exists, the email is malformed,
/// or a file operation fails.
pub async fn run(path: PathBuf, name: Option<String>, email: Option<String>) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    let site_toml_path = path.join(SITE_TOML);
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists at {}\nHint: Delete it first or use a different directory",
            site_toml_path.display()
        );
    }

    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    create_static_dir(&path)?;
    generate_site_toml(&path, name.as_deref(), email.as_deref())?;

    info!(path = %path.display(), "site initialized");

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── site.toml            ← Edit this to set title, author, etc.");
    println!("  └── static/              ← Files here are copied into the build");

    println!("\nNext steps:");
    println!("  1. Edit site.toml (title, base_url, author)");
    println!("  2. Check it: folio validate {}", path.display());
    println!("  3. Preview: folio preview {}", path.display());

    Ok(())
}

fn create_static_dir(base: &Path) -> Result<()> {
    let dir = base.join("static");
    fs::create_dir_all(&dir).context("Failed to create static directory")?;
    fs::write(
        dir.join("robots.txt"),
        "User-agent: *\nAllow: /\n",
    )
    .context("Failed to write static/robots.txt")?;
    debug!(dir = %dir.display(), "created static directory");
    Ok(())
}

fn generate_site_toml(base: &Path, name: Option<&str>, email: Option<&str>) -> Result<()> {
    if let Some(e) = email
        && !is_valid_email(e)
    {
        anyhow::bail!("Invalid email format: '{}'", e);
    }

    let author_name = toml_escape_string(name.unwrap_or("Ezedin Ebrahim"));
    let name_comment = if name.is_some() {
        ""
    } else {
        "  # TODO: Set your name"
    };
    let email_line = match email {
        Some(e) => format!("email = \"{}\"", toml_escape_string(e)),
        None => "# email = \"you@example.com\"  # Overrides the contact email".to_string(),
    };

    let toml = format!(
        "# Generated by folio init\n\
# Edit this file to customize your site\n\
\n\
[site]\n\
title = \"{author_name} - Software Developer\"\n\
description = \"Personal website and blog\"\n\
base_url = \"https://example.com\"  # TODO: Set your domain (FOLIO_BASE_URL overrides)\n\
\n\
[author]\n\
name = \"{author_name}\"{name_comment}\n\
role = \"Software Developer\"\n\
tagline = \"I build fast, accessible web applications and the APIs behind them.\"\n\
{email_line}\n\
\n\
[blog]\n\
page_size = 6\n\
\n\
[projects]\n\
page_size = 6\n"
    );

    // Make sure the template parses as a real site config
    parse_site_toml_str(&toml)
        .context("Generated site.toml is invalid - this is a bug in the template generator")?;

    fs::write(base.join(SITE_TOML), toml).context("Failed to write site.toml")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::parse_site_toml;
    use tempfile::TempDir;

    #[test]
    fn test_toml_escape_string() {
        assert_eq!(toml_escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(toml_escape_string(r"C:\path"), r"C:\\path");
        assert_eq!(toml_escape_string("a\nb\tc"), "a\\nb\\tc");
    }

    #[test]
    fn test_generate_site_toml_defaults() {
        let dir = TempDir::new().unwrap();
        generate_site_toml(dir.path(), None, None).unwrap();

        let content = fs::read_to_string(dir.path().join(SITE_TOML)).unwrap();
        assert!(content.contains("TODO: Set your name"));
        assert!(content.contains("# email ="));

        let config = parse_site_toml(dir.path().join(SITE_TOML)).unwrap();
        assert_eq!(config.author.name, "Ezedin Ebrahim");
        assert_eq!(config.blog_page_size, 6);
        assert_eq!(config.author.email, None);
    }

    #[test]
    fn test_generate_site_toml_with_special_characters() {
        let dir = TempDir::new().unwrap();
        generate_site_toml(
            dir.path(),
            Some(r#"Ada "The Countess" \ Lovelace"#),
            Some("ada@example.com"),
        )
        .unwrap();

        let config = parse_site_toml(dir.path().join(SITE_TOML)).unwrap();
        assert_eq!(config.author.name, r#"Ada "The Countess" \ Lovelace"#);
        assert_eq!(config.author.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_generate_site_toml_invalid_email() {
        let dir = TempDir::new().unwrap();
        let result = generate_site_toml(dir.path(), None, Some("invalid-email"));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid email"));
        assert!(!dir.path().join(SITE_TOML).exists());
    }

    #[tokio::test]
    async fn test_run_creates_structure() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("my-site");

        run(site.clone(), None, None).await.unwrap();

        assert!(site.join(SITE_TOML).is_file());
        assert!(site.join("static").is_dir());
        assert!(site.join("static/robots.txt").is_file());
    }

    #[tokio::test]
    async fn test_run_refuses_existing_site_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_TOML), "# mine").unwrap();

        let err = run(dir.path().to_path_buf(), None, None).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(dir.path().join(SITE_TOML)).unwrap(),
            "# mine"
        );
    }
}
