use super::load_config;
use folio_core::Catalog;
use folio_validator::validate_site;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let config = load_config(&path)?;
    println!("✓ site.toml valid");
    println!("  Site: {} by {}", config.title, config.author.name);

    let report = validate_site(&Catalog::embedded(), &config);

    for line in &report.info {
        println!("  {}", line);
    }
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for error in &report.errors {
        println!("✗ {}", error);
    }

    if report.has_errors() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!(
        "\n✓ Catalog valid ({} warning(s))",
        report.warnings.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_validate_without_site_toml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        assert!(run(dir.path().to_path_buf()).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_rejects_bad_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("site.toml"), "[site]\ntitle = 1\n").unwrap();
        assert!(run(dir.path().to_path_buf()).await.is_err());
    }

    #[tokio::test]
    async fn test_validate_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = run(dir.path().join("nope")).await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
