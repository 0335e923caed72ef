use anyhow::{Context, Result};
use folio_core::Catalog;
use folio_generator::{GeneratedSite, generate_site};
use folio_validator::validate_site;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::load_config;

/// Build the static export into `output`
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let config = load_config(&path)?;
    let catalog = Catalog::embedded();

    let report = validate_site(&catalog, &config);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            eprintln!("   ✗ {}", error);
        }
        anyhow::bail!(
            "Catalog has {} error(s); run 'folio validate' for details",
            report.errors.len()
        );
    }

    println!("✓ Loaded: {}", config.title);
    println!("  Posts: {}", catalog.posts.len());
    println!("  Projects: {}", catalog.projects.len());
    println!();

    println!("📄 Rendering pages...");
    let site = generate_site(&catalog, &config)?;
    let written = write_site(&site, &output)?;
    println!("   ✓ Wrote {} pages and {} assets", site.pages.len(), site.assets.len());

    println!("📁 Copying static files...");
    let copied = copy_static(&path.join("static"), &output)?;
    println!("   ✓ Copied {} static files", copied);

    info!(files = written + copied, output = %output.display(), "build complete");

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write every page and asset under `output`, returning the file count
pub fn write_site(site: &GeneratedSite, output: &Path) -> Result<usize> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    for (rel, html) in &site.pages {
        debug!(path = %rel, "writing page");
        write_file(&output.join(rel), html.as_bytes())?;
    }
    for (rel, data) in &site.assets {
        debug!(path = %rel, bytes = data.len(), "writing asset");
        write_file(&output.join(rel), data)?;
    }

    Ok(site.pages.len() + site.assets.len())
}

/// Copy `static_dir` recursively into `output`; a missing directory copies nothing
pub fn copy_static(static_dir: &Path, output: &Path) -> Result<usize> {
    if !static_dir.is_dir() {
        debug!(dir = %static_dir.display(), "no static directory");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(static_dir) {
        let entry = entry.context("Failed to read static directory")?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(static_dir)
            .context("Static file outside static directory")?;
        let dest = output.join(rel);
        if dest.exists() {
            debug!(path = %rel.display(), "static file replaces generated file");
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }

    Ok(copied)
}
