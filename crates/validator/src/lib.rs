// Catalog and configuration checks run before a build

use folio_core::query::ALL;
use folio_core::{Catalog, SiteConfig};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Minimum number of featured posts the blog index expects
const FEATURED_MIN: usize = 2;

pub fn validate_site(catalog: &Catalog, config: &SiteConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_posts(catalog, &mut report);
    check_projects(catalog, &mut report);
    check_skills(catalog, &mut report);

    if config.author.name.trim().is_empty() {
        report.error("author.name is empty");
    }

    report.info.push(format!("{} blog posts", catalog.posts.len()));
    report.info.push(format!("{} projects", catalog.projects.len()));
    report.info.push(format!("{} skills", catalog.skills.len()));
    report.info.push(format!(
        "{} post categories, {} project categories",
        catalog.post_category_names().count(),
        catalog
            .project_categories
            .iter()
            .filter(|c| c.as_str() != ALL)
            .count()
    ));

    debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation finished"
    );
    report
}

fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn check_posts(catalog: &Catalog, report: &mut ValidationReport) {
    let declared: HashSet<&str> = catalog.post_category_names().collect();
    let mut seen = HashSet::new();

    for post in &catalog.posts {
        let label = format!("post {} ('{}')", post.id, post.title);

        if post.slug.is_empty() {
            report.error(format!("{}: empty slug", label));
        } else if !is_url_safe_slug(&post.slug) {
            report.error(format!(
                "{}: slug '{}' is not URL-safe (use a-z, 0-9 and '-')",
                label, post.slug
            ));
        }
        if !post.slug.is_empty() && !seen.insert(post.slug.as_str()) {
            report.error(format!("{}: duplicate slug '{}'", label, post.slug));
        }

        if post.published_on().is_none() {
            report.error(format!(
                "{}: date '{}' is not YYYY-MM-DD",
                label, post.date
            ));
        }

        if post.read_time_minutes() == 0 {
            report.warn(format!(
                "{}: read time '{}' has no leading minutes, sorts as 0",
                label, post.read_time
            ));
        }

        if !declared.contains(post.category.as_str()) {
            report.warn(format!(
                "{}: category '{}' has no listing tab",
                label, post.category
            ));
        }

        if post.image.is_none() {
            report.warn(format!("{}: no image", label));
        }
    }

    let featured = catalog.posts.iter().filter(|p| p.featured).count();
    if featured < FEATURED_MIN {
        report.warn(format!(
            "only {} featured post(s); the blog index shows {}",
            featured, FEATURED_MIN
        ));
    }
}

fn check_projects(catalog: &Catalog, report: &mut ValidationReport) {
    let declared: HashSet<&str> = catalog
        .project_categories
        .iter()
        .map(String::as_str)
        .filter(|c| *c != ALL)
        .collect();
    let mut titles = HashSet::new();

    for project in &catalog.projects {
        if !titles.insert(project.title.as_str()) {
            report.error(format!("duplicate project title '{}'", project.title));
        }

        if !declared.contains(project.category.as_str()) {
            report.warn(format!(
                "project '{}': category '{}' has no gallery tab",
                project.title, project.category
            ));
        }

        let m = project.metrics;
        for (name, value) in [
            ("performance", m.performance),
            ("security", m.security),
            ("scalability", m.scalability),
            ("maintainability", m.maintainability),
        ] {
            if value > 100 {
                report.error(format!(
                    "project '{}': {} score {} is above 100",
                    project.title, name, value
                ));
            }
        }
    }
}

fn check_skills(catalog: &Catalog, report: &mut ValidationReport) {
    for skill in &catalog.skills {
        if skill.level > 100 {
            report.error(format!(
                "skill '{}': level {} is above 100",
                skill.name, skill.level
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_is_clean() {
        let report = validate_site(&Catalog::embedded(), &SiteConfig::default());
        assert!(!report.has_errors(), "{:?}", report.errors);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert_eq!(report.info[0], "8 blog posts");
        assert_eq!(report.info[1], "6 projects");
    }

    #[test]
    fn test_duplicate_slug_is_error() {
        let mut catalog = Catalog::embedded();
        catalog.posts[1].slug = catalog.posts[0].slug.clone();
        let report = validate_site(&catalog, &SiteConfig::default());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("duplicate slug"));
    }

    #[test]
    fn test_bad_slug_and_date_are_errors() {
        let mut catalog = Catalog::embedded();
        catalog.posts[0].slug = "Has Spaces".to_string();
        catalog.posts[1].date = "Jan 10".to_string();
        catalog.posts[2].slug = String::new();
        let report = validate_site(&catalog, &SiteConfig::default());
        assert!(report.errors.iter().any(|e| e.contains("not URL-safe")));
        assert!(report.errors.iter().any(|e| e.contains("not YYYY-MM-DD")));
        assert!(report.errors.iter().any(|e| e.contains("empty slug")));
    }

    #[test]
    fn test_soft_problems_are_warnings() {
        let mut catalog = Catalog::embedded();
        catalog.posts[0].read_time = "a while".to_string();
        catalog.posts[0].category = "Rust".to_string();
        catalog.posts[0].image = None;
        for post in &mut catalog.posts {
            post.featured = false;
        }
        let report = validate_site(&catalog, &SiteConfig::default());
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 4);
    }

    #[test]
    fn test_skill_and_metric_ranges() {
        let mut catalog = Catalog::embedded();
        catalog.skills[0].level = 120;
        catalog.projects[0].metrics.security = 101;
        catalog.projects[1].title = catalog.projects[0].title.clone();
        let report = validate_site(&catalog, &SiteConfig::default());
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn test_is_url_safe_slug() {
        assert!(is_url_safe_slug("docker-for-developers"));
        assert!(is_url_safe_slug("web3"));
        assert!(!is_url_safe_slug("-leading"));
        assert!(!is_url_safe_slug("trailing-"));
        assert!(!is_url_safe_slug("Upper"));
        assert!(!is_url_safe_slug("under_score"));
        assert!(!is_url_safe_slug(""));
    }
}
