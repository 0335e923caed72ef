use anyhow::{Context, Result};
use folio_core::query::{CategoryCount, QueryPage};
use folio_core::{BlogPost, Catalog, CatalogQuery, PostSort, Project, ProjectSort, SortDirection};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};

use super::load_config;
use crate::QueryKind;

/// Query options as given on the command line
#[derive(Debug, Clone)]
pub struct QueryArgs {
    pub category: String,
    pub search: String,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: i64,
    pub page_size: Option<usize>,
    pub json: bool,
}

pub async fn run(path: PathBuf, kind: QueryKind, args: QueryArgs) -> Result<()> {
    let config = load_config(&path)?;
    let catalog = Catalog::embedded();

    let out = match kind {
        QueryKind::Posts => {
            let query = post_query(&args, config.blog_page_size);
            debug!(?query, "running post query");
            let result = catalog.query_posts(&query);
            if args.json {
                serde_json::to_string_pretty(&result).context("Failed to serialize result")?
            } else {
                format_posts(&result)
            }
        }
        QueryKind::Projects => {
            let query = project_query(&args, config.projects_page_size);
            debug!(?query, "running project query");
            let result = catalog.query_projects(&query);
            if args.json {
                serde_json::to_string_pretty(&result).context("Failed to serialize result")?
            } else {
                format_projects(&result)
            }
        }
    };

    println!("{}", out);
    Ok(())
}

/// Parse an optional value, falling back to the default with a warning
fn parse_or_default<T>(raw: Option<&str>, what: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = raw?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{}; using the default {}", e, what);
            None
        }
    }
}

fn apply_common<K>(mut query: CatalogQuery<K>, args: &QueryArgs) -> CatalogQuery<K> {
    if let Some(dir) = parse_or_default::<SortDirection>(args.dir.as_deref(), "direction") {
        query.direction = dir;
    }
    query
        .category(args.category.clone())
        .search(args.search.clone())
        .page(args.page)
}

pub fn post_query(args: &QueryArgs, page_size: usize) -> CatalogQuery<PostSort> {
    let mut query = CatalogQuery::posts(args.page_size.unwrap_or(page_size));
    if let Some(sort) = parse_or_default(args.sort.as_deref(), "sort key") {
        query.sort = sort;
    }
    apply_common(query, args)
}

pub fn project_query(args: &QueryArgs, page_size: usize) -> CatalogQuery<ProjectSort> {
    let mut query = CatalogQuery::projects(args.page_size.unwrap_or(page_size));
    if let Some(sort) = parse_or_default(args.sort.as_deref(), "sort key") {
        query.sort = sort;
    }
    apply_common(query, args)
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn header<T>(result: &QueryPage<'_, T>) -> String {
    format!(
        "Page {} of {} ({} match{})\n",
        result.page,
        result.total_pages,
        result.total_matches,
        if result.total_matches == 1 { "" } else { "es" }
    )
}

fn footer(counts: &[CategoryCount]) -> String {
    let counts: Vec<String> = counts
        .iter()
        .map(|c| format!("{} ({})", c.name, c.count))
        .collect();
    format!("\nCategories: {}", counts.join(", "))
}

pub fn format_posts(result: &QueryPage<'_, BlogPost>) -> String {
    let mut out = header(result);
    if result.items.is_empty() {
        out.push_str("\nNo posts match.\n");
    } else {
        out.push('\n');
        for post in &result.items {
            out.push_str(&format!(
                "{:<10}  {:<40}  {:<16}  {}\n",
                post.date,
                truncate(&post.title, 40),
                post.category,
                post.read_time
            ));
        }
    }
    out.push_str(&footer(&result.category_counts));
    out
}

pub fn format_projects(result: &QueryPage<'_, Project>) -> String {
    let mut out = header(result);
    if result.items.is_empty() {
        out.push_str("\nNo projects match.\n");
    } else {
        out.push('\n');
        for project in &result.items {
            out.push_str(&format!(
                "{:<28}  {:<12}  perf {:>3}  {}\n",
                truncate(&project.title, 28),
                project.category,
                project.metrics.performance,
                project.tags.join(", ")
            ));
        }
    }
    out.push_str(&footer(&result.category_counts));
    out
}
