// Static site generation with Leptos SSR

pub mod assets;
pub mod components;
pub mod links;
pub mod markdown;
pub mod pages;

use anyhow::Result;
use folio_core::query::ALL;
use folio_core::{Catalog, CatalogQuery, SiteConfig};
use std::iter;
use tracing::{debug, info};

pub use links::LinkStyle;
pub use pages::{
    PageContext, render_blog_listing, render_error_page, render_home, render_not_found,
    render_post,
};

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

impl GeneratedSite {
    pub fn page(&self, path: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, html)| html.as_str())
    }
}

/// Render every page of the static export
pub fn generate_site(catalog: &Catalog, config: &SiteConfig) -> Result<GeneratedSite> {
    let ctx = PageContext::new(catalog, config);
    let mut urls = vec!["/".to_string()];
    let mut pages = vec![("index.html".to_string(), render_home(&ctx))];

    // Listing pages for "All" and every declared category, empty ones included
    for category in iter::once(ALL).chain(catalog.post_category_names()) {
        let base = CatalogQuery::posts(config.blog_page_size).category(category);
        let total_pages = catalog.query_posts(&base).total_pages;

        for page in 1..=total_pages {
            let url = links::listing_path(category, page);
            let query = base.clone().page(page as i64);
            debug!(url = %url, "rendering listing page");
            pages.push((
                links::index_file(&url),
                render_blog_listing(&ctx, &query, LinkStyle::Static),
            ));
            urls.push(url);
        }
    }

    for post in &catalog.posts {
        let url = post.path();
        debug!(url = %url, "rendering post");
        pages.push((links::index_file(&url), render_post(&ctx, post)));
        urls.push(url);
    }

    pages.push(("404.html".to_string(), render_not_found(&ctx, None)));

    let assets = vec![
        ("style.css".to_string(), assets::STYLE_CSS.as_bytes().to_vec()),
        (
            "search-index.json".to_string(),
            assets::search_index_json(catalog)?,
        ),
        (
            "sitemap.xml".to_string(),
            assets::sitemap_xml(catalog, config, &urls).into_bytes(),
        ),
    ];

    info!(
        pages = pages.len(),
        assets = assets.len(),
        "site generated"
    );

    Ok(GeneratedSite { pages, assets })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated() -> GeneratedSite {
        generate_site(&Catalog::embedded(), &SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_export_layout() {
        let site = generated();
        for path in [
            "index.html",
            "blog/index.html",
            "blog/page/2/index.html",
            "blog/category/react/index.html",
            "blog/category/next-js/index.html",
            "blog/category/devops/index.html",
            "blog/typescript-best-practices/index.html",
            "404.html",
        ] {
            assert!(site.page(path).is_some(), "missing {}", path);
        }
        assert!(site.page("blog/page/3/index.html").is_none());
        assert!(site.page("blog/category/all/index.html").is_none());

        let assets: Vec<&str> = site.assets.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(assets, ["style.css", "search-index.json", "sitemap.xml"]);
    }

    #[test]
    fn test_page_count() {
        let site = generated();
        // home + 2 listing pages + 8 category pages + 8 posts + 404
        assert_eq!(site.pages.len(), 1 + 2 + 8 + 8 + 1);
    }

    #[test]
    fn test_empty_category_still_gets_a_page() {
        let mut catalog = Catalog::embedded();
        catalog.post_categories.push("Rust".to_string());
        let site = generate_site(&catalog, &SiteConfig::default()).unwrap();

        let html = site.page("blog/category/rust/index.html").unwrap();
        assert!(html.contains("No posts found"));
        assert!(html.contains("Rust (0)"));
    }

    #[test]
    fn test_page_size_drives_pagination() {
        let config = SiteConfig {
            blog_page_size: 3,
            ..SiteConfig::default()
        };
        let site = generate_site(&Catalog::embedded(), &config).unwrap();
        assert!(site.page("blog/page/3/index.html").is_some());
        assert!(site.page("blog/page/4/index.html").is_none());

        let last = site.page("blog/page/3/index.html").unwrap();
        assert!(last.contains("Page 3 of 3"));
    }

    #[test]
    fn test_sitemap_lists_every_page() {
        let site = generated();
        let (_, sitemap) = site
            .assets
            .iter()
            .find(|(p, _)| p == "sitemap.xml")
            .unwrap();
        let sitemap = String::from_utf8(sitemap.clone()).unwrap();
        // every html page except the 404
        assert_eq!(sitemap.matches("<url>").count(), site.pages.len() - 1);
    }
}
