use anyhow::{Context, Result};
use folio_core::{Catalog, SiteConfig};
use serde::Serialize;

pub const STYLE_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
    color: #e5e7eb;
    background: #0f172a;
}
a { color: #22d3ee; text-decoration: none; }
a:hover { text-decoration: underline; }
main { max-width: 1100px; margin: 0 auto; padding: 2rem 1.25rem; }
h1, h2, h3 { color: #f8fafc; line-height: 1.25; margin-bottom: 0.75rem; }
section { margin-bottom: 3rem; }

.site-nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    border-bottom: 1px solid #1e293b;
}
.site-nav ul { display: flex; gap: 1.5rem; list-style: none; }
.site-nav .brand { font-weight: 700; color: #f8fafc; }
.site-footer {
    text-align: center;
    color: #94a3b8;
    font-size: 0.9rem;
    padding: 2rem 0;
    border-top: 1px solid #1e293b;
}
.preview-badge {
    background: #ff6b35;
    color: white;
    padding: 0.5rem 1rem;
    text-align: center;
    font-weight: bold;
}

.hero { padding: 4rem 0; text-align: center; }
.hero h1 { font-size: 3rem; }
.hero .role { font-size: 1.4rem; color: #a5b4fc; }
.cta { margin-top: 1.5rem; display: flex; gap: 1rem; justify-content: center; }
.button {
    display: inline-block;
    padding: 0.6rem 1.4rem;
    border-radius: 999px;
    background: #2563eb;
    color: white;
}
.button.secondary { background: transparent; border: 1px solid #2563eb; }

.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
.grid.two { grid-template-columns: repeat(auto-fill, minmax(420px, 1fr)); }
.post-card, .project-card, .skill, .stat {
    background: #1e293b;
    border: 1px solid #334155;
    border-radius: 12px;
    padding: 1.25rem;
}
.thumb, .cover { width: 100%; border-radius: 8px; margin-bottom: 0.75rem; object-fit: cover; }
.thumb { height: 180px; }
.post-meta { display: flex; gap: 0.75rem; font-size: 0.85rem; color: #94a3b8; margin-bottom: 0.5rem; }
.category { color: #a855f7; font-weight: 600; }
.tags { display: flex; flex-wrap: wrap; gap: 0.4rem; list-style: none; margin: 0.75rem 0; }
.tags li { background: #334155; border-radius: 999px; padding: 0.1rem 0.6rem; font-size: 0.8rem; }
.tags .more { background: transparent; color: #94a3b8; }

.category-tabs { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
.tab { padding: 0.35rem 0.9rem; border: 1px solid #334155; border-radius: 999px; color: #cbd5e1; }
.tab.active { background: #2563eb; border-color: #2563eb; color: white; }
.search { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
.search input, .search select, .contact-form input, .contact-form textarea {
    background: #0f172a;
    color: #e5e7eb;
    border: 1px solid #334155;
    border-radius: 8px;
    padding: 0.5rem 0.75rem;
}
.summary, .empty { color: #94a3b8; margin: 1rem 0; }
.pagination { display: flex; gap: 1rem; justify-content: center; align-items: center; margin: 2rem 0; }

.blog-stats, .stat-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
    gap: 1rem;
    margin-top: 2rem;
}
.stat strong { display: block; font-size: 1.6rem; }
.stat span { color: #94a3b8; font-size: 0.85rem; }

.bar { height: 6px; background: #334155; border-radius: 3px; overflow: hidden; margin: 0.4rem 0; }
.fill { height: 100%; background: #22d3ee; }
.skills { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1rem; }
.metrics { margin: 0.75rem 0; font-size: 0.85rem; }
.timeline { list-style: none; border-left: 2px solid #334155; padding-left: 1.25rem; margin: 1rem 0 2rem; }
.timeline li { margin-bottom: 1.25rem; }
.timeline .company { color: #94a3b8; }
details summary { cursor: pointer; color: #22d3ee; margin: 0.5rem 0; }
details h4 { margin-top: 0.75rem; }
.links { display: flex; gap: 1rem; margin-top: 0.75rem; }

.contact-info { list-style: none; margin: 1rem 0; }
.contact-form { display: grid; gap: 0.75rem; max-width: 560px; }
.contact-form button, .search button {
    background: #2563eb;
    color: white;
    border: none;
    border-radius: 8px;
    padding: 0.6rem 1.2rem;
    cursor: pointer;
}

.post { max-width: 760px; margin: 0 auto; }
.post .lead { font-size: 1.2rem; color: #cbd5e1; }
.post .byline { color: #94a3b8; margin: 1rem 0; }
.prose h2, .prose h3 { margin-top: 2rem; }
.prose p, .prose ul, .prose ol, .prose pre, .prose table { margin-bottom: 1rem; }
.prose ul, .prose ol { padding-left: 1.5rem; }
.prose pre { background: #020617; padding: 1rem; border-radius: 8px; overflow-x: auto; }
.prose code { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 0.9em; }
.prose table { border-collapse: collapse; }
.prose th, .prose td { border: 1px solid #334155; padding: 0.4rem 0.8rem; }
.post-footer { display: flex; justify-content: space-between; color: #94a3b8; border-top: 1px solid #1e293b; padding-top: 1rem; margin-top: 2rem; }
.related ul { list-style: none; }
.related li { display: flex; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid #1e293b; }
.not-found, .error { text-align: center; padding: 4rem 0; }

@media (max-width: 768px) {
    .hero h1 { font-size: 2.2rem; }
    .grid.two { grid-template-columns: 1fr; }
    .site-nav { flex-direction: column; gap: 0.75rem; }
}
"#;

#[derive(Serialize)]
struct SearchIndex<'a> {
    posts: Vec<PostEntry<'a>>,
    projects: Vec<ProjectEntry<'a>>,
    post_categories: &'a [String],
    project_categories: &'a [String],
}

#[derive(Serialize)]
struct PostEntry<'a> {
    slug: &'a str,
    url: String,
    title: &'a str,
    excerpt: &'a str,
    date: &'a str,
    read_time: &'a str,
    read_minutes: u32,
    category: &'a str,
    tags: &'a [String],
    featured: bool,
}

#[derive(Serialize)]
struct ProjectEntry<'a> {
    title: &'a str,
    anchor: String,
    description: &'a str,
    category: &'a str,
    tags: &'a [String],
    features: &'a [String],
    performance: u8,
}

/// Catalog summary for client-side search; post bodies are left out
pub fn search_index_json(catalog: &Catalog) -> Result<Vec<u8>> {
    let index = SearchIndex {
        posts: catalog
            .posts
            .iter()
            .map(|p| PostEntry {
                slug: &p.slug,
                url: p.path(),
                title: &p.title,
                excerpt: &p.excerpt,
                date: &p.date,
                read_time: &p.read_time,
                read_minutes: p.read_time_minutes(),
                category: &p.category,
                tags: &p.tags,
                featured: p.featured,
            })
            .collect(),
        projects: catalog
            .projects
            .iter()
            .map(|p| ProjectEntry {
                title: &p.title,
                anchor: format!("/#{}", p.anchor()),
                description: &p.description,
                category: &p.category,
                tags: &p.tags,
                features: &p.features,
                performance: p.metrics.performance,
            })
            .collect(),
        post_categories: &catalog.post_categories,
        project_categories: &catalog.project_categories,
    };

    serde_json::to_vec_pretty(&index).context("Failed to serialize search index")
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// sitemap.xml for the exported `paths`, with post dates as `lastmod`
pub fn sitemap_xml(catalog: &Catalog, config: &SiteConfig, paths: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for path in paths {
        let lastmod = catalog
            .posts
            .iter()
            .find(|p| p.path() == *path)
            .filter(|p| p.published_on().is_some())
            .map(|p| format!("<lastmod>{}</lastmod>", escape_xml(&p.date)))
            .unwrap_or_default();

        xml.push_str(&format!(
            "  <url><loc>{}{}</loc>{}</url>\n",
            escape_xml(&config.base_url),
            escape_xml(path),
            lastmod
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_index_leaves_out_content() {
        let catalog = Catalog::embedded();
        let bytes = search_index_json(&catalog).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let posts = value["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 8);
        assert!(posts[0].get("content").is_none());
        assert_eq!(posts[0]["url"], "/blog/building-scalable-react-applications/");
        assert_eq!(posts[0]["read_minutes"], 8);

        let projects = value["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 6);
        assert_eq!(value["post_categories"][0], "All");
    }

    #[test]
    fn test_sitemap() {
        let catalog = Catalog::embedded();
        let config = SiteConfig::default();
        let paths = vec!["/".to_string(), "/blog/docker-for-developers/".to_string()];
        let xml = sitemap_xml(&catalog, &config, &paths);

        assert!(xml.contains("<loc>https://example.com/</loc></url>"));
        assert!(xml.contains(
            "<loc>https://example.com/blog/docker-for-developers/</loc><lastmod>2023-12-05</lastmod>"
        ));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&apos;");
    }
}
