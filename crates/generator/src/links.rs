use folio_core::query::ALL;
use folio_core::{Catalog, CatalogQuery, PostSort, SortDirection, slugify};
use url::form_urlencoded;

/// How blog listing links are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Pre-rendered paths such as `/blog/page/2/` and `/blog/category/css/`
    Static,
    /// Query strings understood by the preview server
    Query,
}

impl LinkStyle {
    /// Link to `page` of `category`, carrying the rest of `query` where the
    /// style allows it
    pub fn listing_href(self, query: &CatalogQuery<PostSort>, category: &str, page: usize) -> String {
        match self {
            LinkStyle::Static => listing_path(category, page),
            LinkStyle::Query => query_href(query, category, page),
        }
    }
}

/// URL path of a pre-rendered listing page
pub fn listing_path(category: &str, page: usize) -> String {
    let base = if category == ALL {
        "/blog/".to_string()
    } else {
        format!("/blog/category/{}/", slugify(category))
    };

    if page <= 1 {
        base
    } else {
        format!("{}page/{}/", base, page)
    }
}

/// Export file for a URL path ending in `/`
pub fn index_file(url_path: &str) -> String {
    format!("{}index.html", url_path.trim_start_matches('/'))
}

/// `/blog/?category=..&q=..`, leaving out parameters at their defaults
pub fn query_href(query: &CatalogQuery<PostSort>, category: &str, page: usize) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());

    if category != ALL {
        params.append_pair("category", category);
    }
    let search = query.search.trim();
    if !search.is_empty() {
        params.append_pair("q", search);
    }
    if query.sort != PostSort::default() {
        params.append_pair("sort", query.sort.as_str());
    }
    if query.direction != SortDirection::Desc {
        params.append_pair("dir", query.direction.as_str());
    }
    if page > 1 {
        params.append_pair("page", &page.to_string());
    }

    let encoded = params.finish();
    if encoded.is_empty() {
        "/blog/".to_string()
    } else {
        format!("/blog/?{}", encoded)
    }
}

/// Declared post category whose slug is `slug`
pub fn category_for_slug<'a>(catalog: &'a Catalog, slug: &str) -> Option<&'a str> {
    catalog.post_category_names().find(|c| slugify(c) == slug)
}
