use folio_core::query::{self, ALL};
use folio_core::{BlogPost, Catalog, CatalogQuery, PostSort, ProjectSort, SortDirection};

const SEARCHES: &[&str] = &[
    "", "react", "TypeScript", "performance", "  docker  ", "e", "best practices", "zzz",
];

fn slugs(posts: &[&BlogPost]) -> Vec<String> {
    posts.iter().map(|p| p.slug.clone()).collect()
}

#[test]
fn default_listing_pages_through_eight_posts() {
    let catalog = Catalog::embedded();

    let first = catalog.query_posts(&CatalogQuery::posts(6));
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.total_matches, 8);
    assert_eq!(first.page, 1);
    let ids: Vec<u32> = first.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);

    let second = catalog.query_posts(&CatalogQuery::posts(6).page(2));
    let ids: Vec<u32> = second.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, [7, 8]);
    assert_eq!(second.total_pages, 2);
}

#[test]
fn typescript_search_finds_one_post() {
    let catalog = Catalog::embedded();
    let result = catalog.query_posts(&CatalogQuery::posts(6).search("typescript"));

    assert_eq!(result.total_matches, 1);
    assert_eq!(result.items[0].title, "TypeScript Best Practices");

    for count in &result.category_counts {
        let expected = match count.name.as_str() {
            "All" | "TypeScript" => 1,
            _ => 0,
        };
        assert_eq!(count.count, expected, "count for {}", count.name);
    }
    assert_eq!(result.category_counts.len(), catalog.post_categories.len());
}

#[test]
fn unknown_slug_is_not_found() {
    let catalog = Catalog::embedded();
    assert!(catalog.find_post("does-not-exist").is_none());
    assert!(catalog.post_by_slug("does-not-exist").is_err());
}

#[test]
fn all_category_returns_every_search_match() {
    let catalog = Catalog::embedded();
    for search in SEARCHES {
        let q = CatalogQuery::posts(100).search(*search);
        let expected = catalog
            .posts
            .iter()
            .filter(|p| {
                p.search_text()
                    .to_lowercase()
                    .contains(&search.trim().to_lowercase())
            })
            .count();
        assert_eq!(catalog.query_posts(&q).total_matches, expected, "search {:?}", search);
    }

    let everything = catalog.query_posts(&CatalogQuery::posts(100));
    assert_eq!(everything.total_matches, catalog.posts.len());
}

#[test]
fn every_result_contains_the_search_string() {
    let catalog = Catalog::embedded();
    for search in SEARCHES {
        let needle = search.trim().to_lowercase();
        let q = CatalogQuery::posts(100).search(*search);
        for post in query::filter_and_sort(&catalog.posts, &q) {
            assert!(post.search_text().to_lowercase().contains(&needle));
        }
    }
}

#[test]
fn empty_search_returns_the_category_filtered_set() {
    let catalog = Catalog::embedded();
    for category in catalog.post_category_names() {
        let q = CatalogQuery::posts(100).category(category);
        let expected = catalog.posts.iter().filter(|p| p.category == category).count();
        assert_eq!(catalog.query_posts(&q).total_matches, expected);
    }
}

#[test]
fn date_ascending_is_reverse_of_descending() {
    let catalog = Catalog::embedded();
    let asc = query::filter_and_sort(
        &catalog.posts,
        &CatalogQuery::posts(6).sort(PostSort::Date, SortDirection::Asc),
    );
    let desc = query::filter_and_sort(
        &catalog.posts,
        &CatalogQuery::posts(6).sort(PostSort::Date, SortDirection::Desc),
    );
    let mut reversed = slugs(&desc);
    reversed.reverse();
    assert_eq!(slugs(&asc), reversed);
}

#[test]
fn read_time_sort_uses_minutes() {
    let catalog = Catalog::embedded();
    let q = CatalogQuery::posts(6).sort(PostSort::ReadTime, SortDirection::Desc);
    let sorted = query::filter_and_sort(&catalog.posts, &q);
    let minutes: Vec<u32> = sorted.iter().map(|p| p.read_time_minutes()).collect();
    // the two 6-minute posts keep catalog order
    assert_eq!(minutes, [12, 10, 9, 8, 7, 6, 6, 5]);
    assert_eq!(sorted[5].id, 2);
    assert_eq!(sorted[6].id, 7);
}

#[test]
fn pages_concatenate_to_the_full_result() {
    let catalog = Catalog::embedded();
    for page_size in 1..=9 {
        for search in SEARCHES {
            let base = CatalogQuery::posts(page_size)
                .search(*search)
                .sort(PostSort::Title, SortDirection::Asc);
            let full = query::filter_and_sort(&catalog.posts, &base);
            let total_pages = catalog.query_posts(&base).total_pages;

            let mut joined = Vec::new();
            for page in 1..=total_pages {
                let result = catalog.query_posts(&base.clone().page(page as i64));
                joined.extend(result.items);
            }
            assert_eq!(slugs(&joined), slugs(&full));
        }
    }
}

#[test]
fn out_of_range_pages_clamp() {
    let catalog = Catalog::embedded();
    for page in [0, -1, i64::MIN] {
        let result = catalog.query_posts(&CatalogQuery::posts(6).page(page));
        assert_eq!(result.page, 1);
    }
    let result = catalog.query_posts(&CatalogQuery::posts(6).page(99));
    assert_eq!(result.page, 2);
    assert_eq!(result.items.len(), 2);
}

#[test]
fn category_counts_sum_to_all() {
    let catalog = Catalog::embedded();
    for search in SEARCHES {
        let posts = catalog.query_posts(&CatalogQuery::posts(6).search(*search));
        let sum: usize = posts
            .category_counts
            .iter()
            .filter(|c| c.name != ALL)
            .map(|c| c.count)
            .sum();
        assert_eq!(sum, posts.count_for(ALL));

        let projects = catalog.query_projects(&CatalogQuery::projects(6).search(*search));
        let sum: usize = projects
            .category_counts
            .iter()
            .filter(|c| c.name != ALL)
            .map(|c| c.count)
            .sum();
        assert_eq!(sum, projects.count_for(ALL));
    }
}

#[test]
fn category_counts_ignore_active_category() {
    let catalog = Catalog::embedded();
    let all = catalog.query_posts(&CatalogQuery::posts(6).search("performance"));
    let css = catalog.query_posts(&CatalogQuery::posts(6).search("performance").category("CSS"));
    assert_eq!(all.category_counts, css.category_counts);
}

#[test]
fn project_gallery_defaults_to_title_order() {
    let catalog = Catalog::embedded();
    let result = catalog.query_projects(&CatalogQuery::projects(6));
    let titles: Vec<&str> = result.items.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "AI Content Generator",
            "DevOps Dashboard",
            "E-Commerce Platform",
            "Mobile Fitness Tracker",
            "Task Management App",
            "Weather Analytics API",
        ]
    );
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.count_for("Full Stack"), 2);
    assert_eq!(result.count_for("Frontend"), 2);
    assert_eq!(result.count_for("Backend"), 1);
    assert_eq!(result.count_for("Mobile"), 1);
}

#[test]
fn projects_sort_by_performance() {
    let catalog = Catalog::embedded();
    let q = CatalogQuery::projects(6).sort(ProjectSort::Performance, SortDirection::Desc);
    let result = catalog.query_projects(&q);
    let scores: Vec<u8> = result.items.iter().map(|p| p.metrics.performance).collect();
    assert_eq!(scores, [97, 95, 94, 93, 91, 89]);
}

#[test]
fn project_search_covers_long_description() {
    let catalog = Catalog::embedded();
    let q = CatalogQuery::projects(6).search("TimescaleDB");
    // TimescaleDB only appears in tech details, which are not searched
    assert_eq!(catalog.query_projects(&q).total_matches, 0);

    let q = CatalogQuery::projects(6).search("drag-and-drop");
    let result = catalog.query_projects(&q);
    assert_eq!(result.total_matches, 1);
    assert_eq!(result.items[0].title, "Task Management App");
}
