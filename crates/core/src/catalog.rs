use crate::data;
use crate::error::{Error, Result};
use crate::query::{self, CatalogQuery, PostSort, ProjectSort, QueryPage};
use crate::types::*;
use serde::Serialize;
use std::collections::HashSet;

/// Number of posts in the featured strip of the blog index
pub const FEATURED_LIMIT: usize = 2;

/// Related posts shown under an article
pub const RELATED_LIMIT: usize = 3;

/// All site content
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub posts: Vec<BlogPost>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub stats: Vec<Stat>,
    pub experience: Vec<Experience>,
    pub contact: Vec<ContactInfo>,
    pub navigation: Vec<NavItem>,
    /// Tab order of the blog listing, `All` first
    pub post_categories: Vec<String>,
    /// Tab order of the project gallery, `All` first
    pub project_categories: Vec<String>,
}

/// Summary figures shown under the blog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlogStats {
    pub total_posts: usize,
    pub categories: usize,
    /// Mean reading time in whole minutes, rounded
    pub average_read_time: u32,
    pub featured: usize,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn embedded() -> Self {
        Self {
            posts: data::blog_posts(),
            projects: data::projects(),
            skills: data::skills(),
            stats: data::stats(),
            experience: data::experience(),
            contact: data::contact_info(),
            navigation: data::navigation(),
            post_categories: data::POST_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            project_categories: data::PROJECT_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }

    pub fn find_post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Look up a post by slug, failing with `Error::PostNotFound`
    pub fn post_by_slug(&self, slug: &str) -> Result<&BlogPost> {
        self.find_post(slug)
            .ok_or_else(|| Error::PostNotFound(slug.to_string()))
    }

    pub fn query_posts(&self, query: &CatalogQuery<PostSort>) -> QueryPage<'_, BlogPost> {
        query::run_query(&self.posts, &self.post_categories, query)
    }

    pub fn query_projects(&self, query: &CatalogQuery<ProjectSort>) -> QueryPage<'_, Project> {
        query::run_query(&self.projects, &self.project_categories, query)
    }

    /// Declared post categories without the `All` sentinel
    pub fn post_category_names(&self) -> impl Iterator<Item = &str> {
        self.post_categories
            .iter()
            .map(String::as_str)
            .filter(|c| *c != query::ALL)
    }

    /// First featured posts in catalog order
    pub fn featured_posts(&self) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.featured)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// Posts related to `post`, best match first.
    ///
    /// Each shared tag scores 1 and a shared category scores 2; posts with no
    /// overlap are excluded and ties keep catalog order.
    pub fn related_posts(&self, post: &BlogPost) -> Vec<&BlogPost> {
        let tags: HashSet<&str> = post.tags.iter().map(String::as_str).collect();

        let mut scored: Vec<(usize, &BlogPost)> = self
            .posts
            .iter()
            .filter(|other| other.slug != post.slug)
            .filter_map(|other| {
                let shared = other
                    .tags
                    .iter()
                    .filter(|t| tags.contains(t.as_str()))
                    .count();
                let category = if other.category == post.category { 2 } else { 0 };
                let score = shared + category;
                (score > 0).then_some((score, other))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(RELATED_LIMIT)
            .map(|(_, p)| p)
            .collect()
    }

    pub fn blog_stats(&self) -> BlogStats {
        let total_posts = self.posts.len();
        let minutes: u32 = self.posts.iter().map(BlogPost::read_time_minutes).sum();
        let average_read_time = if total_posts == 0 {
            0
        } else {
            (f64::from(minutes) / total_posts as f64).round() as u32
        };

        BlogStats {
            total_posts,
            categories: self.post_category_names().count(),
            average_read_time,
            featured: self.posts.iter().filter(|p| p.featured).count(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::embedded()
    }
}
