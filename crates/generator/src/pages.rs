use crate::components::{
    BlogStatsPanel, CategoryTabs, ContactSection, Document, ExperienceTimeline, FeaturedPosts,
    Pagination, PostCard, PostMeta, ProjectCard, RelatedPosts, SearchForm, SiteFooter, SkillBars,
    StatGrid, render_document, tabs_from_counts,
};
use crate::links::LinkStyle;
use crate::markdown::{render_markdown, strip_title_heading};
use folio_core::query::ALL;
use folio_core::{BlogPost, Catalog, CatalogQuery, ContactInfo, PostSort, SiteConfig};
use leptos::prelude::*;

/// What every page render needs
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a SiteConfig,
    /// Adds the preview badge and the reload script
    pub preview: bool,
}

impl<'a> PageContext<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a SiteConfig) -> Self {
        Self {
            catalog,
            config,
            preview: false,
        }
    }

    pub fn preview(mut self) -> Self {
        self.preview = true;
        self
    }

    /// Contact entries, with the configured author email taking over the
    /// catalog's `Email` entry
    pub fn contact_entries(&self) -> Vec<ContactInfo> {
        let mut entries = self.catalog.contact.clone();
        if let Some(email) = &self.config.author.email {
            let entry = ContactInfo {
                title: "Email".to_string(),
                value: email.clone(),
                href: Some(format!("mailto:{}", email)),
            };
            match entries.iter_mut().find(|c| c.title == "Email") {
                Some(existing) => *existing = entry,
                None => entries.insert(0, entry),
            }
        }
        entries
    }

    fn contact_email(&self) -> String {
        self.config
            .author
            .email
            .clone()
            .or_else(|| {
                self.catalog
                    .contact
                    .iter()
                    .find(|c| c.title == "Email")
                    .map(|c| c.value.clone())
            })
            .unwrap_or_default()
    }

    fn document<F, V>(&self, page_title: String, body: F) -> String
    where
        F: FnOnce() -> V + Send + 'static,
        V: IntoView + 'static,
    {
        let description = self.config.description.clone();
        let brand = self.config.author.name.clone();
        let nav = self.catalog.navigation.clone();
        let author = self.config.author.name.clone();
        let preview = self.preview;

        render_document(move || {
            view! {
                <Document
                    page_title=page_title
                    description=description
                    brand=brand
                    nav=nav
                    preview=preview
                >
                    {body()}
                    <SiteFooter author=author/>
                </Document>
            }
        })
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

/// Home page: hero, about, projects and contact sections
pub fn render_home(ctx: &PageContext) -> String {
    let config = ctx.config;
    let catalog = ctx.catalog;

    let projects = catalog.query_projects(&CatalogQuery::projects(config.projects_page_size));
    let tabs = tabs_from_counts(&projects.category_counts, ALL, |_| None);
    let shown: Vec<_> = projects.items.iter().map(|p| (*p).clone()).collect();
    let summary = format!(
        "Showing {} of {}",
        shown.len(),
        plural(projects.total_matches, "project", "projects")
    );

    let name = config.author.name.clone();
    let role = config.author.role.clone();
    let tagline = config.author.tagline.clone();
    let skills = catalog.skills.clone();
    let experience = catalog.experience.clone();
    let stats = catalog.stats.clone();
    let contact = ctx.contact_entries();
    let email = ctx.contact_email();

    ctx.document(config.title.clone(), move || {
        view! {
            <section id="home" class="hero">
                <h1>{name}</h1>
                <p class="role">{role}</p>
                <p class="tagline">{tagline}</p>
                <p class="cta">
                    <a class="button" href="#projects">"View Projects"</a>
                    <a class="button secondary" href="/blog/">"Read the Blog"</a>
                </p>
            </section>
            <section id="about" class="about">
                <h2>"About Me"</h2>
                <SkillBars skills=skills/>
                <h2>"Experience"</h2>
                <ExperienceTimeline entries=experience/>
                <StatGrid stats=stats/>
            </section>
            <section id="projects" class="projects">
                <h2>"Featured Projects"</h2>
                <CategoryTabs tabs=tabs/>
                <p class="summary">{summary}</p>
                <div class="grid">
                    {shown.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </section>
            <ContactSection info=contact email=email/>
        }
    })
}

/// One page of the blog listing for `query`
pub fn render_blog_listing(
    ctx: &PageContext,
    query: &CatalogQuery<PostSort>,
    links: LinkStyle,
) -> String {
    let catalog = ctx.catalog;
    let result = catalog.query_posts(query);

    let tabs = tabs_from_counts(&result.category_counts, &query.category, |name| {
        let has_page = name == ALL || catalog.post_categories.iter().any(|c| c == name);
        (links == LinkStyle::Query || has_page).then(|| links.listing_href(query, name, 1))
    });

    let previous = result
        .has_previous()
        .then(|| links.listing_href(query, &query.category, result.page - 1));
    let next = result
        .has_next()
        .then(|| links.listing_href(query, &query.category, result.page + 1));

    let show_featured = query.category == ALL && query.search.trim().is_empty();
    let featured: Vec<BlogPost> = if show_featured {
        catalog.featured_posts().into_iter().cloned().collect()
    } else {
        Vec::new()
    };

    let posts: Vec<BlogPost> = result.items.iter().map(|p| (*p).clone()).collect();
    let summary = plural(result.total_matches, "post", "posts");
    let page = result.page;
    let total_pages = result.total_pages;
    let stats = catalog.blog_stats();

    let heading = if query.category == ALL {
        "Blog & Insights".to_string()
    } else {
        format!("Blog: {}", query.category)
    };
    let mut page_title = format!("{} | {}", heading, ctx.config.title);
    if page > 1 {
        page_title = format!("Page {} - {}", page, page_title);
    }

    let form = (links == LinkStyle::Query).then(|| {
        (
            query.category.clone(),
            query.search.clone(),
            query.sort,
            query.direction,
        )
    });

    ctx.document(page_title, move || {
        view! {
            <section class="blog">
                <header class="page-header">
                    <h1>{heading}</h1>
                    <p>"Thoughts, tutorials, and insights about software development, technology trends, and my journey as a developer."</p>
                </header>
                {form.map(|(category, search, sort, direction)| view! {
                    <SearchForm category=category search=search sort=sort direction=direction/>
                })}
                <CategoryTabs tabs=tabs/>
                <FeaturedPosts posts=featured/>
                <p class="summary">{summary}</p>
                {if posts.is_empty() {
                    view! {
                        <p class="empty">"No posts found. Try a different search or category."</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="grid">
                            {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }}
                <Pagination page=page total_pages=total_pages previous=previous next=next/>
                <BlogStatsPanel stats=stats/>
            </section>
        }
    })
}

/// Article page with rendered markdown and related posts
pub fn render_post(ctx: &PageContext, post: &BlogPost) -> String {
    let body = render_markdown(strip_title_heading(&post.content, &post.title));
    let related: Vec<BlogPost> = ctx
        .catalog
        .related_posts(post)
        .into_iter()
        .cloned()
        .collect();

    let byline = format!("By {}, {}", post.author, ctx.config.author.role);
    let engagement = format!(
        "{} · {}",
        plural(post.likes.unwrap_or(0) as usize, "like", "likes"),
        plural(post.comments.unwrap_or(0) as usize, "comment", "comments"),
    );
    let published = format!("Published on {}", post.display_date());
    let page_title = format!("{} | {}", post.title, ctx.config.author.name);
    let post = post.clone();

    ctx.document(page_title, move || {
        view! {
            <article class="post">
                <a class="back" href="/blog/">"← Back to Blog"</a>
                {post.image.clone().map(|src| view! { <img class="cover" src=src alt=post.title.clone()/> })}
                <PostMeta post=post.clone()/>
                <h1>{post.title.clone()}</h1>
                <p class="lead">{post.excerpt.clone()}</p>
                <ul class="tags">
                    {post.tags.iter().cloned().map(|t| view! { <li>{t}</li> }).collect_view()}
                </ul>
                <p class="byline">{byline}</p>
                <div class="prose" inner_html=body></div>
                <footer class="post-footer">
                    <span class="engagement">{engagement}</span>
                    <span class="published">{published}</span>
                </footer>
            </article>
            <RelatedPosts posts=related/>
        }
    })
}

/// Not-found page; `missing` names the slug that failed to resolve
pub fn render_not_found(ctx: &PageContext, missing: Option<&str>) -> String {
    let detail = match missing {
        Some(slug) => format!("No post matches '{}'.", slug),
        None => "The page you are looking for does not exist.".to_string(),
    };
    let page_title = format!("Page not found | {}", ctx.config.title);

    ctx.document(page_title, move || {
        view! {
            <section class="not-found">
                <h1>"Page not found"</h1>
                <p>{detail}</p>
                <p>
                    <a href="/">"Home"</a>" · "<a href="/blog/">"All posts"</a>
                </p>
            </section>
        }
    })
}

/// Bare error page for failures that happen before a catalog and config exist
pub fn render_error_page(title: &str, detail: &str) -> String {
    let title = title.to_string();
    let detail = detail.to_string();
    render_document(move || {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <title>{title.clone()}</title>
                    <link rel="stylesheet" href="/style.css"/>
                </head>
                <body>
                    <main class="error">
                        <h1>{title}</h1>
                        <pre>{detail}</pre>
                    </main>
                </body>
            </html>
        }
    })
}
