//! Leptos components shared by every page.
//!
//! Components take owned props so pages can build them from catalog borrows
//! with a clone. Anything a test matches on is formatted into one string
//! first, since adjacent text nodes are separated by markers in SSR output.

use folio_core::query::CategoryCount;
use folio_core::{
    BlogPost, BlogStats, ContactInfo, Experience, NavItem, PostSort, Project, Skill, SortDirection,
    Stat,
};
use leptos::prelude::*;

/// Script injected in preview mode; reloads the page on file changes
pub const RELOAD_SCRIPT: &str = r#"
const source = new EventSource('/_reload');
source.onmessage = () => location.reload();
source.onerror = () => source.close();
"#;

/// Full HTML document around a page body
#[component]
pub fn Document(
    page_title: String,
    description: String,
    brand: String,
    nav: Vec<NavItem>,
    preview: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=description/>
                <title>{page_title}</title>
                <link rel="stylesheet" href="/style.css"/>
            </head>
            <body>
                <SiteNav brand=brand items=nav/>
                {preview.then(|| view! {
                    <div class="preview-badge">"Preview mode, live reload active"</div>
                })}
                <main>{children()}</main>
                {preview.then(|| view! { <script inner_html=RELOAD_SCRIPT></script> })}
            </body>
        </html>
    }
}

#[component]
pub fn SiteNav(brand: String, items: Vec<NavItem>) -> impl IntoView {
    view! {
        <nav class="site-nav">
            <a class="brand" href="/">{brand}</a>
            <ul>
                {items
                    .into_iter()
                    .map(|item| view! { <li><a href=item.href>{item.name}</a></li> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
pub fn SiteFooter(author: String) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{format!("Built by {}", author)}</p>
            <p><a href="/blog/">"Blog"</a>" · "<a href="/#contact">"Contact"</a></p>
        </footer>
    }
}

/// A tab of a category filter bar
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub label: String,
    pub count: usize,
    /// `None` renders a plain label
    pub href: Option<String>,
    pub active: bool,
}

#[component]
pub fn CategoryTabs(tabs: Vec<Tab>) -> impl IntoView {
    view! {
        <div class="category-tabs">
            {tabs
                .into_iter()
                .map(|tab| {
                    let class = if tab.active { "tab active" } else { "tab" };
                    let text = format!("{} ({})", tab.label, tab.count);
                    match tab.href {
                        Some(href) => view! {
                            <a
                                class=class
                                href=href
                                aria-current=tab.active.then_some("page")
                            >
                                {text}
                            </a>
                        }
                        .into_any(),
                        None => view! { <span class=class>{text}</span> }.into_any(),
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Tabs for each count, linking through `href` when given
pub fn tabs_from_counts(
    counts: &[CategoryCount],
    active: &str,
    href: impl Fn(&str) -> Option<String>,
) -> Vec<Tab> {
    counts
        .iter()
        .map(|c| Tab {
            label: c.name.clone(),
            count: c.count,
            href: href(&c.name),
            active: c.name == active,
        })
        .collect()
}

#[component]
pub fn PostMeta(post: BlogPost) -> impl IntoView {
    view! {
        <div class="post-meta">
            <span class="category">{post.category.clone()}</span>
            <time datetime=post.date.clone()>{post.display_date()}</time>
            <span class="read-time">{post.read_time.clone()}</span>
        </div>
    }
}

#[component]
pub fn PostCard(post: BlogPost) -> impl IntoView {
    const VISIBLE_TAGS: usize = 3;

    let href = post.path();
    let hidden = post.tags.len().saturating_sub(VISIBLE_TAGS);
    let tags: Vec<String> = post.tags.iter().take(VISIBLE_TAGS).cloned().collect();

    view! {
        <article class="post-card" data-category=post.category.clone()>
            {post.image.clone().map(|src| view! {
                <img class="thumb" src=src alt=post.title.clone() loading="lazy"/>
            })}
            <PostMeta post=post.clone()/>
            <h3><a href=href.clone()>{post.title.clone()}</a></h3>
            <p class="excerpt">{post.excerpt.clone()}</p>
            <ul class="tags">
                {tags.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
                {(hidden > 0).then(|| view! { <li class="more">{format!("+{}", hidden)}</li> })}
            </ul>
            <a class="read-more" href=href>"Read more"</a>
        </article>
    }
}

#[component]
pub fn FeaturedPosts(posts: Vec<BlogPost>) -> impl IntoView {
    (!posts.is_empty()).then(|| {
        view! {
            <section class="featured">
                <h2>"Featured Posts"</h2>
                <div class="grid two">
                    {posts
                        .into_iter()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect_view()}
                </div>
            </section>
        }
    })
}

#[component]
pub fn Pagination(
    page: usize,
    total_pages: usize,
    previous: Option<String>,
    next: Option<String>,
) -> impl IntoView {
    (total_pages > 1).then(|| {
        view! {
            <nav class="pagination" aria-label="Pagination">
                {previous.map(|href| view! { <a class="prev" rel="prev" href=href>"Previous"</a> })}
                <span class="current">{format!("Page {} of {}", page, total_pages)}</span>
                {next.map(|href| view! { <a class="next" rel="next" href=href>"Next"</a> })}
            </nav>
        }
    })
}

/// Search and sort controls, only useful where a server reads the query string
#[component]
pub fn SearchForm(
    category: String,
    search: String,
    sort: PostSort,
    direction: SortDirection,
) -> impl IntoView {
    let sort_option = move |key: PostSort, label: &'static str| {
        view! {
            <option value=key.as_str() selected=(sort == key).then_some("selected")>{label}</option>
        }
    };
    let dir_option = move |dir: SortDirection, label: &'static str| {
        view! {
            <option value=dir.as_str() selected=(direction == dir).then_some("selected")>{label}</option>
        }
    };

    view! {
        <form class="search" method="get" action="/blog/">
            <input type="hidden" name="category" value=category/>
            <input type="search" name="q" placeholder="Search posts..." value=search/>
            <select name="sort" aria-label="Sort by">
                {sort_option(PostSort::Date, "Date")}
                {sort_option(PostSort::Title, "Title")}
                {sort_option(PostSort::ReadTime, "Read time")}
            </select>
            <select name="dir" aria-label="Direction">
                {dir_option(SortDirection::Desc, "Descending")}
                {dir_option(SortDirection::Asc, "Ascending")}
            </select>
            <button type="submit">"Apply"</button>
        </form>
    }
}

#[component]
pub fn BlogStatsPanel(stats: BlogStats) -> impl IntoView {
    let figures = [
        (stats.total_posts.to_string(), "Total Posts"),
        (stats.categories.to_string(), "Categories"),
        (format!("{} min", stats.average_read_time), "Avg. Read Time"),
        (stats.featured.to_string(), "Featured"),
    ];

    view! {
        <section class="blog-stats">
            {figures
                .into_iter()
                .map(|(value, label)| view! {
                    <div class="stat">
                        <strong>{value}</strong>
                        <span>{label}</span>
                    </div>
                })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn RelatedPosts(posts: Vec<BlogPost>) -> impl IntoView {
    view! {
        <section class="related">
            <h2>"Related Posts"</h2>
            {if posts.is_empty() {
                view! { <p class="empty">"No related posts yet."</p> }.into_any()
            } else {
                view! {
                    <ul>
                        {posts
                            .into_iter()
                            .map(|post| view! {
                                <li>
                                    <a href=post.path()>{post.title.clone()}</a>
                                    <span class="read-time">{post.read_time.clone()}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}

fn labelled_list(label: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="tech">
                <h4>{label}</h4>
                <p>{items.join(", ")}</p>
            </div>
        }
    })
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let m = project.metrics;
    let metrics = [
        ("Performance", m.performance),
        ("Security", m.security),
        ("Scalability", m.scalability),
        ("Maintainability", m.maintainability),
    ];
    let tech = project.tech_details.clone();

    view! {
        <article class="project-card" id=project.anchor() data-category=project.category.clone()>
            <img class="thumb" src=project.image.clone() alt=project.title.clone() loading="lazy"/>
            <span class="category" style=format!("color: {}", project.color)>
                {project.category.clone()}
            </span>
            <h3>{project.title.clone()}</h3>
            <p>{project.description.clone()}</p>
            <ul class="tags">
                {project.tags.iter().cloned().map(|t| view! { <li>{t}</li> }).collect_view()}
            </ul>
            <div class="metrics">
                {metrics
                    .into_iter()
                    .map(|(label, score)| view! {
                        <div class="metric">
                            <span>{format!("{}: {}", label, score)}</span>
                            <div class="bar"><div class="fill" style=format!("width: {}%", score)></div></div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <details>
                <summary>"Details"</summary>
                <p>{project.long_description.clone()}</p>
                <p class="facts">{format!("{} · {}", project.timeline, project.team_size)}</p>
                <h4>"Features"</h4>
                <ul>{project.features.iter().cloned().map(|f| view! { <li>{f}</li> }).collect_view()}</ul>
                {labelled_list("Frontend", tech.frontend)}
                {labelled_list("Backend", tech.backend)}
                {labelled_list("Database", tech.database)}
                {labelled_list("Deployment", tech.deployment)}
                <h4>"Challenges"</h4>
                <ul>{project.challenges.iter().cloned().map(|c| view! { <li>{c}</li> }).collect_view()}</ul>
                <h4>"Solutions"</h4>
                <ul>{project.solutions.iter().cloned().map(|s| view! { <li>{s}</li> }).collect_view()}</ul>
            </details>
            <p class="links">
                <a href=project.github.clone()>"Code"</a>
                <a href=project.demo.clone()>"Live Demo"</a>
            </p>
        </article>
    }
}

#[component]
pub fn SkillBars(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <div class="skills">
            {skills
                .into_iter()
                .map(|skill| view! {
                    <div class="skill">
                        <h3>{skill.name.clone()}</h3>
                        <p>{skill.description.clone()}</p>
                        <span class="level">{format!("{}%", skill.level)}</span>
                        <div class="bar">
                            <div
                                class="fill"
                                style=format!("width: {}%; background: {}", skill.level, skill.color)
                            ></div>
                        </div>
                        <ul class="tags">
                            {skill.technologies.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
                        </ul>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn StatGrid(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stats
                .into_iter()
                .map(|stat| view! {
                    <div class="stat" title=stat.description>
                        <strong style=format!("color: {}", stat.color)>{stat.value}</strong>
                        <span>{stat.label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ExperienceTimeline(entries: Vec<Experience>) -> impl IntoView {
    view! {
        <ol class="timeline">
            {entries
                .into_iter()
                .map(|e| view! {
                    <li>
                        <h3>{e.title}</h3>
                        <p class="company">{format!("{} · {}", e.company, e.period)}</p>
                        <p>{e.description}</p>
                    </li>
                })
                .collect_view()}
        </ol>
    }
}

#[component]
pub fn ContactSection(info: Vec<ContactInfo>, email: String) -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <h2>"Let's Work Together"</h2>
            <ul class="contact-info">
                {info
                    .into_iter()
                    .map(|item| {
                        let value = match item.href {
                            Some(href) => view! { <a href=href>{item.value}</a> }.into_any(),
                            None => view! { <span>{item.value}</span> }.into_any(),
                        };
                        view! { <li><strong>{item.title}</strong>" "{value}</li> }
                    })
                    .collect_view()}
            </ul>
            <form
                class="contact-form"
                method="post"
                action=format!("mailto:{}", email)
                enctype="text/plain"
            >
                <input type="text" name="name" placeholder="Your name" aria-label="Name"/>
                <input type="email" name="email" placeholder="Your email" aria-label="Email"/>
                <input type="text" name="subject" placeholder="Subject" aria-label="Subject"/>
                <textarea name="message" rows="5" placeholder="Your message" aria-label="Message"></textarea>
                <button type="submit">"Send Message"</button>
            </form>
        </section>
    }
}

/// Render a view to a complete HTML document string
pub fn render_document<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    let html = owner.with(|| build().into_view().to_html());
    format!("<!DOCTYPE html>{}", html)
}
