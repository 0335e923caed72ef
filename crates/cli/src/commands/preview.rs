use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    handler::Handler,
    http::{StatusCode, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use folio_core::query::{ALL, parse_page};
use folio_core::{
    Catalog, CatalogQuery, ContactForm, PostSort, ProjectSort, SiteConfig, load_site_config,
};
use folio_generator::assets::{STYLE_CSS, search_index_json};
use folio_generator::links::category_for_slug;
use folio_generator::{
    LinkStyle, PageContext, render_blog_listing, render_error_page, render_home,
    render_not_found, render_post,
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use serde::Deserialize;
use serde_json::json;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use super::load_config;

#[derive(Clone)]
pub struct AppState {
    site_path: PathBuf,
    catalog: Arc<Catalog>,
    reload_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(site_path: PathBuf, reload_tx: broadcast::Sender<()>) -> Self {
        Self {
            site_path,
            catalog: Arc::new(Catalog::embedded()),
            reload_tx,
        }
    }

    /// site.toml is re-read on every request so edits show up on reload
    fn config(&self) -> Result<SiteConfig, Response> {
        load_site_config(&self.site_path).map_err(|e| {
            error!(error = %e, "failed to load site.toml");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error_page("Configuration Error", &e.to_string())),
            )
                .into_response()
        })
    }

    fn render<F>(&self, page: F) -> Response
    where
        F: FnOnce(&PageContext) -> Response,
    {
        match self.config() {
            Ok(config) => page(&PageContext::new(&self.catalog, &config).preview()),
            Err(response) => response,
        }
    }
}

/// Start preview server with hot reload for local development.
///
/// Pages are rendered on demand from the embedded catalog and the site's
/// `site.toml`. The blog listing reads its query from the query string, the
/// JSON endpoints expose the same queries, and any change under the site
/// directory pushes a reload event to open pages.
///
/// # Arguments
///
/// * `path` - Path to the site directory
/// * `port` - Port to serve on (default: 8080)
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🚀 Starting preview server...");
    println!("   Site: {}", path.display());

    let config = load_config(&path)?;
    println!("   ✓ Loaded: {}", config.title);
    println!("   ✓ Author: {}", config.author.name);

    let (reload_tx, _) = broadcast::channel::<()>(100);
    let app = router(AppState::new(path.clone(), reload_tx.clone()));

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            error!(error = %e, "file watcher stopped");
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    // Files under static/ land at the export root, so serve them there too
    let static_files = ServeDir::new(state.site_path.join("static"))
        .not_found_service(not_found_handler.with_state(state.clone()));

    Router::new()
        .route("/", get(home_handler))
        .route("/blog", get(listing_handler))
        .route("/blog/", get(listing_handler))
        .route("/blog/page/{page}/", get(listing_page_handler))
        .route("/blog/category/{slug}/", get(category_handler))
        .route("/blog/category/{slug}/page/{page}/", get(category_page_handler))
        .route("/blog/{slug}", get(post_handler))
        .route("/blog/{slug}/", get(post_handler))
        .route("/api/posts", get(api_posts))
        .route("/api/posts/{slug}", get(api_post))
        .route("/api/projects", get(api_projects))
        .route("/api/contact", post(api_contact))
        .route("/style.css", get(style_handler))
        .route("/search-index.json", get(search_index_handler))
        .route("/_reload", get(sse_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;
    debug!(path = %path.display(), "watching for changes");

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Skip editor temp files and hidden files
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.') && !filename.ends_with('~')
                }) {
                    info!("📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(()) => {
                    yield Ok(Event::default().data("reload"));
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Query string of listing pages and the JSON endpoints.
///
/// Everything is a string so that no query string is ever rejected: bad
/// values fall back to defaults.
#[derive(Debug, Default, Deserialize)]
struct ListingParams {
    category: Option<String>,
    q: Option<String>,
    sort: Option<String>,
    dir: Option<String>,
    page: Option<String>,
}

impl ListingParams {
    fn apply<K>(&self, mut query: CatalogQuery<K>) -> CatalogQuery<K>
    where
        K: std::str::FromStr,
    {
        if let Some(sort) = self.sort.as_deref().and_then(|s| s.parse().ok()) {
            query.sort = sort;
        }
        if let Some(dir) = self.dir.as_deref().and_then(|d| d.parse().ok()) {
            query.direction = dir;
        }
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(ALL);

        query
            .category(category)
            .search(self.q.clone().unwrap_or_default())
            .page(parse_page(self.page.as_deref()))
    }

    fn posts(&self, config: &SiteConfig) -> CatalogQuery<PostSort> {
        self.apply(CatalogQuery::posts(config.blog_page_size))
    }

    fn projects(&self, config: &SiteConfig) -> CatalogQuery<ProjectSort> {
        self.apply(CatalogQuery::projects(config.projects_page_size))
    }
}

fn not_found_page(ctx: &PageContext, missing: Option<&str>) -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found(ctx, missing))).into_response()
}

async fn home_handler(State(state): State<AppState>) -> Response {
    state.render(|ctx| Html(render_home(ctx)).into_response())
}

fn listing(
    state: &AppState,
    params: &ListingParams,
    category: Option<&str>,
    page: Option<&str>,
) -> Response {
    state.render(|ctx| {
        let mut query = params.posts(ctx.config);
        if let Some(category) = category {
            query = query.category(category);
        }
        if page.is_some() {
            query = query.page(parse_page(page));
        }
        debug!(?query, "listing");
        Html(render_blog_listing(ctx, &query, LinkStyle::Query)).into_response()
    })
}

async fn listing_handler(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Response {
    listing(&state, &params, None, None)
}

async fn listing_page_handler(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(params): Query<ListingParams>,
) -> Response {
    listing(&state, &params, None, Some(&page))
}

async fn category_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ListingParams>,
) -> Response {
    match category_for_slug(&state.catalog, &slug) {
        Some(category) => listing(&state, &params, Some(category), None),
        None => state.render(|ctx| not_found_page(ctx, None)),
    }
}

async fn category_page_handler(
    State(state): State<AppState>,
    Path((slug, page)): Path<(String, String)>,
    Query(params): Query<ListingParams>,
) -> Response {
    match category_for_slug(&state.catalog, &slug) {
        Some(category) => listing(&state, &params, Some(category), Some(&page)),
        None => state.render(|ctx| not_found_page(ctx, None)),
    }
}

async fn post_handler(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    state.render(|ctx| match ctx.catalog.find_post(&slug) {
        Some(post) => Html(render_post(ctx, post)).into_response(),
        None => {
            debug!(%slug, "unknown post");
            not_found_page(ctx, Some(&slug))
        }
    })
}

async fn not_found_handler(State(state): State<AppState>) -> Response {
    state.render(|ctx| not_found_page(ctx, None))
}

async fn api_posts(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Response {
    state.render(|ctx| {
        let result = ctx.catalog.query_posts(&params.posts(ctx.config));
        Json(result).into_response()
    })
}

async fn api_post(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.catalog.post_by_slug(&slug) {
        Ok(post) => Json(post).into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

async fn api_projects(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Response {
    state.render(|ctx| {
        let result = ctx.catalog.query_projects(&params.projects(ctx.config));
        Json(result).into_response()
    })
}

/// Validates a contact submission; nothing is sent or stored
async fn api_contact(Json(form): Json<ContactForm>) -> Response {
    let errors = form.validate();
    if errors.is_empty() {
        info!(name = %form.name, subject = %form.subject, "contact form accepted");
        Json(json!({
            "ok": true,
            "message": "Thank you for your message! I'll get back to you soon.",
        }))
        .into_response()
    } else {
        debug!(?errors, "contact form rejected");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "ok": false, "errors": errors })),
        )
            .into_response()
    }
}

async fn style_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

async fn search_index_handler(State(state): State<AppState>) -> Response {
    match search_index_json(&state.catalog) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            warn!(error = %e, "search index failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
