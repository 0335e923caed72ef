use anyhow::{Context, Result};
use folio_core::{BlogPost, Catalog};

/// Print a post's metadata; an unknown slug is an error
pub async fn run(slug: &str, json: bool) -> Result<()> {
    let catalog = Catalog::embedded();
    let post = catalog
        .post_by_slug(slug)
        .context("Run 'folio query posts' to list available slugs")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(post).context("Failed to serialize post")?
        );
    } else {
        println!("{}", describe(&catalog, post));
    }
    Ok(())
}

fn describe(catalog: &Catalog, post: &BlogPost) -> String {
    let mut lines = vec![
        post.title.clone(),
        String::new(),
        format!("  Slug:      {}", post.slug),
        format!("  URL:       {}", post.path()),
        format!("  Published: {}", post.display_date()),
        format!("  Category:  {}", post.category),
        format!("  Read time: {}", post.read_time),
        format!("  Author:    {}", post.author),
        format!("  Tags:      {}", post.tags.join(", ")),
        format!("  Featured:  {}", if post.featured { "yes" } else { "no" }),
        format!(
            "  Likes:     {}  Comments: {}",
            post.likes.unwrap_or(0),
            post.comments.unwrap_or(0)
        ),
        String::new(),
        format!("  {}", post.excerpt),
    ];

    let related = catalog.related_posts(post);
    if !related.is_empty() {
        lines.push(String::new());
        lines.push("Related:".to_string());
        lines.extend(related.iter().map(|r| format!("  - {} ({})", r.title, r.slug)));
    }

    lines.join("\n")
}
