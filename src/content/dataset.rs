//! Built-in article dataset
//!
//! The articles are embedded markdown documents with YAML front-matter,
//! compiled into the binary and parsed once at startup. The dataset is
//! never mutated afterwards.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;

use super::{markdown, Author, FrontMatter, MarkdownRenderer, Post};

/// Embedded article sources, newest first. The slug is the file stem.
const ARTICLES: &[(&str, &str)] = &[
    (
        "getting-started-react-typescript",
        include_str!("posts/getting-started-react-typescript.md"),
    ),
    (
        "modern-css-techniques-web-design",
        include_str!("posts/modern-css-techniques-web-design.md"),
    ),
    (
        "building-scalable-nodejs-applications",
        include_str!("posts/building-scalable-nodejs-applications.md"),
    ),
    (
        "future-web-development-trends",
        include_str!("posts/future-web-development-trends.md"),
    ),
    (
        "mastering-git-advanced-workflows",
        include_str!("posts/mastering-git-advanced-workflows.md"),
    ),
];

/// Descriptions for the categories used by the dataset. Post counts are
/// derived from the live post collection, never stored here.
pub fn category_description(name: &str) -> &'static str {
    match name {
        "Development" => "Programming tutorials and best practices",
        "Design" => "UI/UX design and web design techniques",
        "Technology" => "Latest tech trends and innovations",
        _ => "",
    }
}

/// Parse all embedded articles into posts, preserving dataset order
pub fn builtin_posts() -> Result<Vec<Post>> {
    let renderer = MarkdownRenderer::new();
    let mut posts = Vec::with_capacity(ARTICLES.len());
    let mut seen_slugs = HashSet::new();

    for (slug, source) in ARTICLES {
        let post = parse_article(slug, source, &renderer)
            .with_context(|| format!("Failed to load article '{}'", slug))?;

        if !seen_slugs.insert(post.slug.clone()) {
            bail!("Duplicate slug in dataset: {}", post.slug);
        }

        posts.push(post);
    }

    Ok(posts)
}

/// Build a post from one embedded article source
fn parse_article(slug: &str, source: &str, renderer: &MarkdownRenderer) -> Result<Post> {
    let (fm, body) = FrontMatter::parse(source)?;

    let Some(title) = fm.title.clone() else {
        bail!("Article has no title");
    };
    let Some(published_at) = fm.parse_date() else {
        bail!("Article has no parsable date");
    };
    let Some(category) = fm.category.clone().filter(|c| !c.is_empty()) else {
        bail!("Article has no category");
    };
    if fm.tags.iter().any(|t| t.trim().is_empty()) {
        bail!("Article has an empty tag");
    }

    let content = renderer.render(body)?;
    let reading_time = fm
        .reading_time
        .unwrap_or_else(|| markdown::estimate_reading_time(body));

    Ok(Post {
        id: fm.id.clone().unwrap_or_else(|| slug.to_string()),
        slug: slug.to_string(),
        title,
        excerpt: fm.excerpt.clone().unwrap_or_default(),
        raw: body.to_string(),
        content,
        author: Author {
            name: fm.author.name.clone(),
            avatar: fm.author.avatar.clone(),
            bio: fm.author.bio.clone(),
        },
        published_at,
        updated_at: fm.parse_updated(),
        tags: fm.tags.clone(),
        category,
        reading_time,
        featured: fm.featured,
        cover_image: fm.cover.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_loads() {
        let posts = builtin_posts().unwrap();
        assert_eq!(posts.len(), 5);
    }

    #[test]
    fn test_slugs_are_unique() {
        let posts = builtin_posts().unwrap();
        let slugs: HashSet<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), posts.len());
    }

    #[test]
    fn test_dataset_order_is_newest_first() {
        let posts = builtin_posts().unwrap();
        for pair in posts.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[test]
    fn test_every_post_is_complete() {
        let posts = builtin_posts().unwrap();
        for post in &posts {
            assert!(!post.title.is_empty());
            assert!(!post.excerpt.is_empty());
            assert!(!post.category.is_empty());
            assert!(!post.tags.is_empty());
            assert!(!post.author.name.is_empty());
            assert!(!post.cover_image.is_empty());
            assert!(post.reading_time >= 1);
            assert!(post.content.contains("<p>"));
        }
    }

    #[test]
    fn test_first_article_fields() {
        let posts = builtin_posts().unwrap();
        let post = &posts[0];
        assert_eq!(post.slug, "getting-started-react-typescript");
        assert_eq!(post.title, "Getting Started with React and TypeScript");
        assert_eq!(post.category, "Development");
        assert_eq!(post.reading_time, 8);
        assert!(post.featured);
        assert_eq!(post.author.name, "Sarah Johnson");
        assert_eq!(
            post.published_at.format("%Y-%m-%d %H:%M").to_string(),
            "2024-01-15 10:00"
        );
    }

    #[test]
    fn test_category_descriptions() {
        assert!(!category_description("Development").is_empty());
        assert!(!category_description("Design").is_empty());
        assert!(!category_description("Technology").is_empty());
        assert!(category_description("Unknown").is_empty());
    }
}
