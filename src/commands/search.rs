//! Search the article collection from the command line

use anyhow::Result;

use crate::Blog;

/// Run a free-text search and print matching posts
pub fn run(blog: &Blog, query: &str) -> Result<()> {
    let repo = blog.repository()?;
    let results = repo.search(query);

    if results.is_empty() {
        println!("No posts match '{}'", query);
        return Ok(());
    }

    println!("Posts matching '{}' ({}):", query, results.len());
    for post in results {
        println!(
            "  {} - {} [{}]",
            post.published_at.format("%Y-%m-%d"),
            post.title,
            post.slug
        );
    }

    Ok(())
}
