//! List site content

use anyhow::Result;

use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let repo = blog.repository()?;

    match content_type {
        "post" | "posts" => {
            let posts = repo.posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.published_at.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                );
            }
        }
        "category" | "categories" => {
            let categories = repo.categories();
            println!("Categories ({}):", categories.len());
            for category in categories {
                println!("  {} ({})", category.name, category.count);
            }
        }
        "tag" | "tags" => {
            let tags = repo.tags();
            println!("Tags ({}):", tags.len());
            for tag in tags {
                println!("  {} ({})", tag.name, tag.count);
            }
        }
        "featured" => {
            let featured = repo.featured_posts();
            println!("Featured posts ({}):", featured.len());
            for post in featured {
                println!(
                    "  {} - {} [{}]",
                    post.published_at.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, tag, featured",
                content_type
            );
        }
    }

    Ok(())
}
