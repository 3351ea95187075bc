//! Generate the static site

use anyhow::Result;

use crate::generator::Generator;
use crate::Blog;

/// Generate all pages into the public directory
pub fn run(blog: &Blog) -> Result<()> {
    let repo = blog.repository()?;
    let generator = Generator::new(blog)?;
    generator.generate(&repo)?;

    tracing::info!(
        "Generated site with {} posts into {:?}",
        repo.posts().len(),
        blog.public_dir
    );

    Ok(())
}
