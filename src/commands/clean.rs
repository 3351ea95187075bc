//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Remove the public directory if it exists
pub fn run(blog: &Blog) -> Result<()> {
    if blog.public_dir.exists() {
        fs::remove_dir_all(&blog.public_dir)?;
        tracing::info!("Removed {:?}", blog.public_dir);
    } else {
        tracing::info!("Nothing to clean");
    }

    Ok(())
}
