//! Content module - the article model, the built-in dataset, and the
//! read-only repository that answers queries over it

pub mod dataset;
mod frontmatter;
mod markdown;
mod model;
mod repository;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use model::{Author, Category, Post, Tag};
pub use repository::ContentRepository;
