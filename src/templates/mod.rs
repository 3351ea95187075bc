//! Built-in theme templates using the Tera template engine
//!
//! All templates are embedded directly in the binary; the theme is not
//! configurable. The context structs below are the only data surface the
//! templates see.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded theme loaded
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Autoescaping is off: the generator feeds pre-rendered HTML
        // fragments and fixed URLs into the templates
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("post.html", include_str!("theme/post.html")),
            ("listing.html", include_str!("theme/listing.html")),
            ("about.html", include_str!("theme/about.html")),
            ("contact.html", include_str!("theme/contact.html")),
            ("404.html", include_str!("theme/404.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("theme/partials/head.html"),
            ),
            (
                "partials/header.html",
                include_str!("theme/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("theme/partials/footer.html"),
            ),
            (
                "partials/sidebar.html",
                include_str!("theme/partials/sidebar.html"),
            ),
            (
                "partials/post_card.html",
                include_str!("theme/partials/post_card.html"),
            ),
        ])?;

        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// A post as seen by the templates
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub url: String,
    pub date: String,
    pub updated: Option<String>,
    pub author: AuthorData,
    pub tags: Vec<TagData>,
    pub category: CategoryData,
    pub reading_time: u32,
    pub featured: bool,
    pub cover_image: String,
}

/// Author block for templates
#[derive(Debug, Clone, Serialize)]
pub struct AuthorData {
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

/// Category entry for templates
#[derive(Debug, Clone, Serialize)]
pub struct CategoryData {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub description: String,
    pub count: usize,
}

/// Tag entry for templates
#[derive(Debug, Clone, Serialize)]
pub struct TagData {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub count: usize,
}

/// Site-wide data available to every template
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub categories: Vec<CategoryData>,
    pub tags: Vec<TagData>,
    pub recent_posts: Vec<PostData>,
    pub post_count: usize,
}

/// Config data available to every template
#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub url: String,
    pub root: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_hours: String,
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(tera::Value::String(result))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!("{}{}", truncated, omission)))
    }
}
