//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
    pub post_dir: String,
    pub category_dir: String,
    pub tag_dir: String,

    // Contact page
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_hours: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "ModernBlog".to_string(),
            subtitle: "Insights, tutorials, and best practices".to_string(),
            description: "Discover insights, tutorials, and best practices in web \
                          development, design, and technology."
                .to_string(),
            author: "ModernBlog Team".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
            post_dir: "post".to_string(),
            category_dir: "category".to_string(),
            tag_dir: "tag".to_string(),

            contact_email: "hello@modernblog.com".to_string(),
            contact_phone: "+1 555 010 2040".to_string(),
            contact_hours: "Mon-Fri: 8am-5pm PST".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "ModernBlog");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.post_dir, "post");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
url: https://blog.test
contact_email: mail@blog.test
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.url, "https://blog.test");
        assert_eq!(config.contact_email, "mail@blog.test");
        // Unlisted fields keep their defaults
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_extra_fields_preserved() {
        let yaml = r#"
title: My Blog
twitter_username: modernblog
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.extra.get("twitter_username").and_then(|v| v.as_str()),
            Some("modernblog")
        );
    }
}
