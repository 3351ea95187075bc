//! Generator module - renders the article collection to static HTML

use anyhow::Result;
use chrono::Datelike;
use std::fs;
use std::path::Path;

use tera::Context;

use crate::content::{ContentRepository, Post};
use crate::templates::{
    AuthorData, CategoryData, ConfigData, PostData, SiteData, TagData, TemplateRenderer,
};
use crate::Blog;

/// Static site generator using the embedded Tera theme
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            blog: blog.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, repo: &ContentRepository) -> Result<()> {
        fs::create_dir_all(&self.blog.public_dir)?;

        let site_data = self.build_site_data(repo);
        let config_data = self.build_config_data();

        self.generate_index_page(repo, &site_data, &config_data)?;
        self.generate_post_pages(repo, &site_data, &config_data)?;
        self.generate_category_pages(repo, &site_data, &config_data)?;
        self.generate_tag_pages(repo, &site_data, &config_data)?;
        self.generate_static_pages(&site_data, &config_data)?;
        self.generate_search_index(repo)?;
        self.generate_atom_feed(repo)?;

        Ok(())
    }

    /// Prefix a site-relative path with the configured root
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.blog.config.root, path.trim_start_matches('/'))
    }

    fn category_data(&self, repo: &ContentRepository, name: &str) -> CategoryData {
        let (slug, description, count) = repo
            .categories()
            .iter()
            .find(|c| c.name == name)
            .map(|c| (c.slug.clone(), c.description.clone(), c.count))
            .unwrap_or_else(|| (slug::slugify(name), String::new(), 0));

        CategoryData {
            name: name.to_string(),
            url: self.url_for(&format!("{}/{}/", self.blog.config.category_dir, slug)),
            slug,
            description,
            count,
        }
    }

    fn tag_data(&self, repo: &ContentRepository, name: &str) -> TagData {
        let (slug, count) = repo
            .tags()
            .iter()
            .find(|t| t.name == name)
            .map(|t| (t.slug.clone(), t.count))
            .unwrap_or_else(|| (slug::slugify(name), 0));

        TagData {
            name: name.to_string(),
            url: self.url_for(&format!("{}/{}/", self.blog.config.tag_dir, slug)),
            slug,
            count,
        }
    }

    /// Build the template view of a post
    fn post_data(&self, repo: &ContentRepository, post: &Post) -> PostData {
        PostData {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            url: self.url_for(&format!("{}/{}/", self.blog.config.post_dir, post.slug)),
            date: post.published_at.format("%B %d, %Y").to_string(),
            updated: post.updated_at.map(|d| d.format("%B %d, %Y").to_string()),
            author: AuthorData {
                name: post.author.name.clone(),
                avatar: post.author.avatar.clone(),
                bio: post.author.bio.clone(),
            },
            tags: post.tags.iter().map(|t| self.tag_data(repo, t)).collect(),
            category: self.category_data(repo, &post.category),
            reading_time: post.reading_time,
            featured: post.featured,
            cover_image: post.cover_image.clone(),
        }
    }

    /// Build site data for templates
    fn build_site_data(&self, repo: &ContentRepository) -> SiteData {
        SiteData {
            categories: repo
                .categories()
                .iter()
                .map(|c| self.category_data(repo, &c.name))
                .collect(),
            tags: repo
                .tags()
                .iter()
                .map(|t| self.tag_data(repo, &t.name))
                .collect(),
            recent_posts: repo
                .recent_posts(3)
                .into_iter()
                .map(|p| self.post_data(repo, p))
                .collect(),
            post_count: repo.posts().len(),
        }
    }

    /// Build config data for templates
    fn build_config_data(&self) -> ConfigData {
        let config = &self.blog.config;
        ConfigData {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            url: config.url.clone(),
            root: config.root.clone(),
            contact_email: config.contact_email.clone(),
            contact_phone: config.contact_phone.clone(),
            contact_hours: config.contact_hours.clone(),
        }
    }

    /// Create a base context with common variables
    fn create_base_context(&self, site_data: &SiteData, config_data: &ConfigData) -> Context {
        let mut context = Context::new();
        context.insert("site", site_data);
        context.insert("config", config_data);
        context.insert("current_year", &chrono::Utc::now().year().to_string());
        // Pages that have a title overwrite this
        context.insert("page_title", "");
        context
    }

    /// Render a template and write it under the public directory
    fn write_page(&self, template: &str, context: &Context, rel_path: &str) -> Result<()> {
        let html = self.renderer.render(template, context)?;

        let output_path = self.blog.public_dir.join(rel_path);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Generate the home page: featured posts, latest posts, sidebar
    fn generate_index_page(
        &self,
        repo: &ContentRepository,
        site_data: &SiteData,
        config_data: &ConfigData,
    ) -> Result<()> {
        let featured: Vec<PostData> = repo
            .featured_posts()
            .into_iter()
            .map(|p| self.post_data(repo, p))
            .collect();
        let latest: Vec<PostData> = repo
            .posts()
            .iter()
            .filter(|p| !p.featured)
            .map(|p| self.post_data(repo, p))
            .collect();

        let mut context = self.create_base_context(site_data, config_data);
        context.insert("featured_posts", &featured);
        context.insert("latest_posts", &latest);

        self.write_page("index.html", &context, "index.html")
    }

    /// Generate individual post pages
    fn generate_post_pages(
        &self,
        repo: &ContentRepository,
        site_data: &SiteData,
        config_data: &ConfigData,
    ) -> Result<()> {
        for post in repo.posts() {
            let related: Vec<PostData> = repo
                .related_posts(post, 3)
                .into_iter()
                .map(|p| self.post_data(repo, p))
                .collect();

            let mut context = self.create_base_context(site_data, config_data);
            context.insert("page_title", &post.title);
            context.insert("post", &self.post_data(repo, post));
            context.insert("related_posts", &related);

            let rel_path = format!("{}/{}/index.html", self.blog.config.post_dir, post.slug);
            self.write_page("post.html", &context, &rel_path)?;
        }

        tracing::info!("Generated {} post pages", repo.posts().len());
        Ok(())
    }

    /// Generate one listing page per category
    fn generate_category_pages(
        &self,
        repo: &ContentRepository,
        site_data: &SiteData,
        config_data: &ConfigData,
    ) -> Result<()> {
        for category in repo.categories() {
            let posts: Vec<PostData> = repo
                .posts_by_category(&category.name)
                .into_iter()
                .map(|p| self.post_data(repo, p))
                .collect();

            let mut context = self.create_base_context(site_data, config_data);
            context.insert("page_title", &category.name);
            context.insert("listing_title", &category.name);
            context.insert("listing_description", &category.description);
            context.insert("listing_posts", &posts);

            let rel_path = format!(
                "{}/{}/index.html",
                self.blog.config.category_dir, category.slug
            );
            self.write_page("listing.html", &context, &rel_path)?;
        }

        tracing::info!("Generated {} category pages", repo.categories().len());
        Ok(())
    }

    /// Generate one listing page per tag
    fn generate_tag_pages(
        &self,
        repo: &ContentRepository,
        site_data: &SiteData,
        config_data: &ConfigData,
    ) -> Result<()> {
        for tag in repo.tags() {
            let posts: Vec<PostData> = repo
                .posts_by_tag(&tag.name)
                .into_iter()
                .map(|p| self.post_data(repo, p))
                .collect();

            let title = format!("#{}", tag.name);
            let mut context = self.create_base_context(site_data, config_data);
            context.insert("page_title", &title);
            context.insert("listing_title", &title);
            context.insert("listing_description", "");
            context.insert("listing_posts", &posts);

            let rel_path = format!("{}/{}/index.html", self.blog.config.tag_dir, tag.slug);
            self.write_page("listing.html", &context, &rel_path)?;
        }

        tracing::info!("Generated {} tag pages", repo.tags().len());
        Ok(())
    }

    /// Generate the about, contact and not-found pages
    fn generate_static_pages(&self, site_data: &SiteData, config_data: &ConfigData) -> Result<()> {
        let mut context = self.create_base_context(site_data, config_data);
        context.insert("page_title", "About");
        self.write_page("about.html", &context, "about/index.html")?;

        let mut context = self.create_base_context(site_data, config_data);
        context.insert("page_title", "Contact");
        self.write_page("contact.html", &context, "contact/index.html")?;

        let mut context = self.create_base_context(site_data, config_data);
        context.insert("page_title", "Post Not Found");
        self.write_page("404.html", &context, "404.html")?;

        Ok(())
    }

    /// Generate search index (JSON)
    fn generate_search_index(&self, repo: &ContentRepository) -> Result<()> {
        let search_data: Vec<serde_json::Value> = repo
            .posts()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "title": p.title,
                    "url": self.url_for(&format!("{}/{}/", self.blog.config.post_dir, p.slug)),
                    "excerpt": p.excerpt,
                    "tags": p.tags,
                    "category": p.category,
                    "date": p.published_at.format("%Y-%m-%d").to_string(),
                })
            })
            .collect();

        let output_path = self.blog.public_dir.join("search.json");
        let json = serde_json::to_string_pretty(&search_data)?;
        fs::write(&output_path, json)?;
        tracing::info!("Generated search.json");

        Ok(())
    }

    /// Generate Atom feed
    fn generate_atom_feed(&self, repo: &ContentRepository) -> Result<()> {
        let config = &self.blog.config;
        let base_url = config.url.trim_end_matches('/');

        let mut feed = String::new();
        feed.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        feed.push('\n');
        feed.push_str(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
        feed.push('\n');
        feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
        feed.push_str(&format!(
            "  <link href=\"{}/atom.xml\" rel=\"self\"/>\n",
            base_url
        ));
        feed.push_str(&format!("  <link href=\"{}/\"/>\n", base_url));
        feed.push_str(&format!(
            "  <updated>{}</updated>\n",
            chrono::Utc::now().to_rfc3339()
        ));
        feed.push_str(&format!("  <id>{}/</id>\n", base_url));
        feed.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape_xml(&config.author)
        ));

        for post in repo.posts() {
            let link = format!("{}/{}/{}/", base_url, config.post_dir, post.slug);
            feed.push_str("  <entry>\n");
            feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
            feed.push_str(&format!("    <link href=\"{}\"/>\n", link));
            feed.push_str(&format!("    <id>{}</id>\n", link));
            feed.push_str(&format!(
                "    <published>{}</published>\n",
                post.published_at.to_rfc3339()
            ));
            feed.push_str(&format!(
                "    <updated>{}</updated>\n",
                post.updated_at.unwrap_or(post.published_at).to_rfc3339()
            ));
            feed.push_str(&format!(
                "    <summary>{}</summary>\n",
                escape_xml(&post.excerpt)
            ));
            feed.push_str(&format!(
                "    <content type=\"html\"><![CDATA[{}]]></content>\n",
                post.content
            ));
            feed.push_str("  </entry>\n");
        }

        feed.push_str("</feed>\n");

        let output_path = self.blog.public_dir.join("atom.xml");
        fs::write(&output_path, feed)?;
        tracing::info!("Generated atom.xml");

        Ok(())
    }
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Check whether a generated site exists at the given public directory
pub fn site_exists(public_dir: &Path) -> bool {
    public_dir.join("index.html").exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & b < c"), "a &amp; b &lt; c");
        assert_eq!(escape_xml(r#""quoted""#), "&quot;quoted&quot;");
    }
}
