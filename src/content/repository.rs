//! Read-only repository over the article collection
//!
//! Built once at startup and injected by reference into every consumer.
//! All queries are pure reads; case-insensitive matches lowercase both
//! sides at the comparison boundary.

use super::{dataset, Category, Post, Tag};

/// Query facade over the fixed post collection
pub struct ContentRepository {
    posts: Vec<Post>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    /// Indices of featured posts, computed once at construction
    featured: Vec<usize>,
}

impl ContentRepository {
    /// Build the repository, deriving category/tag tables and the featured
    /// subset from the posts
    pub fn new(posts: Vec<Post>) -> Self {
        let mut categories: Vec<Category> = Vec::new();
        let mut tags: Vec<Tag> = Vec::new();

        for post in &posts {
            match categories.iter_mut().find(|c| c.name == post.category) {
                Some(cat) => cat.count += 1,
                None => {
                    let mut cat = Category::new(
                        &post.category,
                        dataset::category_description(&post.category),
                    );
                    cat.count = 1;
                    categories.push(cat);
                }
            }

            for name in &post.tags {
                match tags.iter_mut().find(|t| &t.name == name) {
                    Some(tag) => tag.count += 1,
                    None => {
                        let mut tag = Tag::new(name);
                        tag.count = 1;
                        tags.push(tag);
                    }
                }
            }
        }

        let featured = posts
            .iter()
            .enumerate()
            .filter(|(_, p)| p.featured)
            .map(|(i, _)| i)
            .collect();

        Self {
            posts,
            categories,
            tags,
            featured,
        }
    }

    /// All posts, in dataset order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// All categories with derived post counts, in first-appearance order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All tags with derived usage counts, in first-appearance order
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Look up a post by its slug. Exact, case-sensitive match.
    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// All posts in the given category, case-insensitively, in dataset order
    pub fn posts_by_category(&self, category: &str) -> Vec<&Post> {
        let wanted = category.to_lowercase();
        self.posts
            .iter()
            .filter(|p| p.category.to_lowercase() == wanted)
            .collect()
    }

    /// All posts carrying the given tag, case-insensitively
    pub fn posts_by_tag(&self, tag: &str) -> Vec<&Post> {
        let wanted = tag.to_lowercase();
        self.posts
            .iter()
            .filter(|p| p.tags.iter().any(|t| t.to_lowercase() == wanted))
            .collect()
    }

    /// Substring search over title, excerpt, body and tags. No tokenization,
    /// no ranking.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let query = query.to_lowercase();
        self.posts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query)
                    || p.excerpt.to_lowercase().contains(&query)
                    || p.raw.to_lowercase().contains(&query)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// The featured subset, cached at construction
    pub fn featured_posts(&self) -> Vec<&Post> {
        self.featured.iter().map(|&i| &self.posts[i]).collect()
    }

    /// Up to `limit` posts sharing the given post's category, excluding it
    pub fn related_posts(&self, post: &Post, limit: usize) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.id != post.id && p.category == post.category)
            .take(limit)
            .collect()
    }

    /// The `limit` most recently published posts
    pub fn recent_posts(&self, limit: usize) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts.truncate(limit);
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::dataset::builtin_posts;

    fn repo() -> ContentRepository {
        ContentRepository::new(builtin_posts().unwrap())
    }

    #[test]
    fn test_lookup_by_slug_returns_each_post() {
        let repo = repo();
        for post in repo.posts() {
            let found = repo.post_by_slug(&post.slug).unwrap();
            assert_eq!(found.id, post.id);
        }
    }

    #[test]
    fn test_lookup_by_slug_is_case_sensitive() {
        let repo = repo();
        assert!(repo.post_by_slug("getting-started-react-typescript").is_some());
        assert!(repo.post_by_slug("Getting-Started-React-TypeScript").is_none());
    }

    #[test]
    fn test_lookup_unknown_slug_returns_none() {
        let repo = repo();
        assert!(repo.post_by_slug("no-such-post").is_none());
        assert!(repo.post_by_slug("").is_none());
    }

    #[test]
    fn test_filter_by_category_case_insensitive() {
        let repo = repo();
        let lower = repo.posts_by_category("development");
        let mixed = repo.posts_by_category("Development");
        assert_eq!(lower.len(), 3);
        assert_eq!(lower.len(), mixed.len());
        assert!(lower
            .iter()
            .any(|p| p.slug == "getting-started-react-typescript"));
    }

    #[test]
    fn test_filter_by_category_preserves_dataset_order() {
        let repo = repo();
        let filtered = repo.posts_by_category("Development");
        let expected: Vec<&str> = repo
            .posts()
            .iter()
            .filter(|p| p.category == "Development")
            .map(|p| p.slug.as_str())
            .collect();
        let got: Vec<&str> = filtered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_filter_by_unknown_category_is_empty() {
        let repo = repo();
        assert!(repo.posts_by_category("Cooking").is_empty());
    }

    #[test]
    fn test_filter_by_tag_case_insensitive() {
        let repo = repo();
        let posts = repo.posts_by_tag("FRONTEND");
        assert_eq!(posts.len(), 2);
        for post in &posts {
            assert!(post.tags.iter().any(|t| t.to_lowercase() == "frontend"));
        }
    }

    #[test]
    fn test_post_matches_multiple_tag_queries() {
        let repo = repo();
        let by_react = repo.posts_by_tag("react");
        let by_typescript = repo.posts_by_tag("typescript");
        assert!(by_react
            .iter()
            .any(|p| p.slug == "getting-started-react-typescript"));
        assert!(by_typescript
            .iter()
            .any(|p| p.slug == "getting-started-react-typescript"));
    }

    #[test]
    fn test_search_matches_title_and_tag() {
        let repo = repo();
        let results = repo.search("typescript");
        assert!(results
            .iter()
            .any(|p| p.slug == "getting-started-react-typescript"));
    }

    #[test]
    fn test_search_matches_body() {
        let repo = repo();
        // "connection pooling" appears only in the Node.js article body
        let results = repo.search("connection pooling");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "building-scalable-nodejs-applications");
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let repo = repo();
        assert!(repo.search("nonexistentword").is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let repo = repo();
        let first: Vec<&str> = repo.search("css").iter().map(|p| p.slug.as_str()).collect();
        let second: Vec<&str> = repo.search("css").iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_featured_equals_flag_filter() {
        let repo = repo();
        let featured = repo.featured_posts();
        let expected: Vec<&str> = repo
            .posts()
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.slug.as_str())
            .collect();
        let got: Vec<&str> = featured.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(got, expected);

        // Stable across repeated calls
        let again: Vec<&str> = repo
            .featured_posts()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(got, again);
    }

    #[test]
    fn test_category_counts_are_derived() {
        let repo = repo();
        for category in repo.categories() {
            assert_eq!(category.count, repo.posts_by_category(&category.name).len());
        }
        let dev = repo
            .categories()
            .iter()
            .find(|c| c.name == "Development")
            .unwrap();
        assert_eq!(dev.count, 3);
        assert_eq!(dev.slug, "development");
    }

    #[test]
    fn test_tag_counts_are_derived() {
        let repo = repo();
        for tag in repo.tags() {
            assert_eq!(tag.count, repo.posts_by_tag(&tag.name).len());
        }
        let frontend = repo.tags().iter().find(|t| t.name == "Frontend").unwrap();
        assert_eq!(frontend.count, 2);
    }

    #[test]
    fn test_related_posts_share_category_and_exclude_self() {
        let repo = repo();
        let post = repo.post_by_slug("getting-started-react-typescript").unwrap();
        let related = repo.related_posts(post, 3);
        assert_eq!(related.len(), 2);
        for r in &related {
            assert_eq!(r.category, post.category);
            assert_ne!(r.id, post.id);
        }
    }

    #[test]
    fn test_recent_posts_sorted_by_date() {
        let repo = repo();
        let recent = repo.recent_posts(3);
        assert_eq!(recent.len(), 3);
        for pair in recent.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }
}
