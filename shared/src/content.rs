//! The post index embedded at build time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A single post as authored in the content index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// URL segment under `/posts/`.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    /// One-line teaser shown on the home page.
    pub spoiler: String,
    /// Markdown body.
    pub body: String,
}

/// What the home page lists for each post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    /// URL segment under `/posts/`.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    /// Teaser line.
    pub spoiler: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            date: post.date.clone(),
            spoiler: post.spoiler.clone(),
        }
    }
}

/// All posts, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostIndex {
    posts: Vec<Post>,
}

impl PostIndex {
    /// Parses a JSON array of posts, validates it and orders it newest first.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let posts: Vec<Post> = serde_json::from_str(raw)?;
        let index = Self::from_posts(posts)?;
        tracing::debug!(count = index.len(), "post index loaded");
        Ok(index)
    }

    /// Builds an index from already-parsed posts.
    pub fn from_posts(mut posts: Vec<Post>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if post.slug.trim().is_empty() {
                return Err(ContentError::EmptyField("slug"));
            }
            if post.title.trim().is_empty() {
                return Err(ContentError::EmptyField("title"));
            }
            if !seen.insert(post.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(post.slug.clone()));
            }
        }
        // ISO dates sort lexicographically; ties keep authoring order.
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(Self {
            posts,
        })
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether there are no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Listing entries, newest first.
    pub fn summaries(&self) -> Vec<PostSummary> {
        self.posts.iter().map(PostSummary::from).collect()
    }

    /// Looks a post up by slug.
    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }
}
