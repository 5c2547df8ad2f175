//! Build-time site metadata: who writes the blog and where to find them.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// The author shown in the bio card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// One-sentence self description.
    pub summary: String,
}

/// Social handles, without the host part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    /// Twitter handle.
    pub twitter: String,
    /// GitHub user name.
    pub github: String,
    /// LinkedIn profile slug (the part after `/in/`).
    pub linkedin: String,
}

/// One outbound identity link in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    /// Link text.
    pub label: &'static str,
    /// Absolute URL.
    pub href: String,
}

impl Social {
    /// Profile URL on Twitter.
    pub fn twitter_url(&self) -> String {
        format!("https://twitter.com/{}", self.twitter)
    }

    /// Profile URL on GitHub.
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github)
    }

    /// Profile URL on LinkedIn.
    pub fn linkedin_url(&self) -> String {
        format!("https://linkedin.com/in/{}", self.linkedin)
    }

    /// The footer links, always in twitter, github, linkedin order.
    pub fn links(&self) -> [SocialLink; 3] {
        [
            SocialLink {
                label: "twitter",
                href: self.twitter_url(),
            },
            SocialLink {
                label: "github",
                href: self.github_url(),
            },
            SocialLink {
                label: "linkedin",
                href: self.linkedin_url(),
            },
        ]
    }
}

/// Everything the layout, bio and head tags need to know about the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    /// Blog title shown in the header.
    pub title: String,
    /// Default `<meta name="description">`.
    pub description: String,
    /// Canonical origin, e.g. `https://example.com`.
    pub site_url: String,
    /// Avatar path relative to the asset root.
    pub avatar: String,
    /// Who writes the blog.
    pub author: Author,
    /// Where to find the author.
    pub social: Social,
}

impl SiteMetadata {
    /// Parses and validates metadata.
    ///
    /// Every field is required; a missing or blank field is an error rather
    /// than a silent default so a broken content source fails loudly.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let metadata: Self = serde_json::from_str(raw)?;
        metadata.validate()?;
        tracing::debug!(title = %metadata.title, "site metadata loaded");
        Ok(metadata)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let required = [
            ("title", &self.title),
            ("siteUrl", &self.site_url),
            ("avatar", &self.avatar),
            ("author.name", &self.author.name),
            ("author.summary", &self.author.summary),
            ("social.twitter", &self.social.twitter),
            ("social.github", &self.social.github),
            ("social.linkedin", &self.social.linkedin),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContentError::EmptyField(field));
            }
        }
        Ok(())
    }

    /// Absolute URL of `path` on the canonical origin.
    pub fn canonical_url(&self, path: &str) -> String {
        let origin = self.site_url.trim().trim_end_matches('/');
        let path = path.trim();
        if path.is_empty() || path == "/" {
            format!("{origin}/")
        } else if path.starts_with('/') {
            format!("{origin}{path}")
        } else {
            format!("{origin}/{path}")
        }
    }

    /// `<title>` text for a page; the home page uses the bare site title.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page.map(str::trim).filter(|page| !page.is_empty()) {
            Some(page) => format!("{page} | {}", self.title),
            None => self.title.clone(),
        }
    }
}
