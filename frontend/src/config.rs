/// Configuration for the frontend application

/// Base URL for static assets
/// - For local development: "/"
/// - For GitHub Pages: "/lexblog/"
#[cfg(not(feature = "gh-pages"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "gh-pages")]
pub const BASE_URL: &str = "/lexblog/";

/// `localStorage` key holding the reader's explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query used when no explicit choice has been stored.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Site metadata resolved at build time.
pub const SITE_METADATA_JSON: &str = include_str!("../content/site.json");

/// Post index resolved at build time.
pub const POSTS_JSON: &str = include_str!("../content/posts.json");

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
