//! Error types shared by the theme store and the content loaders.

use thiserror::Error;

use crate::theme::Theme;

/// Failures around reading or changing the active theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The store was read before the bootstrap gave it a value.
    #[error("theme read before the bootstrap initialized it")]
    Uninitialized,
    /// A persisted or user-supplied theme name is not `light` or `dark`.
    #[error("unknown theme `{0}`")]
    Unknown(String),
    /// `initialize` was called on a store that already holds a value.
    #[error("theme store already initialized to `{0}`")]
    AlreadyInitialized(Theme),
}

/// Failures while loading build-time site metadata or the post index.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The embedded JSON does not match the expected shape.
    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required field is present but blank.
    #[error("content field `{0}` is empty")]
    EmptyField(&'static str),
    /// Two posts share the same slug.
    #[error("duplicate post slug `{0}`")]
    DuplicateSlug(String),
}
