//! Target-independent building blocks for the lexblog front-end.
//!
//! Everything here compiles for both the browser (`wasm32`) and the host, so
//! the theme state machine and content models can be unit tested natively.

pub mod content;
pub mod error;
pub mod site;
pub mod theme;
pub mod theme_store;
pub mod typography;

pub use content::{Post, PostIndex, PostSummary};
pub use error::{ContentError, ThemeError};
pub use site::{Author, SiteMetadata, Social, SocialLink};
pub use theme::{resolve_initial_theme, Theme};
pub use theme_store::{Subscription, ThemeStore};
pub use typography::{FontScale, Typography};
