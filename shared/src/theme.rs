//! The two visual modes of the site and how the initial one is chosen.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// `<meta name="theme-color">` value while the light theme is active.
pub const LIGHT_THEME_COLOR: &str = "#ffa8c5";
/// `<meta name="theme-color">` value while the dark theme is active.
pub const DARK_THEME_COLOR: &str = "#282c35";

/// Active visual mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl Theme {
    /// Lowercase name, also used as the `body` class and the persisted value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Whether this is [`Theme::Dark`].
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Maps a toggle's checked state to a theme; checked means dark.
    pub const fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Browser chrome color advertised for this theme.
    pub const fn meta_color(self) -> &'static str {
        match self {
            Self::Light => LIGHT_THEME_COLOR,
            Self::Dark => DARK_THEME_COLOR,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else if trimmed.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else {
            Err(ThemeError::Unknown(trimmed.to_string()))
        }
    }
}

/// Picks the theme to boot with.
///
/// A valid persisted preference wins; otherwise the operating system's
/// `prefers-color-scheme` decides. Garbage in storage is ignored.
pub fn resolve_initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(raw) = stored {
        match raw.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(err) => tracing::warn!("ignoring stored theme preference: {err}"),
        }
    }
    Theme::from_checked(prefers_dark)
}
