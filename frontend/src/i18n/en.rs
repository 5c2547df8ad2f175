#![allow(dead_code, reason = "string table is shared by every view")]

pub mod common {
    pub const BULLET: &str = "•";
}

pub mod theme_toggle {
    pub const ARIA_LABEL: &str = "Switch between dark and light mode";
    pub const MOON_ALT: &str = "moon";
    pub const SUN_ALT: &str = "sun";
}

pub mod bio {
    pub const BYLINE_PREFIX: &str = "Personal blog by ";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
    pub const MISSING_THEME: &str = "Theme store is not available; the page was rendered outside the app shell.";
    pub const MISSING_CONTENT: &str = "Site metadata is not available; the page was rendered outside the app shell.";
    pub const CONTENT_LOAD_FAILED_TEMPLATE: &str = "Failed to load site content: {}";
}

pub mod home {
    pub const NO_POSTS: &str = "Nothing here yet.";
}

pub mod post {
    pub const BACK_HOME: &str = "← Back to all posts";
}

pub mod not_found {
    pub const TITLE: &str = "Not Found";
    pub const BODY: &str = "You just hit a route that doesn't exist... the sadness.";
}
