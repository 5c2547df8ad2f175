// Reusable components live here.

pub mod bio;
pub mod error_banner;
pub mod footer;
pub mod layout;
pub mod markdown;
pub mod toggle;
