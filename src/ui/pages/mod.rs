//! Application pages module
//!
//! This module contains the page components for the site:
//! - Landing page (the marketing page itself)
//! - Not found fallback

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
