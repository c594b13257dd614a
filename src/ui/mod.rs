//! UI components: icons, pages, and the DOM side of the reveal engine.

pub mod icon;
pub mod pages;
pub mod reveal;

pub use icon::{GithubIcon, Icon, icons};
