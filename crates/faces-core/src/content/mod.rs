//! Content delivery API: document models and the HTTP client that fetches them.

mod client;
mod models;

pub use client::{ContentClient, ContentSource};
pub use models::{Navigation, PageResponse, Theme, WebLink, WebPage, WebSection, Website, WebsiteResponse};
