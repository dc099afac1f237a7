//! Head metadata for each kind of page.
//!
//! Every builder starts from what the content offers and falls back, field
//! by field, to a fixed default when the content leaves it empty.

use crate::config::SiteConfig;
use crate::content::WebPage;
use crate::feed::FeedItem;

pub const ERROR_TITLE: &str = "Website error";
pub const ERROR_DESCRIPTION: &str = "The website didn't load correctly";

#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub robots: String,
    pub kind: String,
    /// Canonical link, when the page declares one
    pub canonical: Option<String>,
}

impl PageMeta {
    fn new(site: &SiteConfig, path: &str, title: String, description: String, image: String) -> Self {
        Self {
            title,
            description,
            image,
            url: absolute_url(site, path),
            robots: "follow".to_string(),
            kind: "website".to_string(),
            canonical: None,
        }
    }

    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = Some(canonical.into());
        self
    }

    /// Metadata of the error page
    pub fn error(site: &SiteConfig, path: &str) -> Self {
        Self::new(
            site,
            path,
            ERROR_TITLE.to_string(),
            ERROR_DESCRIPTION.to_string(),
            String::new(),
        )
    }

    /// Home page: page title or "Homepage"; description, then title, then tagline
    pub fn home(site: &SiteConfig, path: &str, page: &WebPage) -> Self {
        Self::for_page(site, path, page, &site.tagline)
    }

    /// Generic page: like home, with the site name as last description fallback
    pub fn page(site: &SiteConfig, path: &str, page: &WebPage) -> Self {
        Self::for_page(site, path, page, &site.name)
    }

    fn for_page(site: &SiteConfig, path: &str, page: &WebPage, last_description: &str) -> Self {
        Self::new(
            site,
            path,
            first_non_empty(&[&page.title], "Homepage"),
            first_non_empty(&[&page.description, &page.title], last_description),
            page.image.clone(),
        )
    }

    /// About page: falls back to the site default share image
    pub fn about(site: &SiteConfig, path: &str, item: &FeedItem) -> Self {
        Self::new(
            site,
            path,
            first_non_empty(&[&item.title], "About"),
            first_non_empty(&[&item.summary, &item.title], &site.name),
            first_non_empty(&[&item.image], &site.default_image),
        )
    }

    /// Gallery item: title suffixed with the author
    pub fn item(site: &SiteConfig, path: &str, item: &FeedItem) -> Self {
        Self::new(
            site,
            path,
            format!("{} | {}", first_non_empty(&[&item.title], "Page"), site.author),
            first_non_empty(&[&item.summary, &item.title], &site.tagline),
            item.image.clone(),
        )
    }

    /// (name, content) pairs of the `<meta name=...>` tags
    pub fn named_tags(&self) -> Vec<(&'static str, &str)> {
        let mut tags = vec![
            ("description", self.description.as_str()),
            ("robots", self.robots.as_str()),
            ("twitter:card", if self.image.is_empty() { "summary" } else { "summary_large_image" }),
            ("twitter:title", self.title.as_str()),
            ("twitter:description", self.description.as_str()),
        ];
        if !self.image.is_empty() {
            tags.push(("twitter:image", self.image.as_str()));
        }
        tags
    }

    /// (property, content) pairs of the Open Graph tags
    pub fn property_tags(&self) -> Vec<(&'static str, &str)> {
        let mut tags = vec![
            ("og:title", self.title.as_str()),
            ("og:description", self.description.as_str()),
            ("og:url", self.url.as_str()),
            ("og:type", self.kind.as_str()),
        ];
        if !self.image.is_empty() {
            tags.push(("og:image", self.image.as_str()));
        }
        tags
    }
}

/// Absolute URL of `path` on the public origin
pub fn absolute_url(site: &SiteConfig, path: &str) -> String {
    format!("{}{}", site.origin.trim_end_matches('/'), path)
}

fn first_non_empty(candidates: &[&String], fallback: &str) -> String {
    candidates
        .iter()
        .find(|c| !c.is_empty())
        .map(|c| c.as_str())
        .unwrap_or(fallback)
        .to_string()
}
