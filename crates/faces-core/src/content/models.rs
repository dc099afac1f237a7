use serde::{Deserialize, Serialize};

use crate::feed::null_as_empty;

/// Envelope of the website document
#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteResponse {
    pub website: Website,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub header_nav: Navigation,
}

impl Website {
    pub fn navbar(&self) -> &[WebLink] {
        &self.header_nav.links
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub primary_color: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inverted_primary_color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Navigation {
    #[serde(default)]
    pub links: Vec<WebLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebLink {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl WebLink {
    /// A link without a title is not rendered
    pub fn is_present(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Envelope of the page document
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub page: WebPage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default)]
    pub sections: Vec<WebSection>,
}

impl WebPage {
    /// First section, which carries the headline and backdrop of the home page
    pub fn hero(&self) -> Option<&WebSection> {
        self.sections.first()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSection {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default)]
    pub primary_link: Option<WebLink>,
}

impl WebSection {
    pub fn link(&self) -> Option<&WebLink> {
        self.primary_link.as_ref().filter(|l| l.is_present())
    }
}
