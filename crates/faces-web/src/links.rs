use faces_core::content::WebLink;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as is in a path segment
const SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Where a CMS link points once rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Path on this site, under the current locale
    Internal(String),
    /// Anything else, opened in a new tab
    External(String),
}

impl LinkTarget {
    /// Links on the public origin become local paths under `/{lang}`
    pub fn classify(url: &str, origin: &str, lang: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        if !origin.is_empty() && url.contains(origin) {
            LinkTarget::Internal(url.replacen(origin, &format!("/{}", lang), 1))
        } else {
            LinkTarget::External(url.to_string())
        }
    }

    pub fn href(&self) -> &str {
        match self {
            LinkTarget::Internal(href) | LinkTarget::External(href) => href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}

/// Icon name under /icons for a navigation link
pub fn link_icon(url: &str) -> &'static str {
    let url = url.to_lowercase();
    if url.contains("instagram") {
        "instagram"
    } else if url.contains("about") {
        "about"
    } else if url.contains("illos.davidegiovanni.com") {
        "website"
    } else if url.contains("add") {
        "add"
    } else if url.contains("face-of-the-day") {
        "faceoftheday"
    } else {
        "default"
    }
}

/// Navigation links left and right of the title; the right half gets the
/// extra link when the count is odd
pub fn split_navbar(links: &[WebLink]) -> (&[WebLink], &[WebLink]) {
    links.split_at(links.len() / 2)
}

/// Path of a gallery item page
pub fn face_href(lang: &str, slug: &str) -> String {
    format!("/{}/faces/{}", lang, encode_segment(slug))
}

/// Percent-encode everything outside the unreserved set of RFC 3986
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_SET).to_string()
}
