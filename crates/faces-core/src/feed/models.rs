use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::slug::decode_slug;

/// An entry of a directory feed.
///
/// Display fields use `""` for absence. `slug` is not part of the wire
/// format: it is decoded from `id` once, when the item is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFeedItem")]
pub struct FeedItem {
    pub id: String,
    pub slug: String,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub content_html: String,
    pub image: String,
    pub date_published: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct RawFeedItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    content_html: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    image: String,
    #[serde(default, deserialize_with = "lenient_date")]
    date_published: Option<DateTime<Utc>>,
}

impl From<RawFeedItem> for FeedItem {
    fn from(raw: RawFeedItem) -> Self {
        let slug = decode_slug(&raw.id);
        Self {
            id: raw.id,
            slug,
            url: raw.url,
            title: raw.title,
            summary: raw.summary,
            content_html: raw.content_html,
            image: raw.image,
            date_published: raw.date_published,
        }
    }
}

impl FeedItem {
    /// Build an item from its id, decoding the slug the same way
    /// deserialization does
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            slug: decode_slug(&id),
            id,
            url: String::new(),
            title: String::new(),
            summary: String::new(),
            content_html: String::new(),
            image: String::new(),
            date_published: None,
        }
    }

    pub fn has_content(&self) -> bool {
        !self.content_html.trim().is_empty()
    }
}

/// A directory feed in publish order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

impl Feed {
    pub fn new(items: Vec<FeedItem>) -> Self {
        Self {
            title: String::new(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item carrying `slug`, with its position
    pub fn find(&self, slug: &str) -> Option<(usize, &FeedItem)> {
        if slug.is_empty() {
            return None;
        }
        self.items.iter().enumerate().find(|(_, item)| item.slug == slug)
    }
}

pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// RFC 3339 or a bare `YYYY-MM-DD`; anything else is dropped rather than
/// failing the whole feed
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<RawDate>::deserialize(deserializer)? {
        Some(RawDate::Text(text)) => text,
        Some(RawDate::Other(_)) | None => return Ok(None),
    };
    Ok(parse_date(&text))
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    let parsed = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight));
    if parsed.is_none() {
        tracing::debug!("Ignoring unparseable date_published {:?}", text);
    }
    parsed
}
