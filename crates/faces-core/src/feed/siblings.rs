use super::models::{Feed, FeedItem};
use super::slug::decode_slug;
use crate::{Error, Result};

/// How gallery items are grouped for navigation.
///
/// Items are shown in groups of `width`; only the item at position `anchor`
/// inside its group is navigable, and its neighbours are the anchors of the
/// adjacent groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairLayout {
    width: usize,
    anchor: usize,
}

impl PairLayout {
    pub fn new(width: usize, anchor: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::Config("pair width must be at least 1".to_string()));
        }
        if anchor >= width {
            return Err(Error::Config(format!(
                "anchor offset {} is outside a group of {}",
                anchor, width
            )));
        }
        Ok(Self { width, anchor })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn is_anchor(&self, index: usize) -> bool {
        index % self.width == self.anchor
    }

    pub fn next_index(&self, index: usize, len: usize) -> Option<usize> {
        if !self.is_anchor(index) {
            return None;
        }
        let next = index + self.width;
        (next < len).then_some(next)
    }

    pub fn previous_index(&self, index: usize) -> Option<usize> {
        if !self.is_anchor(index) {
            return None;
        }
        index.checked_sub(self.width)
    }
}

impl Default for PairLayout {
    /// Two columns, second item of each pair navigable
    fn default() -> Self {
        Self {
            width: 2,
            anchor: 1,
        }
    }
}

/// A located item and the slugs of its navigable neighbours.
/// An empty slug means there is no neighbour in that direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Siblings<'a> {
    pub item: &'a FeedItem,
    pub index: usize,
    pub previous_slug: String,
    pub next_slug: String,
}

impl Siblings<'_> {
    pub fn has_previous(&self) -> bool {
        !self.previous_slug.is_empty()
    }

    pub fn has_next(&self) -> bool {
        !self.next_slug.is_empty()
    }
}

/// Locate `target_slug` in `feed` and compute its previous/next neighbours
/// under `layout`. Fails with [`Error::NotFound`] when no item carries the slug.
pub fn resolve_siblings<'a>(
    feed: &'a Feed,
    target_slug: &str,
    layout: PairLayout,
) -> Result<Siblings<'a>> {
    let (index, item) = feed
        .find(target_slug)
        .ok_or_else(|| Error::NotFound(target_slug.to_string()))?;

    let slug_at = |position: Option<usize>| {
        position
            .and_then(|i| feed.items.get(i))
            .map(|neighbour| decode_slug(&neighbour.id))
            .unwrap_or_default()
    };

    let siblings = Siblings {
        item,
        index,
        previous_slug: slug_at(layout.previous_index(index)),
        next_slug: slug_at(layout.next_index(index, feed.len())),
    };

    tracing::debug!(
        slug = target_slug,
        index,
        previous = %siblings.previous_slug,
        next = %siblings.next_slug,
        "Resolved siblings"
    );

    Ok(siblings)
}
