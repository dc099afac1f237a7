use super::models::FeedItem;

/// Two consecutive feed items of the home grid. The last pair of an
/// odd-length feed has no second item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair<'a> {
    pub first: &'a FeedItem,
    pub second: Option<&'a FeedItem>,
}

impl<'a> Pair<'a> {
    /// The item a grid tile links to: the second one when present
    pub fn anchor(&self) -> &'a FeedItem {
        self.second.unwrap_or(self.first)
    }
}

/// Group items two at a time, in feed order
pub fn group_pairs(items: &[FeedItem]) -> Vec<Pair<'_>> {
    items.chunks(2).fold(Vec::with_capacity(items.len().div_ceil(2)), |mut pairs, chunk| {
        pairs.push(Pair {
            first: &chunk[0],
            second: chunk.get(1),
        });
        pairs
    })
}
