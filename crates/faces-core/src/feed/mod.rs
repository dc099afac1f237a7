mod models;
mod pairs;
mod siblings;
mod slug;

pub use models::{Feed, FeedItem};
pub(crate) use models::null_as_empty;
pub use pairs::{group_pairs, Pair};
pub use siblings::{resolve_siblings, PairLayout, Siblings};
pub use slug::decode_slug;
