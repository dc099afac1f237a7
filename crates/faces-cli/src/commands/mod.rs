pub mod feed;
pub mod serve;
pub mod siblings;
