pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod meta;

pub use config::AppConfig;
pub use error::{Error, Result};
