use std::sync::Arc;

use faces_core::content::ContentSource;
use faces_core::feed::PairLayout;
use faces_core::i18n::{I18n, Translations};
use faces_core::{AppConfig, Error, Result};

use crate::error::WebError;

/// Translation namespaces every page loads
pub const I18N_NAMESPACES: &[&str] = &["shared"];

/// Read-only state shared by all requests
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub content: Arc<dyn ContentSource>,
    pub translations: Arc<Translations>,
    pub layout: PairLayout,
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        content: Arc<dyn ContentSource>,
        translations: Translations,
    ) -> Result<Self> {
        let layout = config.gallery.layout()?;
        Ok(Self {
            config,
            content,
            translations: Arc::new(translations),
            layout,
        })
    }

    /// Per-request view of the state for the locale in the URL
    pub fn context(&self, lang: &str, path: &str) -> PageContext {
        let site = &self.config.site;
        let locale = site.resolve_locale(lang).to_string();

        PageContext {
            lang: lang.to_string(),
            language_code: site.language_code(lang).to_string(),
            path: path.to_string(),
            i18n: self.translations.load(&locale, I18N_NAMESPACES),
            locale,
            config: self.config.clone(),
        }
    }
}

/// What a handler knows about the request it is rendering
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Locale segment as requested; used to build links
    pub lang: String,
    /// Locale actually served
    pub locale: String,
    pub language_code: String,
    pub path: String,
    pub i18n: I18n,
    pub config: Arc<AppConfig>,
}

impl PageContext {
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.i18n.t("shared", key)
    }

    pub fn home_href(&self) -> String {
        format!("/{}", self.lang)
    }

    pub fn error(&self, error: Error) -> WebError {
        WebError::new(error, self.clone())
    }
}
