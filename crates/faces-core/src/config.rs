use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::feed::PairLayout;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level, used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Directory of static files (icons, stylesheet) served at the site root
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Directory holding <locale>/<namespace>.json translation tables
    #[serde(default = "default_locales_dir")]
    pub locales_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            static_dir: default_static_dir(),
            locales_dir: default_locales_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public origin of the site; links under it are rewritten to local paths
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Appended to item page titles
    #[serde(default = "default_author")]
    pub author: String,
    /// Description used when a page has neither description nor title
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Share image used by the about page when the item has none
    #[serde(default = "default_image")]
    pub default_image: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Locale path segment -> content API language code
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            name: default_site_name(),
            author: default_author(),
            tagline: default_tagline(),
            default_image: default_image(),
            default_locale: default_locale(),
            languages: default_languages(),
        }
    }
}

impl SiteConfig {
    /// Resolve a locale path segment to the locale actually served.
    /// Unknown locales fall back to the default one.
    pub fn resolve_locale(&self, locale: &str) -> &str {
        let locale_lower = locale.to_ascii_lowercase();
        self.languages
            .keys()
            .find(|known| **known == locale_lower)
            .map(String::as_str)
            .unwrap_or(&self.default_locale)
    }

    /// Content API language code for a locale path segment
    pub fn language_code(&self, locale: &str) -> &str {
        let resolved = self.resolve_locale(locale);
        self.languages
            .get(resolved)
            .map(String::as_str)
            .unwrap_or("it-IT")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the websites endpoint (website and page documents)
    #[serde(default = "default_websites_base")]
    pub websites_base: String,
    /// Base URL of the contents endpoint (directory feeds)
    #[serde(default = "default_contents_base")]
    pub contents_base: String,
    /// Website domain as registered with the content API
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_public_key")]
    pub public_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_gallery_directory")]
    pub gallery_directory: String,
    #[serde(default = "default_about_directory")]
    pub about_directory: String,
    /// Slug of the about directory item shown on /{lang}/about
    #[serde(default = "default_about_slug")]
    pub about_slug: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            websites_base: default_websites_base(),
            contents_base: default_contents_base(),
            domain: default_domain(),
            public_key: default_public_key(),
            request_timeout_secs: default_timeout(),
            gallery_directory: default_gallery_directory(),
            about_directory: default_about_directory(),
            about_slug: default_about_slug(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Items per grid row group
    #[serde(default = "default_pair_width")]
    pub pair_width: usize,
    /// Position inside a group of the navigable item
    #[serde(default = "default_anchor_offset")]
    pub anchor_offset: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            pair_width: default_pair_width(),
            anchor_offset: default_anchor_offset(),
        }
    }
}

impl GalleryConfig {
    pub fn layout(&self) -> crate::Result<PairLayout> {
        PairLayout::new(self.pair_width, self.anchor_offset)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_locales_dir() -> PathBuf {
    PathBuf::from("locales")
}

fn default_origin() -> String {
    "https://facingmyfaces.davidegiovanni.com".to_string()
}

fn default_site_name() -> String {
    "Facing my faces".to_string()
}

fn default_author() -> String {
    "Davide G. Steccanella".to_string()
}

fn default_tagline() -> String {
    "Illustrazioni di Davide Giovanni Steccanella".to_string()
}

fn default_image() -> String {
    "https://cdn.revas.app/v0/01f9ekbw2n7m4sfc4xhtftyarv/01fv5pkdatk6nkxdmkhprnwxpz/01fv89a184detgp575h5zenqvq/holy-david-full-logo-png.png".to_string()
}

fn default_locale() -> String {
    "it-it".to_string()
}

fn default_languages() -> BTreeMap<String, String> {
    BTreeMap::from([("it-it".to_string(), "it-IT".to_string())])
}

fn default_websites_base() -> String {
    "https://cdn.revas.app/websites/v0/websites".to_string()
}

fn default_contents_base() -> String {
    "https://cdn.revas.app/contents/v0/directories".to_string()
}

fn default_domain() -> String {
    "facingmyfaces.davidegiovanni.com".to_string()
}

fn default_public_key() -> String {
    "01exy3y9j9pdvyzhchkpj9vc5w".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_gallery_directory() -> String {
    "facing-my-faces".to_string()
}

fn default_about_directory() -> String {
    "about".to_string()
}

fn default_about_slug() -> String {
    "the-project".to_string()
}

fn default_pair_width() -> usize {
    2
}

fn default_anchor_offset() -> usize {
    1
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(expand_tilde(path))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/faces/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("faces")
            .join("config.toml")
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.gallery.layout()?;

        if !self.site.languages.contains_key(&self.site.default_locale) {
            return Err(crate::Error::Config(format!(
                "default_locale '{}' has no entry in [site.languages]",
                self.site.default_locale
            )));
        }

        if let Some(bad) = self.site.languages.keys().find(|k| **k != k.to_ascii_lowercase()) {
            return Err(crate::Error::Config(format!(
                "locale '{}' in [site.languages] must be lowercase",
                bad
            )));
        }

        url::Url::parse(&self.site.origin)?;
        Ok(())
    }

    /// Locales directory (with tilde expansion)
    pub fn locales_dir(&self) -> PathBuf {
        expand_tilde(&self.server.locales_dir)
    }

    /// Static files directory (with tilde expansion)
    pub fn static_dir(&self) -> PathBuf {
        expand_tilde(&self.server.static_dir)
    }
}
