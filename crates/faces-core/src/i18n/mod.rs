//! Translation tables.
//!
//! Tables live in `<locales_dir>/<locale>/<namespace>.json` as flat
//! key/value objects. The tables shipped with the repository are compiled
//! in, so the site renders even without a locales directory; files found on
//! disk override them key by key.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::{Error, Result};

pub type Table = BTreeMap<String, String>;

const BUILTIN: &[(&str, &str, &str)] = &[
    ("it-it", "shared", include_str!("../../../../locales/it-it/shared.json")),
    ("en-us", "shared", include_str!("../../../../locales/en-us/shared.json")),
];

/// Every loaded table, by locale then namespace
#[derive(Debug, Clone)]
pub struct Translations {
    default_locale: String,
    locales: HashMap<String, HashMap<String, Table>>,
}

impl Translations {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into().to_ascii_lowercase(),
            locales: HashMap::new(),
        }
    }

    /// Tables compiled into the binary
    pub fn builtin(default_locale: impl Into<String>) -> Result<Self> {
        let mut translations = Self::new(default_locale);
        for (locale, namespace, json) in BUILTIN {
            let table: Table = serde_json::from_str(json)?;
            translations.insert(locale, namespace, table);
        }
        Ok(translations)
    }

    /// Builtin tables overlaid with whatever `dir` contains.
    /// A missing directory is not an error.
    pub fn load_dir(dir: &Path, default_locale: impl Into<String>) -> Result<Self> {
        let mut translations = Self::builtin(default_locale)?;

        if !dir.is_dir() {
            tracing::warn!("Locales directory {} not found, using builtin translations", dir.display());
            return Ok(translations);
        }

        for locale_entry in std::fs::read_dir(dir)? {
            let locale_path = locale_entry?.path();
            if !locale_path.is_dir() {
                continue;
            }
            let Some(locale) = locale_path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let locale = locale.to_ascii_lowercase();

            for file_entry in std::fs::read_dir(&locale_path)? {
                let file_path = file_entry?.path();
                if file_path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(namespace) = file_path.file_stem().and_then(|n| n.to_str()) else {
                    continue;
                };

                let content = std::fs::read_to_string(&file_path)?;
                let table: Table = serde_json::from_str(&content).map_err(|e| {
                    Error::Config(format!("Invalid translation file {}: {}", file_path.display(), e))
                })?;
                tracing::debug!("Loaded {} keys for {}/{}", table.len(), locale, namespace);
                translations.insert(&locale, namespace, table);
            }
        }

        Ok(translations)
    }

    /// Merge `table` into `locale`/`namespace`, overriding existing keys
    pub fn insert(&mut self, locale: &str, namespace: &str, table: Table) {
        self.locales
            .entry(locale.to_ascii_lowercase())
            .or_default()
            .entry(namespace.to_string())
            .or_default()
            .extend(table);
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(&locale.to_ascii_lowercase())
    }

    /// Tables of `namespaces` for `locale`. Keys missing from the locale are
    /// taken from the default locale.
    pub fn load(&self, locale: &str, namespaces: &[&str]) -> I18n {
        let locale = locale.to_ascii_lowercase();
        let tables = namespaces
            .iter()
            .map(|namespace| {
                let mut table = self.table(&self.default_locale, namespace);
                if locale != self.default_locale {
                    table.extend(self.table(&locale, namespace));
                }
                (namespace.to_string(), table)
            })
            .collect();

        I18n { locale, tables }
    }

    fn table(&self, locale: &str, namespace: &str) -> Table {
        self.locales
            .get(locale)
            .and_then(|namespaces| namespaces.get(namespace))
            .cloned()
            .unwrap_or_default()
    }
}

/// Translations resolved for one request
#[derive(Debug, Clone, Default)]
pub struct I18n {
    locale: String,
    tables: BTreeMap<String, Table>,
}

impl I18n {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translated text, or the key itself when nothing matches
    pub fn t<'a>(&'a self, namespace: &str, key: &'a str) -> &'a str {
        self.tables
            .get(namespace)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> Table {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_builtin_tables_parse() {
        let translations = Translations::builtin("it-it").unwrap();
        assert!(translations.has_locale("it-it"));
        assert!(translations.has_locale("EN-US"));

        let i18n = translations.load("it-it", &["shared"]);
        assert_eq!(i18n.t("shared", "back"), "Torna indietro");
    }

    #[test]
    fn test_fallback_to_default_locale() {
        let mut translations = Translations::new("it-it");
        translations.insert("it-it", "shared", table(&[("back", "Torna indietro"), ("next", "Successivo")]));
        translations.insert("en-us", "shared", table(&[("back", "Back")]));

        let i18n = translations.load("en-us", &["shared"]);
        assert_eq!(i18n.locale(), "en-us");
        assert_eq!(i18n.t("shared", "back"), "Back");
        assert_eq!(i18n.t("shared", "next"), "Successivo");
        assert_eq!(i18n.t("shared", "missing"), "missing");
        assert_eq!(i18n.t("other", "back"), "back");
    }

    #[test]
    fn test_unknown_locale_uses_default_tables() {
        let mut translations = Translations::new("it-it");
        translations.insert("it-it", "shared", table(&[("back", "Torna indietro")]));

        let i18n = translations.load("fr-fr", &["shared"]);
        assert_eq!(i18n.t("shared", "back"), "Torna indietro");
    }

    #[test]
    fn test_load_dir_overrides_builtin() {
        let dir = std::env::temp_dir().join(format!("faces-i18n-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(dir.join("it-it")).unwrap();
        std::fs::write(dir.join("it-it").join("shared.json"), r#"{"back":"Indietro"}"#).unwrap();
        std::fs::write(dir.join("it-it").join("notes.txt"), "ignored").unwrap();

        let translations = Translations::load_dir(&dir, "it-it").unwrap();
        let i18n = translations.load("it-it", &["shared"]);
        assert_eq!(i18n.t("shared", "back"), "Indietro");
        assert_eq!(i18n.t("shared", "next"), "Successivo");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_dir_rejects_bad_json() {
        let dir = std::env::temp_dir().join(format!("faces-i18n-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(dir.join("it-it")).unwrap();
        std::fs::write(dir.join("it-it").join("shared.json"), "not json").unwrap();

        let result = Translations::load_dir(&dir, "it-it");
        assert!(result.is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_dir_is_builtin() {
        let translations = Translations::load_dir(Path::new("/definitely/not/here"), "it-it").unwrap();
        assert!(translations.has_locale("it-it"));
    }
}
