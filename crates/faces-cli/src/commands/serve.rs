use std::sync::Arc;

use anyhow::Result;

use faces_core::content::ContentClient;
use faces_core::i18n::Translations;
use faces_core::AppConfig;
use faces_web::AppState;

pub async fn run(config: Arc<AppConfig>, bind: Option<String>) -> Result<()> {
    let translations = Translations::load_dir(&config.locales_dir(), config.site.default_locale.clone())?;
    let content = ContentClient::new(&config)?;
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());

    tracing::info!(
        "Serving {} ({} locales, default {})",
        config.site.name,
        config.site.languages.len(),
        config.site.default_locale
    );

    let state = AppState::new(config, Arc::new(content), translations)?;
    faces_web::serve(state, &bind).await
}
