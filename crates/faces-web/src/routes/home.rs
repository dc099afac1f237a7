use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Html;
use faces_core::feed::group_pairs;
use faces_core::meta::{absolute_url, PageMeta};

use crate::error::WebError;
use crate::state::AppState;
use crate::views;

/// Page document backing the home route
pub const INDEX_PAGE: &str = "index";

/// GET /{lang}: grid of gallery pairs under the site navigation
pub async fn home(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    uri: Uri,
) -> Result<Html<String>, WebError> {
    let ctx = state.context(&lang, uri.path());
    let gallery = &state.config.api.gallery_directory;

    let (website, page, feed) = tokio::try_join!(
        state.content.website(&ctx.language_code),
        state.content.page(INDEX_PAGE, &ctx.language_code),
        state.content.feed(gallery),
    )
    .map_err(|e| ctx.error(e))?;

    let pairs = group_pairs(&feed.items);
    tracing::debug!("Home: {} items in {} pairs", feed.len(), pairs.len());

    let site = &state.config.site;
    let meta = PageMeta::home(site, &ctx.path, &page)
        .with_canonical(absolute_url(site, &format!("/{}", site.default_locale)));

    Ok(Html(views::home::render(&ctx, &meta, &website, &page, &pairs).into_string()))
}
