use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Html;
use faces_core::meta::{absolute_url, PageMeta};
use faces_core::Error;

use crate::error::WebError;
use crate::state::AppState;
use crate::views;

/// GET /{lang}/about: the configured item of the about directory
pub async fn about(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    uri: Uri,
) -> Result<Html<String>, WebError> {
    let ctx = state.context(&lang, uri.path());
    let api = &state.config.api;

    let feed = state
        .content
        .feed(&api.about_directory)
        .await
        .map_err(|e| ctx.error(e))?;

    let (_, item) = feed
        .find(&api.about_slug)
        .ok_or_else(|| ctx.error(Error::NotFound(api.about_slug.clone())))?;

    let site = &state.config.site;
    let meta = PageMeta::about(site, &ctx.path, item).with_canonical(absolute_url(site, &ctx.path));

    Ok(Html(views::about::render(&ctx, &meta, item).into_string()))
}
