use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Html;
use faces_core::meta::{absolute_url, PageMeta};

use crate::error::WebError;
use crate::state::AppState;
use crate::views;

/// GET /{lang}/{page}: a CMS page rendered section by section
pub async fn page(
    State(state): State<AppState>,
    Path((lang, slug)): Path<(String, String)>,
    uri: Uri,
) -> Result<Html<String>, WebError> {
    let ctx = state.context(&lang, uri.path());

    let (website, page) = tokio::try_join!(
        state.content.website(&ctx.language_code),
        state.content.page(&slug, &ctx.language_code),
    )
    .map_err(|e| ctx.error(e))?;

    let site = &state.config.site;
    let meta = PageMeta::page(site, &ctx.path, &page).with_canonical(absolute_url(site, &ctx.path));

    Ok(Html(views::page::render(&ctx, &meta, &website, &page).into_string()))
}
