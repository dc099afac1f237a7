use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{Html, Redirect};
use faces_core::feed::resolve_siblings;
use faces_core::meta::{absolute_url, PageMeta};

use crate::error::WebError;
use crate::links::encode_segment;
use crate::state::AppState;
use crate::views;

/// GET /{lang}/faces/{face}: one gallery item with links to its neighbours
pub async fn face(
    State(state): State<AppState>,
    Path((lang, face)): Path<(String, String)>,
    uri: Uri,
) -> Result<Html<String>, WebError> {
    let ctx = state.context(&lang, uri.path());

    let feed = state
        .content
        .feed(&state.config.api.gallery_directory)
        .await
        .map_err(|e| ctx.error(e))?;

    let siblings = resolve_siblings(&feed, &face, state.layout).map_err(|e| ctx.error(e))?;

    let site = &state.config.site;
    let meta = PageMeta::item(site, &ctx.path, siblings.item).with_canonical(absolute_url(site, &ctx.path));

    Ok(Html(views::face::render(&ctx, &meta, &siblings).into_string()))
}

/// GET /{lang}/faces: the gallery grid lives on the home page
pub async fn gallery(Path(lang): Path<String>) -> Redirect {
    Redirect::to(&format!("/{}", encode_segment(&lang)))
}
