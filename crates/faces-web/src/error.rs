use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use faces_core::meta::PageMeta;
use faces_core::Error;

use crate::state::PageContext;
use crate::views;

/// A failed request, rendered as an HTML error page.
/// Missing content maps to 404, an unreachable or broken content API to 502.
#[derive(Debug)]
pub struct WebError {
    error: Error,
    context: PageContext,
}

impl WebError {
    pub fn new(error: Error, context: PageContext) -> Self {
        Self { error, context }
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Http(_) | Error::Fetch { .. } | Error::Json(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.error, self.context.path)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            tracing::info!("Not found: {}", self);
        } else {
            tracing::error!("Request failed: {}", self);
        }

        let meta = PageMeta::error(&self.context.config.site, &self.context.path);
        let markup = views::error::render(&self.context, &meta, status);
        (status, Html(markup.into_string())).into_response()
    }
}
