mod about;
mod face;
mod home;
mod page;

use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::Uri;
use axum::response::{Redirect, Response};
use axum::routing::get;
use axum::Router;
use faces_core::Error;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

/// Build the site router: localized pages, static assets and a request span
/// carrying a fresh id for every request
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir();
    let root = format!("/{}", state.config.site.default_locale);

    Router::new()
        .route(
            "/",
            get(move || {
                let root = root.clone();
                async move { Redirect::to(&root) }
            }),
        )
        .route("/{lang}", get(home::home))
        .route("/{lang}/about", get(about::about))
        .route("/{lang}/faces", get(face::gallery))
        .route("/{lang}/faces/{face}", get(face::face))
        .route("/{lang}/{page}", get(page::page))
        .nest_service("/icons", ServeDir::new(static_dir.join("icons")))
        .route_service("/app.css", ServeFile::new(static_dir.join("app.css")))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::info_span!(
                        "request",
                        id = %Uuid::new_v4(),
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_response(|response: &Response, latency: Duration, _span: &tracing::Span| {
                    tracing::info!(
                        status = %response.status(),
                        elapsed_ms = latency.as_millis() as u64,
                        "response"
                    );
                }),
        )
        .with_state(state)
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> WebError {
    let ctx = state.context(&state.config.site.default_locale, uri.path());
    ctx.error(Error::NotFound(uri.path().to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use faces_core::content::{ContentSource, Navigation, WebLink, WebPage, WebSection, Website};
    use faces_core::feed::{Feed, FeedItem};
    use faces_core::i18n::Translations;
    use faces_core::{AppConfig, Error, Result};
    use tower::ServiceExt;

    use super::*;

    /// In-memory content; `offline` makes every call fail like an unreachable API
    struct StaticContent {
        gallery: Feed,
        about: Feed,
        offline: bool,
    }

    impl StaticContent {
        fn new(gallery_len: usize) -> Self {
            let gallery = (0..gallery_len)
                .map(|i| {
                    let mut item = FeedItem::new(format!("facing-my-faces?content=face-{}", i));
                    item.title = format!("Face {}", i);
                    item.image = format!("https://cdn.example.com/face-{}.png", i);
                    item
                })
                .collect();

            let mut about = FeedItem::new("about?content=the-project");
            about.title = "The project".to_string();
            about.content_html = "<p>Faces, one a day.</p>".to_string();

            Self {
                gallery: Feed::new(gallery),
                about: Feed::new(vec![about]),
                offline: false,
            }
        }

        fn offline() -> Self {
            Self {
                offline: true,
                ..Self::new(0)
            }
        }

        fn check(&self) -> Result<()> {
            if self.offline {
                return Err(Error::Fetch {
                    url: "https://cdn.example.com".to_string(),
                    reason: "connection refused".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ContentSource for StaticContent {
        async fn website(&self, _language_code: &str) -> Result<Website> {
            self.check()?;
            Ok(Website {
                header_nav: Navigation {
                    links: vec![
                        WebLink {
                            title: "About".to_string(),
                            url: "https://facingmyfaces.davidegiovanni.com/about".to_string(),
                        },
                        WebLink {
                            title: "Instagram".to_string(),
                            url: "https://instagram.com/faces".to_string(),
                        },
                    ],
                },
                ..Default::default()
            })
        }

        async fn page(&self, slug: &str, _language_code: &str) -> Result<WebPage> {
            self.check()?;
            match slug {
                "index" | "add-yours" => Ok(WebPage {
                    title: "Facing my faces".to_string(),
                    sections: vec![WebSection {
                        title: "Facing my faces".to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
                other => Err(Error::NotFound(other.to_string())),
            }
        }

        async fn feed(&self, directory: &str) -> Result<Feed> {
            self.check()?;
            match directory {
                "facing-my-faces" => Ok(self.gallery.clone()),
                "about" => Ok(self.about.clone()),
                other => Err(Error::NotFound(other.to_string())),
            }
        }
    }

    fn app(content: StaticContent) -> Router {
        let config = Arc::new(AppConfig::default());
        let translations = Translations::builtin(config.site.default_locale.clone()).unwrap();
        let state = AppState::new(config, Arc::new(content), translations).unwrap();
        router(state)
    }

    async fn get_page(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_redirects_to_default_locale() {
        let response = app(StaticContent::new(2))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/it-it");
    }

    #[tokio::test]
    async fn test_home_links_pair_anchors() {
        let (status, body) = get_page(app(StaticContent::new(5)), "/it-it").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/it-it/faces/face-1""#));
        assert!(body.contains(r#"href="/it-it/faces/face-3""#));
        // The trailing single links to itself
        assert!(body.contains(r#"href="/it-it/faces/face-4""#));
        assert!(!body.contains(r#"href="/it-it/faces/face-0""#));
        assert!(body.contains(r#"href="/it-it/about""#));
        assert!(body.contains(r#"href="https://instagram.com/faces""#));
        assert!(body.contains(r#"href="/it-it/add-yours""#));
    }

    #[tokio::test]
    async fn test_anchor_without_slug_is_not_linked() {
        let mut content = StaticContent::new(4);
        content.gallery.items[1] = FeedItem::new("facing-my-faces/untitled");
        content.gallery.items[1].image = "https://cdn.example.com/untitled.png".to_string();

        let (status, body) = get_page(app(content), "/it-it").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains(r#"href="/it-it/faces/""#));
        assert!(body.contains("https://cdn.example.com/untitled.png"));
        assert!(body.contains(r#"href="/it-it/faces/face-3""#));
    }

    #[tokio::test]
    async fn test_face_links_neighbours() {
        let (status, body) = get_page(app(StaticContent::new(6)), "/it-it/faces/face-3").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Face 3"));
        assert!(body.contains(r#"href="/it-it/faces/face-1""#));
        assert!(body.contains(r#"href="/it-it/faces/face-5""#));
        assert!(body.contains("Precedente"));
    }

    #[tokio::test]
    async fn test_first_anchor_has_no_previous() {
        let (status, body) = get_page(app(StaticContent::new(4)), "/en-us/faces/face-1").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains(r#"rel="prev""#));
        assert!(body.contains(r#"href="/en-us/faces/face-3""#));
    }

    #[tokio::test]
    async fn test_unknown_face_is_not_found() {
        let (status, _) = get_page(app(StaticContent::new(4)), "/it-it/faces/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_gallery_redirects_home() {
        let response = app(StaticContent::new(2))
            .oneshot(Request::builder().uri("/en-us/faces").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/en-us");
    }

    #[tokio::test]
    async fn test_about_renders_content() {
        let (status, body) = get_page(app(StaticContent::new(2)), "/it-it/about").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("The project"));
        assert!(body.contains("<p>Faces, one a day.</p>"));
    }

    #[tokio::test]
    async fn test_cms_page_and_missing_page() {
        let (status, _) = get_page(app(StaticContent::new(2)), "/it-it/add-yours").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get_page(app(StaticContent::new(2)), "/it-it/nothing-here").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_bad_gateway() {
        let (status, body) = get_page(app(StaticContent::offline()), "/it-it").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("502"));
    }

    #[tokio::test]
    async fn test_unmatched_path_is_not_found() {
        let (status, _) = get_page(app(StaticContent::new(2)), "/it-it/faces/face-1/extra").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
