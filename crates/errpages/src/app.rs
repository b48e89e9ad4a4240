use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::{healthz, livez},
        pages::{app_index, app_page, index, not_found, standalone},
        static_files::serve_static,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/app", get(app_index))
        .route("/app/{error_code}", get(app_page))
        .route("/assets/{*file}", get(serve_static))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .route("/{code}", get(standalone))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_app(AppState::default());

        let (status, html) = get_page(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Page Not Found"));
        assert!(html.contains(r#"data-action="toggle-troubleshooting""#));
        assert!(html.contains("__ERROR_PAGE_STATE__"));
        assert!(html.contains("<title>404 - Page Not Found</title>"));
        assert!(html.contains(r#"content="Error response page""#));
    }

    #[tokio::test]
    async fn test_standalone_page_uses_code_as_status() {
        let app = create_app(AppState::default());

        let (status, html) = get_page(app.clone(), "/500").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(html.contains("Internal Server Error"));
        assert!(html.contains("<style>"));
        assert!(!html.contains("data-action"));

        let (status, html_suffixed) = get_page(app, "/500.html").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(html, html_suffixed);
    }

    #[tokio::test]
    async fn test_standalone_unknown_code_is_404() {
        let app = create_app(AppState::default());

        let (status, html) = get_page(app, "/418").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn test_interactive_route() {
        let app = create_app(AppState::default());

        let (status, html) = get_page(app.clone(), "/app/502").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Bad Gateway"));
        assert!(html.contains(r#"{"code":"502","expanded":false"#));

        let (status, html) = get_page(app.clone(), "/app/999").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Page Not Found"));

        let (status, html) = get_page(app, "/app").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("<title>404 Error</title>"));
    }

    #[tokio::test]
    async fn test_unmatched_path_falls_back_to_404_page() {
        let app = create_app(AppState::default());

        let (status, html) = get_page(app, "/some/deep/path").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Page Not Found"));
        assert!(html.contains(r#"id="troubleshoot-toggle""#));
    }

    #[tokio::test]
    async fn test_probes() {
        let app = create_app(AppState::default());

        let (status, _) = get_page(app.clone(), "/livez").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get_page(app, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["codes"].as_array().unwrap().len(), 7);
        assert_eq!(json["styled"], false);
    }

    #[tokio::test]
    async fn test_assets_served_from_build() {
        let build = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(build.path().join("assets")).unwrap();
        std::fs::write(build.path().join("assets/root-1a.css"), ".x{color:red}").unwrap();
        let config = errpages_emit::GenerateConfig {
            build_dir: build.path().to_path_buf(),
            out_dir: build.path().to_path_buf(),
            asset_base: "/".to_string(),
        };
        let state = AppState::load(&config).await.unwrap();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/assets/root-1a.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );

        let (status, _) = get_page(app.clone(), "/assets/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, html) = get_page(app, "/403").await;
        assert!(html.contains(".x{color:red}"));
    }
}
