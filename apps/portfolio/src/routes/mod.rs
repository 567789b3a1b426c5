pub mod health;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::resume::handlers as resume_handlers;
use crate::state::AppState;
use crate::views::handlers as page_handlers;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(page_handlers::handle_page))
        .route("/health", get(health::health_handler))
        .route("/resume/download", get(resume_handlers::handle_download))
        .nest_service("/assets", assets)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::test_config;
    use crate::content::ContentStore;
    use crate::resume::rasterizer::RasterError;
    use crate::resume::{PageRasterizer, RasterPage};

    struct FakeRasterizer;

    #[async_trait]
    impl PageRasterizer for FakeRasterizer {
        fn backend(&self) -> &'static str {
            "fake"
        }

        async fn rasterize(&self, _pdf: &[u8]) -> Result<Vec<RasterPage>, RasterError> {
            Ok(vec![
                RasterPage {
                    number: 1,
                    png: b"page-one".to_vec(),
                },
                RasterPage {
                    number: 2,
                    png: b"page-two".to_vec(),
                },
            ])
        }
    }

    fn app(root: &Path, rasterizer: Option<Arc<dyn PageRasterizer>>) -> Router {
        let config = test_config(root);
        let content = Arc::new(ContentStore::new(&config));
        build_router(AppState {
            config,
            content,
            rasterizer,
        })
    }

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(
            dir.path().join("projects.json"),
            r#"[
                {"title": "viz Survey", "image": "survey.png", "blurb": "Interactive survey explorer", "tags": ["python", "viz"]},
                {"title": "Churn Model", "image": "churn.png", "blurb": "Gradient boosting", "tags": ["ml"],
                 "links": {"Repo": "https://example.com/churn"}}
            ]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("assets/churn.png"), b"png").unwrap();
        dir
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get(app(dir.path(), None), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"service\":\"portfolio\""));
    }

    #[tokio::test]
    async fn test_showcase_without_projects_file() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get(app(dir.path(), None), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Showing <strong>0</strong> of <strong>0</strong> projects."));
        assert!(body.contains("projects.json</code>"));
        assert!(body.contains("class=\"alert error\">Missing <code>"));
    }

    #[tokio::test]
    async fn test_showcase_sorted_and_filtered() {
        let dir = site();
        let app = app(dir.path(), None);

        let (_, body) = get(app.clone(), "/").await;
        assert!(body.contains("Showing <strong>2</strong> of <strong>2</strong> projects."));
        let churn = body.find("<h3>Churn Model</h3>").unwrap();
        let survey = body.find("<h3>viz Survey</h3>").unwrap();
        assert!(churn < survey, "projects must be sorted case-insensitively");
        assert!(body.contains("<img src=\"/assets/churn.png\""));
        assert!(body.contains("<em>Missing image:</em> <code>survey.png</code>"));

        let (_, body) = get(app.clone(), "/?tag=viz").await;
        assert!(body.contains("Showing <strong>1</strong> of <strong>2</strong> projects."));
        assert!(body.contains("<h3>viz Survey</h3>"));

        let (_, body) = get(app.clone(), "/?tag=ml&q=boosting").await;
        assert!(body.contains("Showing <strong>1</strong> of <strong>2</strong> projects."));
        assert!(body.contains("<h3>Churn Model</h3>"));

        let (_, body) = get(app, "/?q=nothing+matches&wide=false").await;
        assert!(body.contains("Showing <strong>0</strong> of <strong>2</strong> projects."));
        assert!(body.contains("<div class=\"list\">"));
    }

    #[tokio::test]
    async fn test_malformed_projects_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("projects.json"), "[{").unwrap();
        let (status, body) = get(app(dir.path(), None), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("CONTENT_ERROR"));
    }

    #[tokio::test]
    async fn test_resume_missing() {
        let dir = site();
        let (status, body) = get(app(dir.path(), None), "/?tab=resume").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Résumé file not found at:"));
        assert!(!body.contains("<iframe"));

        let (status, _) = get(app(dir.path(), None), "/resume/download").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resume_without_rasterizer_embeds_pdf() {
        let dir = site();
        std::fs::write(dir.path().join("assets/resume.pdf"), b"%PDF-1.4").unwrap();
        let (_, body) = get(app(dir.path(), None), "/?tab=resume").await;
        assert!(body.contains("aria-disabled=\"true\">Clean</span>"));
        assert!(body.contains("<iframe class=\"pdf\""));
        assert!(body.contains("href=\"/resume/download\""));
    }

    #[tokio::test]
    async fn test_resume_clean_with_rasterizer() {
        let dir = site();
        std::fs::write(dir.path().join("assets/resume.pdf"), b"%PDF-1.4").unwrap();
        let app = app(dir.path(), Some(Arc::new(FakeRasterizer)));

        let (_, body) = get(app.clone(), "/?tab=resume&width=777").await;
        assert_eq!(body.matches("<div class=\"page\">").count(), 2);
        assert!(body.contains("width=\"800\""));
        assert!(!body.contains("<iframe"));

        let (_, body) = get(app, "/?tab=resume&viewer=standard").await;
        assert!(body.contains("<iframe"));
        assert!(!body.contains("<div class=\"page\">"));
    }

    #[tokio::test]
    async fn test_resume_download() {
        let dir = site();
        std::fs::write(dir.path().join("assets/resume.pdf"), b"%PDF-1.4").unwrap();
        let resp = app(dir.path(), None)
            .oneshot(
                Request::builder()
                    .uri("/resume/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
        assert!(resp.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .starts_with("attachment; filename=\"resume.pdf\""));
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_experiential_empty_array() {
        let dir = site();
        std::fs::write(dir.path().join("experiences.json"), "[]").unwrap();
        let (_, body) = get(app(dir.path(), None), "/?tab=experiential").await;
        assert!(body.contains("Add items to <code>experiences.json</code>"));
        assert!(!body.contains("aria-label=\"Layout\""));
    }

    #[tokio::test]
    async fn test_experiential_cards() {
        let dir = site();
        std::fs::write(
            dir.path().join("experiences.json"),
            r#"[{"title": "Museum Trip", "date": "2023", "lede": "Saw old maps", "body_md": "Long *story*"}]"#,
        )
        .unwrap();
        let (_, body) = get(app(dir.path(), None), "/?tab=experiential&layout=cards").await;
        assert!(body.contains("<h3>Museum Trip</h3>"));
        assert!(body.contains("<summary>Read more</summary>"));
        assert!(body.contains("<em>story</em>"));
    }

    #[tokio::test]
    async fn test_reflections_signature() {
        let dir = site();
        let (_, body) = get(app(dir.path(), None), "/?tab=reflections").await;
        assert!(body.contains("<div class=\"signature\"><em>"));

        std::fs::write(dir.path().join("assets/signature.png"), b"png").unwrap();
        let (_, body) = get(app(dir.path(), None), "/?tab=reflections").await;
        assert!(body.contains("<img src=\"/assets/signature.png\" alt=\"Signature\">"));
    }

    #[tokio::test]
    async fn test_assets_are_served() {
        let dir = site();
        let (status, body) = get(app(dir.path(), None), "/assets/churn.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "png");
    }
}
