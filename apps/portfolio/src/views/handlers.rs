use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::{debug, warn};

use crate::errors::{join_error, AppError};
use crate::state::AppState;
use crate::views::experiential::render_experiential;
use crate::views::reflections::render_reflections;
use crate::views::resume::{render_resume, CleanPages, ResumeDoc};
use crate::views::shell::{render_page, ShellContext};
use crate::views::showcase::render_showcase;
use crate::views::ui_state::{ResumeViewer, Section, UiState};

/// GET /
///
/// The whole page is re-evaluated per request: the query string carries the
/// tab, filters and toggles, and only the active section is rendered.
pub async fn handle_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let ui = UiState::from_pairs(&pairs);
    debug!(
        section = ui.section.slug(),
        filtered = !ui.filter.is_empty(),
        "Rendering page"
    );

    // Projects feed the sidebar on every tab, so they load regardless of section.
    let store = state.content.clone();
    let (projects, all_tags) = tokio::task::spawn_blocking(move || {
        let projects = store.load_projects()?;
        let tags = store.all_tags()?;
        Ok::<_, AppError>((projects, tags))
    })
    .await
    .map_err(|e| join_error("project load", e))??;

    let section_html = match ui.section {
        Section::Showcase => {
            let store = state.content.clone();
            let projects = projects.clone();
            let ui = ui.clone();
            tokio::task::spawn_blocking(move || render_showcase(&projects.items, &ui, &store))
                .await
                .map_err(|e| join_error("showcase render", e))?
        }
        Section::Resume => render_resume_section(&state, &ui).await?,
        Section::Experiential => {
            let store = state.content.clone();
            let ui = ui.clone();
            tokio::task::spawn_blocking(move || {
                let experiences = store.load_experiences()?;
                Ok::<_, AppError>(render_experiential(&experiences.items, &ui, &store))
            })
            .await
            .map_err(|e| join_error("experiential render", e))??
        }
        Section::Reflections => {
            let signature = tokio::fs::metadata(state.content.signature_path())
                .await
                .map(|m| m.is_file())
                .unwrap_or(false);
            render_reflections(signature.then_some(state.config.signature_file.as_str()))
        }
    };

    let ctx = ShellContext {
        state: &ui,
        all_tags: &all_tags,
        projects_missing: projects.missing_file.as_deref(),
    };
    Ok(Html(render_page(&ctx, &section_html)))
}

async fn render_resume_section(state: &AppState, ui: &UiState) -> Result<String, AppError> {
    let path = state.content.resume_path();
    let doc = match tokio::fs::read(path).await {
        Ok(pdf) => ResumeDoc::Present(pdf),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Résumé not found at {}", path.display());
            ResumeDoc::Missing(path.to_path_buf())
        }
        Err(e) => return Err(AppError::Internal(e.into())),
    };

    let clean = match (&doc, &state.rasterizer) {
        (_, None) => CleanPages::Unavailable,
        (ResumeDoc::Present(pdf), Some(rasterizer)) if ui.viewer == ResumeViewer::Clean => {
            match rasterizer.rasterize(pdf).await {
                Ok(pages) => CleanPages::Rendered(pages),
                Err(e) => {
                    warn!(backend = rasterizer.backend(), "Résumé rasterization failed: {e}");
                    CleanPages::Failed(e.to_string())
                }
            }
        }
        _ => CleanPages::NotRequested,
    };

    Ok(render_resume(&doc, &clean, ui))
}
