use std::path::Path;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// GET /resume/download
pub async fn handle_download(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.content.resume_path();
    let pdf = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!(
                "Résumé file not found at: {}",
                path.display()
            )))
        }
        Err(e) => return Err(AppError::Internal(e.into())),
    };

    info!(bytes = pdf.len(), "Serving résumé download");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(path)),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}

/// `attachment` with an ASCII fallback name plus the RFC 5987 UTF-8 form,
/// so names like "Résumé.pdf" survive.
pub fn content_disposition(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string());
    let ascii: String = name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(&name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_ascii_name() {
        assert_eq!(
            content_disposition(Path::new("assets/resume.pdf")),
            "attachment; filename=\"resume.pdf\"; filename*=UTF-8''resume.pdf"
        );
    }

    #[test]
    fn test_content_disposition_non_ascii_name() {
        let value = content_disposition(Path::new("assets/Jane Doe - Résumé.pdf"));
        assert!(value.starts_with("attachment; filename=\"Jane Doe - R_sum_.pdf\""));
        assert!(value.ends_with("filename*=UTF-8''Jane%20Doe%20-%20R%C3%A9sum%C3%A9.pdf"));
    }
}
