//! PDF page rasterization, used by the résumé "Clean" viewer.
//!
//! Pluggable behind `PageRasterizer`; `AppState` carries
//! `Option<Arc<dyn PageRasterizer>>`, and `None` means the capability is
//! absent on this host (the viewer then falls back to the embedded PDF).
//!
//! Default backend: poppler's `pdftoppm`, detected once at startup.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// PDF user space is 72 units per inch.
const PDF_BASE_DPI: u32 = 72;
const OUTPUT_PREFIX: &str = "page";

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("I/O error during rasterization: {0}")]
    Io(#[from] std::io::Error),

    #[error("{backend} exited with {status}: {stderr}")]
    Failed {
        backend: &'static str,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("document produced no pages")]
    NoPages,
}

/// One rendered page, PNG-encoded.
#[derive(Debug, Clone)]
pub struct RasterPage {
    /// 1-based page number.
    pub number: usize,
    pub png: Vec<u8>,
}

#[async_trait]
pub trait PageRasterizer: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// Renders every page of `pdf`, in page order.
    async fn rasterize(&self, pdf: &[u8]) -> Result<Vec<RasterPage>, RasterError>;
}

// ────────────────────────────────────────────────────────────────────────────
// pdftoppm backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PdftoppmRasterizer {
    bin: String,
    scale: u32,
}

impl PdftoppmRasterizer {
    /// Returns the rasterizer if `bin` can be spawned. Any exit status counts:
    /// older poppler builds exit non-zero for `-v`.
    pub async fn detect(bin: &str, scale: u32) -> Option<Self> {
        match Command::new(bin).arg("-v").output().await {
            Ok(out) => {
                let version = String::from_utf8_lossy(&out.stderr);
                info!(
                    "PDF rasterizer available: {bin} ({})",
                    version.lines().next().unwrap_or("unknown version")
                );
                Some(Self {
                    bin: bin.to_string(),
                    scale: scale.max(1),
                })
            }
            Err(e) => {
                warn!("PDF rasterizer '{bin}' not available ({e}); clean résumé viewer disabled");
                None
            }
        }
    }

    fn dpi(&self) -> u32 {
        PDF_BASE_DPI * self.scale
    }
}

#[async_trait]
impl PageRasterizer for PdftoppmRasterizer {
    fn backend(&self) -> &'static str {
        "pdftoppm"
    }

    async fn rasterize(&self, pdf: &[u8]) -> Result<Vec<RasterPage>, RasterError> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("input.pdf");
        tokio::fs::write(&input, pdf).await?;

        let output = Command::new(&self.bin)
            .arg("-png")
            .arg("-r")
            .arg(self.dpi().to_string())
            .arg(&input)
            .arg(workdir.path().join(OUTPUT_PREFIX))
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(RasterError::Failed {
                backend: self.backend(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let pages = collect_pages(workdir.path()).await?;
        if pages.is_empty() {
            return Err(RasterError::NoPages);
        }
        debug!(pages = pages.len(), dpi = self.dpi(), "Rasterized PDF");
        Ok(pages)
    }
}

/// Reads `page-<n>.png` files (pdftoppm zero-pads `<n>` by page count) and
/// orders them by page number.
async fn collect_pages(dir: &Path) -> Result<Vec<RasterPage>, RasterError> {
    let mut numbered = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let Some(number) = name.to_str().and_then(page_number) else {
            continue;
        };
        numbered.push((number, entry.path()));
    }
    numbered.sort_by_key(|(n, _)| *n);

    let mut pages = Vec::with_capacity(numbered.len());
    for (number, path) in numbered {
        pages.push(RasterPage {
            number,
            png: tokio::fs::read(&path).await?,
        });
    }
    Ok(pages)
}

fn page_number(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix(OUTPUT_PREFIX)?
        .strip_prefix('-')?
        .strip_suffix(".png")?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_page_number_parsing() {
        assert_eq!(page_number("page-1.png"), Some(1));
        assert_eq!(page_number("page-07.png"), Some(7));
        assert_eq!(page_number("page-12.png"), Some(12));
        assert_eq!(page_number("input.pdf"), None);
        assert_eq!(page_number("page-x.png"), None);
        assert_eq!(page_number("page-3.ppm"), None);
    }

    #[test]
    fn test_dpi_follows_scale() {
        let r = PdftoppmRasterizer {
            bin: "pdftoppm".to_string(),
            scale: 2,
        };
        assert_eq!(r.dpi(), 144);
    }

    #[tokio::test]
    async fn test_detect_missing_binary_is_none() {
        let found = PdftoppmRasterizer::detect("/nonexistent/bin/pdftoppm-for-tests", 2).await;
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_collect_pages_orders_by_number() {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in [
            ("page-10.png", "ten"),
            ("page-2.png", "two"),
            ("page-1.png", "one"),
            ("input.pdf", "pdf"),
        ] {
            std::fs::write(dir.path().join(name), body).unwrap();
        }

        let pages = collect_pages(dir.path()).await.unwrap();
        let numbers: Vec<_> = pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 10]);
        assert_eq!(pages[0].png, b"one");
        assert_eq!(pages[2].png, b"ten");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_backend_reports_status() {
        let r = PdftoppmRasterizer {
            bin: "false".to_string(),
            scale: 2,
        };
        let err = r.rasterize(b"%PDF-1.4").await.unwrap_err();
        assert!(matches!(err, RasterError::Failed { .. }), "got {err:?}");
    }

    /// Whether `pid` is a live (non-zombie) process.
    #[cfg(target_os = "linux")]
    fn process_running(pid: &str) -> bool {
        match std::fs::read_to_string(format!("/proc/{pid}/stat")) {
            Ok(stat) => stat
                .rsplit_once(") ")
                .map(|(_, rest)| !rest.starts_with('Z'))
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_dropped_request_kills_backend() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("backend.pid");
        let bin = dir.path().join("slow-pdftoppm");
        std::fs::write(
            &bin,
            format!("#!/bin/sh\necho $$ > {}\nexec sleep 30\n", pid_file.display()),
        )
        .unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();

        let r = PdftoppmRasterizer {
            bin: bin.to_str().unwrap().to_string(),
            scale: 2,
        };
        let timed_out =
            tokio::time::timeout(Duration::from_millis(500), r.rasterize(b"%PDF-1.4")).await;
        assert!(timed_out.is_err());

        let pid = std::fs::read_to_string(&pid_file).unwrap();
        let pid = pid.trim();
        let mut stopped = false;
        for _ in 0..50 {
            if !process_running(pid) {
                stopped = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert!(stopped, "backend process {pid} outlived the request");
    }
}
