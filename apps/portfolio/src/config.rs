use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `cargo run` next to
/// `projects.json` and `assets/` serves the portfolio.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding `projects.json` and `experiences.json`.
    pub content_dir: PathBuf,
    /// Directory holding project/experience images, the résumé and the signature.
    pub assets_dir: PathBuf,
    /// Résumé PDF filename, relative to `assets_dir`.
    pub resume_file: String,
    /// Signature image filename, relative to `assets_dir`.
    pub signature_file: String,
    pub experiences_ttl: Duration,
    pub pdftoppm_bin: String,
    /// Rasterization scale relative to the PDF's 72 dpi user space.
    pub raster_scale: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            content_dir: PathBuf::from(env_or("CONTENT_DIR", ".")),
            assets_dir: PathBuf::from(env_or("ASSETS_DIR", "assets")),
            resume_file: env_or("RESUME_FILE", "resume.pdf"),
            signature_file: env_or("SIGNATURE_FILE", "signature.png"),
            experiences_ttl: Duration::from_secs(parse_env("EXPERIENCES_TTL_SECS", 60)?),
            pdftoppm_bin: env_or("PDFTOPPM_BIN", "pdftoppm"),
            raster_scale: parse_env("RASTER_SCALE", 2)?,
        })
    }

    pub fn projects_path(&self) -> PathBuf {
        self.content_dir.join("projects.json")
    }

    pub fn experiences_path(&self) -> PathBuf {
        self.content_dir.join("experiences.json")
    }

    pub fn resume_path(&self) -> PathBuf {
        self.assets_dir.join(&self.resume_file)
    }

    pub fn signature_path(&self) -> PathBuf {
        self.assets_dir.join(&self.signature_file)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
pub(crate) fn test_config(root: &std::path::Path) -> Config {
    Config {
        port: 0,
        rust_log: "debug".to_string(),
        content_dir: root.to_path_buf(),
        assets_dir: root.join("assets"),
        resume_file: "resume.pdf".to_string(),
        signature_file: "signature.png".to_string(),
        experiences_ttl: Duration::from_secs(60),
        pdftoppm_bin: "pdftoppm".to_string(),
        raster_scale: 2,
    }
}
