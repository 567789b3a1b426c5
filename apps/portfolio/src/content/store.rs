//! Flat-file content store.
//!
//! Reads `projects.json` / `experiences.json` and resolves asset paths.
//! Results are memoized in single-key `moka` caches: projects for the life of
//! the process, experiences for a TTL so edits show up without a restart.
//! Failed loads are never cached, so a fixed file is picked up on the next request.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{Experience, Project};

const SINGLETON: &str = "all";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result of loading a collection file.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    /// Set when the file did not exist. `items` is empty in that case.
    pub missing_file: Option<PathBuf>,
}

pub struct ContentStore {
    projects_path: PathBuf,
    experiences_path: PathBuf,
    assets_dir: PathBuf,
    resume_path: PathBuf,
    signature_path: PathBuf,
    projects: Cache<&'static str, Arc<Loaded<Project>>>,
    experiences: Cache<&'static str, Arc<Loaded<Experience>>>,
}

impl ContentStore {
    pub fn new(config: &Config) -> Self {
        Self::with_experiences_ttl(config, config.experiences_ttl)
    }

    pub fn with_experiences_ttl(config: &Config, experiences_ttl: Duration) -> Self {
        Self {
            projects_path: config.projects_path(),
            experiences_path: config.experiences_path(),
            assets_dir: config.assets_dir.clone(),
            resume_path: config.resume_path(),
            signature_path: config.signature_path(),
            projects: Cache::builder().max_capacity(1).build(),
            experiences: Cache::builder()
                .time_to_live(experiences_ttl)
                .max_capacity(1)
                .build(),
        }
    }

    /// Projects sorted case-insensitively by title. Read once per process.
    ///
    /// Concurrent misses share a single load; the error is shared with them.
    pub fn load_projects(&self) -> Result<Arc<Loaded<Project>>, Arc<ContentError>> {
        self.projects.try_get_with(SINGLETON, || {
            let mut loaded: Loaded<Project> = read_collection(&self.projects_path)?;
            loaded.items.sort_by_key(Project::sort_key);
            info!(
                count = loaded.items.len(),
                missing = loaded.missing_file.is_some(),
                "Loaded projects from {}",
                self.projects_path.display()
            );
            Ok::<_, ContentError>(Arc::new(loaded))
        })
    }

    /// Experiences in file order. Re-read once the TTL has elapsed.
    pub fn load_experiences(&self) -> Result<Arc<Loaded<Experience>>, Arc<ContentError>> {
        self.experiences.try_get_with(SINGLETON, || {
            let loaded: Loaded<Experience> = read_collection(&self.experiences_path)?;
            debug!(
                count = loaded.items.len(),
                "Refreshed experiences from {}",
                self.experiences_path.display()
            );
            Ok::<_, ContentError>(Arc::new(loaded))
        })
    }

    /// Sorted, de-duplicated union of every project's tags.
    pub fn all_tags(&self) -> Result<Vec<String>, Arc<ContentError>> {
        let loaded = self.load_projects()?;
        let tags: BTreeSet<&String> = loaded.items.iter().flat_map(|p| &p.tags).collect();
        Ok(tags.into_iter().cloned().collect())
    }

    /// Whether `name` resolves to an existing file inside the assets directory.
    /// Absolute names and names that climb out with `..` never resolve.
    pub fn asset_exists(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let rel = Path::new(name);
        let contained = rel
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        contained && self.assets_dir.join(rel).is_file()
    }

    pub fn resume_path(&self) -> &Path {
        &self.resume_path
    }

    pub fn signature_path(&self) -> &Path {
        &self.signature_path
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Loaded<T>, ContentError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Loaded {
                items: Vec::new(),
                missing_file: Some(path.to_path_buf()),
            })
        }
        Err(source) => {
            return Err(ContentError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let items = serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Loaded {
        items,
        missing_file: None,
    })
}
