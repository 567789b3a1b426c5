use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;
use crate::resume::PageRasterizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Memoized flat-file content. The only writer of cached state is its own load path.
    pub content: Arc<ContentStore>,
    /// `None` when no rasterizer backend was found at startup.
    pub rasterizer: Option<Arc<dyn PageRasterizer>>,
}
