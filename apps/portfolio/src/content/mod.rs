// Content layer: flat-file loading with memoization, and the project filter.

pub mod filter;
pub mod store;

pub use filter::{filter_projects, FilterCriteria};
pub use store::{ContentError, ContentStore};
