use std::collections::BTreeSet;

use crate::models::Project;

/// Sidebar filter state. Empty fields accept everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub tags: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.tags.is_empty()
    }
}

/// Tag rule AND text rule.
///
/// Tag rule: a non-empty selection must share at least one tag with the project.
/// Text rule: a non-empty query must occur, case-insensitively, in "title blurb".
pub fn matches(project: &Project, criteria: &FilterCriteria) -> bool {
    if !criteria.tags.is_empty() && !project.tags.iter().any(|t| criteria.tags.contains(t)) {
        return false;
    }

    if !criteria.query.is_empty() {
        let q = criteria.query.to_lowercase();
        let text = format!("{} {}", project.title, project.blurb).to_lowercase();
        if !text.contains(&q) {
            return false;
        }
    }

    true
}

/// Surviving projects in their original order.
pub fn filter_projects<'a>(projects: &'a [Project], criteria: &FilterCriteria) -> Vec<&'a Project> {
    projects.iter().filter(|p| matches(p, criteria)).collect()
}
