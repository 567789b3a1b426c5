//! Transient UI state carried in the page's query string.
//!
//! Every control on the page is a plain GET form field, so each interaction
//! re-requests `/` with the full state and the page is re-evaluated from scratch.

use std::collections::BTreeSet;

use crate::content::FilterCriteria;

pub const WIDTH_MIN: u32 = 600;
pub const WIDTH_MAX: u32 = 1200;
pub const WIDTH_STEP: u32 = 50;
pub const WIDTH_DEFAULT: u32 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Showcase,
    Resume,
    Experiential,
    Reflections,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Showcase,
        Section::Resume,
        Section::Experiential,
        Section::Reflections,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Section::Showcase => "showcase",
            Section::Resume => "resume",
            Section::Experiential => "experiential",
            Section::Reflections => "reflections",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Showcase => "📁 Portfolio Showcase",
            Section::Resume => "📄 Electronic Résumé",
            Section::Experiential => "📰 Experiential Learning",
            Section::Reflections => "🖊️ Reflections",
        }
    }

    fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sec| sec.slug() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumeViewer {
    #[default]
    Clean,
    Standard,
}

impl ResumeViewer {
    pub fn slug(self) -> &'static str {
        match self {
            ResumeViewer::Clean => "clean",
            ResumeViewer::Standard => "standard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceLayout {
    #[default]
    Feature,
    Cards,
}

impl ExperienceLayout {
    pub fn slug(self) -> &'static str {
        match self {
            ExperienceLayout::Feature => "feature",
            ExperienceLayout::Cards => "cards",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub section: Section,
    pub filter: FilterCriteria,
    /// Two-column showcase grid when true, single-column list when false.
    pub wide: bool,
    pub viewer: ResumeViewer,
    /// Clean-viewer page width in px, always within `WIDTH_MIN..=WIDTH_MAX` on a `WIDTH_STEP` grid.
    pub resume_width: u32,
    pub layout: ExperienceLayout,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            section: Section::default(),
            filter: FilterCriteria::default(),
            wide: true,
            viewer: ResumeViewer::default(),
            resume_width: WIDTH_DEFAULT,
            layout: ExperienceLayout::default(),
        }
    }
}

impl UiState {
    /// Builds state from raw query pairs. Unknown keys and unparseable values
    /// are ignored; for single-valued keys the last occurrence wins, which lets
    /// a hidden `wide=false` field precede the checkbox that overrides it.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut state = UiState::default();
        let mut tags = BTreeSet::new();

        for (key, value) in pairs {
            match key.as_str() {
                "tab" => {
                    if let Some(section) = Section::from_slug(value) {
                        state.section = section;
                    }
                }
                "q" => state.filter.query = value.clone(),
                "tag" if !value.is_empty() => {
                    tags.insert(value.clone());
                }
                "wide" => match value.as_str() {
                    "true" | "on" | "1" => state.wide = true,
                    "false" | "off" | "0" => state.wide = false,
                    _ => {}
                },
                "viewer" => match value.as_str() {
                    "clean" => state.viewer = ResumeViewer::Clean,
                    "standard" => state.viewer = ResumeViewer::Standard,
                    _ => {}
                },
                "width" => {
                    if let Ok(px) = value.trim().parse::<u32>() {
                        state.resume_width = snap_width(px);
                    }
                }
                "layout" => match value.as_str() {
                    "feature" => state.layout = ExperienceLayout::Feature,
                    "cards" => state.layout = ExperienceLayout::Cards,
                    _ => {}
                },
                _ => {}
            }
        }

        state.filter.tags = tags;
        state
    }

    /// Query pairs that reproduce this state, with `section` swapped in.
    pub fn to_pairs(&self, section: Section) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("tab", section.slug().to_string())];
        if !self.filter.query.is_empty() {
            pairs.push(("q", self.filter.query.clone()));
        }
        for tag in &self.filter.tags {
            pairs.push(("tag", tag.clone()));
        }
        pairs.push(("wide", self.wide.to_string()));
        pairs.push(("viewer", self.viewer.slug().to_string()));
        pairs.push(("width", self.resume_width.to_string()));
        pairs.push(("layout", self.layout.slug().to_string()));
        pairs
    }

    /// `/?...` link to `section` that keeps every other control as it is.
    pub fn href(&self, section: Section) -> String {
        let query = self
            .to_pairs(section)
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("/?{query}")
    }
}

/// Clamps to the slider range and rounds to the nearest step.
pub fn snap_width(px: u32) -> u32 {
    let clamped = px.clamp(WIDTH_MIN, WIDTH_MAX);
    let steps = (clamped - WIDTH_MIN + WIDTH_STEP / 2) / WIDTH_STEP;
    WIDTH_MIN + steps * WIDTH_STEP
}
