use serde::Deserialize;

use super::null_as_default;

/// An experiential-learning record as stored in `experiences.json`.
///
/// Every field is optional on disk and `null` reads as empty; `date` is free
/// text and never parsed.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub lede: String,
    #[serde(deserialize_with = "null_as_default")]
    pub facts: Vec<String>,
    /// Long-form Markdown.
    #[serde(alias = "body_md", deserialize_with = "null_as_default")]
    pub body: String,
}

impl Experience {
    /// Caption line for the feature layout: "date - tag, tag", skipping empty parts.
    pub fn meta_line(&self) -> String {
        let tags = self.tags.join(", ");
        [self.date.as_str(), tags.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" - ")
    }
}
