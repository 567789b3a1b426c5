use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::null_as_default;

/// Maximum number of link buttons rendered on a showcase card.
pub const MAX_CARD_LINKS: usize = 4;

/// A portfolio entry as stored in `projects.json`.
///
/// Only `title` is required. Missing or `null` `image`, `blurb`, `tags` and
/// `links` read as empty.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blurb: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Label → URL pairs in file order.
    #[serde(default, deserialize_with = "deserialize_links")]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

impl Project {
    /// Links that fit on a card, in file order.
    pub fn card_links(&self) -> &[ProjectLink] {
        let n = self.links.len().min(MAX_CARD_LINKS);
        &self.links[..n]
    }

    /// Case-insensitive sort key.
    pub fn sort_key(&self) -> String {
        self.title.to_lowercase()
    }
}

/// `links` is a JSON object; a map type would lose the author's ordering,
/// so the entries are collected straight into a Vec.
fn deserialize_links<'de, D>(deserializer: D) -> Result<Vec<ProjectLink>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LinksVisitor;

    impl<'de> Visitor<'de> for LinksVisitor {
        type Value = Vec<ProjectLink>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object mapping link labels to URLs")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut links = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((label, url)) = map.next_entry::<String, String>()? {
                links.push(ProjectLink { label, url });
            }
            Ok(links)
        }
    }

    deserializer.deserialize_any(LinksVisitor)
}
