pub mod experience;
pub mod project;

pub use experience::Experience;
pub use project::Project;

use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` the same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
