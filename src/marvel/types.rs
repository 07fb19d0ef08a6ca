//! Response shapes of `GET /v1/public/characters`
//!
//! Only the fields the app reads are modeled. Unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterDataWrapper {
    pub data: CharacterDataContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterDataContainer {
    pub results: Vec<RawCharacter>,
}

/// One record of `data.results`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCharacter {
    pub name: String,
    /// The API sends `""` or `null` when there is no description
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub thumbnail: Thumbnail,
    pub comics: Available,
    pub series: Available,
    pub events: Available,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub path: String,
    pub extension: String,
}

/// Resource list summary; only the count is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Available {
    pub available: u32,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
