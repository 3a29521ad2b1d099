//! Confluence content API types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A page as returned by the content API (only the fields WFA reads).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<FetchedVersion>,
}

/// Version block of a fetched page; `number` may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedVersion {
    #[serde(default)]
    pub number: Option<u64>,
}

/// Version block sent with an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageVersion {
    pub number: u64,
}

impl Page {
    /// The page's version number; pages reported without one count as version 1
    pub fn current_version(&self) -> u64 {
        self.version.and_then(|v| v.number).unwrap_or(1)
    }
}

/// Response of `GET /rest/api/content`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentList {
    #[serde(default)]
    pub results: Vec<Page>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageBody<'a> {
    pub storage: StorageValue<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageValue<'a> {
    pub value: &'a str,
    pub representation: &'static str,
}

impl<'a> StorageBody<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            storage: StorageValue {
                value,
                representation: "storage",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpaceRef<'a> {
    pub key: &'a str,
}

/// Body of `POST /rest/api/content`
#[derive(Debug, Clone, Serialize)]
pub struct NewPage<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'a str,
    pub space: SpaceRef<'a>,
    pub body: StorageBody<'a>,
}

/// Body of `PUT /rest/api/content/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct PageUpdate<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'a str,
    pub version: PageVersion,
    pub body: StorageBody<'a>,
}

// Cloud returns ids as strings, some server versions as numbers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) if !id.is_empty() => Some(id),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    })
}
