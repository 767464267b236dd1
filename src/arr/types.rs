use serde::{Deserialize, Serialize};

/// Radarr tag as returned by `GET /api/v3/tag`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag {
    pub id: i64,
    pub label: String,
}

/// Body of `POST /api/v3/tag`. Radarr assigns the id, so it is sent as 0.
#[derive(Debug, Clone, Serialize)]
pub struct NewTag<'a> {
    pub label: &'a str,
    pub id: i64,
}

impl<'a> NewTag<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label, id: 0 }
    }
}

/// Radarr movie resource.
///
/// Only the fields elsewherr reads are typed. Everything else Radarr sends is
/// kept in `extra` and written back untouched, because `PUT /api/v3/movie`
/// replaces the whole record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub tmdb_id: i64,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
