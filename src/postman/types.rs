use crate::ids::ArtifactId;
use serde::Serialize;
use std::collections::BTreeMap;

/// A Postman-style request collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: ArtifactId,
    pub name: String,
    pub description: String,
    /// Unix milliseconds at generation time.
    pub timestamp: u64,
    /// Folder ids in emission order.
    pub order: Vec<ArtifactId>,
    pub folders: Vec<Folder>,
    pub requests: Vec<Request>,
}

/// One folder per documented resource.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: ArtifactId,
    pub name: String,
    pub description: String,
    pub request_ids: Vec<ArtifactId>,
}

/// One synthesized request per (relative path, verb) pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: ArtifactId,
    pub url: String,
    pub method: String,
    /// Raw header block, one `Name: value` line per header.
    pub headers: String,
    pub path_variables: BTreeMap<String, String>,
    pub data: Vec<DataEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_mode: Option<String>,
    pub time: u64,
    pub name: String,
    pub description: String,
    pub collection_id: ArtifactId,
    pub folder_id: ArtifactId,
}

/// Synthetic form entry for one documented property.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DataEntry {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub entry_type: String,
}
