use serde::{Deserialize, Serialize};

/// A row in a table. Values are keyed by field name and left as raw JSON,
/// the value shape depends on the field type.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Record {
    pub id: String,
    #[serde(rename = "createdTime", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// A record to be created, before the service has assigned it an id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewRecord {
    pub fields: serde_json::Value,
}
