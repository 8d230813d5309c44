use serde::{Deserialize, Serialize};

/// A table's schema as the metadata API returns it.
///
/// Remote fields are kept loosely typed: the table may contain field types
/// this tool has no catalog entry for, and a PATCH must echo those fields
/// back byte-for-byte-equivalent or the service rejects the update.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<RemoteField>,
}

/// A field as it exists on the remote table. Only the name is interpreted,
/// everything else rides along in `rest` and round-trips untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RemoteField {
    pub name: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl Table {
    pub fn fields_to_string(&self) -> String {
        let names: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();

        let combined_names = names.join(", ");

        format!("[{combined_names}]")
    }
}

impl RemoteField {
    pub fn field_type(&self) -> Option<&str> {
        self.rest.get("type").and_then(|v| v.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.rest.get("description").and_then(|v| v.as_str())
    }
}
