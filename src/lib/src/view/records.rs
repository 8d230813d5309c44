use serde::{Deserialize, Serialize};

use crate::model::Record;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RecordsResponse {
    pub records: Vec<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}
