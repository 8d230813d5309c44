use serde::{Deserialize, Serialize};

// The envelope Airtable wraps failures in. Older endpoints return a bare
// error code string, newer ones a type/message object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ErrorBody {
    Code(String),
    Detail {
        #[serde(rename = "type")]
        error_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl ErrorResponse {
    pub fn message(&self) -> String {
        match &self.error {
            ErrorBody::Code(code) => code.to_owned(),
            ErrorBody::Detail {
                error_type,
                message,
            } => match message {
                Some(message) => format!("{error_type}: {message}"),
                None => error_type.to_owned(),
            },
        }
    }
}
