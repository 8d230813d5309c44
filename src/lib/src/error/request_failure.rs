//! # RequestFailure
//!
//! A request the Airtable API rejected. Carries the HTTP status code and the
//! raw response body so the operator sees exactly what the service said.
//!

use std::fmt;

#[derive(Debug)]
pub struct RequestFailure {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl RequestFailure {
    pub fn new(url: impl AsRef<str>, status: u16, body: impl AsRef<str>) -> Self {
        RequestFailure {
            url: String::from(url.as_ref()),
            status,
            body: String::from(body.as_ref()),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Request failed [{}] {}\n{}",
            self.status, self.url, self.body
        )
    }
}

impl std::error::Error for RequestFailure {}
