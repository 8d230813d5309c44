//! # API Client - For talking to the Airtable REST API
//!

use crate::config::AirtableConfig;
use crate::constants;
use crate::error::AirsyncError;
use crate::view::ErrorResponse;
use reqwest::{header, Client, ClientBuilder};
use std::time;

pub mod records;
pub mod tables;

const USER_AGENT: &str = "airsync";

pub fn new_for_config(config: &AirtableConfig) -> Result<Client, AirsyncError> {
    match builder_for_api_key(&config.api_key)?
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(AirsyncError::HTTP(reqwest_err)),
    }
}

fn builder_for_api_key(api_key: &str) -> Result<ClientBuilder, AirsyncError> {
    let auth_header = format!("Bearer {api_key}");
    let mut auth_value = match header::HeaderValue::from_str(auth_header.as_str()) {
        Ok(header) => header,
        Err(err) => {
            log::debug!("client::builder_for_api_key invalid header value: {}", err);
            return Err(AirsyncError::basic_str(
                "Error setting request auth. Please check your API key.",
            ));
        }
    };
    auth_value.set_sensitive(true);
    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth_value);
    Ok(Client::builder()
        .user_agent(user_agent())
        .default_headers(headers))
}

fn user_agent() -> String {
    format!("{USER_AGENT}/{}", constants::AIRSYNC_VERSION)
}

/// Performs an extra parse to validate that the response is a success before
/// handing the body back.
pub async fn parse_json_body(url: &str, res: reqwest::Response) -> Result<String, AirsyncError> {
    let status = res.status();
    let body = res.text().await?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if status.is_success() {
        return Ok(body);
    }

    // Airtable wraps most failures in a JSON envelope, surface the detail in
    // the logs while keeping the raw body in the error.
    if let Ok(response) = serde_json::from_str::<ErrorResponse>(&body) {
        log::debug!("service error from {url}: {}", response.message());
    }

    Err(AirsyncError::request_failed(url, status.as_u16(), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;

    #[test]
    fn test_new_for_config() {
        let config = test::config_for_host("https://api.airtable.com");

        let client = new_for_config(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_for_api_key_invalid_key() {
        let api_key = "invalid\nkey"; // newlines cannot go in a header value

        let builder = builder_for_api_key(api_key);
        assert!(builder.is_err());

        let err = builder.unwrap_err();
        assert!(err.to_string().contains("Error setting request auth"));
    }

    #[tokio::test]
    async fn test_parse_json_body_failure_keeps_status_and_body() -> Result<(), AirsyncError> {
        let mut server = mockito::Server::new_async().await;
        let url = format!("{}/anything", server.url());
        let _mock = server
            .mock("GET", "/anything")
            .with_status(503)
            .with_body(r#"{"error": "SERVICE_UNAVAILABLE"}"#)
            .create_async()
            .await;

        let res = reqwest::get(&url).await?;
        let err = parse_json_body(&url, res).await.unwrap_err();

        assert_eq!(err.status_code(), Some(503));
        assert!(err.to_string().contains("SERVICE_UNAVAILABLE"));

        Ok(())
    }
}
