//! Client for the records endpoint.
//!

use crate::api;
use crate::api::client;
use crate::config::AirtableConfig;
use crate::error::AirsyncError;
use crate::model::NewRecord;
use crate::view::RecordsResponse;

use serde_json::json;

/// List the records currently in the configured table.
pub async fn list(config: &AirtableConfig) -> Result<RecordsResponse, AirsyncError> {
    let url = api::endpoint::records_url(config);
    log::debug!("records::list url: {url}");

    let client = client::new_for_config(config)?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;

    let response: Result<RecordsResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(records) => Ok(records),
        Err(err) => {
            log::debug!("Err: {}", err);
            Err(AirsyncError::basic_str(format!(
                "records::list Could not deserialize records [{url}]"
            )))
        }
    }
}

/// Create records in the configured table.
pub async fn create(
    config: &AirtableConfig,
    records: &[NewRecord],
) -> Result<RecordsResponse, AirsyncError> {
    let url = api::endpoint::records_url(config);
    let params = json!({ "records": records });
    log::debug!("records::create url: {url}\n{params}");

    let client = client::new_for_config(config)?;
    let res = client.post(&url).json(&params).send().await?;
    let body = client::parse_json_body(&url, res).await?;

    let response: Result<RecordsResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(records) => Ok(records),
        Err(err) => {
            log::debug!("Err: {}", err);
            Err(AirsyncError::basic_str(format!(
                "records::create Could not deserialize records [{url}]"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::error::AirsyncError;
    use crate::model::NewRecord;
    use crate::test;

    use serde_json::json;

    #[tokio::test]
    async fn test_list_records() -> Result<(), AirsyncError> {
        let mut server = mockito::Server::new_async().await;
        let config = test::config_for_host(server.url());

        let mock = server
            .mock("GET", test::records_path().as_str())
            .with_status(200)
            .with_body(
                r#"{
                    "records": [
                        {
                            "id": "rec1",
                            "createdTime": "2024-03-01T10:00:00.000Z",
                            "fields": {"Name": "John Doe", "Subscription Type": "Premium"}
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let response = api::client::records::list(&config).await?;
        mock.assert_async().await;

        assert_eq!(response.records.len(), 1);
        assert_eq!(response.records[0].id, "rec1");
        assert!(response.offset.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_records() -> Result<(), AirsyncError> {
        let mut server = mockito::Server::new_async().await;
        let config = test::config_for_host(server.url());

        let records = vec![NewRecord {
            fields: json!({"Name": "Jane Smith", "Email": "jane.smith@example.com"}),
        }];
        let mock = server
            .mock("POST", test::records_path().as_str())
            .match_body(mockito::Matcher::Json(json!({
                "records": [{"fields": {"Name": "Jane Smith", "Email": "jane.smith@example.com"}}]
            })))
            .with_status(200)
            .with_body(
                r#"{
                    "records": [
                        {
                            "id": "rec2",
                            "createdTime": "2024-03-20T15:30:00.000Z",
                            "fields": {"Name": "Jane Smith", "Email": "jane.smith@example.com"}
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let response = api::client::records::create(&config, &records).await?;
        mock.assert_async().await;

        assert_eq!(response.records.len(), 1);
        assert_eq!(response.records[0].id, "rec2");

        Ok(())
    }
}
