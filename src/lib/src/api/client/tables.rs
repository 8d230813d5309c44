//! Client for the table metadata endpoint: read and replace a table's field
//! schema.
//!

use crate::api;
use crate::api::client;
use crate::config::AirtableConfig;
use crate::error::AirsyncError;
use crate::model::Table;

use serde_json::json;

/// Read the current schema of the configured table.
pub async fn get_schema(config: &AirtableConfig) -> Result<Table, AirsyncError> {
    let url = api::endpoint::meta_table_url(config);
    log::debug!("tables::get_schema url: {url}");

    let client = client::new_for_config(config)?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;

    let response: Result<Table, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(table) => Ok(table),
        Err(err) => {
            log::debug!("Err: {}", err);
            Err(AirsyncError::basic_str(format!(
                "tables::get_schema Could not deserialize table schema [{url}]"
            )))
        }
    }
}

/// Replace the table's field list. The caller passes the full merged list,
/// existing fields first, additions appended.
pub async fn update_schema(
    config: &AirtableConfig,
    fields: &[serde_json::Value],
) -> Result<Table, AirsyncError> {
    let url = api::endpoint::meta_table_url(config);
    let params = json!({ "fields": fields });
    log::debug!("tables::update_schema url: {url}\n{params}");

    let client = client::new_for_config(config)?;
    let res = client.patch(&url).json(&params).send().await?;
    let body = client::parse_json_body(&url, res).await?;

    let response: Result<Table, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(table) => Ok(table),
        Err(err) => {
            log::debug!("Err: {}", err);
            Err(AirsyncError::basic_str(format!(
                "tables::update_schema Could not deserialize table schema [{url}]"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::error::AirsyncError;
    use crate::test;

    use serde_json::json;

    #[tokio::test]
    async fn test_get_schema() -> Result<(), AirsyncError> {
        let mut server = mockito::Server::new_async().await;
        let config = test::config_for_host(server.url());

        let auth = format!("Bearer {}", test::TEST_API_KEY);
        let mock = server
            .mock("GET", test::meta_table_path().as_str())
            .match_header("authorization", auth.as_str())
            .with_status(200)
            .with_body(
                r#"{
                    "id": "tblTESTTABLE00000",
                    "name": "Users",
                    "fields": [
                        {"id": "fld1", "name": "Name", "type": "singleLineText"},
                        {"id": "fld2", "name": "Notes", "type": "multilineText"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let table = api::client::tables::get_schema(&config).await?;
        mock.assert_async().await;

        assert_eq!(table.name.as_deref(), Some("Users"));
        assert_eq!(table.fields.len(), 2);
        assert_eq!(table.fields[0].name, "Name");
        assert_eq!(table.fields[1].field_type(), Some("multilineText"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_schema_unauthorized() -> Result<(), AirsyncError> {
        let mut server = mockito::Server::new_async().await;
        let config = test::config_for_host(server.url());

        let body = r#"{"error": {"type": "AUTHENTICATION_REQUIRED", "message": "Invalid authentication token"}}"#;
        let mock = server
            .mock("GET", test::meta_table_path().as_str())
            .with_status(401)
            .with_body(body)
            .create_async()
            .await;

        let err = api::client::tables::get_schema(&config).await.unwrap_err();
        mock.assert_async().await;

        assert_eq!(err.status_code(), Some(401));
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("AUTHENTICATION_REQUIRED"));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_schema() -> Result<(), AirsyncError> {
        let mut server = mockito::Server::new_async().await;
        let config = test::config_for_host(server.url());

        let fields = vec![
            json!({"id": "fld1", "name": "Name", "type": "singleLineText"}),
            json!({"name": "Email", "type": "email"}),
        ];
        let mock = server
            .mock("PATCH", test::meta_table_path().as_str())
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(json!({"fields": fields})))
            .with_status(200)
            .with_body(
                r#"{
                    "id": "tblTESTTABLE00000",
                    "name": "Users",
                    "fields": [
                        {"id": "fld1", "name": "Name", "type": "singleLineText"},
                        {"id": "fld9", "name": "Email", "type": "email"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let table = api::client::tables::update_schema(&config, &fields).await?;
        mock.assert_async().await;

        assert_eq!(table.fields.len(), 2);
        assert_eq!(table.fields[1].name, "Email");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_schema_invalid_field() -> Result<(), AirsyncError> {
        let mut server = mockito::Server::new_async().await;
        let config = test::config_for_host(server.url());

        let body = r#"{"error": {"type": "INVALID_REQUEST_BODY", "message": "Field type is not valid"}}"#;
        let mock = server
            .mock("PATCH", test::meta_table_path().as_str())
            .with_status(422)
            .with_body(body)
            .create_async()
            .await;

        let fields = vec![json!({"name": "Broken", "type": "bogus"})];
        let err = api::client::tables::update_schema(&config, &fields)
            .await
            .unwrap_err();
        mock.assert_async().await;

        assert_eq!(err.status_code(), Some(422));
        assert!(err.to_string().contains("INVALID_REQUEST_BODY"));

        Ok(())
    }
}
