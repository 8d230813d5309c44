//! URL construction for the Airtable REST endpoints.
//!

use crate::config::AirtableConfig;
use crate::constants::API_NAMESPACE;

/// Metadata endpoint for a single table's schema.
pub fn meta_table_url(config: &AirtableConfig) -> String {
    format!(
        "{}/{}/meta/bases/{}/tables/{}",
        config.api_url(),
        API_NAMESPACE,
        config.base_id,
        config.table_id
    )
}

/// Records endpoint. The table segment may be a table id or a table name,
/// names can contain spaces.
pub fn records_url(config: &AirtableConfig) -> String {
    format!(
        "{}/{}/{}/{}",
        config.api_url(),
        API_NAMESPACE,
        config.base_id,
        urlencoding::encode(&config.table_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;

    #[test]
    fn test_meta_table_url() {
        let config = test::config_for_host("https://api.airtable.com");
        assert_eq!(
            meta_table_url(&config),
            format!(
                "https://api.airtable.com/v0/meta/bases/{}/tables/{}",
                test::TEST_BASE_ID,
                test::TEST_TABLE_ID
            )
        );
    }

    #[test]
    fn test_records_url_encodes_table_names() {
        let mut config = test::config_for_host("https://api.airtable.com");
        config.table_id = String::from("Table 1");
        assert_eq!(
            records_url(&config),
            format!(
                "https://api.airtable.com/v0/{}/Table%201",
                test::TEST_BASE_ID
            )
        );
    }
}
