use async_trait::async_trait;
use clap::{Arg, Command};
use serde_json::json;

use libairsync::api;
use libairsync::config::AirtableConfig;
use libairsync::error::AirsyncError;
use libairsync::model::NewRecord;

use crate::cmd::RunCmd;
pub const NAME: &str = "records";
pub struct RecordsCmd;

#[async_trait]
impl RunCmd for RecordsCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Inspect and seed records in the configured table")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(
                Command::new("list").about("List the table's records").arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the raw records as pretty JSON")
                        .action(clap::ArgAction::SetTrue),
                ),
            )
            .subcommand(
                Command::new("seed")
                    .about("Insert sample subscription records to smoke-test the schema"),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), AirsyncError> {
        match args.subcommand() {
            Some(("list", sub_matches)) => self.list(sub_matches).await,
            Some(("seed", _)) => self.seed().await,
            _ => Err(AirsyncError::basic_str("Unknown records subcommand")),
        }
    }
}

impl RecordsCmd {
    async fn list(&self, args: &clap::ArgMatches) -> Result<(), AirsyncError> {
        let config = AirtableConfig::get()?;
        let response = api::client::records::list(&config).await?;

        if args.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(&response)?);
            return Ok(());
        }

        for record in response.records.iter() {
            println!("{}\t{}", record.id, serde_json::to_string(&record.fields)?);
        }
        println!("{} record(s)", response.records.len());

        Ok(())
    }

    async fn seed(&self) -> Result<(), AirsyncError> {
        let config = AirtableConfig::get()?;
        let records = sample_records();

        println!("Creating {} sample record(s)...", records.len());
        let response = api::client::records::create(&config, &records).await?;

        for record in response.records.iter() {
            println!("created {}", record.id);
        }

        Ok(())
    }
}

/// Fixture rows covering each subscription tier, matching the field catalog.
fn sample_records() -> Vec<NewRecord> {
    vec![
        NewRecord {
            fields: json!({
                "Name": "John Doe",
                "Notes": "Premium user",
                "Email": "john.doe@example.com",
                "Created At": "2024-03-01T10:00:00.000Z",
                "Last Login": "2024-03-20T15:30:00.000Z",
                "Subscription Status": "Active",
                "Subscription Type": "Premium",
                "Start Date": "2024-03-01",
                "End Date": "2025-03-01"
            }),
        },
        NewRecord {
            fields: json!({
                "Name": "Jane Smith",
                "Notes": "Free tier user",
                "Email": "jane.smith@example.com",
                "Created At": "2024-02-15T09:00:00.000Z",
                "Last Login": "2024-03-19T11:45:00.000Z",
                "Subscription Status": "Trial",
                "Subscription Type": "Free",
                "Start Date": "2024-02-15",
                "End Date": "2024-04-15"
            }),
        },
        NewRecord {
            fields: json!({
                "Name": "Alex Johnson",
                "Notes": "Basic tier user",
                "Email": "alex.johnson@example.com",
                "Created At": "2023-12-10T14:20:00.000Z",
                "Last Login": "2024-03-15T08:10:00.000Z",
                "Subscription Status": "Inactive",
                "Subscription Type": "Basic",
                "Start Date": "2023-12-10",
                "End Date": "2024-12-10"
            }),
        },
    ]
}
