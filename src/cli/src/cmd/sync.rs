use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use libairsync::config::AirtableConfig;
use libairsync::error::AirsyncError;
use libairsync::model::FieldDefinition;
use libairsync::schema;
use libairsync::sync;

use crate::cmd::RunCmd;
pub const NAME: &str = "sync";
pub struct SyncCmd;

#[async_trait]
impl RunCmd for SyncCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Add any catalog fields missing from the remote table schema")
            .arg(
                Arg::new("base")
                    .long("base")
                    .short('b')
                    .help("Base id, overrides the configured BASE_ID")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("table")
                    .long("table")
                    .short('t')
                    .help("Table id, overrides the configured TABLE_ID")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), AirsyncError> {
        let mut config = AirtableConfig::get()?;
        if let Some(base_id) = args.get_one::<String>("base") {
            config.base_id = base_id.to_owned();
        }
        if let Some(table_id) = args.get_one::<String>("table") {
            config.table_id = table_id.to_owned();
        }

        let desired = schema::desired_fields();
        println!("Fetching current schema for table {}", config.table_id);

        let outcome = sync::sync_schema(&config, &desired).await?;
        if outcome.added.is_empty() {
            println!(
                "Schema already up to date, {} fields {}",
                outcome.table.fields.len(),
                outcome.table.fields_to_string()
            );
        } else {
            println!(
                "{} {} field(s) {}",
                "Added".green(),
                outcome.added.len(),
                FieldDefinition::all_fields_to_string(&outcome.added)
            );
            println!("{}", serde_json::to_string_pretty(&outcome.table)?);
        }

        Ok(())
    }
}
