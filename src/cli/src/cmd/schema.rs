use async_trait::async_trait;
use clap::{Arg, Command};

use libairsync::api;
use libairsync::config::AirtableConfig;
use libairsync::error::AirsyncError;

use crate::cmd::RunCmd;
pub const NAME: &str = "schema";
pub struct SchemaCmd;

#[async_trait]
impl RunCmd for SchemaCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Show the remote table's current field schema")
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the raw schema as pretty JSON")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), AirsyncError> {
        let config = AirtableConfig::get()?;
        let table = api::client::tables::get_schema(&config).await?;

        if args.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(&table)?);
            return Ok(());
        }

        if let Some(name) = &table.name {
            println!("{} ({} fields)", name, table.fields.len());
        }

        let mut output = comfy_table::Table::new();
        output.set_header(vec!["name", "type", "description"]);
        for field in table.fields.iter() {
            output.add_row(vec![
                field.name.as_str(),
                field.field_type().unwrap_or(""),
                field.description().unwrap_or(""),
            ]);
        }
        println!("{output}");

        Ok(())
    }
}
