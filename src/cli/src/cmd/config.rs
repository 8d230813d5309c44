use async_trait::async_trait;
use clap::{Arg, Command};

use libairsync::config::AirtableConfig;
use libairsync::error::AirsyncError;

use crate::cmd::RunCmd;
pub const NAME: &str = "config";
pub struct ConfigCmd;

#[async_trait]
impl RunCmd for ConfigCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Store Airtable credentials in ~/.airsync/airsync.toml")
            .arg(
                Arg::new("api-key")
                    .long("api-key")
                    .short('k')
                    .help("Personal access token used as the bearer token")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("base")
                    .long("base")
                    .short('b')
                    .help("Base id (app...)")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("table")
                    .long("table")
                    .short('t')
                    .help("Table id (tbl...) or table name")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("host")
                    .long("host")
                    .help("API host override, defaults to https://api.airtable.com")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), AirsyncError> {
        let mut config = AirtableConfig::get_or_create()?;

        let mut changed = false;
        if let Some(api_key) = args.get_one::<String>("api-key") {
            config.api_key = api_key.to_owned();
            changed = true;
        }
        if let Some(base_id) = args.get_one::<String>("base") {
            config.base_id = base_id.to_owned();
            changed = true;
        }
        if let Some(table_id) = args.get_one::<String>("table") {
            config.table_id = table_id.to_owned();
            changed = true;
        }
        if let Some(host) = args.get_one::<String>("host") {
            config.host = Some(host.to_owned());
            changed = true;
        }

        if !changed {
            println!("api_key: {}", mask_api_key(&config.api_key));
            println!("base_id: {}", config.base_id);
            println!("table_id: {}", config.table_id);
            println!("host: {}", config.api_url());
            return Ok(());
        }

        let path = config.save_default()?;
        println!("Saved config to {path:?}");

        Ok(())
    }
}

fn mask_api_key(api_key: &str) -> String {
    if api_key.is_empty() {
        return String::from("(not set)");
    }
    let visible: String = api_key.chars().take(8).collect();
    format!("{visible}…")
}
