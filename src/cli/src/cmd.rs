use clap;
use libairsync::error::AirsyncError;

use async_trait::async_trait;

pub mod config;
pub use config::ConfigCmd;

pub mod records;
pub use records::RecordsCmd;

pub mod schema;
pub use schema::SchemaCmd;

pub mod sync;
pub use sync::SyncCmd;

#[async_trait]
pub trait RunCmd {
    fn name(&self) -> &str;
    fn args(&self) -> clap::Command;
    async fn run(&self, args: &clap::ArgMatches) -> Result<(), AirsyncError>;
}
