use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;
use env_logger::Env;

pub mod cmd;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default());

    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![
        Box::new(cmd::ConfigCmd),
        Box::new(cmd::RecordsCmd),
        Box::new(cmd::SchemaCmd),
        Box::new(cmd::SyncCmd),
    ];

    let mut command = Command::new("airsync")
        .version(libairsync::constants::AIRSYNC_VERSION)
        .about("Keeps an Airtable table schema in step with the field catalog the app expects")
        .subcommand_required(true)
        .arg_required_else_help(true);

    // Add all the commands to the command line
    let mut runners: HashMap<String, Box<dyn cmd::RunCmd>> = HashMap::new();
    for cmd in cmds {
        command = command.subcommand(cmd.args());
        runners.insert(cmd.name().to_string(), cmd);
    }

    // Parse the command line args and run the appropriate command
    let matches = command.get_matches();
    match matches.subcommand() {
        Some((command, args)) => {
            if let Some(runner) = runners.get(command) {
                match runner.run(args).await {
                    Ok(_) => {}
                    Err(err) => {
                        eprintln!("{err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                eprintln!("Unknown command `airsync {command}`");
                return ExitCode::FAILURE;
            }
        }
        _ => unreachable!(), // subcommand_required is set above
    }

    ExitCode::SUCCESS
}
