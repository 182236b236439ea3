use std::path::PathBuf;

use admin_core::{load_members, HttpMemberSource, MemberTableController};
use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

mod commands;
mod config;
mod render;

use commands::{dispatch, parse_command, CommandError, Outcome, USAGE};
use config::{build_log_filter, load_settings, validate_members_url, DEFAULT_CONFIG_PATH};
use render::render_table;

#[derive(Parser, Debug)]
#[command(about = "Browse, search and curate the member list from a terminal")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(long)]
    members_url: Option<String>,
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings =
        load_settings(&args.config)?.with_overrides(args.members_url, args.log_filter);

    tracing_subscriber::fmt()
        .with_env_filter(build_log_filter(&settings.log_filter)?)
        .with_writer(std::io::stderr)
        .init();

    let members_url = validate_members_url(&settings.members_url)?;
    info!(members_url = %members_url, "loading members");
    let source = HttpMemberSource::new(members_url.as_str());
    let mut controller = MemberTableController::with_members(load_members(&source).await);

    print!("{}", render_table(&controller.view()));
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                println!("{err}; type 'help' for commands");
                continue;
            }
        };

        match dispatch(&mut controller, cmd) {
            Outcome::Render => print!("{}", render_table(&controller.view())),
            Outcome::Notice(message) => {
                println!("{message}");
                print!("{}", render_table(&controller.view()));
            }
            Outcome::Help => println!("{USAGE}"),
            Outcome::Quit => break,
        }
    }

    Ok(())
}
