use clap::Parser;
use log::*;
use std::time::Duration;
use steamwebapi::{Context, SteamWebClient};

#[macro_use]
extern crate anyhow;

mod commands;

use commands::{CommandType, Subcommands};

fn main() {
	std::process::exit(exit_code(run()));
}

fn exit_code(result: anyhow::Result<()>) -> i32 {
	match result {
		Ok(_) => 0,
		Err(e) => {
			error!("{:?}", e);
			1
		}
	}
}

fn run() -> anyhow::Result<()> {
	let args = commands::Args::parse();

	stderrlog::new()
		.verbosity(args.global.verbosity as usize)
		.module(module_path!())
		.module("steamwebapi")
		.init()?;

	let cmd: CommandType = match args.sub {
		Subcommands::Completion(args) => CommandType::Const(Box::new(args)),
		Subcommands::Player(args) => CommandType::Client(Box::new(args)),
		Subcommands::Players(args) => CommandType::Client(Box::new(args)),
		Subcommands::Games(args) => CommandType::Client(Box::new(args)),
		Subcommands::FriendIds(args) => CommandType::Client(Box::new(args)),
		Subcommands::Friends(args) => CommandType::Client(Box::new(args)),
	};

	let cmd = match cmd {
		CommandType::Const(cmd) => return cmd.execute(),
		CommandType::Client(cmd) => cmd,
	};

	let Some(api_key) = args.global.api_key else {
		bail!("A Steam Web API key is required, pass --api-key or set STEAM_WEB_API_KEY. You can get one at https://steamcommunity.com/dev/apikey");
	};
	let client = SteamWebClient::new(api_key);
	let ctx = match args.global.timeout {
		Some(secs) => {
			debug!("requests will time out after {}s", secs);
			Context::with_timeout(Duration::from_secs(secs))
		}
		None => Context::background(),
	};

	cmd.execute(&client, &ctx)
}
