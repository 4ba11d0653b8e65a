use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::str::FromStr;
use steamwebapi::{Context, SteamWebClient};

pub mod completions;
pub mod friends;
pub mod games;
pub mod player;

pub use completions::CompletionsCommand;
pub use friends::{FriendIdsCommand, FriendsCommand};
pub use games::GamesCommand;
pub use player::{PlayerCommand, PlayersCommand};

/// A command that does not talk to the Steam Web API.
pub(crate) trait ConstCommand {
	fn execute(&self) -> anyhow::Result<()>;
}

/// A command that makes requests with a configured client.
pub(crate) trait ClientCommand {
	fn execute(&self, client: &SteamWebClient, ctx: &Context) -> anyhow::Result<()>;
}

pub(crate) enum CommandType {
	Const(Box<dyn ConstCommand>),
	Client(Box<dyn ClientCommand>),
}

#[derive(Debug, Clone, Parser)]
#[clap(name="steamwebapi-cli", bin_name="steamweb", author, version, about = "Look up Steam players, their friends, and their games from the command line.", long_about = None)]
pub(crate) struct Args {
	#[clap(flatten)]
	pub global: GlobalArgs,

	#[clap(subcommand)]
	pub sub: Subcommands,
}

#[derive(Clone, Parser)]
pub(crate) struct GlobalArgs {
	#[clap(
		short = 'k',
		long,
		env = "STEAM_WEB_API_KEY",
		hide_env_values = true,
		help = "Your Steam Web API key.",
		long_help = "Your Steam Web API key. Get one at https://steamcommunity.com/dev/apikey"
	)]
	pub api_key: Option<String>,
	#[clap(
		short,
		long,
		help = "Give up on requests that take longer than this many seconds. By default, requests never time out."
	)]
	pub timeout: Option<u64>,
	#[clap(short, long, value_enum, default_value_t=Verbosity::Info, help = "Set the log level.")]
	pub verbosity: Verbosity,
}

impl std::fmt::Debug for GlobalArgs {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GlobalArgs")
			.field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
			.field("timeout", &self.timeout)
			.field("verbosity", &self.verbosity)
			.finish()
	}
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Subcommands {
	Completion(CompletionsCommand),
	Player(PlayerCommand),
	Players(PlayersCommand),
	Games(GamesCommand),
	FriendIds(FriendIdsCommand),
	Friends(FriendsCommand),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Verbosity {
	Error = 0,
	Warn = 1,
	Info = 2,
	Debug = 3,
	Trace = 4,
}

impl std::fmt::Display for Verbosity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!(
			"{}",
			match self {
				Verbosity::Error => "error",
				Verbosity::Warn => "warn",
				Verbosity::Info => "info",
				Verbosity::Debug => "debug",
				Verbosity::Trace => "trace",
			}
		))
	}
}

impl FromStr for Verbosity {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"error" => Ok(Verbosity::Error),
			"warn" => Ok(Verbosity::Warn),
			"info" => Ok(Verbosity::Info),
			"debug" => Ok(Verbosity::Debug),
			"trace" => Ok(Verbosity::Trace),
			_ => Err(anyhow!("Invalid verbosity level: {}", s)),
		}
	}
}

/// Prints `value` to stdout as pretty JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}
