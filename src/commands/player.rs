use log::*;

use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(about = "Look up a single player's profile")]
pub struct PlayerCommand {
	#[clap(help = "The player's 64 bit SteamID, eg. 76561197960435530")]
	pub steamid: String,
}

impl ClientCommand for PlayerCommand {
	fn execute(&self, client: &SteamWebClient, ctx: &Context) -> anyhow::Result<()> {
		info!("Fetching profile for {}", self.steamid);
		let player = client.player(ctx, &self.steamid)?;
		print_json(&player)
	}
}

#[derive(Debug, Clone, Parser)]
#[clap(about = "Look up several players' profiles in one request")]
pub struct PlayersCommand {
	#[clap(required = true, help = "One or more 64 bit SteamIDs")]
	pub steamids: Vec<String>,
}

impl ClientCommand for PlayersCommand {
	fn execute(&self, client: &SteamWebClient, ctx: &Context) -> anyhow::Result<()> {
		info!("Fetching {} profiles", self.steamids.len());
		let players = client.players(ctx, &self.steamids)?;
		if players.len() < self.steamids.len() {
			warn!(
				"Steam returned {} of {} requested profiles, the rest are unknown",
				players.len(),
				self.steamids.len()
			);
		}
		print_json(&players)
	}
}
