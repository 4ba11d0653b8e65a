use log::*;

use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(about = "List the games a player owns")]
pub struct GamesCommand {
	#[clap(help = "The player's 64 bit SteamID")]
	pub steamid: String,
	#[clap(long, help = "Sort by total playtime, most played first.")]
	pub sort_by_playtime: bool,
}

impl ClientCommand for GamesCommand {
	fn execute(&self, client: &SteamWebClient, ctx: &Context) -> anyhow::Result<()> {
		info!("Fetching owned games for {}", self.steamid);
		let mut games = client.games(ctx, &self.steamid)?;
		debug!("{} owns {} games", self.steamid, games.len());
		if self.sort_by_playtime {
			games.sort_by(|a, b| b.playtime_forever.cmp(&a.playtime_forever));
		}
		print_json(&games)
	}
}
