use log::*;

use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(about = "List a player's friends, without their profiles")]
pub struct FriendIdsCommand {
	#[clap(help = "The player's 64 bit SteamID")]
	pub steamid: String,
}

impl ClientCommand for FriendIdsCommand {
	fn execute(&self, client: &SteamWebClient, ctx: &Context) -> anyhow::Result<()> {
		info!("Fetching friend list for {}", self.steamid);
		let friends = client.friend_ids(ctx, &self.steamid)?;
		print_json(&friends)
	}
}

#[derive(Debug, Clone, Parser)]
#[clap(about = "Look up the profiles of everyone on a player's friend list")]
pub struct FriendsCommand {
	#[clap(help = "The player's 64 bit SteamID")]
	pub steamid: String,
}

impl ClientCommand for FriendsCommand {
	fn execute(&self, client: &SteamWebClient, ctx: &Context) -> anyhow::Result<()> {
		info!("Fetching friends of {}", self.steamid);
		let players = client.friends(ctx, &self.steamid)?;
		info!("{} has {} friends", self.steamid, players.len());
		print_json(&players)
	}
}
