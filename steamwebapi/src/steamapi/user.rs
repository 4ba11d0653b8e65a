use log::*;
use secrecy::SecretString;

use super::{call, ApiRequest};
use crate::{
	api_responses::{Friend, FriendsListResponse, Player, PlayersList, SteamApiResponse},
	context::Context,
	errors::Error,
	transport::Transport,
};

const SERVICE_NAME: &str = "ISteamUser";

/// A client for the ISteamUser API.
#[derive(Debug, Clone)]
pub struct UserClient<T>
where
	T: Transport,
{
	transport: T,
	key: SecretString,
}

impl<T> UserClient<T>
where
	T: Transport,
{
	#[must_use]
	pub fn new(transport: T, key: SecretString) -> Self {
		Self { transport, key }
	}

	/// Fetches the profiles of every steamid in `steamids` in a single request.
	///
	/// Steam silently leaves out unknown ids, so the result may be shorter than the input, and
	/// is not guaranteed to be in the same order.
	pub fn get_player_summaries<S: AsRef<str>>(
		&self,
		ctx: &Context,
		steamids: &[S],
	) -> Result<Vec<Player>, Error> {
		if steamids.is_empty() {
			debug!("no steamids given, skipping GetPlayerSummaries");
			return Ok(Vec::new());
		}

		let steamids = steamids
			.iter()
			.map(|steamid| steamid.as_ref())
			.collect::<Vec<&str>>()
			.join(",");
		let req = ApiRequest::new(SERVICE_NAME, "GetPlayerSummaries", 2, &self.key)
			.with_param("steamids", steamids);
		let resp: SteamApiResponse<PlayersList> = call(&self.transport, ctx, req)?;
		trace!("got {} player summaries", resp.response.players.len());

		Ok(resp.response.players)
	}

	/// Fetches the friends of `steamid`. Only the `friend` relationship is requested.
	pub fn get_friend_list(&self, ctx: &Context, steamid: &str) -> Result<Vec<Friend>, Error> {
		let req = ApiRequest::new(SERVICE_NAME, "GetFriendList", 1, &self.key)
			.with_param("steamid", steamid)
			.with_param("relationship", "friend");
		let resp: FriendsListResponse = call(&self.transport, ctx, req)?;
		trace!("got {} friends", resp.friends_list.friends.len());

		Ok(resp.friends_list.friends)
	}
}
