use log::*;
use secrecy::SecretString;

use super::{call, ApiRequest};
use crate::{
	api_responses::{Game, GamesList, SteamApiResponse},
	context::Context,
	errors::Error,
	transport::Transport,
};

const SERVICE_NAME: &str = "IPlayerService";

/// A client for the IPlayerService API.
#[derive(Debug, Clone)]
pub struct PlayerClient<T>
where
	T: Transport,
{
	transport: T,
	key: SecretString,
}

impl<T> PlayerClient<T>
where
	T: Transport,
{
	#[must_use]
	pub fn new(transport: T, key: SecretString) -> Self {
		Self { transport, key }
	}

	/// Fetches every game owned by `steamid`, including app names and free games that have been
	/// played.
	pub fn get_owned_games(&self, ctx: &Context, steamid: &str) -> Result<Vec<Game>, Error> {
		let req = ApiRequest::new(SERVICE_NAME, "GetOwnedGames", 1, &self.key)
			.with_param("steamid", steamid)
			.with_param("include_appinfo", "1")
			.with_param("include_played_free_games", "1");
		let resp: SteamApiResponse<GamesList> = call(&self.transport, ctx, req)?;
		trace!(
			"got {} games (game_count: {:?})",
			resp.response.games.len(),
			resp.response.game_count
		);

		Ok(resp.response.games)
	}
}
