use log::*;
use secrecy::SecretString;

use crate::{
	api_responses::{Friend, Game, Player},
	context::Context,
	errors::Error,
	steamapi::{PlayerClient, UserClient},
	transport::{Transport, WebApiTransport},
};

/// Entry point for the Steam Web API.
///
/// Holds the service clients and nothing else, so a single client can be shared
/// between threads. Every method takes a [`Context`] that bounds how long the call may take and
/// allows it to be cancelled.
#[derive(Debug, Clone)]
pub struct SteamWebClient<T = WebApiTransport>
where
	T: Transport + Clone,
{
	user_service: UserClient<T>,
	player_service: PlayerClient<T>,
}

impl SteamWebClient<WebApiTransport> {
	pub fn new(api_key: impl Into<String>) -> Self {
		Self::with_transport(WebApiTransport::new(), api_key)
	}
}

impl<T> SteamWebClient<T>
where
	T: Transport + Clone,
{
	pub(crate) fn with_transport(transport: T, api_key: impl Into<String>) -> Self {
		let key = SecretString::new(api_key.into());
		Self {
			user_service: UserClient::new(transport.clone(), key.clone()),
			player_service: PlayerClient::new(transport, key),
		}
	}

	/// Fetches the profiles for all of `steamids` in one round trip.
	///
	/// Unknown steamids are left out of the result rather than reported as errors.
	pub fn players<S: AsRef<str>>(&self, ctx: &Context, steamids: &[S]) -> Result<Vec<Player>, Error> {
		self.user_service.get_player_summaries(ctx, steamids)
	}

	/// Fetches a single profile, failing with [`Error::PlayerNotFound`] if Steam doesn't know
	/// about `steamid`.
	pub fn player(&self, ctx: &Context, steamid: &str) -> Result<Player, Error> {
		self.players(ctx, &[steamid])?
			.into_iter()
			.next()
			.ok_or_else(|| Error::PlayerNotFound(steamid.to_owned()))
	}

	pub fn games(&self, ctx: &Context, steamid: &str) -> Result<Vec<Game>, Error> {
		self.player_service.get_owned_games(ctx, steamid)
	}

	/// Fetches the friend list of `steamid` without resolving the friends' profiles.
	pub fn friend_ids(&self, ctx: &Context, steamid: &str) -> Result<Vec<Friend>, Error> {
		self.user_service.get_friend_list(ctx, steamid)
	}

	/// Fetches the profiles of everyone on `steamid`'s friend list.
	///
	/// Takes two round trips, one for the friend list and one for the profiles. The profiles are
	/// returned in whatever order Steam sends them, which is not necessarily friend list order.
	pub fn friends(&self, ctx: &Context, steamid: &str) -> Result<Vec<Player>, Error> {
		let friends = self.friend_ids(ctx, steamid)?;
		if friends.is_empty() {
			debug!("{} has no friends, skipping profile lookup", steamid);
			return Ok(Vec::new());
		}

		let steamids: Vec<&str> = friends.iter().map(|f| f.steamid.as_str()).collect();
		self.players(ctx, &steamids)
	}
}

#[cfg(test)]
mod tests {
	use std::{thread, time::Duration};

	use reqwest::StatusCode;

	use super::*;
	use crate::transport::{mock::MockTransport, TransportError};

	const ROBIN: &str = "76561197960435530";

	fn client(transport: &MockTransport) -> SteamWebClient<MockTransport> {
		SteamWebClient::with_transport(transport.clone(), "KEY")
	}

	#[test]
	fn test_client_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<SteamWebClient>();
	}

	#[test]
	fn test_debug_does_not_leak_key() {
		let client = SteamWebClient::new("hunter2");
		assert!(!format!("{:?}", client).contains("hunter2"));
	}

	#[test]
	fn test_player() {
		let transport = MockTransport::new().reply(include_str!(
			"fixtures/api-responses/get-player-summaries-1.json"
		));

		let player = client(&transport)
			.player(&Context::background(), ROBIN)
			.unwrap();

		assert_eq!(player.steamid, ROBIN);
		assert_eq!(transport.round_trips(), 1);
		assert_eq!(
			transport.sent()[0].query(),
			Some("key=KEY&steamids=76561197960435530")
		);
	}

	#[test]
	fn test_player_not_found() {
		let transport = MockTransport::new().reply(r#"{"response":{"players":[]}}"#);

		let err = client(&transport)
			.player(&Context::background(), "76561197960265728")
			.unwrap_err();

		assert!(err.is_not_found());
		assert!(matches!(err, Error::PlayerNotFound(id) if id == "76561197960265728"));
	}

	#[test]
	fn test_players_missing_envelope() {
		let transport = MockTransport::new().reply("{}");

		let err = client(&transport)
			.players(&Context::background(), &[ROBIN])
			.unwrap_err();

		assert!(err.is_decode());
	}

	#[test]
	fn test_games() {
		let transport = MockTransport::new().reply(include_str!(
			"fixtures/api-responses/get-owned-games-1.json"
		));

		let games = client(&transport)
			.games(&Context::background(), ROBIN)
			.unwrap();

		assert_eq!(
			games.iter().map(|g| g.appid).collect::<Vec<_>>(),
			vec![440, 400]
		);
	}

	#[test]
	fn test_games_empty_library() {
		let transport = MockTransport::new().reply(r#"{"response":{"game_count":0,"games":[]}}"#);

		let games = client(&transport)
			.games(&Context::background(), ROBIN)
			.unwrap();

		assert!(games.is_empty());
	}

	#[test]
	fn test_games_bad_playtime() {
		let transport = MockTransport::new().reply(include_str!(
			"fixtures/api-responses/get-owned-games-bad-playtime.json"
		));

		let err = client(&transport)
			.games(&Context::background(), ROBIN)
			.unwrap_err();

		assert!(err.is_decode());
	}

	#[test]
	fn test_friends_no_friends_is_one_round_trip() {
		let transport = MockTransport::new().reply(r#"{"friendslist":{"friends":[]}}"#);

		let players = client(&transport)
			.friends(&Context::background(), ROBIN)
			.unwrap();

		assert!(players.is_empty());
		assert_eq!(transport.round_trips(), 1);
	}

	#[test]
	fn test_friends_resolves_profiles() {
		// profiles come back in a different order than the friend list
		let transport = MockTransport::new()
			.reply(include_str!("fixtures/api-responses/get-friend-list-1.json"))
			.reply(include_str!(
				"fixtures/api-responses/get-player-summaries-2.json"
			));

		let players = client(&transport)
			.friends(&Context::background(), "76561197960287930")
			.unwrap();

		assert_eq!(transport.round_trips(), 2);
		let sent = transport.sent();
		assert_eq!(sent[0].path(), "/ISteamUser/GetFriendList/v0001");
		assert_eq!(sent[1].path(), "/ISteamUser/GetPlayerSummaries/v0002");
		let steamids = sent[1]
			.query_pairs()
			.find(|(name, _)| name == "steamids")
			.map(|(_, value)| value.into_owned());
		assert_eq!(
			steamids.as_deref(),
			Some("76561197960265731,76561197960265738,76561197960435530")
		);

		assert_eq!(
			players
				.iter()
				.map(|p| p.steamid.as_str())
				.collect::<Vec<_>>(),
			vec!["76561197960435530", "76561197960265731"]
		);
	}

	#[test]
	fn test_friends_friend_list_failure_aborts() {
		let transport =
			MockTransport::new().reply_with_status(StatusCode::UNAUTHORIZED, "<html></html>");

		let err = client(&transport)
			.friends(&Context::background(), ROBIN)
			.unwrap_err();

		assert!(matches!(err, Error::Transport(TransportError::Unauthorized)));
		assert_eq!(transport.round_trips(), 1);
	}

	#[test]
	fn test_friends_profile_failure_is_not_partial() {
		let transport = MockTransport::new()
			.reply(include_str!("fixtures/api-responses/get-friend-list-1.json"))
			.fail(|| TransportError::RateLimited);

		let err = client(&transport)
			.friends(&Context::background(), ROBIN)
			.unwrap_err();

		assert!(matches!(err, Error::Transport(TransportError::RateLimited)));
		assert_eq!(transport.round_trips(), 2);
	}

	#[test]
	fn test_friends_profile_decode_failure() {
		let transport = MockTransport::new()
			.reply(include_str!("fixtures/api-responses/get-friend-list-1.json"))
			.reply(r#"{"response":{"players":"nope"}}"#);

		let err = client(&transport)
			.friends(&Context::background(), ROBIN)
			.unwrap_err();

		assert!(err.is_decode());
	}

	#[test]
	fn test_cancelled_context_fails_before_round_trip() {
		let transport = MockTransport::new();
		let client = client(&transport);
		let ctx = Context::background();
		ctx.cancel();

		let results = vec![
			client.player(&ctx, ROBIN).map(|_| ()),
			client.players(&ctx, &[ROBIN]).map(|_| ()),
			client.games(&ctx, ROBIN).map(|_| ()),
			client.friend_ids(&ctx, ROBIN).map(|_| ()),
			client.friends(&ctx, ROBIN).map(|_| ()),
		];

		for result in results {
			let err = result.unwrap_err();
			assert!(
				matches!(err, Error::Transport(TransportError::Cancelled)),
				"got {:?}",
				err
			);
		}
		assert_eq!(transport.round_trips(), 0);
	}

	#[test]
	fn test_expired_context_fails_before_round_trip() {
		let transport = MockTransport::new();
		let ctx = Context::with_timeout(Duration::ZERO);

		let err = client(&transport).games(&ctx, ROBIN).unwrap_err();

		assert!(matches!(
			err,
			Error::Transport(TransportError::DeadlineExceeded)
		));
		assert!(err.is_cancelled());
		assert_eq!(transport.round_trips(), 0);
	}

	#[test]
	fn test_cancel_during_round_trip_skips_decode() {
		// the body would fail to decode, so a decode error here would mean we read it anyway
		let transport = MockTransport::new().reply_then("not json", |ctx| ctx.cancel());

		let err = client(&transport)
			.players(&Context::background(), &[ROBIN])
			.unwrap_err();

		assert!(matches!(err, Error::Transport(TransportError::Cancelled)));
	}

	#[test]
	fn test_cancel_between_calls_skips_profile_lookup() {
		let transport = MockTransport::new()
			.reply(include_str!("fixtures/api-responses/get-friend-list-1.json"))
			.reply_after(
				|ctx| {
					let ctx = ctx.clone();
					thread::spawn(move || ctx.cancel()).join().unwrap();
				},
				include_str!("fixtures/api-responses/get-player-summaries-2.json"),
			);

		let err = client(&transport)
			.friends(&Context::background(), ROBIN)
			.unwrap_err();

		assert!(matches!(err, Error::Transport(TransportError::Cancelled)));
		assert_eq!(transport.round_trips(), 1);
		assert_eq!(
			transport.sent()[0].path(),
			"/ISteamUser/GetFriendList/v0001"
		);
	}

	#[test]
	fn test_cancel_during_friend_list_skips_profile_lookup() {
		let transport = MockTransport::new().reply_then(
			include_str!("fixtures/api-responses/get-friend-list-1.json"),
			|ctx| ctx.cancel(),
		);

		let err = client(&transport)
			.friends(&Context::background(), ROBIN)
			.unwrap_err();

		assert!(matches!(err, Error::Transport(TransportError::Cancelled)));
		assert_eq!(transport.round_trips(), 1);
	}
}
