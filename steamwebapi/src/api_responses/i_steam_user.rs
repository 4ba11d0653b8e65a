use serde::{Deserialize, Serialize};

/// A player profile, as returned by `/ISteamUser/GetPlayerSummaries/v0002`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
	/// 64 bit SteamID, as a string
	pub steamid: String,
	/// Display name
	#[serde(rename = "personaname")]
	pub persona_name: String,
	/// 32x32 avatar
	pub avatar: String,
	/// 64x64 avatar
	#[serde(rename = "avatarmedium")]
	pub avatar_medium: String,
	/// 184x184 avatar
	#[serde(rename = "avatarfull")]
	pub avatar_full: String,
	#[serde(default, rename = "profileurl", skip_serializing_if = "Option::is_none")]
	pub profile_url: Option<String>,
	/// 0 when offline, or when the profile is private
	#[serde(default, rename = "personastate")]
	pub persona_state: u8,
	/// 1 for private, 3 for public
	#[serde(
		default,
		rename = "communityvisibilitystate",
		skip_serializing_if = "Option::is_none"
	)]
	pub community_visibility_state: Option<u8>,
	#[serde(default, rename = "realname", skip_serializing_if = "Option::is_none")]
	pub real_name: Option<String>,
	#[serde(default, rename = "loccountrycode", skip_serializing_if = "Option::is_none")]
	pub country_code: Option<String>,
	/// Unix timestamp of account creation
	#[serde(default, rename = "timecreated", skip_serializing_if = "Option::is_none")]
	pub time_created: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayersList {
	pub players: Vec<Player>,
}

/// A reference to another player, as returned by `/ISteamUser/GetFriendList/v0001`
///
/// Carries no profile data, use the steamid to look up the [`Player`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
	pub steamid: String,
	#[serde(default)]
	pub relationship: String,
	/// Unix timestamp of when the friendship began
	pub friend_since: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsList {
	pub friends: Vec<Friend>,
}

/// `GetFriendList` is the odd one out and nests its payload under `friendslist` instead of `response`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsListResponse {
	#[serde(rename = "friendslist")]
	pub friends_list: FriendsList,
}
