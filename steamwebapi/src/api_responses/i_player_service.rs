use serde::{Deserialize, Serialize};

const APP_IMAGE_BASE: &str = "https://media.steampowered.com/steamcommunity/public/images/apps";

/// An owned game, as returned by `/IPlayerService/GetOwnedGames/v0001`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
	pub appid: u32,
	/// Only present when `include_appinfo` is set, which it always is.
	pub name: String,
	/// Total playtime, in minutes
	pub playtime_forever: u32,
	/// Playtime in the last two weeks, in minutes. Absent if the game was not played.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub playtime_2weeks: Option<u32>,
	/// Image hash, see [`Game::icon_url`]
	#[serde(default)]
	pub img_icon_url: String,
	#[serde(default)]
	pub img_logo_url: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rtime_last_played: Option<u64>,
}

impl Game {
	/// Full url of the game's icon, if Steam gave us one.
	pub fn icon_url(&self) -> Option<String> {
		image_url(self.appid, &self.img_icon_url)
	}

	pub fn logo_url(&self) -> Option<String> {
		image_url(self.appid, &self.img_logo_url)
	}
}

fn image_url(appid: u32, hash: &str) -> Option<String> {
	if hash.is_empty() {
		return None;
	}
	Some(format!("{}/{}/{}.jpg", APP_IMAGE_BASE, appid, hash))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesList {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub game_count: Option<u32>,
	pub games: Vec<Game>,
}
