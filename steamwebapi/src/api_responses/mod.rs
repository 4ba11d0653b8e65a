mod i_player_service;
mod i_steam_user;

pub use i_player_service::*;
pub use i_steam_user::*;

use serde::{Deserialize, Serialize};

/// The envelope used by most Steam Web API methods, which nest their payload under `response`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamApiResponse<T> {
	pub response: T,
}
