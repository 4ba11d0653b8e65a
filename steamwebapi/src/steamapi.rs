pub mod player;
pub mod user;

use std::collections::BTreeMap;

use log::*;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

pub use self::player::PlayerClient;
pub use self::user::UserClient;
use crate::{context::Context, errors::Error, transport::Transport};

pub const STEAM_API_BASE: &str = "https://api.steampowered.com";

/// A single Steam Web API call, eg. `ISteamUser/GetPlayerSummaries/v0002`.
///
/// Query parameters are kept sorted by name so the same request always produces the same url.
/// The api key is only exposed while building the url.
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
	base: &'a str,
	service: &'static str,
	method: &'static str,
	version: u32,
	key: &'a SecretString,
	params: BTreeMap<&'static str, String>,
}

impl<'a> ApiRequest<'a> {
	pub fn new(
		service: &'static str,
		method: &'static str,
		version: u32,
		key: &'a SecretString,
	) -> Self {
		Self {
			base: STEAM_API_BASE,
			service,
			method,
			version,
			key,
			params: BTreeMap::new(),
		}
	}

	#[must_use]
	pub fn with_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.params.insert(name, value.into());
		self
	}

	#[cfg(test)]
	pub(crate) fn with_base(mut self, base: &'a str) -> Self {
		self.base = base;
		self
	}

	/// `{service}/{method}/v{version}`, safe to log.
	pub fn endpoint(&self) -> String {
		format!("{}/{}/v{:04}", self.service, self.method, self.version)
	}

	pub fn build_url(&self) -> Result<Url, url::ParseError> {
		let mut params: BTreeMap<&str, &str> = self
			.params
			.iter()
			.map(|(name, value)| (*name, value.as_str()))
			.collect();
		params.insert("key", self.key.expose_secret());

		Url::parse_with_params(
			format!("{}/{}", self.base.trim_end_matches('/'), self.endpoint()).as_str(),
			params,
		)
	}
}

/// Builds the url for `req`, sends it, and decodes the body as `R`.
pub(crate) fn call<T, R>(transport: &T, ctx: &Context, req: ApiRequest) -> Result<R, Error>
where
	T: Transport,
	R: DeserializeOwned,
{
	let endpoint = req.endpoint();
	let url = req.build_url()?;
	trace!("sending request to {}", endpoint);
	let resp = transport.send_request(ctx, url)?;
	resp.decode(&endpoint)
}
