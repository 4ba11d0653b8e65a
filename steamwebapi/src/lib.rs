//! A small, strongly-typed client for the parts of the Steam Web API that deal with players:
//! profile summaries, friend lists, and owned games.
//!
//! ```no_run
//! use steamwebapi::{Context, SteamWebClient};
//! use std::time::Duration;
//!
//! let client = SteamWebClient::new("YOUR_API_KEY");
//! let ctx = Context::with_timeout(Duration::from_secs(10));
//! for friend in client.friends(&ctx, "76561197960435530")? {
//! 	println!("{}", friend.persona_name);
//! }
//! # Ok::<(), steamwebapi::Error>(())
//! ```

pub mod api_responses;
mod client;
pub mod context;
pub mod errors;
pub mod steamapi;
pub mod transport;

pub use api_responses::{Friend, Game, Player};
pub use client::SteamWebClient;
pub use context::Context;
pub use errors::Error;
pub use transport::TransportError;
