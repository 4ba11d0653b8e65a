use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to build request url: {0}")]
	InvalidRequest(#[from] url::ParseError),
	#[error(transparent)]
	Transport(#[from] TransportError),
	#[error("Failed to parse {endpoint} response body at `{}`: {}", .source.path(), .source.inner())]
	Decode {
		endpoint: String,
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	#[error("No player found for steamid {0}")]
	PlayerNotFound(String),
}

impl Error {
	/// The server could not be reached, or did not answer successfully.
	pub fn is_transport(&self) -> bool {
		matches!(self, Error::Transport(_))
	}

	/// The server answered with something that doesn't match the expected envelope.
	pub fn is_decode(&self) -> bool {
		matches!(self, Error::Decode { .. })
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, Error::PlayerNotFound(_))
	}

	pub fn is_cancelled(&self) -> bool {
		matches!(
			self,
			Error::Transport(TransportError::Cancelled | TransportError::DeadlineExceeded)
		)
	}
}
