#[cfg(test)]
pub(crate) mod mock;
pub mod webapi;

use std::io::Read;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
pub use webapi::WebApiTransport;

use crate::{context::Context, errors::Error};

/// Issues one outbound request per call.
///
/// Implementations must call [`Context::check`] before opening a connection, and again once the
/// response has arrived so that a cancellation raised mid-flight is honoured before the body is
/// handed back.
pub trait Transport {
	fn send_request(&self, ctx: &Context, url: Url) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	#[error("The request was cancelled")]
	Cancelled,
	#[error("The request deadline elapsed before a response was received")]
	DeadlineExceeded,
	#[error("NetworkFailure: Transport failed to make request: {0}")]
	NetworkFailure(#[from] reqwest::Error),
	#[error("Failed to read response body: {0}")]
	BodyRead(#[source] std::io::Error),
	#[error("Unauthorized: the API key is invalid or the requested data is private")]
	Unauthorized,
	#[error("Too many requests")]
	RateLimited,
	#[error("Steam returned an unexpected status code: {0}")]
	BadStatusCode(StatusCode),
	#[error("The request was aborted before a response was received")]
	Aborted,
}

impl TransportError {
	/// Classifies an I/O error raised while reading a response body.
	///
	/// reqwest reports its per-request timeout firing mid-body as an I/O error wrapping a
	/// `reqwest::Error`, so that case is unwrapped and reported as a deadline.
	pub(crate) fn from_body_error(err: std::io::Error) -> Self {
		let timed_out = err.kind() == std::io::ErrorKind::TimedOut
			|| err
				.get_ref()
				.and_then(|inner| inner.downcast_ref::<reqwest::Error>())
				.map_or(false, reqwest::Error::is_timeout);
		if timed_out {
			TransportError::DeadlineExceeded
		} else {
			TransportError::BodyRead(err)
		}
	}
}

/// A response whose body has not been read yet.
///
/// Owns the body reader, so the underlying connection is released when this value is dropped,
/// whichever way the caller's processing exits.
pub struct RawResponse {
	status: StatusCode,
	body: Box<dyn Read + Send>,
}

impl RawResponse {
	pub fn new(status: StatusCode, body: impl Read + Send + 'static) -> Self {
		Self {
			status,
			body: Box::new(body),
		}
	}

	pub fn status(&self) -> StatusCode {
		self.status
	}

	/// Map non-success status codes to the appropriate [`TransportError`].
	pub fn error_for_status(&self) -> Result<(), TransportError> {
		match self.status {
			s if s.is_success() => Ok(()),
			StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(TransportError::Unauthorized),
			StatusCode::TOO_MANY_REQUESTS => Err(TransportError::RateLimited),
			s => Err(TransportError::BadStatusCode(s)),
		}
	}

	/// Consumes the response and deserializes its body as `R`.
	///
	/// `endpoint` is only used to give decode errors some context.
	pub fn decode<R: DeserializeOwned>(self, endpoint: &str) -> Result<R, Error> {
		self.error_for_status()?;

		let mut deser = serde_json::Deserializer::from_reader(self.body);
		serde_path_to_error::deserialize(&mut deser).map_err(|err| {
			if err.inner().is_io() {
				let io = std::io::Error::from(err.into_inner());
				return Error::Transport(TransportError::from_body_error(io));
			}
			Error::Decode {
				endpoint: endpoint.to_owned(),
				source: err,
			}
		})
	}
}

impl std::fmt::Debug for RawResponse {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RawResponse")
			.field("status", &self.status)
			.finish_non_exhaustive()
	}
}
