use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::transport::TransportError;

/// Execution context for a single logical operation.
///
/// Carries an optional deadline and a cancellation token. Clones share the same token, so a
/// `Context` handed to a call can be cancelled from another thread while the call is in flight.
/// The transport checks the context before every round trip and again once the response
/// headers have arrived.
#[derive(Debug, Clone, Default)]
pub struct Context {
	deadline: Option<Instant>,
	token: CancellationToken,
}

impl Context {
	/// A context that is never cancelled and has no deadline.
	pub fn background() -> Self {
		Self::default()
	}

	pub fn with_timeout(timeout: Duration) -> Self {
		Self::with_deadline(Instant::now() + timeout)
	}

	pub fn with_deadline(deadline: Instant) -> Self {
		Self {
			deadline: Some(deadline),
			token: CancellationToken::new(),
		}
	}

	/// Ties this context to an existing token, eg. one shared with a shutdown handler.
	#[must_use]
	pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
		self.token = token;
		self
	}

	pub fn cancellation_token(&self) -> &CancellationToken {
		&self.token
	}

	pub fn cancel(&self) {
		self.token.cancel();
	}

	pub fn is_cancelled(&self) -> bool {
		self.token.is_cancelled()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Time left until the deadline. `Some(Duration::ZERO)` once it has passed.
	pub fn remaining(&self) -> Option<Duration> {
		self.deadline
			.map(|deadline| deadline.saturating_duration_since(Instant::now()))
	}

	/// Fails if the context has been cancelled or its deadline has elapsed.
	///
	/// Cancellation wins over an expired deadline.
	pub fn check(&self) -> Result<(), TransportError> {
		if self.is_cancelled() {
			return Err(TransportError::Cancelled);
		}
		if let Some(remaining) = self.remaining() {
			if remaining.is_zero() {
				return Err(TransportError::DeadlineExceeded);
			}
		}
		Ok(())
	}
}
