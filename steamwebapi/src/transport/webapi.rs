use std::{
	io::{Cursor, Read},
	sync::mpsc::{self, RecvTimeoutError},
	thread,
	time::Duration,
};

use log::*;
use reqwest::{blocking::RequestBuilder, StatusCode, Url};

use super::{RawResponse, Transport, TransportError};
use crate::context::Context;

/// How often a waiting request looks at its context.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// [`Transport`] backed by a blocking `reqwest` client.
///
/// Cloning is cheap and clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct WebApiTransport {
	client: reqwest::blocking::Client,
}

impl WebApiTransport {
	pub fn new() -> WebApiTransport {
		WebApiTransport {
			client: reqwest::blocking::Client::new(),
		}
	}
}

impl Default for WebApiTransport {
	fn default() -> Self {
		Self::new()
	}
}

impl Transport for WebApiTransport {
	fn send_request(&self, ctx: &Context, url: Url) -> Result<RawResponse, TransportError> {
		ctx.check()?;

		// The query string carries the api key, only log the path.
		debug!("HTTP Request: GET {}", url.path());
		let mut req = self.client.get(url);
		if let Some(remaining) = ctx.remaining() {
			req = req.timeout(remaining);
		}

		// The round trip runs on its own thread so that the context can interrupt it. Once we
		// stop waiting, the worker's result is dropped along with the connection.
		let (tx, rx) = mpsc::channel();
		thread::spawn(move || {
			let _ = tx.send(fetch(req));
		});

		let (status, body) = loop {
			match rx.recv_timeout(POLL_INTERVAL) {
				Ok(result) => break result?,
				Err(RecvTimeoutError::Timeout) => ctx.check()?,
				Err(RecvTimeoutError::Disconnected) => return Err(TransportError::Aborted),
			}
		};
		debug!("Response HTTP status: {}", status);

		// A cancellation that raced the round trip discards the response unread.
		ctx.check()?;

		Ok(RawResponse::new(status, Cursor::new(body)))
	}
}

fn fetch(req: RequestBuilder) -> Result<(StatusCode, Vec<u8>), TransportError> {
	let mut resp = req.send().map_err(|err| {
		if err.is_timeout() {
			TransportError::DeadlineExceeded
		} else {
			TransportError::NetworkFailure(err.without_url())
		}
	})?;

	let status = resp.status();
	let mut body = Vec::new();
	resp.read_to_end(&mut body)
		.map_err(TransportError::from_body_error)?;
	Ok((status, body))
}
