use std::{
	collections::VecDeque,
	sync::{Arc, Mutex},
};

use reqwest::{StatusCode, Url};

use super::{RawResponse, Transport, TransportError};
use crate::context::Context;

type HookFn = Box<dyn Fn(&Context) + Send>;

enum Hook {
	/// Runs before the context is checked, ie. before the round trip starts.
	BeforeSend(HookFn),
	/// Runs after the request is recorded, while the response is "in flight".
	InFlight(HookFn),
}

enum Reply {
	Body(StatusCode, &'static str),
	Error(fn() -> TransportError),
}

#[derive(Default)]
struct State {
	replies: VecDeque<(Reply, Option<Hook>)>,
	sent: Vec<Url>,
}

/// Replays canned responses in order and records every url that made it past the context check.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
	state: Arc<Mutex<State>>,
}

impl MockTransport {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn reply(self, body: &'static str) -> Self {
		self.reply_with_status(StatusCode::OK, body)
	}

	pub fn reply_with_status(self, status: StatusCode, body: &'static str) -> Self {
		self.push(Reply::Body(status, body), None)
	}

	pub fn fail(self, err: fn() -> TransportError) -> Self {
		self.push(Reply::Error(err), None)
	}

	/// Like [`MockTransport::reply`], but runs `hook` while the request is in flight.
	pub fn reply_then(self, body: &'static str, hook: impl Fn(&Context) + Send + 'static) -> Self {
		self.push(
			Reply::Body(StatusCode::OK, body),
			Some(Hook::InFlight(Box::new(hook))),
		)
	}

	/// Like [`MockTransport::reply`], but runs `hook` before the request is sent.
	pub fn reply_after(self, hook: impl Fn(&Context) + Send + 'static, body: &'static str) -> Self {
		self.push(
			Reply::Body(StatusCode::OK, body),
			Some(Hook::BeforeSend(Box::new(hook))),
		)
	}

	fn push(self, reply: Reply, hook: Option<Hook>) -> Self {
		self.state.lock().unwrap().replies.push_back((reply, hook));
		self
	}

	/// Urls of every round trip issued so far.
	pub fn sent(&self) -> Vec<Url> {
		self.state.lock().unwrap().sent.clone()
	}

	pub fn round_trips(&self) -> usize {
		self.state.lock().unwrap().sent.len()
	}
}

impl Transport for MockTransport {
	fn send_request(&self, ctx: &Context, url: Url) -> Result<RawResponse, TransportError> {
		let next = self.state.lock().unwrap().replies.pop_front();
		if let Some((_, Some(Hook::BeforeSend(hook)))) = &next {
			hook(ctx);
		}
		ctx.check()?;

		let (reply, hook) = next.unwrap_or_else(|| panic!("unexpected request: {}", url));
		self.state.lock().unwrap().sent.push(url);
		if let Some(Hook::InFlight(hook)) = &hook {
			hook(ctx);
		}

		match reply {
			Reply::Body(status, body) => {
				ctx.check()?;
				Ok(RawResponse::new(status, body.as_bytes()))
			}
			Reply::Error(err) => Err(err()),
		}
	}
}
