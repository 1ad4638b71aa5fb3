//! Optional observability for endpoint calls and token renewals.
//!
//! # Feature Flags
//!
//! - `tracing` wraps each call in an `applemaps_server.request` span carrying `endpoint`,
//!   `stage`, and the final `outcome`.
//! - `metrics` increments `applemaps_server_request_total` once per completed call, labeled by
//!   `endpoint` and `outcome`, and `applemaps_server_credential_rotation_total` whenever the
//!   signing credential is replaced.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Classification of a completed call, used as the `outcome` label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// The call returned a decoded payload.
	Success,
	/// HTTP 401.
	Unauthorized,
	/// HTTP 400.
	BadRequest,
	/// HTTP 429.
	RateLimited,
	/// Any other non-success status.
	Remote,
	/// The body did not match the expected payload.
	Decode,
	/// The request never produced a response.
	Transport,
	/// Rejected locally before reaching the service.
	Local,
}
impl RequestOutcome {
	/// Classifies a call result.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Self::Success,
			Err(Error::Unauthorized) => Self::Unauthorized,
			Err(Error::BadRequest { .. }) => Self::BadRequest,
			Err(Error::RateLimited { .. }) => Self::RateLimited,
			Err(Error::Remote { .. }) => Self::Remote,
			Err(Error::Decode { .. }) => Self::Decode,
			Err(Error::Transport(_)) => Self::Transport,
			Err(Error::Config(_) | Error::Credential(_) | Error::EmptyDestinations) => Self::Local,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Unauthorized => "unauthorized",
			Self::BadRequest => "bad_request",
			Self::RateLimited => "rate_limited",
			Self::Remote => "remote",
			Self::Decode => "decode",
			Self::Transport => "transport",
			Self::Local => "local",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
