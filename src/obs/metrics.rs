// self
use crate::{obs::RequestOutcome, transport::Endpoint};

/// Counts a completed call against `endpoint`.
pub fn record_request(endpoint: Endpoint, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"applemaps_server_request_total",
		"endpoint" => endpoint.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (endpoint, outcome);
}

/// Counts a signing-credential replacement.
pub fn record_credential_rotation() {
	#[cfg(feature = "metrics")]
	metrics::counter!("applemaps_server_credential_rotation_total").increment(1);
}
