// self
use crate::{
	_prelude::*,
	obs::{self, RequestOutcome},
	transport::Endpoint,
};

/// Future returned by [`RequestSpan::instrument`]; the plain future when tracing is disabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`RequestSpan::instrument`]; the plain future when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// Observation scope of one endpoint call or token renewal.
///
/// [`finish`](Self::finish) classifies the result once, writing it to the span's `outcome`
/// field and to the request counter.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	endpoint: Endpoint,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Opens a span for `endpoint`; `stage` names the client step (`exec`, `renew`).
	pub fn new(endpoint: Endpoint, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		let span = tracing::info_span!(
			"applemaps_server.request",
			endpoint = endpoint.as_str(),
			stage,
			outcome = tracing::field::Empty
		);
		#[cfg(not(feature = "tracing"))]
		let _ = stage;

		Self {
			endpoint,
			#[cfg(feature = "tracing")]
			span,
		}
	}

	/// Runs `fut` inside the span.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			tracing::Instrument::instrument(fut, self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Records the outcome of `result` and hands back its classification.
	pub fn finish<T>(&self, result: &Result<T>) -> RequestOutcome {
		let outcome = RequestOutcome::of(result);

		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());

			if let Err(e) = result {
				self.span.in_scope(|| tracing::debug!(error = %e, "request failed"));
			}
		}

		obs::record_request(self.endpoint, outcome);

		outcome
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn finish_reports_the_classified_outcome() {
		let span = RequestSpan::new(Endpoint::Etas, "exec");

		assert_eq!(span.finish(&Ok::<_, Error>(())), RequestOutcome::Success);
		assert_eq!(span.finish(&Err::<(), _>(Error::EmptyDestinations)), RequestOutcome::Local);
	}

	#[tokio::test]
	async fn instrument_preserves_the_output() {
		let span = RequestSpan::new(Endpoint::Token, "renew");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
