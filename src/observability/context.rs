//! Trace context propagation through web request round trips.
//!
//! A `web_request` leaves the plugin in one `update` call and its result comes
//! back in a later one, so the span that issued the request is long gone when
//! the response is handled. The trace and span IDs are written into the
//! request's context map, which Zellij echoes back untouched, and re-attached
//! as the remote parent of the response handling span.

use std::collections::BTreeMap;

const TRACE_ID_KEY: &str = "zshort.trace_id";
const PARENT_SPAN_ID_KEY: &str = "zshort.parent_span_id";

/// Trace and parent span IDs captured when a request was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a 32-digit hex string.
    pub trace_id: String,

    /// Span ID of the issuing span as a 16-digit hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current `tracing` span.
    ///
    /// Returns `None` when no valid span context exists, which is the case
    /// whenever tracing was not initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Writes the IDs into a request context map.
    pub fn write_to(&self, map: &mut BTreeMap<String, String>) {
        map.insert(TRACE_ID_KEY.to_string(), self.trace_id.clone());
        map.insert(PARENT_SPAN_ID_KEY.to_string(), self.parent_span_id.clone());
    }

    /// Reads the IDs back from a response context map.
    #[must_use]
    pub fn read_from(map: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: map.get(TRACE_ID_KEY)?.clone(),
            parent_span_id: map.get(PARENT_SPAN_ID_KEY)?.clone(),
        })
    }

    /// OpenTelemetry context whose active span is the remote issuing span.
    ///
    /// Returns `None` if either ID is not valid hex.
    #[must_use]
    pub fn remote_parent(&self) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;
        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(opentelemetry::Context::new().with_remote_span_context(span_context))
    }

    /// Makes the issuing span the OpenTelemetry parent of `span`.
    ///
    /// `tracing-opentelemetry` prefers the contextual `tracing` parent over
    /// anything attached to the OpenTelemetry context, so `span` should be
    /// created with `parent: None` for this to take effect. Returns `false`
    /// when the IDs are invalid and `span` keeps its own trace.
    pub fn adopt(&self, span: &tracing::Span) -> bool {
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        match self.remote_parent() {
            Some(parent) => {
                span.set_parent(parent);
                true
            }
            None => false,
        }
    }
}

/// Runs `f` under a subscriber with a real OpenTelemetry layer.
#[cfg(test)]
pub(crate) fn with_test_tracer<R>(f: impl FnOnce() -> R) -> R {
    use opentelemetry::trace::TracerProvider as _;
    use tracing_subscriber::layer::SubscriberExt;

    let provider = opentelemetry_sdk::trace::TracerProvider::builder().build();
    let subscriber =
        tracing_subscriber::registry().with(tracing_opentelemetry::layer().with_tracer(provider.tracer("zshort-test")));
    tracing::subscriber::with_default(subscriber, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_context_without_subscriber() {
        assert!(TraceContext::from_current().is_none());
    }

    #[test]
    fn map_round_trip() {
        let context = TraceContext {
            trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".into(),
            parent_span_id: "00f067aa0ba902b7".into(),
        };
        let mut map = BTreeMap::new();
        context.write_to(&mut map);
        assert_eq!(TraceContext::read_from(&map), Some(context));
    }

    #[test]
    fn partial_map_yields_nothing() {
        let mut map = BTreeMap::new();
        map.insert(TRACE_ID_KEY.to_string(), "4bf92f3577b34da6a3ce929d0e0e4736".to_string());
        assert!(TraceContext::read_from(&map).is_none());
    }

    fn remote() -> TraceContext {
        TraceContext {
            trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".into(),
            parent_span_id: "00f067aa0ba902b7".into(),
        }
    }

    fn trace_id_of(span: &tracing::Span) -> String {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        format!("{:032x}", span.context().span().span_context().trace_id())
    }

    #[test]
    fn invalid_hex_is_not_adopted() {
        let context = TraceContext {
            trace_id: "zz".into(),
            parent_span_id: "00f067aa0ba902b7".into(),
        };
        assert!(context.remote_parent().is_none());
        assert!(!context.adopt(&tracing::Span::none()));
    }

    #[test]
    fn captured_inside_a_span() {
        with_test_tracer(|| {
            let span = tracing::info_span!("issue_request");
            let _guard = span.enter();

            let captured = TraceContext::from_current().unwrap();
            assert_eq!(captured.trace_id, trace_id_of(&span));
            assert_eq!(captured.parent_span_id.len(), 16);
        });
    }

    #[test]
    fn adopted_span_joins_the_remote_trace_despite_an_entered_span() {
        with_test_tracer(|| {
            let update = tracing::info_span!("plugin_update");
            let _guard = update.enter();

            let span = tracing::debug_span!(parent: None, "handle_response");
            assert!(remote().adopt(&span));

            assert_eq!(trace_id_of(&span), remote().trace_id);
            assert_ne!(trace_id_of(&update), remote().trace_id);
        });
    }
}
