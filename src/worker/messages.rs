//! Plugin ↔ worker protocol.
//!
//! Messages are JSON-encoded and carry an optional [`TraceContext`] so spans on
//! the worker thread join the trace that issued the request.

use crate::domain::PortfolioRecord;
use serde::{Deserialize, Serialize};

/// Trace and parent span ids of the requesting span, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    pub trace_id: String,
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the active OpenTelemetry span, if it is valid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Requests from the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the catalog from `path`, or the built-in sample when `None`.
    LoadCatalog {
        path: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// `LoadCatalog` tagged with the current trace context.
    #[must_use]
    pub fn load_catalog(path: Option<String>) -> Self {
        Self::LoadCatalog { path, trace_context: TraceContext::from_current() }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Replies from the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The whole collection and its tag menu.
    CatalogLoaded {
        records: Vec<PortfolioRecord>,
        tags: Vec<String>,
    },

    Error { message: String },
}
