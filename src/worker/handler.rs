//! Catalog loading on the worker thread.
//!
//! [`CatalogWorker`] does the work and the JSON framing; the plugin binary owns
//! the Zellij worker registration and posts the encoded reply back.

use crate::catalog::{self, RecordSource};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::atomic::{AtomicBool, Ordering};

static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Worker-side state. Sources are built per request, so there is none yet.
#[derive(Debug, Default)]
pub struct CatalogWorker;

impl CatalogWorker {
    /// Handles one request.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { path, .. } => {
                Self::load(catalog::source_for(path.as_deref()).as_ref())
            }
        }
    }

    /// Decodes a request payload, handles it and encodes the reply.
    ///
    /// Returns `None` when the payload is not a valid request or the reply
    /// cannot be encoded; both are logged.
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let message: WorkerMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                return None;
            }
        };

        let response = self.handle_message(message);
        serde_json::to_string(&response)
            .map_err(|e| tracing::warn!(error = %e, "failed to serialize worker response"))
            .ok()
    }

    fn load(source: &dyn RecordSource) -> WorkerResponse {
        let description = source.describe();
        match source.load() {
            Ok(catalog) => {
                let tags = catalog.tag_options();
                tracing::info!(
                    source = %description,
                    records = catalog.records.len(),
                    tags = tags.len(),
                    "catalog loaded"
                );
                WorkerResponse::CatalogLoaded { records: catalog.records, tags }
            }
            Err(e) => {
                tracing::warn!(source = %description, error = %e, "catalog load failed");
                WorkerResponse::Error { message: format!("{description}: {e}") }
            }
        }
    }
}

/// Re-parents this thread's spans under the requesting span. The guard must
/// live for the duration of the request.
fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
    use opentelemetry::trace::{
        SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
    };

    let trace_context = message.trace_context()?;
    let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
    let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

    let span_context =
        SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
    Some(
        opentelemetry::Context::current()
            .with_remote_span_context(span_context)
            .attach(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::TraceContext;
    use std::io::Write;

    #[test]
    fn loads_builtin_sample_without_path() {
        let response = CatalogWorker.handle_message(WorkerMessage::LoadCatalog {
            path: None,
            trace_context: None,
        });
        match response {
            WorkerResponse::CatalogLoaded { records, tags } => {
                assert!(!records.is_empty());
                assert!(tags.iter().any(|t| t == "Vue"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn loads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":7,"author":"Kai","techStack":["Astro"]}}]"#).unwrap();

        let response = CatalogWorker.handle_message(WorkerMessage::LoadCatalog {
            path: Some(file.path().display().to_string()),
            trace_context: None,
        });
        assert_eq!(
            response,
            WorkerResponse::CatalogLoaded {
                records: vec![crate::domain::PortfolioRecord::new("7", "Kai", "").with_tech(["Astro"])],
                tags: vec!["Astro".to_string()],
            }
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let response = CatalogWorker.handle_message(WorkerMessage::LoadCatalog {
            path: Some("/definitely/not/here.json".to_string()),
            trace_context: None,
        });
        assert!(matches!(response, WorkerResponse::Error { message } if message.contains("here.json")));
    }

    #[test]
    fn malformed_trace_context_is_ignored() {
        let message = WorkerMessage::LoadCatalog {
            path: None,
            trace_context: Some(TraceContext {
                trace_id: "zz".to_string(),
                parent_span_id: "zz".to_string(),
            }),
        };
        assert!(attach_parent_trace_context(&message).is_none());
        assert!(matches!(CatalogWorker.handle_message(message), WorkerResponse::CatalogLoaded { .. }));
    }

    #[test]
    fn payload_round_trip() {
        let payload = serde_json::to_string(&WorkerMessage::LoadCatalog {
            path: None,
            trace_context: None,
        })
        .unwrap();
        let reply = CatalogWorker.handle_payload(&payload).unwrap();
        let response: WorkerResponse = serde_json::from_str(&reply).unwrap();
        assert!(matches!(response, WorkerResponse::CatalogLoaded { .. }));

        assert!(CatalogWorker.handle_payload("not json").is_none());
    }
}
