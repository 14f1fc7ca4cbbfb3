//! Span exporter writing OTLP JSON lines to a rotating file.

use super::otlp;
use super::rotating_file::{RotatingFile, RotationPolicy};
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    scope: &'static str,
    shut_down: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.shut_down {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = otlp::encode_batch(&self.resource, self.scope, &batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports every finished span immediately to `path`.
pub fn file_tracer_provider(
    path: PathBuf,
    policy: RotationPolicy,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(path, policy),
        resource: resource.clone(),
        scope,
        shut_down: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "Folio")]);
        let provider =
            file_tracer_provider(path.clone(), RotationPolicy::default(), resource, "Folio");

        provider.tracer("test").in_span("load_catalog", |_cx| {});

        let contents = std::fs::read_to_string(&path).unwrap();
        let line: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &line["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "load_catalog");
        assert_eq!(span["traceId"].as_str().unwrap().len(), 32);
    }
}
