//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → folio-otlp.json
//! ```
//!
//! Spans are written as one OTLP/JSON document per line to
//! `~/.local/share/zellij/folio/folio-otlp.json`, rotated at 10 MB with three
//! numbered backups. The level comes from the `trace_level` plugin option and
//! defaults to `info`.
//!
//! ```no_run
//! use folio::observability::init_tracing;
//! use folio::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("plugin started");
//! ```

mod exporter;
mod init;
mod otlp;
mod rotating_file;

pub use init::{init_tracing, TRACE_FILE_NAME};
pub use rotating_file::{RotatingFile, RotationPolicy};
