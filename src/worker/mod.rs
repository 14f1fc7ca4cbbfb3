//! Background worker that loads the catalog off the render thread.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: [`CatalogWorker`], the request handling

pub mod handler;
pub mod messages;

pub use handler::CatalogWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
