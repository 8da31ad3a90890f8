//! Tracing with file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → OTLP JSON lines
//! ```
//!
//! The sandbox cannot reach a collector, so spans land in a size-rotated file
//! under the plugin data directory. Web request round trips carry a
//! [`TraceContext`] in their context map so a response is handled inside the
//! trace that issued it.
//!
//! The filter comes from the `trace_level` plugin option (default `info`) and
//! accepts full `EnvFilter` directives such as `zshort::app=debug`.

pub mod context;
mod exporter;
mod file_writer;
mod init;

pub use context::TraceContext;
pub use init::{init_tracing, TRACE_FILE_NAME};
