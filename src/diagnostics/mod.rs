// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module: the crate's event log.
//!
//! Every notification lifecycle transition (raised, paused, resumed,
//! auto-dismissed, dismissed, persisted, cleared) is sent through a
//! [`DiagnosticsHandle`] to a [`DiagnosticsCollector`], which keeps the most
//! recent events in a memory-bounded ring buffer and exports them as a JSON
//! report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event; [`DiagnosticEventKind`] is its payload
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`DiagnosticReport`]: Serialized export format

mod buffer;
mod collector;
mod events;
mod export;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, NotificationEvent};
pub use export::{default_export_directory, generate_default_filename, ExportError};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
