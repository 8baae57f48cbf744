//! # Conditional Debug Logger
//!
//! Leveled, category-gated diagnostic logging for game-server resources.
//! Every call is filtered against a live configuration (global switch,
//! per-category switch, minimum severity), formatted with the resource's
//! identity and an ISO-8601 UTC timestamp, and routed to an output stream
//! class chosen by severity.
//!
//! ## Key Types
//!
//! - [`DebugLogger`] - the filtering/formatting/routing unit
//! - [`ConfigHandle`] - live, shared configuration read on every call
//! - [`LogLevel`] / [`LogModule`] - closed severity and category sets
//! - [`LogValue`] - loosely-typed extra values appended to a message
//! - [`LogSink`] / [`StdStreams`] / [`MemorySink`] - output destinations
//!
//! ## Design Principles
//!
//! - **Total operations**: logging never fails; a missing or unreadable
//!   configuration suppresses output instead of raising an error
//! - **No hidden globals**: the composition root constructs the logger
//!   and passes it by handle; configuration changes flow through the
//!   shared [`ConfigHandle`]
//! - **One write per call**: no buffering or batching

pub mod config;
pub mod level;
pub mod logger;
pub mod sink;
pub mod value;

pub use config::{ConfigHandle, DebugConfig, ModuleToggles};
pub use level::{LogLevel, LogModule};
pub use logger::DebugLogger;
pub use sink::{LogSink, LogStream, MemorySink, StdStreams};
pub use value::LogValue;
