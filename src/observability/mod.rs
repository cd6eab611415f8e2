//! Observability for dinedb
//!
//! Structured JSON logging, one event per line.
//!
//! ```ignore
//! use dinedb::observability::Logger;
//!
//! Logger::info("SERVER_START", &[("addr", "0.0.0.0:3010")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};

#[cfg(test)]
pub use logger::capture;
