//! dinedb - a read-only HTTP catalog of restaurants and dishes
//!
//! Requests flow handler → fetcher → query builder → storage, and results
//! flow back through a single response contract.

pub mod catalog;
pub mod cli;
pub mod observability;
pub mod query;
pub mod rest_api;
pub mod storage;
