//! # Query Construction
//!
//! Turns sparse, optional equality predicates into parameterized SQL.
//!
//! Values never reach the statement text. Every value becomes a `?`
//! placeholder and is carried alongside the SQL in [`Statement::params`],
//! in the same left-to-right order as the placeholders.

pub mod builder;
pub mod param;

pub use builder::{Direction, FilterSet, Predicate, SelectBuilder, Statement, Table};
pub use param::SqlParam;
