//! # Select Builder
//!
//! Assembles `SELECT` statements from a fixed table, equality predicates,
//! optional filter slots and an ordering.

use std::fmt;

use serde::Serialize;

use super::param::SqlParam;

/// Tables exposed by the catalog. Names are fixed, never taken from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Restaurants,
    Dishes,
}

impl Table {
    /// Get the SQL table name
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Restaurants => "restaurants",
            Table::Dishes => "dishes",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// A single equality condition on one column
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Column to compare
    pub column: &'static str,

    /// Value bound to the placeholder
    pub value: SqlParam,
}

impl Predicate {
    /// Create an equality predicate
    pub fn eq(column: &'static str, value: impl Into<SqlParam>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

/// A sparse set of optional predicates, kept in declaration order.
///
/// Each slot is declared by the caller; slots without a value add no
/// condition.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    slots: Vec<(&'static str, Option<SqlParam>)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a filter slot
    pub fn optional<V: Into<SqlParam>>(mut self, column: &'static str, value: Option<V>) -> Self {
        self.slots.push((column, value.map(Into::into)));
        self
    }

    /// Present predicates, in declaration order
    pub fn predicates(&self) -> impl Iterator<Item = Predicate> + '_ {
        self.slots.iter().filter_map(|(column, value)| {
            value.as_ref().map(|v| Predicate::eq(*column, v.clone()))
        })
    }
}

/// A rendered statement and its positional parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Builder for `SELECT * FROM <table>` statements
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    table: Table,
    predicates: Vec<Predicate>,
    filtered: bool,
    order: Option<(&'static str, Direction)>,
}

impl SelectBuilder {
    /// Start a select over every column of `table`
    pub fn select(table: Table) -> Self {
        Self {
            table,
            predicates: Vec::new(),
            filtered: false,
            order: None,
        }
    }

    /// Add a mandatory equality condition
    pub fn where_eq(mut self, column: &'static str, value: impl Into<SqlParam>) -> Self {
        self.predicates.push(Predicate::eq(column, value));
        self
    }

    /// Apply a filter set.
    ///
    /// Filtered statements always carry the `1=1` base condition, so an
    /// empty filter set still renders a `WHERE` clause matching every row.
    pub fn filter(mut self, filters: &FilterSet) -> Self {
        self.filtered = true;
        self.predicates.extend(filters.predicates());
        self
    }

    /// Order the result by one column
    pub fn order_by(mut self, column: &'static str, direction: Direction) -> Self {
        self.order = Some((column, direction));
        self
    }

    /// Render the statement
    pub fn build(self) -> Statement {
        let mut sql = format!("SELECT * FROM {}", self.table);
        let mut params = Vec::with_capacity(self.predicates.len());

        let mut conditions: Vec<String> = Vec::with_capacity(self.predicates.len() + 1);
        if self.filtered {
            conditions.push("1=1".to_string());
        }
        for predicate in self.predicates {
            conditions.push(format!("{} = ?", predicate.column));
            params.push(predicate.value);
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        if let Some((column, direction)) = self.order {
            sql.push_str(&format!(" ORDER BY {} {}", column, direction.as_str()));
        }

        Statement { sql, params }
    }
}
