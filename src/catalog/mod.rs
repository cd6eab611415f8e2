//! # Catalog Fetchers
//!
//! One fetcher per query shape over the restaurant and dish tables. Each
//! fetcher builds a statement and makes exactly one storage call; storage
//! errors are returned untouched.

mod filters;

pub use filters::{dish, restaurant, DishFilters, RestaurantFilters};

use crate::query::{Direction, FilterSet, SelectBuilder, SqlParam, Table};
use crate::storage::{self, Row, SharedStorage, StorageResult};

/// Read-only access to the catalog
#[derive(Clone)]
pub struct Catalog {
    storage: SharedStorage,
}

impl Catalog {
    /// Create a catalog over an opened storage handle
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    // ==================
    // Query shapes
    // ==================

    async fn all(&self, table: Table) -> StorageResult<Vec<Row>> {
        storage::fetch_all(&self.storage, SelectBuilder::select(table).build()).await
    }

    async fn by_id(&self, table: Table, column: &'static str, id: SqlParam) -> StorageResult<Option<Row>> {
        let statement = SelectBuilder::select(table).where_eq(column, id).build();
        storage::fetch_one(&self.storage, statement).await
    }

    async fn by_field(
        &self,
        table: Table,
        column: &'static str,
        value: SqlParam,
    ) -> StorageResult<Vec<Row>> {
        let statement = SelectBuilder::select(table).where_eq(column, value).build();
        storage::fetch_all(&self.storage, statement).await
    }

    async fn by_filters(&self, table: Table, filters: &FilterSet) -> StorageResult<Vec<Row>> {
        let statement = SelectBuilder::select(table).filter(filters).build();
        storage::fetch_all(&self.storage, statement).await
    }

    async fn sorted(
        &self,
        table: Table,
        column: &'static str,
        direction: Direction,
    ) -> StorageResult<Vec<Row>> {
        let statement = SelectBuilder::select(table)
            .order_by(column, direction)
            .build();
        storage::fetch_all(&self.storage, statement).await
    }

    // ==================
    // Restaurants
    // ==================

    /// Every restaurant, in storage order
    pub async fn restaurants(&self) -> StorageResult<Vec<Row>> {
        self.all(Table::Restaurants).await
    }

    /// The restaurant with `id`, if any
    pub async fn restaurant_by_id(&self, id: impl Into<SqlParam>) -> StorageResult<Option<Row>> {
        self.by_id(Table::Restaurants, restaurant::ID, id.into()).await
    }

    /// Restaurants whose cuisine equals `cuisine` exactly
    pub async fn restaurants_by_cuisine(&self, cuisine: &str) -> StorageResult<Vec<Row>> {
        self.by_field(Table::Restaurants, restaurant::CUISINE, cuisine.into())
            .await
    }

    /// Restaurants matching every supplied flag
    pub async fn restaurants_by_filters(
        &self,
        filters: RestaurantFilters,
    ) -> StorageResult<Vec<Row>> {
        self.by_filters(Table::Restaurants, &filters.to_filter_set())
            .await
    }

    /// Every restaurant, highest rating first
    pub async fn restaurants_sorted_by_rating(&self) -> StorageResult<Vec<Row>> {
        self.sorted(Table::Restaurants, restaurant::RATING, Direction::Desc)
            .await
    }

    // ==================
    // Dishes
    // ==================

    /// Every dish, in storage order
    pub async fn dishes(&self) -> StorageResult<Vec<Row>> {
        self.all(Table::Dishes).await
    }

    /// The dish with `id`, if any
    pub async fn dish_by_id(&self, id: impl Into<SqlParam>) -> StorageResult<Option<Row>> {
        self.by_id(Table::Dishes, dish::ID, id.into()).await
    }

    /// Dishes matching the supplied flag, or every dish without one
    pub async fn dishes_by_filter(&self, filters: DishFilters) -> StorageResult<Vec<Row>> {
        self.by_filters(Table::Dishes, &filters.to_filter_set()).await
    }

    /// Every dish, cheapest first
    pub async fn dishes_sorted_by_price(&self) -> StorageResult<Vec<Row>> {
        self.sorted(Table::Dishes, dish::PRICE, Direction::Asc).await
    }
}
