//! Catalog HTTP Routes
//!
//! Read-only endpoints for restaurants and dishes. Handlers pull parameters
//! out of the request, call one fetcher and hand the result to [`Outcome`].

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};

use crate::catalog::Catalog;
use crate::query::SqlParam;

use super::parser;
use super::response::Outcome;

// ==================
// Shared State
// ==================

/// Catalog handle shared across handlers
pub type CatalogState = Arc<Catalog>;

const RESTAURANTS: &str = "restaurants";
const RESTAURANT: &str = "restaurant";
const DISHES: &str = "dishes";
const DISH: &str = "dish";

// ==================
// Router
// ==================

/// Build the catalog router
pub fn catalog_routes(state: CatalogState) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/details/:id", get(get_restaurant))
        .route("/restaurants/cuisine/:cuisine", get(restaurants_by_cuisine))
        .route("/restaurants/filter", get(filter_restaurants))
        .route("/restaurants/sort-by-rating", get(restaurants_by_rating))
        .route("/dishes", get(list_dishes))
        .route("/dishes/details/:id", get(get_dish))
        .route("/dishes/filter", get(filter_dishes))
        .route("/dishes/sort-by-price", get(dishes_by_price))
        .with_state(state)
}

// ==================
// Restaurants
// ==================

async fn list_restaurants(State(catalog): State<CatalogState>) -> Outcome {
    Outcome::rows(RESTAURANTS, "No restaurants found.", catalog.restaurants().await)
}

async fn get_restaurant(
    State(catalog): State<CatalogState>,
    Path(id): Path<String>,
) -> Outcome {
    let result = catalog.restaurant_by_id(SqlParam::id(&id)).await;
    Outcome::record(RESTAURANT, "Restaurant not found.", result)
}

async fn restaurants_by_cuisine(
    State(catalog): State<CatalogState>,
    Path(cuisine): Path<String>,
) -> Outcome {
    let result = catalog.restaurants_by_cuisine(&cuisine).await;
    Outcome::rows(RESTAURANTS, "No restaurants found for this cuisine.", result)
}

async fn filter_restaurants(
    State(catalog): State<CatalogState>,
    Query(query): Query<HashMap<String, String>>,
) -> Outcome {
    let filters = parser::restaurant_filters(&query);
    let result = catalog.restaurants_by_filters(filters).await;
    Outcome::rows(
        RESTAURANTS,
        "No restaurants found with the specified filters.",
        result,
    )
}

async fn restaurants_by_rating(State(catalog): State<CatalogState>) -> Outcome {
    let result = catalog.restaurants_sorted_by_rating().await;
    Outcome::rows(RESTAURANTS, "No restaurants found.", result)
}

// ==================
// Dishes
// ==================

async fn list_dishes(State(catalog): State<CatalogState>) -> Outcome {
    Outcome::rows(DISHES, "No dishes found.", catalog.dishes().await)
}

async fn get_dish(State(catalog): State<CatalogState>, Path(id): Path<String>) -> Outcome {
    let result = catalog.dish_by_id(SqlParam::id(&id)).await;
    Outcome::record(DISH, "Dish not found.", result)
}

async fn filter_dishes(
    State(catalog): State<CatalogState>,
    Query(query): Query<HashMap<String, String>>,
) -> Outcome {
    let result = catalog.dishes_by_filter(parser::dish_filters(&query)).await;
    Outcome::rows(DISHES, "No dishes found for this filter.", result)
}

async fn dishes_by_price(State(catalog): State<CatalogState>) -> Outcome {
    Outcome::rows(DISHES, "No dishes found.", catalog.dishes_sorted_by_price().await)
}
