//! # Query Parameter Parser
//!
//! Turns raw query strings into catalog filters.
//!
//! One coercion rule applies to every flag on every endpoint:
//! - absent → no constraint
//! - exactly `"true"` → true
//! - any other value → false
//!
//! Unknown keys are ignored and nothing is ever rejected.

use std::collections::HashMap;

use crate::catalog::{DishFilters, RestaurantFilters};

/// Query keys accepted by `/restaurants/filter`
pub const IS_VEG: &str = "isVeg";
pub const HAS_OUTDOOR_SEATING: &str = "hasOutdoorSeating";
pub const IS_LUXURY: &str = "isLuxury";

/// Coerce an optional raw flag
pub fn coerce_flag(raw: Option<&str>) -> Option<bool> {
    raw.map(|value| value == "true")
}

fn flag(params: &HashMap<String, String>, key: &str) -> Option<bool> {
    coerce_flag(params.get(key).map(String::as_str))
}

/// Parse `/restaurants/filter` parameters
pub fn restaurant_filters(params: &HashMap<String, String>) -> RestaurantFilters {
    RestaurantFilters {
        is_veg: flag(params, IS_VEG),
        has_outdoor_seating: flag(params, HAS_OUTDOOR_SEATING),
        is_luxury: flag(params, IS_LUXURY),
    }
}

/// Parse `/dishes/filter` parameters
pub fn dish_filters(params: &HashMap<String, String>) -> DishFilters {
    DishFilters {
        is_veg: flag(params, IS_VEG),
    }
}
