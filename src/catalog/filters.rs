//! Entity columns and filter sets

use crate::query::FilterSet;

/// Restaurant columns the fetchers rely on
pub mod restaurant {
    pub const ID: &str = "id";
    pub const CUISINE: &str = "cuisine";
    pub const IS_VEG: &str = "isVeg";
    pub const HAS_OUTDOOR_SEATING: &str = "hasOutdoorSeating";
    pub const IS_LUXURY: &str = "isLuxury";
    pub const RATING: &str = "rating";
}

/// Dish columns the fetchers rely on
pub mod dish {
    pub const ID: &str = "id";
    pub const IS_VEG: &str = "isVeg";
    pub const PRICE: &str = "price";
}

/// Optional restaurant flags. `None` means "no constraint".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestaurantFilters {
    pub is_veg: Option<bool>,
    pub has_outdoor_seating: Option<bool>,
    pub is_luxury: Option<bool>,
}

impl RestaurantFilters {
    /// Filter set in declared order: isVeg, hasOutdoorSeating, isLuxury
    pub fn to_filter_set(&self) -> FilterSet {
        FilterSet::new()
            .optional(restaurant::IS_VEG, self.is_veg)
            .optional(restaurant::HAS_OUTDOOR_SEATING, self.has_outdoor_seating)
            .optional(restaurant::IS_LUXURY, self.is_luxury)
    }
}

/// Optional dish flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DishFilters {
    pub is_veg: Option<bool>,
}

impl DishFilters {
    pub fn to_filter_set(&self) -> FilterSet {
        FilterSet::new().optional(dish::IS_VEG, self.is_veg)
    }
}
