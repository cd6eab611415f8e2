//! Demo catalog data
//!
//! Used by `dinedb seed` to create a database to serve locally, and by the
//! test suites as a known fixture.

use super::errors::StorageResult;
use super::sqlite::SqliteStorage;

/// Table definitions. Boolean flags are 0/1 integers.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS restaurants (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    cuisine TEXT NOT NULL,
    isVeg INTEGER NOT NULL,
    rating REAL NOT NULL,
    priceForTwo INTEGER NOT NULL,
    location TEXT NOT NULL,
    hasOutdoorSeating INTEGER NOT NULL,
    isLuxury INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS dishes (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    price INTEGER NOT NULL,
    rating REAL NOT NULL,
    isVeg INTEGER NOT NULL
);
";

/// Five restaurants (three veg) and four dishes
pub const DEMO_ROWS: &str = "
INSERT OR REPLACE INTO restaurants
    (id, name, cuisine, isVeg, rating, priceForTwo, location, hasOutdoorSeating, isLuxury)
VALUES
    (1, 'Spice Kitchen', 'Indian', 1, 4.5, 1500, 'MG Road', 1, 0),
    (2, 'Olive Bistro', 'Italian', 0, 4.2, 2000, 'Jubilee Hills', 0, 1),
    (3, 'Green Leaf', 'Chinese', 1, 4.0, 1000, 'Banjara Hills', 0, 0),
    (4, 'Royal Tandoor', 'Indian', 0, 4.8, 2500, 'Hitech City', 1, 1),
    (5, 'Sushi Garden', 'Japanese', 1, 3.9, 1800, 'Madhapur', 1, 0);

INSERT OR REPLACE INTO dishes (id, name, price, rating, isVeg)
VALUES
    (1, 'Paneer Butter Masala', 300, 4.5, 1),
    (2, 'Chicken Tikka', 250, 4.7, 0),
    (3, 'Veg Biryani', 200, 4.2, 1),
    (4, 'Butter Chicken', 350, 4.8, 0);
";

/// Create the catalog tables and load the demo rows
pub fn load_demo(storage: &SqliteStorage) -> StorageResult<()> {
    storage.execute_batch(SCHEMA)?;
    storage.execute_batch(DEMO_ROWS)
}
