//! Pure data structures for the coffee shop: toppings, beverages and orders.

pub mod beverage;
pub mod order;
pub mod topping;

pub use beverage::*;
pub use order::*;
pub use topping::*;
