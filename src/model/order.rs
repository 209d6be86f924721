use crate::model::{Beverage, Topping};

/// One customer's beverage selection for a single transaction.
///
/// The order's toppings are the ones attached to its beverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    customer_name: String,
    beverage: Beverage,
}

impl Order {
    /// Creates a new Order.
    ///
    /// # Arguments
    /// * `customer_name` - Name printed on the confirmation
    /// * `beverage` - The drink, with its toppings already attached
    pub fn new(customer_name: impl Into<String>, beverage: Beverage) -> Self {
        Self {
            customer_name: customer_name.into(),
            beverage,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn beverage(&self) -> &Beverage {
        &self.beverage
    }

    pub fn toppings(&self) -> &[Topping] {
        self.beverage.toppings()
    }
}
