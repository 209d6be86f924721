use crate::model::Beverage;
use std::io::{self, Write};
use tracing::info;

/// Records that a customer ordered a beverage.
///
/// One registry is built per session and handed to the
/// [`OrderService`](crate::service::OrderService).
#[derive(Debug, Default)]
pub struct OrderRegistry;

impl OrderRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Emits `<customer> ordered a <description>`.
    pub fn record<W: Write>(
        &self,
        out: &mut W,
        customer_name: &str,
        beverage: &Beverage,
    ) -> io::Result<()> {
        let description = beverage.describe();
        info!(customer = customer_name, beverage = %description, "Order recorded");
        writeln!(out, "{} ordered a {}", customer_name, description)
    }
}
