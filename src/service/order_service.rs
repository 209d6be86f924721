use crate::model::Order;
use crate::service::{BrewStation, OrderRegistry};
use std::io::{self, Write};
use tracing::{info_span, instrument};

/// Facade that runs one order through the registry and the brew station.
#[derive(Debug, Default)]
pub struct OrderService {
    registry: OrderRegistry,
    station: BrewStation,
}

impl OrderService {
    pub fn new(registry: OrderRegistry, station: BrewStation) -> Self {
        Self { registry, station }
    }

    /// Records the order, then brews it. Both steps always run, in that order.
    ///
    /// # Errors
    /// Returns the writer's error if a line cannot be written.
    #[instrument(skip_all, fields(customer = order.customer_name()))]
    pub fn place_order<W: Write>(&self, out: &mut W, order: &Order) -> io::Result<()> {
        self.registry.record(out, order.customer_name(), order.beverage())?;

        let _brew = info_span!("brew").entered();
        self.station
            .brew(out, order.customer_name(), order.beverage(), order.toppings())
    }
}
