use crate::model::{Beverage, Topping};
use std::io::{self, Write};
use tracing::debug;

/// Announces the brewing of a beverage and the toppings going on it.
#[derive(Debug, Default)]
pub struct BrewStation;

impl BrewStation {
    pub fn new() -> Self {
        Self
    }

    /// Emits `Brewing <description> for <customer>` and, when `toppings` is not
    /// empty, `Adding toppings: <t1> <t2> ...`.
    pub fn brew<W: Write>(
        &self,
        out: &mut W,
        customer_name: &str,
        beverage: &Beverage,
        toppings: &[Topping],
    ) -> io::Result<()> {
        debug!(
            customer = customer_name,
            kind = %beverage.kind(),
            toppings = toppings.len(),
            "Brewing"
        );
        writeln!(out, "Brewing {} for {}", beverage.describe(), customer_name)?;

        if !toppings.is_empty() {
            let names: Vec<&str> = toppings.iter().map(Topping::name).collect();
            writeln!(out, "Adding toppings: {}", names.join(" "))?;
        }
        Ok(())
    }
}
