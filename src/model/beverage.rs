use crate::menu::ParseError;
use crate::model::Topping;
use std::fmt::Display;
use std::str::FromStr;

/// The drink kinds on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeverageKind {
    Espresso,
    Latte,
}

impl BeverageKind {
    /// Returns all the kinds the shop can brew, in menu order.
    pub fn values() -> Vec<BeverageKind> {
        vec![BeverageKind::Espresso, BeverageKind::Latte]
    }

    /// Display name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            BeverageKind::Espresso => "Espresso",
            BeverageKind::Latte => "Latte",
        }
    }

    /// Lower-case keyword the customer types to select this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            BeverageKind::Espresso => "espresso",
            BeverageKind::Latte => "latte",
        }
    }
}

impl Display for BeverageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BeverageKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_lowercase();
        BeverageKind::values()
            .into_iter()
            .find(|kind| kind.keyword() == keyword)
            .ok_or(ParseError::UnknownBeverage(keyword))
    }
}

/// Represents a drink being ordered.
///
/// A `Beverage` always carries its topping sequence, which is empty for a
/// freshly created base drink. Toppings are attached once through
/// [`Beverage::with_toppings`] and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beverage {
    kind: BeverageKind,
    toppings: Vec<Topping>,
}

impl Beverage {
    /// Creates a base beverage with no toppings.
    pub fn new(kind: BeverageKind) -> Self {
        Self {
            kind,
            toppings: Vec::new(),
        }
    }

    /// Consumes the base beverage and returns it with `toppings` attached.
    pub fn with_toppings(self, toppings: Vec<Topping>) -> Self {
        Self { toppings, ..self }
    }

    pub fn kind(&self) -> BeverageKind {
        self.kind
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Human-readable description, e.g. `Espresso with Whipped Cream with Caramel`.
    pub fn describe(&self) -> String {
        let mut description = self.kind.name().to_string();
        for topping in &self.toppings {
            description.push_str(" with ");
            description.push_str(topping.name());
        }
        description
    }
}

impl Display for Beverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
