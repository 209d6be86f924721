use crate::menu::ParseError;
use std::fmt::Display;
use std::str::FromStr;

/// A named add-on applied to a beverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topping {
    WhippedCream,
    Caramel,
}

impl Topping {
    /// Returns all the toppings the shop offers.
    pub fn values() -> Vec<Topping> {
        vec![Topping::WhippedCream, Topping::Caramel]
    }

    /// Display name used in descriptions and brew messages.
    pub fn name(&self) -> &'static str {
        match self {
            Topping::WhippedCream => "Whipped Cream",
            Topping::Caramel => "Caramel",
        }
    }
}

impl Display for Topping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a single topping token. Matching ignores case and surrounding whitespace.
impl FromStr for Topping {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        match token.as_str() {
            "whipped cream" => Ok(Topping::WhippedCream),
            "caramel" => Ok(Topping::Caramel),
            _ => Err(ParseError::UnknownTopping(token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!("  Whipped CREAM ".parse::<Topping>(), Ok(Topping::WhippedCream));
        assert_eq!("caramel".parse::<Topping>(), Ok(Topping::Caramel));
    }

    #[test]
    fn test_unknown_topping_reports_normalized_token() {
        assert_eq!(
            " Sprinkles".parse::<Topping>(),
            Err(ParseError::UnknownTopping("sprinkles".to_string()))
        );
    }
}
