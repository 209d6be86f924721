use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// Command line of the `coffee-order` binary.
#[derive(Debug, Parser)]
#[command(
    name = "coffee-order",
    about = "Order coffee with optional toppings from a console menu",
    version
)]
pub struct Cli {
    /// Name printed on every order confirmation
    #[arg(
        long,
        env = "COFFEE_CUSTOMER",
        default_value = "Customer",
        value_name = "NAME",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub customer: String,

    /// Tracing filter directives, overriding RUST_LOG (e.g. "debug")
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// Runtime settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub customer_name: String,
    pub log_filter: Option<String>,
}

impl ShopConfig {
    /// Parses the process arguments. Exits with usage on invalid input.
    pub fn from_args() -> Self {
        Cli::parse().into()
    }
}

impl From<Cli> for ShopConfig {
    fn from(cli: Cli) -> Self {
        Self {
            customer_name: cli.customer,
            log_filter: cli.log_level,
        }
    }
}
