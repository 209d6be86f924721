//! # Coffee Order
//!
//! > **A console menu for ordering coffee with toppings.**
//!
//! The customer picks a drink, types a comma-separated list of toppings, and
//! the shop confirms the order and announces the brew.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: Plain values. A [`Beverage`](model::Beverage) always carries its
//!   (possibly empty) topping list; there is no separate "with toppings" type.
//! - **Key items**: [`Topping`](model::Topping), [`BeverageKind`](model::BeverageKind),
//!   [`Order`](model::Order).
//!
//! ### 2. The Counter ([`service`])
//! - **Role**: Side effects of an order. The [`OrderService`](service::OrderService)
//!   facade owns an [`OrderRegistry`](service::OrderRegistry) and a
//!   [`BrewStation`](service::BrewStation) and runs them in that order.
//!   The registry is built once per session and injected, not a global.
//!
//! ### 3. The Menu ([`menu`])
//! - **Role**: Parses customer input and drives the
//!   main menu / coffee menu / exit state machine.
//! - **Key items**: [`MenuController`](menu::MenuController),
//!   [`BeverageFactory`](menu::BeverageFactory), [`parse_toppings`](menu::parse_toppings).
//!
//! ### 4. The Process ([`lifecycle`])
//! - **Role**: Command-line configuration and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run -- --customer Alice
//!
//! # With logs on stderr
//! RUST_LOG=info cargo run
//! ```
//!
//! ```text
//! Choose a coffee type (espresso/latte) or type 'exit' to go back to the main menu:
//! espresso
//! Enter toppings separated by commas (e.g., whipped cream, caramel):
//! caramel
//! Alice ordered a Espresso with Caramel
//! Brewing Espresso with Caramel for Alice
//! Adding toppings: Caramel
//! ```

pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod service;
