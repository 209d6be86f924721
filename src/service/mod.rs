//! Order processing services.
//!
//! - [`OrderRegistry`] confirms who ordered what.
//! - [`BrewStation`] announces the brew and the toppings being added.
//! - [`OrderService`] is the facade the menu talks to; it owns one of each and
//!   runs them in sequence for every order.
//!
//! Every service writes its lines to a caller-supplied [`std::io::Write`], so
//! the binary passes stdout and tests pass a `Vec<u8>`.

pub mod brew_station;
pub mod order_service;
pub mod registry;

pub use brew_station::*;
pub use order_service::*;
pub use registry::*;
