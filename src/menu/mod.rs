//! Interactive menu: input parsing, the beverage factory and the controller
//! state machine that ties them to the [`OrderService`](crate::service::OrderService).

pub mod controller;
pub mod error;
pub mod factory;
pub mod parser;

pub use controller::*;
pub use error::*;
pub use factory::*;
pub use parser::*;
