//! Process lifecycle: configuration from the command line and tracing setup.
//!
//! The binary calls [`ShopConfig::from_args`] first, then [`setup_tracing`]
//! with the configured filter, then hands stdin/stdout to the
//! [`MenuController`](crate::menu::MenuController).

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;
