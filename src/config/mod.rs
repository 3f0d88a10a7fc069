//! Configuration schema and loading.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{CoinConfig, DemoConfig, EscrowConfig};
