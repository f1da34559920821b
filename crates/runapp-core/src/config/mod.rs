//! runapp configuration layer
//!
//! Every environment read goes through this module; the rest of the workspace
//! asks for structured config instead of calling `std::env::var`.
//!
//! - `loader`: env_or, env_optional, env_bool
//! - `schema`: ObservabilityConfig
//! - `env_keys`: key constants, including the Qt variable the launcher exports

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or};
pub use schema::ObservabilityConfig;
