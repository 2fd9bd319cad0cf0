pub mod types;
pub mod defaults;
pub mod loader;
pub mod validation;

pub use types::{Config, StoreConfig};
pub use loader::load_config;
