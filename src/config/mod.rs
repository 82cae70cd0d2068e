//! `.scanlens.toml` configuration.
//!
//! Every section is optional; missing keys fall back to the dashboard's
//! built-in display constraints and chart geometry.

mod core;
mod display;
mod loader;
pub mod validation;

pub use self::core::ScanlensConfig;
pub use display::{DisplayConfig, OutputConfig};
pub use loader::{
    default_config_toml, directory_ancestors, load_config, load_config_file,
    load_config_from_dir, parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use validation::validate_config;
