pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::engine::PrepEngine;
pub use crate::core::summary::{calculate_total, greet_user};
pub use crate::core::transform::double_positives;
pub use crate::core::validate::validate_input;
pub use crate::domain::model::{PrepReport, Product};
pub use crate::domain::ports::InputProvider;
pub use crate::utils::error::{PrepError, Result};
