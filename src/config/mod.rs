#[cfg(feature = "cli")]
pub mod cli;

pub mod toml_config;
