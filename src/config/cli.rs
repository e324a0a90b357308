use crate::domain::model::Product;
use crate::domain::ports::InputProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_doubling_range, validate_file_extension, validate_path, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "numprep")]
#[command(about = "A small number preparation and validation tool")]
pub struct CliConfig {
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "1,2,3,-1,0"
    )]
    pub numbers: Vec<i64>,

    #[arg(long, help = "Read inputs from a TOML file instead of the flags")]
    pub config: Option<String>,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "",
        help = "Print a greeting; anonymous when no name is given"
    )]
    pub greet: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl InputProvider for CliConfig {
    fn numbers(&self) -> Option<&[i64]> {
        Some(&self.numbers)
    }

    fn products(&self) -> &[Product] {
        // the catalog only exists in file-based configuration
        &[]
    }

    fn guest(&self) -> Option<&str> {
        self.greet.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_doubling_range("numbers", &self.numbers)?;

        if let Some(path) = &self.config {
            validate_path("config", path)?;
            validate_file_extension("config", path, &["toml"])?;
        }

        Ok(())
    }
}
