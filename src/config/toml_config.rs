use crate::domain::model::Product;
use crate::domain::ports::InputProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_doubling_range, validate_product, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub input: Option<InputConfig>,
    pub catalog: Option<CatalogConfig>,
    pub greeting: Option<GreetingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub numbers: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    pub guest: Option<String>,
}

impl TomlConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl InputProvider for TomlConfig {
    fn numbers(&self) -> Option<&[i64]> {
        self.input.as_ref().and_then(|input| input.numbers.as_deref())
    }

    fn products(&self) -> &[Product] {
        self.catalog
            .as_ref()
            .map(|catalog| catalog.products.as_slice())
            .unwrap_or(&[])
    }

    fn guest(&self) -> Option<&str> {
        // a [greeting] table without a guest key greets anonymously
        self.greeting
            .as_ref()
            .map(|greeting| greeting.guest.as_deref().unwrap_or(""))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(numbers) = self.numbers() {
            validate_doubling_range("input.numbers", numbers)?;
        }

        for product in self.products() {
            validate_product("catalog.products", product)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[pipeline]
name = "sample-prep"
description = "Sample number preparation"
version = "1.0.0"

[input]
numbers = [1, 2, 3, -1, 0]

[catalog]
products = [
    { name = "Laptop", price = 999 },
    { name = "Mouse", price = 25 },
]

[greeting]
guest = "Antony"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.pipeline.name, "sample-prep");
        assert_eq!(config.numbers(), Some([1, 2, 3, -1, 0].as_slice()));
        assert_eq!(config.products().len(), 2);
        assert_eq!(config.products()[0].name, "Laptop");
        assert_eq!(config.guest(), Some("Antony"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_input_table_means_no_sequence() {
        let toml_content = r#"
[pipeline]
name = "empty-prep"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.numbers(), None);
        assert!(config.products().is_empty());
        assert_eq!(config.guest(), None);
    }

    #[test]
    fn test_input_table_without_numbers_means_no_sequence() {
        let toml_content = r#"
[pipeline]
name = "empty-prep"

[input]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.numbers(), None);
    }

    #[test]
    fn test_greeting_table_without_guest_is_anonymous() {
        let toml_content = r#"
[pipeline]
name = "greeter"

[greeting]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.guest(), Some(""));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(TomlConfig::from_toml_str("not valid toml [").is_err());
    }

    #[test]
    fn test_validate_flags_empty_product_name() {
        let toml_content = r#"
[pipeline]
name = "bad-catalog"

[catalog]
products = [{ name = "", price = 10 }]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_path_reads_a_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[pipeline]\nname = \"file-prep\"\n\n[input]\nnumbers = [7, -2]\n"
        )
        .unwrap();

        let config = TomlConfig::from_path(file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-prep");
        assert_eq!(config.numbers(), Some([7, -2].as_slice()));
    }

    #[test]
    fn test_from_path_missing_file_is_an_error() {
        assert!(TomlConfig::from_path("/nonexistent/prep.toml").is_err());
    }
}
