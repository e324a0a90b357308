use crate::domain::model::Product;
use crate::utils::error::{PrepError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PrepError::ValidationError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(PrepError::ValidationError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed: &[&str]) -> Result<()> {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str());

    match extension {
        Some(ext) if allowed.contains(&ext) => Ok(()),
        _ => Err(PrepError::ValidationError {
            message: format!(
                "{}: '{}' must have one of the extensions: {}",
                field_name,
                path,
                allowed.join(", ")
            ),
        }),
    }
}

/// Positive values get doubled downstream, so anything above `i64::MAX / 2`
/// is rejected up front instead of overflowing mid-run.
pub fn validate_doubling_range(field_name: &str, values: &[i64]) -> Result<()> {
    for value in values {
        if *value > i64::MAX / 2 {
            return Err(PrepError::ValidationError {
                message: format!(
                    "{}: value {} is too large to double without overflow",
                    field_name, value
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_product(field_name: &str, product: &Product) -> Result<()> {
    if product.name.trim().is_empty() {
        return Err(PrepError::ValidationError {
            message: format!("{}: product name cannot be empty", field_name),
        });
    }
    Ok(())
}
