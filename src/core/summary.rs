use crate::domain::model::Product;
use crate::utils::error::{PrepError, Result};

/// Sums catalog prices with checked addition.
pub fn calculate_total(products: &[Product]) -> Result<u64> {
    let mut total: u64 = 0;
    for product in products {
        total = total
            .checked_add(product.price)
            .ok_or_else(|| PrepError::ProcessingError {
                message: format!("catalog total overflows at '{}'", product.name),
            })?;
    }
    Ok(total)
}

/// A missing or empty name falls back to the anonymous guest.
pub fn greet_user(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => format!("Hello, {}!", n),
        _ => "Hello, Guest!".to_string(),
    }
}
