use serde::{Deserialize, Serialize};

/// A catalog entry; prices are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: u64,
}

/// Everything a single engine run produced.
#[derive(Debug, Clone)]
pub struct PrepReport {
    pub doubled: Vec<i64>,
    pub valid: bool,
    pub total: Option<u64>,
    pub greeting: Option<String>,
}
