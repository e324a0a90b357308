pub mod engine;
pub mod summary;
pub mod transform;
pub mod validate;

pub use crate::domain::model::{PrepReport, Product};
pub use crate::domain::ports::InputProvider;
pub use crate::utils::error::Result;
