use crate::core::summary::{calculate_total, greet_user};
use crate::core::transform::double_positives;
use crate::core::validate::validate_input;
use crate::core::InputProvider;
use crate::domain::model::PrepReport;
use crate::utils::error::Result;

pub struct PrepEngine<C: InputProvider> {
    config: C,
}

impl<C: InputProvider> PrepEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Runs the fixed sequence: double the positives, presence-check the
    /// original input, print the verdict, then any configured extras.
    pub fn run(&self) -> Result<PrepReport> {
        let numbers = self.config.numbers();

        let doubled = match numbers {
            Some(values) => {
                tracing::debug!("Transforming {} values", values.len());
                let doubled = double_positives(values)?;
                tracing::info!("Kept {} of {} values", doubled.len(), values.len());
                doubled
            }
            None => {
                tracing::warn!("No input sequence provided, skipping transform");
                Vec::new()
            }
        };

        let valid = validate_input(numbers);
        if valid {
            println!("Input is valid");
        } else {
            println!("Input is invalid");
        }

        let total = match self.config.products() {
            [] => None,
            products => {
                let total = calculate_total(products)?;
                println!("Total: {}", total);
                Some(total)
            }
        };

        let greeting = self.config.guest().map(|name| {
            let line = greet_user(if name.is_empty() { None } else { Some(name) });
            println!("{}", line);
            line
        });

        Ok(PrepReport {
            doubled,
            valid,
            total,
            greeting,
        })
    }
}
