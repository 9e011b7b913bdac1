pub mod calculations;
pub mod rules;
pub mod validation;

pub use rules::RulesEngine;
pub use validation::ValidationError;
