pub mod validation;

pub use validation::CustomerValidator;
