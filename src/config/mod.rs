//! Configuration module for the CurrencyFlow application.

mod debug;

// Public
pub mod constants;

// Re-export commonly used items
pub use debug::DF;
