mod core;
mod messages;
mod worker;

pub use self::core::QuoteEngine;
pub use messages::{QuoteJob, QuoteReady};
