use crate::domain::{ConversionRequest, Quote};

/// A request for the worker to resolve the latest form values.
#[derive(Debug, Clone, Copy)]
pub struct QuoteJob {
    pub request: ConversionRequest,
}

/// The resolved quote returned by the worker.
#[derive(Debug, Clone)]
pub struct QuoteReady {
    pub quote: Quote,
    pub duration_ms: u128,
}
