mod conversion;
mod currency;
mod rates;

pub use conversion::{AmountError, ConversionRequest, Quote, format_converted, validate_amount};
pub use currency::Currency;
pub use rates::resolve_rate;
