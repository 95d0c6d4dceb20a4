use {
    chrono::{DateTime, Local},
    std::fmt,
};

use crate::domain::{Currency, resolve_rate};

/// A snapshot of the form at submission time. Ephemeral: the next edit
/// produces a new request and only the latest one matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub seq: u64,
    pub from: Currency,
    pub to: Currency,
    pub amount: f64,
}

/// A resolved conversion, ready for display. Replaced by the next request,
/// cleared by swap/reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub seq: u64,
    pub from: Currency,
    pub to: Currency,
    pub rate: f64,
    /// Converted amount, already formatted to 2 decimal places.
    pub converted: String,
    pub resolved_at: DateTime<Local>,
}

impl Quote {
    /// Resolve a request against the static rate table and stamp the
    /// resolution time.
    pub fn resolve(request: &ConversionRequest) -> Self {
        let rate = resolve_rate(request.from, request.to);
        Self {
            seq: request.seq,
            from: request.from,
            to: request.to,
            rate,
            converted: format_converted(request.amount * rate),
            resolved_at: Local::now(),
        }
    }

    /// The "1 USD = 0.8500 EUR" line under the converted amount.
    pub fn unit_rate_line(&self) -> String {
        format!("1 {} = {:.4} {}", self.from, self.rate, self.to)
    }
}

/// Reasons an amount fails validation. A failure here means no rate lookup
/// happens at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    Empty,
    NotANumber,
    NotPositive,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Empty => write!(f, "amount is empty"),
            AmountError::NotANumber => write!(f, "amount is not a number"),
            AmountError::NotPositive => write!(f, "amount must be greater than zero"),
        }
    }
}

/// Validate the raw amount text from the form. Runs before any resolution
/// is scheduled.
pub fn validate_amount(raw: &str) -> Result<f64, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    let value: f64 = trimmed.parse().map_err(|_| AmountError::NotANumber)?;
    if !(value > 0.0) {
        return Err(AmountError::NotPositive);
    }
    Ok(value)
}

/// Format a converted value for display: exactly 2 decimal places,
/// standard rounding.
pub fn format_converted(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount_accepts_positive() {
        assert_eq!(validate_amount("10"), Ok(10.0));
        assert_eq!(validate_amount(" 0.5 "), Ok(0.5));
    }

    #[test]
    fn test_validate_amount_rejects_invalid() {
        assert_eq!(validate_amount(""), Err(AmountError::Empty));
        assert_eq!(validate_amount("   "), Err(AmountError::Empty));
        assert_eq!(validate_amount("abc"), Err(AmountError::NotANumber));
        assert_eq!(validate_amount("0"), Err(AmountError::NotPositive));
        assert_eq!(validate_amount("-5"), Err(AmountError::NotPositive));
        assert_eq!(validate_amount("NaN"), Err(AmountError::NotPositive));
    }

    #[test]
    fn test_format_converted_rounds_to_two_places() {
        assert_eq!(format_converted(8.5), "8.50");
        assert_eq!(format_converted(88.0), "88.00");
        assert_eq!(format_converted(1.006), "1.01");
        assert_eq!(format_converted(0.0092), "0.01");
    }

    #[test]
    fn test_quote_resolve_ten_usd_to_eur() {
        let request = ConversionRequest {
            seq: 1,
            from: Currency::Usd,
            to: Currency::Eur,
            amount: 10.0,
        };
        let quote = Quote::resolve(&request);
        assert_eq!(quote.rate, 0.85);
        assert_eq!(quote.converted, "8.50");
        assert_eq!(quote.seq, 1);
    }

    #[test]
    fn test_unit_rate_line_format() {
        let request = ConversionRequest {
            seq: 7,
            from: Currency::Usd,
            to: Currency::Eur,
            amount: 1.0,
        };
        let quote = Quote::resolve(&request);
        assert_eq!(quote.unit_rate_line(), "1 USD = 0.8500 EUR");
    }
}
