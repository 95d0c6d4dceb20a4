use {std::fmt, strum_macros::EnumIter};

/// The fixed set of currencies the converter knows about. Static for the
/// process lifetime; select widgets iterate it via `EnumIter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Chf,
    Cny,
    Inr,
    Brl,
    Kes,
    Zar,
    Ngn,
    Egp,
}

impl Currency {
    /// ISO 4217 code, as shown in selects and rate lines.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
            Currency::Brl => "BRL",
            Currency::Kes => "KES",
            Currency::Zar => "ZAR",
            Currency::Ngn => "NGN",
            Currency::Egp => "EGP",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Jpy => "Japanese Yen",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
            Currency::Chf => "Swiss Franc",
            Currency::Cny => "Chinese Yuan",
            Currency::Inr => "Indian Rupee",
            Currency::Brl => "Brazilian Real",
            Currency::Kes => "Kenyan Shilling",
            Currency::Zar => "South African Rand",
            Currency::Ngn => "Nigerian Naira",
            Currency::Egp => "Egyptian Pound",
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
            Currency::Chf => "CHF",
            Currency::Cny => "¥",
            Currency::Inr => "₹",
            Currency::Brl => "R$",
            Currency::Kes => "KSh",
            Currency::Zar => "R",
            Currency::Ngn => "₦",
            Currency::Egp => "E£",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_currency_display_is_code() {
        assert_eq!(format!("{}", Currency::Usd), "USD");
        assert_eq!(format!("{}", Currency::Kes), "KES");
    }

    #[test]
    fn test_currency_set_is_complete() {
        assert_eq!(Currency::iter().count(), 14);
    }

    #[test]
    fn test_currency_metadata() {
        assert_eq!(Currency::Eur.name(), "Euro");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Ngn.symbol(), "₦");
    }

    #[test]
    fn test_default_is_base() {
        assert_eq!(Currency::default(), Currency::Usd);
    }
}
