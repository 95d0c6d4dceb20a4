use std::{collections::HashMap, sync::LazyLock};

use crate::{config::constants::BASE_CURRENCY, domain::Currency};

/// Mock directional rates, keyed by `(from, to)`. Demo data: the table is
/// deliberately not inverse-consistent (USD->EUR = 0.85 but EUR->USD = 1.18),
/// and only a subset of pairs is present.
static RATE_TABLE: LazyLock<HashMap<(Currency, Currency), f64>> = LazyLock::new(|| {
    use Currency::*;
    HashMap::from([
        ((Usd, Eur), 0.85),
        ((Usd, Gbp), 0.73),
        ((Usd, Jpy), 110.0),
        ((Usd, Cad), 1.25),
        ((Usd, Aud), 1.35),
        ((Usd, Chf), 0.92),
        ((Usd, Cny), 6.45),
        ((Usd, Inr), 74.5),
        ((Usd, Brl), 5.2),
        ((Usd, Kes), 108.5),
        ((Usd, Zar), 14.8),
        ((Usd, Ngn), 411.0),
        ((Usd, Egp), 15.7),
        ((Eur, Usd), 1.18),
        ((Eur, Gbp), 0.86),
        ((Eur, Jpy), 129.4),
        ((Gbp, Usd), 1.37),
        ((Gbp, Eur), 1.16),
        ((Jpy, Usd), 0.009),
        ((Cad, Usd), 0.80),
        ((Aud, Usd), 0.74),
        ((Chf, Usd), 1.09),
        ((Cny, Usd), 0.155),
        ((Inr, Usd), 0.0134),
        ((Brl, Usd), 0.19),
        ((Kes, Usd), 0.0092),
        ((Zar, Usd), 0.068),
        ((Ngn, Usd), 0.0024),
        ((Egp, Usd), 0.064),
    ])
});

fn direct(from: Currency, to: Currency) -> Option<f64> {
    RATE_TABLE.get(&(from, to)).copied()
}

/// Resolve the conversion rate for a currency pair.
///
/// Precedence: direct table hit, then triangulation through the base
/// currency (a missing leg substitutes 1.0), then 1.0. The fallback-to-1
/// behavior produces incoherent cross-rates for pairs with missing legs;
/// that is the documented behavior of the demo data, kept as-is.
///
/// Pure function of its inputs and the static table. Never fails.
pub fn resolve_rate(from: Currency, to: Currency) -> f64 {
    if let Some(rate) = direct(from, to) {
        return rate;
    }

    if from != BASE_CURRENCY && to != BASE_CURRENCY {
        let from_to_base = direct(from, BASE_CURRENCY).unwrap_or(1.0);
        let base_to_target = direct(BASE_CURRENCY, to).unwrap_or(1.0);
        return from_to_base * base_to_target;
    }

    // Same currency, or a base-leg pair with no direct entry.
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_direct_hits_return_stored_constants() {
        assert_eq!(resolve_rate(Currency::Usd, Currency::Eur), 0.85);
        assert_eq!(resolve_rate(Currency::Eur, Currency::Usd), 1.18);
        assert_eq!(resolve_rate(Currency::Usd, Currency::Kes), 108.5);
        assert_eq!(resolve_rate(Currency::Gbp, Currency::Eur), 1.16);
    }

    #[test]
    fn test_triangulation_through_base() {
        // CAD->USD (0.80) * USD->JPY (110.0)
        assert_eq!(resolve_rate(Currency::Cad, Currency::Jpy), 88.0);
        // NGN->USD (0.0024) * USD->EGP (15.7)
        assert_eq!(resolve_rate(Currency::Ngn, Currency::Egp), 0.0024 * 15.7);
    }

    #[test]
    fn test_same_currency_identity_only_for_base() {
        // Only the base currency short-circuits to 1.0. Any other X->X pair
        // is absent from the table and neither leg is the base, so it
        // triangulates X->USD->X and inherits the inverse inconsistency.
        assert_eq!(resolve_rate(Currency::Usd, Currency::Usd), 1.0);
        assert_eq!(resolve_rate(Currency::Eur, Currency::Eur), 1.18 * 0.85);
        assert_eq!(resolve_rate(Currency::Jpy, Currency::Jpy), 0.009 * 110.0);
    }

    #[test]
    fn test_table_is_not_inverse_consistent() {
        // Demo-data quirk, preserved on purpose.
        let product =
            resolve_rate(Currency::Usd, Currency::Eur) * resolve_rate(Currency::Eur, Currency::Usd);
        assert_ne!(product, 1.0);
    }

    #[test]
    fn test_direct_hit_beats_triangulation() {
        // EUR->JPY has a direct entry (129.4); triangulation would give
        // 1.18 * 110.0 = 129.8. The direct value must win.
        assert_eq!(resolve_rate(Currency::Eur, Currency::Jpy), 129.4);
    }

    #[test]
    fn test_never_unresolved() {
        for from in Currency::iter() {
            for to in Currency::iter() {
                let rate = resolve_rate(from, to);
                assert!(rate > 0.0, "{from}->{to} resolved to {rate}");
            }
        }
    }
}
