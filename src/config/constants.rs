use std::time::Duration;

use crate::domain::Currency;

// Top Level Constants

/// Quiet period after the last form edit before a recompute is submitted.
/// An edit inside this window supersedes the pending one (last write wins).
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Artificial latency of the mock rate lookup. Stands in for the round trip
/// a real rate API would cost. There is no cancellation once started.
pub const RESOLVE_LATENCY: Duration = Duration::from_secs(1);

/// Pivot currency used to triangulate a rate when the direct pair is
/// missing from the table.
pub const BASE_CURRENCY: Currency = Currency::Usd;

/// How often to ask for a repaint while a debounce window or an in-flight
/// resolution is pending.
pub const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub mod quick_access {
    use crate::domain::Currency;

    /// Preset pair buttons below the converter card.
    pub const PAIRS: [(Currency, Currency); 4] = [
        (Currency::Usd, Currency::Eur),
        (Currency::Eur, Currency::Usd),
        (Currency::Gbp, Currency::Usd),
        (Currency::Usd, Currency::Kes),
    ];
}
