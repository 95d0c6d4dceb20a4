// src/app/state.rs

use crate::{
    config::constants::DEBOUNCE_DELAY,
    domain::{AmountError, Currency, Quote},
    utils::AppInstant,
};

/// Which screen the shell is showing. Navigation is replacing this value;
/// the shell itself carries no conversion state.
pub(crate) enum AppState {
    Landing(LandingState),
    Converter(ConverterState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Landing(LandingState)
    }
}

#[derive(Clone)]
pub(crate) struct LandingState;

/// Form state for the converter screen. All of it is ephemeral and rebuilt
/// on every visit to the screen.
#[derive(Clone)]
pub(crate) struct ConverterState {
    pub(crate) from: Currency,
    pub(crate) to: Currency,
    pub(crate) amount_text: String,
    /// Last resolved quote, shown until the next request replaces it.
    pub(crate) quote: Option<Quote>,
    pub(crate) validation: Option<AmountError>,
    /// Set on every edit; a recompute is submitted once the debounce window
    /// elapses without another edit.
    pub(crate) dirty_since: Option<AppInstant>,
}

impl Default for ConverterState {
    fn default() -> Self {
        // Starts dirty so the initial USD -> EUR conversion of "1" runs
        // automatically, as the original form does.
        Self {
            from: Currency::Usd,
            to: Currency::Eur,
            amount_text: "1".to_string(),
            quote: None,
            validation: None,
            dirty_since: Some(AppInstant::now()),
        }
    }
}

impl ConverterState {
    /// Exchange source and target in one state mutation and drop the stale
    /// result.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        self.reset_result();
    }

    /// Select a preset pair (quick-access buttons).
    pub(crate) fn set_pair(&mut self, from: Currency, to: Currency) {
        self.from = from;
        self.to = to;
        self.reset_result();
    }

    /// Restart the debounce window. An edit before it elapses supersedes
    /// the pending recompute.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty_since = Some(AppInstant::now());
    }

    /// True once the quiet period after the last edit has elapsed.
    pub(crate) fn debounce_elapsed(&self) -> bool {
        self.dirty_since
            .is_some_and(|since| since.elapsed() >= DEBOUNCE_DELAY)
    }

    fn reset_result(&mut self) {
        self.quote = None;
        self.validation = None;
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConversionRequest;

    #[test]
    fn test_swap_exchanges_pair_and_clears_result() {
        let mut state = ConverterState::default();
        state.quote = Some(Quote::resolve(&ConversionRequest {
            seq: 1,
            from: Currency::Usd,
            to: Currency::Eur,
            amount: 1.0,
        }));

        state.swap();

        assert_eq!(state.from, Currency::Eur);
        assert_eq!(state.to, Currency::Usd);
        assert!(state.quote.is_none());
        assert!(state.dirty_since.is_some());
    }

    #[test]
    fn test_set_pair_clears_result_and_validation() {
        let mut state = ConverterState {
            validation: Some(AmountError::NotPositive),
            ..Default::default()
        };

        state.set_pair(Currency::Gbp, Currency::Usd);

        assert_eq!(state.from, Currency::Gbp);
        assert_eq!(state.to, Currency::Usd);
        assert!(state.validation.is_none());
        assert!(state.quote.is_none());
    }

    #[test]
    fn test_debounce_waits_for_quiet_period() {
        let mut state = ConverterState::default();
        state.mark_dirty();
        assert!(!state.debounce_elapsed());

        std::thread::sleep(DEBOUNCE_DELAY + std::time::Duration::from_millis(50));
        assert!(state.debounce_elapsed());

        state.dirty_since = None;
        assert!(!state.debounce_elapsed());
    }
}
