//! End-to-end conversion flow: validation gates the resolver, the engine
//! resolves in the background, and the last completed quote wins.

use std::{
    thread,
    time::{Duration, Instant},
};

use currency_flow::{
    Currency, QuoteEngine,
    domain::{format_converted, resolve_rate, validate_amount},
};

const ENGINE_TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn valid_amount_converts_through_the_table() {
    let amount = validate_amount("10").expect("10 is a valid amount");
    let rate = resolve_rate(Currency::Usd, Currency::Eur);
    assert_eq!(format_converted(amount * rate), "8.50");
}

#[test]
fn invalid_amounts_never_reach_the_resolver() {
    // Validation short-circuits before any lookup is scheduled.
    for raw in ["", "  ", "0", "-5", "abc"] {
        assert!(validate_amount(raw).is_err(), "{raw:?} should be rejected");
    }
}

#[test]
fn engine_round_trip_resolves_a_quote() {
    let mut engine = QuoteEngine::new();
    let seq = engine.submit(Currency::Usd, Currency::Eur, 10.0);
    assert!(engine.is_busy());

    let quote = wait_for_quote(&mut engine).expect("engine should resolve within the timeout");
    assert_eq!(quote.seq, seq);
    assert_eq!(quote.rate, 0.85);
    assert_eq!(quote.converted, "8.50");
    assert!(!engine.is_busy());
}

#[test]
fn later_resolution_overwrites_earlier_quote() {
    let mut engine = QuoteEngine::new();
    engine.submit(Currency::Usd, Currency::Eur, 10.0);
    let superseding = engine.submit(Currency::Cad, Currency::Jpy, 2.0);

    // Drain until both requests have come back; the displayed quote is
    // whatever arrived last.
    let mut displayed = None;
    let deadline = Instant::now() + ENGINE_TIMEOUT;
    while engine.is_busy() {
        if let Some(quote) = engine.poll() {
            displayed = Some(quote);
        }
        assert!(Instant::now() < deadline, "engine did not drain in time");
        thread::sleep(Duration::from_millis(25));
    }

    let last = displayed.expect("at least one quote should have arrived");
    assert_eq!(last.seq, superseding);
    assert_eq!(last.rate, 88.0); // 0.80 * 110.0 via USD
    assert_eq!(last.converted, "176.00");
}

fn wait_for_quote(engine: &mut QuoteEngine) -> Option<currency_flow::Quote> {
    let deadline = Instant::now() + ENGINE_TIMEOUT;
    while Instant::now() < deadline {
        if let Some(quote) = engine.poll() {
            return Some(quote);
        }
        thread::sleep(Duration::from_millis(25));
    }
    None
}
