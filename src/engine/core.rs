use std::sync::mpsc::{self, Receiver, Sender};

use super::{
    messages::{QuoteJob, QuoteReady},
    worker::spawn_worker_thread,
};
use crate::{
    config::DF,
    domain::{ConversionRequest, Currency, Quote},
};

/// Owns the channel pair to the resolver worker. Requests go out when the
/// debounce window closes; resolved quotes come back on later frames.
///
/// There is deliberately no cancellation: a resolution that was already
/// started lands whenever it lands, and the last one to complete is the one
/// displayed. The sequence number stamped on each request is carried for
/// logging and display only.
pub struct QuoteEngine {
    job_tx: Sender<QuoteJob>,
    result_rx: Receiver<QuoteReady>,
    // On WASM there is no worker thread; the engine keeps both channel ends
    // and resolves jobs inline in `poll`.
    #[cfg(target_arch = "wasm32")]
    job_rx: Receiver<QuoteJob>,
    #[cfg(target_arch = "wasm32")]
    result_tx: Sender<QuoteReady>,
    in_flight: usize,
    next_seq: u64,
}

impl QuoteEngine {
    pub fn new() -> Self {
        let (job_tx, job_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();

        #[cfg(not(target_arch = "wasm32"))]
        spawn_worker_thread(job_rx, result_tx);

        Self {
            job_tx,
            result_rx,
            #[cfg(target_arch = "wasm32")]
            job_rx,
            #[cfg(target_arch = "wasm32")]
            result_tx,
            in_flight: 0,
            next_seq: 0,
        }
    }

    /// Queue the latest form values for resolution. Returns the sequence
    /// number stamped on the request.
    pub fn submit(&mut self, from: Currency, to: Currency, amount: f64) -> u64 {
        self.next_seq += 1;
        let request = ConversionRequest {
            seq: self.next_seq,
            from,
            to,
            amount,
        };
        if DF.log_engine {
            log::info!("Submitting quote request #{}: {from} -> {to}", self.next_seq);
        }
        // Count the job only once it is actually queued; a failed send
        // (worker gone during shutdown) must not leave `is_busy` stuck.
        if self.job_tx.send(QuoteJob { request }).is_ok() {
            self.in_flight += 1;
        }
        self.next_seq
    }

    /// Drain finished quotes and return the newest one, if any. The caller
    /// overwrites whatever was displayed before, even when the drained
    /// quote was superseded while in flight.
    pub fn poll(&mut self) -> Option<Quote> {
        #[cfg(target_arch = "wasm32")]
        while let Ok(job) = self.job_rx.try_recv() {
            super::worker::process_job(job, &self.result_tx);
        }

        let mut latest = None;
        while let Ok(ready) = self.result_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if DF.log_engine {
                log::info!(
                    "Quote #{} resolved in {}ms",
                    ready.quote.seq,
                    ready.duration_ms
                );
            }
            latest = Some(ready.quote);
        }
        latest
    }

    /// True while at least one resolution is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_send_does_not_mark_engine_busy() {
        // Engine whose worker side is already gone: the job send fails, so
        // the request must not be counted as in flight.
        let (job_tx, job_rx) = mpsc::channel();
        let (_result_tx, result_rx) = mpsc::channel::<QuoteReady>();
        drop(job_rx);

        let mut engine = QuoteEngine {
            job_tx,
            result_rx,
            in_flight: 0,
            next_seq: 0,
        };

        let seq = engine.submit(Currency::Usd, Currency::Eur, 1.0);
        assert_eq!(seq, 1);
        assert!(!engine.is_busy());
        assert!(engine.poll().is_none());
    }
}
