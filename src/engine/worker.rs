use std::sync::mpsc::{Receiver, Sender};

// Only import thread on non-WASM targets
#[cfg(not(target_arch = "wasm32"))]
use std::thread;

use super::messages::{QuoteJob, QuoteReady};

#[cfg(not(target_arch = "wasm32"))]
use crate::config::constants::RESOLVE_LATENCY;
use crate::{config::DF, domain::Quote, utils::AppInstant};

/// NATIVE ONLY: Spawns a background thread to resolve quote jobs.
/// Each job sleeps the simulated lookup latency before resolving; a job
/// already started cannot be cancelled, its result simply arrives late.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_worker_thread(rx: Receiver<QuoteJob>, tx: Sender<QuoteReady>) {
    thread::spawn(move || {
        while let Ok(job) = rx.recv() {
            thread::sleep(RESOLVE_LATENCY);
            process_job(job, &tx);
        }
    });
}

/// WASM ONLY: No-op.
/// The engine holds the receiver and resolves jobs in the update loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn_worker_thread(_rx: Receiver<QuoteJob>, _tx: Sender<QuoteReady>) {
    // Do nothing.
}

pub(super) fn process_job(job: QuoteJob, tx: &Sender<QuoteReady>) {
    let start = AppInstant::now();
    let quote = Quote::resolve(&job.request);
    if DF.log_quotes {
        log::info!(
            "Resolved quote #{} ({} {} -> {} {}): {}",
            quote.seq,
            job.request.amount,
            quote.from,
            quote.converted,
            quote.to,
            quote.unit_rate_line()
        );
    }
    // Send can only fail when the UI side is gone, i.e. during shutdown.
    let _ = tx.send(QuoteReady {
        quote,
        duration_ms: start.elapsed().as_millis(),
    });
}
