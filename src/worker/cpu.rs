//! CPU-based worker for vanity address generation.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{SendTimeoutError, Sender};
use rand::{CryptoRng, RngCore};
use tracing::{debug, error};

use crate::crypto::{KeyPair, NetworkProfile};
use crate::matcher::Pattern;

use super::VanityResult;

/// Statistics shared by all workers.
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Total keys generated
    pub keys_generated: AtomicU64,
    /// Matches found
    pub matches_found: AtomicU64,
}

impl WorkerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_keys(&self) -> u64 {
        self.keys_generated.load(Ordering::Relaxed)
    }

    pub fn total_matches(&self) -> u64 {
        self.matches_found.load(Ordering::Relaxed)
    }
}

/// A CPU worker that generates and tests keypairs.
pub struct CpuWorker {
    id: usize,
    pattern: Pattern,
    profile: NetworkProfile,
    result_tx: Sender<VanityResult>,
    stop_flag: Arc<AtomicBool>,
    stats: Arc<WorkerStats>,
}

impl CpuWorker {
    pub fn new(
        id: usize,
        pattern: Pattern,
        profile: NetworkProfile,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
    ) -> Self {
        Self {
            id,
            pattern,
            profile,
            result_tx,
            stop_flag,
            stats,
        }
    }

    /// Runs the worker loop, drawing keys from `rng`.
    ///
    /// Generates keypairs and tests them against the pattern until:
    /// - Stop flag is set
    /// - Channel is closed
    /// - Key generation fails, which also raises the stop flag
    pub fn run<R: RngCore + CryptoRng>(&self, rng: &mut R) {
        // Process in batches to reduce atomic operation overhead
        const BATCH_SIZE: u64 = 256;

        debug!(worker = self.id, "worker started");

        loop {
            if self.stop_flag.load(Ordering::Relaxed) {
                break;
            }

            for _ in 0..BATCH_SIZE {
                let keypair = match KeyPair::generate_with(rng, self.profile) {
                    Ok(keypair) => keypair,
                    Err(e) => {
                        error!(worker = self.id, error = %e, "key generation failed");
                        self.stop_flag.store(true, Ordering::Relaxed);
                        return;
                    }
                };

                if self.pattern.matches(keypair.address()).is_match() {
                    self.stats.matches_found.fetch_add(1, Ordering::Relaxed);

                    let result = VanityResult::from_keypair(&keypair, self.id);

                    if !self.deliver(result) {
                        return;
                    }
                }
            }

            self.stats.keys_generated.fetch_add(BATCH_SIZE, Ordering::Relaxed);
        }
    }

    /// Sends a result, giving up once the pool stops or the channel closes.
    fn deliver(&self, mut result: VanityResult) -> bool {
        const SEND_POLL: Duration = Duration::from_millis(100);

        loop {
            match self.result_tx.send_timeout(result, SEND_POLL) {
                Ok(()) => return true,
                Err(SendTimeoutError::Timeout(pending)) => {
                    if self.stop_flag.load(Ordering::Relaxed) {
                        return false;
                    }
                    result = pending;
                }
                Err(SendTimeoutError::Disconnected(_)) => {
                    debug!(worker = self.id, "result channel closed");
                    return false;
                }
            }
        }
    }
}
