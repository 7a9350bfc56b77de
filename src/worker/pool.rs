//! Worker pool management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};
use rand::{CryptoRng, RngCore};
use tracing::{info, warn};

use crate::crypto::{KeyPair, NetworkProfile};
use crate::matcher::Pattern;

use super::cpu::{CpuWorker, WorkerStats};

/// A keypair whose address matched the search pattern.
#[derive(Debug, Clone)]
pub struct VanityResult {
    /// The Base58 address
    pub address: String,
    /// Private key in Wallet Import Format
    pub wif: String,
    /// The private key (64 hex chars)
    pub private_key: String,
    /// Script hash (40 hex chars)
    pub script_hash: String,
    /// The ID of the worker that found this result
    pub worker_id: usize,
}

impl VanityResult {
    pub fn from_keypair(keypair: &KeyPair, worker_id: usize) -> Self {
        Self {
            address: keypair.address().to_string(),
            wif: keypair.wif(),
            private_key: keypair.private_key_hex(),
            script_hash: keypair.script_hash(),
            worker_id,
        }
    }
}

/// Manages a pool of workers searching for a vanity address.
pub struct WorkerPool {
    num_workers: usize,
    pattern: Pattern,
    /// Worker thread handles (Option to allow taking during join)
    handles: Option<Vec<JoinHandle<()>>>,
    result_rx: Receiver<VanityResult>,
    stop_flag: Arc<AtomicBool>,
    stats: Arc<WorkerStats>,
    start_time: Instant,
}

impl WorkerPool {
    /// Creates a new worker pool with the specified number of workers.
    pub fn new(num_workers: usize, pattern: Pattern, profile: NetworkProfile) -> Self {
        Self::with_rng(num_workers, pattern, profile, rand::thread_rng)
    }

    /// Creates a pool whose workers draw keys from `rng_factory()`.
    ///
    /// The factory runs once on each worker thread.
    pub fn with_rng<F, R>(
        num_workers: usize,
        pattern: Pattern,
        profile: NetworkProfile,
        rng_factory: F,
    ) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: RngCore + CryptoRng,
    {
        let (result_tx, result_rx) = bounded(100);
        let stop_flag = Arc::new(AtomicBool::new(false));
        let stats = Arc::new(WorkerStats::new());

        info!(workers = num_workers, network = profile.name, "starting worker pool");

        let handles = Self::spawn_workers(
            num_workers,
            pattern.clone(),
            profile,
            result_tx,
            stop_flag.clone(),
            stats.clone(),
            Arc::new(rng_factory),
        );

        Self {
            num_workers,
            pattern,
            handles: Some(handles),
            result_rx,
            stop_flag,
            stats,
            start_time: Instant::now(),
        }
    }

    fn spawn_workers<F, R>(
        num_workers: usize,
        pattern: Pattern,
        profile: NetworkProfile,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
        rng_factory: Arc<F>,
    ) -> Vec<JoinHandle<()>>
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: RngCore + CryptoRng,
    {
        (0..num_workers)
            .map(|id| {
                let pattern = pattern.clone();
                let result_tx = result_tx.clone();
                let stop_flag = stop_flag.clone();
                let stats = stats.clone();
                let rng_factory = rng_factory.clone();

                thread::Builder::new()
                    .name(format!("neo-keygen-worker-{}", id))
                    .spawn(move || {
                        let mut rng = rng_factory();
                        let worker =
                            CpuWorker::new(id, pattern, profile, result_tx, stop_flag, stats);
                        worker.run(&mut rng);
                    })
                    .expect("Failed to spawn worker thread")
            })
            .collect()
    }

    /// Waits for a result with a timeout.
    ///
    /// Returns `Some(result)` if a match is found, `None` if timeout expires.
    pub fn wait_for_result(&self, timeout: Duration) -> Option<VanityResult> {
        self.result_rx.recv_timeout(timeout).ok()
    }

    /// Signals all workers to stop.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
    }

    /// Stops and waits for all workers to complete.
    pub fn join(mut self) {
        self.stop();
        self.join_handles();
    }

    fn join_handles(&mut self) {
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let name = handle.thread().name().unwrap_or("worker").to_owned();
                if handle.join().is_err() {
                    warn!(thread = %name, "worker thread panicked");
                }
            }
        }
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the total keys generated across all workers.
    pub fn total_keys(&self) -> u64 {
        self.stats.total_keys()
    }

    pub fn total_matches(&self) -> u64 {
        self.stats.total_matches()
    }

    /// Returns the elapsed time since the pool was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the current generation rate (keys per second).
    pub fn keys_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_keys() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Returns a clone of the stop flag for external use (e.g., signal handlers).
    pub fn stop_flag_clone(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop();
        self.join_handles();
    }
}
