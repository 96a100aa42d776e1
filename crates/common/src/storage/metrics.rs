//! Connection pool counters
//!
//! Lock-free tallies of checkout outcomes. Readers take a
//! [`PoolMetricsSnapshot`] instead of touching the atomics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Running totals for one [`SqlitePool`](super::SqlitePool).
#[derive(Debug, Default)]
pub struct StorageMetrics {
    acquired: AtomicU64,
    timeouts: AtomicU64,
    errors: AtomicU64,
    wait_ms_total: AtomicU64,
}

/// Point-in-time copy of [`StorageMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolMetricsSnapshot {
    /// Successful checkouts.
    pub connections_acquired: u64,
    /// Checkouts that hit the pool's connection timeout.
    pub connection_timeouts: u64,
    /// Checkouts that failed for any other reason.
    pub connection_errors: u64,
    /// Mean wait for a successful checkout, in milliseconds.
    pub avg_acquire_ms: u64,
}

impl StorageMetrics {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a successful checkout that waited `waited_ms`.
    pub fn record_acquired(&self, waited_ms: u64) {
        self.acquired.fetch_add(1, Ordering::Relaxed);
        self.wait_ms_total.fetch_add(waited_ms, Ordering::Relaxed);
    }

    /// Count a checkout that hit the connection timeout.
    pub fn record_timeout(&self) {
        self.timeouts.fetch_add(1, Ordering::Relaxed);
    }

    /// Count any other checkout failure.
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Read every counter once.
    pub fn snapshot(&self) -> PoolMetricsSnapshot {
        let acquired = self.acquired.load(Ordering::Relaxed);
        let wait_ms_total = self.wait_ms_total.load(Ordering::Relaxed);

        PoolMetricsSnapshot {
            connections_acquired: acquired,
            connection_timeouts: self.timeouts.load(Ordering::Relaxed),
            connection_errors: self.errors.load(Ordering::Relaxed),
            avg_acquire_ms: wait_ms_total.checked_div(acquired).unwrap_or(0),
        }
    }
}
