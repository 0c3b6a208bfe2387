//! Gateway request counters, exposed as JSON on `/metrics`.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Receipt gateway metrics
#[derive(Default)]
pub struct GatewayMetrics {
    pub receipts_processed: AtomicU64,
    pub receipts_rejected: AtomicU64,
    pub points_served: AtomicU64,
    pub points_not_found: AtomicU64,
    pub requests_timed_out: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub receipts_processed: u64,
    pub receipts_rejected: u64,
    pub points_served: u64,
    pub points_not_found: u64,
    pub requests_timed_out: u64,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a receipt submission
    pub fn record_submission(&self, accepted: bool) {
        if accepted {
            self.receipts_processed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.receipts_rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record the outcome of a points lookup
    pub fn record_points_lookup(&self, found: bool) {
        if found {
            self.points_served.fetch_add(1, Ordering::Relaxed);
        } else {
            self.points_not_found.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_timeout(&self) {
        self.requests_timed_out.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            receipts_processed: self.receipts_processed.load(Ordering::Relaxed),
            receipts_rejected: self.receipts_rejected.load(Ordering::Relaxed),
            points_served: self.points_served.load(Ordering::Relaxed),
            points_not_found: self.points_not_found.load(Ordering::Relaxed),
            requests_timed_out: self.requests_timed_out.load(Ordering::Relaxed),
        }
    }

    /// Export metrics as JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or_default()
    }
}
