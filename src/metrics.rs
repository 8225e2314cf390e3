//! Load metrics for the experience section.
//!
//! Counters are owned by each [`ExperienceLoader`](crate::loader::ExperienceLoader)
//! so independent sections (and tests) never share numbers.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct LoadMetrics {
    /// Loads that were started (including ones later superseded)
    started: AtomicUsize,

    /// Loads whose rows replaced the section state
    applied: AtomicUsize,

    /// Loads that ended in a configuration or fetch error
    failed: AtomicUsize,

    /// Loads whose result was discarded because a newer load or teardown won
    superseded: AtomicUsize,
}

impl LoadMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_started(&self) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_applied(&self) {
        self.applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_superseded(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::Relaxed)
    }

    pub fn applied(&self) -> usize {
        self.applied.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn superseded(&self) -> usize {
        self.superseded.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let started = self.started();
        let applied = self.applied();
        let failed = self.failed();
        let superseded = self.superseded();

        // Loads still waiting on the store
        let in_flight = started.saturating_sub(applied + failed + superseded);

        let success_rate = if applied + failed > 0 {
            (applied as f64 / (applied + failed) as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            started,
            applied,
            failed,
            superseded,
            in_flight,
            success_rate,
        }
    }
}

/// Snapshot of load metrics at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub started: usize,
    pub applied: usize,
    pub failed: usize,
    pub superseded: usize,
    pub in_flight: usize,
    /// Percentage of settled loads that applied rows (0-100)
    pub success_rate: f64,
}

impl MetricsReport {
    /// Format the report as a human-readable string.
    pub fn format(&self) -> String {
        format!(
            "Experience Loads:\n\
             - Started: {}\n\
             - Applied: {}\n\
             - Failed: {}\n\
             - Superseded: {}\n\
             - In flight: {}\n\
             - Success Rate: {:.1}%",
            self.started,
            self.applied,
            self.failed,
            self.superseded,
            self.in_flight,
            self.success_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let report = LoadMetrics::new().report();

        assert_eq!(report.started, 0);
        assert_eq!(report.in_flight, 0);
        assert_eq!(report.success_rate, 0.0);
    }

    #[test]
    fn test_report_counts_and_rate() {
        let metrics = LoadMetrics::new();
        for _ in 0..5 {
            metrics.record_started();
        }
        metrics.record_applied();
        metrics.record_applied();
        metrics.record_applied();
        metrics.record_failed();

        let report = metrics.report();
        assert_eq!(report.applied, 3);
        assert_eq!(report.failed, 1);
        assert_eq!(report.in_flight, 1);
        assert_eq!(report.success_rate, 75.0);
    }

    #[test]
    fn test_superseded_is_not_counted_in_rate() {
        let metrics = LoadMetrics::new();
        metrics.record_started();
        metrics.record_started();
        metrics.record_superseded();
        metrics.record_applied();

        let report = metrics.report();
        assert_eq!(report.superseded, 1);
        assert_eq!(report.in_flight, 0);
        assert_eq!(report.success_rate, 100.0);
    }

    #[test]
    fn test_format_includes_all_counters() {
        let metrics = LoadMetrics::new();
        metrics.record_started();
        metrics.record_failed();

        let text = metrics.report().format();
        assert!(text.contains("Started: 1"));
        assert!(text.contains("Failed: 1"));
        assert!(text.contains("Success Rate: 0.0%"));
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(LoadMetrics::new().report()).expect("serialize");
        assert_eq!(json["started"], 0);
        assert!(json.get("success_rate").is_some());
    }
}
