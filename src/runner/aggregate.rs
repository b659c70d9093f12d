use std::sync::Arc;

use tracing::info;

use super::WorkerInstance;

/// Ephemeral aggregate for one phase. Derived from worker counters,
/// never persisted.
#[derive(Debug, Clone, Copy)]
pub struct PhaseStats {
    pub total_operations: u64,
    pub operations_per_second: f64,
}

impl PhaseStats {
    #[must_use]
    pub fn collect(workers: &[Arc<WorkerInstance>]) -> Self {
        Self {
            total_operations: total_operations(workers),
            operations_per_second: operations_per_second(workers),
        }
    }

    #[must_use]
    pub fn has_statistics(&self) -> bool {
        self.operations_per_second > 0.0
    }

    /// Time per operation in seconds. Infinite when no throughput was
    /// recorded; gate on [`has_statistics`] before reporting it.
    ///
    /// [`has_statistics`]: PhaseStats::has_statistics
    #[must_use]
    pub fn seconds_per_operation(&self) -> f64 {
        1.0 / self.operations_per_second
    }

    /// Sum of per-worker run times weighted by their share of the total
    /// operation count.
    #[must_use]
    pub fn weighted_average_seconds(&self) -> f64 {
        self.total_operations as f64 / self.operations_per_second
    }
}

/// Pure sum of completed operations across workers, order-independent.
#[must_use]
pub fn total_operations(workers: &[Arc<WorkerInstance>]) -> u64 {
    workers
        .iter()
        .map(|worker| worker.completed_operations())
        .sum()
}

/// Weighted throughput: the sum of each worker's independent rate.
///
/// A worker that finished its operations faster contributes a higher
/// rate, so this is NOT total operations divided by one shared duration.
/// Workers without a positive completion time contribute zero.
#[must_use]
pub fn operations_per_second(workers: &[Arc<WorkerInstance>]) -> f64 {
    workers
        .iter()
        .map(|worker| {
            let time = worker.last_completion_time();
            if time > 0.0 {
                worker.completed_operations() as f64 / time
            } else {
                0.0
            }
        })
        .sum()
}

/// Logs the end-of-phase results block.
pub(super) fn log_results(stats: PhaseStats) {
    info!("");
    info!("=== Results ===");
    if stats.has_statistics() {
        info!(
            "Completed {} operations in a weighted-average of {}s ({} ops/s, {} s/op)",
            format_count(stats.total_operations),
            format_f64(stats.weighted_average_seconds(), 2),
            format_f64(stats.operations_per_second, 2),
            format_f64(stats.seconds_per_operation(), 3),
        );
    } else {
        info!("Completed without generating operation statistics.");
    }
    info!("");
}

/// Formats an integer with thousands separators: 1234567 -> "1,234,567".
#[must_use]
pub(super) fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, c);
    }
    grouped
}

/// Formats a non-negative float with thousands separators on the integer
/// part and a fixed number of decimals.
#[must_use]
pub(super) fn format_f64(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match formatted.split_once('.') {
        Some((integer, fraction)) => {
            let whole: u64 = integer.parse().unwrap_or(0);
            format!("{}.{}", format_count(whole), fraction)
        }
        None => formatted,
    }
}
