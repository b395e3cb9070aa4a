//! Aggregate report and human-readable formatting.

use std::fmt;

/// Final result of one harness run.
///
/// `total` is the exact `f64` sum of the per-worker values; rounding only
/// happens at display time. The per-worker list is index-aligned to worker
/// index, which matches logical-core index 0..N-1.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateReport {
    total: f64,
    per_worker: Vec<f64>,
}

impl AggregateReport {
    /// Build a report from per-worker results in submission order.
    pub fn from_results(per_worker: Vec<f64>) -> Self {
        let total = per_worker.iter().sum();
        Self { total, per_worker }
    }

    /// Total throughput in programs per second.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Per-worker throughput, one entry per worker index.
    pub fn per_worker(&self) -> &[f64] {
        &self.per_worker
    }

    pub fn worker_count(&self) -> usize {
        self.per_worker.len()
    }
}

impl fmt::Display for AggregateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Throughput Results ---")?;
        writeln!(f, "Workers:          {}", self.per_worker.len())?;
        writeln!(
            f,
            "Total throughput: {} programs/sec",
            format_rate(self.total)
        )?;
        writeln!(
            f,
            "Equivalent:       {} kProg/s, {} MProg/s",
            format_rate(self.total / 1e3),
            format_rate(self.total / 1e6)
        )?;
        writeln!(f, "Per-worker breakdown:")?;
        for (index, rate) in self.per_worker.iter().enumerate() {
            writeln!(f, "  worker {:>3}: {:>14.1} programs/sec", index, rate)?;
        }
        Ok(())
    }
}

/// Format a rate with thousands separators and two decimal places.
///
/// Rust's formatter has no grouping flag, so the grouping is done by hand
/// on the integer part.
pub fn format_rate(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };
    format!("{}.{}", group_thousands(int_part), frac_part)
}

/// Format an integer count with thousands separators.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}
