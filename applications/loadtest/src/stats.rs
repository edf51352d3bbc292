//! Latency summaries

use std::fmt;
use std::time::Duration;

/// Summary of per-worker wall times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyStats {
    pub samples: usize,
    pub average: Duration,
    pub median: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl LatencyStats {
    /// Summarise `times`; `None` when there are no samples
    ///
    /// Percentiles use the nearest-rank-below rule on the sorted samples:
    /// `sorted[floor(n * q)]`, with the median at `sorted[n / 2]`.
    pub fn from_durations(times: &[Duration]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }

        let mut sorted = times.to_vec();
        sorted.sort();

        let n = sorted.len();
        let total: Duration = sorted.iter().sum();
        let average = Duration::from_nanos((total.as_nanos() / n as u128) as u64);

        Some(Self {
            samples: n,
            average,
            median: sorted[n / 2],
            p95: sorted[percentile_index(n, 0.95)],
            p99: sorted[percentile_index(n, 0.99)],
        })
    }
}

fn percentile_index(n: usize, q: f64) -> usize {
    ((n as f64 * q) as usize).min(n - 1)
}

impl fmt::Display for LatencyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workers: {}", self.samples)?;
        writeln!(f, "Average time (sec): {:.6}", self.average.as_secs_f64())?;
        writeln!(f, "Median time (sec): {:.6}", self.median.as_secs_f64())?;
        writeln!(f, "95th percentile (sec): {:.6}", self.p95.as_secs_f64())?;
        write!(f, "99th percentile (sec): {:.6}", self.p99.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(values: &[u64]) -> Vec<Duration> {
        values.iter().copied().map(Duration::from_millis).collect()
    }

    #[test]
    fn test_empty_has_no_stats() {
        assert!(LatencyStats::from_durations(&[]).is_none());
    }

    #[test]
    fn test_single_sample() {
        let stats = LatencyStats::from_durations(&millis(&[40])).unwrap();
        assert_eq!(stats.samples, 1);
        assert_eq!(stats.average, Duration::from_millis(40));
        assert_eq!(stats.median, Duration::from_millis(40));
        assert_eq!(stats.p95, Duration::from_millis(40));
        assert_eq!(stats.p99, Duration::from_millis(40));
    }

    #[test]
    fn test_unsorted_input() {
        let stats = LatencyStats::from_durations(&millis(&[30, 10, 20, 40])).unwrap();
        assert_eq!(stats.average, Duration::from_millis(25));
        // n / 2 = 2 -> third smallest
        assert_eq!(stats.median, Duration::from_millis(30));
        // floor(4 * 0.95) = 3
        assert_eq!(stats.p95, Duration::from_millis(40));
    }

    #[test]
    fn test_hundred_workers() {
        let times: Vec<u64> = (1..=100).collect();
        let stats = LatencyStats::from_durations(&millis(&times)).unwrap();

        assert_eq!(stats.samples, 100);
        assert_eq!(stats.median, Duration::from_millis(51));
        assert_eq!(stats.p95, Duration::from_millis(96));
        assert_eq!(stats.p99, Duration::from_millis(100));
        assert_eq!(stats.average, Duration::from_micros(50_500));
    }

    #[test]
    fn test_display_lists_all_figures() {
        let stats = LatencyStats::from_durations(&millis(&[1000, 2000])).unwrap();
        let text = stats.to_string();

        assert!(text.contains("Average time (sec): 1.500000"));
        assert!(text.contains("Median time (sec): 2.000000"));
        assert!(text.contains("95th percentile"));
        assert!(text.contains("99th percentile"));
    }
}
