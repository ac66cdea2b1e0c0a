use crate::analysis::report::LatencyBucket;

/// Fixed-bucket latency histogram. Samples above the last bound land in an
/// overflow bucket.
#[derive(Clone)]
pub struct Histogram {
    buckets: &'static [f64],
    counts: Vec<u64>,
}

impl Histogram {
    pub(crate) fn new(buckets: &'static [f64]) -> Self {
        Self {
            buckets,
            counts: vec![0; buckets.len() + 1], // +∞ bucket
        }
    }

    pub(crate) fn record(&mut self, value_ms: f64) {
        let slot = self
            .buckets
            .iter()
            .position(|upper| value_ms <= *upper)
            .unwrap_or(self.buckets.len());

        self.counts[slot] += 1;
    }

    pub(crate) fn snapshot(&self) -> Vec<LatencyBucket> {
        let mut out = Vec::with_capacity(self.counts.len());

        for (i, count) in self.counts.iter().enumerate() {
            let label = match (i.checked_sub(1).map(|p| self.buckets[p]), self.buckets.get(i)) {
                (None, Some(upper)) => format!("0–{upper}ms"),
                (Some(lower), Some(upper)) => format!(">{lower}–{upper}ms"),
                (Some(lower), None) => format!(">{lower}ms"),
                // empty bucket list: everything is overflow
                (None, None) => "all".to_string(),
            };

            out.push(LatencyBucket {
                label,
                count: *count,
            });
        }

        out
    }
}
