// Run-length compaction of one row's samples into display segments.
// Lossy on purpose: band crossings split, a drift tolerance splits bars that
// would otherwise look flat while sliding within one band.

/// Split thresholds. `band_size` is the width of one utilization band in
/// percent points, `drift_tolerance` the allowed distance from the value the
/// segment opened with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPolicy {
    pub band_size: f64,
    pub drift_tolerance: f64,
}

impl Default for SegmentPolicy {
    fn default() -> Self {
        SegmentPolicy {
            band_size: 20.0,
            drift_tolerance: 15.0,
        }
    }
}

/// One compacted span: inclusive sample-aligned timestamps plus the mean
/// utilization in percent over the covered samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start_ms: i64,
    pub end_ms: i64,
    pub avg_util: f64,
}

/// Sentinel fed in after the last sample so the final segment always closes.
const END_SENTINEL: f64 = -1.0;

fn percent(v: Option<f64>) -> f64 {
    v.unwrap_or(0.0) * 100.0
}

/// Compacts fractional samples aligned to `times` into ordered segments.
/// Every sample lands in exactly one segment; adjacent segments share no
/// samples and no sample is dropped. Zero samples (or an empty time axis)
/// produce zero segments.
pub fn compact(times: &[i64], values: &[Option<f64>], policy: &SegmentPolicy) -> Vec<Segment> {
    let n = values.len();
    if n == 0 || times.is_empty() {
        return vec![];
    }
    let last_time = times[times.len() - 1];
    let band = |p: f64| (p / policy.band_size).floor();

    let mut segments = Vec::new();
    let mut seg_start = 0usize;
    let mut seg_util = percent(values[0]);

    for i in 1..=n {
        let current = if i < n { percent(values[i]) } else { END_SENTINEL };
        let prev = percent(values[i - 1]);

        let should_split = i == n
            || band(prev) != band(current)
            || (current - seg_util).abs() > policy.drift_tolerance;

        if should_split && seg_start < i {
            let start_ms = times.get(seg_start).copied().unwrap_or(last_time);
            let end_ms = times.get(i - 1).copied().unwrap_or(last_time);
            let sum: f64 = values[seg_start..i].iter().map(|v| percent(*v)).sum();
            segments.push(Segment {
                start_ms,
                end_ms,
                avg_util: sum / (i - seg_start) as f64,
            });
            seg_start = i;
            seg_util = current;
        }
    }

    segments
}
