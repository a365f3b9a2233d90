// Segment compaction tests: split rules, averaging, time-range coverage

use gpu_timeline::timeline::segments::{SegmentPolicy, compact};

fn samples(v: &[f64]) -> Vec<Option<f64>> {
    v.iter().map(|x| Some(*x)).collect()
}

fn minute_times(n: usize) -> Vec<i64> {
    (0..n).map(|i| (i as i64) * 60_000).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn empty_input_produces_no_segments() {
    let policy = SegmentPolicy::default();
    assert!(compact(&[], &[], &policy).is_empty());
    assert!(compact(&minute_times(3), &[], &policy).is_empty());
    assert!(compact(&[], &samples(&[0.5]), &policy).is_empty());
}

#[test]
fn single_sample_yields_zero_duration_segment() {
    let segments = compact(&[60_000], &samples(&[0.5]), &SegmentPolicy::default());
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start_ms, 60_000);
    assert_eq!(segments[0].end_ms, 60_000);
    assert_close(segments[0].avg_util, 50.0);
}

#[test]
fn band_crossings_split_as_in_source_panel() {
    // percents [5, 6, 40, 42, 91] -> bands [0, 0, 2, 2, 4]
    let times = minute_times(5);
    let segments = compact(
        &times,
        &samples(&[0.05, 0.06, 0.40, 0.42, 0.91]),
        &SegmentPolicy::default(),
    );
    assert_eq!(segments.len(), 3);

    assert_eq!(segments[0].start_ms, times[0]);
    assert_eq!(segments[0].end_ms, times[1]);
    assert_close(segments[0].avg_util, 5.5);

    assert_eq!(segments[1].start_ms, times[2]);
    assert_eq!(segments[1].end_ms, times[3]);
    assert_close(segments[1].avg_util, 41.0);

    assert_eq!(segments[2].start_ms, times[4]);
    assert_eq!(segments[2].end_ms, times[4]);
    assert_close(segments[2].avg_util, 91.0);
}

#[test]
fn adjacent_samples_in_different_bands_always_split() {
    let segments = compact(
        &minute_times(2),
        &samples(&[0.10, 0.50]),
        &SegmentPolicy::default(),
    );
    assert_eq!(segments.len(), 2);
}

#[test]
fn drift_beyond_tolerance_splits_inside_one_band() {
    // 40 and 56 share band 2 but drift by 16 > 15
    let segments = compact(
        &minute_times(2),
        &samples(&[0.40, 0.56]),
        &SegmentPolicy::default(),
    );
    assert_eq!(segments.len(), 2);
}

#[test]
fn drift_within_tolerance_merges_and_averages() {
    let segments = compact(
        &minute_times(2),
        &samples(&[0.40, 0.54]),
        &SegmentPolicy::default(),
    );
    assert_eq!(segments.len(), 1);
    assert_close(segments[0].avg_util, 47.0);
}

#[test]
fn null_samples_count_as_zero() {
    let segments = compact(
        &minute_times(2),
        &[Some(0.5), None],
        &SegmentPolicy::default(),
    );
    assert_eq!(segments.len(), 2);
    assert_close(segments[1].avg_util, 0.0);
}

#[test]
fn segments_cover_the_full_range_without_gaps_or_overlaps() {
    let values = [0.02, 0.03, 0.55, 0.58, 0.72, 0.95, 0.96, 0.10, 0.12, 0.11];
    let times = minute_times(values.len());
    let segments = compact(&times, &samples(&values), &SegmentPolicy::default());

    assert!(!segments.is_empty());
    assert!(segments.len() <= values.len());
    assert_eq!(segments[0].start_ms, times[0]);
    assert_eq!(segments[segments.len() - 1].end_ms, times[times.len() - 1]);
    for pair in segments.windows(2) {
        // next segment starts at the sample right after the previous end
        assert_eq!(pair[1].start_ms, pair[0].end_ms + 60_000);
        assert!(pair[1].start_ms > pair[0].end_ms);
    }
}

#[test]
fn short_time_axis_clamps_to_last_timestamp() {
    let segments = compact(
        &[0, 60_000],
        &samples(&[0.05, 0.06, 0.05]),
        &SegmentPolicy::default(),
    );
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start_ms, 0);
    assert_eq!(segments[0].end_ms, 60_000);
}

#[test]
fn custom_policy_changes_split_points() {
    // with a huge tolerance and band size, everything merges
    let policy = SegmentPolicy {
        band_size: 1000.0,
        drift_tolerance: 1000.0,
    };
    let segments = compact(
        &minute_times(5),
        &samples(&[0.05, 0.06, 0.40, 0.42, 0.91]),
        &policy,
    );
    assert_eq!(segments.len(), 1);
}
