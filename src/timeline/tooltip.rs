// Per-interval tooltip HTML, pre-rendered since the config carries no code

use super::bands::Band;

/// Timestamp for tooltip display, UTC. Falls back to the raw millisecond
/// value when out of chrono's range.
fn format_ts(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|t| t.format("%d.%m.%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Renders one interval's tooltip: row name, pod, utilization with band
/// label, duration in minutes, start/end timestamps.
pub fn bar_tooltip_html(
    display_name: &str,
    pod: &str,
    avg_util: f64,
    band: &Band,
    start_ms: i64,
    end_ms: i64,
) -> String {
    let duration_min = ((end_ms - start_ms) as f64 / 60_000.0).round() as i64;
    format!(
        concat!(
            r#"<div style="padding: 8px; min-width: 200px;">"#,
            r#"<div style="font-weight: bold; font-size: 13px; margin-bottom: 8px; "#,
            r#"border-bottom: 1px solid #444; padding-bottom: 4px;">{name}</div>"#,
            r#"<table style="width: 100%;">"#,
            r#"<tr><td style="color: #aaa;">Pod:</td>"#,
            r#"<td style="text-align: right; font-weight: bold;">{pod}</td></tr>"#,
            r#"<tr><td style="color: #aaa;">Utilization:</td>"#,
            r#"<td style="text-align: right;"><span style="color: {color}; "#,
            r#"font-weight: bold;">{util:.1}%</span> ({band})</td></tr>"#,
            r#"<tr><td style="color: #aaa;">Duration:</td>"#,
            r#"<td style="text-align: right;">{minutes} min</td></tr>"#,
            r#"<tr><td style="color: #aaa;">Start:</td>"#,
            r#"<td style="text-align: right; font-size: 11px;">{start}</td></tr>"#,
            r#"<tr><td style="color: #aaa;">End:</td>"#,
            r#"<td style="text-align: right; font-size: 11px;">{end}</td></tr>"#,
            r#"</table></div>"#,
        ),
        name = display_name,
        pod = pod,
        color = band.color,
        util = avg_util,
        band = band.label,
        minutes = duration_min,
        start = format_ts(start_ms),
        end = format_ts(end_ms),
    )
}
