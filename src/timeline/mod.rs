// GPU timeline pipeline: guard -> classify -> rows -> segments -> chart option

pub mod bands;
pub mod classify;
pub mod rows;
pub mod segments;
mod tooltip;

use crate::models::{
    Axis, AxisLabel, AxisLine, BarStyle, BarTooltip, BarValue, ChartConfig, ColorStyle, DataZoom,
    DisplayRow, Encode, Entity, GanttBar, GanttSeries, Grid, ItemStyle, Legend, LegendItem,
    LineStyle, POD_REF, QueryData, SplitLine, TextStyle, Tooltip, UTILIZATION_REF,
};
use bands::BandScale;
use segments::{Segment, SegmentPolicy};

/// Placeholder title shown while the dashboard has not delivered data yet.
pub const WAITING_TEXT: &str = "Waiting for data...";

const MAX_AXIS_LABEL_CHARS: usize = 35;
const TRUNCATED_LABEL_CHARS: usize = 32;
const BAR_HEIGHT_RATIO: f64 = 0.65;
const MIN_BAR_WIDTH_PX: f64 = 3.0;
const BAR_CORNER_RADIUS: f64 = 2.0;

/// Injected presentation knobs: segment split policy and band scale.
#[derive(Debug, Clone, Default)]
pub struct PanelOptions {
    pub segment: SegmentPolicy,
    pub bands: BandScale,
}

/// The whole transformation: frames in, declarative chart option out.
/// Pure and total — any structurally valid input produces a config, the
/// waiting placeholder when the utilization frame is missing or empty.
pub fn build_chart(query: &QueryData, opts: &PanelOptions) -> ChartConfig {
    let Some(util) = query.frame(UTILIZATION_REF) else {
        return ChartConfig::placeholder(WAITING_TEXT);
    };
    if util.fields.is_empty() {
        return ChartConfig::placeholder(WAITING_TEXT);
    }

    let times = util.time_values();
    let inventory = classify::classify(util, query.frame(POD_REF));
    let display_rows = rows::build_rows(inventory);

    let mut data = Vec::new();
    for row in &display_rows {
        for segment in segments::compact(&times, row.entity.values(), &opts.segment) {
            data.push(gantt_bar(row, &segment, &opts.bands));
        }
    }

    let axis_labels = display_rows.iter().map(|r| truncate_label(&r.label)).collect();
    chart_option(axis_labels, data, &opts.bands)
}

/// Category labels over 35 chars shorten to 32 + ellipsis; indented MIG
/// labels stay as-is so the tree shape survives.
fn truncate_label(label: &str) -> String {
    if label.starts_with("  └─") || label.chars().count() <= MAX_AXIS_LABEL_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(TRUNCATED_LABEL_CHARS).collect();
    short.push_str("...");
    short
}

fn gantt_bar(row: &DisplayRow, segment: &Segment, scale: &BandScale) -> GanttBar {
    let band = scale.classify(segment.avg_util);
    let pod = row.entity.pod().unwrap_or("N/A");
    let (gpu_id, model_name) = match &row.entity {
        Entity::Gpu(g) => (Some(g.gpu_index.clone()), Some(g.model_name.clone())),
        Entity::MigSlice(_) => (None, None),
    };

    GanttBar {
        value: BarValue(row.index, segment.start_ms, segment.end_ms, segment.avg_util),
        item_style: ItemStyle {
            color: band.color.clone(),
            border_color: "rgba(255,255,255,0.3)".into(),
            border_width: 1,
        },
        tooltip: Some(BarTooltip {
            formatter: tooltip::bar_tooltip_html(
                &row.label,
                pod,
                segment.avg_util,
                band,
                segment.start_ms,
                segment.end_ms,
            ),
        }),
        labels: row.entity.labels().clone(),
        hostname: row.entity.hostname().to_string(),
        gpu_id,
        model_name,
        exported_pod: pod.to_string(),
        display_name: row.label.clone(),
    }
}

fn chart_option(axis_labels: Vec<String>, data: Vec<GanttBar>, scale: &BandScale) -> ChartConfig {
    let legend_items = scale
        .bands()
        .iter()
        .map(|b| LegendItem {
            name: b.legend.clone(),
            item_style: ColorStyle {
                color: b.color.clone(),
            },
        })
        .collect();

    ChartConfig {
        background_color: Some("transparent".into()),
        title: None,
        tooltip: Some(Tooltip {
            trigger: "item".into(),
            background_color: "rgba(30, 30, 30, 0.95)".into(),
            border_color: "#444".into(),
            border_width: 1,
            text_style: TextStyle {
                color: Some("#fff".into()),
                font_size: Some(12),
            },
        }),
        legend: Some(Legend {
            show: true,
            data: legend_items,
            bottom: 5,
            item_width: 18,
            item_height: 12,
            text_style: TextStyle {
                color: Some("#ccc".into()),
                font_size: Some(11),
            },
        }),
        grid: Some(Grid {
            left: "18%".into(),
            right: "3%".into(),
            top: "3%".into(),
            bottom: "18%".into(),
            contain_label: false,
        }),
        x_axis: Some(Axis {
            kind: "time".into(),
            data: None,
            axis_line: AxisLine {
                line_style: LineStyle {
                    color: Some("#444".into()),
                    kind: None,
                },
            },
            axis_label: AxisLabel {
                color: Some("#aaa".into()),
                font_size: Some(10),
                width: None,
                overflow: None,
                formatter: Some("{dd}.{MM}\n{HH}:{mm}".into()),
            },
            inverse: None,
            split_line: SplitLine {
                show: true,
                line_style: LineStyle {
                    color: Some("#333".into()),
                    kind: Some("dashed".into()),
                },
            },
        }),
        y_axis: Some(Axis {
            kind: "category".into(),
            data: Some(axis_labels),
            axis_line: AxisLine {
                line_style: LineStyle {
                    color: Some("#444".into()),
                    kind: None,
                },
            },
            axis_label: AxisLabel {
                color: Some("#ccc".into()),
                font_size: Some(11),
                width: Some(200),
                overflow: Some("truncate".into()),
                formatter: None,
            },
            inverse: Some(true),
            split_line: SplitLine {
                show: true,
                line_style: LineStyle {
                    color: Some("#222".into()),
                    kind: None,
                },
            },
        }),
        data_zoom: Some(vec![
            DataZoom {
                kind: "slider".into(),
                x_axis_index: Some(0),
                y_axis_index: None,
                filter_mode: "none".into(),
                bottom: Some(30),
                height: Some(20),
                right: None,
                width: None,
                border_color: Some("#444".into()),
                background_color: Some("#1a1a1a".into()),
                filler_color: Some("rgba(100, 100, 100, 0.3)".into()),
                handle_style: Some(ColorStyle {
                    color: "#666".into(),
                }),
                text_style: Some(TextStyle {
                    color: Some("#aaa".into()),
                    font_size: None,
                }),
                zoom_on_mouse_wheel: None,
                move_on_mouse_move: None,
            },
            DataZoom {
                kind: "inside".into(),
                x_axis_index: Some(0),
                y_axis_index: None,
                filter_mode: "none".into(),
                bottom: None,
                height: None,
                right: None,
                width: None,
                border_color: None,
                background_color: None,
                filler_color: None,
                handle_style: None,
                text_style: None,
                zoom_on_mouse_wheel: Some(true),
                move_on_mouse_move: Some(true),
            },
            DataZoom {
                kind: "slider".into(),
                x_axis_index: None,
                y_axis_index: Some(0),
                filter_mode: "none".into(),
                bottom: None,
                height: None,
                right: Some(5),
                width: Some(15),
                border_color: Some("#444".into()),
                background_color: Some("#1a1a1a".into()),
                filler_color: Some("rgba(100, 100, 100, 0.3)".into()),
                handle_style: None,
                text_style: None,
                zoom_on_mouse_wheel: None,
                move_on_mouse_move: None,
            },
        ]),
        series: vec![GanttSeries {
            name: "GPU Timeline".into(),
            kind: "custom".into(),
            encode: Encode { x: vec![1, 2], y: 0 },
            bar_style: BarStyle {
                height_ratio: BAR_HEIGHT_RATIO,
                min_width: MIN_BAR_WIDTH_PX,
                border_radius: BAR_CORNER_RADIUS,
            },
            data,
            clip: true,
        }],
        animation: Some(true),
        animation_duration: Some(500),
        animation_easing: Some("cubicOut".into()),
    }
}
