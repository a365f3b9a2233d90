// Declarative chart option tree consumed by the host charting engine.
// Mirrors the ECharts option shape; serializes to camelCase JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<Vec<DataZoom>>,
    pub series: Vec<GanttSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<String>,
}

impl ChartConfig {
    /// Title-only fallback shape: centered text, no plot.
    pub fn placeholder(text: &str) -> Self {
        ChartConfig {
            background_color: None,
            title: Some(Title {
                text: text.to_string(),
                left: "center".into(),
                top: "center".into(),
                text_style: TextStyle {
                    color: Some("#999".into()),
                    font_size: Some(16),
                },
            }),
            tooltip: None,
            legend: None,
            grid: None,
            x_axis: None,
            y_axis: None,
            data_zoom: None,
            series: vec![],
            animation: None,
            animation_duration: None,
            animation_easing: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub text: String,
    pub left: String,
    pub top: String,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub show: bool,
    pub data: Vec<LegendItem>,
    pub bottom: u32,
    pub item_width: u32,
    pub item_height: u32,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    pub name: String,
    pub item_style: ColorStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStyle {
    pub color: String,
}

/// Plot margins as percent strings, matching the host panel layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub left: String,
    pub right: String,
    pub top: String,
    pub bottom: String,
    pub contain_label: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    pub line_style: LineStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub show: bool,
    pub line_style: LineStyle,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
    /// Tick template, e.g. `{dd}.{MM}\n{HH}:{mm}` on the time axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
}

/// Covers both the time axis and the inverted category axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    pub axis_line: AxisLine,
    pub axis_label: AxisLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    pub split_line: SplitLine,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoom {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<u32>,
    pub filter_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filler_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_style: Option<ColorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_on_mouse_wheel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_on_mouse_move: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub encode: Encode,
    /// Rectangle geometry for the host renderer: lane height ratio, minimum
    /// visual width in px (keeps zero-duration segments clickable), corner radius.
    pub bar_style: BarStyle,
    pub data: Vec<GanttBar>,
    pub clip: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encode {
    pub x: Vec<u32>,
    pub y: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarStyle {
    pub height_ratio: f64,
    pub min_width: f64,
    pub border_radius: f64,
}

/// `[rowIndex, startMs, endMs, avgUtilPercent]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarValue(pub usize, pub i64, pub i64, pub f64);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    pub color: String,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarTooltip {
    pub formatter: String,
}

/// One interval rectangle plus the labels carried through for tooltips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttBar {
    pub value: BarValue,
    pub item_style: ItemStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<BarTooltip>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    pub exported_pod: String,
    pub display_name: String,
}
