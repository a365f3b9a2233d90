// Domain models (ported from the ECharts panel script)

mod chart;
mod entity;
mod frame;

pub use chart::{
    Axis, AxisLabel, AxisLine, BarStyle, BarTooltip, BarValue, ChartConfig, ColorStyle, DataZoom,
    Encode, GanttBar, GanttSeries, Grid, ItemStyle, Legend, LegendItem, LineStyle, SplitLine,
    TextStyle, Title, Tooltip,
};
pub use entity::{DisplayRow, Entity, EntityKey, GpuRecord, MigRecord};
pub use frame::{DataFrame, Field, MEMORY_REF, POD_REF, QueryData, TIME_FIELD, UTILIZATION_REF};
