// Query-result frames as the dashboard runtime hands them over

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name of the shared time field inside a frame.
pub const TIME_FIELD: &str = "Time";

/// Ref id of the utilization frame (query A). The only frame the transform requires.
pub const UTILIZATION_REF: &str = "A";

/// Ref id of the memory-percent frame (query B). Carried for the input contract.
pub const MEMORY_REF: &str = "B";

/// Ref id of the pod-activity frame (query C). Consulted for pod resolution.
pub const POD_REF: &str = "C";

/// One column of a frame: a time axis or a per-entity sample array with labels.
/// Null samples deserialize to `None` and count as zero utilization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub values: Vec<Option<f64>>,
}

impl Field {
    /// Label value, treating an empty string the same as absence.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str).filter(|s| !s.is_empty())
    }
}

/// One query result: a ref id plus its field list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFrame {
    #[serde(default)]
    pub ref_id: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl DataFrame {
    /// Shared time axis in epoch milliseconds; empty when the frame has no time field.
    pub fn time_values(&self) -> Vec<i64> {
        self.fields
            .iter()
            .find(|f| f.name == TIME_FIELD)
            .map(|f| f.values.iter().map(|v| v.unwrap_or(0.0) as i64).collect())
            .unwrap_or_default()
    }

    /// Every field except the time axis.
    pub fn data_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.name != TIME_FIELD)
    }
}

/// The collection of frames supplied per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryData {
    #[serde(default)]
    pub series: Vec<DataFrame>,
}

impl QueryData {
    pub fn frame(&self, ref_id: &str) -> Option<&DataFrame> {
        self.series.iter().find(|s| s.ref_id == ref_id)
    }
}
