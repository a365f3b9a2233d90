// GPU / MIG entities and their display rows

use std::collections::HashMap;

/// Identifies one physical GPU across all frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    pub hostname: String,
    pub uuid: String,
}

/// One full (non-partitioned) GPU column.
#[derive(Debug, Clone)]
pub struct GpuRecord {
    pub key: EntityKey,
    pub gpu_index: String,
    pub model_name: String,
    pub pod: Option<String>,
    pub labels: HashMap<String, String>,
    pub values: Vec<Option<f64>>,
}

/// One MIG slice column, grouped under its parent GPU's key.
#[derive(Debug, Clone)]
pub struct MigRecord {
    pub parent: EntityKey,
    pub mig_id: String,
    pub profile: String,
    pub pod: Option<String>,
    pub labels: HashMap<String, String>,
    pub values: Vec<Option<f64>>,
}

/// Classification result, decided once per input column.
#[derive(Debug, Clone)]
pub enum Entity {
    Gpu(GpuRecord),
    MigSlice(MigRecord),
}

impl Entity {
    pub fn hostname(&self) -> &str {
        match self {
            Entity::Gpu(g) => &g.key.hostname,
            Entity::MigSlice(m) => &m.parent.hostname,
        }
    }

    pub fn values(&self) -> &[Option<f64>] {
        match self {
            Entity::Gpu(g) => &g.values,
            Entity::MigSlice(m) => &m.values,
        }
    }

    pub fn labels(&self) -> &HashMap<String, String> {
        match self {
            Entity::Gpu(g) => &g.labels,
            Entity::MigSlice(m) => &m.labels,
        }
    }

    pub fn pod(&self) -> Option<&str> {
        match self {
            Entity::Gpu(g) => g.pod.as_deref(),
            Entity::MigSlice(m) => m.pod.as_deref(),
        }
    }
}

/// One lane of the category axis. Indices are contiguous from 0 in
/// (hostname, GPU, ascending MIG id) order.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    pub index: usize,
    pub label: String,
    pub entity: Entity,
}
