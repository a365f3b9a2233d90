// Column classification: full GPUs vs MIG slices, keyed by (hostname, UUID)

use std::collections::HashMap;

use tracing::warn;

use crate::models::{DataFrame, EntityKey, Field, GpuRecord, MigRecord};

/// Classified columns of the utilization frame: GPUs in encounter order plus
/// MIG slices grouped under their parent key.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub gpus: Vec<GpuRecord>,
    pub migs: HashMap<EntityKey, Vec<MigRecord>>,
}

/// Partitions every data field of the utilization frame. A field with a
/// non-empty `GPU_I_ID` label is a MIG slice; everything else is a full GPU.
/// Duplicate GPU keys overwrite in place (last write wins, first position
/// kept) with a warning, matching the source panel.
pub fn classify(util: &DataFrame, pods: Option<&DataFrame>) -> Inventory {
    let mut inventory = Inventory::default();
    let mut gpu_index: HashMap<EntityKey, usize> = HashMap::new();

    for field in util.data_fields() {
        let hostname = field.label("Hostname").unwrap_or("unknown").to_string();
        let uuid = field.label("UUID").unwrap_or(&field.name).to_string();
        let key = EntityKey { hostname, uuid };

        if let Some(mig_id) = field.label("GPU_I_ID") {
            let record = MigRecord {
                mig_id: mig_id.to_string(),
                profile: field.label("GPU_I_PROFILE").unwrap_or("").to_string(),
                pod: resolve_pod(field, &key.uuid, Some(mig_id), pods),
                labels: field.labels.clone(),
                values: field.values.clone(),
                parent: key.clone(),
            };
            inventory.migs.entry(key).or_default().push(record);
        } else {
            let record = GpuRecord {
                gpu_index: field.label("gpu").unwrap_or("0").to_string(),
                model_name: field.label("modelName").unwrap_or("GPU").to_string(),
                pod: resolve_pod(field, &key.uuid, None, pods),
                labels: field.labels.clone(),
                values: field.values.clone(),
                key: key.clone(),
            };
            match gpu_index.get(&key).copied() {
                Some(at) => {
                    warn!(
                        hostname = %key.hostname,
                        uuid = %key.uuid,
                        "duplicate GPU column; keeping the later one"
                    );
                    inventory.gpus[at] = record;
                }
                None => {
                    gpu_index.insert(key, inventory.gpus.len());
                    inventory.gpus.push(record);
                }
            }
        }
    }

    inventory
}

/// Pod name for a column: its own `exported_pod` label, else the matching
/// column of the pod-activity frame.
fn resolve_pod(
    field: &Field,
    uuid: &str,
    mig_id: Option<&str>,
    pods: Option<&DataFrame>,
) -> Option<String> {
    if let Some(pod) = field.label("exported_pod") {
        return Some(pod.to_string());
    }
    pods?
        .data_fields()
        .find(|f| f.label("UUID") == Some(uuid) && f.label("GPU_I_ID") == mig_id)
        .and_then(|f| f.label("exported_pod"))
        .map(str::to_string)
}
