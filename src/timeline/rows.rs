// Display axis assembly: hostname-sorted GPUs, each followed by its MIG slices

use crate::models::{DisplayRow, Entity};

use super::classify::Inventory;

/// Builds the ordered category axis. GPUs sort by hostname (stable, so ties
/// keep encounter order); each GPU's MIG slices follow it sorted by numeric
/// slice id, non-numeric ids last. MIG slices whose parent GPU never appeared
/// produce no row, matching the source panel.
pub fn build_rows(mut inventory: Inventory) -> Vec<DisplayRow> {
    inventory
        .gpus
        .sort_by(|a, b| a.key.hostname.cmp(&b.key.hostname));

    let mut rows = Vec::new();
    for gpu in inventory.gpus {
        let label = format!(
            "{} / GPU-{} [{}]",
            gpu.key.hostname, gpu.gpu_index, gpu.model_name
        );
        let mut migs = inventory.migs.remove(&gpu.key).unwrap_or_default();
        rows.push(DisplayRow {
            index: rows.len(),
            label,
            entity: Entity::Gpu(gpu),
        });

        migs.sort_by_key(|m| m.mig_id.parse::<i64>().unwrap_or(i64::MAX));
        for mig in migs {
            rows.push(DisplayRow {
                index: rows.len(),
                label: format!("  └─ MIG {} ({})", mig.profile, mig.mig_id),
                entity: Entity::MigSlice(mig),
            });
        }
    }
    rows
}
