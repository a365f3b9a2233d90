// Shared test helpers

use std::collections::HashMap;

use gpu_timeline::models::*;

pub fn time_field(times: &[i64]) -> Field {
    Field {
        name: TIME_FIELD.into(),
        labels: HashMap::new(),
        values: times.iter().map(|t| Some(*t as f64)).collect(),
    }
}

pub fn labeled_field(name: &str, labels: &[(&str, &str)], values: &[f64]) -> Field {
    Field {
        name: name.into(),
        labels: labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        values: values.iter().map(|v| Some(*v)).collect(),
    }
}

pub fn gpu_field(hostname: &str, uuid: &str, gpu: &str, values: &[f64]) -> Field {
    labeled_field(
        uuid,
        &[
            ("Hostname", hostname),
            ("UUID", uuid),
            ("gpu", gpu),
            ("modelName", "NVIDIA A100"),
        ],
        values,
    )
}

pub fn mig_field(
    hostname: &str,
    uuid: &str,
    mig_id: &str,
    profile: &str,
    values: &[f64],
) -> Field {
    labeled_field(
        &format!("{uuid}-mig{mig_id}"),
        &[
            ("Hostname", hostname),
            ("UUID", uuid),
            ("GPU_I_ID", mig_id),
            ("GPU_I_PROFILE", profile),
        ],
        values,
    )
}

pub fn utilization_frame(times: &[i64], data: Vec<Field>) -> DataFrame {
    let mut fields = vec![time_field(times)];
    fields.extend(data);
    DataFrame {
        ref_id: UTILIZATION_REF.into(),
        fields,
    }
}

pub fn query(series: Vec<DataFrame>) -> QueryData {
    QueryData { series }
}
