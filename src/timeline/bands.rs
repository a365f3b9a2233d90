// Utilization band scale: thresholds drive both coloring and legend entries

/// One utilization band. `upper` is the exclusive upper bound in percent;
/// `label` is the short name shown in tooltips, `legend` the legend entry text.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub upper: f64,
    pub color: String,
    pub label: String,
    pub legend: String,
}

/// Ordered band list with ascending upper bounds. Classification is total:
/// values at or above the last bound (and defensively, below zero) still map
/// to a band.
#[derive(Debug, Clone)]
pub struct BandScale {
    bands: Vec<Band>,
}

impl BandScale {
    /// Builds a scale from an ascending band list. Callers validate ordering
    /// (see config); an empty list falls back to the default scale.
    pub fn new(bands: Vec<Band>) -> Self {
        if bands.is_empty() {
            return Self::default();
        }
        BandScale { bands }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// First band whose upper bound exceeds the value; the last band catches
    /// everything else.
    pub fn classify(&self, percent: f64) -> &Band {
        self.bands
            .iter()
            .find(|b| percent < b.upper)
            .unwrap_or_else(|| &self.bands[self.bands.len() - 1])
    }
}

impl Default for BandScale {
    fn default() -> Self {
        let band = |upper: f64, color: &str, label: &str, legend: &str| Band {
            upper,
            color: color.into(),
            label: label.into(),
            legend: legend.into(),
        };
        BandScale {
            bands: vec![
                band(1.0, "#808080", "Idle", "Idle"),
                band(30.0, "#73BF69", "Low", "Low (0-30%)"),
                band(70.0, "#FADE2A", "Medium", "Medium (30-70%)"),
                band(90.0, "#FF9830", "High", "High (70-90%)"),
                band(100.0, "#F2495C", "Critical", "Critical (90-100%)"),
            ],
        }
    }
}
