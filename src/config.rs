use serde::Deserialize;

use crate::timeline::PanelOptions;
use crate::timeline::bands::{Band, BandScale};
use crate::timeline::segments::SegmentPolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Presentation knobs; everything defaults to the source panel's values.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_band_size")]
    pub band_size: f64,
    #[serde(default = "default_drift_tolerance")]
    pub drift_tolerance: f64,
    /// Overrides the built-in five-band scale when non-empty. Ascending upper bounds.
    #[serde(default)]
    pub bands: Vec<BandConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BandConfig {
    pub upper: f64,
    pub color: String,
    pub label: String,
    pub legend: String,
}

fn default_band_size() -> f64 {
    20.0
}

fn default_drift_tolerance() -> f64 {
    15.0
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            band_size: default_band_size(),
            drift_tolerance: default_drift_tolerance(),
            bands: vec![],
        }
    }
}

impl PanelConfig {
    /// Runtime options for the pipeline; empty band list means the default scale.
    pub fn options(&self) -> PanelOptions {
        PanelOptions {
            segment: SegmentPolicy {
                band_size: self.band_size,
                drift_tolerance: self.drift_tolerance,
            },
            bands: BandScale::new(
                self.bands
                    .iter()
                    .map(|b| Band {
                        upper: b.upper,
                        color: b.color.clone(),
                        label: b.label.clone(),
                        legend: b.legend.clone(),
                    })
                    .collect(),
            ),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            self.panel.band_size > 0.0,
            "panel.band_size must be > 0, got {}",
            self.panel.band_size
        );
        anyhow::ensure!(
            self.panel.drift_tolerance >= 0.0,
            "panel.drift_tolerance must be >= 0, got {}",
            self.panel.drift_tolerance
        );
        let mut prev: Option<f64> = None;
        for band in &self.panel.bands {
            anyhow::ensure!(
                !band.color.is_empty() && !band.label.is_empty(),
                "panel.bands entries need a color and a label"
            );
            if let Some(prev) = prev {
                anyhow::ensure!(
                    band.upper > prev,
                    "panel.bands upper bounds must ascend, got {} after {}",
                    band.upper,
                    prev
                );
            }
            prev = Some(band.upper);
        }
        Ok(())
    }
}
