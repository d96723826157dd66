use serde::{Deserialize, Serialize};

/// One layer's tuning triple: how many stars, how large they draw, and how
/// long one full scroll of the extent takes. Immutable once a layer exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub count: usize,
    #[serde(rename = "pointSize")]
    pub point_size: u16,
    #[serde(rename = "loopDurationSeconds")]
    pub loop_duration_secs: f64,
}

/// Top-level persisted config: the layer composition, ordered far to near.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub layers: Vec<LayerConfig>,
}

impl Default for FieldConfig {
    /// Three depth planes. The monotonic relationship is what sells the
    /// parallax: more + smaller + slower reads as distant, fewer + larger +
    /// faster as near.
    fn default() -> Self {
        Self {
            layers: vec![
                LayerConfig {
                    count: 300,
                    point_size: 1,
                    loop_duration_secs: 50.0,
                },
                LayerConfig {
                    count: 150,
                    point_size: 2,
                    loop_duration_secs: 100.0,
                },
                LayerConfig {
                    count: 80,
                    point_size: 3,
                    loop_duration_secs: 150.0,
                },
            ],
        }
    }
}

/// Active modal dialog type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Help overlay.
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_composition_is_monotonic_by_depth() {
        let config = FieldConfig::default();
        assert_eq!(config.layers.len(), 3);
        for pair in config.layers.windows(2) {
            let (far, near) = (pair[0], pair[1]);
            assert!(far.count > near.count);
            assert!(far.point_size < near.point_size);
            assert!(far.loop_duration_secs < near.loop_duration_secs);
        }
    }

    #[test]
    fn config_json_uses_camel_case_names() {
        let json = r#"{
            "layers": [
                { "count": 12, "pointSize": 2, "loopDurationSeconds": 30.0 }
            ]
        }"#;
        let config: FieldConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.layers.len(), 1);
        assert_eq!(config.layers[0].count, 12);
        assert_eq!(config.layers[0].point_size, 2);
        assert_eq!(config.layers[0].loop_duration_secs, 30.0);
    }
}
