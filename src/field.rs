use crate::pattern::{self, Extent, PatternError, StarPattern, StarPoint, UnitSource};
use crate::types::{FieldConfig, LayerConfig};
use std::time::Duration;

/// Declarative description of a layer's scroll: a constant-velocity vertical
/// translation of `distance` cells, repeating forever every `period`. It is
/// described once at layer creation; the renderer only samples it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopAnimation {
    pub distance: u16,
    pub period: Duration,
}

impl LoopAnimation {
    /// Translation in cells at a given elapsed time. Linear timing, wraps
    /// every `period`.
    pub fn offset_at(&self, elapsed: Duration) -> u16 {
        let phase = (elapsed.as_secs_f64() / self.period.as_secs_f64()).fract();
        (phase * self.distance as f64) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerError {
    Pattern(PatternError),
    /// Loop duration must be positive and finite.
    BadDuration(f64),
    /// A zero point size would draw nothing while still costing a pattern.
    ZeroPointSize,
}

impl std::fmt::Display for LayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerError::Pattern(e) => write!(f, "{}", e),
            LayerError::BadDuration(secs) => {
                write!(f, "loop duration must be positive, got {}s", secs)
            }
            LayerError::ZeroPointSize => write!(f, "point size must be at least 1"),
        }
    }
}

impl std::error::Error for LayerError {}

impl From<PatternError> for LayerError {
    fn from(e: PatternError) -> Self {
        LayerError::Pattern(e)
    }
}

/// One depth plane of the field: a pattern scattered once at construction
/// plus the loop that scrolls it. The pattern lives as long as the layer and
/// is never regenerated by a redraw.
pub struct StarLayer {
    pattern: StarPattern,
    config: LayerConfig,
    extent: Extent,
    animation: LoopAnimation,
}

impl StarLayer {
    /// Validate the config, scatter the pattern, and describe the loop.
    /// Fails fast on bad preconditions instead of clamping; silent clamping
    /// would hide misconfiguration with nothing gained.
    pub fn new(
        config: LayerConfig,
        extent: Extent,
        source: &mut dyn UnitSource,
    ) -> Result<Self, LayerError> {
        if config.point_size == 0 {
            return Err(LayerError::ZeroPointSize);
        }
        if !config.loop_duration_secs.is_finite() || config.loop_duration_secs <= 0.0 {
            return Err(LayerError::BadDuration(config.loop_duration_secs));
        }
        let pattern = pattern::generate(config.count, extent, source)?;

        // The loop travels exactly one extent height, which is also exactly
        // where the duplicate copy sits. If these two values ever differ, a
        // seam shows at every wrap.
        let animation = LoopAnimation {
            distance: extent.height,
            period: Duration::from_secs_f64(config.loop_duration_secs),
        };

        Ok(Self {
            pattern,
            config,
            extent,
            animation,
        })
    }

    pub fn pattern(&self) -> &[StarPoint] {
        &self.pattern
    }

    pub fn config(&self) -> LayerConfig {
        self.config
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn animation(&self) -> LoopAnimation {
        self.animation
    }

    /// Vertical offset of the second copy of the pattern below the first.
    /// Always equal to `animation().distance`.
    pub fn duplicate_offset(&self) -> u16 {
        self.extent.height
    }
}

/// The composed background: a handful of layers over one shared extent,
/// tuned so that denser, smaller, slower stars read as further away.
pub struct StarField {
    layers: Vec<StarLayer>,
    extent: Extent,
}

impl StarField {
    /// Build every configured layer, drawing patterns from `source` in layer
    /// order. Layers share nothing afterwards; each owns its pattern and
    /// loop. A layer that fails its preconditions is dropped from the
    /// composition rather than taking the whole background down.
    pub fn new(config: &FieldConfig, extent: Extent, source: &mut dyn UnitSource) -> Self {
        let layers = config
            .layers
            .iter()
            .filter_map(|layer| StarLayer::new(*layer, extent, source).ok())
            .collect();
        Self { layers, extent }
    }

    pub fn layers(&self) -> &[StarLayer] {
        &self.layers
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn layer(count: usize, point_size: u16, secs: f64) -> LayerConfig {
        LayerConfig {
            count,
            point_size,
            loop_duration_secs: secs,
        }
    }

    #[test]
    fn loop_offset_is_linear_and_wraps() {
        let anim = LoopAnimation {
            distance: 40,
            period: Duration::from_secs(100),
        };
        assert_eq!(anim.offset_at(Duration::ZERO), 0);
        assert_eq!(anim.offset_at(Duration::from_secs(25)), 10);
        assert_eq!(anim.offset_at(Duration::from_secs(50)), 20);
        assert_eq!(anim.offset_at(Duration::from_secs(100)), 0);
        assert_eq!(anim.offset_at(Duration::from_secs(125)), 10);
    }

    #[test]
    fn travel_distance_equals_duplicate_offset_for_any_config() {
        let mut rng = StdRng::seed_from_u64(9);
        for (extent, config) in [
            (Extent::new(200, 60), layer(300, 1, 50.0)),
            (Extent::new(80, 24), layer(10, 2, 0.5)),
            (Extent::new(1, 1), layer(0, 3, 1000.0)),
        ] {
            let layer = StarLayer::new(config, extent, &mut rng).unwrap();
            assert_eq!(layer.animation().distance, extent.height);
            assert_eq!(layer.duplicate_offset(), extent.height);
        }
    }

    #[test]
    fn invalid_configs_are_rejected_not_clamped() {
        let extent = Extent::new(10, 10);
        let mut rng = StdRng::seed_from_u64(10);
        assert_eq!(
            StarLayer::new(layer(5, 0, 50.0), extent, &mut rng).err(),
            Some(LayerError::ZeroPointSize)
        );
        assert_eq!(
            StarLayer::new(layer(5, 1, 0.0), extent, &mut rng).err(),
            Some(LayerError::BadDuration(0.0))
        );
        assert_eq!(
            StarLayer::new(layer(5, 1, -3.0), extent, &mut rng).err(),
            Some(LayerError::BadDuration(-3.0))
        );
        assert!(StarLayer::new(layer(5, 1, f64::INFINITY), extent, &mut rng).is_err());
    }

    #[test]
    fn default_field_has_three_independent_layers() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = StarField::new(&FieldConfig::default(), Extent::new(200, 60), &mut rng);
        let counts: Vec<usize> = field.layers().iter().map(|l| l.pattern().len()).collect();
        assert_eq!(counts, vec![300, 150, 80]);
        // Patterns are drawn sequentially from one source; no two layers end
        // up with the same scatter.
        assert_ne!(
            &field.layers()[0].pattern()[..80],
            &field.layers()[1].pattern()[..80]
        );
        assert_ne!(
            &field.layers()[1].pattern()[..80],
            &field.layers()[2].pattern()[..80]
        );
    }

    #[test]
    fn zero_extent_yields_an_empty_field() {
        let mut rng = StdRng::seed_from_u64(12);
        let field = StarField::new(&FieldConfig::default(), Extent::new(0, 0), &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn a_bad_layer_is_omitted_without_taking_the_rest() {
        let config = FieldConfig {
            layers: vec![layer(20, 1, 50.0), layer(20, 1, -1.0), layer(20, 2, 100.0)],
        };
        let mut rng = StdRng::seed_from_u64(13);
        let field = StarField::new(&config, Extent::new(40, 20), &mut rng);
        assert_eq!(field.layers().len(), 2);
        assert_eq!(field.layers()[1].config().point_size, 2);
    }
}
