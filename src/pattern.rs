use rand::Rng;

/// The fixed rectangular area star points are scattered within, in terminal
/// cells. All layers of a field share one extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u16,
    pub height: u16,
}

impl Extent {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A single star position. No identity beyond its coordinates; two stars may
/// land on the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarPoint {
    pub x: u16,
    pub y: u16,
}

/// The once-generated point set for one layer. Ordered, fixed length, and
/// never regenerated on redraw: rescattering per frame would make the whole
/// field jitter.
pub type StarPattern = Vec<StarPoint>;

/// Uniform samples in `[0, 1)`. Generation takes this as a parameter instead
/// of reading a global rng so tests can script an exact sequence.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> UnitSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// The extent has a zero dimension; there is nowhere to scatter points.
    EmptyExtent { width: u16, height: u16 },
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::EmptyExtent { width, height } => {
                write!(f, "cannot scatter stars in a {}x{} extent", width, height)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Scatter `count` points uniformly and independently over `extent`,
/// consuming two samples per point (x first, then y) and flooring each to a
/// whole cell. Sampling is with replacement; clustering is expected and
/// tolerated, not smoothed away.
pub fn generate(
    count: usize,
    extent: Extent,
    source: &mut dyn UnitSource,
) -> Result<StarPattern, PatternError> {
    if extent.width == 0 || extent.height == 0 {
        return Err(PatternError::EmptyExtent {
            width: extent.width,
            height: extent.height,
        });
    }

    let mut pattern = Vec::with_capacity(count);
    for _ in 0..count {
        let x = (source.next_unit() * extent.width as f64) as u16;
        let y = (source.next_unit() * extent.height as f64) as u16;
        pattern.push(StarPoint { x, y });
    }
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays a fixed sample sequence, cycling when exhausted.
    struct ScriptedSource {
        samples: Vec<f64>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(samples: &[f64]) -> Self {
            Self {
                samples: samples.to_vec(),
                next: 0,
            }
        }
    }

    impl UnitSource for ScriptedSource {
        fn next_unit(&mut self) -> f64 {
            let sample = self.samples[self.next % self.samples.len()];
            self.next += 1;
            sample
        }
    }

    #[test]
    fn pattern_has_exactly_count_points() {
        let mut rng = StdRng::seed_from_u64(1);
        let pattern = generate(300, Extent::new(120, 40), &mut rng).unwrap();
        assert_eq!(pattern.len(), 300);
    }

    #[test]
    fn points_stay_inside_extent() {
        let extent = Extent::new(7, 3);
        let mut rng = StdRng::seed_from_u64(2);
        let pattern = generate(2000, extent, &mut rng).unwrap();
        for point in &pattern {
            assert!(point.x < extent.width);
            assert!(point.y < extent.height);
        }
    }

    #[test]
    fn zero_count_is_an_empty_pattern() {
        let mut rng = StdRng::seed_from_u64(3);
        let pattern = generate(0, Extent::new(10, 10), &mut rng).unwrap();
        assert!(pattern.is_empty());
    }

    #[test]
    fn same_seed_same_pattern() {
        let extent = Extent::new(80, 24);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = generate(150, extent, &mut a).unwrap();
        let second = generate(150, extent, &mut b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_extent_fails_fast() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            generate(10, Extent::new(0, 10), &mut rng),
            Err(PatternError::EmptyExtent { width: 0, height: 10 })
        );
        assert_eq!(
            generate(10, Extent::new(10, 0), &mut rng),
            Err(PatternError::EmptyExtent { width: 10, height: 0 })
        );
    }

    #[test]
    fn scripted_sequence_lands_on_expected_cells() {
        let mut source =
            ScriptedSource::new(&[0.1, 0.2, 0.3, 0.4, 0.55, 0.6, 0.7, 0.8, 0.9, 0.05]);
        let pattern = generate(5, Extent::new(10, 10), &mut source).unwrap();
        let expected: StarPattern = [(1, 2), (3, 4), (5, 6), (7, 8), (9, 0)]
            .iter()
            .map(|&(x, y)| StarPoint { x, y })
            .collect();
        assert_eq!(pattern, expected);
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut source = ScriptedSource::new(&[0.5]);
        let pattern = generate(50, Extent::new(10, 10), &mut source).unwrap();
        assert_eq!(pattern.len(), 50);
        assert!(pattern.iter().all(|p| *p == StarPoint { x: 5, y: 5 }));
    }
}
