use rand::prelude::*;

/// Number of bubbles in a field
pub type BubbleCount = u8;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: BubbleCount,
}

impl FieldConfig {
    pub const MAX_BUBBLES: BubbleCount = 128;

    pub const fn new_unchecked(count: BubbleCount) -> Self {
        Self { count }
    }

    pub fn new(count: BubbleCount) -> Self {
        if count > Self::MAX_BUBBLES {
            log::warn!(
                "bubble count {} too large, clamped to {}",
                count,
                Self::MAX_BUBBLES
            );
        }
        Self::new_unchecked(count.clamp(1, Self::MAX_BUBBLES))
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new_unchecked(20)
    }
}

/// Pastel palette of the background field
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BubbleColor {
    Pink,
    Purple,
    Yellow,
    Violet,
    Rose,
}

impl BubbleColor {
    pub const ALL: [BubbleColor; 5] = [
        BubbleColor::Pink,
        BubbleColor::Purple,
        BubbleColor::Yellow,
        BubbleColor::Violet,
        BubbleColor::Rose,
    ];

    /// Class name understood by the stylesheet
    pub const fn css_class(self) -> &'static str {
        use BubbleColor::*;
        match self {
            Pink => "pink",
            Purple => "purple",
            Yellow => "yellow",
            Violet => "violet",
            Rose => "rose",
        }
    }
}

/// One pulsing background shape. Positions are viewport percentages and
/// timings are whole animation parameters, consumed directly by the
/// stylesheet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BubbleSpec {
    pub left_pct: f32,
    pub top_pct: f32,
    pub color: BubbleColor,
    pub size_px: u8,
    pub duration_secs: f32,
    pub delay_secs: f32,
}

/// Ordered collection of bubble descriptors, generated once per page load
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleField {
    bubbles: Vec<BubbleSpec>,
}

impl BubbleField {
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BubbleSpec> {
        self.bubbles.iter()
    }
}

pub trait BubbleGenerator {
    fn generate(self, config: FieldConfig) -> BubbleField;
}

/// Purely random placement, sizing and timing, reproducible per seed
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBubbleGenerator {
    seed: u64,
}

impl RandomBubbleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BubbleGenerator for RandomBubbleGenerator {
    fn generate(self, config: FieldConfig) -> BubbleField {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let bubbles = (0..config.count)
            .map(|_| BubbleSpec {
                left_pct: rng.random_range(0.0..100.0),
                top_pct: rng.random_range(0.0..100.0),
                color: BubbleColor::ALL[rng.random_range(0..BubbleColor::ALL.len())],
                size_px: rng.random_range(16..24),
                duration_secs: rng.random_range(3.0..5.0),
                delay_secs: rng.random_range(0.0..5.0),
            })
            .collect();
        BubbleField { bubbles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_the_configured_count() {
        let field = RandomBubbleGenerator::new(7).generate(FieldConfig::default());
        assert_eq!(field.len(), 20);

        let field = RandomBubbleGenerator::new(7).generate(FieldConfig::new(3));
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn specs_stay_in_display_ranges() {
        let field = RandomBubbleGenerator::new(42).generate(FieldConfig::default());

        for bubble in field.iter() {
            assert!((0.0..100.0).contains(&bubble.left_pct));
            assert!((0.0..100.0).contains(&bubble.top_pct));
            assert!((16..24).contains(&bubble.size_px));
            assert!((3.0..5.0).contains(&bubble.duration_secs));
            assert!((0.0..5.0).contains(&bubble.delay_secs));
        }
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        let a = RandomBubbleGenerator::new(99).generate(FieldConfig::default());
        let b = RandomBubbleGenerator::new(99).generate(FieldConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_are_independent() {
        let a = RandomBubbleGenerator::new(1).generate(FieldConfig::default());
        let b = RandomBubbleGenerator::new(2).generate(FieldConfig::default());
        assert_ne!(a, b);
    }

    #[test]
    fn field_config_clamps_count() {
        assert_eq!(FieldConfig::new(0).count, 1);
        assert_eq!(FieldConfig::new(255).count, FieldConfig::MAX_BUBBLES);
    }
}
