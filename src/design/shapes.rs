use crate::design::spec::Shape;
use crate::design::tables::Mood;
use crate::foundation::math::round_to;

/// Lower-left region (percent) kept mostly clear for the title and subtitle.
pub const SAFE_ZONE_MAX_LEFT: f64 = 55.0;
pub const SAFE_ZONE_MIN_TOP: f64 = 45.0;

struct ShapeBudget {
    count: std::ops::RangeInclusive<usize>,
    size: std::ops::RangeInclusive<u32>,
    opacity: (f32, f32),
    blur: std::ops::RangeInclusive<u32>,
}

fn budget_for(mood: Mood) -> ShapeBudget {
    match mood {
        Mood::Energetic => ShapeBudget {
            count: 5..=6,
            size: 140..=320,
            opacity: (0.45, 0.7),
            blur: 18..=40,
        },
        Mood::Neutral => ShapeBudget {
            count: 4..=5,
            size: 120..=280,
            opacity: (0.3, 0.55),
            blur: 24..=48,
        },
        Mood::Calm => ShapeBudget {
            count: 3..=4,
            size: 120..=240,
            opacity: (0.18, 0.35),
            blur: 36..=60,
        },
    }
}

pub(crate) fn in_safe_zone(top: f64, left: f64) -> bool {
    left < SAFE_ZONE_MAX_LEFT && top > SAFE_ZONE_MIN_TOP
}

/// Place 3..=6 decorative circles; identical `(mood, seed)` gives identical shapes.
pub(crate) fn place_shapes(mood: Mood, seed: u64) -> Vec<Shape> {
    let budget = budget_for(mood);
    let mut rng = fastrand::Rng::with_seed(seed);
    let count = rng.usize(budget.count.clone());

    (0..count)
        .map(|_| {
            let top = rng.f64() * 100.0;
            let mut left = rng.f64() * 100.0;
            if in_safe_zone(top, left) {
                left = SAFE_ZONE_MAX_LEFT + rng.f64() * (100.0 - SAFE_ZONE_MAX_LEFT);
            }
            let (lo, hi) = budget.opacity;
            Shape {
                top: round_to(top, 1),
                left: round_to(left, 1),
                size: rng.u32(budget.size.clone()),
                opacity: round_to(f64::from(lo + rng.f32() * (hi - lo)), 2) as f32,
                blur: rng.u32(budget.blur.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/design/shapes.rs"]
mod tests;
