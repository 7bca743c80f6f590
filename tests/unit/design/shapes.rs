use super::*;

#[test]
fn shape_count_follows_mood_and_stays_in_bounds() {
    for seed in 0..64u64 {
        for mood in [Mood::Energetic, Mood::Neutral, Mood::Calm] {
            let shapes = place_shapes(mood, seed);
            assert!((3..=6).contains(&shapes.len()), "{mood:?} {seed}");
            match mood {
                Mood::Energetic => assert!(shapes.len() >= 5),
                Mood::Neutral => assert!((4..=5).contains(&shapes.len())),
                Mood::Calm => assert!(shapes.len() <= 4),
            }
        }
    }
}

#[test]
fn shapes_avoid_the_safe_zone_and_stay_on_canvas() {
    for seed in 0..256u64 {
        for s in place_shapes(Mood::Energetic, seed) {
            assert!((0.0..=100.0).contains(&s.top), "{s:?}");
            assert!((0.0..=100.0).contains(&s.left), "{s:?}");
            assert!(!in_safe_zone(s.top, s.left), "{s:?}");
            assert!((0.0..=1.0).contains(&s.opacity));
            assert!(s.size > 0);
        }
    }
}

#[test]
fn same_seed_same_shapes() {
    assert_eq!(place_shapes(Mood::Neutral, 7), place_shapes(Mood::Neutral, 7));
}

#[test]
fn different_seeds_usually_differ() {
    let distinct = (0..16u64)
        .map(|seed| place_shapes(Mood::Neutral, seed))
        .collect::<Vec<_>>();
    let first = &distinct[0];
    assert!(distinct.iter().skip(1).any(|s| s != first));
}

#[test]
fn calm_shapes_are_fainter_than_energetic_ones() {
    for seed in 0..32u64 {
        let calm_max = place_shapes(Mood::Calm, seed)
            .iter()
            .map(|s| s.opacity)
            .fold(0.0f32, f32::max);
        let energetic_min = place_shapes(Mood::Energetic, seed)
            .iter()
            .map(|s| s.opacity)
            .fold(1.0f32, f32::min);
        assert!(calm_max <= 0.35 + 1e-6);
        assert!(energetic_min >= 0.45 - 1e-6);
    }
}
