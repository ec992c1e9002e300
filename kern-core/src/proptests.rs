use super::*;
use proptest::prelude::*;

fn align_strategy() -> impl Strategy<Value = HorizontalAlign> {
    prop_oneof![
        Just(HorizontalAlign::Left),
        Just(HorizontalAlign::Center),
        Just(HorizontalAlign::Right),
    ]
}

fn quad_stream(count: usize, stride: usize) -> Vec<UiVertex> {
    (0..count * stride)
        .map(|i| UiVertex::new((i / stride) as f32 * 12.0 + (i % stride) as f32, i as f32))
        .collect()
}

// Property: streams shorter than one block are returned bit-for-bit unchanged
proptest! {
    #[test]
    fn prop_below_threshold_noop(
        len in 0usize..6,
        align in align_strategy(),
        kerning in -100.0f32..100.0,
    ) {
        let mut vertices: Vec<UiVertex> = (0..len).map(|i| UiVertex::new(i as f32, 1.0)).collect();
        let before = vertices.clone();
        apply(&mut vertices, VertexStride::TRIANGULATED_QUAD, 1, align, kerning).unwrap();
        prop_assert_eq!(
            bytemuck::cast_slice::<UiVertex, u8>(&before),
            bytemuck::cast_slice::<UiVertex, u8>(&vertices)
        );
    }
}

// Property: the anchor block of left and right alignment never moves
proptest! {
    #[test]
    fn prop_edge_anchor_fixed(
        count in 1usize..40,
        kerning in -50.0f32..50.0,
    ) {
        for (align, anchor) in [(HorizontalAlign::Left, 0), (HorizontalAlign::Right, count - 1)] {
            let before = quad_stream(count, 4);
            let mut after = before.clone();
            apply(&mut after, VertexStride::QUAD, count, align, kerning).unwrap();
            prop_assert_eq!(&before[anchor * 4..anchor * 4 + 4], &after[anchor * 4..anchor * 4 + 4]);
        }
    }
}

// Property: center alignment displaces mirrored characters by opposite amounts
proptest! {
    #[test]
    fn prop_center_symmetric(
        count in 1usize..40,
        kerning in -50.0f32..50.0,
    ) {
        for j in 0..count {
            let left = character_offset(HorizontalAlign::Center, j, count, kerning);
            let right = character_offset(HorizontalAlign::Center, count - 1 - j, count, kerning);
            prop_assert!((left + right).abs() < 1e-3, "n={} j={}: {} vs {}", count, j, left, right);
        }
    }
}

// Property: more kerning strictly widens every non-anchor displacement
proptest! {
    #[test]
    fn prop_monotonic_spread(
        count in 2usize..30,
        align in align_strategy(),
        kerning in 0.01f32..20.0,
        extra in 0.01f32..20.0,
    ) {
        let anchor = align.anchor_index(count);
        for j in 0..count {
            if Some(j) == anchor {
                continue;
            }
            let small = character_offset(align, j, count, kerning).abs();
            let large = character_offset(align, j, count, kerning + extra).abs();
            prop_assert!(large > small, "{:?} n={} j={}: {} !> {}", align, count, j, large, small);
        }
    }
}

// Property: only x changes; y, z, color and uv pass through
proptest! {
    #[test]
    fn prop_only_x_changes(
        count in 1usize..20,
        align in align_strategy(),
        kerning in -10.0f32..10.0,
    ) {
        let before: Vec<UiVertex> = quad_stream(count, 6)
            .into_iter()
            .map(|v| v.with_color([0.2, 0.4, 0.6, 0.8]).with_uv([0.3, 0.7]))
            .collect();
        let mut after = before.clone();
        apply(&mut after, VertexStride::TRIANGULATED_QUAD, count, align, kerning).unwrap();
        for (b, a) in before.iter().zip(&after) {
            prop_assert_eq!(&b.position[1..], &a.position[1..]);
            prop_assert_eq!(b.color, a.color);
            prop_assert_eq!(b.uv, a.uv);
        }
    }
}
