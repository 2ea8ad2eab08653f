use tagcloud_core::sphere_layout;

#[test]
fn zero_count_returns_empty() {
    assert!(sphere_layout(0, 300.0).is_empty());
}

#[test]
fn every_point_lies_on_the_sphere() {
    for count in [1, 2, 3, 7, 12, 50, 200] {
        let radius = 300.0;
        let positions = sphere_layout(count, radius);
        assert_eq!(positions.len(), count);
        for (i, p) in positions.iter().enumerate() {
            let len = p.length();
            assert!(
                (len - radius).abs() < 1e-3,
                "point {i} of {count} off the sphere: |p| = {len}"
            );
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let a = sphere_layout(37, 150.0);
    let b = sphere_layout(37, 150.0);
    assert_eq!(a, b, "same (count, radius) must yield identical positions");
}

#[test]
fn twelve_tags_produce_twelve_distinct_positions() {
    let positions = sphere_layout(12, 300.0);
    assert_eq!(positions.len(), 12);
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let d = positions[i].distance(positions[j]);
            assert!(
                d > 1.0,
                "positions {i} and {j} collide: {:?} vs {:?}",
                positions[i],
                positions[j]
            );
        }
    }
}

#[test]
fn single_tag_sits_at_a_pole() {
    // i = 0 gives phi = acos(-1) = pi, i.e. the -z pole.
    let positions = sphere_layout(1, 100.0);
    assert_eq!(positions.len(), 1);
    assert!(positions[0].x.abs() < 1e-3);
    assert!(positions[0].y.abs() < 1e-3);
    assert!((positions[0].z + 100.0).abs() < 1e-3);
}

#[test]
fn radius_scales_positions_linearly() {
    let small = sphere_layout(20, 1.0);
    let big = sphere_layout(20, 250.0);
    for (s, b) in small.iter().zip(big.iter()) {
        assert!((*s * 250.0 - *b).length() < 1e-2);
    }
}
