use bandfill::prelude::*;

// ============================================================================
// Builder Configuration
// ============================================================================

#[test]
fn test_default_configuration() {
    let resolver = FillBetween::new().build().unwrap();
    let config = resolver.config();
    assert!(config.interpolate);
    assert!(!config.mask_invalid);
}

#[test]
fn test_configured_builder() {
    let resolver = FillBetween::new()
        .interpolate(false)
        .mask_invalid(true)
        .build()
        .unwrap();
    let config = resolver.config();
    assert!(!config.interpolate);
    assert!(config.mask_invalid);
}

#[test]
fn test_duplicate_parameter_rejected() {
    let err = FillBetween::new()
        .interpolate(true)
        .interpolate(false)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FillError::DuplicateParameter {
            parameter: "interpolate"
        }
    );
}

#[test]
fn test_default_resolver_matches_built_default() {
    let x = vec![0.0, 1.0, 2.0];
    let lower = vec![0.0; 3];
    let upper = vec![1.0; 3];
    let mask = [false, true, false];

    let built = FillBetween::new().build().unwrap();
    let a = built.resolve(&x, &lower, &upper, Some(&mask)).unwrap();
    let b = RegionResolver::default()
        .resolve(&x, &lower, &upper, Some(&mask))
        .unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// End-to-End Resolution
// ============================================================================

#[test]
fn test_whole_domain_fill() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let lower = vec![-1.0, -0.5, -0.5, -1.0];
    let upper = vec![1.0, 0.5, 0.5, 1.0];

    let polys = RegionResolver::default()
        .resolve(&x, &lower, &upper, None)
        .unwrap();
    assert_eq!(polys.len(), 1);
    assert_eq!(polys[0].span(), (0, 3));
    assert_eq!(polys[0].vertex_count(), 8);
}

#[test]
fn test_masked_fill_interpolated_edges() {
    // The worked example: unit band, mask [F,T,T,F,F]. One polygon with
    // interpolated edges at x=0.5 and x=2.5.
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let lower = vec![0.0; 5];
    let upper = vec![1.0; 5];
    let mask = [false, true, true, false, false];

    let polys = RegionResolver::default()
        .resolve(&x, &lower, &upper, Some(&mask))
        .unwrap();
    assert_eq!(polys.len(), 1);
    assert_eq!(polys[0].vertex_count(), 2 * 2 + 2);

    let first = polys[0].vertices().first().unwrap();
    assert_eq!((first.x, first.y), (0.5, 1.0));
}

#[test]
fn test_conditional_fill_above_and_below() {
    // Two boundary pairs over the same x, filled where each is on top,
    // the way a chart shades gain and loss regions separately.
    let x: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let series = vec![1.0, 2.0, 3.0, 2.0, 1.0, 0.0];
    let reference = vec![1.5; 6];

    let above: Vec<bool> = series.iter().map(|&v| v >= 1.5).collect();
    let below: Vec<bool> = series.iter().map(|&v| v < 1.5).collect();

    let resolver = RegionResolver::default();
    let gain = resolver
        .resolve(&x, &reference, &series, Some(&above))
        .unwrap();
    let loss = resolver
        .resolve(&x, &series, &reference, Some(&below))
        .unwrap();

    assert_eq!(gain.len(), 1);
    assert_eq!(gain[0].span(), (1, 3));
    assert_eq!(loss.len(), 2);
    assert_eq!(loss[0].span(), (0, 0));
    assert_eq!(loss[1].span(), (4, 5));
}

#[test]
fn test_mask_invalid_with_default_interpolation() {
    // Default config keeps interpolation on; excluding a NaN sample must
    // not leak non-finite vertices into the output.
    let resolver = FillBetween::new().mask_invalid(true).build().unwrap();

    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let lower = vec![0.0; 5];
    let upper = vec![1.0, 1.0, f64::NAN, 1.0, 1.0];

    let polys = resolver.resolve(&x, &lower, &upper, None).unwrap();
    assert_eq!(polys.len(), 2);
    for poly in &polys {
        for v in poly {
            assert!(v.x.is_finite() && v.y.is_finite());
        }
    }
}

#[test]
fn test_vertex_iteration() {
    let x = vec![0.0, 1.0];
    let lower = vec![0.0, 0.0];
    let upper = vec![2.0, 2.0];

    let polys = RegionResolver::default()
        .resolve(&x, &lower, &upper, None)
        .unwrap();
    let ys: Vec<f64> = polys[0].iter().map(|v| v.y).collect();
    assert_eq!(ys, vec![2.0, 2.0, 0.0, 0.0]);
}

#[test]
fn test_shape_mismatch_through_api() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let lower = vec![0.0; 4];
    let upper = vec![1.0; 5];

    let err = RegionResolver::default()
        .resolve(&x, &lower, &upper, None)
        .unwrap_err();
    assert_eq!(
        err,
        FillError::ShapeMismatch {
            x_len: 5,
            lower_len: 4,
            upper_len: 5,
            mask_len: None,
        }
    );
}

#[test]
fn test_all_false_mask_yields_empty() {
    let x = vec![0.0, 1.0, 2.0];
    let mask = [false; 3];
    let polys = RegionResolver::default()
        .resolve(&x, &[0.0; 3], &[1.0; 3], Some(&mask))
        .unwrap();
    assert!(polys.is_empty());
}
