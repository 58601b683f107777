use kira_poolcalc::pooling::{PoolInput, PoolingOptions, compute};

fn opts(final_volume: f64, maximize: bool, measured: bool) -> PoolingOptions {
    PoolingOptions {
        desired_final_volume: final_volume,
        maximize_volumes: maximize,
        use_measured_concentrations: measured,
    }
}

#[test]
fn zero_samples_poisons_every_pool() {
    let pools = vec![
        PoolInput::new(1, 10.0, 50.0, 0),
        PoolInput::new(2, 10.0, 50.0, 12),
        PoolInput::new(3, 5.0, 80.0, 30),
    ];
    for maximize in [true, false] {
        let outcome = compute(&pools, &opts(400.0, maximize, false));
        assert_eq!(outcome.results.len(), 3);
        for r in &outcome.results {
            assert!(!r.final_volume.is_finite(), "pool {}", r.id());
            assert!(!r.is_finite());
        }
        let summary = outcome.summary.unwrap();
        assert!(!summary.nm_per_sample.is_finite());
        assert_eq!(summary.total_samples, 42);
    }
}

#[test]
fn zero_volume_without_maximize_stays_local() {
    let pools = vec![
        PoolInput::new(1, 10.0, 0.0, 12),
        PoolInput::new(2, 10.0, 50.0, 12),
    ];
    let outcome = compute(&pools, &opts(400.0, false, false));
    let bad = &outcome.results[0];
    assert!(bad.actual_concentration.is_infinite());
    assert_eq!(bad.final_volume, 0.0);
    assert!(bad.percent_used.is_nan());

    let good = &outcome.results[1];
    assert_eq!(good.final_volume, 400.0);
    assert_eq!(good.percent_used, 800.0);
}

#[test]
fn zero_volume_with_maximize_poisons_every_pool() {
    let pools = vec![
        PoolInput::new(1, 10.0, 0.0, 12),
        PoolInput::new(2, 10.0, 50.0, 12),
    ];
    let outcome = compute(&pools, &opts(400.0, true, false));
    for r in &outcome.results {
        assert!(r.final_volume.is_nan());
        assert!(!r.limiting);
    }
}

#[test]
fn zero_molarity_poisons_every_pool() {
    let pools = vec![
        PoolInput::new(1, 0.0, 40.0, 12),
        PoolInput::new(2, 10.0, 50.0, 12),
    ];
    let outcome = compute(&pools, &opts(400.0, false, false));
    assert!(outcome.results.iter().all(|r| r.final_volume.is_nan()));
}

#[test]
fn non_positive_target_is_not_rejected() {
    let pools = vec![
        PoolInput::new(1, 10.0, 50.0, 12),
        PoolInput::new(2, 20.0, 50.0, 24),
    ];
    let zero = compute(&pools, &opts(0.0, true, false));
    assert!(zero.results.iter().all(|r| r.final_volume == 0.0));

    let negative = compute(&pools, &opts(-100.0, true, false));
    assert!(negative.results.iter().all(|r| r.final_volume < 0.0));
    let total: f64 = negative.results.iter().map(|r| r.final_volume).sum();
    assert!((total + 100.0).abs() < 1e-9);
    assert_eq!(negative.summary.unwrap().total_volume, -100.0);
}

#[test]
fn zero_measured_concentration_falls_back_to_calculated() {
    let pools = vec![
        PoolInput::new(1, 10.0, 50.0, 12).with_measured(0.0),
        PoolInput::new(2, 20.0, 50.0, 24).with_measured(3.0),
    ];
    let outcome = compute(&pools, &opts(400.0, true, true));
    assert_eq!(outcome.results[0].actual_concentration, 10.0 * 12.0 / 50.0);
    assert_eq!(outcome.results[1].actual_concentration, 3.0);
}

#[test]
fn overflowing_total_nm_is_not_finite() {
    let pools = vec![PoolInput::new(1, f64::MAX, 50.0, 2).with_measured(5.0)];
    let outcome = compute(&pools, &opts(400.0, true, true));
    let r = &outcome.results[0];
    assert!(r.total_nm.is_infinite());
    assert_eq!(r.actual_concentration, 5.0);
    assert_eq!(r.final_volume, 400.0);
    assert!(!r.is_finite());
}
