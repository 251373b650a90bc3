use chart_reduce::pipeline::DEFAULT_TARGET_POINTS;
use chart_reduce::{
    downsample, downsample_with_envelope, reduce, reduce_many, smooth, Reduced, ReductionConfig,
    Series, SmoothingAlgorithm, SmoothingConfig,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn noisy(n: usize, seed: u64) -> Series {
    let mut rng = StdRng::seed_from_u64(seed);
    Series::from_points((0..n).map(|i| {
        let x = i as f64;
        (x, (x * 0.01).sin() + rng.random_range(-0.5..0.5))
    }))
}

#[test]
fn test_config_defaults() {
    let config = ReductionConfig::from_json("{}").unwrap();

    assert_eq!(config, ReductionConfig::default());
    assert_eq!(config.target_points, DEFAULT_TARGET_POINTS);
    assert!(config.smoothing.is_none());
    assert!(!config.envelope);
}

#[test]
fn test_config_from_json() {
    let config = ReductionConfig::from_json(
        r#"{
            "smoothing": {"algorithm": "running", "parameter": 5},
            "targetPoints": 250,
            "envelope": true
        }"#,
    )
    .unwrap();

    assert_eq!(
        config,
        ReductionConfig::default()
            .with_smoothing(SmoothingConfig::new(SmoothingAlgorithm::Running, 5.0))
            .with_target_points(250)
            .with_envelope(true)
    );
}

#[test]
fn test_config_rejects_bad_smoothing() {
    let err = ReductionConfig::from_json(
        r#"{"smoothing": {"algorithm": "ema", "parameter": -1}}"#,
    )
    .unwrap_err();
    assert!(format!("{err:?}").contains("alpha"));

    assert!(ReductionConfig::from_json(r#"{"targetPoints": "many"}"#).is_err());
}

#[test]
fn test_reduce_without_smoothing_matches_downsample() {
    let series = noisy(10_000, 1);
    let config = ReductionConfig::default().with_target_points(400);

    let reduced = reduce(&series, &config).unwrap();
    let expected = downsample(series.x(), series.y(), 400).unwrap();

    assert_eq!(reduced, Reduced::Line(expected));
}

#[test]
fn test_reduce_smooths_before_envelope() {
    let series = noisy(10_000, 2);
    let smoothing = SmoothingConfig::new(SmoothingAlgorithm::Gaussian, 3.0);
    let config = ReductionConfig::default()
        .with_smoothing(smoothing)
        .with_target_points(300)
        .with_envelope(true);

    let reduced = reduce(&series, &config).unwrap();

    let smoothed = smooth(series.x(), series.y(), SmoothingAlgorithm::Gaussian, 3.0).unwrap();
    let expected = downsample_with_envelope(series.x(), &smoothed, 300).unwrap();
    assert_eq!(reduced, Reduced::Envelope(expected));
    assert_eq!(reduced.len(), 300);
}

#[test]
fn test_reduce_many_keeps_order() {
    let series: Vec<Series> = (0..8).map(|i| noisy(2_000 + i * 500, i as u64)).collect();
    let config = ReductionConfig::default().with_target_points(100);

    let results = reduce_many(&series, &config);

    assert_eq!(results.len(), series.len());
    for (s, r) in series.iter().zip(results) {
        let r = r.unwrap();
        assert_eq!(r.len(), 100);
        assert_eq!(r.x()[0], s.x()[0]);
        assert_eq!(r.x()[r.len() - 1], s.x()[s.len() - 1]);
        assert_eq!(r, reduce(s, &config).unwrap());
    }
}

#[test]
fn test_reduced_serializes_with_kind_tag() {
    let series = noisy(10, 3);
    let config = ReductionConfig::default().with_envelope(true);

    let reduced = reduce(&series, &config).unwrap();
    let json = serde_json::to_value(&reduced).unwrap();

    assert_eq!(json["kind"], "envelope");
    assert_eq!(json["yMin"].as_array().unwrap().len(), 10);
}

#[test]
fn test_series_rejects_mismatched_lengths() {
    assert!(Series::new(vec![0.0, 1.0], vec![0.0]).is_err());
}
