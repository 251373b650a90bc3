use chart_reduce::simd::{max_f64, min_f64, sum_f64, triangle_area};

#[test]
fn test_sum_across_chunk_boundary() {
    let data: Vec<f64> = (1..=19).map(|i| i as f64).collect();
    assert_eq!(sum_f64(&data), 190.0);
    assert_eq!(sum_f64(&[]), 0.0);
}

#[test]
fn test_min_max() {
    let mut data: Vec<f64> = (0..17).map(|i| (i as f64 * 1.7).sin()).collect();
    data[13] = -42.0;
    data[3] = 42.0;

    assert_eq!(min_f64(&data), -42.0);
    assert_eq!(max_f64(&data), 42.0);
    assert!(min_f64(&[]).is_nan());
    assert!(max_f64(&[]).is_nan());
}

#[test]
fn test_min_max_skip_nan() {
    let data = [f64::NAN, 3.0, -1.0, f64::NAN];
    assert_eq!(min_f64(&data), -1.0);
    assert_eq!(max_f64(&data), 3.0);
}

#[test]
fn test_triangle_area() {
    // Right triangle with legs 4 and 3: doubled area 12
    assert_eq!(triangle_area(0.0, 0.0, 4.0, 0.0, 0.0, 3.0), 12.0);
    assert_eq!(triangle_area(0.0, 0.0, 1.0, 1.0, 2.0, 2.0), 0.0);
}

#[test]
fn test_kernels_match_naive_folds() {
    let data: Vec<f64> = (0..103).map(|i| ((i * 37) % 101) as f64 - 50.0).collect();

    assert_eq!(sum_f64(&data), data.iter().sum::<f64>());
    assert_eq!(min_f64(&data), data.iter().copied().fold(f64::INFINITY, f64::min));
    assert_eq!(max_f64(&data), data.iter().copied().fold(f64::NEG_INFINITY, f64::max));
}
