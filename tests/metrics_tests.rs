use reeltune::metrics::{compute_metrics, Metrics, MetricsAccumulator};
use rstest::rstest;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[rstest]
#[case(&[0.0, 0.0, 10.0, 0.0], 1.0, 2.5, 0.25, 5.0)]
#[case(&[4.0], 2.0, 2.0, 1.0, 0.0)]
#[case(&[1.0, 1.0, 1.0], 1.0, 1.0, 1.0, 0.0)]
#[case(&[0.0, 0.0], 1.0, 0.0, 0.0, 0.0)]
#[case(&[2.0, 4.0], 0.0, 0.0, 1.0, 1.4142135623730951)]
fn test_metrics(
    #[case] wins: &[f64],
    #[case] bet: f64,
    #[case] rtp: f64,
    #[case] hit_rate: f64,
    #[case] volatility: f64,
) {
    let m = compute_metrics(wins, bet);
    assert!(approx(m.rtp, rtp), "rtp {} != {}", m.rtp, rtp);
    assert!(approx(m.hit_rate, hit_rate), "hit rate {} != {}", m.hit_rate, hit_rate);
    assert!(
        approx(m.volatility, volatility),
        "volatility {} != {}",
        m.volatility,
        volatility
    );
}

#[test]
fn test_no_spins_is_all_zero() {
    assert_eq!(compute_metrics(&[], 1.0), Metrics::default());
}

#[test]
fn test_metrics_serialize_camel_case() {
    let json = serde_json::to_value(compute_metrics(&[1.0, 0.0], 1.0)).unwrap();
    assert!(json.get("hitRate").is_some());
    assert!(json.get("rtp").is_some());
    assert!(json.get("volatility").is_some());
}

#[test]
fn test_accumulator_matches_slice_form() {
    let wins = [0.0, 2.5, 0.0, 40.0, 1.0, 0.0, 0.0, 7.5];
    let mut acc = MetricsAccumulator::default();
    for &w in &wins {
        acc.push(w);
    }
    assert_eq!(acc.spins(), 8);
    assert_eq!(acc.total(), 51.0);

    let streamed = acc.finish(2.0);
    let sliced = compute_metrics(&wins, 2.0);
    assert!(approx(streamed.rtp, sliced.rtp));
    assert!(approx(streamed.hit_rate, 0.5));
    assert!(approx(streamed.volatility, sliced.volatility));

    // Two-pass sample standard deviation.
    let mean = 51.0 / 8.0;
    let var = wins.iter().map(|w| (w - mean) * (w - mean)).sum::<f64>() / 7.0;
    assert!(approx(streamed.volatility, var.sqrt()));
}
