use prop_engine::LineupError;
use prop_engine::compute_lineup_valuation;
use prop_engine::lineup::multiplier;
use prop_engine::slip::PickSlip;
use prop_engine::state::{SelectedPick, Side};

fn pick(id: &str, confidence: f64, ev: f64, source: &str) -> SelectedPick {
    SelectedPick {
        prop_id: id.to_string(),
        side: Side::Over,
        confidence: Some(confidence),
        expected_value: Some(ev),
        source: Some(source.to_string()),
    }
}

fn picks(n: usize) -> Vec<SelectedPick> {
    (0..n)
        .map(|i| pick(&format!("p{i}"), 85.0, 1.0, "VENDOR_REAL_DATA"))
        .collect()
}

#[test]
fn three_premium_picks_at_25() {
    let v = compute_lineup_valuation(&picks(3), 25, true).unwrap();
    assert_eq!(v.count, 3);
    assert!((v.multiplier - 7.5).abs() < 1e-9);
    assert!((v.payout - 187.5).abs() < 1e-9);
    assert_eq!(format!("${:.2}", v.payout), "$187.50");
    assert_eq!(v.sources.vendor, 3);
}

#[test]
fn single_pick_pays_nothing_and_cannot_submit() {
    let v = compute_lineup_valuation(&picks(1), 25, true).unwrap();
    assert_eq!(v.multiplier, 0.0);
    assert_eq!(v.payout, 0.0);

    let mut slip = PickSlip::new();
    slip.insert(pick("solo", 90.0, 2.0, "ENHANCED_PLAYER_DATA")).unwrap();
    assert_eq!(
        slip.submit(25, true),
        Err(LineupError::TooFewPicks { count: 1, min: 2 })
    );
    assert_eq!(slip.len(), 1);
}

#[test]
fn seventh_pick_is_rejected() {
    let mut slip = PickSlip::new();
    for p in picks(6) {
        slip.insert(p).unwrap();
    }
    let err = slip.insert(pick("p6", 90.0, 0.0, "VENDOR_REAL_DATA")).unwrap_err();
    assert_eq!(err, LineupError::SlipFull { max: 6 });
    assert_eq!(slip.len(), 6);
}

#[test]
fn multiplier_nonzero_only_on_two_through_six() {
    for premium in [false, true] {
        let values: Vec<f64> = (0..=8).map(|n| multiplier(n, premium)).collect();
        for (n, m) in values.iter().enumerate() {
            assert_eq!(*m != 0.0, (2..=6).contains(&n), "n={n}");
        }
        for n in 2..6 {
            assert!(values[n + 1] > values[n]);
        }
    }
}

#[test]
fn entry_amount_is_rejected_not_clamped() {
    for bad in [0, 4, 5001, u32::MAX] {
        assert!(matches!(
            compute_lineup_valuation(&picks(2), bad, false),
            Err(LineupError::EntryOutOfRange { amount, .. }) if amount == bad
        ));
    }
    let v = compute_lineup_valuation(&picks(2), 5000, false).unwrap();
    assert!((v.payout - 5000.0 * 3.0 * 1.15 * 1.2).abs() < 1e-6);
}

#[test]
fn empty_slip_values_to_zero() {
    let slip = PickSlip::new();
    let v = slip.valuation(25, false).unwrap();
    assert_eq!(v.count, 0);
    assert_eq!(v.payout, 0.0);
    assert_eq!(v.average_confidence, 0.0);
    assert_eq!(v.total_expected_value, 0.0);
}

#[test]
fn valuation_uses_snapshots_and_breakdown() {
    let selections = vec![
        pick("a", 90.0, 4.0, "VENDOR_REAL_DATA"),
        pick("b", 86.0, -1.5, "ENHANCED_PLAYER_DATA"),
        SelectedPick {
            prop_id: "c".to_string(),
            side: Side::Under,
            confidence: None,
            expected_value: None,
            source: Some("SIMULATION".to_string()),
        },
    ];
    let v = compute_lineup_valuation(&selections, 20, false).unwrap();
    assert!((v.average_confidence - 256.0 / 3.0).abs() < 1e-9);
    assert!((v.total_expected_value - 2.5).abs() < 1e-9);
    assert_eq!((v.sources.vendor, v.sources.enhanced, v.sources.simulation), (1, 1, 1));
    assert!((v.multiplier - 5.0 * 1.15 * 1.2).abs() < 1e-9);
}
