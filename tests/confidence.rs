use prop_engine::confidence::{ScoringInputs, form_trend, score_inputs};
use prop_engine::factors::matchup_advantage;
use prop_engine::score_confidence;
use prop_engine::state::{Projection, Side, Sport};

fn projection(line: f64) -> Projection {
    Projection::new("p", "Test Player", Sport::Nba, "Points", line)
}

#[test]
fn confidence_stays_in_band_for_pathological_inputs() {
    let bases = [None, Some(0.0), Some(2.0), Some(-5.0), Some(1e9), Some(f64::NAN)];
    let forms: [Option<&[f64]>; 5] = [
        None,
        Some(&[]),
        Some(&[1e12, -1e12]),
        Some(&[-1e12, 1e12]),
        Some(&[0.0, 0.0, 0.0, 1e300, 1e300]),
    ];
    let averages = [None, Some(0.0), Some(-100.0), Some(1e9)];

    for base in bases {
        for form in forms {
            for season in averages {
                for side in [Side::Over, Side::Under] {
                    let inputs = ScoringInputs {
                        line: 10.0,
                        confidence_score: base,
                        recent_form: form,
                        season_average: season,
                        vs_opponent_average: season,
                    };
                    let c = score_inputs(&inputs, side);
                    assert!(
                        (50.0..=98.0).contains(&c),
                        "base={base:?} form={form:?} season={season:?} side={side:?} -> {c}"
                    );
                }
            }
        }
    }
}

#[test]
fn trend_is_zero_below_two_samples() {
    for sample in [-3.0, 0.0, 0.5, 1.0, 42.0] {
        assert_eq!(form_trend(&[sample]), 0.0);
    }
    assert_eq!(form_trend(&[]), 0.0);
}

#[test]
fn rising_form_with_season_edge_scores_over() {
    let mut p = projection(10.0);
    p.confidence_score = Some(0.8);
    p.recent_form = Some(vec![0.5, 0.6, 0.7, 0.8, 0.9]);
    p.season_average = Some(12.0);

    let trend = form_trend(p.recent_form.as_deref().unwrap());
    assert!((trend - 0.25).abs() < 1e-9);

    let over = score_confidence(&p, Side::Over);
    assert!((over - 87.5).abs() < 1e-9, "{over}");
    assert_eq!(format!("{over:.0}"), "88");

    // Under loses the trend and gets no average bonus.
    let under = score_confidence(&p, Side::Under);
    assert!((under - 77.5).abs() < 1e-9, "{under}");
}

#[test]
fn sides_are_not_complements() {
    let mut p = projection(10.0);
    p.season_average = Some(10.0);
    let over = score_confidence(&p, Side::Over);
    let under = score_confidence(&p, Side::Under);
    assert!((over + under - 160.0).abs() < 1e-9);
}

#[test]
fn ceiling_holds_at_98() {
    let mut p = projection(10.0);
    p.confidence_score = Some(0.97);
    p.season_average = Some(20.0);
    p.vs_opponent_average = Some(20.0);
    assert_eq!(score_confidence(&p, Side::Over), 98.0);
}

#[test]
fn matchup_advantage_is_bounded_when_season_nonzero() {
    let values = [-50.0, -1.0, 0.0, 0.1, 1.0, 7.5, 10.0, 13.0, 1e6];
    for season in values {
        if season == 0.0 {
            continue;
        }
        for vs in values {
            let m = matchup_advantage(10.0, Some(season), Some(vs));
            assert!(
                (-0.3 - 1e-12..=0.3 + 1e-12).contains(&m),
                "season={season} vs={vs} -> {m}"
            );
        }
    }
}

#[test]
fn zero_season_average_returns_half() {
    // Off the signed offset scale; kept as the established fallback.
    assert_eq!(matchup_advantage(10.0, Some(0.0), Some(7.0)), 0.5);
    assert_eq!(matchup_advantage(10.0, Some(0.0), None), 0.5);
}
