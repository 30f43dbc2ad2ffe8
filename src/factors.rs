//! Contextual adjustments derived from raw projection fields.
//!
//! The seasonal curve is a coarse calendar heuristic per sport. It is not fit
//! to outcomes and should not be read as a prediction.

use chrono::{Datelike, Local};

use crate::state::{Projection, Sport};

const MATCHUP_RATIO_MIN: f64 = 0.7;
const MATCHUP_RATIO_MAX: f64 = 1.3;
// Returned when the season average is zero. Not on the signed offset scale.
const MATCHUP_NEUTRAL: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextFactors {
    pub seasonal_trend: f64,
    pub matchup_advantage: f64,
    pub home_away: f64,
    pub rest: f64,
    pub back_to_back: f64,
}

impl ContextFactors {
    pub fn from_projection(projection: &Projection, month0: u32) -> Self {
        Self {
            seasonal_trend: seasonal_trend(&projection.sport, month0),
            matchup_advantage: matchup_advantage(
                projection.line,
                projection.season_average,
                projection.vs_opponent_average,
            ),
            home_away: home_away_factor(projection.home_away.as_deref()),
            rest: rest_factor(projection.rest_days),
            back_to_back: back_to_back_factor(projection.back_to_back),
        }
    }
}

/// Zero-based calendar month (January = 0) from the local clock.
pub fn current_month0() -> u32 {
    Local::now().month0()
}

pub fn seasonal_trend(sport: &Sport, month0: u32) -> f64 {
    let month = month0 as f64;
    match sport {
        Sport::Nba => 0.4 + (month / 12.0) * 0.4,
        Sport::Nfl => 0.6 - (month / 12.0) * 0.2,
        Sport::Mlb => 0.5 + (month / 2.0).sin() * 0.1,
        _ => 0.5,
    }
}

/// Opponent-specific average relative to the season average, as a signed
/// offset from 1. Both averages fall back to the line when missing.
pub fn matchup_advantage(
    line: f64,
    season_average: Option<f64>,
    vs_opponent_average: Option<f64>,
) -> f64 {
    let season = season_average.unwrap_or(line);
    let vs_opponent = vs_opponent_average.unwrap_or(line);
    if season == 0.0 {
        return MATCHUP_NEUTRAL;
    }
    let ratio = vs_opponent / season;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(MATCHUP_RATIO_MIN, MATCHUP_RATIO_MAX) - 1.0
}

pub fn home_away_factor(home_away: Option<&str>) -> f64 {
    if home_away == Some("Home") { 1.05 } else { 0.95 }
}

pub fn rest_factor(rest_days: Option<f64>) -> f64 {
    if rest_days.is_some_and(|days| days > 1.0) {
        1.02
    } else {
        0.98
    }
}

pub fn back_to_back_factor(back_to_back: Option<bool>) -> f64 {
    if back_to_back == Some(true) { 0.95 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nba_climbs_and_nfl_fades_through_the_year() {
        assert!((seasonal_trend(&Sport::Nba, 0) - 0.4).abs() < 1e-12);
        assert!((seasonal_trend(&Sport::Nba, 6) - 0.6).abs() < 1e-12);
        assert!(seasonal_trend(&Sport::Nba, 11) > seasonal_trend(&Sport::Nba, 3));

        assert!((seasonal_trend(&Sport::Nfl, 0) - 0.6).abs() < 1e-12);
        assert!((seasonal_trend(&Sport::Nfl, 6) - 0.5).abs() < 1e-12);
        assert!(seasonal_trend(&Sport::Nfl, 11) < seasonal_trend(&Sport::Nfl, 3));
    }

    #[test]
    fn mlb_oscillates_around_midpoint() {
        for month in 0..12 {
            let t = seasonal_trend(&Sport::Mlb, month);
            assert!((0.4..=0.6).contains(&t), "month {month} -> {t}");
        }
        assert!((seasonal_trend(&Sport::Mlb, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn other_sports_are_flat() {
        for month in 0..12 {
            assert_eq!(seasonal_trend(&Sport::Nhl, month), 0.5);
            assert_eq!(seasonal_trend(&Sport::Other("Cricket".into()), month), 0.5);
        }
    }

    #[test]
    fn matchup_is_clamped_offset() {
        assert!((matchup_advantage(10.0, Some(10.0), Some(11.0)) - 0.1).abs() < 1e-12);
        assert!((matchup_advantage(10.0, Some(10.0), Some(50.0)) - 0.3).abs() < 1e-12);
        assert!((matchup_advantage(10.0, Some(10.0), Some(0.0)) + 0.3).abs() < 1e-12);
        assert_eq!(matchup_advantage(10.0, None, None), 0.0);
    }

    #[test]
    fn matchup_zero_season_average_is_neutral_half() {
        assert_eq!(matchup_advantage(10.0, Some(0.0), Some(12.0)), 0.5);
        assert_eq!(matchup_advantage(0.0, None, None), 0.5);
    }

    #[test]
    fn venue_rest_and_schedule_factors() {
        assert_eq!(home_away_factor(Some("Home")), 1.05);
        assert_eq!(home_away_factor(Some("Away")), 0.95);
        assert_eq!(home_away_factor(None), 0.95);

        assert_eq!(rest_factor(Some(2.0)), 1.02);
        assert_eq!(rest_factor(Some(1.5)), 1.02);
        assert_eq!(rest_factor(Some(1.0)), 0.98);
        assert_eq!(rest_factor(Some(-3.0)), 0.98);
        assert_eq!(rest_factor(None), 0.98);

        assert_eq!(back_to_back_factor(Some(true)), 0.95);
        assert_eq!(back_to_back_factor(Some(false)), 1.0);
        assert_eq!(back_to_back_factor(None), 1.0);
    }
}
