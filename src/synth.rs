use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

use crate::confidence::{self, DEFAULT_BASE_CONFIDENCE};
use crate::factors::{self, ContextFactors};
use crate::state::{
    AiEnhancement, PatternAnalysis, PlayerStat, Projection, Prop, PropSource, Side, Sport,
};

pub const VENDOR_DATA_QUALITY: f64 = 0.95;
pub const PLAYER_DATA_QUALITY: f64 = 0.85;

const DEFAULT_RECENT_PERFORMANCE: [f64; 5] = [0.5, 0.6, 0.7, 0.8, 0.9];
const INJURY_IMPACT: f64 = 0.1;
const HEALTHY: &str = "Healthy";

const LINE_VARIANCE: f64 = 0.1;
const FALLBACK_BASE_VALUE: f64 = 10.0;
const VALUE_RATINGS: [&str; 5] = ["A+", "A", "B+", "B", "C+"];

/// Uniform draws in `[0, 1)`. Synthesis only ever needs this one operation,
/// which keeps the player-derived path deterministic under a scripted source.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

pub fn stat_types_for_sport(sport: &Sport) -> &'static [&'static str] {
    match sport {
        Sport::Nba => &[
            "Points",
            "Rebounds",
            "Assists",
            "3-Pointers Made",
            "Steals",
            "Blocks",
        ],
        Sport::Nfl => &[
            "Passing Yards",
            "Rushing Yards",
            "Receptions",
            "Receiving Yards",
            "Touchdowns",
        ],
        Sport::Mlb => &["Hits", "RBIs", "Runs", "Home Runs", "Strikeouts"],
        Sport::Nhl => &["Goals", "Assists", "Shots", "Points"],
        Sport::Soccer => &["Goals", "Assists", "Shots", "Passes"],
        Sport::Wnba => &["Points", "Rebounds", "Assists", "3-Pointers Made"],
        Sport::Mma => &["Significant Strikes", "Takedowns", "Submission Attempts"],
        Sport::Pga => &["Birdies", "Eagles", "Fairways Hit", "Greens in Regulation"],
        Sport::Other(_) => &["Points"],
    }
}

/// Typical per-game value used when a player has no recorded number.
pub fn base_stat_value(sport: &Sport, stat_type: &str) -> f64 {
    match (sport, stat_type) {
        (Sport::Nba, "Points") => 20.0,
        (Sport::Nba, "Rebounds") => 8.0,
        (Sport::Nba, "Assists") => 5.0,
        (Sport::Nba, "3-Pointers Made") => 2.5,
        (Sport::Nba, "Steals") => 1.2,
        (Sport::Nba, "Blocks") => 0.8,
        (Sport::Nfl, "Passing Yards") => 250.0,
        (Sport::Nfl, "Rushing Yards") => 80.0,
        (Sport::Nfl, "Receptions") => 5.0,
        (Sport::Nfl, "Receiving Yards") => 60.0,
        (Sport::Nfl, "Touchdowns") => 1.5,
        (Sport::Mlb, "Hits") => 1.2,
        (Sport::Mlb, "RBIs") => 1.0,
        (Sport::Mlb, "Runs") => 0.8,
        (Sport::Mlb, "Home Runs") => 0.3,
        (Sport::Mlb, "Strikeouts") => 1.5,
        (Sport::Nhl, "Goals") => 0.8,
        (Sport::Nhl, "Assists") => 1.2,
        (Sport::Nhl, "Shots") => 3.5,
        (Sport::Nhl, "Points") => 2.0,
        _ => FALLBACK_BASE_VALUE,
    }
}

pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

pub fn prop_id(sport: &Sport, player_name: &str, stat_type: &str) -> String {
    let raw = format!("{}_{}_{}", sport.label(), player_name, stat_type);
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Recorded season value for a stat, if the player has a usable one.
fn recorded_stat(player: &PlayerStat, stat_type: &str) -> Option<f64> {
    let lower = stat_type.to_lowercase();
    let compact: String = lower.chars().filter(|c| !c.is_whitespace()).collect();
    [compact, lower]
        .iter()
        .filter_map(|key| player.stats.get(key).copied())
        .find(|v| *v != 0.0 && v.is_finite())
}

/// Synthetic line: the player's recorded value (or the sport's base value)
/// nudged by up to ±5%, snapped to the nearest half point.
pub fn synthesize_line<R: RandomSource>(player: &PlayerStat, stat_type: &str, rng: &mut R) -> f64 {
    let stat = recorded_stat(player, stat_type)
        .unwrap_or_else(|| base_stat_value(&player.sport, stat_type));
    let variance = stat * LINE_VARIANCE;
    round_to_half(stat + (rng.next_unit() - 0.5) * variance)
}

pub fn prop_from_projection(projection: &Projection) -> Prop {
    prop_from_projection_at(projection, factors::current_month0())
}

/// Vendor path. Scores both sides and fills enhancement fields from the feed.
///
/// Feed lines are snapped to the half-point grid first, and scoring compares
/// against the snapped line so the published line and confidences agree.
pub fn prop_from_projection_at(projection: &Projection, month0: u32) -> Prop {
    let snapped;
    let projection = if round_to_half(projection.line) == projection.line {
        projection
    } else {
        snapped = Projection {
            line: round_to_half(projection.line),
            ..projection.clone()
        };
        &snapped
    };
    let base_confidence = projection
        .confidence_score
        .unwrap_or(DEFAULT_BASE_CONFIDENCE);
    let expected_value = projection.expected_value.unwrap_or(0.0);
    let context = ContextFactors::from_projection(projection, month0);
    let form_trend = projection
        .recent_form
        .as_deref()
        .map(confidence::form_trend)
        .unwrap_or(0.0);

    let injury_impact = if projection.injury_status.as_deref() == Some(HEALTHY) {
        0.0
    } else {
        INJURY_IMPACT
    };

    Prop {
        id: projection.id.clone(),
        player_name: projection.player_name.clone(),
        team: projection.team.clone().unwrap_or_else(|| "TBD".to_string()),
        position: projection
            .position
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        stat_type: projection.stat_type.clone(),
        line: projection.line,
        sport: projection.sport.clone(),
        data_quality: VENDOR_DATA_QUALITY,
        over_confidence: confidence::score_confidence(projection, Side::Over),
        under_confidence: confidence::score_confidence(projection, Side::Under),
        expected_value,
        source: PropSource::VendorReal,
        ai: AiEnhancement {
            value_rating: projection.value_rating.clone(),
            kelly_optimal: projection.kelly_optimal,
            market_edge: expected_value / 100.0,
            risk_score: 1.0 - base_confidence,
            weather_impact: projection.weather_impact.unwrap_or(0.0),
            injury_impact,
            form_trend,
            sharp_money: projection.sharp_money,
            public_betting: projection.public_betting,
            line_movement: projection.line_movement,
            steam_move: projection.steam_move,
            reverse_line_movement: projection.reverse_line_movement,
        },
        pattern: PatternAnalysis {
            overall_strength: base_confidence,
            seasonal_trend: Some(context.seasonal_trend),
            matchup_advantage: Some(context.matchup_advantage),
            recent_performance: Some(
                projection
                    .recent_form
                    .clone()
                    .unwrap_or_else(|| DEFAULT_RECENT_PERFORMANCE.to_vec()),
            ),
            home_away_factor: Some(context.home_away),
            rest_factor: Some(context.rest),
            back_to_back_factor: Some(context.back_to_back),
        },
    }
}

/// Player-derived path for one stat.
///
/// Only the line comes from the player's numbers. Confidence, EV and the
/// enhancement fields are placeholders drawn from fixed ranges, which is why
/// these props carry their own source tag.
pub fn prop_from_player<R: RandomSource>(player: &PlayerStat, stat_type: &str, rng: &mut R) -> Prop {
    let line = synthesize_line(player, stat_type, rng);
    let over_confidence = 85.0 + rng.next_unit() * 10.0;
    let under_confidence = 85.0 + rng.next_unit() * 10.0;
    let expected_value = (rng.next_unit() - 0.5) * 20.0;

    let rating_idx = ((rng.next_unit() * VALUE_RATINGS.len() as f64) as usize)
        .min(VALUE_RATINGS.len() - 1);
    let kelly_optimal = rng.next_unit() * 0.1;
    let market_edge = (rng.next_unit() - 0.5) * 0.1;
    let risk_score = rng.next_unit() * 0.3;
    let weather_impact = if player.sport.is_outdoor() {
        rng.next_unit() * 0.1
    } else {
        0.0
    };
    let injury_impact = rng.next_unit() * 0.05;
    let form_trend = (rng.next_unit() - 0.5) * 0.2;
    let overall_strength = 0.8 + rng.next_unit() * 0.2;

    Prop {
        id: prop_id(&player.sport, &player.name, stat_type),
        player_name: player.name.clone(),
        team: player.team.clone(),
        position: player.position.clone(),
        stat_type: stat_type.to_string(),
        line,
        sport: player.sport.clone(),
        data_quality: PLAYER_DATA_QUALITY,
        over_confidence,
        under_confidence,
        expected_value,
        source: PropSource::PlayerDerived,
        ai: AiEnhancement {
            value_rating: Some(VALUE_RATINGS[rating_idx].to_string()),
            kelly_optimal: Some(kelly_optimal),
            market_edge,
            risk_score,
            weather_impact,
            injury_impact,
            form_trend,
            sharp_money: None,
            public_betting: None,
            line_movement: None,
            steam_move: None,
            reverse_line_movement: None,
        },
        pattern: PatternAnalysis {
            overall_strength,
            seasonal_trend: None,
            matchup_advantage: None,
            recent_performance: None,
            home_away_factor: None,
            rest_factor: None,
            back_to_back_factor: None,
        },
    }
}

/// One prop per stat type of the player's sport.
pub fn props_from_player<R: RandomSource>(player: &PlayerStat, rng: &mut R) -> Vec<Prop> {
    stat_types_for_sport(&player.sport)
        .iter()
        .map(|stat_type| prop_from_player(player, stat_type, rng))
        .collect()
}
