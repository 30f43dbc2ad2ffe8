use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sport {
    Nba,
    Nfl,
    Mlb,
    Nhl,
    Soccer,
    Wnba,
    Mma,
    Pga,
    Other(String),
}

impl Sport {
    pub const KNOWN: [Sport; 8] = [
        Sport::Nba,
        Sport::Nfl,
        Sport::Mlb,
        Sport::Nhl,
        Sport::Soccer,
        Sport::Wnba,
        Sport::Mma,
        Sport::Pga,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "NBA" => Sport::Nba,
            "NFL" => Sport::Nfl,
            "MLB" => Sport::Mlb,
            "NHL" => Sport::Nhl,
            "Soccer" => Sport::Soccer,
            "WNBA" => Sport::Wnba,
            "MMA" => Sport::Mma,
            "PGA" => Sport::Pga,
            other => Sport::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Sport::Nba => "NBA",
            Sport::Nfl => "NFL",
            Sport::Mlb => "MLB",
            Sport::Nhl => "NHL",
            Sport::Soccer => "Soccer",
            Sport::Wnba => "WNBA",
            Sport::Mma => "MMA",
            Sport::Pga => "PGA",
            Sport::Other(label) => label,
        }
    }

    /// Sports played outdoors, where weather can move a stat line.
    pub fn is_outdoor(&self) -> bool {
        matches!(self, Sport::Nfl | Sport::Mlb | Sport::Soccer | Sport::Pga)
    }
}

impl From<String> for Sport {
    fn from(raw: String) -> Self {
        Sport::parse(&raw)
    }
}

impl From<Sport> for String {
    fn from(sport: Sport) -> Self {
        sport.label().to_string()
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Over,
    Under,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Over => "over",
            Side::Under => "under",
        }
    }
}

/// Vendor projection record. Everything past `line` is optional upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    pub id: String,
    pub player_name: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    pub sport: Sport,
    pub stat_type: String,
    pub line: f64,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub recent_form: Option<Vec<f64>>,
    #[serde(default)]
    pub season_average: Option<f64>,
    #[serde(default)]
    pub vs_opponent_average: Option<f64>,
    #[serde(default)]
    pub home_away: Option<String>,
    #[serde(default)]
    pub rest_days: Option<f64>,
    #[serde(default)]
    pub back_to_back: Option<bool>,
    #[serde(default)]
    pub weather_impact: Option<f64>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub sharp_money: Option<bool>,
    #[serde(default)]
    pub steam_move: Option<bool>,
    #[serde(default)]
    pub reverse_line_movement: Option<bool>,
    #[serde(default)]
    pub public_betting: Option<f64>,
    #[serde(default)]
    pub line_movement: Option<f64>,
    #[serde(default)]
    pub value_rating: Option<String>,
    #[serde(default)]
    pub kelly_optimal: Option<f64>,
    #[serde(default)]
    pub expected_value: Option<f64>,
}

impl Projection {
    pub fn new(
        id: impl Into<String>,
        player_name: impl Into<String>,
        sport: Sport,
        stat_type: impl Into<String>,
        line: f64,
    ) -> Self {
        Self {
            id: id.into(),
            player_name: player_name.into(),
            team: None,
            position: None,
            sport,
            stat_type: stat_type.into(),
            line,
            confidence_score: None,
            recent_form: None,
            season_average: None,
            vs_opponent_average: None,
            home_away: None,
            rest_days: None,
            back_to_back: None,
            weather_impact: None,
            injury_status: None,
            sharp_money: None,
            steam_move: None,
            reverse_line_movement: None,
            public_betting: None,
            line_movement: None,
            value_rating: None,
            kelly_optimal: None,
            expected_value: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStat {
    pub name: String,
    pub team: String,
    pub position: String,
    pub sport: Sport,
    #[serde(default)]
    pub stats: HashMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropSource {
    VendorReal,
    PlayerDerived,
}

pub const VENDOR_SOURCE_PREFIX: &str = "VENDOR";
pub const ENHANCED_SOURCE_PREFIX: &str = "ENHANCED";

impl PropSource {
    pub fn tag(self) -> &'static str {
        match self {
            PropSource::VendorReal => "VENDOR_REAL_DATA",
            PropSource::PlayerDerived => "ENHANCED_PLAYER_DATA",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AiEnhancement {
    pub value_rating: Option<String>,
    pub kelly_optimal: Option<f64>,
    pub market_edge: f64,
    pub risk_score: f64,
    pub weather_impact: f64,
    pub injury_impact: f64,
    pub form_trend: f64,

    // Market intelligence, only carried by vendor projections.
    pub sharp_money: Option<bool>,
    pub public_betting: Option<f64>,
    pub line_movement: Option<f64>,
    pub steam_move: Option<bool>,
    pub reverse_line_movement: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternAnalysis {
    pub overall_strength: f64,
    pub seasonal_trend: Option<f64>,
    pub matchup_advantage: Option<f64>,
    pub recent_performance: Option<Vec<f64>>,
    pub home_away_factor: Option<f64>,
    pub rest_factor: Option<f64>,
    pub back_to_back_factor: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub id: String,
    pub player_name: String,
    pub team: String,
    pub position: String,
    pub stat_type: String,
    pub line: f64,
    pub sport: Sport,
    pub data_quality: f64,
    // Percent scale, each side clamped on its own; they need not sum to 100.
    pub over_confidence: f64,
    pub under_confidence: f64,
    pub expected_value: f64,
    pub source: PropSource,
    pub ai: AiEnhancement,
    pub pattern: PatternAnalysis,
}

impl Prop {
    pub fn confidence(&self, side: Side) -> f64 {
        match side {
            Side::Over => self.over_confidence,
            Side::Under => self.under_confidence,
        }
    }

    /// The side with the higher confidence; ties go to the over.
    pub fn best_side(&self) -> (Side, f64) {
        if self.under_confidence > self.over_confidence {
            (Side::Under, self.under_confidence)
        } else {
            (Side::Over, self.over_confidence)
        }
    }
}

/// A pick as it was when the user made it. Values are not re-derived later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPick {
    pub prop_id: String,
    pub side: Side,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub expected_value: Option<f64>,
    #[serde(default)]
    pub source: Option<String>,
}

impl SelectedPick {
    pub fn from_prop(prop: &Prop, side: Side) -> Self {
        Self {
            prop_id: prop.id.clone(),
            side,
            confidence: Some(prop.confidence(side)),
            expected_value: Some(prop.expected_value),
            source: Some(prop.source.tag().to_string()),
        }
    }

    pub fn key(&self) -> String {
        format!("{}_{}", self.prop_id, self.side.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceBreakdown {
    pub vendor: usize,
    pub enhanced: usize,
    pub simulation: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineupValuation {
    pub count: usize,
    pub multiplier: f64,
    pub average_confidence: f64,
    pub total_expected_value: f64,
    pub sources: SourceBreakdown,
    pub payout: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_labels_round_trip() {
        for sport in Sport::KNOWN {
            assert_eq!(Sport::parse(sport.label()), sport);
        }
        assert_eq!(Sport::parse("Cricket"), Sport::Other("Cricket".to_string()));
        assert_eq!(Sport::parse("Cricket").label(), "Cricket");
    }

    #[test]
    fn outdoor_sports_are_fixed() {
        let outdoor: Vec<Sport> = Sport::KNOWN
            .into_iter()
            .filter(|s| s.is_outdoor())
            .collect();
        assert_eq!(outdoor, vec![Sport::Nfl, Sport::Mlb, Sport::Soccer, Sport::Pga]);
    }

    #[test]
    fn pick_key_joins_prop_and_side() {
        let pick = SelectedPick {
            prop_id: "nba_a_points".to_string(),
            side: Side::Under,
            confidence: None,
            expected_value: None,
            source: None,
        };
        assert_eq!(pick.key(), "nba_a_points_under");
    }
}
