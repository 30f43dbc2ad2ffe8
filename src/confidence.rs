use crate::state::{Projection, Side};

pub const DEFAULT_BASE_CONFIDENCE: f64 = 0.8;

const FORM_WINDOW: usize = 5;
const FORM_WEIGHTS: [f64; FORM_WINDOW] = [0.1, 0.15, 0.2, 0.25, 0.3];
const FORM_MIDPOINT: f64 = 0.5;

const TREND_WEIGHT: f64 = 0.1;
const SEASON_EDGE_BONUS: f64 = 0.05;
const OPPONENT_EDGE_BONUS: f64 = 0.03;
const CONFIDENCE_FLOOR: f64 = 0.5;
const CONFIDENCE_CEIL: f64 = 0.98;

/// The fields confidence scoring reads from a projection-like record.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInputs<'a> {
    pub line: f64,
    pub confidence_score: Option<f64>,
    pub recent_form: Option<&'a [f64]>,
    pub season_average: Option<f64>,
    pub vs_opponent_average: Option<f64>,
}

impl<'a> From<&'a Projection> for ScoringInputs<'a> {
    fn from(p: &'a Projection) -> Self {
        Self {
            line: p.line,
            confidence_score: p.confidence_score,
            recent_form: p.recent_form.as_deref(),
            season_average: p.season_average,
            vs_opponent_average: p.vs_opponent_average,
        }
    }
}

/// Weighted recent-form signal centered on zero.
///
/// Looks at the last five samples (oldest first). Weights come from a fixed
/// ascending table by position in that window, so a short window uses the
/// lighter weights and is not renormalized to sum to one.
pub fn form_trend(recent_form: &[f64]) -> f64 {
    if recent_form.len() < 2 {
        return 0.0;
    }
    let start = recent_form.len().saturating_sub(FORM_WINDOW);
    let recent = &recent_form[start..];

    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    for (w, form) in FORM_WEIGHTS.iter().zip(recent) {
        weighted += form * w;
        weight_sum += w;
    }
    weighted / weight_sum - FORM_MIDPOINT
}

/// Confidence for one side on the percent scale, always within [50, 98].
///
/// Over and under are scored independently and are not complements.
pub fn score_inputs(inputs: &ScoringInputs<'_>, side: Side) -> f64 {
    let base = inputs.confidence_score.unwrap_or(DEFAULT_BASE_CONFIDENCE);
    let trend = inputs.recent_form.map(form_trend).unwrap_or(0.0);
    let line = inputs.line;
    let season = inputs.season_average.unwrap_or(line);
    let vs_opponent = inputs.vs_opponent_average.unwrap_or(line);

    let mut confidence = base;
    match side {
        Side::Over => {
            confidence += trend * TREND_WEIGHT;
            if season > line {
                confidence += SEASON_EDGE_BONUS;
            }
            if vs_opponent > line {
                confidence += OPPONENT_EDGE_BONUS;
            }
        }
        Side::Under => {
            confidence -= trend * TREND_WEIGHT;
            if season < line {
                confidence += SEASON_EDGE_BONUS;
            }
            if vs_opponent < line {
                confidence += OPPONENT_EDGE_BONUS;
            }
        }
    }

    if confidence.is_nan() {
        confidence = CONFIDENCE_FLOOR;
    }
    confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEIL) * 100.0
}

pub fn score_confidence(projection: &Projection, side: Side) -> f64 {
    score_inputs(&ScoringInputs::from(projection), side)
}
