use std::fmt;

use crate::error::{LineupError, Result};
use crate::state::{
    ENHANCED_SOURCE_PREFIX, LineupValuation, SelectedPick, SourceBreakdown, VENDOR_SOURCE_PREFIX,
};

pub const MIN_ENTRY: u32 = 5;
pub const MAX_ENTRY: u32 = 5000;
pub const MIN_PICKS: usize = 2;
pub const MAX_PICKS: usize = 6;

const PREMIUM_SOURCE_BONUS: f64 = 1.25;
const STANDARD_SOURCE_BONUS: f64 = 1.15;
const ENHANCEMENT_FACTOR: f64 = 1.20;
const DEFAULT_PICK_CONFIDENCE: f64 = 80.0;
const DEFAULT_SOURCE_LABEL: &str = "Real Player Data";

/// Payout table before bonuses. Counts outside 2..=6 pay nothing.
pub fn base_multiplier(count: usize) -> f64 {
    match count {
        2 => 3.0,
        3 => 5.0,
        4 => 10.0,
        5 => 20.0,
        6 => 40.0,
        _ => 0.0,
    }
}

pub fn multiplier(count: usize, premium_connected: bool) -> f64 {
    let source_bonus = if premium_connected {
        PREMIUM_SOURCE_BONUS
    } else {
        STANDARD_SOURCE_BONUS
    };
    base_multiplier(count) * source_bonus * ENHANCEMENT_FACTOR
}

pub fn validate_entry(entry_amount: u32) -> Result<()> {
    if (MIN_ENTRY..=MAX_ENTRY).contains(&entry_amount) {
        Ok(())
    } else {
        Err(LineupError::EntryOutOfRange {
            amount: entry_amount,
            min: MIN_ENTRY,
            max: MAX_ENTRY,
        })
    }
}

pub fn source_breakdown(selections: &[SelectedPick]) -> SourceBreakdown {
    let mut out = SourceBreakdown::default();
    for pick in selections {
        match pick.source.as_deref() {
            Some(tag) if tag.starts_with(VENDOR_SOURCE_PREFIX) => out.vendor += 1,
            Some(tag) if tag.starts_with(ENHANCED_SOURCE_PREFIX) => out.enhanced += 1,
            _ => out.simulation += 1,
        }
    }
    out
}

pub fn average_confidence(selections: &[SelectedPick]) -> f64 {
    if selections.is_empty() {
        return 0.0;
    }
    let total: f64 = selections
        .iter()
        .map(|p| p.confidence.unwrap_or(DEFAULT_PICK_CONFIDENCE))
        .sum();
    total / selections.len() as f64
}

pub fn total_expected_value(selections: &[SelectedPick]) -> f64 {
    selections
        .iter()
        .map(|p| p.expected_value.unwrap_or(0.0))
        .sum()
}

pub fn compute_lineup_valuation(
    selections: &[SelectedPick],
    entry_amount: u32,
    premium_connected: bool,
) -> Result<LineupValuation> {
    validate_entry(entry_amount)?;
    let count = selections.len();
    if count > MAX_PICKS {
        return Err(LineupError::TooManyPicks {
            count,
            max: MAX_PICKS,
        });
    }

    let multiplier = multiplier(count, premium_connected);
    let payout = if count >= MIN_PICKS {
        entry_amount as f64 * multiplier
    } else {
        0.0
    };

    Ok(LineupValuation {
        count,
        multiplier,
        average_confidence: average_confidence(selections),
        total_expected_value: total_expected_value(selections),
        sources: source_breakdown(selections),
        payout,
    })
}

/// A finalized lineup, ready to show back to the user for confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupSubmission {
    pub entry_amount: u32,
    pub valuation: LineupValuation,
    pub picks: Vec<SelectedPick>,
    pub lead_source: String,
}

impl LineupSubmission {
    pub fn finalize(
        picks: Vec<SelectedPick>,
        entry_amount: u32,
        premium_connected: bool,
    ) -> Result<Self> {
        if picks.len() < MIN_PICKS {
            return Err(LineupError::TooFewPicks {
                count: picks.len(),
                min: MIN_PICKS,
            });
        }
        let valuation = compute_lineup_valuation(&picks, entry_amount, premium_connected)?;
        let lead_source = picks
            .first()
            .and_then(|p| p.source.clone())
            .unwrap_or_else(|| DEFAULT_SOURCE_LABEL.to_string());
        Ok(Self {
            entry_amount,
            valuation,
            picks,
            lead_source,
        })
    }
}

impl fmt::Display for LineupSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lineup Submitted")?;
        writeln!(f, "Props: {}", self.valuation.count)?;
        writeln!(f, "Entry: ${}", self.entry_amount)?;
        writeln!(f, "Multiplier: {:.2}x", self.valuation.multiplier)?;
        writeln!(f, "Payout: ${:.2}", self.valuation.payout)?;
        writeln!(f, "Avg Confidence: {:.1}%", self.valuation.average_confidence)?;
        writeln!(f, "Total Expected Value: {:.1}%", self.valuation.total_expected_value)?;
        write!(f, "Data Source: {}", self.lead_source)
    }
}
