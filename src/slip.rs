use tracing::{debug, info};

use crate::error::{LineupError, Result};
use crate::lineup::{self, LineupSubmission, MAX_PICKS, MIN_PICKS};
use crate::state::{LineupValuation, Prop, SelectedPick, Side};

/// The user's current selection, in insertion order, never more than six picks.
#[derive(Debug, Clone, Default)]
pub struct PickSlip {
    picks: Vec<SelectedPick>,
}

impl PickSlip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn picks(&self) -> &[SelectedPick] {
        &self.picks
    }

    pub fn contains(&self, prop_id: &str, side: Side) -> bool {
        self.position(prop_id, side).is_some()
    }

    fn position(&self, prop_id: &str, side: Side) -> Option<usize> {
        self.picks
            .iter()
            .position(|p| p.prop_id == prop_id && p.side == side)
    }

    pub fn select(&mut self, prop: &Prop, side: Side) -> Result<()> {
        self.insert(SelectedPick::from_prop(prop, side))
    }

    /// Adds a pick, or refreshes the snapshot of one already on the slip.
    /// A full slip refuses both.
    pub fn insert(&mut self, pick: SelectedPick) -> Result<()> {
        if self.picks.len() >= MAX_PICKS {
            debug!(key = %pick.key(), "pick slip full, selection rejected");
            return Err(LineupError::SlipFull { max: MAX_PICKS });
        }
        match self.position(&pick.prop_id, pick.side) {
            Some(idx) => self.picks[idx] = pick,
            None => self.picks.push(pick),
        }
        Ok(())
    }

    pub fn deselect(&mut self, prop_id: &str, side: Side) -> Option<SelectedPick> {
        let idx = self.position(prop_id, side)?;
        Some(self.picks.remove(idx))
    }

    pub fn remove_at(&mut self, index: usize) -> Option<SelectedPick> {
        if index < self.picks.len() {
            Some(self.picks.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    pub fn valuation(&self, entry_amount: u32, premium_connected: bool) -> Result<LineupValuation> {
        lineup::compute_lineup_valuation(&self.picks, entry_amount, premium_connected)
    }

    /// Finalizes the lineup and empties the slip. Below two picks nothing
    /// changes and the rejection is returned.
    pub fn submit(&mut self, entry_amount: u32, premium_connected: bool) -> Result<LineupSubmission> {
        if self.picks.len() < MIN_PICKS {
            debug!(count = self.picks.len(), "lineup submission rejected");
            return Err(LineupError::TooFewPicks {
                count: self.picks.len(),
                min: MIN_PICKS,
            });
        }
        let submission =
            LineupSubmission::finalize(self.picks.clone(), entry_amount, premium_connected)?;
        info!(
            picks = submission.valuation.count,
            entry = entry_amount,
            payout = submission.valuation.payout,
            "lineup submitted"
        );
        self.picks.clear();
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(id: &str, side: Side, confidence: f64) -> SelectedPick {
        SelectedPick {
            prop_id: id.to_string(),
            side,
            confidence: Some(confidence),
            expected_value: Some(0.0),
            source: None,
        }
    }

    #[test]
    fn reselecting_replaces_in_place() {
        let mut slip = PickSlip::new();
        slip.insert(pick("a", Side::Over, 70.0)).unwrap();
        slip.insert(pick("b", Side::Over, 75.0)).unwrap();
        slip.insert(pick("a", Side::Over, 90.0)).unwrap();
        assert_eq!(slip.len(), 2);
        assert_eq!(slip.picks()[0].confidence, Some(90.0));
    }

    #[test]
    fn both_sides_of_a_prop_are_distinct_picks() {
        let mut slip = PickSlip::new();
        slip.insert(pick("a", Side::Over, 70.0)).unwrap();
        slip.insert(pick("a", Side::Under, 70.0)).unwrap();
        assert_eq!(slip.len(), 2);
        assert!(slip.deselect("a", Side::Under).is_some());
        assert!(slip.contains("a", Side::Over));
        assert!(!slip.contains("a", Side::Under));
    }

    #[test]
    fn full_slip_refuses_even_existing_keys() {
        let mut slip = PickSlip::new();
        for i in 0..6 {
            slip.insert(pick(&format!("p{i}"), Side::Over, 80.0)).unwrap();
        }
        assert_eq!(
            slip.insert(pick("p0", Side::Over, 99.0)),
            Err(LineupError::SlipFull { max: 6 })
        );
        assert_eq!(slip.picks()[0].confidence, Some(80.0));
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut slip = PickSlip::new();
        slip.insert(pick("a", Side::Over, 70.0)).unwrap();
        assert!(slip.remove_at(3).is_none());
        assert_eq!(slip.remove_at(0).map(|p| p.prop_id), Some("a".to_string()));
        assert!(slip.is_empty());
    }

    #[test]
    fn submit_clears_slip() {
        let mut slip = PickSlip::new();
        slip.insert(pick("a", Side::Over, 70.0)).unwrap();
        slip.insert(pick("b", Side::Under, 90.0)).unwrap();
        let sub = slip.submit(25, false).unwrap();
        assert_eq!(sub.valuation.count, 2);
        assert!(slip.is_empty());
    }

    #[test]
    fn bad_entry_keeps_slip() {
        let mut slip = PickSlip::new();
        slip.insert(pick("a", Side::Over, 70.0)).unwrap();
        slip.insert(pick("b", Side::Under, 90.0)).unwrap();
        assert!(slip.submit(1, false).is_err());
        assert_eq!(slip.len(), 2);
    }
}
