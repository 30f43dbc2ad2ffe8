use std::cmp::Ordering;

use tracing::{debug, info, warn};

use crate::error::{LineupError, Result};
use crate::factors;
use crate::slip::PickSlip;
use crate::state::{PlayerStat, Projection, Prop, Side, Sport};
use crate::synth::{self, RandomSource};

pub const DEFAULT_PLAYER_CAP: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SportFilter {
    #[default]
    All,
    Only(Sport),
}

impl SportFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            SportFilter::All
        } else {
            SportFilter::Only(Sport::parse(raw))
        }
    }

    pub fn matches(&self, sport: &Sport) -> bool {
        match self {
            SportFilter::All => true,
            SportFilter::Only(want) => want == sport,
        }
    }
}

/// What the vendor connector currently exposes. A disconnected feed, or one
/// without a projections payload, sends the board down the player path.
#[derive(Debug, Clone, Default)]
pub struct VendorFeed {
    pub connected: bool,
    pub projections: Option<Vec<Projection>>,
}

impl VendorFeed {
    pub fn connected(projections: Vec<Projection>) -> Self {
        Self {
            connected: true,
            projections: Some(projections),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    fn live_projections(&self) -> Option<&[Projection]> {
        if self.connected {
            self.projections.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMode {
    Vendor,
    PlayerDerived,
}

#[derive(Debug, Clone)]
pub struct PropBoard {
    pub mode: BoardMode,
    pub premium_connected: bool,
    pub props: Vec<Prop>,
}

impl PropBoard {
    pub fn refresh<R: RandomSource>(
        feed: &VendorFeed,
        players: &[PlayerStat],
        filter: &SportFilter,
        player_cap: usize,
        rng: &mut R,
    ) -> Self {
        Self::refresh_at(feed, players, filter, player_cap, factors::current_month0(), rng)
    }

    pub fn refresh_at<R: RandomSource>(
        feed: &VendorFeed,
        players: &[PlayerStat],
        filter: &SportFilter,
        player_cap: usize,
        month0: u32,
        rng: &mut R,
    ) -> Self {
        let (mode, mut props) = match feed.live_projections() {
            Some(projections) => {
                let props = projections
                    .iter()
                    .filter(|p| filter.matches(&p.sport))
                    .map(|p| synth::prop_from_projection_at(p, month0))
                    .collect::<Vec<_>>();
                info!(
                    available = projections.len(),
                    kept = props.len(),
                    "loaded vendor projections"
                );
                (BoardMode::Vendor, props)
            }
            None => {
                warn!("no vendor projections available, generating from player data");
                let eligible: Vec<&PlayerStat> =
                    players.iter().filter(|p| filter.matches(&p.sport)).collect();
                if eligible.len() > player_cap {
                    debug!(eligible = eligible.len(), cap = player_cap, "player cap applied");
                }
                let props = eligible
                    .into_iter()
                    .take(player_cap)
                    .flat_map(|player| synth::props_from_player(player, &mut *rng))
                    .collect::<Vec<_>>();
                info!(generated = props.len(), "generated player-derived props");
                (BoardMode::PlayerDerived, props)
            }
        };
        rank_props(&mut props);
        Self {
            mode,
            premium_connected: feed.connected,
            props,
        }
    }

    pub fn get(&self, prop_id: &str) -> Option<&Prop> {
        self.props.iter().find(|p| p.id == prop_id)
    }

    pub fn top(&self, n: usize) -> &[Prop] {
        &self.props[..n.min(self.props.len())]
    }

    pub fn pick(&self, slip: &mut PickSlip, prop_id: &str, side: Side) -> Result<()> {
        let prop = self
            .get(prop_id)
            .ok_or_else(|| LineupError::UnknownProp(prop_id.to_string()))?;
        slip.select(prop, side)
    }
}

/// Strongest side first, then expected value, then id so equal props keep a
/// stable order between refreshes.
pub fn rank_props(props: &mut [Prop]) {
    props.sort_by(|a, b| {
        b.best_side()
            .1
            .partial_cmp(&a.best_side().1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.expected_value
                    .partial_cmp(&a.expected_value)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.id.cmp(&b.id))
    });
}
