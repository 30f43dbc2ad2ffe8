pub mod board;
pub mod confidence;
pub mod config;
pub mod error;
pub mod factors;
pub mod ingest;
pub mod lineup;
pub mod slip;
pub mod state;
pub mod synth;
pub mod tiers;

pub use confidence::score_confidence;
pub use error::LineupError;
pub use lineup::compute_lineup_valuation;
pub use synth::{RandomSource, prop_from_player, prop_from_projection, props_from_player};
