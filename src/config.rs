use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::board::{DEFAULT_PLAYER_CAP, SportFilter};

const DEFAULT_PLAYERS_PATH: &str = "tests/fixtures/players.json";
const DEFAULT_ENTRY_AMOUNT: u32 = 25;
const DEFAULT_TOP: usize = 12;

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub players_path: PathBuf,
    pub projections_path: Option<PathBuf>,
    pub sport: SportFilter,
    // Validated when the lineup is valued, never clamped here.
    pub entry_amount: u32,
    pub player_cap: usize,
    pub top: usize,
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            players_path: PathBuf::from(DEFAULT_PLAYERS_PATH),
            projections_path: None,
            sport: SportFilter::All,
            entry_amount: DEFAULT_ENTRY_AMOUNT,
            player_cap: DEFAULT_PLAYER_CAP,
            top: DEFAULT_TOP,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(path) = opt_env("PROPS_PLAYERS_PATH") {
            cfg.players_path = PathBuf::from(path);
        }
        cfg.projections_path = opt_env("PROPS_PROJECTIONS_PATH").map(PathBuf::from);
        if let Some(sport) = opt_env("PROPS_SPORT") {
            cfg.sport = SportFilter::parse(&sport);
        }
        cfg.entry_amount = parse_entry_amount(opt_env("PROPS_ENTRY_AMOUNT").as_deref())?;
        cfg.player_cap = env::var("PROPS_PLAYER_CAP")
            .ok()
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_PLAYER_CAP)
            .clamp(1, 500);
        cfg.top = env::var("PROPS_TOP")
            .ok()
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_TOP)
            .clamp(1, 200);
        cfg.seed = env::var("PROPS_SEED")
            .ok()
            .and_then(|val| val.trim().parse::<u64>().ok());
        Ok(cfg)
    }
}

/// Unset means the default stake. A value that is set but not a whole number
/// is an error; range checks happen at valuation.
pub fn parse_entry_amount(raw: Option<&str>) -> Result<u32> {
    match raw {
        None => Ok(DEFAULT_ENTRY_AMOUNT),
        Some(val) => val
            .trim()
            .parse::<u32>()
            .with_context(|| {
                format!("PROPS_ENTRY_AMOUNT must be a whole dollar amount, got {val:?}")
            }),
    }
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
