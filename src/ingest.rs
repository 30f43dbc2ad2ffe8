use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::warn;

use crate::state::{PlayerStat, Projection};

/// Accepts the vendor envelope (`{"projections": [...]}`) or a bare array.
/// Rows decode one at a time; a row that does not fit is logged and skipped.
pub fn parse_projections_json(raw: &str) -> Result<Vec<Projection>> {
    let payload: Value = serde_json::from_str(raw).context("invalid projections json")?;
    let rows = match payload {
        Value::Array(rows) => rows,
        Value::Object(mut envelope) => match envelope.remove("projections") {
            Some(Value::Array(rows)) => rows,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => bail!(
                "invalid projections json: `projections` must be an array, got {}",
                json_kind(&other)
            ),
        },
        other => bail!(
            "invalid projections json: expected an envelope or an array, got {}",
            json_kind(&other)
        ),
    };

    let total = rows.len();
    let projections: Vec<Projection> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(idx, row)| match serde_json::from_value::<Projection>(row) {
            Ok(projection) => Some(projection),
            Err(err) => {
                warn!(index = idx, error = %err, "skipping malformed projection");
                None
            }
        })
        .collect();
    if projections.len() < total {
        warn!(
            kept = projections.len(),
            skipped = total - projections.len(),
            "projection feed had malformed rows"
        );
    }
    Ok(projections)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn parse_players_json(raw: &str) -> Result<Vec<PlayerStat>> {
    serde_json::from_str(raw).context("invalid players json")
}

pub fn load_projections(path: &Path) -> Result<Vec<Projection>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read projections {}", path.display()))?;
    parse_projections_json(&raw)
}

pub fn load_players(path: &Path) -> Result<Vec<PlayerStat>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read players {}", path.display()))?;
    parse_players_json(&raw)
}
