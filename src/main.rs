use std::io;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prop_engine::board::{BoardMode, PropBoard, VendorFeed};
use prop_engine::config::BoardConfig;
use prop_engine::ingest;
use prop_engine::slip::PickSlip;
use prop_engine::state::Prop;
use prop_engine::tiers::PropSignals;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cfg = BoardConfig::from_env()?;
    let players = ingest::load_players(&cfg.players_path)?;
    let feed = match &cfg.projections_path {
        Some(path) => VendorFeed::connected(ingest::load_projections(path)?),
        None => VendorFeed::disconnected(),
    };

    let board = match cfg.seed {
        Some(seed) => PropBoard::refresh(
            &feed,
            &players,
            &cfg.sport,
            cfg.player_cap,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => PropBoard::refresh(
            &feed,
            &players,
            &cfg.sport,
            cfg.player_cap,
            &mut rand::thread_rng(),
        ),
    };

    let mode = match board.mode {
        BoardMode::Vendor => "vendor feed",
        BoardMode::PlayerDerived => "player data",
    };
    println!("{} props from {mode}", board.props.len());
    for prop in board.top(cfg.top) {
        println!("{}", board_row(prop));
    }

    let mut slip = PickSlip::new();
    for prop in board.top(3) {
        let (side, _) = prop.best_side();
        board
            .pick(&mut slip, &prop.id, side)
            .context("build sample slip")?;
    }

    let v = slip
        .valuation(cfg.entry_amount, board.premium_connected)
        .context("value sample slip")?;
    println!();
    println!(
        "Slip: {} picks  {:.2}x  payout ${:.2}  avg conf {:.1}%  EV {:+.1}%",
        v.count, v.multiplier, v.payout, v.average_confidence, v.total_expected_value
    );
    println!(
        "Sources: vendor {}  enhanced {}  simulation {}",
        v.sources.vendor, v.sources.enhanced, v.sources.simulation
    );

    match slip.submit(cfg.entry_amount, board.premium_connected) {
        Ok(submission) => {
            println!();
            println!("{submission}");
        }
        Err(err) => info!("lineup not submitted: {err}"),
    }

    Ok(())
}

fn board_row(prop: &Prop) -> String {
    let signals = PropSignals::of(prop);
    format!(
        "{:<22} {:<6} {:<20} {:>7.1}  O {:>5.1}%  U {:>5.1}%  EV {:>+6.1}%  form {:?}  value {:?}",
        prop.player_name,
        prop.sport.label(),
        prop.stat_type,
        prop.line,
        prop.over_confidence,
        prop.under_confidence,
        prop.expected_value,
        signals.form,
        signals.value,
    )
}
