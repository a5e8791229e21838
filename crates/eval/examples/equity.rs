// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example equity -- --tasks 4 AsAh KsKh 7c8c --board 2c9cKd
// ```
use anyhow::{Result, bail};
use clap::Parser;
use log::{info, warn};
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The players hole cards, i.e. AsKd.
    #[clap(required = true, num_args = 2..=10)]
    hands: Vec<String>,
    /// The community cards, i.e. 2c9cKd.
    #[clap(long, short, default_value = "")]
    board: String,
    /// Number of trials.
    #[clap(long, short, default_value_t = DEFAULT_TRIALS)]
    trials: usize,
    /// Number of parallel tasks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for a reproducible simulation.
    #[clap(long)]
    seed: Option<u64>,
}

/// Parses cards written without separators, i.e. "AsKd".
fn parse_packed(s: &str) -> Result<Vec<Card>> {
    let chars = s.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
    if chars.len() % 2 != 0 {
        bail!("Invalid cards {s:?}");
    }

    let cards = chars
        .chunks(2)
        .map(|c| c.iter().collect::<String>().parse::<Card>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(cards)
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let hands = cli
        .hands
        .iter()
        .map(|h| parse_packed(h))
        .collect::<Result<Vec<_>>>()?;
    let board = parse_packed(&cli.board)?;

    let mut config = SimConfig::default()
        .with_trials(cli.trials)
        .with_tasks(cli.tasks as usize);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let simulator = Simulator::new(config);
    info!(
        "Simulating {} hands, board [{}], {} trials",
        hands.len(),
        board.iter().map(Card::to_string).collect::<Vec<_>>().join(" "),
        simulator.config().trials
    );

    if cfg!(not(feature = "parallel")) && simulator.config().tasks > 1 {
        warn!("Running on one thread, build with --features=parallel to use tasks");
    }

    let now = Instant::now();
    let equity = simulator.multi_player_equity(&hands, &board)?;
    let elapsed = now.elapsed().as_secs_f64();

    for (idx, hand) in hands.iter().enumerate() {
        let strength = best_partial_hand(&[hand.as_slice(), board.as_slice()].concat())?;
        println!(
            "{}{}  win {:>6.2}%  equity {:>6.2}%  {}",
            hand[0], hand[1], equity.win_percentages[idx], equity.shares[idx], strength
        );
    }

    println!("Tie  {:>6.2}%", equity.tie_percentage);
    println!("Elapsed:  {elapsed:.3}s");

    Ok(())
}
