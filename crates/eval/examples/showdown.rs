// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --example showdown -- --board "AS 9D 7H 2C 3D" --pot 101 "JH JC" "JS JD" "KH 4C"
// ```
use anyhow::Result;
use clap::Parser;
use log::info;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The five community cards.
    #[clap(long, short)]
    board: String,
    /// The players hole cards, i.e. "AS KD".
    #[clap(required = true)]
    hands: Vec<String>,
    /// Pot amount to split among the winners.
    #[clap(long, short, default_value_t = 100)]
    pot: u64,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let board = parse_cards_str(&cli.board)?;
    let hands = cli
        .hands
        .iter()
        .map(|h| -> Result<Vec<Card>> { Ok([parse_cards_str(h)?, board.clone()].concat()) })
        .collect::<Result<Vec<_>>>()?;

    let showdown = resolve_showdown(&hands)?;
    info!("Winners {:?}", showdown.winners);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&showdown)?);
        return Ok(());
    }

    for (idx, eval) in showdown.evaluations.iter().enumerate() {
        let cards = eval
            .best_hand
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("Player {idx}: {cards}  {eval}");
    }

    for (idx, chips) in showdown.split_pot(cli.pot) {
        println!("Player {idx} wins {chips}");
    }

    Ok(())
}
