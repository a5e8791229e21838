// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel simulation.
use log::debug;
use std::thread;

use showdown_cards::{Card, Deck};

use super::{SimConfig, Tally, run_trials};

/// Splits the trials among `config.tasks` threads and sums their tallies.
pub(super) fn simulate(
    config: &SimConfig,
    hands: &[[Card; 2]],
    community: &[Card],
    deck: &Deck,
) -> Tally {
    let num_tasks = config.tasks.min(config.trials).max(1);
    let trials_per_task = config.trials / num_tasks;
    let extra_trials = config.trials % num_tasks;

    debug!("Running {} trials on {num_tasks} tasks", config.trials);

    let tallies = thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| {
                let trials = trials_per_task + usize::from(task_id < extra_trials);
                let deck = deck.clone();
                s.spawn(move || {
                    let mut rng = config.rng(task_id);
                    run_trials(hands, community, deck, trials, &mut rng)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    let mut total = Tally::new(hands.len());
    for tally in &tallies {
        total.merge(tally);
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::Simulator;
    use showdown_cards::parse_cards;

    #[test]
    fn trials_are_split_among_tasks() {
        let cards = parse_cards(&["AS", "AH", "KS", "KH"]).unwrap();
        let hands = [[cards[0], cards[1]], [cards[2], cards[3]]];

        let mut deck = Deck::default();
        hands.iter().flatten().for_each(|&c| deck.remove(c));

        let config = SimConfig::default()
            .with_trials(1_003)
            .with_tasks(4)
            .with_seed(11);
        let tally = simulate(&config, &hands, &[], &deck);
        assert_eq!(tally.trials, 1_003);
        assert_eq!(tally.wins.iter().sum::<u64>() + tally.ties, 1_003);

        // More tasks than trials.
        let config = config.with_trials(3).with_tasks(8);
        assert_eq!(simulate(&config, &hands, &[], &deck).trials, 3);
    }

    #[test]
    fn parallel_equity() {
        let aa = parse_cards(&["AS", "AH"]).unwrap();
        let kk = parse_cards(&["KS", "KH"]).unwrap();

        let config = SimConfig::default()
            .with_trials(20_000)
            .with_tasks(4)
            .with_seed(5);
        let sim = Simulator::new(config);

        let eq = sim.win_percentages(&aa, &kk, &[]).unwrap();
        assert!(eq.player_a > 79.0 && eq.player_a < 85.0, "{eq:?}");
        assert_eq!(eq, sim.win_percentages(&aa, &kk, &[]).unwrap());
    }
}
