// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity simulation.
//!
//! The simulator estimates each player winning chances given the players hole
//! cards and the known community cards, each trial completes the board with
//! cards drawn at random from the remaining deck and resolves the showdown.
//!
//! A trial with a single winner counts as a win for that player, a trial with
//! more winners counts as a tie and each tied player gets an equal share of
//! that pot in [Equity::shares].
//!
//! The **`parallel`** feature splits the trials among the number of tasks set
//! with [SimConfig::with_tasks], each task runs on its own thread with its own
//! random generator.
use log::debug;
use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use showdown_cards::{Card, Deck};

use crate::{
    error::{EvalError, Result, check_distinct},
    eval::{HandEvaluation, best_of_subsets},
    showdown::find_winners,
};

#[cfg(feature = "parallel")]
mod parallel;

/// Default number of simulation trials.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Maximum number of players in a simulation.
pub const MAX_HANDS: usize = 10;

/// Number of community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// Simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of trials.
    pub trials: usize,
    /// Number of parallel tasks, used with the `parallel` feature.
    pub tasks: usize,
    /// Seed for reproducible simulations, the random generators are seeded
    /// from the OS if this is `None`.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            tasks: 1,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Sets the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the number of parallel tasks.
    ///
    /// Tasks are only used with the `parallel` feature, without it all the
    /// trials run on the caller thread.
    pub fn with_tasks(mut self, tasks: usize) -> Self {
        self.tasks = tasks.max(1);
        self
    }

    /// Sets the random generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates the random generator for a task.
    fn rng(&self, task_id: usize) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
            None => SmallRng::from_os_rng(),
        }
    }
}

/// Equity of two players.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadsUpEquity {
    /// Percentage of trials won by the first player.
    pub player_a: f64,
    /// Percentage of trials won by the second player.
    pub player_b: f64,
    /// Percentage of tied trials.
    pub tie: f64,
}

/// Equity of two or more players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equity {
    /// Percentage of trials won by each player.
    pub win_percentages: Vec<f64>,
    /// Percentage of tied trials.
    pub tie_percentage: f64,
    /// Percentage of the pots won by each player, counting split pots.
    pub shares: Vec<f64>,
}

/// Equity simulator.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// The simulator configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Computes the win and tie percentages of two hands.
    ///
    /// Returns an error if a hand doesn't have two cards, if there are more
    /// than five community cards, or if a card is repeated.
    pub fn win_percentages(
        &self,
        hand_a: &[Card],
        hand_b: &[Card],
        community: &[Card],
    ) -> Result<HeadsUpEquity> {
        for hand in [hand_a, hand_b] {
            if hand.len() != 2 {
                return Err(EvalError::hand_size("2", hand.len()));
            }
        }

        if community.len() > BOARD_SIZE {
            return Err(EvalError::hand_size("0 to 5", community.len()));
        }

        let equity = self.multi_player_equity(&[hand_a, hand_b], community)?;
        Ok(HeadsUpEquity {
            player_a: equity.win_percentages[0],
            player_b: equity.win_percentages[1],
            tie: equity.tie_percentage,
        })
    }

    /// Computes the equity of 2 to 10 hands.
    ///
    /// All the input is validated before running the simulation, returns an
    /// error if there are less than 2 or more than 10 hands, if a hand doesn't
    /// have two cards, if there are more than 5 community cards, if a card is
    /// repeated or the number of trials is zero.
    pub fn multi_player_equity<H: AsRef<[Card]>>(
        &self,
        hands: &[H],
        community: &[Card],
    ) -> Result<Equity> {
        let hands = validate(hands, community)?;

        if self.config.trials == 0 {
            return Err(EvalError::ZeroTrials);
        }

        if community.len() == BOARD_SIZE {
            // Every trial would give the same result.
            debug!(
                "Board complete, evaluated {} hands once for {} trials",
                hands.len(),
                self.config.trials
            );

            let mut tally = Tally::new(hands.len());
            let mut trial = Trial::new(&hands, community);
            tally.record(&trial.run(community));
            return Ok(tally.equity());
        }

        let now = Instant::now();
        let tally = self.simulate(&hands, community);

        debug!(
            "Simulated {} hands with {} community cards, {} trials in {:.3}s",
            hands.len(),
            community.len(),
            tally.trials,
            now.elapsed().as_secs_f64()
        );

        Ok(tally.equity())
    }

    fn simulate(&self, hands: &[[Card; 2]], community: &[Card]) -> Tally {
        let mut deck = Deck::default();
        hands
            .iter()
            .flatten()
            .chain(community)
            .for_each(|&c| deck.remove(c));

        #[cfg(feature = "parallel")]
        if self.config.tasks > 1 {
            return parallel::simulate(&self.config, hands, community, &deck);
        }

        #[cfg(not(feature = "parallel"))]
        if self.config.tasks > 1 {
            debug!(
                "Ignoring {} tasks, the parallel feature is disabled",
                self.config.tasks
            );
        }

        let mut rng = self.config.rng(0);
        run_trials(hands, community, deck, self.config.trials, &mut rng)
    }
}

/// Computes the win and tie percentages of two hands with [DEFAULT_TRIALS] or
/// the given number of trials.
///
/// ```
/// # use showdown_eval::*;
/// let aa = parse_cards(&["AS", "AH"]).unwrap();
/// let kk = parse_cards(&["KS", "KH"]).unwrap();
/// let eq = win_percentages(&aa, &kk, &[], 1000).unwrap();
/// assert!(eq.player_a > 75.0 && eq.player_a < 90.0);
/// ```
pub fn win_percentages(
    hand_a: &[Card],
    hand_b: &[Card],
    community: &[Card],
    trials: usize,
) -> Result<HeadsUpEquity> {
    let config = SimConfig::default().with_trials(trials);
    Simulator::new(config).win_percentages(hand_a, hand_b, community)
}

/// Computes the equity of 2 to 10 hands with the given number of trials.
pub fn multi_player_equity<H: AsRef<[Card]>>(
    hands: &[H],
    community: &[Card],
    trials: usize,
) -> Result<Equity> {
    let config = SimConfig::default().with_trials(trials);
    Simulator::new(config).multi_player_equity(hands, community)
}

/// Validates the simulation input and returns the hole cards.
fn validate<H: AsRef<[Card]>>(hands: &[H], community: &[Card]) -> Result<Vec<[Card; 2]>> {
    if hands.len() < 2 {
        return Err(EvalError::TooFewHands(hands.len()));
    }

    if hands.len() > MAX_HANDS {
        return Err(EvalError::TooManyHands(hands.len()));
    }

    let hole_cards = hands
        .iter()
        .map(|h| match h.as_ref() {
            &[c1, c2] => Ok([c1, c2]),
            h => Err(EvalError::hand_size("2", h.len())),
        })
        .collect::<Result<Vec<_>>>()?;

    if community.len() > BOARD_SIZE {
        return Err(EvalError::TooManyCommunityCards(community.len()));
    }

    check_distinct(hole_cards.iter().flatten().chain(community))?;
    Ok(hole_cards)
}

/// Runs `trials` trials drawing the missing board cards from `deck`.
fn run_trials(
    hands: &[[Card; 2]],
    community: &[Card],
    mut deck: Deck,
    trials: usize,
    rng: &mut SmallRng,
) -> Tally {
    let missing = BOARD_SIZE - community.len();
    let mut board = Vec::with_capacity(BOARD_SIZE);
    let mut trial = Trial::new(hands, community);
    let mut tally = Tally::new(hands.len());

    for _ in 0..trials {
        board.clear();
        board.extend_from_slice(community);
        board.extend_from_slice(deck.sample(rng, missing));
        tally.record(&trial.run(&board));
    }

    tally
}

/// Reusable buffers for evaluating a trial.
struct Trial<'a> {
    hands: &'a [[Card; 2]],
    cards: [Card; 7],
    evals: Vec<HandEvaluation>,
}

impl<'a> Trial<'a> {
    fn new(hands: &'a [[Card; 2]], community: &[Card]) -> Self {
        let filler = hands[0][0];
        let mut cards = [filler; 7];
        cards[2..2 + community.len()].copy_from_slice(community);

        Self {
            hands,
            cards,
            evals: Vec::with_capacity(hands.len()),
        }
    }

    /// Evaluates all the hands for a complete board and returns the winners.
    fn run(&mut self, board: &[Card]) -> Vec<usize> {
        debug_assert_eq!(board.len(), BOARD_SIZE);

        self.cards[2..].copy_from_slice(board);
        self.evals.clear();

        for hand in self.hands {
            self.cards[..2].copy_from_slice(hand);
            self.evals.push(best_of_subsets(&self.cards));
        }

        find_winners(&self.evals)
    }
}

/// Simulation counters.
#[derive(Debug, Clone, PartialEq)]
struct Tally {
    trials: u64,
    wins: Vec<u64>,
    ties: u64,
    split: Vec<f64>,
}

impl Tally {
    fn new(players: usize) -> Self {
        Self {
            trials: 0,
            wins: vec![0; players],
            ties: 0,
            split: vec![0.0; players],
        }
    }

    fn record(&mut self, winners: &[usize]) {
        self.trials += 1;

        match winners {
            [winner] => self.wins[*winner] += 1,
            _ => {
                self.ties += 1;
                let share = 1.0 / winners.len() as f64;
                winners.iter().for_each(|&w| self.split[w] += share);
            }
        }
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn merge(&mut self, other: &Tally) {
        self.trials += other.trials;
        self.ties += other.ties;
        self.wins
            .iter_mut()
            .zip(&other.wins)
            .for_each(|(w, o)| *w += o);
        self.split
            .iter_mut()
            .zip(&other.split)
            .for_each(|(s, o)| *s += o);
    }

    fn equity(&self) -> Equity {
        let trials = self.trials.max(1) as f64;
        let percent = |v: f64| round2(100.0 * v / trials);

        Equity {
            win_percentages: self.wins.iter().map(|&w| percent(w as f64)).collect(),
            tie_percentage: percent(self.ties as f64),
            shares: self
                .wins
                .iter()
                .zip(&self.split)
                .map(|(&w, &s)| percent(w as f64 + s))
                .collect(),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
