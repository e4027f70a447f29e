// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem CLI, plays a single hand between bots.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use holdem_core::{
    Action, ActionRequest, Chips, DecisionProvider, Hand, HandConfig, HandResult, LogSink,
    PlayerCards, SeatConfig,
};

mod bots;
use bots::{CallingStation, RandomBot};

static NICKNAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Mike", "Olivia",
];

/// The bot playing a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Bot {
    /// Always checks or calls.
    CallingStation,
    /// Random legal actions.
    Random,
}

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=9))]
    players: u8,
    /// The players buy-in.
    #[clap(long, short, default_value_t = 1_000)]
    stack: u32,
    /// The small blind.
    #[clap(long, default_value_t = 10)]
    small_blind: u32,
    /// The big blind.
    #[clap(long, default_value_t = 20)]
    big_blind: u32,
    /// The dealer button seat.
    #[clap(long, short, default_value_t = 0)]
    button: usize,
    /// The deck seed, random if not set.
    #[clap(long)]
    seed: Option<u64>,
    /// The bots, assigned to the seats in order and repeated.
    #[clap(long, value_enum, num_args = 1.., default_values_t = [Bot::CallingStation])]
    bot: Vec<Bot>,
}

/// Dispatches each request to the bot at the acting seat.
struct Table {
    bots: Vec<Box<dyn DecisionProvider>>,
}

impl DecisionProvider for Table {
    fn request_action(&mut self, req: &ActionRequest<'_>) -> Option<Action> {
        self.bots
            .get_mut(req.seat)
            .and_then(|bot| bot.request_action(req))
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let seats = NICKNAMES
        .iter()
        .take(cli.players as usize)
        .map(|name| SeatConfig::new(*name, Chips::new(cli.stack)))
        .collect();

    let mut config = HandConfig::new(
        seats,
        Chips::new(cli.small_blind),
        Chips::new(cli.big_blind),
    );
    config.button = cli.button;
    config.seed = cli.seed;

    let bots = cli
        .bot
        .iter()
        .cycle()
        .take(cli.players as usize)
        .enumerate()
        .map(|(seat, bot)| -> Box<dyn DecisionProvider> {
            match bot {
                Bot::CallingStation => Box::new(CallingStation),
                Bot::Random => {
                    let seed = cli.seed.unwrap_or_else(rand::random);
                    Box::new(RandomBot::new(seed.wrapping_add(seat as u64)))
                }
            }
        })
        .collect();

    let hand = Hand::new(config)?;
    let res = hand.play(Table { bots }, LogSink)?;
    print_result(&res);

    Ok(())
}

fn print_result(res: &HandResult) {
    let board = res.board.iter().map(|c| c.to_string()).collect::<Vec<_>>();
    info!("Board: {}", board.join(" "));

    for (seat, player) in res.players.iter().enumerate() {
        let cards = match player.hole_cards {
            PlayerCards::Cards(c1, c2) => format!("{c1} {c2}"),
            PlayerCards::None => String::new(),
        };

        println!(
            "{seat} {:<8} {cards:<6} {:>7} -> {:>7}",
            player.name,
            player.starting_stack().to_string(),
            player.stack.to_string()
        );
    }

    for (idx, award) in res.awards.iter().enumerate() {
        let label = if idx == 0 { "Main pot" } else { "Side pot" };
        let winners = award
            .winners
            .iter()
            .filter_map(|w| res.players.get(w.seat).map(|p| format!("{} {}", p.name, w.chips)))
            .collect::<Vec<_>>();

        match &award.hand {
            Some(hand) => println!(
                "{label} {}: {} with {}",
                award.amount,
                winners.join(", "),
                hand.category()
            ),
            None => println!("{label} {}: {}", award.amount, winners.join(", ")),
        }
    }
}
