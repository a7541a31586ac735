//! Coin Walk
//!
//! This example demonstrates a walker on a short track whose steps are
//! decided by a biased coin.
//!
//! Key concepts:
//! - Building a PDFA with a real environment alphabet
//! - Querying the transition algebra (transition_probs, support, prob)
//! - Lifting and randomizing deterministic automata
//! - Seeded, step-at-a-time simulation with a recorded trace
//!
//! Run with: RUST_LOG=debug cargo run --example coin_walk

use probabilistic_automata::dist::EnvDist;
use probabilistic_automata::{lift, randomize, Alphabet, DfaBuilder, PdfaBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Coin {
    Heads,
    Tails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Push {
    Gentle,
    Hard,
}

const GOAL: i8 = 4;

fn main() {
    env_logger::init();

    println!("=== Coin Walk ===\n");

    // The walker moves right on heads and left on tails. A hard push makes
    // heads more likely; tails at the wall does nothing.
    let walker = PdfaBuilder::new()
        .start(0i8)
        .inputs([Push::Gentle, Push::Hard].into_iter().collect())
        .env_inputs([Coin::Heads, Coin::Tails].into_iter().collect())
        .outputs(Alphabet::boolean())
        .label(|pos: &i8| *pos == GOAL)
        .transition(|pos: &i8, (_, coin): &(Push, Coin)| match coin {
            Coin::Heads => (pos + 1).min(GOAL),
            Coin::Tails => (pos - 1).max(0),
        })
        .env_dist(EnvDist::new(|_: &i8, push: &Push| match push {
            Push::Gentle => vec![(Coin::Heads, 0.5), (Coin::Tails, 0.5)],
            Push::Hard => vec![(Coin::Heads, 0.8), (Coin::Tails, 0.2)],
        }))
        .build()
        .expect("walker is fully specified");

    println!("Reachable positions:");
    match walker.states() {
        Ok(states) => println!("  {:?}", states),
        Err(err) => println!("  {}", err),
    }

    println!("\nSuccessors of position 2:");
    for push in [Push::Gentle, Push::Hard] {
        println!("  {:?}: {:?}", push, walker.transition_probs(&2, &push));
    }
    println!(
        "  P(0 -> 0 | Hard) = {:.2}",
        walker.prob(&0, &0, &Push::Hard)
    );
    println!("  support(0, Gentle) = {:?}", walker.support(&0, &Push::Gentle));

    println!("\nSimulating with seed 7:");
    let mut sim = walker.run(None, Some(7)).with_trace();
    while !walker.label(sim.current()) && sim.trace().len() < 50 {
        let push = if *sim.current() < 2 {
            Push::Hard
        } else {
            Push::Gentle
        };
        match sim.advance(push) {
            Ok(pos) => println!("  {:?} -> {}", push, pos),
            Err(err) => {
                println!("  simulation stopped: {}", err);
                break;
            }
        }
    }
    println!("  coin flips: {:?}", sim.trace().env_actions());
    println!("  reached goal after {} steps", sim.trace().len());

    // The same track as a deterministic automaton over coin faces.
    let track = DfaBuilder::new()
        .start(0i8)
        .inputs([Coin::Heads, Coin::Tails].into_iter().collect())
        .outputs(Alphabet::boolean())
        .label(|pos: &i8| *pos == GOAL)
        .transition(|pos: &i8, coin: &Coin| match coin {
            Coin::Heads => (pos + 1).min(GOAL),
            Coin::Tails => (pos - 1).max(0),
        })
        .build()
        .expect("track is fully specified");

    println!("\nLifted track (caller chooses the coin):");
    let lifted = lift(&track);
    println!("  from 3 on Heads: {:?}", lifted.transition_probs(&3, &Coin::Heads));

    println!("\nRandomized track (fair coin):");
    match randomize(&track) {
        Ok(fair) => println!("  from 3: {:?}", fair.transition_probs(&3, &())),
        Err(err) => println!("  cannot randomize: {}", err),
    }
}
