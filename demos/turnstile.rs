//! Coin-Operated Turnstile
//!
//! This demo drives the classic two-state turnstile from a scripted
//! sequence of button presses.
//!
//! Key concepts:
//! - A static table declared once and shared by value
//! - The single-client form: guards read the panel, actions update it
//! - Structured trace output through `tracing`
//!
//! Run with: RUST_LOG=debug cargo run --example turnstile

use statetable::{state_ids, MachineBuilder, MachineConfig, State, Transition};
use std::num::NonZeroUsize;
use tracing_subscriber::EnvFilter;

state_ids! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

#[derive(Default)]
struct Panel {
    coin_entered: bool,
    pushed: bool,
    label: &'static str,
}

fn turnstile_states() -> Vec<State<Turnstile, Panel, Panel>> {
    vec![
        State::new(
            Turnstile::Locked,
            vec![
                Transition::new(
                    |p: &Panel| p.coin_entered,
                    |p: &mut Panel| {
                        p.label = "Unlocked";
                        p.coin_entered = false;
                    },
                    Turnstile::Unlocked,
                ),
                Transition::new(
                    |p: &Panel| p.pushed,
                    |p: &mut Panel| p.pushed = false,
                    Turnstile::Locked,
                ),
            ],
        ),
        State::new(
            Turnstile::Unlocked,
            vec![
                Transition::new(
                    |p: &Panel| p.pushed,
                    |p: &mut Panel| {
                        p.label = "Locked";
                        p.pushed = false;
                    },
                    Turnstile::Locked,
                ),
                Transition::new(
                    |p: &Panel| p.coin_entered,
                    |p: &mut Panel| p.coin_entered = false,
                    Turnstile::Unlocked,
                ),
            ],
        ),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile State Machine ===\n");

    // Every press should settle within two steps: one move, one check.
    let config = MachineConfig::new().max_steps(NonZeroUsize::new(2).unwrap());
    let mut machine = MachineBuilder::new()
        .initial(Turnstile::Locked)
        .states(turnstile_states())
        .config(config)
        .build()
        .unwrap();

    let mut panel = Panel {
        label: "Locked",
        ..Panel::default()
    };

    for press in ["coin", "push", "push", "coin", "coin", "push"] {
        match press {
            "coin" => panel.coin_entered = true,
            _ => panel.pushed = true,
        }

        match machine.settle_client(&mut panel) {
            Ok(outcome) if outcome.is_stable() => {
                println!("{press:>5} -> {:<8} ({} step(s))", panel.label, outcome.steps());
            }
            Ok(outcome) => {
                let steps = outcome.steps();
                println!("{press:>5} -> State Machine fault! unstable after {steps} step(s)");
            }
            Err(fault) => println!("{press:>5} -> State Machine fault! {fault}"),
        }
    }

    println!("\nFinal state: {}", machine.current_state());
    println!("\n=== Demo Complete ===");
}
