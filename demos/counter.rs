//! Counter History
//!
//! This example drives a shared counter through a bounded undo/redo history.
//!
//! Key concepts:
//! - Commands close over the value they edit
//! - Every transition returns a new history, the old one stays valid
//! - The depth bound evicts the oldest entries
//!
//! Run with: cargo run --example counter

use lithe_undo::{reversible, Command, HistoryOptions, HistoryState};
use std::cell::Cell;
use std::rc::Rc;

fn add(counter: &Rc<Cell<i32>>, delta: i32) -> Command<i32> {
    let (up, down) = (Rc::clone(counter), Rc::clone(counter));
    reversible(
        format!("add {delta}"),
        move || {
            up.set(up.get() + delta);
            up.get()
        },
        move || {
            down.set(down.get() - delta);
            down.get()
        },
    )
}

fn describe(label: &str, history: &HistoryState<i32>) {
    println!(
        "{label:<24} current={:<4} undo={:?} redo={:?}",
        history.current(),
        history.undo_stack().names(),
        history.redo_stack().names(),
    );
}

fn main() {
    println!("=== Counter History Example ===\n");

    let counter = Rc::new(Cell::new(0));
    let mut history = HistoryState::with_options(0, HistoryOptions::with_max_depth(3));
    describe("start", &history);

    for delta in [1, 2, 3, 4] {
        history = history.execute(add(&counter, delta)).unwrap();
        describe(&format!("execute add {delta}"), &history);
    }

    let before_undo = history.clone();
    for _ in 0..2 {
        history = history.undo().unwrap();
        describe("undo", &history);
    }

    history = history.redo().unwrap();
    describe("redo", &history);

    println!(
        "\nEarlier snapshot is untouched: current={}",
        before_undo.current()
    );

    history = history.clear();
    describe("clear", &history);

    println!("\n=== Example Complete ===");
}
