//! walkthrough — headless run of the fieldlink live delivery demo.
//!
//! Runs the standard six-step walkthrough end to end, logging every step,
//! the selected destination, the mock ledger record, and each marker update,
//! then prints a summary of the frozen end state.  Pass a seed as the first
//! argument to make the run reproducible (default: 42).
//!
//! ```text
//! RUST_LOG=info cargo run -p walkthrough -- 42
//! ```

use std::time::Duration;

use anyhow::Result;

use fl_core::{DestinationId, GeoPoint, Tick};
use fl_driver::{DemoObserver, LiveDemo, RunState, TransactionId};
use fl_script::{DemoStep, Destination};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SEED: u64 = 42;
/// Real time per demo tick — slow enough to watch the log scroll.
const TICK_SLEEP_MS: u64 = 250;

// ── Logging observer ──────────────────────────────────────────────────────────

struct LogObserver;

impl DemoObserver for LogObserver {
    fn on_target_selected(&mut self, id: DestinationId, destination: &Destination) {
        log::info!(
            "target selected: {} ({}) — {:.1} km by {}",
            destination.name,
            id,
            destination.distance_km,
            destination.mode
        );
    }

    fn on_step(&mut self, tick: Tick, ordinal: usize, step: &DemoStep) {
        log::info!("{tick}: [{ordinal}] {}", step.label);
    }

    fn on_marker(&mut self, position: GeoPoint, progress_pct: f64) {
        log::info!("marker at {position} ({progress_pct:.1} %)");
    }

    fn on_transaction(&mut self, tx: &TransactionId) {
        log::info!("ledger record {tx}");
    }

    fn on_completed(&mut self, tick: Tick) {
        log::info!("{tick}: delivery complete");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => DEFAULT_SEED,
    };

    println!("=== walkthrough — fieldlink live delivery demo ===");
    println!("Seed: {seed}  |  Timer period: {} ticks", fl_driver::TICK_PERIOD);
    println!();

    // 1. Assemble the standard demo.
    let mut demo = LiveDemo::standard(seed)?;
    println!(
        "Script: {} steps  |  Candidates: {}  |  Inventory items: {}",
        demo.script.len(),
        demo.catalog.len(),
        demo.inventory.len()
    );
    println!();

    // 2. Pump the timer in real time until the run freezes.
    let mut obs = LogObserver;
    let mut now = Tick::ZERO;
    demo.start(now);
    while demo.state.run_state == RunState::Running {
        std::thread::sleep(Duration::from_millis(TICK_SLEEP_MS));
        now = now + 1;
        demo.advance(now, &mut obs);
    }

    // 3. End-state summary.
    println!();
    println!("Run frozen at {} ({})", now, demo.control_label());
    if let Some(dest) = demo.selected_destination() {
        println!("Delivered to : {} ({:.1} km, {})", dest.name, dest.distance_km, dest.mode);
    }
    println!("Marker       : {}", demo.marker_position());
    if let Some(tx) = &demo.state.transaction_id {
        println!("Ledger record: {tx}");
    }
    println!();

    // 4. Inventory after the delivery.
    println!("{:<20} {:>8} {:>8}", "Item", "Before", "After");
    println!("{}", "-".repeat(38));
    for (item, level) in demo.inventory.items().iter().zip(&demo.state.inventory_levels) {
        println!("{:<20} {:>7}% {:>7}%", item.name, item.baseline_pct, level);
    }

    Ok(())
}
