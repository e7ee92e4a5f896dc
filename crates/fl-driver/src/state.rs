//! The driver's owned, transient run state.

use fl_core::DestinationId;
use fl_script::InventoryProfile;

use crate::TransactionId;

// ── RunState ──────────────────────────────────────────────────────────────────

/// Top-level lifecycle mode of the demo.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RunState {
    /// Not advancing — either never started or paused mid-run.
    #[default]
    Idle,
    /// Advancing one step per timer period.
    Running,
    /// Reached the final step; frozen until restarted.
    Completed,
}

// ── DemoState ─────────────────────────────────────────────────────────────────

/// Everything a rendering layer needs to draw the demo, owned by the driver
/// and handed out by reference.
///
/// Entirely transient: never persisted, mutated only by the driver's own tick
/// handler and by explicit user actions (start, pause, reset).
#[derive(Clone, Debug)]
pub struct DemoState {
    /// Lifecycle mode.
    pub run_state: RunState,

    /// Ordinal of the currently active step.  Never exceeds the script's
    /// final ordinal.
    pub step_index: usize,

    /// The delivery target for this run.  Chosen once, on the first tick,
    /// and fixed until reset.
    pub selected_target: Option<DestinationId>,

    /// Progress through the transit phase, percent.  Monotonic
    /// non-decreasing while running; clamped to `[0, 100]`.
    pub transit_progress: f64,

    /// Mock ledger reference, generated exactly once per run at the ledger
    /// step.
    pub transaction_id: Option<TransactionId>,

    /// Live stock levels, percent, parallel to the inventory profile's item
    /// order.  Depleted on delivery, floored at 0.
    pub inventory_levels: Vec<u8>,
}

impl DemoState {
    /// The state a fresh driver starts in, and the state `reset()` restores:
    /// idle at step 0 with nothing selected, nothing generated, and inventory
    /// at the configured baseline.
    pub fn initial(profile: &InventoryProfile) -> Self {
        Self {
            run_state: RunState::Idle,
            step_index: 0,
            selected_target: None,
            transit_progress: 0.0,
            transaction_id: None,
            inventory_levels: profile.baseline_levels(),
        }
    }

    /// Transit progress as a fraction in `[0, 1]` — the interpolation input.
    #[inline]
    pub fn transit_fraction(&self) -> f64 {
        self.transit_progress / 100.0
    }
}
