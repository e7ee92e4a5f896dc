//! The `LiveDemo` driver and its tick handler.

use fl_core::{DemoRng, GeoPoint, Tick};
use fl_script::{Destination, DestinationCatalog, InventoryProfile, StepScript};

use crate::state::{DemoState, RunState};
use crate::timer::{TickTimer, TimerFire, TICK_PERIOD};
use crate::{DemoObserver, DriverError, DriverResult, TransactionId};

/// The live-demo simulation driver.
///
/// Owns the walkthrough script, the destination catalog, the inventory
/// profile, the injected RNG, the cancellable tick timer, and all mutable
/// run state.  Rendering layers read [`state`][Self::state] and
/// [`marker_position`][Self::marker_position]; control surfaces call
/// [`toggle`][Self::toggle] and [`reset`][Self::reset].
///
/// None of the control operations can fail: invalid transitions (starting
/// while running, pausing while idle, ticking while not running) are no-ops
/// by contract, not errors.
pub struct LiveDemo {
    /// The ordered, validated step sequence.
    pub script: StepScript,

    /// Candidate destinations sharing one origin hub.
    pub catalog: DestinationCatalog,

    /// Configured inventory baseline and per-delivery depletion.
    pub inventory: InventoryProfile,

    /// All mutable run state, restored to `DemoState::initial` on reset.
    pub state: DemoState,

    /// Injected random source for target selection and transaction IDs.
    pub rng: DemoRng,

    /// The driver's exclusively owned timer; replaced, never shared, on
    /// each start/pause/reset.
    pub timer: TickTimer,
}

impl LiveDemo {
    // ── Construction ──────────────────────────────────────────────────────

    /// Assemble a driver from already-validated components.
    ///
    /// The script, catalog, and profile constructors enforce every
    /// configuration invariant the tick handler relies on, so assembly
    /// itself cannot fail.
    pub fn new(
        script: StepScript,
        catalog: DestinationCatalog,
        inventory: InventoryProfile,
        rng: DemoRng,
    ) -> Self {
        let state = DemoState::initial(&inventory);
        Self {
            script,
            catalog,
            inventory,
            state,
            rng,
            timer: TickTimer::new(TICK_PERIOD),
        }
    }

    /// The standard walkthrough: six steps, four destinations, four
    /// inventory items, deterministic under `seed`.
    pub fn standard(seed: u64) -> DriverResult<Self> {
        Ok(Self::new(
            StepScript::standard()?,
            DestinationCatalog::standard()?,
            InventoryProfile::standard()?,
            DemoRng::new(seed),
        ))
    }

    /// Replace the timer period (ticks between steps).
    ///
    /// # Errors
    ///
    /// `DriverError::Config` if `period` is zero — a zero period would fire
    /// on every poll.
    pub fn with_period(mut self, period: u64) -> DriverResult<Self> {
        if period == 0 {
            return Err(DriverError::Config("timer period must be at least 1 tick".into()));
        }
        self.timer = TickTimer::new(period);
        Ok(self)
    }

    // ── Read-only views ───────────────────────────────────────────────────

    /// The destination selected for this run, if the first tick has fired.
    pub fn selected_destination(&self) -> Option<&Destination> {
        self.state.selected_target.map(|id| self.catalog.get(id))
    }

    /// The marker's current map position: the origin hub until a target is
    /// selected, then the point `transit_progress` percent of the way along
    /// the straight line to the target.
    ///
    /// Pure output for display; never fed back into the tick logic.
    pub fn marker_position(&self) -> GeoPoint {
        match self.state.selected_target {
            None => self.catalog.origin(),
            Some(id) => self
                .catalog
                .origin()
                .lerp(self.catalog.get(id).target, self.state.transit_fraction()),
        }
    }

    /// Label for the single exposed control button.
    pub fn control_label(&self) -> &'static str {
        match (self.state.run_state, self.state.step_index) {
            (RunState::Running, _) => "Pause",
            (RunState::Completed, _) => "Restart",
            (RunState::Idle, 0) => "Start",
            (RunState::Idle, _) => "Resume",
        }
    }

    // ── Controls ──────────────────────────────────────────────────────────

    /// Begin (or resume) the run.
    ///
    /// From `Completed`, performs a full [`reset`][Self::reset] first and
    /// starts a fresh run; from `Idle`, resumes at the current step.
    /// A no-op if already running.
    pub fn start(&mut self, now: Tick) {
        match self.state.run_state {
            RunState::Running => {}
            RunState::Completed => {
                self.reset();
                self.begin(now);
            }
            RunState::Idle => self.begin(now),
        }
    }

    /// Pause a running demo.  The pending timer deadline is cancelled
    /// immediately — no further tick can fire until the next start.
    pub fn pause(&mut self) {
        if self.state.run_state == RunState::Running {
            self.state.run_state = RunState::Idle;
            self.timer.cancel();
        }
    }

    /// The single exposed control: restart if completed, otherwise flip
    /// between running and paused.
    pub fn toggle(&mut self, now: Tick) {
        match self.state.run_state {
            RunState::Running => self.pause(),
            RunState::Idle | RunState::Completed => self.start(now),
        }
    }

    /// Return to the initial state: step 0, idle, no target, no transaction,
    /// inventory at baseline.  Cancels any pending timer.
    ///
    /// Also serves the "select a different target" control — the next run
    /// picks a fresh destination on its first tick.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.state = DemoState::initial(&self.inventory);
    }

    // ── Timer pump ────────────────────────────────────────────────────────

    /// Pump the timer at `now`: if the deadline has elapsed, deliver the
    /// fire and execute one tick.  Call once per tick of external time.
    pub fn advance<O: DemoObserver>(&mut self, now: Tick, observer: &mut O) {
        if let Some(fire) = self.timer.poll(now) {
            self.deliver(fire, now, observer);
        }
    }

    /// Deliver a timer fire.
    ///
    /// Validity is checked at delivery time, not schedule time: a token
    /// issued before a pause/reset/re-arm carries a stale epoch and is
    /// dropped here, as is any fire arriving while not running.
    pub fn deliver<O: DemoObserver>(&mut self, fire: TimerFire, now: Tick, observer: &mut O) {
        if !self.timer.accepts(fire) {
            return;
        }
        if self.state.run_state != RunState::Running {
            return;
        }
        self.tick(now, observer);
        if self.state.run_state == RunState::Running {
            self.timer.arm(now);
        }
    }

    /// Drive the demo to completion from `now`, advancing external time one
    /// tick at a time.  Returns the tick at which the run froze.
    ///
    /// Convenience for headless runs and tests; interactive callers pump
    /// [`advance`][Self::advance] from their own loop instead.
    pub fn run_to_completion<O: DemoObserver>(&mut self, now: Tick, observer: &mut O) -> Tick {
        let mut now = now;
        self.start(now);
        while self.state.run_state == RunState::Running {
            now = now + 1;
            self.advance(now, observer);
        }
        now
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn begin(&mut self, now: Tick) {
        self.state.run_state = RunState::Running;
        self.timer.arm(now);
    }

    /// One step of the walkthrough.  Only ever reached through
    /// [`deliver`][Self::deliver], which has already established that the
    /// fire is current and the demo is running.
    fn tick<O: DemoObserver>(&mut self, now: Tick, observer: &mut O) {
        // ── Phase 1: target selection ─────────────────────────────────────
        //
        // Chosen uniformly on the first tick of a run and fixed until reset.
        if self.state.selected_target.is_none() {
            let id = self.catalog.choose(&mut self.rng);
            self.state.selected_target = Some(id);
            observer.on_target_selected(id, self.catalog.get(id));
        }

        // ── Phase 2: step advance ─────────────────────────────────────────
        //
        // Never advance past the final step: an increment that would
        // overflow is discarded and the run freezes.
        let next = self.state.step_index + 1;
        if next >= self.script.len() {
            self.complete(now, observer);
            return;
        }
        self.state.step_index = next;
        if let Some(step) = self.script.get(next) {
            observer.on_step(now, next, step);
        }

        // ── Phase 3: transit progress + marker ────────────────────────────
        if self.script.in_transit_phase(next) && self.state.selected_target.is_some() {
            self.state.transit_progress =
                (self.state.transit_progress + self.script.progress_increment()).min(100.0);
            observer.on_marker(self.marker_position(), self.state.transit_progress);
        }

        // ── Phase 4: ledger record ────────────────────────────────────────
        if next == self.script.ledger_ordinal() && self.state.transaction_id.is_none() {
            let tx = TransactionId::generate(&mut self.rng);
            observer.on_transaction(&tx);
            self.state.transaction_id = Some(tx);
        }

        // ── Phase 5: delivery + completion freeze ─────────────────────────
        if next == self.script.final_ordinal() {
            self.deplete_inventory();
            self.complete(now, observer);
        }
    }

    fn complete<O: DemoObserver>(&mut self, now: Tick, observer: &mut O) {
        self.state.run_state = RunState::Completed;
        self.timer.cancel();
        observer.on_completed(now);
    }

    fn deplete_inventory(&mut self) {
        for (level, item) in self
            .state
            .inventory_levels
            .iter_mut()
            .zip(self.inventory.items())
        {
            *level = level.saturating_sub(item.depletion_pct);
        }
    }
}
