//! Demo observer trait for rendering layers and logging.

use fl_core::{DestinationId, GeoPoint, Tick};
use fl_script::{DemoStep, Destination};

use crate::TransactionId;

/// Callbacks invoked by the driver as a tick's side effects become visible.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Everything passed here is pure output
/// for display; nothing an observer does feeds back into the driver's
/// decisions.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl DemoObserver for StepPrinter {
///     fn on_step(&mut self, tick: Tick, ordinal: usize, step: &DemoStep) {
///         println!("{tick}: [{ordinal}] {}", step.label);
///     }
/// }
/// ```
pub trait DemoObserver {
    /// A delivery target was selected for this run (first tick only).
    fn on_target_selected(&mut self, _id: DestinationId, _destination: &Destination) {}

    /// The driver advanced to a new step.
    fn on_step(&mut self, _tick: Tick, _ordinal: usize, _step: &DemoStep) {}

    /// The marker moved.  `progress_pct` is the clamped transit progress in
    /// `[0, 100]`; `position` is the interpolated point for it.
    fn on_marker(&mut self, _position: GeoPoint, _progress_pct: f64) {}

    /// The mock transaction identifier was generated (once per run).
    fn on_transaction(&mut self, _tx: &TransactionId) {}

    /// The run reached the final step and froze.
    fn on_completed(&mut self, _tick: Tick) {}
}

/// A [`DemoObserver`] that does nothing.  Use when pumping the driver
/// without a rendering layer attached.
pub struct NoopObserver;

impl DemoObserver for NoopObserver {}
