//! `fl-driver` — the live-demo simulation driver.
//!
//! # Tick loop
//!
//! ```text
//! while running, every TICK_PERIOD ticks:
//!   ① Target   — choose a delivery destination if none is selected yet.
//!   ② Advance  — step_index + 1; never past the final step.
//!   ③ Transit  — in the transit phase, add the progress increment (clamped
//!                to 100) and report the interpolated marker position.
//!   ④ Ledger   — at the ledger step, generate the transaction ID (once).
//!   ⑤ Deliver  — at the final step, deplete inventory (floored at 0),
//!                then freeze: run state → Completed, timer cancelled.
//! ```
//!
//! # Cancellation model
//!
//! The driver owns its [`TickTimer`] exclusively.  `pause()` and `reset()`
//! invalidate the timer's epoch as well as clearing its deadline, so a fire
//! token issued before the cancellation is rejected on delivery — a stale
//! callback can never mutate state the driver has already moved past.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fl_core::Tick;
//! use fl_driver::{LiveDemo, NoopObserver};
//!
//! let mut demo = LiveDemo::standard(42)?;
//! demo.start(Tick::ZERO);
//! demo.run_to_completion(Tick::ZERO, &mut NoopObserver);
//! ```

pub mod driver;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod state;
pub mod timer;


pub use driver::LiveDemo;
pub use error::{DriverError, DriverResult};
pub use ledger::TransactionId;
pub use observer::{DemoObserver, NoopObserver};
pub use state::{DemoState, RunState};
pub use timer::{TickTimer, TimerFire, TICK_PERIOD};
