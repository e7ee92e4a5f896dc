//! `fl-script` — read-only reference data for the fieldlink demo engine.
//!
//! Everything in this crate is fixed for the lifetime of a demo run: the
//! ordered step script the driver walks through, the candidate destination
//! catalog it picks a delivery target from, and the inventory profile it
//! depletes on completed deliveries.  All invariants the driver relies on
//! (a transit phase spanning at least one step, a non-empty candidate set,
//! baseline percentages within range) are enforced at construction, so the
//! driver itself never has to handle a malformed configuration at runtime.
//!
//! # What lives here
//!
//! | Module          | Contents                                          |
//! |-----------------|---------------------------------------------------|
//! | [`step`]        | `DemoStep`, `StepKind`, `StepScript`              |
//! | [`destination`] | `Destination`, `DeliveryMode`, `DestinationCatalog` |
//! | [`inventory`]   | `InventoryItem`, `InventoryProfile`               |
//! | [`loader`]      | CSV destination-catalog loader                    |
//! | [`error`]       | `ScriptError`, `ScriptResult`                     |

pub mod destination;
pub mod error;
pub mod inventory;
pub mod loader;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use destination::{DeliveryMode, Destination, DestinationCatalog};
pub use error::{ScriptError, ScriptResult};
pub use inventory::{InventoryItem, InventoryProfile};
pub use loader::{load_catalog_csv, load_catalog_reader};
pub use step::{DemoStep, StepKind, StepScript};
