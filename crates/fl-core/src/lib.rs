//! `fl-core` — foundational types for the `fieldlink` demo engine.
//!
//! This crate is a dependency of every other `fl-*` crate.  It intentionally
//! has no `fl-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                          |
//! |----------|---------------------------------------------------|
//! | [`geo`]  | `GeoPoint`, linear interpolation, haversine       |
//! | [`ids`]  | `StepId`, `DestinationId`                         |
//! | [`rng`]  | `DemoRng` (injectable, seedable random source)    |
//! | [`tick`] | `Tick` demo time unit                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{DestinationId, StepId};
pub use rng::DemoRng;
pub use tick::Tick;
