//! Delivery destinations: `DeliveryMode`, `Destination`, `DestinationCatalog`.
//!
//! All destinations in a catalog share one origin coordinate (the hub the
//! simulated vehicle departs from).  Per-destination display distances are
//! derived from that origin via haversine at construction rather than trusted
//! from input data.

use fl_core::{DemoRng, DestinationId, GeoPoint};

// ── DeliveryMode ──────────────────────────────────────────────────────────────

/// The vehicle class assigned to a destination.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeliveryMode {
    /// Autonomous drone — the default for remote drop points.
    #[default]
    Drone,
    /// Mobile retail van for road-served stops.
    Van,
}

impl DeliveryMode {
    /// Human-readable label, useful for logs and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryMode::Drone => "drone",
            DeliveryMode::Van => "van",
        }
    }
}

impl std::fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Destination ───────────────────────────────────────────────────────────────

/// One candidate delivery endpoint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    /// Display name of the drop point.
    pub name: String,

    /// Target coordinate the marker is interpolated towards.
    pub target: GeoPoint,

    /// Great-circle distance from the catalog origin, kilometres.
    /// Derived at catalog construction.
    pub distance_km: f64,

    /// Vehicle class used for this stop.
    pub mode: DeliveryMode,
}

// ── DestinationCatalog ────────────────────────────────────────────────────────

/// The fixed candidate set a demo run selects its target from.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestinationCatalog {
    origin: GeoPoint,
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Build a catalog from `(name, target, mode)` candidates, deriving each
    /// destination's display distance from `origin`.
    ///
    /// # Errors
    ///
    /// `ScriptError::Config` if the candidate set is empty — the driver's
    /// uniform selection has no meaning over zero candidates.
    pub fn new(
        origin: GeoPoint,
        candidates: Vec<(String, GeoPoint, DeliveryMode)>,
    ) -> crate::ScriptResult<Self> {
        if candidates.is_empty() {
            return Err(crate::ScriptError::Config(
                "destination catalog has no candidates".into(),
            ));
        }
        let destinations = candidates
            .into_iter()
            .map(|(name, target, mode)| Destination {
                name,
                distance_km: origin.distance_km(target),
                target,
                mode,
            })
            .collect();
        Ok(Self { origin, destinations })
    }

    /// The standard four-stop rural catalog around the Helena hub.
    pub fn standard() -> crate::ScriptResult<Self> {
        let origin = GeoPoint::new(46.5891, -112.0391);
        Self::new(
            origin,
            vec![
                ("Wolf Creek general store".into(), GeoPoint::new(46.9980, -112.0650), DeliveryMode::Drone),
                ("Canyon Ferry marina".into(), GeoPoint::new(46.6494, -111.7281), DeliveryMode::Drone),
                ("Elliston co-op".into(), GeoPoint::new(46.5594, -112.4286), DeliveryMode::Van),
                ("Townsend feed depot".into(), GeoPoint::new(46.3191, -111.5208), DeliveryMode::Van),
            ],
        )
    }

    /// The hub coordinate shared by every destination.
    #[inline]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Read-only slice of all candidates.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// The destination for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this catalog's [`choose`][Self::choose].
    pub fn get(&self, id: DestinationId) -> &Destination {
        &self.destinations[id.index()]
    }

    /// Pick a candidate uniformly at random.
    ///
    /// The catalog is non-empty by construction, so a choice always exists.
    pub fn choose(&self, rng: &mut DemoRng) -> DestinationId {
        // Non-empty invariant established in `new`; choose_index only
        // returns None for empty slices.
        let idx = rng.choose_index(self.destinations.len()).unwrap_or(0);
        DestinationId(idx as u16)
    }
}
