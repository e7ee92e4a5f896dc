//! Inventory reference data: `InventoryItem` and `InventoryProfile`.
//!
//! The profile is the configured baseline the demo's side panel starts from;
//! the driver keeps the live levels itself (in `DemoState`) and restores them
//! from the profile on reset.

// ── InventoryItem ─────────────────────────────────────────────────────────────

/// One stocked item in the demo hub.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    /// Display name.
    pub name: String,

    /// Starting stock level, percent of capacity (0–100).
    pub baseline_pct: u8,

    /// Amount removed per completed delivery, percentage points.
    /// Live levels floor at 0 rather than going negative.
    pub depletion_pct: u8,
}

// ── InventoryProfile ──────────────────────────────────────────────────────────

/// The fixed item set and baseline levels for one demo configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryProfile {
    items: Vec<InventoryItem>,
}

impl InventoryProfile {
    /// Validate and construct a profile.
    ///
    /// # Errors
    ///
    /// `ScriptError::Config` if any baseline exceeds 100 %.  An empty item
    /// list is allowed — the panel simply has nothing to display.
    pub fn new(items: Vec<InventoryItem>) -> crate::ScriptResult<Self> {
        for item in &items {
            if item.baseline_pct > 100 {
                return Err(crate::ScriptError::Config(format!(
                    "inventory item {:?} has baseline {} % (max 100)",
                    item.name, item.baseline_pct
                )));
            }
        }
        Ok(Self { items })
    }

    /// The standard four-item hub stock.
    pub fn standard() -> crate::ScriptResult<Self> {
        Self::new(vec![
            InventoryItem { name: "Medical supplies".into(), baseline_pct: 85, depletion_pct: 15 },
            InventoryItem { name: "Dry goods".into(), baseline_pct: 92, depletion_pct: 10 },
            InventoryItem { name: "Seed stock".into(), baseline_pct: 74, depletion_pct: 12 },
            InventoryItem { name: "Spare parts".into(), baseline_pct: 61, depletion_pct: 8 },
        ])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only slice of all items.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// The baseline levels, in item order — what the live levels are set to
    /// at driver init and on every reset.
    pub fn baseline_levels(&self) -> Vec<u8> {
        self.items.iter().map(|i| i.baseline_pct).collect()
    }
}
