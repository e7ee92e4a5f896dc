//! The walkthrough step script: `DemoStep`, `StepKind`, and `StepScript`.
//!
//! # Ordinals vs IDs
//!
//! A step's **ordinal** is its index in the script and determines when it
//! runs; its [`StepId`] is a stable label that survives reordering.  The
//! driver only ever works in ordinals, which the script resolves for it.
//!
//! # The dispatch threshold
//!
//! The transit phase — the range of steps during which the simulated vehicle
//! is moving between origin and destination — is derived once, at
//! construction, from the position of the `Dispatch` step.  Both the
//! progress-increment logic and the marker-position logic go through
//! [`StepScript::in_transit_phase`] and [`StepScript::transit_step_count`],
//! so the threshold cannot drift out of sync if the script is rewritten.

use fl_core::StepId;

// ── StepKind ──────────────────────────────────────────────────────────────────

/// What the driver does on arrival at a step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// Purely informational; no side effect.
    Info,
    /// Generate the mock transaction identifier (once per run).
    Ledger,
    /// The vehicle departs; the transit phase begins here.
    Dispatch,
    /// The delivery lands; inventory is depleted.  Must be the final step.
    Delivered,
}

// ── DemoStep ──────────────────────────────────────────────────────────────────

/// One entry in the walkthrough script.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemoStep {
    /// Stable identifier, independent of position in the script.
    pub id: StepId,

    /// Display label shown while the step is active.
    pub label: String,

    /// What the driver does when it reaches this step.
    pub kind: StepKind,
}

impl DemoStep {
    pub fn new(id: StepId, label: impl Into<String>, kind: StepKind) -> Self {
        Self { id, label: label.into(), kind }
    }
}

// ── StepScript ────────────────────────────────────────────────────────────────

/// The ordered, validated step sequence for one demo walkthrough.
///
/// Construction rejects any script the driver could not run to completion,
/// so every accessor below is total.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepScript {
    steps: Vec<DemoStep>,
    /// Ordinal of the `Ledger` step, cached at construction.
    ledger_ordinal: usize,
    /// Ordinal of the `Dispatch` step, cached at construction.
    dispatch_ordinal: usize,
}

impl StepScript {
    /// Validate and construct a script.
    ///
    /// # Errors
    ///
    /// `ScriptError::Config` if the script is empty, has anything other than
    /// exactly one `Ledger` / one `Dispatch` / one `Delivered` step, ends on
    /// a non-`Delivered` step, records the ledger after dispatch, or leaves
    /// no room for a transit phase of at least one step.
    pub fn new(steps: Vec<DemoStep>) -> crate::ScriptResult<Self> {
        use crate::ScriptError::Config;

        if steps.is_empty() {
            return Err(Config("script has no steps".into()));
        }

        let ledger_ordinal = single_ordinal(&steps, StepKind::Ledger)?;
        let dispatch_ordinal = single_ordinal(&steps, StepKind::Dispatch)?;
        let delivered_ordinal = single_ordinal(&steps, StepKind::Delivered)?;

        let final_ordinal = steps.len() - 1;
        if delivered_ordinal != final_ordinal {
            return Err(Config(format!(
                "delivered step must be last (found at ordinal {delivered_ordinal} of {final_ordinal})"
            )));
        }
        if ledger_ordinal >= dispatch_ordinal {
            return Err(Config(format!(
                "ledger step (ordinal {ledger_ordinal}) must precede dispatch (ordinal {dispatch_ordinal})"
            )));
        }
        // Transit phase must span at least one step.
        if dispatch_ordinal >= final_ordinal {
            return Err(Config(format!(
                "dispatch step (ordinal {dispatch_ordinal}) leaves no transit phase before \
                 the final step (ordinal {final_ordinal})"
            )));
        }

        Ok(Self { steps, ledger_ordinal, dispatch_ordinal })
    }

    /// The standard six-step delivery walkthrough.
    pub fn standard() -> crate::ScriptResult<Self> {
        Self::new(vec![
            DemoStep::new(StepId(0), "Order placed", StepKind::Info),
            DemoStep::new(StepId(1), "Stock verified", StepKind::Info),
            DemoStep::new(StepId(2), "Ledger record created", StepKind::Ledger),
            DemoStep::new(StepId(3), "Dispatched from hub", StepKind::Dispatch),
            DemoStep::new(StepId(4), "In transit", StepKind::Info),
            DemoStep::new(StepId(5), "Delivered", StepKind::Delivered),
        ])
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Read-only slice of all steps in order.
    pub fn steps(&self) -> &[DemoStep] {
        &self.steps
    }

    /// The step at `ordinal`, or `None` if out of range.
    pub fn get(&self, ordinal: usize) -> Option<&DemoStep> {
        self.steps.get(ordinal)
    }

    // ── Derived ordinals ──────────────────────────────────────────────────

    /// Ordinal of the last step (the `Delivered` step).
    #[inline]
    pub fn final_ordinal(&self) -> usize {
        self.steps.len() - 1
    }

    /// Ordinal at which the transaction identifier is generated.
    #[inline]
    pub fn ledger_ordinal(&self) -> usize {
        self.ledger_ordinal
    }

    /// Ordinal at which the vehicle departs — the dispatch threshold.
    #[inline]
    pub fn dispatch_ordinal(&self) -> usize {
        self.dispatch_ordinal
    }

    /// `true` if `ordinal` lies in the transit phase: dispatch through the
    /// final step, inclusive.  The single source of truth for both the
    /// progress-increment and the marker-update logic.
    #[inline]
    pub fn in_transit_phase(&self, ordinal: usize) -> bool {
        ordinal >= self.dispatch_ordinal && ordinal <= self.final_ordinal()
    }

    /// Number of steps in the transit phase (dispatch through final,
    /// inclusive).  Always ≥ 2 by construction.
    #[inline]
    pub fn transit_step_count(&self) -> usize {
        self.final_ordinal() - self.dispatch_ordinal + 1
    }

    /// Transit-progress percentage added on each transit-phase step.
    /// Summed over the whole phase this reaches 100 (the driver clamps away
    /// the last few ULPs of floating-point error).
    #[inline]
    pub fn progress_increment(&self) -> f64 {
        100.0 / self.transit_step_count() as f64
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Ordinal of the unique step with `kind`, or a config error if the script
/// has zero or several of them.
fn single_ordinal(steps: &[DemoStep], kind: StepKind) -> crate::ScriptResult<usize> {
    let mut found = None;
    for (ordinal, step) in steps.iter().enumerate() {
        if step.kind == kind {
            if found.is_some() {
                return Err(crate::ScriptError::Config(format!(
                    "script has more than one {kind:?} step"
                )));
            }
            found = Some(ordinal);
        }
    }
    found.ok_or_else(|| crate::ScriptError::Config(format!("script has no {kind:?} step")))
}
