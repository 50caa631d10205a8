//! Audit records for engine decisions.
//!
//! Every rule the engine applies (availability, pricing, fee exemption,
//! refund tier) records an [`AuditStep`] so a booking or cancellation can be
//! explained after the fact.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a booking decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a quote or settlement.
///
/// # Example
///
/// ```
/// use dock_booking_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule applications, in order.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// The step number the next recorded step should carry.
    pub fn next_step_number(&self) -> u32 {
        self.steps.last().map_or(1, |s| s.step_number + 1)
    }
}
