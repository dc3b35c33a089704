//! Weight-target progress.
//!
//! Pure computation over an ordered weight history and an optional target.
//! Callers supply the history sorted ascending by `(date, seq)`; nothing
//! here sorts or touches storage.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::weight::{WeightRecord, WeightTarget};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressReport {
    pub initial_weight: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    /// `target - initial`. Negative for a loss goal.
    pub total_change_needed: f64,
    /// `current - initial`.
    pub current_change: f64,
    /// `target - current`, signed; positive means weight still to gain,
    /// negative means excess over a loss target. Interpretation is the
    /// caller's job.
    pub remaining: f64,
    pub status: GoalProgress,
    pub trend: WeightTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum GoalProgress {
    /// Current weight equals the target, or the target equals the initial
    /// weight (the degenerate case where the percent formula would divide
    /// by zero).
    AtTarget,
    /// Percent of the needed change achieved so far. Not clamped: moving
    /// away from the target yields values below 0 or above 100, and the
    /// caller is expected to surface that.
    Tracking { percent: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WeightTrend {
    Gaining,
    Losing,
    Stable,
}

/// The most recent measurement, by the order the history was supplied in.
pub fn current_weight(history: &[WeightRecord]) -> Option<f64> {
    history.last().map(|r| r.weight)
}

/// Last weight against first. A single-record history is `Stable`.
pub fn trend(history: &[WeightRecord]) -> WeightTrend {
    match (history.first(), history.last()) {
        (Some(first), Some(last)) if last.weight > first.weight => WeightTrend::Gaining,
        (Some(first), Some(last)) if last.weight < first.weight => WeightTrend::Losing,
        _ => WeightTrend::Stable,
    }
}

/// Compute progress toward `target`. Returns `None` when there is no target
/// or no history; callers render "no target set" rather than an error.
///
/// The single percent formula `current_change / total_change_needed * 100`
/// is directionally correct for both gain and loss goals; the two
/// `AtTarget` branches exist so it is never evaluated with a zero
/// denominator.
pub fn progress(
    history: &[WeightRecord],
    target: Option<&WeightTarget>,
) -> Option<ProgressReport> {
    let target = target?;
    let first = history.first()?;
    let last = history.last()?;

    let initial_weight = first.weight;
    let current_weight = last.weight;
    let total_change_needed = target.target_weight - initial_weight;
    let current_change = current_weight - initial_weight;
    let remaining = target.target_weight - current_weight;

    let status = if current_weight == target.target_weight {
        GoalProgress::AtTarget
    } else if total_change_needed == 0.0 {
        // Target equals the starting weight while the current weight has
        // drifted. Contradictory input; report the sentinel instead of a
        // percentage.
        GoalProgress::AtTarget
    } else {
        GoalProgress::Tracking {
            percent: (current_change / total_change_needed) * 100.0,
        }
    };

    Some(ProgressReport {
        initial_weight,
        current_weight,
        target_weight: target.target_weight,
        total_change_needed,
        current_change,
        remaining,
        status,
        trend: trend(history),
    })
}
