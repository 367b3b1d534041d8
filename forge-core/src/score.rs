//! Composite priority scoring.
//!
//! Higher score = do it sooner. Priority dominates, tighter deadlines and
//! lower risk score higher, cost is a small penalty.

use crate::error::ForgeError;
use crate::task::RiskLevel;

/// Weight on the raw 1-5 priority.
pub const W_PRIORITY: f64 = 0.4;
/// Weight on deadline urgency (inverse hours, so 1h left beats 24h left).
pub const W_DEADLINE: f64 = 0.3;
/// Weight on risk (inverse weight, so Low risk beats High risk).
pub const W_RISK: f64 = 0.2;
/// Cost penalty, normalized to roughly 0-1 by dividing by $1000.
pub const W_COST: f64 = 0.1;

/// Compute a task's composite score.
///
/// `deadline_hours` must be >= 1; a zero deadline would divide by zero and is
/// rejected as `InvalidDeadline` instead of leaking an infinite score. Cost is
/// normalized but deliberately not range-checked here: out-of-domain costs
/// still score, they just penalize past the nominal scale.
pub fn score(
    priority: i32,
    deadline_hours: i32,
    risk: RiskLevel,
    cost: i32,
) -> Result<f64, ForgeError> {
    if deadline_hours < 1 {
        return Err(ForgeError::InvalidDeadline { deadline_hours });
    }

    Ok(W_PRIORITY * priority as f64
        + W_DEADLINE * (1.0 / deadline_hours as f64)
        + W_RISK * (1.0 / risk.weight() as f64)
        - W_COST * (cost as f64 / 1000.0))
}
