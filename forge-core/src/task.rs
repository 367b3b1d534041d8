//! Task model for the prioritization engine.

use crate::error::ForgeError;
use crate::score::score;
use serde::{Deserialize, Serialize};

/// Risk classification for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

// Wire records carry free-form risk labels; unknowns come through as Medium
// instead of failing the whole record.
impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(RiskLevel::from_label(&label))
    }
}

impl RiskLevel {
    /// Parse a free-form label. Unrecognized labels map to `Medium` — an
    /// explicit default for dirty input, not a validation error.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Low" => RiskLevel::Low,
            "Medium" => RiskLevel::Medium,
            "High" => RiskLevel::High,
            _ => RiskLevel::Medium,
        }
    }

    /// Numeric proxy used inversely by the scoring formula.
    pub fn weight(self) -> u32 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A unit of work with a priority score derived once at construction.
///
/// Fields are private so the cached score can never drift from the attributes
/// it was computed from; mutation means building a new task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    id: String,
    /// 1-5, higher is more important.
    priority: i32,
    /// Hours left, >= 1.
    deadline_hours: i32,
    risk: RiskLevel,
    /// Dollars, nominally 100-1000.
    cost: i32,
    score: f64,
}

impl Task {
    /// Build a task and compute its score.
    ///
    /// Fails with `InvalidDeadline` when `deadline_hours < 1`.
    pub fn new(
        id: impl Into<String>,
        priority: i32,
        deadline_hours: i32,
        risk: RiskLevel,
        cost: i32,
    ) -> Result<Self, ForgeError> {
        let score = score(priority, deadline_hours, risk, cost)?;
        Ok(Self {
            id: id.into(),
            priority,
            deadline_hours,
            risk,
            cost,
            score,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn deadline_hours(&self) -> i32 {
        self.deadline_hours
    }

    pub fn risk(&self) -> RiskLevel {
        self.risk
    }

    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

// Deserialization goes back through the validated constructor so a wire
// record can neither smuggle in a stale score nor a zero deadline.
impl<'de> Deserialize<'de> for Task {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Record {
            id: String,
            priority: i32,
            deadline_hours: i32,
            risk: RiskLevel,
            cost: i32,
        }

        let r = Record::deserialize(deserializer)?;
        Task::new(r.id, r.priority, r.deadline_hours, r.risk, r.cost)
            .map_err(serde::de::Error::custom)
    }
}
