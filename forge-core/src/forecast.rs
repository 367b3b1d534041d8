//! Demand forecasting: trailing moving average over short daily histories.

use crate::error::ForgeError;
use serde::{Deserialize, Serialize};

/// Number of daily samples every history must carry.
pub const HISTORY_LEN: usize = 5;
/// Size of the trailing moving-average window.
pub const WINDOW: usize = 3;

/// One category's demand counts, oldest first. Built fresh per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSeries {
    pub category: String,
    pub history: Vec<i64>,
}

impl DemandSeries {
    pub fn new(category: impl Into<String>, history: Vec<i64>) -> Self {
        Self {
            category: category.into(),
            history,
        }
    }
}

/// Per-category forecast, history echoed for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryForecast {
    pub category: String,
    pub history: Vec<i64>,
    pub forecast: f64,
}

/// All category forecasts in caller order, plus the argmax category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub categories: Vec<CategoryForecast>,
    pub top_category: String,
}

/// Forecast near-term demand per category.
///
/// Each history must hold exactly [`HISTORY_LEN`] samples; the forecast is the
/// mean of the last [`WINDOW`] of them. The top category is the one with the
/// strictly highest forecast; on ties, the FIRST category in the input slice
/// wins. Caller order is authoritative, which is why the input is an ordered
/// slice and not a map.
pub fn forecast(series: &[DemandSeries]) -> Result<ForecastResult, ForgeError> {
    if series.is_empty() {
        return Err(ForgeError::InsufficientData {
            requested: 1,
            available: 0,
        });
    }

    let mut categories = Vec::with_capacity(series.len());
    for s in series {
        if s.history.len() != HISTORY_LEN {
            return Err(ForgeError::MalformedHistory {
                category: s.category.clone(),
                len: s.history.len(),
            });
        }

        let tail = &s.history[HISTORY_LEN - WINDOW..];
        let avg = tail.iter().sum::<i64>() as f64 / WINDOW as f64;

        categories.push(CategoryForecast {
            category: s.category.clone(),
            history: s.history.clone(),
            forecast: avg,
        });
    }

    // Strict > keeps the earliest category on ties.
    let mut top = &categories[0];
    for c in &categories[1..] {
        if c.forecast > top.forecast {
            top = c;
        }
    }
    let top_category = top.category.clone();

    Ok(ForecastResult {
        categories,
        top_category,
    })
}
