//! forge-core: scoring, ranking, and demand forecasting for the Forge
//! prioritization reporter.
//!
//! Everything here is a pure transform: no I/O, no randomness, no shared
//! state. Sample generation and report rendering live in `forge-cli`.

pub mod error;
pub mod forecast;
pub mod rank;
pub mod score;
pub mod task;

pub use error::ForgeError;
pub use forecast::{forecast, CategoryForecast, DemandSeries, ForecastResult, HISTORY_LEN, WINDOW};
pub use rank::{average_score, rank, top_n};
pub use score::score;
pub use task::{RiskLevel, Task};
