//! Deterministic ranking of scored tasks.

use crate::error::ForgeError;
use crate::task::Task;

/// Order tasks by score descending, breaking ties by lower cost first.
///
/// The sort is stable, so tasks with identical score AND cost keep their
/// input order — given the same input sequence, the output is reproducible.
/// Input is untouched; a new ordered vector is returned.
pub fn rank(tasks: &[Task]) -> Vec<Task> {
    let mut ranked = tasks.to_vec();
    // Scores are finite by construction (InvalidDeadline is rejected at task
    // build time), so total_cmp is a plain numeric ordering here.
    ranked.sort_by(|a, b| {
        b.score()
            .total_cmp(&a.score())
            .then_with(|| a.cost().cmp(&b.cost()))
    });
    ranked
}

/// First `n` of an already-ranked slice.
///
/// Fails with `InsufficientData` when `n` exceeds the slice length — callers
/// must see short inputs rather than silently getting a shorter report.
pub fn top_n(ranked: &[Task], n: usize) -> Result<Vec<Task>, ForgeError> {
    if n > ranked.len() {
        return Err(ForgeError::InsufficientData {
            requested: n,
            available: ranked.len(),
        });
    }
    Ok(ranked[..n].to_vec())
}

/// Mean score of a ranked subset. Empty input yields 0.0.
pub fn average_score(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    tasks.iter().map(Task::score).sum::<f64>() / tasks.len() as f64
}
