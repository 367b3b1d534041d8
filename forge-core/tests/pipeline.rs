//! End-to-end exercise of the scoring → ranking → forecasting pipeline.

use forge_core::{
    average_score, forecast, rank, top_n, DemandSeries, ForgeError, RiskLevel, Task,
};

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("T1", 5, 2, RiskLevel::Low, 200).unwrap(),
        Task::new("T2", 5, 2, RiskLevel::Low, 100).unwrap(),
        Task::new("T3", 1, 10, RiskLevel::High, 900).unwrap(),
    ]
}

#[test]
fn ranks_cheaper_twin_first_and_risky_straggler_last() {
    // T1 and T2 differ only in cost; T3 loses on priority and risk.
    let ranked = rank(&sample_tasks());
    let ids: Vec<_> = ranked.iter().map(Task::id).collect();
    assert_eq!(ids, ["T2", "T1", "T3"]);
}

#[test]
fn top_n_then_average() {
    let ranked = rank(&sample_tasks());
    let top = top_n(&ranked, 2).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id(), "T2");

    let avg = average_score(&top);
    let expected = (top[0].score() + top[1].score()) / 2.0;
    assert_eq!(avg, expected);
    assert!(avg > average_score(&ranked));
}

#[test]
fn top_n_past_the_end_is_an_error() {
    let ranked = rank(&sample_tasks());
    assert_eq!(
        top_n(&ranked, 5),
        Err(ForgeError::InsufficientData {
            requested: 5,
            available: 3
        })
    );
}

#[test]
fn forecast_alongside_ranking() {
    let series = vec![
        DemandSeries::new("Packaging", vec![5, 10, 15, 20, 25]),
        DemandSeries::new("Support", vec![24, 24, 6, 6, 6]),
    ];
    let result = forecast(&series).unwrap();

    assert_eq!(result.categories[0].forecast, 20.0);
    assert_eq!(result.categories[1].forecast, 6.0);
    assert_eq!(result.top_category, "Packaging");
}
