/*!
 * Metrics Tests
 * Aggregates computed over finished simulations
 */

use cpu_sched_sim::{
    Algorithm, Metrics, ProcessRecord, ProcessSnapshot, ProcessSpec, SchedulerEngine,
    SchedulerError, TimeQuantum, UtilizationFormula,
};
use pretty_assertions::assert_eq;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn gapped() -> ProcessSnapshot {
    // CPU idles between t=2 and t=6 under every algorithm
    ProcessSnapshot::from_specs([ProcessSpec::new(0, 2, 0), ProcessSpec::new(6, 2, 0)]).unwrap()
}

#[test]
fn test_round_robin_metrics() {
    let snapshot = ProcessSnapshot::from_specs([
        ProcessSpec::new(0, 5, 0),
        ProcessSpec::new(1, 3, 0),
        ProcessSpec::new(2, 8, 0),
    ])
    .unwrap();
    let report = SchedulerEngine::new()
        .with_quantum(TimeQuantum::new(2).unwrap())
        .run(snapshot.records(), Algorithm::RoundRobin)
        .unwrap();

    // completions 9, 10, 16 -> turnaround 9, 9, 14 -> waiting 4, 6, 6
    let turnaround: Vec<u64> = report
        .simulation
        .processes
        .iter()
        .map(|p| p.turnaround_time)
        .collect();
    assert_eq!(turnaround, vec![9, 9, 14]);
    assert!(approx(report.metrics.avg_turnaround_time, 32.0 / 3.0));
    assert!(approx(report.metrics.avg_waiting_time, 16.0 / 3.0));
    assert!(approx(report.metrics.avg_response_time, 7.0 / 3.0));
}

#[test]
fn test_legacy_utilization_ignores_idle_gaps() {
    let report = SchedulerEngine::new()
        .run(gapped().records(), Algorithm::Fcfs)
        .unwrap();

    assert_eq!(report.simulation.total_time, 8);
    assert_eq!(report.metrics.cpu_utilization, 100.0);
}

#[test]
fn test_busy_time_utilization_counts_idle_gaps() {
    let engine = SchedulerEngine::new().with_utilization(UtilizationFormula::BusyTime);

    for algorithm in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Srjf] {
        let report = engine.run(gapped().records(), algorithm).unwrap();
        assert_eq!(report.metrics.cpu_utilization, 50.0, "{}", algorithm);
    }
}

#[test]
fn test_metrics_on_empty_set() {
    assert_eq!(
        Metrics::compute(&mut [], 0, UtilizationFormula::Legacy),
        Err(SchedulerError::EmptyProcessSet)
    );
}

#[test]
fn test_metrics_reject_unfinished_records() {
    let mut records = vec![ProcessRecord::new(1, 0, 2, 0), ProcessRecord::new(2, 0, 2, 0)];
    records[0].execute(0, 2);

    assert_eq!(
        Metrics::compute(&mut records, 2, UtilizationFormula::Legacy),
        Err(SchedulerError::ProcessIncomplete(2))
    );
}

#[test]
fn test_report_serializes_flat() {
    let report = SchedulerEngine::new()
        .run(gapped().records(), Algorithm::Sjf)
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["algorithm"], "sjf");
    assert_eq!(json["total_time"], 8);
    assert!(json.get("quantum").is_none());
    assert_eq!(json["processes"][1]["completion_time"], 8);
    assert_eq!(json["metrics"]["cpu_utilization"], 100.0);
}
