/*!
 * CPU Scheduling Simulator - Command Line Entry Point
 *
 * Loads a process snapshot, runs one or all algorithms and prints the
 * per-process table and metrics of each run.
 */

use clap::Parser;
use cpu_sched_sim::{
    init_tracing, Algorithm, ProcessSnapshot, SchedulerEngine, SimulationConfig,
    SimulationReport,
};
use miette::{IntoDiagnostic, WrapErr};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cpu-sched-sim", version, about = "CPU scheduling algorithms simulator")]
struct Cli {
    /// Process snapshot: { "processes": [ { "arrival_time", "burst_time", "priority" } ] }
    snapshot: PathBuf,

    /// Algorithm name (fcfs, sjf, srjf, rr, priority, hrrn, ljf, lrjf), menu code 1-8, or "all"
    #[arg(short, long, default_value = "all")]
    algorithm: String,

    /// Round Robin time quantum (overrides SCHED_QUANTUM)
    #[arg(short, long, allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// CPU utilization formula: legacy or busy_time (overrides SCHED_CPU_UTILIZATION)
    #[arg(short, long)]
    utilization: Option<String>,

    /// Print reports as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = SimulationConfig::from_env()?;
    if let Some(quantum) = cli.quantum {
        config = config.with_quantum(quantum);
    }
    if let Some(utilization) = &cli.utilization {
        config = config.with_utilization(utilization.parse()?);
    }
    let engine = SchedulerEngine::from_config(&config)?;

    let file = File::open(&cli.snapshot)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to open snapshot {}", cli.snapshot.display()))?;
    let snapshot = ProcessSnapshot::from_reader(BufReader::new(file))?;
    info!(processes = snapshot.len(), "snapshot loaded");

    let reports = if cli.algorithm.eq_ignore_ascii_case("all") {
        engine.compare(snapshot.records())?
    } else {
        let algorithm: Algorithm = cli.algorithm.parse()?;
        vec![engine.run(snapshot.records(), algorithm)?]
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", json);
    } else {
        for report in &reports {
            print_report(report, engine.utilization().as_str());
        }
    }

    Ok(())
}

fn print_report(report: &SimulationReport, formula: &str) {
    let simulation = &report.simulation;
    let metrics = &report.metrics;
    let rule = "=".repeat(98);

    println!("\n{}", rule);
    match simulation.quantum {
        Some(quantum) => println!(
            "  {} (quantum = {})",
            simulation.algorithm.display_name(),
            quantum.get()
        ),
        None => println!("  {}", simulation.algorithm.display_name()),
    }
    println!("{}", rule);
    println!(
        "{:<5} {:<10} {:<10} {:<10} {:<10} {:<15} {:<15} {:<15}",
        "PID", "Arrival", "Burst", "Priority", "Complete", "Turnaround", "Waiting", "Response"
    );
    println!("{}", rule);
    for p in &simulation.processes {
        println!(
            "{:<5} {:<10} {:<10} {:<10} {:<10} {:<15} {:<15} {:<15}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            p.priority,
            p.completion_time.unwrap_or_default(),
            p.turnaround_time,
            p.waiting_time,
            p.response_time.unwrap_or_default()
        );
    }

    let gantt: Vec<String> = simulation
        .timeline
        .iter()
        .map(|s| format!("[{}-{} P{}]", s.start, s.end, s.pid))
        .collect();
    println!("\nTimeline: {}", gantt.join(" "));

    println!("\nAverage Waiting Time:     {:.2} units", metrics.avg_waiting_time);
    println!("Average Turnaround Time:  {:.2} units", metrics.avg_turnaround_time);
    println!("Average Response Time:    {:.2} units", metrics.avg_response_time);
    println!("Total Execution Time:     {} units", simulation.total_time);
    println!(
        "CPU Utilization:          {:.2}% ({})",
        metrics.cpu_utilization, formula
    );
}
