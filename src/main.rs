mod logger;

use std::process;

use clap::Parser;
use rand::prelude::*;

use mt_sched::{
    Metrics, Policy, ProbabilisticConfig, Process, RoundRobinConfig, Run, SimError,
    scheduler::{Jitter, WeightModel},
    sim::generate::{demo_processes, random_processes},
};

/// Compare FCFS, Round Robin, Priority and the microtubule-inspired policy on one process set.
#[derive(Parser, Debug)]
#[command(name = "mt_sched")]
struct Cli {
    /// Number of random processes to generate.
    #[arg(long, default_value_t = 6)]
    count: usize,

    /// Seed for process generation (random if not set).
    #[arg(long)]
    seed: Option<u64>,

    /// Use the fixed four-process demo set instead of random processes.
    #[arg(long)]
    demo: bool,

    /// Round Robin quantum.
    #[arg(long, default_value_t = 3)]
    quantum: u64,

    /// Shortest slice the microtubule policy may draw.
    #[arg(long, default_value_t = 1)]
    min_quantum: u64,

    /// Longest slice the microtubule policy may draw.
    #[arg(long, default_value_t = 3)]
    max_quantum: u64,

    /// Seed for the microtubule policy (random if not set).
    #[arg(long)]
    mt_seed: Option<u64>,

    /// Rescale microtubule weights by a random 0.8..=1.2 factor every step.
    #[arg(long)]
    jitter: bool,

    /// Weight processes by 0.5/burst + 0.5*priority instead of priority/burst.
    #[arg(long)]
    blend: bool,

    /// Log verbosity (-v info, -vv debug, -vvv per-slice trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let processes = if cli.demo {
        demo_processes()
    } else {
        let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("generating {} processes with seed {seed}", cli.count);
        random_processes(&mut StdRng::seed_from_u64(seed), cli.count)
    };

    println!("PID | Burst | Priority");
    for p in &processes {
        println!("P{} | {} | {}", p.id, p.burst_time, p.priority);
    }

    let rr = RoundRobinConfig::new(cli.quantum);
    let mt = ProbabilisticConfig {
        min_quantum: cli.min_quantum,
        max_quantum: cli.max_quantum,
        random_seed: cli.mt_seed,
        weight_model: if cli.blend {
            WeightModel::BLEND_DFL
        } else {
            WeightModel::default()
        },
        jitter: cli.jitter.then_some(Jitter::DFL),
    };

    for policy in Policy::all(rr, mt) {
        match run_policy(&policy, &processes) {
            Ok((run, metrics)) => report(&policy, &run, &metrics),
            Err(e) => {
                eprintln!("Error: {policy}: {e}");
                process::exit(1);
            }
        }
    }
}

fn run_policy(policy: &Policy, processes: &[Process]) -> Result<(Run, Metrics), SimError> {
    let run = policy.run(processes)?;
    let metrics = run.metrics()?;
    Ok((run, metrics))
}

fn report(policy: &Policy, run: &Run, metrics: &Metrics) {
    println!("\n=== {policy} ===");
    let order: Vec<String> = run
        .timeline
        .iter()
        .map(|c| format!("P{}@{}", c.id, c.time))
        .collect();
    println!("Timeline: {}", order.join(" "));

    println!("PID | TAT | WT");
    for m in &metrics.per_process {
        println!("P{} | {} | {}", m.id, m.turnaround_time, m.waiting_time);
    }
    println!(
        "Average turnaround time: {:.2} ticks, average waiting time: {:.2} ticks, throughput: {:.2} per tick",
        metrics.avg_turnaround_time, metrics.avg_waiting_time, metrics.throughput
    );
}
