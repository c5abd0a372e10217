use mlfq_model::{random_workload, Sim, Workload};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);
    let workload = random_workload(seed);
    print_workload(&workload);

    let mut sim = Sim::new(workload).expect("generated workloads are always valid");
    let summary = sim.run();

    println!();
    println!("pid\tarrival\tburst\tfinish\tturnaround\tweighted");
    for row in &summary.rows {
        println!(
            "{}\t{}\t{}\t{}\t{}\t\t{:.2}",
            row.pid, row.arrival, row.burst, row.finish, row.turnaround, row.weighted_turnaround
        );
    }
    println!();
    println!("Average turnaround time: {:.2}", summary.mean_turnaround);
    println!(
        "Average weighted turnaround time: {:.2}",
        summary.mean_weighted_turnaround
    );
}

fn print_workload(workload: &Workload) {
    println!(
        "{} queue levels, quanta {:?}",
        workload.config.level_count(),
        workload.config.quanta()
    );
    println!("{} processes", workload.processes.len());
    for spec in &workload.processes {
        println!(
            "process {} - arrival {}, burst {}",
            spec.pid, spec.arrival, spec.burst
        );
    }
}
