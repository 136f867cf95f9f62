use std::env;
use std::error::Error;
use std::process;

use throughput::call_context::CallContext;
use throughput::graph::{self, Network, ResidualArcs};
use throughput::io;

fn usage() {
    println!("Usage: cli [--forward-only] [--connections <connections.csv>] <problem.json>");
    println!("Option --forward-only builds the network without reverse residual arcs.");
    println!("Option --connections reads the connections from a from,to,capacity csv file");
    println!("instead of the \"connections\" field of problem.json.");
}

struct Options {
    residual_arcs: ResidualArcs,
    connections_file: Option<String>,
    problem_file: String,
}

fn parse_args(mut args: Vec<String>) -> Option<Options> {
    let residual_arcs = if args.get(1) == Some(&"--forward-only".to_string()) {
        args.remove(1);
        ResidualArcs::ForwardOnly
    } else {
        ResidualArcs::Paired
    };
    let connections_file = if args.get(1) == Some(&"--connections".to_string()) {
        if args.len() < 3 {
            return None;
        }
        args.remove(1);
        Some(args.remove(1))
    } else {
        None
    };
    if args.len() != 2 {
        return None;
    }
    Some(Options {
        residual_arcs,
        connections_file,
        problem_file: args.remove(1),
    })
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let mut problem = io::read_problem_json(&options.problem_file)?;
    if let Some(connections_file) = &options.connections_file {
        problem.connections = io::read_connections_csv(connections_file)?;
    }
    println!(
        "Computing throughput {} -> {:?} over {} connections",
        problem.origin,
        problem.targets,
        problem.connections.len()
    );

    let call_context = CallContext::new(&options.problem_file);
    let mut network = Network::from_problem(&problem, options.residual_arcs)?;
    let result = graph::compute_flow(&mut network, &call_context);

    let output = json::object! {
        maxThroughput: result.total,
        augmentations: result.augmentations.iter().enumerate().map(|(i, a)| {
            json::object! {
                step: i,
                bottleneck: a.bottleneck,
                path: a.path.clone(),
            }
        }).collect::<Vec<_>>()
    };
    println!("{output}");
    Ok(())
}

fn main() {
    env_logger::init();

    let Some(options) = parse_args(env::args().collect()) else {
        usage();
        return;
    };
    if let Err(e) = run(options) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
