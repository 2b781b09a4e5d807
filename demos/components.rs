//! Builds a graph from the command line and prints its structure.
//!
//! Usage:
//!   cargo run --example components -- A-B B-C D
//!   cargo run --example components -- --start B x1-x2 x2-y1 y1-y2

use std::process;

use clap::Parser;
use linkgraph::{prelude::*, tracing_support::init_tracing};

/// Print the components, a BFS order and the similarity groups of a graph
/// given as `name` and `name-name` arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Nodes (`A`) and links (`A-B`); nodes are created on first mention
    #[arg(required = true)]
    items: Vec<String>,

    /// Node to start the breadth-first search from (defaults to the first)
    #[arg(long)]
    start: Option<String>,

    /// Number of leading characters two names must share to be grouped
    #[arg(long, default_value_t = 1)]
    prefix_len: usize,
}

fn build_graph(items: &[String]) -> Result<Graph> {
    let mut graph = Graph::new();
    for item in items {
        let names: Vec<&str> = item.split('-').filter(|s| !s.is_empty()).collect();
        for name in &names {
            if graph.nodes_by_name(name).is_err() {
                graph.add_node(*name);
            }
        }
        for pair in names.windows(2) {
            graph.connect(pair[0], pair[1])?;
        }
    }
    Ok(graph)
}

fn format_group(nodes: &[&Node]) -> String {
    nodes.iter().map(|n| n.name()).collect::<Vec<_>>().join(" ")
}

fn run(args: &Args) -> Result<()> {
    let graph = build_graph(&args.items)?;
    println!("{} nodes, {} links", graph.num_nodes(), graph.num_links());

    println!(
        "{} connected components:",
        graph.number_of_connected_components()
    );
    for component in graph.connected_components() {
        println!("  {}", format_group(&component));
    }

    let start = match &args.start {
        Some(name) => name.as_str(),
        None => match graph.nodes().first() {
            Some(node) => node.name(),
            None => return Ok(()),
        },
    };
    let mut order = Vec::new();
    graph.bfs(start, |node| order.push(node.name().to_string()))?;
    println!("bfs from {start}: {}", order.join(" "));

    let prefix = |node: &Node| node.name().chars().take(args.prefix_len).collect::<String>();
    println!("similar node groups:");
    for group in graph.find_similar_node_groups(|a, b| prefix(a) == prefix(b)) {
        println!("  {}", format_group(&group));
    }
    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
