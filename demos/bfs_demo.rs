//! Example that builds a grid graph and prints a shortest path across it.
//!
//! This example demonstrates how to:
//! - Build a graph with `create_default_graph` and bidirectional edges
//! - Populate the graph from several threads at once
//! - Query a path by method name, reporting unknown methods as errors
//! - Parse command-line arguments with clap

use std::{sync::Arc, thread};

use clap::Parser;
use graphlib::{Graph, GraphError, PathMethod, create_default_graph, tracing_support::init_tracing};

type Cell = (u32, u32);

/// Find a shortest path between two cells of a grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of columns in the grid
    #[arg(long, default_value_t = 10)]
    width: u32,

    /// Number of rows in the grid
    #[arg(long, default_value_t = 10)]
    height: u32,

    /// Every cell in this column is left unconnected except the bottom one
    #[arg(long)]
    wall: Option<u32>,

    /// Traversal method name
    #[arg(short, long, default_value = "bfs")]
    method: String,

    /// Number of threads used to add edges
    #[arg(short, long, default_value_t = 4)]
    threads: u32,
}

fn is_open(args: &Args, (x, y): Cell) -> bool {
    args.wall != Some(x) || y + 1 == args.height
}

fn connect_row(graph: &impl Graph<Vertex = Cell>, args: &Args, y: u32) -> Result<(), GraphError<Cell>> {
    for x in 0..args.width {
        if !is_open(args, (x, y)) {
            continue;
        }
        for (nx, ny) in [(x + 1, y), (x, y + 1)] {
            if nx < args.width && ny < args.height && is_open(args, (nx, ny)) {
                graph.add_bidirectional_edge((x, y), (nx, ny))?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), GraphError<Cell>> {
    init_tracing();
    let args = Arc::new(Args::parse());
    let method: PathMethod = args.method.parse()?;

    let graph = Arc::new(create_default_graph::<Cell>());
    for y in 0..args.height {
        for x in 0..args.width {
            graph.add_vertex((x, y));
        }
    }

    let handles: Vec<_> = (0..args.threads.max(1))
        .map(|t| {
            let graph = graph.clone();
            let args = args.clone();
            thread::spawn(move || -> Result<(), GraphError<Cell>> {
                let threads = args.threads.max(1);
                for y in (t..args.height).step_by(threads as usize) {
                    connect_row(&*graph, &args, y)?;
                }
                Ok(())
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread panicked")?;
    }

    let start = (0, 0);
    let end = (args.width.saturating_sub(1), 0);
    println!(
        "{} vertices, {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );
    match graph.get_path(&start, &end, method)? {
        Some(path) => {
            println!("{} steps from {:?} to {:?}:", path.len(), start, end);
            let cells: Vec<_> = path.vertices().map(|(x, y)| format!("({x},{y})")).collect();
            println!("{}", cells.join(" -> "));
        }
        None => println!("no path from {:?} to {:?}", start, end),
    }
    Ok(())
}
