//! Console benchmark comparing sequential and parallel BFS/DFS on a graph
//! read from standard input.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;

use parbench::graph::{Graph, GraphResult};
use parbench::input::Tokens;
use parbench::multicore_traversal::{parallel_bfs, parallel_dfs};
use parbench::single_core_traversal::{bfs, dfs};

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());

    prompt("Enter number of vertices and edges: ")?;
    let vertex_count: usize = tokens.next("the number of vertices")?;
    let edge_count: usize = tokens.next("the number of edges")?;

    let mut graph = Graph::new(vertex_count);
    println!("Enter {edge_count} edges (u v):");
    for _ in 0..edge_count {
        let u: usize = tokens.next("an edge endpoint")?;
        let v: usize = tokens.next("an edge endpoint")?;
        graph.add_edge(u, v)?;
    }

    prompt("Enter starting node: ")?;
    let start: usize = tokens.next("the starting node")?;

    run_traversal("Sequential BFS", &graph, start, bfs)?;
    run_traversal("Parallel BFS", &graph, start, parallel_bfs)?;
    run_traversal("Sequential DFS", &graph, start, dfs)?;
    run_traversal("Parallel DFS", &graph, start, parallel_dfs)?;
    Ok(())
}

fn run_traversal(
    name: &str,
    graph: &Graph,
    start: usize,
    traverse: impl Fn(&Graph, usize) -> GraphResult<Vec<usize>>,
) -> Result<()> {
    let started = Instant::now();
    let order = traverse(graph, start)?;
    let elapsed = started.elapsed();

    let order: Vec<String> = order.iter().map(usize::to_string).collect();
    println!("\n{name}: {}", order.join(" "));
    println!("Time: {} ns", elapsed.as_nanos());
    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}
