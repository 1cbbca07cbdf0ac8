use std::collections::VecDeque;
use std::sync::Mutex;

use rayon::prelude::*;

use crate::graph::{Graph, GraphResult};

// The visited markers and the frontier queue are the only state shared
// between workers, so they live behind a single mutex together.
struct Frontier {
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

/// Level-synchronous parallel breadth-first search from `start`.
///
/// Each round drains the whole frontier into a level, records it in the
/// output order, then scans the level's adjacency lists in parallel. Every
/// check-and-enqueue of a neighbor is one critical section on the shared
/// frontier. Whole levels finish before the next one starts, so the output
/// groups by level; the order *within* a level depends on which worker
/// enqueued which neighbor first during the previous round.
pub fn parallel_bfs(graph: &Graph, start: usize) -> GraphResult<Vec<usize>> {
    graph.check_vertex(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    visited[start] = true;
    let mut queue = VecDeque::new();
    queue.push_back(start);
    let frontier = Mutex::new(Frontier { visited, queue });

    let mut order = Vec::new();
    loop {
        let level: Vec<usize> = {
            let mut frontier = frontier
                .lock()
                .expect("could not lock the bfs frontier mutex");
            if frontier.queue.is_empty() {
                break;
            }
            frontier.queue.drain(..).collect()
        };
        order.extend_from_slice(&level);
        level.par_iter().for_each(|&node| {
            for &neighbor in graph.neighbors(node) {
                // One critical section per neighbor check, not batched.
                let mut frontier = frontier
                    .lock()
                    .expect("could not lock the bfs frontier mutex");
                if !frontier.visited[neighbor] {
                    frontier.visited[neighbor] = true;
                    frontier.queue.push_back(neighbor);
                }
            }
        });
    }
    Ok(order)
}

struct DfsState {
    visited: Vec<bool>,
    order: Vec<usize>,
}

/// Task-spawning parallel depth-first search from `start`.
///
/// Every node runs as a task on rayon's pool; the enclosing scope joins all
/// of them before this function returns. A task checks, marks, and records
/// its node under one lock, then spawns a task per neighbor *without*
/// consulting the visited markers first. A node can therefore be scheduled
/// several times; the lock keeps the duplicates from being recorded, so the
/// race costs redundant tasks, never incorrect output.
pub fn parallel_dfs(graph: &Graph, start: usize) -> GraphResult<Vec<usize>> {
    graph.check_vertex(start)?;
    let state = Mutex::new(DfsState {
        visited: vec![false; graph.vertex_count()],
        order: Vec::new(),
    });
    rayon::scope(|scope| dfs_task(graph, scope, start, &state));
    let state = state
        .into_inner()
        .expect("could not unwrap the dfs state mutex");
    Ok(state.order)
}

fn dfs_task<'a>(
    graph: &'a Graph,
    scope: &rayon::Scope<'a>,
    node: usize,
    state: &'a Mutex<DfsState>,
) {
    {
        let mut state = state.lock().expect("could not lock the dfs state mutex");
        if state.visited[node] {
            return;
        }
        state.visited[node] = true;
        state.order.push(node);
    }
    for &neighbor in graph.neighbors(node) {
        scope.spawn(move |scope| dfs_task(graph, scope, neighbor, state));
    }
}
