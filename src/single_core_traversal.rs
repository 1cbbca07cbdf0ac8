use std::collections::VecDeque;

use crate::graph::{Graph, GraphResult};

/// Breadth-first search from `start`, returning the vertices in visit order.
///
/// Vertices are marked visited when enqueued, so each reachable vertex
/// appears exactly once and the order is deterministic.
pub fn bfs(graph: &Graph, start: usize) -> GraphResult<Vec<usize>> {
    graph.check_vertex(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();
    visited[start] = true;
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &neighbor in graph.neighbors(node) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }
    Ok(order)
}

/// Recursive pre-order depth-first search from `start`, returning the
/// vertices in visit order. Neighbors are explored in list order.
pub fn dfs(graph: &Graph, start: usize) -> GraphResult<Vec<usize>> {
    graph.check_vertex(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    dfs_visit(graph, start, &mut visited, &mut order);
    Ok(order)
}

fn dfs_visit(graph: &Graph, node: usize, visited: &mut [bool], order: &mut Vec<usize>) {
    visited[node] = true;
    order.push(node);
    for &neighbor in graph.neighbors(node) {
        if !visited[neighbor] {
            dfs_visit(graph, neighbor, visited, order);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph
    }

    #[test]
    fn bfs_visits_level_by_level() {
        let graph = sample_graph();
        assert_eq!(bfs(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn dfs_explores_depth_first() {
        let graph = sample_graph();
        assert_eq!(dfs(&graph, 0).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn single_vertex_graph_visits_only_the_start() {
        let graph = Graph::new(1);
        assert_eq!(bfs(&graph, 0).unwrap(), vec![0]);
        assert_eq!(dfs(&graph, 0).unwrap(), vec![0]);
    }

    #[test]
    fn unreachable_vertices_are_skipped() {
        let mut graph = Graph::new(5);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(3, 4).unwrap();
        assert_eq!(bfs(&graph, 0).unwrap(), vec![0, 1]);
        assert_eq!(dfs(&graph, 3).unwrap(), vec![3, 4]);
    }

    #[test]
    fn out_of_range_start_is_an_error() {
        let graph = Graph::new(2);
        assert_eq!(
            bfs(&graph, 2),
            Err(GraphError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert!(dfs(&graph, 9).is_err());
    }
}
