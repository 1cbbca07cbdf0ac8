use std::fmt;

/// Errors raised while building or traversing a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index fell outside `0..vertex_count`.
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => {
                write!(
                    f,
                    "vertex {} is out of range for a graph with {} vertices",
                    vertex, vertex_count
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;

/// Undirected graph over the vertices `0..vertex_count`, stored as
/// adjacency lists. Neighbor lists keep insertion order, so traversal
/// output depends on the order edges were added.
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Graph {
        Graph {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Inserts the undirected edge `(u, v)`, appending each endpoint to the
    /// other's neighbor list.
    pub fn add_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        Ok(())
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}
