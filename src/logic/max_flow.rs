//! Max flow / min cut: Edmonds-Karp (BFS augmenting paths) over an arena flow network.
//!
//! Edges are stored in pairs: edge `e` and its reverse `e ^ 1`. The reverse starts with
//! zero capacity, so `residual(e) = cap(e) - flow(e)` covers both directions.

use crate::models::EliminationError;
use std::collections::VecDeque;

/// Integer flow / capacity. All capacities are game or win counts.
pub type Flow = i64;

/// Index into the network's edge arena.
pub type EdgeId = usize;

const UNSET: usize = usize::MAX;

#[derive(Clone, Debug)]
struct FlowEdge {
    from: usize,
    to: usize,
    cap: Flow,
    flow: Flow,
}

/// Directed flow network with integer capacities, vertices `0..vertex_count()`.
#[derive(Clone, Debug, Default)]
pub struct FlowNetwork {
    edges: Vec<FlowEdge>,
    adj: Vec<Vec<EdgeId>>,
}

impl FlowNetwork {
    pub fn with_vertices(n: usize) -> Self {
        Self {
            edges: Vec::new(),
            adj: vec![Vec::new(); n],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of forward edges (reverse edges are not counted).
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Add `from -> to` with the given capacity; returns the forward edge id.
    pub fn add_edge(&mut self, from: usize, to: usize, cap: Flow) -> Result<EdgeId, EliminationError> {
        let n = self.vertex_count();
        if from >= n || to >= n {
            return Err(EliminationError::MalformedNetwork(format!(
                "edge {} -> {} outside 0..{}",
                from, to, n
            )));
        }
        if cap < 0 {
            return Err(EliminationError::MalformedNetwork(format!(
                "edge {} -> {} has negative capacity {}",
                from, to, cap
            )));
        }
        let e = self.edges.len();
        self.edges.push(FlowEdge { from, to, cap, flow: 0 });
        self.edges.push(FlowEdge {
            from: to,
            to: from,
            cap: 0,
            flow: 0,
        });
        self.adj[from].push(e);
        self.adj[to].push(e + 1);
        Ok(e)
    }

    /// Forward edges leaving `v` (reverse edges skipped).
    pub fn out_edges(&self, v: usize) -> impl Iterator<Item = EdgeId> + '_ {
        self.adj[v].iter().copied().filter(|e| e % 2 == 0)
    }

    pub fn endpoints(&self, e: EdgeId) -> (usize, usize) {
        (self.edges[e].from, self.edges[e].to)
    }

    pub fn capacity(&self, e: EdgeId) -> Flow {
        self.edges[e].cap
    }

    pub fn flow(&self, e: EdgeId) -> Flow {
        self.edges[e].flow
    }

    /// Capacity left on `e` in the residual graph.
    pub fn residual(&self, e: EdgeId) -> Flow {
        self.edges[e].cap - self.edges[e].flow
    }

    fn push(&mut self, e: EdgeId, delta: Flow) {
        self.edges[e].flow += delta;
        self.edges[e ^ 1].flow -= delta;
    }

    /// BFS over edges with residual capacity. Fills `parent_edge` and returns the visited set.
    fn residual_bfs(&self, source: usize, parent_edge: &mut [EdgeId]) -> Vec<bool> {
        let mut visited = vec![false; self.vertex_count()];
        parent_edge.fill(UNSET);
        visited[source] = true;
        let mut queue = VecDeque::from(vec![source]);
        while let Some(u) = queue.pop_front() {
            for &e in &self.adj[u] {
                let v = self.edges[e].to;
                if !visited[v] && self.residual(e) > 0 {
                    visited[v] = true;
                    parent_edge[v] = e;
                    queue.push_back(v);
                }
            }
        }
        visited
    }
}

/// Result of a max-flow run: the flow value and the min cut's source side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowSolution {
    pub max_flow: Flow,
    source_side: Vec<bool>,
}

impl FlowSolution {
    /// Is `v` reachable from the source in the final residual graph?
    pub fn in_cut(&self, v: usize) -> bool {
        self.source_side.get(v).copied().unwrap_or(false)
    }

    /// Source-side vertices, ascending.
    pub fn source_side(&self) -> impl Iterator<Item = usize> + '_ {
        self.source_side
            .iter()
            .enumerate()
            .filter(|(_, s)| **s)
            .map(|(v, _)| v)
    }
}

/// Run Edmonds-Karp from `source` to `sink`, mutating the network's flows.
///
/// Any flow left from an earlier run is cleared first, so the result is always the full
/// maximum flow of the network.
/// Residual capacities stay readable through [`FlowNetwork::residual`]. The returned cut is
/// checked against the flow value (max-flow / min-cut duality) before returning.
pub fn solve(network: &mut FlowNetwork, source: usize, sink: usize) -> Result<FlowSolution, EliminationError> {
    let n = network.vertex_count();
    if source >= n || sink >= n {
        return Err(EliminationError::MalformedNetwork(format!(
            "source {} / sink {} outside 0..{}",
            source, sink, n
        )));
    }
    if source == sink {
        return Err(EliminationError::MalformedNetwork("source equals sink".to_string()));
    }
    for edge in &mut network.edges {
        edge.flow = 0;
    }

    let mut parent_edge = vec![UNSET; n];
    let mut max_flow: Flow = 0;
    let mut augmentations = 0usize;
    let source_side = loop {
        let visited = network.residual_bfs(source, &mut parent_edge);
        if !visited[sink] {
            break visited;
        }

        let mut delta = Flow::MAX;
        let mut v = sink;
        while v != source {
            let e = parent_edge[v];
            delta = delta.min(network.residual(e));
            v = network.edges[e].from;
        }
        if delta <= 0 {
            return Err(EliminationError::MalformedNetwork(format!(
                "augmenting path with bottleneck {}",
                delta
            )));
        }

        let mut v = sink;
        while v != source {
            let e = parent_edge[v];
            network.push(e, delta);
            v = network.edges[e].from;
        }
        max_flow += delta;
        augmentations += 1;
    };

    let cut_capacity: Flow = network
        .edges
        .iter()
        .step_by(2)
        .filter(|edge| source_side[edge.from] && !source_side[edge.to])
        .map(|edge| edge.cap)
        .sum();
    if cut_capacity != max_flow {
        return Err(EliminationError::MalformedNetwork(format!(
            "cut capacity {} differs from max flow {}",
            cut_capacity, max_flow
        )));
    }

    log::trace!(
        "max flow {} after {} augmentations ({} vertices, {} edges)",
        max_flow,
        augmentations,
        n,
        network.edge_count()
    );

    Ok(FlowSolution { max_flow, source_side })
}
