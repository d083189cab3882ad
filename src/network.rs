// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Capacitated flow networks and their residual graphs.
//!
//! A [`FlowNetwork`] has a fixed number of vertices `0..n` and a list of
//! directed edges with capacities. Each edge `e` is represented by two
//! *arcs* in the residual graph: the forward arc `2e` from source to sink of
//! the edge and the reverse arc `2e + 1` in the opposite direction. The
//! residual capacity of the forward arc starts at the capacity of the edge,
//! the residual capacity of the reverse arc at zero.
//!
//! Parallel edges are kept as distinct arcs. The matrix view returned by
//! [`FlowNetwork::residual`] and [`FlowNetwork::residual_matrix`] adds up the
//! residual capacities of all arcs between the same pair of vertices.
//!
//! # Example
//!
//! ```
//! use rs_flownet::FlowNetwork;
//!
//! let mut net = FlowNetwork::new("parallel", 2).unwrap();
//! let e = net.add_edge(0, 1, 3).unwrap();
//! let f = net.add_edge(0, 1, 5).unwrap();
//!
//! assert_eq!(net.residual_arc(2 * e), 3);
//! assert_eq!(net.residual_arc(2 * f), 5);
//! assert_eq!(net.residual(0, 1), 8);
//! assert_eq!(net.residual(1, 0), 0);
//! ```

mod maxflow;
mod mincut;

pub use self::maxflow::{edmondskarp, AugmentingPath, EdgeFlow, MaxFlow};
pub use self::mincut::{CutEdge, MinCut};

use crate::error::{Error, Result};
use crate::num::traits::{CheckedAdd, NumAssign};

use std::fmt;

/// The solution state of a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State<F> {
    /// The network is being built or its residual graph has been reset.
    Building,
    /// The residual graph is the residual graph of a maximum flow.
    Solved { src: usize, snk: usize, value: F },
}

#[derive(Clone, Debug)]
struct EdgeInfo<F> {
    src: usize,
    snk: usize,
    capacity: F,
}

/// A directed network with edge capacities.
#[derive(Clone, Debug)]
pub struct FlowNetwork<F> {
    name: String,
    edges: Vec<EdgeInfo<F>>,
    /// Outgoing arcs `(arc, head)` of each vertex.
    neighs: Vec<Vec<(usize, usize)>>,
    /// Total capacity of the edges leaving each vertex.
    out_cap: Vec<F>,
    residual: Vec<F>,
    flow: Vec<F>,
    state: State<F>,
}

impl<F> FlowNetwork<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a new network with `vertex_count` vertices and no edges.
    ///
    /// The name is only used for reporting. Fails with
    /// `Error::TooManyVertices` if the vertex lists cannot be allocated.
    pub fn new<S: Into<String>>(name: S, vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::EmptyNetwork);
        }

        let mut neighs = Vec::new();
        let mut out_cap = Vec::new();
        neighs
            .try_reserve_exact(vertex_count)
            .map_err(|_| Error::TooManyVertices(vertex_count))?;
        out_cap
            .try_reserve_exact(vertex_count)
            .map_err(|_| Error::TooManyVertices(vertex_count))?;
        neighs.resize(vertex_count, vec![]);
        out_cap.resize(vertex_count, F::zero());

        Ok(FlowNetwork {
            name: name.into(),
            edges: vec![],
            neighs,
            out_cap,
            residual: vec![],
            flow: vec![],
            state: State::Building,
        })
    }

    /// Return the name of the network.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.neighs.len()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return the current solution state.
    pub fn state(&self) -> State<F> {
        self.state
    }

    /// Return `true` if the residual graph belongs to a maximum flow.
    pub fn is_solved(&self) -> bool {
        matches!(self.state, State::Solved { .. })
    }

    /// Return the value of the maximum flow if it has been computed.
    pub fn value(&self) -> Option<F> {
        match self.state {
            State::Solved { value, .. } => Some(value),
            State::Building => None,
        }
    }

    pub(crate) fn check_vertex(&self, u: usize) -> Result<()> {
        if u < self.num_vertices() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex: u,
                count: self.num_vertices(),
            })
        }
    }

    /// Return source, sink and capacity of edge `e`.
    ///
    /// # Panics
    ///
    /// If `e` is not a valid edge index.
    pub fn edge(&self, e: usize) -> (usize, usize, F) {
        let info = &self.edges[e];
        (info.src, info.snk, info.capacity)
    }

    /// Return an iterator over all edges as `(src, snk, capacity)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, F)> + '_ {
        self.edges.iter().map(|e| (e.src, e.snk, e.capacity))
    }

    /// Return the capacity of edge `e`.
    ///
    /// # Panics
    ///
    /// If `e` is not a valid edge index.
    pub fn capacity(&self, e: usize) -> F {
        self.edges[e].capacity
    }

    /// Return the flow on edge `e` routed by the latest max-flow computation.
    pub fn flow(&self, e: usize) -> F {
        self.flow[e]
    }

    /// Return the tail of an arc.
    pub fn arc_src(&self, a: usize) -> usize {
        let info = &self.edges[a >> 1];
        if a & 1 == 0 {
            info.src
        } else {
            info.snk
        }
    }

    /// Return the head of an arc.
    pub fn arc_snk(&self, a: usize) -> usize {
        let info = &self.edges[a >> 1];
        if a & 1 == 0 {
            info.snk
        } else {
            info.src
        }
    }

    /// Return the outgoing arcs of `u` in the residual graph.
    ///
    /// The iterator yields pairs `(arc, head)` and contains forward arcs of
    /// edges leaving `u` as well as reverse arcs of edges entering `u`.
    pub fn outarcs(&self, u: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighs[u].iter().cloned()
    }

    /// Return the residual capacity of an arc.
    pub fn residual_arc(&self, a: usize) -> F {
        self.residual[a]
    }

    /// Return the total residual capacity of all arcs from `u` to `v`.
    pub fn residual(&self, u: usize, v: usize) -> F {
        let mut r = F::zero();
        for &(a, w) in &self.neighs[u] {
            if w == v {
                r += self.residual[a];
            }
        }
        r
    }

    /// Return the residual capacities as a dense `n x n` matrix.
    pub fn residual_matrix(&self) -> Vec<Vec<F>> {
        let n = self.num_vertices();
        let mut matrix = vec![vec![F::zero(); n]; n];
        for (u, row) in matrix.iter_mut().enumerate() {
            for &(a, v) in &self.neighs[u] {
                row[v] += self.residual[a];
            }
        }
        matrix
    }

    /// Reset the residual graph to the edge capacities.
    ///
    /// The flow recorded on the edges is not changed, but the network is no
    /// longer considered solved because the residual graph does not belong
    /// to that flow anymore.
    pub fn fill_residual_graph(&mut self) {
        for (e, info) in self.edges.iter().enumerate() {
            self.residual[e << 1] = info.capacity;
            self.residual[(e << 1) | 1] = F::zero();
        }
        self.state = State::Building;
    }

    /// Push `df` units along arc `a` of the residual graph.
    fn push(&mut self, a: usize, df: F) {
        debug_assert!(self.residual[a] >= df);
        self.residual[a] -= df;
        self.residual[a ^ 1] += df;
        if a & 1 == 0 {
            self.flow[a >> 1] += df;
        } else {
            self.flow[a >> 1] -= df;
        }
    }

    /// Return a printable view of the residual matrix.
    pub fn display_residual_graph(&self) -> ResidualGraph<'_, F> {
        ResidualGraph { net: self }
    }
}

impl<F> FlowNetwork<F>
where
    F: NumAssign + Ord + Copy + CheckedAdd,
{
    /// Add an edge from `src` to `snk` with the given capacity.
    ///
    /// Returns the index of the new edge. The edge gets a reverse arc with
    /// residual capacity 0 so that flow on it can be cancelled later. If one
    /// of the endpoints does not exist or the capacity is negative, the
    /// network is not changed.
    ///
    /// The total capacity of the edges leaving `src` and the total capacity
    /// of all edges between `src` and `snk` (in both directions) must be
    /// representable in `F`, otherwise `Error::Overflow` is returned. These
    /// sums bound the flow value, the entries of the residual matrix and the
    /// capacity of a minimum cut, so no later computation can overflow.
    ///
    /// Adding an edge invalidates a previously computed flow.
    pub fn add_edge(&mut self, src: usize, snk: usize, capacity: F) -> Result<usize> {
        self.check_vertex(src)?;
        self.check_vertex(snk)?;
        if capacity < F::zero() {
            return Err(Error::NegativeCapacity);
        }

        let out_cap = self.out_cap[src]
            .checked_add(&capacity)
            .ok_or(Error::Overflow { vertex: src })?;
        // both arcs of a loop start at `src`, count it only once
        let mut pair_cap = capacity;
        for &(a, v) in &self.neighs[src] {
            if v == snk && (src != snk || a & 1 == 0) {
                pair_cap = pair_cap
                    .checked_add(&self.edges[a >> 1].capacity)
                    .ok_or(Error::Overflow { vertex: src })?;
            }
        }

        let e = self.edges.len();
        self.edges.push(EdgeInfo { src, snk, capacity });
        self.neighs[src].push((e << 1, snk));
        self.neighs[snk].push(((e << 1) | 1, src));
        self.out_cap[src] = out_cap;
        self.residual.push(capacity);
        self.residual.push(F::zero());
        self.flow.push(F::zero());
        self.state = State::Building;

        Ok(e)
    }
}

impl<F> fmt::Display for FlowNetwork<F>
where
    F: NumAssign + Ord + Copy + fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "The Graph {}", self.name)?;
        for (u, neighs) in self.neighs.iter().enumerate() {
            write!(fmt, "{}:", u)?;
            for &(a, v) in neighs.iter().filter(|&&(a, _)| a & 1 == 0) {
                write!(fmt, " {}({})", v, self.capacity(a >> 1))?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}

/// Printable residual matrix of a network.
///
/// Each row of the matrix is written on its own line, entries are separated
/// by a single space.
pub struct ResidualGraph<'a, F> {
    net: &'a FlowNetwork<F>,
}

impl<'a, F> fmt::Display for ResidualGraph<'a, F>
where
    F: NumAssign + Ord + Copy + fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for row in self.net.residual_matrix() {
            let mut first = true;
            for r in row {
                if !first {
                    write!(fmt, " ")?;
                }
                write!(fmt, "{}", r)?;
                first = false;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
