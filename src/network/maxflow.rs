// Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! # Example
//!
//! ```
//! use rs_flownet::FlowNetwork;
//!
//! //      a---2-->b
//! //     @|\      ^\
//! //    / | \     | 4
//! //   5  |  \    |  \
//! //  /   |   |   |   @
//! // s    1   1   2    t
//! //  \   |   |   |   @
//! //   5  |    \  |  /
//! //    \ |     \ | 5
//! //     @v      @|/
//! //      c---2-->d
//! let (s, a, b, c, d, t) = (0, 1, 2, 3, 4, 5);
//! let mut net = FlowNetwork::new("example", 6).unwrap();
//! for &(u, v, cap) in &[
//!     (s, a, 5), (s, c, 5), (a, b, 2), (a, c, 1), (a, d, 1),
//!     (c, d, 2), (d, b, 2), (b, t, 4), (d, t, 5),
//! ] {
//!     net.add_edge(u, v, cap).unwrap();
//! }
//!
//! let flow = net.find_max_flow(s, t, false).unwrap();
//! assert_eq!(flow.value, 5);
//! assert!(flow.flows.iter().all(|f| f.flow >= 0 && f.flow <= net.capacity(f.edge)));
//! assert!((0..6).filter(|&u| u != s && u != t).all(|u| {
//!     flow.flows.iter().filter(|f| f.src == u).map(|f| f.flow).sum::<i32>() ==
//!     flow.flows.iter().filter(|f| f.snk == u).map(|f| f.flow).sum::<i32>()
//! }));
//!
//! let mincut = net.find_min_cut(s).unwrap();
//! assert_eq!(mincut.source_side, vec![s, a, c]);
//! assert_eq!(mincut.capacity(), 5);
//! ```

use super::{FlowNetwork, State};
use crate::error::{Error, Result};
use crate::num::traits::{CheckedAdd, NumAssign};
use crate::search::AugmentingPathFinder;

use log::{debug, info};
#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
use std::cmp::min;
use std::fmt;

/// One augmentation of the Edmonds-Karp algorithm.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath<F> {
    /// The amount of flow sent along the path.
    pub amount: F,
    /// The vertices of the path from source to sink.
    pub vertices: Vec<usize>,
}

/// The flow on a single edge.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeFlow<F> {
    pub edge: usize,
    pub src: usize,
    pub snk: usize,
    pub flow: F,
}

/// The result of a maximum flow computation.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxFlow<F> {
    /// The flow value.
    pub value: F,
    /// The augmenting paths in the order they have been used.
    ///
    /// This list is only filled if the computation has been asked to report
    /// its paths.
    pub paths: Vec<AugmentingPath<F>>,
    /// The flow on every edge of the network, ordered by edge index.
    pub flows: Vec<EdgeFlow<F>>,
}

impl<F> FlowNetwork<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Compute a maximum flow from `src` to `snk`.
    ///
    /// The residual graph is rebuilt from the edge capacities before the
    /// computation starts, so the method may be called again after the
    /// network has been solved. Afterwards the residual graph is the residual
    /// graph of the maximum flow and can be used to extract a minimum cut with
    /// [`FlowNetwork::find_min_cut`].
    ///
    /// If `report` is `true`, each augmenting path is stored in the result.
    pub fn find_max_flow(&mut self, src: usize, snk: usize, report: bool) -> Result<MaxFlow<F>> {
        self.check_vertex(src)?;
        self.check_vertex(snk)?;
        if src == snk {
            return Err(Error::SourceIsSink(src));
        }

        // initialize network flow
        self.fill_residual_graph();
        for flw in self.flow.iter_mut() {
            *flw = F::zero();
        }

        let mut value = F::zero();
        let mut paths = vec![];
        let mut finder = AugmentingPathFinder::new();
        let mut path = Vec::with_capacity(self.num_vertices());
        let mut naugment = 0;

        while finder.find(self, src, snk) {
            path.clear();
            path.extend(finder.path(snk).map(|(a, _)| a));
            debug_assert!(!path.is_empty());

            // compute augmentation value
            let mut df = self.residual[path[0]];
            for &a in &path[1..] {
                df = min(df, self.residual[a]);
            }

            debug_assert!(!df.is_zero());

            // now augment the flow
            for &a in &path {
                self.push(a, df);
            }

            value += df;
            naugment += 1;
            debug!("augmentation {} along {} arcs", naugment, path.len());

            if report {
                let mut vertices: Vec<_> = path.iter().rev().map(|&a| self.arc_src(a)).collect();
                vertices.push(snk);
                info!("augmenting path: {:?}", vertices);
                paths.push(AugmentingPath { amount: df, vertices });
            }
        }

        info!(
            "max flow in '{}' from {} to {} found after {} augmentations",
            self.name, src, snk, naugment
        );
        self.state = State::Solved { src, snk, value };

        Ok(MaxFlow {
            value,
            paths,
            flows: self
                .edges
                .iter()
                .enumerate()
                .map(|(e, info)| EdgeFlow {
                    edge: e,
                    src: info.src,
                    snk: info.snk,
                    flow: self.flow[e],
                })
                .collect(),
        })
    }
}

impl<F> fmt::Display for MaxFlow<F>
where
    F: NumAssign + Ord + Copy + fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for path in &self.paths {
            write!(fmt, "Flow {}:", path.amount)?;
            for v in &path.vertices {
                write!(fmt, " {}", v)?;
            }
            writeln!(fmt)?;
        }
        for f in self.flows.iter().filter(|f| f.flow > F::zero()) {
            writeln!(fmt, "Edge({}, {}) transports {} items", f.src, f.snk, f.flow)?;
        }
        Ok(())
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem on a network with `n` vertices
/// from the source `src` to the sink `snk`. The edges are given as triples
/// `(src, snk, capacity)`.
///
/// The function returns the flow value, the flow on each edge and the
/// vertices on the source side of a minimal cut.
///
/// # Example
///
/// ```
/// use rs_flownet::edmondskarp;
///
/// let (value, flow, mincut) =
///     edmondskarp(3, 0, 2, vec![(0, 1, 4), (1, 2, 3), (0, 2, 1)]).unwrap();
/// assert_eq!(value, 4);
/// assert_eq!(flow, vec![3, 3, 1]);
/// assert_eq!(mincut, vec![0, 1]);
/// ```
pub fn edmondskarp<F, I>(n: usize, src: usize, snk: usize, edges: I) -> Result<(F, Vec<F>, Vec<usize>)>
where
    F: NumAssign + Ord + Copy + CheckedAdd,
    I: IntoIterator<Item = (usize, usize, F)>,
{
    let mut net = FlowNetwork::new("edmondskarp", n)?;
    for (u, v, cap) in edges {
        net.add_edge(u, v, cap)?;
    }
    let maxflow = net.find_max_flow(src, snk, false)?;
    let mincut = net.find_min_cut(src)?;
    Ok((
        maxflow.value,
        maxflow.flows.into_iter().map(|f| f.flow).collect(),
        mincut.source_side,
    ))
}
